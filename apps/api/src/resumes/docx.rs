//! DOCX text reader. A .docx file is a ZIP archive whose main part,
//! `word/document.xml`, holds the paragraph sequence; the visible text lives
//! in `w:t` runs. Paragraph texts are joined with `\n` in document order.

use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Reads the full paragraph text of a DOCX document from raw bytes.
pub fn read_document_text(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).context("not a DOCX archive")?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .context("archive has no word/document.xml")?
        .read_to_string(&mut xml)
        .context("word/document.xml is not valid UTF-8")?;

    let paragraphs = paragraphs_from_xml(&xml)?;
    Ok(paragraphs.join("\n"))
}

/// Streams the document XML, collecting the text runs of each paragraph.
/// Runs within a paragraph concatenate; a paragraph closes on `</w:p>`.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event().context("malformed document XML")? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                current.push_str(&t.unescape().context("invalid text escape")?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Builds a minimal in-memory .docx with one text run per paragraph.
#[cfg(test)]
pub(crate) fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::Write;
    use zip::write::FileOptions;

    let mut body = String::new();
    for p in paragraphs {
        body.push_str("<w:p><w:r><w:t xml:space=\"preserve\">");
        body.push_str(p);
        body.push_str("</w:t></w:r></w:p>");
    }
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_join_with_newlines_in_document_order() {
        let bytes = docx_fixture(&["Jane Doe", "Python developer", "SQL and Docker"]);
        let text = read_document_text(&bytes).unwrap();
        assert_eq!(text, "Jane Doe\nPython developer\nSQL and Docker");
    }

    #[test]
    fn test_empty_paragraphs_become_empty_lines() {
        let bytes = docx_fixture(&["Summary", "", "Experience"]);
        let text = read_document_text(&bytes).unwrap();
        assert_eq!(text, "Summary\n\nExperience");
    }

    #[test]
    fn test_runs_within_a_paragraph_concatenate() {
        let xml = "<w:document xmlns:w=\"ns\"><w:body>\
                   <w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p>\
                   </w:body></w:document>";
        assert_eq!(paragraphs_from_xml(xml).unwrap(), vec!["Hello world"]);
    }

    #[test]
    fn test_xml_entities_are_unescaped() {
        let xml = "<w:document xmlns:w=\"ns\"><w:body>\
                   <w:p><w:r><w:t>C &amp; C++ &lt;dev&gt;</w:t></w:r></w:p>\
                   </w:body></w:document>";
        assert_eq!(paragraphs_from_xml(xml).unwrap(), vec!["C & C++ <dev>"]);
    }

    #[test]
    fn test_non_zip_bytes_error() {
        assert!(read_document_text(b"plain text, not an archive").is_err());
    }

    #[test]
    fn test_zip_without_document_part_errors() {
        use std::io::Write;
        use zip::write::FileOptions;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file("unrelated.txt", options).unwrap();
        writer.write_all(b"nothing").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(read_document_text(&bytes).is_err());
    }
}
