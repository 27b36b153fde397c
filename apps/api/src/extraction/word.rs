//! Word (OOXML) extraction: paragraph text from `word/document.xml`.

use std::io::{BufReader, Cursor};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::extraction::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Returns the document's paragraphs joined with `\n`, in closing order.
///
/// Within a paragraph, text runs are concatenated, `<w:tab/>` becomes a tab and
/// `<w:br/>` / `<w:cr/>` become newlines. Paragraphs nested in text boxes or table
/// cells are emitted as their own lines; the enclosing paragraph keeps its text.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Word(format!("not an OOXML package: {e}")))?;
    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Word(format!("missing {DOCUMENT_PART}: {e}")))?;

    let mut reader = Reader::from_reader(BufReader::new(part));
    let mut buf = Vec::new();

    let mut paragraphs: Vec<String> = Vec::new();
    // Open paragraphs, innermost last.
    let mut open: Vec<String> = Vec::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"t" => in_text_run = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" => push_to(&mut open, "\t"),
                b"br" | b"cr" => push_to(&mut open, "\n"),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractionError::Word(format!("bad text run: {e}")))?;
                push_to(&mut open, &text);
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.extend(open.pop()),
                b"t" => in_text_run = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractionError::Word(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}

/// Appends to the innermost open paragraph; text outside any paragraph is dropped.
fn push_to(open: &mut [String], text: &str) {
    if let Some(p) = open.last_mut() {
        p.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn body(inner: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{inner}</w:body></w:document>"#
        )
    }

    #[test]
    fn test_paragraphs_joined_with_newline() {
        let bytes = docx(&body(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Python </w:t></w:r><w:r><w:t>and SQL</w:t></w:r></w:p>",
        ));
        assert_eq!(extract(&bytes).unwrap(), "Jane Doe\nPython and SQL");
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let bytes = docx(&body(
            "<w:p><w:r><w:t>A</w:t></w:r></w:p><w:p/><w:p></w:p><w:p><w:r><w:t>B</w:t></w:r></w:p>",
        ));
        assert_eq!(extract(&bytes).unwrap(), "A\n\n\nB");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let bytes = docx(&body(
            "<w:p><w:r><w:t>R&amp;D</w:t><w:tab/><w:t>C++</w:t><w:br/><w:t>Git</w:t></w:r></w:p>",
        ));
        assert_eq!(extract(&bytes).unwrap(), "R&D\tC++\nGit");
    }

    #[test]
    fn test_properties_text_is_ignored() {
        let bytes = docx(&body(
            "<w:p><w:pPr><w:pStyle w:val=\"Heading1\"/></w:pPr><w:r><w:t xml:space=\"preserve\"> Skills </w:t></w:r></w:p>",
        ));
        assert_eq!(extract(&bytes).unwrap(), " Skills ");
    }

    #[test]
    fn test_text_box_paragraph_keeps_enclosing_paragraph() {
        let bytes = docx(&body(
            "<w:p><w:r><w:t>Skills: Python</w:t></w:r>\
             <w:r><w:pict><w:txbxContent><w:p><w:r><w:t>Contact</w:t></w:r></w:p></w:txbxContent></w:pict></w:r>\
             <w:r><w:t> and SQL</w:t></w:r></w:p>",
        ));
        assert_eq!(extract(&bytes).unwrap(), "Contact\nSkills: Python and SQL");
    }

    #[test]
    fn test_table_cell_paragraphs_are_extracted() {
        let bytes = docx(&body(
            "<w:p><w:r><w:t>Experience</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Docker</w:t></w:r></w:p></w:tc>\
             <w:tc><w:p><w:r><w:t>Git</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
        ));
        assert_eq!(extract(&bytes).unwrap(), "Experience\nDocker\nGit");
    }

    #[test]
    fn test_not_a_zip_is_an_error() {
        assert!(matches!(extract(b"plain bytes"), Err(ExtractionError::Word(_))));
    }

    #[test]
    fn test_zip_without_document_part_is_an_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        let err = extract(&bytes).unwrap_err();
        assert!(err.to_string().contains(DOCUMENT_PART));
    }
}
