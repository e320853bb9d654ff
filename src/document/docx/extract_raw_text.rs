use quick_xml::events::Event;
use quick_xml::Reader;

use super::{ConversionResult, DocxConverter, DocxError};

impl DocxConverter {
    /// Paragraph text only, one blank line between paragraphs. End tag
    /// names are not checked, so documents the HTML path rejects for
    /// mismatched tags still yield their text.
    pub fn extract_raw_text(bytes: &[u8]) -> Result<ConversionResult, DocxError> {
        let xml = Self::read_document_xml(bytes)?;

        let mut reader = Reader::from_str(&xml);
        reader.trim_text(false);
        reader.check_end_names(false);

        let mut paragraphs: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut in_text = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"w:t" => in_text = true,
                    b"w:p" => flush(&mut paragraphs, &mut current),
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"w:tab" => current.push('\t'),
                    b"w:br" => current.push('\n'),
                    _ => {}
                },
                Event::Text(t) if in_text => current.push_str(&t.unescape()?),
                Event::End(e) => match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:p" => flush(&mut paragraphs, &mut current),
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }
        flush(&mut paragraphs, &mut current);

        Ok(ConversionResult {
            content: paragraphs.join("\n\n"),
            warnings: Vec::new(),
        })
    }
}

fn flush(paragraphs: &mut Vec<String>, current: &mut String) {
    if !current.trim().is_empty() {
        paragraphs.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::docx::test_support::docx_with_body;

    #[test]
    fn paragraphs_are_separated_by_blank_lines() {
        let bytes = docx_with_body(concat!(
            "<w:p><w:r><w:t>First</w:t></w:r></w:p>",
            "<w:p></w:p>",
            "<w:p><w:r><w:t>Sec</w:t></w:r><w:r><w:t>ond</w:t></w:r></w:p>",
        ));
        let result = DocxConverter::extract_raw_text(&bytes).unwrap();
        assert_eq!(result.content, "First\n\nSecond");
    }

    #[test]
    fn tolerates_mismatched_end_tags() {
        let bytes = docx_with_body("<w:p><w:r><w:t>Recovered</w:t></w:run></w:p>");
        let result = DocxConverter::extract_raw_text(&bytes).unwrap();
        assert_eq!(result.content, "Recovered");
    }
}
