// src/document/docx/mod.rs

//! Word (.docx) conversion. A .docx file is a zip container; the body lives
//! in `word/document.xml` as WordprocessingML.
//!
//! Two entry points mirror what the viewer needs: [`DocxConverter::convert_to_html`]
//! keeps headings, lists, emphasis and tables; [`DocxConverter::extract_raw_text`]
//! only keeps paragraph text and tolerates markup the HTML path refuses.

mod convert_to_html;
mod extract_raw_text;
mod read_document_xml;

use thiserror::Error;

pub const DOCUMENT_PART: &str = "word/document.xml";

/// Ceiling on the inflated size of [`DOCUMENT_PART`]. Uploads are capped
/// compressed, so this bounds what a small archive can expand to.
pub const MAX_DOCUMENT_XML_BYTES: u64 = 8 * crate::document::MAX_UPLOAD_BYTES;

#[derive(Error, Debug)]
pub enum DocxError {
    #[error("not a readable .docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("the archive has no {0}; it is not a Word document")]
    MissingPart(&'static str),

    #[error("word/document.xml expands past {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to read document part: {0}")]
    Io(#[from] std::io::Error),
}

/// Converted content plus non-fatal conversion messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub content: String,
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct DocxConverter;

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{Cursor, Write};

    use zip::{write::SimpleFileOptions, ZipWriter};

    use super::DOCUMENT_PART;

    /// Minimal .docx whose body is `body` (WordprocessingML, `w:` prefix).
    pub fn docx_with_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );
        zip_with(&[(DOCUMENT_PART, xml.as_str())])
    }

    pub fn zip_with(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }
}
