use std::io::{self, Cursor, Read};

use zip::{result::ZipError, ZipArchive};

use super::{DocxConverter, DocxError, DOCUMENT_PART, MAX_DOCUMENT_XML_BYTES};

impl DocxConverter {
    pub(super) fn read_document_xml(bytes: &[u8]) -> Result<String, DocxError> {
        Self::read_document_xml_within(bytes, MAX_DOCUMENT_XML_BYTES)
    }

    /// The declared size is checked first, then the read itself is capped,
    /// since a crafted archive can understate what it inflates to.
    fn read_document_xml_within(bytes: &[u8], limit: u64) -> Result<String, DocxError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let part = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
            ZipError::FileNotFound => DocxError::MissingPart(DOCUMENT_PART),
            other => DocxError::Archive(other),
        })?;
        if part.size() > limit {
            return Err(DocxError::TooLarge { limit });
        }

        let mut xml = Vec::new();
        part.take(limit + 1).read_to_end(&mut xml)?;
        if xml.len() as u64 > limit {
            return Err(DocxError::TooLarge { limit });
        }
        String::from_utf8(xml).map_err(|e| DocxError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::docx::test_support::{docx_with_body, zip_with};

    #[test]
    fn zip_without_document_part_is_not_docx() {
        let bytes = zip_with(&[("mimetype", "application/epub+zip")]);
        let err = DocxConverter::read_document_xml(&bytes).unwrap_err();
        assert!(matches!(err, DocxError::MissingPart(DOCUMENT_PART)));
    }

    #[test]
    fn inflated_part_over_the_limit_is_refused() {
        // Highly repetitive text compresses to a small fraction of its size.
        let body = format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", "a".repeat(64 * 1024));
        let bytes = docx_with_body(&body);
        assert!((bytes.len() as u64) < 4 * 1024);

        let err = DocxConverter::read_document_xml_within(&bytes, 16 * 1024).unwrap_err();
        assert!(matches!(err, DocxError::TooLarge { limit: 16384 }));

        let xml = DocxConverter::read_document_xml_within(&bytes, 128 * 1024).unwrap();
        assert!(xml.len() > 64 * 1024);
    }

    #[test]
    fn default_ceiling_is_a_multiple_of_the_upload_limit() {
        assert!(MAX_DOCUMENT_XML_BYTES > crate::document::MAX_UPLOAD_BYTES);
        let bytes = docx_with_body("<w:p><w:r><w:t>small</w:t></w:r></w:p>");
        assert!(DocxConverter::read_document_xml(&bytes).unwrap().contains("small"));
    }
}
