use std::sync::Arc;

use crate::document::{
    decoder::{DecodeError, DecodeFuture, DecodeStrategy},
    docx::DocxConverter,
    ContentFormat, ContentPatch, DocumentKind, DocxContent,
};
use crate::log_warn;

/// Word documents: HTML first, raw text as the fallback.
#[derive(Debug)]
pub struct DocxDecodeStrategy;

impl DocxDecodeStrategy {
    /// If both conversions fail the HTML fault is returned, since it is the
    /// one that explains what is wrong with the file.
    pub fn convert(bytes: &[u8]) -> Result<DocxContent, DecodeError> {
        let html_error = match DocxConverter::convert_to_html(bytes) {
            Ok(result) => {
                return Ok(DocxContent {
                    markup: result.content,
                    format: ContentFormat::Html,
                    warnings: result.warnings,
                })
            }
            Err(e) => e,
        };

        log_warn!("DOCX to HTML conversion failed, falling back to raw text: {}", html_error);

        match DocxConverter::extract_raw_text(bytes) {
            Ok(result) => {
                let mut warnings = result.warnings;
                warnings.push(format!("Formatting was dropped: {}", html_error));
                Ok(DocxContent {
                    markup: result.content,
                    format: ContentFormat::PlainText,
                    warnings,
                })
            }
            Err(_) => Err(DecodeError::Docx(html_error)),
        }
    }
}

impl DecodeStrategy for DocxDecodeStrategy {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Docx
    }

    fn decode(&self, bytes: Arc<[u8]>) -> DecodeFuture {
        Box::pin(async move {
            let content = tokio::task::spawn_blocking(move || Self::convert(&bytes))
                .await
                .map_err(|e| DecodeError::Worker(e.to_string()))??;
            Ok(ContentPatch::Docx(content))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::docx::{test_support::docx_with_body, DocxError};

    #[test]
    fn well_formed_docx_becomes_html() {
        let bytes = docx_with_body(r#"<w:p><w:r><w:t>Hello</w:t></w:r></w:p>"#);
        let content = DocxDecodeStrategy::convert(&bytes).unwrap();
        assert_eq!(content.format, ContentFormat::Html);
        assert_eq!(content.markup, "<p>Hello</p>");
    }

    #[test]
    fn malformed_xml_falls_back_to_raw_text() {
        // Mismatched end tag: strict HTML conversion fails, raw text survives.
        let bytes = docx_with_body(r#"<w:p><w:r><w:t>Recovered</w:t></w:run></w:p>"#);
        let content = DocxDecodeStrategy::convert(&bytes).unwrap();
        assert_eq!(content.format, ContentFormat::PlainText);
        assert_eq!(content.markup, "Recovered");
        assert!(content.warnings.iter().any(|w| w.starts_with("Formatting was dropped")));
    }

    #[test]
    fn both_failing_surfaces_the_html_fault() {
        let err = DocxDecodeStrategy::convert(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, DecodeError::Docx(DocxError::Archive(_))));
    }

    #[tokio::test]
    async fn decodes_off_the_event_loop() {
        let bytes = docx_with_body(r#"<w:p><w:r><w:t>Async</w:t></w:r></w:p>"#);
        let patch = DocxDecodeStrategy.decode(Arc::from(bytes)).await.unwrap();
        assert!(matches!(patch, ContentPatch::Docx(DocxContent { format: ContentFormat::Html, .. })));
    }
}
