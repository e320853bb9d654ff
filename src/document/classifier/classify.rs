use crate::document::DocumentKind;
use crate::log_debug;

use super::{FileClassifier, FileDescriptor, Rejection};

impl FileClassifier {
    /// Decide the document kind for an upload, or say why it is refused.
    ///
    /// The size ceiling is checked first so an oversized file is refused
    /// whatever its type.
    pub fn classify(&self, file: &FileDescriptor) -> Result<DocumentKind, Rejection> {
        if file.size > self.max_bytes {
            return Err(Rejection::TooLarge {
                name: file.name.clone(),
                size: file.size,
                limit: self.max_bytes,
            });
        }

        let extension = Self::extension_of(&file.name);
        let mime = file.mime.as_deref().map(str::to_lowercase);

        let kind = match (extension.as_str(), mime.as_deref()) {
            ("pdf", _) => DocumentKind::Pdf,
            ("docx", _) => DocumentKind::Docx,
            ("txt", _) => DocumentKind::Txt,
            ("doc", _) => {
                return Err(Rejection::LegacyDoc { name: file.name.clone() });
            }
            (_, Some("application/pdf")) => DocumentKind::Pdf,
            (_, Some("text/plain")) => DocumentKind::Txt,
            _ => {
                return Err(Rejection::Unsupported {
                    name: file.name.clone(),
                    extension: if extension.is_empty() {
                        mime.unwrap_or_else(|| "unknown".to_string())
                    } else {
                        extension
                    },
                });
            }
        };

        log_debug!("Classified {} as {}", file.name, kind);
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MAX_UPLOAD_BYTES;

    fn classify(name: &str, mime: Option<&str>, size: u64) -> Result<DocumentKind, Rejection> {
        FileClassifier::new().classify(&FileDescriptor::new(name, mime, size))
    }

    #[test]
    fn supported_extensions_map_to_kinds() {
        assert_eq!(classify("paper.pdf", None, 10), Ok(DocumentKind::Pdf));
        assert_eq!(classify("essay.DOCX", None, 10), Ok(DocumentKind::Docx));
        assert_eq!(classify("notes.txt", None, 10), Ok(DocumentKind::Txt));
    }

    #[test]
    fn declared_mime_rescues_odd_extensions() {
        assert_eq!(classify("download", Some("application/pdf"), 10), Ok(DocumentKind::Pdf));
        assert_eq!(classify("scan.bin", Some("application/pdf"), 10), Ok(DocumentKind::Pdf));
        assert_eq!(classify("README", Some("text/plain"), 10), Ok(DocumentKind::Txt));
    }

    #[test]
    fn legacy_doc_gets_guidance() {
        let err = classify("thesis.doc", Some("application/msword"), 10).unwrap_err();
        assert_eq!(err, Rejection::LegacyDoc { name: "thesis.doc".to_string() });
        assert!(err.to_string().contains("convert it to .docx"));
    }

    #[test]
    fn other_types_are_unsupported() {
        for name in ["photo.png", "slides.pptx", "book.epub", "data.csv", "doc"] {
            let err = classify(name, None, 10).unwrap_err();
            assert!(matches!(err, Rejection::Unsupported { .. }), "{name} should be unsupported");
        }
    }

    #[test]
    fn oversized_is_rejected_regardless_of_type() {
        for name in ["big.pdf", "big.docx", "big.txt", "big.doc", "big.png"] {
            let err = classify(name, None, MAX_UPLOAD_BYTES + 1).unwrap_err();
            assert!(matches!(err, Rejection::TooLarge { .. }), "{name} should be too large");
        }
        assert_eq!(classify("edge.txt", None, MAX_UPLOAD_BYTES), Ok(DocumentKind::Txt));
    }
}
