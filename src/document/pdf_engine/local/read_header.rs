use crate::document::pdf_engine::{PdfEngineFault, PdfFaultKind};

use super::{LocalPdfEngine, SUPPORTED_MAJOR_VERSION};

/// Readers accept the header anywhere in the first kilobyte.
const HEADER_WINDOW: usize = 1024;
const MAGIC: &[u8] = b"%PDF-";

impl LocalPdfEngine {
    /// Parse `%PDF-x.y` and reject majors this engine cannot read.
    pub(super) fn read_header(bytes: &[u8]) -> Result<(u8, u8), PdfEngineFault> {
        let window = &bytes[..bytes.len().min(HEADER_WINDOW)];
        let start = window
            .windows(MAGIC.len())
            .position(|w| w == MAGIC)
            .ok_or_else(|| invalid("missing %PDF- header"))?;

        let rest = &window[start + MAGIC.len()..];
        let digits: Vec<u8> = rest
            .iter()
            .take_while(|b| b.is_ascii_digit() || **b == b'.')
            .copied()
            .collect();
        let version = String::from_utf8_lossy(&digits).to_string();
        let (major, minor) = version
            .split_once('.')
            .and_then(|(a, b)| Some((a.parse::<u8>().ok()?, b.parse::<u8>().ok()?)))
            .ok_or_else(|| invalid("unreadable version in header"))?;

        if major > SUPPORTED_MAJOR_VERSION {
            return Err(PdfEngineFault::new(
                PdfFaultKind::VersionMismatch,
                format!(
                    "The API version \"{}.0\" does not match the Worker version \"{}.{}\"",
                    SUPPORTED_MAJOR_VERSION, major, minor
                ),
            ));
        }
        Ok((major, minor))
    }
}

fn invalid(detail: &str) -> PdfEngineFault {
    PdfEngineFault::new(
        PdfFaultKind::InvalidDocument,
        format!("Invalid PDF structure: {}", detail),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_version() {
        assert_eq!(LocalPdfEngine::read_header(b"%PDF-1.7\n%...").unwrap(), (1, 7));
        assert_eq!(LocalPdfEngine::read_header(b"junk\n%PDF-2.0\n").unwrap(), (2, 0));
    }

    #[test]
    fn future_major_is_a_version_mismatch() {
        let fault = LocalPdfEngine::read_header(b"%PDF-3.1\n").unwrap_err();
        assert_eq!(fault.kind, PdfFaultKind::VersionMismatch);
        assert!(fault.friendly_message().contains("version mismatch"));
    }

    #[test]
    fn missing_header_is_invalid() {
        let fault = LocalPdfEngine::read_header(b"PK\x03\x04").unwrap_err();
        assert_eq!(fault.kind, PdfFaultKind::InvalidDocument);
    }
}
