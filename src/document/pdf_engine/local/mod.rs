mod load_blocking;
mod read_header;

use crate::document::pdf_engine::{
    PdfEngine, PdfEngineFault, PdfFaultKind, PdfLoadFuture, PdfSource,
};
use crate::log_debug;

/// Highest PDF major version the local engine understands.
pub const SUPPORTED_MAJOR_VERSION: u8 = 2;

/// In-process engine: `pdf` for structure and page count, `pdf-extract`
/// for the text layer. Parsing runs on the blocking pool.
#[derive(Debug, Default)]
pub struct LocalPdfEngine;

impl LocalPdfEngine {
    pub fn new() -> Self {
        Self
    }
}

impl PdfEngine for LocalPdfEngine {
    fn load(&self, source: PdfSource, scale: f32) -> PdfLoadFuture {
        Box::pin(async move {
            let Some(bytes) = source.bytes else {
                return Err(PdfEngineFault::new(
                    PdfFaultKind::TransportFailure,
                    format!("Failed to fetch {}", source.handle),
                ));
            };

            log_debug!("Loading {} ({} bytes) at scale {:.2}", source.handle, bytes.len(), scale);

            tokio::task::spawn_blocking(move || Self::load_blocking(&bytes))
                .await
                .map_err(|e| {
                    PdfEngineFault::new(
                        PdfFaultKind::WorkerFailure,
                        format!("PDF worker terminated: {}", e),
                    )
                })?
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Smallest well-formed PDF with `pages` empty pages and a correct
    /// cross-reference table.
    pub fn minimal_pdf(pages: usize) -> Vec<u8> {
        let kids: Vec<String> = (0..pages).map(|i| format!("{} 0 R", i + 3)).collect();
        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages),
        ];
        for _ in 0..pages {
            objects.push(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> >>".to_string(),
            );
        }

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref_at = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_at
            )
            .as_bytes(),
        );
        out
    }
}
