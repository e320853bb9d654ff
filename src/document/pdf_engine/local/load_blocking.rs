use std::panic::{self, AssertUnwindSafe};

use pdf::file::FileOptions;

use crate::document::pdf_engine::{PdfEngineFault, PdfFaultKind, PdfPages};
use crate::log_warn;

use super::LocalPdfEngine;

impl LocalPdfEngine {
    pub(super) fn load_blocking(bytes: &[u8]) -> Result<PdfPages, PdfEngineFault> {
        Self::read_header(bytes)?;

        let file = FileOptions::cached().load(bytes.to_vec()).map_err(|e| {
            PdfEngineFault::new(PdfFaultKind::InvalidDocument, format!("Invalid PDF structure: {}", e))
        })?;
        let page_count = file.num_pages();

        // A missing text layer does not make the document unreadable.
        let text_layer = match panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        })) {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                log_warn!("No text layer extracted: {}", e);
                String::new()
            }
            Err(_) => {
                log_warn!("Text extraction panicked; showing pages without text");
                String::new()
            }
        };

        Ok(PdfPages { page_count, text_layer })
    }
}
