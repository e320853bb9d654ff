use super::PdfEngineFault;

const PREFIX: &str = "Failed to load PDF: ";

/// User-facing copy for an engine fault message.
pub fn friendly_message(raw: &str) -> String {
    let detail = if raw.contains("API version") || raw.contains("Worker version") {
        "PDF worker version mismatch detected. Trying to reload..."
    } else if raw.contains("worker") {
        "PDF worker failed to load. Please refresh the page and try again."
    } else if raw.contains("Invalid PDF") {
        "The selected file is not a valid PDF document."
    } else if raw.contains("fetch") {
        "Failed to load the PDF file. Please check your internet connection."
    } else {
        raw
    };
    format!("{PREFIX}{detail}")
}

impl PdfEngineFault {
    pub fn friendly_message(&self) -> String {
        friendly_message(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PdfFaultKind;

    #[test]
    fn version_mismatch_wins_over_worker() {
        let msg = friendly_message("The API version \"3.1\" does not match the Worker version \"2.0\"");
        assert_eq!(msg, "Failed to load PDF: PDF worker version mismatch detected. Trying to reload...");
    }

    #[test]
    fn known_patterns() {
        assert_eq!(
            friendly_message("Setting up fake worker failed"),
            "Failed to load PDF: PDF worker failed to load. Please refresh the page and try again."
        );
        assert_eq!(
            friendly_message("Invalid PDF structure."),
            "Failed to load PDF: The selected file is not a valid PDF document."
        );
        assert_eq!(
            friendly_message("Failed to fetch blob:studyflow/x"),
            "Failed to load PDF: Failed to load the PDF file. Please check your internet connection."
        );
    }

    #[test]
    fn unknown_messages_pass_through() {
        let fault = PdfEngineFault::new(PdfFaultKind::InvalidDocument, "Unexpected EOF");
        assert_eq!(fault.friendly_message(), "Failed to load PDF: Unexpected EOF");
    }
}
