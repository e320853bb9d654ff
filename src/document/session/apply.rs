use crate::document::store::{ContentPatch, MergeOutcome};

use super::{DocumentSession, PipelineEvent};

impl DocumentSession {
    /// Merge a settled decode. Results for a document that is no longer
    /// current are discarded by the store.
    pub fn apply(&mut self, event: PipelineEvent) -> MergeOutcome {
        let (id, patch) = match event {
            PipelineEvent::DecodeSettled { id, result } => (
                id,
                result.unwrap_or_else(|e| ContentPatch::Failed(e.to_string())),
            ),
            PipelineEvent::PdfSettled { id, result } => (
                id,
                match result {
                    Ok(pages) => ContentPatch::PdfPages(pages),
                    Err(fault) => ContentPatch::Failed(fault.friendly_message()),
                },
            ),
        };
        self.store.update_content(id, patch)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::document::{
        classifier::FileClassifier,
        decoder::DocumentDecoder,
        pdf_engine::{PdfEngine, PdfLoadFuture, PdfSource},
        DecodeState, DocumentBody, PdfEngineFault, PdfFaultKind, PdfPages, UploadedFile,
    };

    /// Engine that answers from the first byte: `b'!'` faults, anything
    /// else is a one-page document.
    #[derive(Debug)]
    struct ScriptedEngine;

    impl PdfEngine for ScriptedEngine {
        fn load(&self, source: PdfSource, _scale: f32) -> PdfLoadFuture {
            Box::pin(async move {
                match source.bytes.as_deref() {
                    Some([b'!', ..]) => Err(PdfEngineFault::new(PdfFaultKind::InvalidDocument, "Invalid PDF structure.")),
                    Some(_) => Ok(PdfPages { page_count: 1, text_layer: "page".to_string() }),
                    None => Err(PdfEngineFault::new(PdfFaultKind::TransportFailure, "Failed to fetch")),
                }
            })
        }
    }

    fn session() -> (DocumentSession, crate::document::session::PipelineReceiver) {
        DocumentSession::with_parts(FileClassifier::new(), DocumentDecoder::new(), Arc::new(ScriptedEngine))
    }

    #[tokio::test]
    async fn engine_faults_are_stored_as_friendly_copy() {
        let (mut session, mut rx) = session();
        session.upload(UploadedFile::new("broken.pdf", None, b"!oops".to_vec())).unwrap();
        let event = rx.recv().await.unwrap();
        assert_eq!(session.apply(event), MergeOutcome::Applied);

        match &session.current().unwrap().body {
            DocumentBody::Pdf { pages: DecodeState::Failed(message), .. } => {
                assert_eq!(message, "Failed to load PDF: The selected file is not a valid PDF document.")
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[tokio::test]
    async fn replacing_a_pdf_revokes_its_handle_once() {
        let (mut session, mut rx) = session();
        session.upload(UploadedFile::new("one.pdf", None, b"%PDF-1.4".to_vec())).unwrap();
        session.upload(UploadedFile::new("two.pdf", None, b"%PDF-1.5".to_vec())).unwrap();

        assert_eq!(session.store().revocations(), 1);
        assert_eq!(session.store().live_handles(), 1);

        for _ in 0..2 {
            let event = rx.recv().await.unwrap();
            session.apply(event);
        }
        assert_eq!(session.current().unwrap().page_count(), Some(1));

        session.teardown();
        assert_eq!(session.store().revocations(), 2);
        assert_eq!(session.store().live_handles(), 0);
    }
}
