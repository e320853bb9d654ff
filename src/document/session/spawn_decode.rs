use std::sync::Arc;

use crate::document::{pdf_engine::PdfSource, DocumentId, DocumentKind, ResourceHandle};
use crate::log_debug;

use super::{DocumentSession, PipelineEvent};

impl DocumentSession {
    /// Run the decode on its own task and report through the pipeline
    /// channel. PDFs go to the engine through their resource handle.
    pub(super) fn spawn_decode(
        &mut self,
        id: DocumentId,
        kind: DocumentKind,
        handle: Option<ResourceHandle>,
        payload: Arc<[u8]>,
    ) {
        self.decode_requests += 1;
        let events = self.events.clone();

        match (kind, handle) {
            (DocumentKind::Pdf, Some(handle)) => {
                let source = PdfSource::resolve(&self.store, &handle);
                let load = self.engine.load(source, self.pdf_scale);
                tokio::spawn(async move {
                    let result = load.await;
                    if events.send(PipelineEvent::PdfSettled { id, result }).is_err() {
                        log_debug!("Pipeline closed before PDF {} settled", id);
                    }
                });
            }
            (kind, _) => {
                let decode = self.decoder.decode(kind, payload);
                tokio::spawn(async move {
                    let result = decode.await;
                    if events.send(PipelineEvent::DecodeSettled { id, result }).is_err() {
                        log_debug!("Pipeline closed before {} settled", id);
                    }
                });
            }
        }
    }
}
