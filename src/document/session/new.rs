use std::sync::Arc;

use tokio::sync::mpsc;

use crate::document::{
    classifier::FileClassifier, decoder::DocumentDecoder, pdf_engine::LocalPdfEngine, PdfEngine,
    store::DocumentStore,
};

use super::{DocumentSession, PipelineReceiver};

impl DocumentSession {
    /// Session with the bundled decoders and the local PDF engine. Settled
    /// decodes arrive on the returned receiver and go back in via `apply`.
    pub fn new() -> (Self, PipelineReceiver) {
        Self::with_parts(
            FileClassifier::new(),
            DocumentDecoder::new(),
            Arc::new(LocalPdfEngine::new()),
        )
    }

    pub fn with_parts(
        classifier: FileClassifier,
        decoder: DocumentDecoder,
        engine: Arc<dyn PdfEngine>,
    ) -> (Self, PipelineReceiver) {
        let (events, receiver) = mpsc::unbounded_channel();
        let session = Self {
            classifier,
            decoder: Arc::new(decoder),
            engine,
            store: DocumentStore::new(),
            events,
            pdf_scale: 1.0,
            decode_requests: 0,
        };
        (session, receiver)
    }
}
