// src/document/session/mod.rs

//! Upload pipeline: classify, build the document, install it, decode in the
//! background and merge the result back through the store's identity guard.
//!
//! There is no cancellation. A decode for a document that is no longer
//! current still runs to completion; its result is discarded on merge.

mod apply;
mod new;
mod present;
mod spawn_decode;
mod upload;

use std::sync::Arc;

use tokio::sync::mpsc;

use super::{
    classifier::FileClassifier, decoder::DocumentDecoder, pdf_engine::PdfEngine, store::DocumentStore,
    ContentPatch, DecodeError, Document, DocumentId, PdfEngineFault, PdfPages,
};

/// A background decode or engine load has settled.
#[derive(Debug)]
pub enum PipelineEvent {
    DecodeSettled {
        id: DocumentId,
        result: Result<ContentPatch, DecodeError>,
    },
    PdfSettled {
        id: DocumentId,
        result: Result<PdfPages, PdfEngineFault>,
    },
}

impl PipelineEvent {
    pub fn id(&self) -> DocumentId {
        match self {
            PipelineEvent::DecodeSettled { id, .. } | PipelineEvent::PdfSettled { id, .. } => *id,
        }
    }
}

pub type PipelineReceiver = mpsc::UnboundedReceiver<PipelineEvent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    /// Installed and a decode was started.
    Decoding,
    /// Already current; nothing was re-decoded.
    AlreadyCurrent,
}

pub struct DocumentSession {
    classifier: FileClassifier,
    decoder: Arc<DocumentDecoder>,
    engine: Arc<dyn PdfEngine>,
    store: DocumentStore,
    events: mpsc::UnboundedSender<PipelineEvent>,
    pdf_scale: f32,
    decode_requests: usize,
}

impl std::fmt::Debug for DocumentSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSession")
            .field("current", &self.store.current().map(|d| d.id))
            .field("engine", &self.engine)
            .field("decode_requests", &self.decode_requests)
            .finish()
    }
}

impl DocumentSession {
    pub fn current(&self) -> Option<&Document> {
        self.store.current()
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn classifier(&self) -> &FileClassifier {
        &self.classifier
    }

    /// Number of decodes (including engine loads) started so far.
    pub fn decode_requests(&self) -> usize {
        self.decode_requests
    }

    /// Scale handed to the PDF engine on the next load.
    pub fn set_pdf_scale(&mut self, scale: f32) {
        self.pdf_scale = scale;
    }

    /// Release the current document and its resource handle.
    pub fn teardown(&mut self) {
        self.store.teardown();
    }
}
