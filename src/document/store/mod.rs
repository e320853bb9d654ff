// src/document/store/mod.rs

//! Single source of truth for the document on screen.

mod blob_registry;
mod set_document;
mod teardown;
mod update_content;

use std::sync::Arc;

pub use blob_registry::ResourceHandle;
use blob_registry::BlobRegistry;

use super::{Document, DocxContent, PdfPages};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    Installed,
    /// The document was already current; nothing changed.
    Unchanged,
}

/// A decode result to merge into the current document.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPatch {
    Text(String),
    Docx(DocxContent),
    PdfPages(PdfPages),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The result belongs to a document that is no longer current.
    Stale,
    /// The patch does not fit the current document's kind.
    KindMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Applied,
    Discarded(DiscardReason),
}

#[derive(Debug, Default)]
pub struct DocumentStore {
    current: Option<Document>,
    blobs: BlobRegistry,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Document> {
        self.current.as_ref()
    }

    pub fn create_resource_handle(&mut self, bytes: Arc<[u8]>) -> ResourceHandle {
        self.blobs.create(bytes)
    }

    /// Read-only access for the renderer and the PDF engine.
    pub fn resolve(&self, handle: &ResourceHandle) -> Option<Arc<[u8]>> {
        self.blobs.resolve(handle)
    }

    pub fn live_handles(&self) -> usize {
        self.blobs.live_count()
    }

    pub fn revocations(&self) -> usize {
        self.blobs.revocations()
    }
}
