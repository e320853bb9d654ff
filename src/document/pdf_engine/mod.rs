// src/document/pdf_engine/mod.rs

//! Paginated PDF engine. The engine is a black box: it is given a resource
//! and a scale and reports page count plus text layer, or a fault.

mod friendly_message;
mod local;

use std::sync::Arc;

use futures::future::BoxFuture;
use thiserror::Error;

use super::{store::DocumentStore, ResourceHandle};

pub use friendly_message::friendly_message;
pub use local::LocalPdfEngine;

#[derive(Debug, Clone, PartialEq)]
pub struct PdfPages {
    pub page_count: u32,
    pub text_layer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFaultKind {
    VersionMismatch,
    InvalidDocument,
    TransportFailure,
    WorkerFailure,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PdfEngineFault {
    pub kind: PdfFaultKind,
    pub message: String,
}

impl PdfEngineFault {
    pub fn new(kind: PdfFaultKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// What the engine loads from. `bytes` is `None` when the handle no longer
/// resolves in the store.
#[derive(Debug, Clone)]
pub struct PdfSource {
    pub handle: ResourceHandle,
    pub bytes: Option<Arc<[u8]>>,
}

impl PdfSource {
    pub fn resolve(store: &DocumentStore, handle: &ResourceHandle) -> Self {
        Self {
            handle: handle.clone(),
            bytes: store.resolve(handle),
        }
    }
}

pub type PdfLoadFuture = BoxFuture<'static, Result<PdfPages, PdfEngineFault>>;

pub trait PdfEngine: std::fmt::Debug + Send + Sync {
    fn load(&self, source: PdfSource, scale: f32) -> PdfLoadFuture;
}
