// src/document/mod.rs

//! Document ingestion: classify an upload, decode it off the event loop,
//! keep exactly one current document and choose how to present it.

pub mod classifier;
pub mod decoder;
pub mod docx;
pub mod pdf_engine;
pub mod session;
pub mod store;
pub mod upload;
pub mod view;

mod new;

use std::fmt;

use uuid::Uuid;

pub use classifier::{FileClassifier, FileDescriptor, Rejection, MAX_UPLOAD_BYTES};
pub use decoder::{DecodeError, DecodeStrategy, DocumentDecoder};
pub use pdf_engine::{
    LocalPdfEngine, PdfEngine, PdfEngineFault, PdfFaultKind, PdfPages, PdfSource,
};
pub use session::{DocumentSession, PipelineEvent, PipelineReceiver, Presented};
pub use store::{
    ContentPatch, DiscardReason, DocumentStore, MergeOutcome, Replacement, ResourceHandle,
};
pub use upload::UploadedFile;
pub use view::{select_view, DocumentView, Zoom};

/// Opaque identity of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Txt => "TXT",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of an asynchronous decode. Content is only reachable through
/// `Ready`, so nothing can read it while it is still absent.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeState<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> DecodeState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, DecodeState::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            DecodeState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Html,
    PlainText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocxContent {
    pub markup: String,
    pub format: ContentFormat,
    pub warnings: Vec<String>,
}

/// Per-kind payload. Each variant carries exactly what its kind needs.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentBody {
    Pdf {
        handle: ResourceHandle,
        pages: DecodeState<PdfPages>,
    },
    Docx {
        content: DecodeState<DocxContent>,
    },
    Txt {
        text: DecodeState<String>,
    },
}

impl DocumentBody {
    /// A body with nothing decoded yet. `handle` is only called for PDFs.
    pub fn pending(kind: DocumentKind, handle: impl FnOnce() -> ResourceHandle) -> Self {
        match kind {
            DocumentKind::Pdf => DocumentBody::Pdf {
                handle: handle(),
                pages: DecodeState::Pending,
            },
            DocumentKind::Docx => DocumentBody::Docx { content: DecodeState::Pending },
            DocumentKind::Txt => DocumentBody::Txt { text: DecodeState::Pending },
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentBody::Pdf { .. } => DocumentKind::Pdf,
            DocumentBody::Docx { .. } => DocumentKind::Docx,
            DocumentBody::Txt { .. } => DocumentKind::Txt,
        }
    }

    pub fn resource_handle(&self) -> Option<&ResourceHandle> {
        match self {
            DocumentBody::Pdf { handle, .. } => Some(handle),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub size_label: String,
    pub body: DocumentBody,
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        self.body.kind()
    }

    /// Page count as reported by the PDF engine; never set for other kinds.
    pub fn page_count(&self) -> Option<u32> {
        match &self.body {
            DocumentBody::Pdf { pages, .. } => pages.ready().map(|p| p.page_count),
            _ => None,
        }
    }
}
