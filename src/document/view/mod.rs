// src/document/view/mod.rs

//! Presentation branch for the document pane. [`select_view`] is a pure
//! function of the current document and the zoom level; the terminal UI
//! only draws what it returns.

mod lines;
mod markup;
mod page_width;
mod select;
mod zoom;

pub use lines::{LineStyle, RenderedLine};
pub use markup::{looks_like_markup, parse_blocks, Block, BlockKind};
pub use page_width::{page_width, MAX_PAGE_COLUMNS};
pub use select::select_view;
pub use zoom::Zoom;

use super::DocumentKind;

pub const MIN_ZOOM_PERCENT: u16 = 50;
pub const MAX_ZOOM_PERCENT: u16 = 200;
pub const DEFAULT_ZOOM_PERCENT: u16 = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentView {
    /// Nothing uploaded yet.
    Empty,
    Loading {
        kind: DocumentKind,
        message: &'static str,
    },
    /// Decode or engine fault, shown inside the document pane only.
    Failed { title: String, message: String },
    Pdf {
        title: String,
        page_count: u32,
        text_layer: String,
        scale: f32,
    },
    RichText {
        title: String,
        blocks: Vec<Block>,
        warnings: Vec<String>,
    },
    Preformatted { title: String, text: String },
}

impl DocumentView {
    pub fn title(&self) -> Option<&str> {
        match self {
            DocumentView::Empty | DocumentView::Loading { .. } => None,
            DocumentView::Failed { title, .. }
            | DocumentView::Pdf { title, .. }
            | DocumentView::RichText { title, .. }
            | DocumentView::Preformatted { title, .. } => Some(title),
        }
    }
}
