use crate::document::{
    ContentFormat, DecodeState, Document, DocumentBody, DocumentKind,
};

use super::{looks_like_markup, parse_blocks, DocumentView, Zoom};

fn loading_message(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Pdf => "Loading PDF document...",
        DocumentKind::Docx => "Converting Word document...",
        DocumentKind::Txt => "Reading text file...",
    }
}

/// Choose how the document pane presents the current document.
pub fn select_view(document: Option<&Document>, zoom: Zoom) -> DocumentView {
    let Some(document) = document else {
        return DocumentView::Empty;
    };
    let kind = document.kind();
    let title = document.title.clone();

    let loading = || DocumentView::Loading { kind, message: loading_message(kind) };
    let failed = |message: &String| DocumentView::Failed {
        title: title.clone(),
        message: message.clone(),
    };

    match &document.body {
        DocumentBody::Pdf { pages, .. } => match pages {
            DecodeState::Pending => loading(),
            DecodeState::Failed(message) => failed(message),
            DecodeState::Ready(pages) => DocumentView::Pdf {
                title: title.clone(),
                page_count: pages.page_count,
                text_layer: pages.text_layer.clone(),
                scale: zoom.scale(),
            },
        },
        DocumentBody::Docx { content } => match content {
            DecodeState::Pending => loading(),
            DecodeState::Failed(message) => failed(message),
            DecodeState::Ready(content)
                if content.format == ContentFormat::Html && looks_like_markup(&content.markup) =>
            {
                DocumentView::RichText {
                    title: title.clone(),
                    blocks: parse_blocks(&content.markup),
                    warnings: content.warnings.clone(),
                }
            }
            DecodeState::Ready(content) => DocumentView::Preformatted {
                title: title.clone(),
                text: content.markup.clone(),
            },
        },
        DocumentBody::Txt { text } => match text {
            DecodeState::Pending => loading(),
            DecodeState::Failed(message) => failed(message),
            DecodeState::Ready(text) => DocumentView::Preformatted {
                title: title.clone(),
                text: text.clone(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocxContent, PdfPages, ResourceHandle};
    use crate::document::store::DocumentStore;
    use std::sync::Arc;

    fn txt(state: DecodeState<String>) -> Document {
        Document::new("notes.txt", 5, DocumentBody::Txt { text: state })
    }

    #[test]
    fn nothing_uploaded_is_empty() {
        assert_eq!(select_view(None, Zoom::default()), DocumentView::Empty);
    }

    #[test]
    fn pending_content_shows_kind_specific_loading() {
        let doc = Document::new("essay.docx", 5, DocumentBody::Docx { content: DecodeState::Pending });
        assert_eq!(
            select_view(Some(&doc), Zoom::default()),
            DocumentView::Loading { kind: DocumentKind::Docx, message: "Converting Word document..." }
        );
        assert_eq!(
            select_view(Some(&txt(DecodeState::Pending)), Zoom::default()),
            DocumentView::Loading { kind: DocumentKind::Txt, message: "Reading text file..." }
        );
    }

    #[test]
    fn failures_stay_in_the_pane() {
        let doc = txt(DecodeState::Failed("invalid utf-8".to_string()));
        assert_eq!(
            select_view(Some(&doc), Zoom::default()),
            DocumentView::Failed { title: "notes".to_string(), message: "invalid utf-8".to_string() }
        );
    }

    #[test]
    fn text_is_preformatted() {
        let doc = txt(DecodeState::Ready("hello\nworld".to_string()));
        assert_eq!(
            select_view(Some(&doc), Zoom::default()),
            DocumentView::Preformatted { title: "notes".to_string(), text: "hello\nworld".to_string() }
        );
    }

    #[test]
    fn docx_without_markup_is_preformatted() {
        let content = DocxContent {
            markup: "just words".to_string(),
            format: ContentFormat::PlainText,
            warnings: vec![],
        };
        let doc = Document::new("essay.docx", 5, DocumentBody::Docx { content: DecodeState::Ready(content) });
        assert!(matches!(select_view(Some(&doc), Zoom::default()), DocumentView::Preformatted { .. }));
    }

    #[test]
    fn ready_pdf_carries_page_count_and_scale() {
        let mut store = DocumentStore::new();
        let handle: ResourceHandle = store.create_resource_handle(Arc::from(b"%PDF-1.4".to_vec()));
        let pages = PdfPages { page_count: 12, text_layer: "page one".to_string() };
        let doc = Document::new("physics.pdf", 8, DocumentBody::Pdf { handle, pages: DecodeState::Ready(pages) });

        let view = select_view(Some(&doc), Zoom::new(150, 10));
        assert_eq!(
            view,
            DocumentView::Pdf {
                title: "physics".to_string(),
                page_count: 12,
                text_layer: "page one".to_string(),
                scale: 1.5,
            }
        );
    }
}
