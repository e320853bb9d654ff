use crate::document::{DecodeState, DocumentBody, DocumentId};
use crate::{log_debug, log_warn};

use super::{ContentPatch, DiscardReason, DocumentStore, MergeOutcome};

impl DocumentStore {
    /// Merge a decode result into the current document, keeping its identity.
    /// Results for any other document are discarded.
    pub fn update_content(&mut self, id: DocumentId, patch: ContentPatch) -> MergeOutcome {
        let Some(document) = self.current.as_mut().filter(|d| d.id == id) else {
            log_debug!("Discarding stale decode result for {}", id);
            return MergeOutcome::Discarded(DiscardReason::Stale);
        };

        let merged = match patch {
            ContentPatch::Failed(message) => {
                log_warn!("Decode of '{}' failed: {}", document.title, message);
                match &mut document.body {
                    DocumentBody::Pdf { pages, .. } => *pages = DecodeState::Failed(message),
                    DocumentBody::Docx { content } => *content = DecodeState::Failed(message),
                    DocumentBody::Txt { text } => *text = DecodeState::Failed(message),
                }
                true
            }
            ContentPatch::Text(value) => match &mut document.body {
                DocumentBody::Txt { text } => {
                    *text = DecodeState::Ready(value);
                    true
                }
                _ => false,
            },
            ContentPatch::Docx(value) => match &mut document.body {
                DocumentBody::Docx { content } => {
                    *content = DecodeState::Ready(value);
                    true
                }
                _ => false,
            },
            ContentPatch::PdfPages(value) => match &mut document.body {
                DocumentBody::Pdf { pages, .. } => {
                    *pages = DecodeState::Ready(value);
                    true
                }
                _ => false,
            },
        };

        if merged {
            MergeOutcome::Applied
        } else {
            log_warn!("Ignoring patch that does not fit {} document {}", document.kind(), id);
            MergeOutcome::Discarded(DiscardReason::KindMismatch)
        }
    }
}
