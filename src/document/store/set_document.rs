use crate::document::Document;
use crate::log_info;

use super::{DocumentStore, Replacement};

impl DocumentStore {
    /// Make `document` current. The previous document's resource handle is
    /// revoked before the new one is assigned.
    pub fn set_document(&mut self, document: Document) -> Replacement {
        if self.current.as_ref().map(|d| d.id) == Some(document.id) {
            return Replacement::Unchanged;
        }

        self.release_current();
        log_info!("Showing {} '{}' ({})", document.kind(), document.title, document.size_label);
        self.current = Some(document);
        Replacement::Installed
    }

    /// Drop the current document and revoke its handle, if any.
    pub(super) fn release_current(&mut self) {
        if let Some(previous) = self.current.take() {
            if let Some(handle) = previous.body.resource_handle() {
                self.blobs.revoke(handle);
            }
        }
    }
}
