use std::sync::Arc;

use crate::document::{store::Replacement, Document};
use crate::log_debug;

use super::{DocumentSession, Presented};

impl DocumentSession {
    /// Install a prepared document and decode `payload` for it. Presenting
    /// the current document again changes nothing.
    pub fn present(&mut self, document: Document, payload: Arc<[u8]>) -> Presented {
        let id = document.id;
        let kind = document.kind();
        let handle = document.body.resource_handle().cloned();

        match self.store.set_document(document) {
            Replacement::Unchanged => {
                log_debug!("{} is already current; skipping decode", id);
                Presented::AlreadyCurrent
            }
            Replacement::Installed => {
                self.spawn_decode(id, kind, handle, payload);
                Presented::Decoding
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DecodeState, DocumentBody};

    #[tokio::test]
    async fn presenting_the_current_document_again_is_a_no_op() {
        let (mut session, mut rx) = DocumentSession::new();
        let payload: Arc<[u8]> = Arc::from(b"hello\nworld".to_vec());
        let document = Document::new("notes.txt", 11, DocumentBody::Txt { text: DecodeState::Pending });
        let id = document.id;

        assert_eq!(session.present(document.clone(), payload.clone()), Presented::Decoding);
        let event = rx.recv().await.unwrap();
        session.apply(event);

        assert_eq!(session.present(document, payload), Presented::AlreadyCurrent);
        assert_eq!(session.decode_requests(), 1);
        let current = session.current().unwrap();
        assert_eq!(current.id, id);
        assert_eq!(current.body, DocumentBody::Txt { text: DecodeState::Ready("hello\nworld".to_string()) });
        assert!(rx.try_recv().is_err());
    }
}
