use crate::document::{
    classifier::{FileDescriptor, Rejection},
    Document, DocumentBody, DocumentId, DocumentKind, UploadedFile,
};
use crate::log_info;

use super::DocumentSession;

impl DocumentSession {
    /// Validate an upload from its descriptor alone.
    pub fn classify(&self, descriptor: &FileDescriptor) -> Result<DocumentKind, Rejection> {
        self.classifier.classify(descriptor)
    }

    /// Classify, install and start decoding. A rejection leaves the current
    /// document untouched and starts nothing.
    pub fn upload(&mut self, file: UploadedFile) -> Result<DocumentId, Rejection> {
        let kind = self.classify(&file.descriptor)?;
        log_info!("Accepted {} as {}", file.descriptor.name, kind);

        let bytes = file.bytes;
        let store = &mut self.store;
        let body = DocumentBody::pending(kind, || store.create_resource_handle(bytes.clone()));
        let document = Document::new(&file.descriptor.name, file.descriptor.size, body);
        let id = document.id;

        self.present(document, bytes);
        Ok(id)
    }
}
