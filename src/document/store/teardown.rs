use super::DocumentStore;

impl DocumentStore {
    /// Release the current document and its handle.
    pub fn teardown(&mut self) {
        self.release_current();
    }
}

impl Drop for DocumentStore {
    fn drop(&mut self) {
        self.teardown();
    }
}
