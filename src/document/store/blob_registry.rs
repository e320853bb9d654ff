use std::{collections::HashMap, fmt, sync::Arc};

use uuid::Uuid;

/// In-memory object URL for an uploaded binary. Only [`DocumentStore`]
/// creates or revokes these; everyone else reads through it.
///
/// [`DocumentStore`]: super::DocumentStore
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
pub(super) struct BlobRegistry {
    live: HashMap<ResourceHandle, Arc<[u8]>>,
    revocations: usize,
}

impl BlobRegistry {
    pub(super) fn create(&mut self, bytes: Arc<[u8]>) -> ResourceHandle {
        let handle = ResourceHandle(format!("blob:studyflow/{}", Uuid::new_v4()));
        self.live.insert(handle.clone(), bytes);
        handle
    }

    pub(super) fn resolve(&self, handle: &ResourceHandle) -> Option<Arc<[u8]>> {
        self.live.get(handle).cloned()
    }

    /// Returns false for a handle that is unknown or already revoked.
    pub(super) fn revoke(&mut self, handle: &ResourceHandle) -> bool {
        if self.live.remove(handle).is_some() {
            self.revocations += 1;
            true
        } else {
            false
        }
    }

    pub(super) fn live_count(&self) -> usize {
        self.live.len()
    }

    pub(super) fn revocations(&self) -> usize {
        self.revocations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoke_is_counted_once() {
        let mut registry = BlobRegistry::default();
        let handle = registry.create(Arc::from(vec![1u8, 2, 3]));
        assert!(handle.as_str().starts_with("blob:studyflow/"));
        assert_eq!(registry.resolve(&handle).as_deref(), Some(&[1u8, 2, 3][..]));

        assert!(registry.revoke(&handle));
        assert!(!registry.revoke(&handle));
        assert_eq!(registry.revocations(), 1);
        assert!(registry.resolve(&handle).is_none());
        assert_eq!(registry.live_count(), 0);
    }
}
