use std::sync::Arc;

use crate::document::DocumentKind;

use super::{DecodeError, DecodeFuture, DocumentDecoder};

impl DocumentDecoder {
    pub fn supports(&self, kind: DocumentKind) -> bool {
        self.strategies.contains_key(&kind)
    }

    pub fn decode(&self, kind: DocumentKind, bytes: Arc<[u8]>) -> DecodeFuture {
        match self.strategies.get(&kind) {
            Some(strategy) => strategy.decode(bytes),
            None => Box::pin(async move { Err(DecodeError::Unavailable(kind)) }),
        }
    }
}
