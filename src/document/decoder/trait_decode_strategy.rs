use std::fmt::Debug;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::document::{ContentPatch, DocumentKind};

use super::DecodeError;

pub type DecodeFuture = BoxFuture<'static, Result<ContentPatch, DecodeError>>;

pub trait DecodeStrategy: Debug + Send + Sync {
    /// Kind of document this strategy understands.
    fn kind(&self) -> DocumentKind;

    /// Turn the uploaded bytes into displayable content. Runs off the event
    /// loop; the returned future owns everything it needs.
    fn decode(&self, bytes: Arc<[u8]>) -> DecodeFuture;
}
