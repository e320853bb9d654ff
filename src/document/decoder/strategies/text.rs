use std::sync::Arc;

use crate::document::{
    decoder::{DecodeError, DecodeFuture, DecodeStrategy},
    ContentPatch, DocumentKind,
};

/// Plain text: the bytes are shown exactly as uploaded.
#[derive(Debug)]
pub struct TextDecodeStrategy;

impl DecodeStrategy for TextDecodeStrategy {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Txt
    }

    fn decode(&self, bytes: Arc<[u8]>) -> DecodeFuture {
        Box::pin(async move {
            let text = String::from_utf8(bytes.to_vec())?;
            Ok(ContentPatch::Text(text))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_utf8_is_an_encoding_error() {
        let err = TextDecodeStrategy
            .decode(Arc::from(vec![0x66, 0x6f, 0xff, 0xfe]))
            .await
            .unwrap_err();
        assert!(matches!(err, DecodeError::Encoding(_)));
    }

    #[tokio::test]
    async fn crlf_is_preserved() {
        let patch = TextDecodeStrategy.decode(Arc::from(b"a\r\nb".to_vec())).await.unwrap();
        assert_eq!(patch, ContentPatch::Text("a\r\nb".to_string()));
    }
}
