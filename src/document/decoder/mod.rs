mod decode;
mod new;
mod strategies;
mod trait_decode_strategy;

use std::collections::HashMap;

use thiserror::Error;

use crate::document::docx::DocxError;
use crate::document::DocumentKind;

pub use strategies::{DocxDecodeStrategy, TextDecodeStrategy};
pub use trait_decode_strategy::{DecodeFuture, DecodeStrategy};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("the file is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Docx(#[from] DocxError),

    #[error("no decoder is registered for {0} documents")]
    Unavailable(DocumentKind),

    #[error("decode worker failed: {0}")]
    Worker(String),
}

/// Registry of decode strategies keyed by document kind.
#[derive(Debug)]
pub struct DocumentDecoder {
    strategies: HashMap<DocumentKind, Box<dyn DecodeStrategy>>,
}
