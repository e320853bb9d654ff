use std::collections::HashMap;

use super::{DecodeStrategy, DocumentDecoder, DocxDecodeStrategy, TextDecodeStrategy};

impl DocumentDecoder {
    pub fn new() -> Self {
        Self::empty()
            .with_strategy(Box::new(TextDecodeStrategy))
            .with_strategy(Box::new(DocxDecodeStrategy))
    }

    pub fn empty() -> Self {
        Self { strategies: HashMap::new() }
    }

    /// Register (or replace) the strategy for its kind.
    pub fn with_strategy(mut self, strategy: Box<dyn DecodeStrategy>) -> Self {
        self.strategies.insert(strategy.kind(), strategy);
        self
    }
}

impl Default for DocumentDecoder {
    fn default() -> Self {
        Self::new()
    }
}
