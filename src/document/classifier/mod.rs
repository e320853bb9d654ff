mod classify;
mod extension_of;

use thiserror::Error;

/// Uploads larger than this are rejected before anything reads them.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions offered by the upload prompt.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

/// Routine input validation failures. These are returned, never raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("{name} is {size} bytes; files over {limit} bytes are not accepted")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("{name} is a legacy .doc file; please convert it to .docx and upload again")]
    LegacyDoc { name: String },

    #[error("{name}: unsupported file type '{extension}' (accepted: .pdf, .docx, .txt)")]
    Unsupported { name: String, extension: String },
}

/// Name, declared MIME type and size of an upload, as known before its
/// bytes are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub mime: Option<String>,
    pub size: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, mime: Option<&str>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.map(str::to_string),
            size,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileClassifier {
    max_bytes: u64,
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self { max_bytes: MAX_UPLOAD_BYTES }
    }
}

impl FileClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }
}
