use std::{path::Path, sync::Arc};

use crate::error::{Result, StudyError};

use super::classifier::FileDescriptor;

/// An upload whose bytes have been read into memory.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub descriptor: FileDescriptor,
    pub bytes: Arc<[u8]>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime: Option<&str>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        Self {
            descriptor: FileDescriptor::new(name, mime, bytes.len() as u64),
            bytes,
        }
    }

    /// Read a file picked from disk. Call [`FileDescriptor::from_path`] and
    /// classify first so oversized files are refused before this point.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let descriptor = FileDescriptor::from_path(path).await?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self {
            descriptor: FileDescriptor { size: bytes.len() as u64, ..descriptor },
            bytes: bytes.into(),
        })
    }
}

impl FileDescriptor {
    /// Name, guessed MIME type and size from file metadata only.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(StudyError::Runtime(format!("{} is not a file", path.display())));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mime = mime_guess::from_path(path).first_raw();

        Ok(FileDescriptor::new(name, mime, metadata.len()))
    }
}
