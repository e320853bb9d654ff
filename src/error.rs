use thiserror::Error;

use crate::config::ConfigError;
use crate::document::DecodeError;

#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<&str> for StudyError {
    fn from(error: &str) -> Self {
        StudyError::Runtime(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StudyError>;
