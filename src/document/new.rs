use crate::util::string::StringUtils;

use super::{Document, DocumentBody, DocumentId};

impl Document {
    pub fn new(file_name: &str, size: u64, body: DocumentBody) -> Self {
        Self {
            id: DocumentId::new(),
            title: Self::title_from_file_name(file_name),
            size_label: StringUtils::size_label(size),
            body,
        }
    }

    /// File name without its last extension.
    pub fn title_from_file_name(file_name: &str) -> String {
        match file_name.rfind('.') {
            Some(idx) if idx > 0 => file_name[..idx].to_string(),
            _ => file_name.to_string(),
        }
    }
}
