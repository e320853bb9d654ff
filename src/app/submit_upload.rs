use std::path::PathBuf;

use crate::document::{classifier::FileDescriptor, UploadedFile};
use crate::util::string::StringUtils;
use crate::{log_info, log_warn};

use super::{App, AppMode};

impl App {
    /// Open the file at `input`. Metadata is classified before any bytes
    /// are read; every failure here is reported in the status bar.
    pub async fn submit_upload(&mut self, input: String) {
        self.mode = AppMode::Reading;
        let path = PathBuf::from(input.trim());
        if path.as_os_str().is_empty() {
            self.set_error("No file selected");
            return;
        }

        let descriptor = match FileDescriptor::from_path(&path).await {
            Ok(descriptor) => descriptor,
            Err(e) => {
                log_warn!("Cannot open {}: {}", path.display(), e);
                self.set_error(format!("Cannot open {}: {}", path.display(), e));
                return;
            }
        };

        if let Err(rejection) = self.session.classify(&descriptor) {
            log_info!("Rejected upload: {}", rejection);
            self.set_error(rejection.to_string());
            return;
        }

        let file = match UploadedFile::from_path(&path).await {
            Ok(file) => file,
            Err(e) => {
                self.set_error(format!("Cannot read {}: {}", descriptor.name, e));
                return;
            }
        };

        let size = StringUtils::size_label(file.descriptor.size);
        let name = file.descriptor.name.clone();
        match self.session.upload(file) {
            Ok(_) => {
                self.scroll = 0;
                self.popup = None;
                self.set_info(format!("Opened {} ({})", name, size));
            }
            Err(rejection) => self.set_error(rejection.to_string()),
        }
    }
}
