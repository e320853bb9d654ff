pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod selection;
pub mod timer;
pub mod ui;
pub mod util;

pub use app::App;
pub use config::StudyConfig;
pub use error::{Result, StudyError};
