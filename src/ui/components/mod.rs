mod empty_message;
mod failure;
mod help;
mod inline_error;
mod loading;
mod status;

/// Namespace for small prebuilt widgets.
#[derive(Debug)]
pub struct UiComponent;
