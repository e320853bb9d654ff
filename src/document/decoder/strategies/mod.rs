mod docx;
mod text;

pub use docx::DocxDecodeStrategy;
pub use text::TextDecodeStrategy;
