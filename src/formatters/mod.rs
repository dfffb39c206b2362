pub mod context_text;
pub mod json_compact;

pub use context_text::{ContextBlock, ContextFormatter};
pub use json_compact::JsonCompactFormatter;
