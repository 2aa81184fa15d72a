pub mod fetch;
pub mod parse;

pub use fetch::{ensure_supported_target, fetch_snapshot};
pub use parse::parse_document;
