pub mod assembler;
pub mod formatter;

pub use assembler::assemble_report;
pub use formatter::{format_finding_markdown, format_summary};
