pub mod finding;
pub mod scan_result;

pub use finding::*;
pub use scan_result::*;
