pub mod commands;
pub mod query;
pub mod scan;
pub mod serve;

pub use commands::{Cli, Commands};
