pub mod api;
pub mod capture;
pub mod cli;
pub mod client;
pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod render;
pub mod reporting;
