//! Command line tool for querying a layer-2 rollup.

pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types and functions
pub use commands::{balance, fee, providers, status};
pub use config::HelperConfig;
pub use errors::CliError;
