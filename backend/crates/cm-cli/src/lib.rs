//! cm-cli library
//!
//! Wires the gateway to the in-memory services and exposes the commands
//! behind the `clinic` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::App;
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
