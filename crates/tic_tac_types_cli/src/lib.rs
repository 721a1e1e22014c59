//! Command-line front-end for `tic_tac_types`.
//!
//! The binary parses arguments with [`Cli`], merges them over an
//! [`AppConfig`] read from TOML, and calls into [`commands`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;

pub mod commands;

pub use cli::{Cli, Command};
pub use config::{AppConfig, DEFAULT_CONFIG_FILE, OutputFormat};
pub use error::{ConfigError, PlayError};
