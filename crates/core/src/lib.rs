//! Core types for autonex-db
//!
//! Constants, configuration and errors shared by the storage layer and the CLI.

mod constants;
mod env_config;
mod error;

pub use constants::*;
pub use env_config::DbConfig;
pub use error::*;
