//! Conceptrie CLI library
//!
//! This library provides the command-line front end for the conceptrie
//! extraction core: dictionary loading, token file streaming and result
//! formatting.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
