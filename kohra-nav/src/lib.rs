//! Shared pieces of the kohra-nav binaries: configuration and errors.

pub mod config;
pub mod error;
