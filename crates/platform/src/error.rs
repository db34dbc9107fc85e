//! Error types for mdg-platform

use thiserror::Error;

/// Errors from the strict registry accessors and config validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Platform is not registered: {name}")]
    Unregistered { name: String },

    #[error("Platform name is reserved for the unknown sentinel: {name}")]
    ReservedName { name: String },
}

pub type Result<T> = std::result::Result<T, PlatformError>;
