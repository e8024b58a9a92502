//! Error types for the sales analytics engine
//!
//! This module provides a unified error handling system for all crates in
//! the workspace. It defines standard error types that can be used across
//! crate boundaries and provides consistent error conversion.

use std::fmt::Display;
use thiserror::Error;

/// Sales analytics engine error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error when the source file is missing, unreadable, or has no header line
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// Error when a row or field fails parsing or a constraint check
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when an aggregate would divide by zero
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Error when a query requires at least one record
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::DataLoad(msg) => Error::DataLoad(format!("{}: {}", context, msg)),
                Error::Validation(msg) => Error::Validation(format!("{}: {}", context, msg)),
                Error::DivisionByZero(msg) => {
                    Error::DivisionByZero(format!("{}: {}", context, msg))
                }
                Error::EmptyDataset(msg) => Error::EmptyDataset(format!("{}: {}", context, msg)),
                Error::Configuration(msg) => {
                    Error::Configuration(format!("{}: {}", context, msg))
                }
                Error::Io(e) => Error::Io(e),
                Error::Csv(e) => Error::Csv(e),
                Error::Serialization(e) => Error::Serialization(e),
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
            }
        })
    }
}

/// Convert string messages into an error
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Internal(message)
    }
}

/// Convert static string references into an error
impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Internal(message.to_string())
    }
}
