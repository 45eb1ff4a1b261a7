//! Error types for minemizer encoding.
//!
//! Encoding itself never fails on a well-formed [`Value`](crate::Value) tree: every
//! shape the header builder cannot classify degrades to a scalar column. Errors are
//! raised only at the boundaries:
//!
//! - **Configuration**: a sparsity threshold outside `[0, 1]`, an empty delimiter,
//!   or an unknown preset name
//! - **Unsupported types**: serde data that has no counterpart in the value model
//! - **Invalid input**: top-level data that is neither a record nor a list of records
//! - **I/O**: failures while writing encoded output
//!
//! ## Examples
//!
//! ```rust
//! use minemizer::{to_string, Error};
//!
//! let result = to_string(&42);
//! assert!(matches!(result, Err(Error::InvalidInput(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while resolving options or encoding data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Data that cannot be represented as a minemizer value
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Top-level data that is not a record or a sequence of records
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a configuration error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minemizer::Error;
    ///
    /// let err = Error::config("sparsity_threshold must be within [0, 1]");
    /// assert!(err.to_string().contains("Invalid configuration"));
    /// ```
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Creates an unsupported type error for data outside the value model.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates an invalid input error for top-level data that is not record-shaped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minemizer::Error;
    ///
    /// let err = Error::invalid_input("expected a record, found number");
    /// assert!(err.to_string().contains("expected a record"));
    /// ```
    pub fn invalid_input<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidInput(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
