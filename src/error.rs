//! Error handling for kgutils.
//!
//! Every fallible operation in the crate returns [`Result`]. The variants map
//! onto three families: invalid input (rejected before any I/O), filesystem
//! failures and transport failures. Nothing is retried; errors are handed back
//! to the caller as-is.

use std::io;
use thiserror::Error;

/// Errors that can happen when using kgutils.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Used for failures that don't fit elsewhere, such as an external
    /// command exiting with an unexpected status.
    #[error("Internal error: {0}")]
    Internal(String),

    /// An argument was rejected before any work was attempted.
    ///
    /// Returned for a zero chunk size, an empty source address, or a column
    /// number that has no letter representation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    ///
    /// Wraps failures to open, create or write files and directories.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Connection failures, HTTP error statuses and bodies that drop
    /// mid-transfer all end up here.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the HTTP middleware stack.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

impl Error {
    /// Returns `true` when the error comes from the network transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Reqwest { .. } | Error::Middleware { .. })
    }
}

/// Result type alias for operations that can fail with a kgutils error.
pub type Result<T> = std::result::Result<T, Error>;
