//! # Content Errors
//!
//! Failures raised while resolving a resource name.
//!
//! A missing local file or an unknown embedded name is not an error: those
//! resolve to `Ok(None)`.

use std::io;
use thiserror::Error;

/// Errors that can occur while opening content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Remote request failed in transport or returned a non-success status
    #[error("Remote request to {url} failed: {message}")]
    Remote { url: String, message: String },

    /// Existing local file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ContentError {
    /// Creates a remote error.
    pub fn remote(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a local I/O error.
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
