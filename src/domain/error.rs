// src/domain/error.rs
use thiserror::Error;

/// Failures surfaced by a [`NoteService`](crate::application::NoteService).
///
/// Transport failures and HTTP status failures are distinct variants so callers
/// can branch on the kind instead of the message.
#[derive(Error, Debug)]
pub enum NoteServiceError {
    #[error("Unable to connect to the notes API. Please check your internet connection and API URL.")]
    Connectivity(#[source] reqwest::Error),

    #[error("Notes API endpoint not found. Please check your API URL and ensure the notes resource exists.")]
    Configuration,

    #[error("Failed to {operation}: {status} {status_text}")]
    Request {
        operation: &'static str,
        status: u16,
        status_text: String,
    },

    #[error("Failed to {operation}: response body is not valid note JSON")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl NoteServiceError {
    /// HTTP status carried by a `Request` failure
    pub fn status(&self) -> Option<u16> {
        match self {
            NoteServiceError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failures of the local key-value storage backing persisted preferences
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access storage file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Storage file {path} is not a JSON object: {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
