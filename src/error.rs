// src/error.rs
use jelly_view::{JellyError, Location};
use thiserror::Error;

/// A comprehensive error type for a Jelly to Groovy conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Reading the Jelly view failed: {0}")]
    Source(#[from] JellyError),

    #[error("Unsupported control tag <{tag}> at {location}")]
    UnsupportedControlTag { tag: String, location: Location },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to move the converted view into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
