// Content error types

use std::fmt;
use std::io;

/// Errors that can occur while loading content
#[derive(Debug)]
pub enum ContentError {
    /// Content file could not be read
    ReadFailed(String),
    /// Content file could not be parsed
    ParseFailed(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed(msg) => write!(f, "Failed to read content file: {}", msg),
            Self::ParseFailed(msg) => write!(f, "Failed to parse content file: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<io::Error> for ContentError {
    fn from(err: io::Error) -> Self {
        Self::ReadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseFailed(err.to_string())
    }
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;
