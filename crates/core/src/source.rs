//! Catalog source handling
//!
//! Pure helpers for the Data Source Adapter: deciding where a catalog
//! location points to and turning the fetched document into books. The
//! actual network and filesystem reads live in the shell.

use crate::book::Book;
use std::path::PathBuf;

/// Why the catalog could not be loaded
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Network response was not ok: HTTP {0}")]
    Status(u16),

    #[error("Could not read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Invalid catalog document: {0}")]
    Parse(String),
}

impl FetchError {
    /// Message shown on the error surface
    pub fn user_message(&self) -> String {
        format!("Error fetching books: {self}")
    }
}

/// Where the catalog document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(String),
    Path(PathBuf),
}

/// Classify a location string as a URL or a filesystem path
///
/// Only `http://` and `https://` are treated as URLs. Everything else,
/// including `file://`-less relative names like `books.json`, is a path.
pub fn classify_location(location: &str) -> SourceLocation {
    let trimmed = location.trim();
    let lower = trimmed.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        SourceLocation::Url(trimmed.to_string())
    } else {
        SourceLocation::Path(PathBuf::from(trimmed))
    }
}

/// Parse a catalog document: a JSON array of book objects
pub fn parse_books(body: &str) -> Result<Vec<Book>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}
