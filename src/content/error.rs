//! Content error types
//!
//! The loader distinguishes "no post with that slug" from "the source could
//! not be read" so callers can degrade differently for each.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading content
#[derive(Debug, Error)]
pub enum ContentError {
    /// No post exists for the requested slug
    #[error("no post found for slug '{0}'")]
    NotFound(String),

    /// The content directory could not be enumerated
    #[error("content directory {path:?} is not readable")]
    UnreadableDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file could not be read
    #[error("failed to read {path:?}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A front-matter block was present but did not deserialize
    #[error("malformed front matter: {0}")]
    MalformedFrontMatter(String),
}

impl ContentError {
    /// Whether this error means the requested entry simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}
