//! Document snapshot consumed by the lint pipeline.

use std::path::{Path, PathBuf};

/// An owned snapshot of a buffer: its path and full text content.
///
/// The pipeline never mutates a document; every `lint`/`fix` call operates
/// on its own snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Creates a document snapshot.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// The document's file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document's full text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines in the document (a trailing newline does not start
    /// a new line).
    pub fn line_count(&self) -> usize {
        if self.text.is_empty() {
            0
        } else {
            self.text.lines().count()
        }
    }
}
