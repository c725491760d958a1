//! Error types for codebox extraction

use std::path::PathBuf;

/// Errors raised while extracting code blocks from chapter documents.
///
/// Every variant aborts the run; nothing is retried or skipped.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The source directory or one of its documents could not be read
    #[error("cannot read {path:?}: {source}")]
    SourceAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A chapter document could not be parsed as markup
    #[error("chapter '{chapter}' could not be parsed: {reason}")]
    Parse { chapter: String, reason: String },

    /// A code block has no label token after its leading comment marker
    #[error(
        "chapter '{chapter}', block {ordinal}: expected a comment marker followed by a label, \
         found {found:?}"
    )]
    MalformedBlock {
        chapter: String,
        ordinal: usize,
        found: String,
    },

    /// A directory or script file could not be created, written or removed
    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two documents map to the same chapter name
    #[error("chapter '{chapter}' is provided by both {first:?} and {second:?}")]
    DuplicateChapter {
        chapter: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Cleaning the output root would delete the chapters or the site
    #[error("refusing to clean {path:?}: {reason}")]
    UnsafeClean { path: PathBuf, reason: &'static str },

    /// A chapter output directory survived from an earlier run
    #[error("output directory {path:?} already exists; rerun with clean enabled or remove it")]
    StaleOutput { path: PathBuf },
}

impl ExtractError {
    pub(crate) fn source_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
