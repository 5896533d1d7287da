//! Error types for the conversion core.

use std::path::PathBuf;

/// Error while loading the marked region from an animation export file.
#[derive(Debug, thiserror::Error)]
#[error("cannot read animation export {}: {source}", path.display())]
pub struct SnippetError {
    /// Path of the export file that could not be read.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// Error during document conversion.
///
/// Variants embed the offending source line so diagnostics can point at the
/// exact input that failed.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Image tag structurally present but its path is empty.
    #[error("malformed image tag on line {line:?}")]
    MalformedTag {
        /// The comment line containing the broken tag.
        line: String,
    },

    /// Animation snippet referenced from a comment could not be loaded.
    #[error("on line {line:?}: {source}")]
    Snippet {
        /// The comment line containing the animation tag.
        line: String,
        /// The snippet load failure.
        #[source]
        source: SnippetError,
    },
}
