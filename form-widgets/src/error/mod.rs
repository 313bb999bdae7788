//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or rendering widgets
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A fragment file could not be read
    #[error("failed to read template '{}': {source}", .path.display())]
    ReadFailed {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// A fragment failed to parse, or rendering failed
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Style name is empty or not a single path component
    #[error("invalid style name: {0:?}")]
    InvalidStyle(String),

    /// A fragment uses the name reserved for the composed entry point
    #[error("template name {0:?} is reserved for the widget entry point")]
    ReservedName(String),

    /// A template name could not be quoted for an `extends` tag
    #[error("failed to quote template name: {0}")]
    TemplateName(#[from] serde_json::Error),

    /// Composition was asked to merge zero fragments
    #[error("cannot compose a widget from zero fragments")]
    EmptyComposition,

    /// Home directory could not be determined for XDG resolution
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// Writing the default catalog to disk failed
    #[error("failed to install template '{}': {source}", .path.display())]
    Install {
        /// The path that could not be written
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
}
