//! Parser error types for strata-parser.

use std::path::PathBuf;

/// Errors that can occur while indexing a source file or recovering spans from it.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {}: {message}", path.display())]
    ParseFailed { path: PathBuf, message: String },

    #[error("Not a Java source file: {}", .0.display())]
    UnsupportedSource(PathBuf),

    /// Spans within one type must be requested top to bottom.
    #[error(
        "Method '{method}' at line {line} requested after a method starting at line {previous}"
    )]
    OutOfOrder {
        method: String,
        line: usize,
        previous: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
