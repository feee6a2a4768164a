//! Transformer error types.

use std::path::PathBuf;

use strata_codegen::CodegenError;
use strata_parser::ParserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to read build descriptor {}: {source}", path.display())]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid build descriptor {}: {reason}", path.display())]
    DescriptorInvalid { path: PathBuf, reason: String },

    #[error("source root {} does not exist", .0.display())]
    MissingSourceRoot(PathBuf),

    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

impl TransformError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { op, path, source }
    }
}
