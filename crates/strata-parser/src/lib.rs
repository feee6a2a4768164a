//! # strata-parser
//!
//! ast-grep-based Java indexing for strata.
//!
//! - [`index`]: parse one file into a [`SourceUnit`] (package, primary type,
//!   raw lines, flattened declaration tree)
//! - [`span`]: recover exact method text from start-only positions
//! - [`metadata`]: fields, dependencies, imports and promotable methods

pub mod error;
pub mod index;
pub mod java;
pub mod metadata;
pub mod parser;
pub mod span;
pub mod types;

pub use error::ParserError;
pub use index::{SourceUnit, SyntaxTree, index, index_source, index_with_extension};
pub use span::{SpanCursor, extract_span, to_signature};
pub use types::{DeclarationKind, DeclarationNode, FieldFact, MethodSpan, Position};
