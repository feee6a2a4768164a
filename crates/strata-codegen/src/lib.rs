//! # strata-codegen
//!
//! Renders use-case contracts and implementations from askama templates and
//! writes them without ever replacing an existing file.

pub mod bindings;
pub mod error;
pub mod generator;
pub mod naming;

pub use bindings::Bindings;
pub use error::CodegenError;
pub use generator::{ArtifactTemplate, GenerateOutcome, GenerationTarget, generate};
pub use naming::{UseCaseNames, use_case_names};
