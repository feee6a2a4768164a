//! # strata-transform
//!
//! Restructures a flat-layer Java project into clean-architecture folders:
//!
//! - [`descriptor`]: reads `pom.xml` to find the source root and Lombok usage
//! - [`fs_ops`]: idempotent copy, rename and suffix normalization
//! - [`layout`]: which flat folders feed which layer
//! - [`pipeline`]: the ordered run over a project

pub mod descriptor;
pub mod error;
pub mod fs_ops;
pub mod layout;
pub mod pipeline;
pub mod walk;

pub use descriptor::{Dependency, ProjectDescriptor};
pub use error::TransformError;
pub use pipeline::{TransformReport, Transformer};
