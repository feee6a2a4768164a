//! Java-specific tree helpers.

pub(crate) mod helpers;

pub use helpers::base_type_name;
