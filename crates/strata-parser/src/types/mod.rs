//! Core data types for indexed Java declarations and recovered spans.

mod declaration;
mod declaration_kind;
mod field_fact;
mod method_span;

pub use declaration::{DeclarationNode, Position};
pub use declaration_kind::DeclarationKind;
pub use field_fact::FieldFact;
pub use method_span::{MethodSpan, brace_counts};
