//! Structural facts projected from an indexed type.

use crate::index::SyntaxTree;
use crate::java::base_type_name;
use crate::types::{DeclarationKind, DeclarationNode, FieldFact};

/// Typed fields declared directly in `class`, in source order.
#[must_use]
pub fn fields(tree: &SyntaxTree, class: &DeclarationNode) -> Vec<FieldFact> {
    tree.members_of(class)
        .filter(|member| member.kind == DeclarationKind::Field)
        .filter_map(|field| {
            let type_name = base_type_name(field.type_name.as_deref()?);
            (!type_name.is_empty()).then(|| FieldFact::new(type_name, field.name.clone()))
        })
        .collect()
}

/// Every typed field of `class`, read as an injected collaborator.
#[must_use]
pub fn dependencies(tree: &SyntaxTree, class: &DeclarationNode) -> Vec<FieldFact> {
    fields(tree, class)
}

/// Import paths in declaration order, duplicates kept.
#[must_use]
pub fn imports(tree: &SyntaxTree) -> Vec<String> {
    tree.imports.clone()
}

/// Whether the modifier set is exactly `{public}`.
#[must_use]
pub fn is_promotable(method: &DeclarationNode) -> bool {
    method.kind == DeclarationKind::Method
        && method.modifiers.len() == 1
        && method.has_modifier("public")
}
