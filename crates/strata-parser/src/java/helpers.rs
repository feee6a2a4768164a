use ast_grep_core::Node;

use crate::types::Position;

const JAVA_MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "native",
    "synchronized",
    "strictfp",
    "transient",
    "volatile",
    "default",
    "sealed",
    "non-sealed",
];

fn is_annotation_kind(kind: &str) -> bool {
    kind == "annotation" || kind == "marker_annotation"
}

fn is_comment_kind(kind: &str) -> bool {
    kind == "line_comment" || kind == "block_comment"
}

fn modifiers_node<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    node.children().find(|c| c.kind().as_ref() == "modifiers")
}

pub(crate) fn to_position<D: ast_grep_core::Doc>(node: &Node<D>) -> Position {
    let pos = node.start_pos();
    Position {
        line: pos.line() + 1,
        column: pos.column(node) + 1,
    }
}

/// Keyword modifiers of a declaration, annotations dropped.
pub(crate) fn extract_modifiers<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let Some(modifiers) = modifiers_node(node) else {
        return Vec::new();
    };

    let mut text = modifiers.text().to_string();
    for annotation in extract_annotations(node) {
        text = text.replacen(&annotation, " ", 1);
    }

    text.split_whitespace()
        .filter(|token| JAVA_MODIFIERS.contains(token))
        .map(ToString::to_string)
        .collect()
}

pub(crate) fn extract_annotations<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    let Some(modifiers) = modifiers_node(node) else {
        return Vec::new();
    };

    modifiers
        .children()
        .filter(|child| is_annotation_kind(child.kind().as_ref()))
        .map(|child| child.text().to_string())
        .collect()
}

/// Position of the first token of a declaration that is not an annotation.
pub(crate) fn anchor_position<D: ast_grep_core::Doc>(node: &Node<D>) -> Position {
    for child in node.children() {
        let kind = child.kind();
        if kind.as_ref() == "modifiers" {
            if let Some(token) = child.children().find(|c| {
                let k = c.kind();
                !is_annotation_kind(k.as_ref()) && !is_comment_kind(k.as_ref())
            }) {
                return to_position(&token);
            }
            continue;
        }
        if is_annotation_kind(kind.as_ref()) || is_comment_kind(kind.as_ref()) {
            continue;
        }
        return to_position(&child);
    }
    to_position(node)
}

/// Declared name: the `name` field, or the first declarator for fields.
pub(crate) fn declaration_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    if let Some(name) = node.field("name") {
        return Some(name.text().to_string());
    }
    node.children()
        .find(|child| child.kind().as_ref() == "variable_declarator")
        .and_then(|declarator| declarator.field("name"))
        .map(|name| name.text().to_string())
}

pub(crate) fn declared_type<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.field("type").map(|t| t.text().to_string())
}

pub(crate) fn body_line<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<usize> {
    node.field("body").map(|body| to_position(&body).line)
}

/// Plain type name without generic arguments or array dimensions.
#[must_use]
pub fn base_type_name(type_text: &str) -> String {
    let end = type_text
        .find(|c| c == '<' || c == '[')
        .unwrap_or(type_text.len());
    type_text[..end].trim().to_string()
}

pub(crate) fn package_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let name = node
        .text()
        .trim()
        .trim_start_matches("package")
        .trim()
        .trim_end_matches(';')
        .trim()
        .to_string();
    (!name.is_empty()).then_some(name)
}

/// Import path as written after `import`, e.g. `java.util.*` or `static a.B.c`.
pub(crate) fn import_path<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let path = node
        .text()
        .trim()
        .trim_start_matches("import")
        .trim()
        .trim_end_matches(';')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    (!path.is_empty()).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_type_name_strips_generics_and_arrays() {
        assert_eq!(base_type_name("List<Order>"), "List");
        assert_eq!(base_type_name("Map<String, List<Order>>"), "Map");
        assert_eq!(base_type_name("byte[]"), "byte");
        assert_eq!(base_type_name("OrderRepository"), "OrderRepository");
    }
}
