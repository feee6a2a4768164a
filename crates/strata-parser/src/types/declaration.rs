use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::DeclarationKind;

/// A 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// One declaration found while walking a syntax tree.
///
/// Only the start is anchored. `position` points at the first token that is
/// not an annotation, so `@Override` and friends sit on the lines before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationNode {
    pub kind: DeclarationKind,
    pub name: String,
    pub position: Position,
    /// Keyword modifiers only (`public`, `static`, ...), annotations excluded.
    pub modifiers: BTreeSet<String>,
    pub annotations: Vec<String>,
    /// Field type or method return type, as written.
    pub type_name: Option<String>,
    /// Line of the opening brace of a type body.
    pub body_line: Option<usize>,
    /// Index of the nearest enclosing declaration.
    pub parent: Option<usize>,
    pub(crate) index: usize,
    /// Index of the last declaration nested inside this one (itself when none).
    pub(crate) subtree_end: usize,
}

impl DeclarationNode {
    /// Pre-order index of this node within its tree.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether `other` sits inside this declaration.
    #[must_use]
    pub const fn contains(&self, other: &Self) -> bool {
        other.index > self.index && other.index <= self.subtree_end
    }

    #[must_use]
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.contains(modifier)
    }
}
