use serde::{Deserialize, Serialize};

/// The kind of an indexed declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Class,
    Interface,
    Enum,
    Record,
    Field,
    Constructor,
    Method,
}

impl DeclarationKind {
    /// Map a tree-sitter Java node kind to a declaration kind.
    #[must_use]
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(Self::Class),
            "interface_declaration" | "annotation_type_declaration" => Some(Self::Interface),
            "enum_declaration" => Some(Self::Enum),
            "record_declaration" => Some(Self::Record),
            "field_declaration" | "constant_declaration" => Some(Self::Field),
            "constructor_declaration" | "compact_constructor_declaration" => {
                Some(Self::Constructor)
            }
            "method_declaration" | "annotation_type_element_declaration" => Some(Self::Method),
            _ => None,
        }
    }

    /// Whether this kind declares a type (and so owns members).
    #[must_use]
    pub const fn is_type(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Interface | Self::Enum | Self::Record
        )
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::Field => "field",
            Self::Constructor => "constructor",
            Self::Method => "method",
        };
        write!(f, "{s}")
    }
}
