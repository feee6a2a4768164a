use serde::{Deserialize, Serialize};

/// A typed field of a class: type name plus the first declarator's name.
///
/// The same fact is read as a constructor-injected dependency by the
/// implementation template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldFact {
    pub type_name: String,
    pub name: String,
}

impl FieldFact {
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }

    /// Render as an immutable field declaration.
    #[must_use]
    pub fn declaration(&self) -> String {
        format!("private final {} {};", self.type_name, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_private_final_declaration() {
        let fact = FieldFact::new("OrderRepository", "repo");
        assert_eq!(fact.declaration(), "private final OrderRepository repo;");
    }
}
