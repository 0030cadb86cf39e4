//! Term: a typed slot in a predicate or operator parameter list.

use serde::{Deserialize, Serialize};

/// A typed slot that is either bound to a concrete object name or left
/// open as a schema variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// Type tag the slot accepts (e.g. "character", "room")
    pub type_name: String,
    /// Bound object name, or `None` for a schema variable
    pub constant: Option<String>,
}

impl Term {
    /// Create an unbound (schema-level) term of the given type.
    pub fn typed(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            constant: None,
        }
    }

    /// Create a term bound to a concrete object.
    pub fn bound(type_name: impl Into<String>, constant: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            constant: Some(constant.into()),
        }
    }

    /// Bind this term to a concrete object name.
    pub fn bind(&mut self, constant: impl Into<String>) {
        self.constant = Some(constant.into());
    }

    /// Clear the binding, turning the term back into a schema variable.
    pub fn unbind(&mut self) {
        self.constant = None;
    }

    pub fn is_bound(&self) -> bool {
        self.constant.is_some()
    }

    /// The bound object name, if any.
    pub fn constant(&self) -> Option<&str> {
        self.constant.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_unbind() {
        let mut term = Term::typed("room");
        assert!(!term.is_bound());
        assert_eq!(term.constant(), None);

        term.bind("kitchen");
        assert!(term.is_bound());
        assert_eq!(term.constant(), Some("kitchen"));

        term.unbind();
        assert!(!term.is_bound());
    }

    #[test]
    fn test_bound_constructor() {
        let term = Term::bound("character", "alice");
        assert_eq!(term.type_name, "character");
        assert_eq!(term.constant(), Some("alice"));
    }
}
