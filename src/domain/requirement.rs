//! Parsed requirement model
//!
//! One requirement is one dependency name plus the version-specifier clauses
//! attached to it, as extracted from project metadata. Requirements are
//! immutable after parsing.

use crate::domain::Operator;

/// A single parsed dependency requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Raw dependency name as written in the source ecosystem
    pub name: String,
    /// Requested extras (`foo[bar,baz]`), kept for reference
    pub extras: Vec<String>,
    /// Ordered specifier clauses (`(>=, "1.0")`, `(!=, "1.2.*")`, ...)
    pub specs: Vec<(Operator, String)>,
}

impl Requirement {
    /// Creates a requirement with no extras
    pub fn new(name: impl Into<String>, specs: Vec<(Operator, String)>) -> Self {
        Self {
            name: name.into(),
            extras: Vec::new(),
            specs,
        }
    }

    /// Creates an unconstrained requirement
    pub fn unconstrained(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let req = Requirement::new("flask", vec![(Operator::GreaterOrEqual, "1.0".to_string())]);
        assert_eq!(req.name, "flask");
        assert!(req.extras.is_empty());
        assert_eq!(req.specs.len(), 1);
    }

    #[test]
    fn test_unconstrained() {
        let req = Requirement::unconstrained("six");
        assert!(req.specs.is_empty());
    }
}
