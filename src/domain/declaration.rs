//! Spec-file dependency declarations
//!
//! A declaration is one dependency line of the generated spec file in
//! structured form: the kind of tag, the untranslated source package name
//! and the rendered constraint expression. The expression keeps the
//! `{name}` placeholder; RPM name substitution happens at render time.

use serde::Serialize;
use std::fmt;

/// Placeholder token substituted with the converted RPM package name
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Spec-file dependency tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Requires,
    BuildRequires,
    Conflicts,
    BuildConflicts,
}

impl DeclarationKind {
    /// The spec-file tag text
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Requires => "Requires",
            DeclarationKind::BuildRequires => "BuildRequires",
            DeclarationKind::Conflicts => "Conflicts",
            DeclarationKind::BuildConflicts => "BuildConflicts",
        }
    }

    /// Maps a runtime tag to its build-time counterpart
    pub fn build_time(self) -> Self {
        match self {
            DeclarationKind::Requires => DeclarationKind::BuildRequires,
            DeclarationKind::Conflicts => DeclarationKind::BuildConflicts,
            already_build => already_build,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted dependency declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// Dependency tag kind
    pub kind: DeclarationKind,
    /// Source-ecosystem package name (not yet RPM-converted)
    pub name: String,
    /// Rendered constraint expression containing [`NAME_PLACEHOLDER`]
    pub expression: String,
}

impl Declaration {
    /// Creates a new declaration
    pub fn new(
        kind: DeclarationKind,
        name: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            expression: expression.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_mapping() {
        assert_eq!(
            DeclarationKind::Requires.build_time(),
            DeclarationKind::BuildRequires
        );
        assert_eq!(
            DeclarationKind::Conflicts.build_time(),
            DeclarationKind::BuildConflicts
        );
        // already-build kinds are left alone
        assert_eq!(
            DeclarationKind::BuildRequires.build_time(),
            DeclarationKind::BuildRequires
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DeclarationKind::Requires.to_string(), "Requires");
        assert_eq!(DeclarationKind::BuildConflicts.to_string(), "BuildConflicts");
    }

    #[test]
    fn test_declaration_new() {
        let decl = Declaration::new(DeclarationKind::Requires, "flask", "{name} >= 1.0");
        assert_eq!(decl.kind, DeclarationKind::Requires);
        assert_eq!(decl.name, "flask");
        assert_eq!(decl.expression, "{name} >= 1.0");
    }

    #[test]
    fn test_serialize_kind() {
        let json = serde_json::to_string(&DeclarationKind::BuildRequires).unwrap();
        assert_eq!(json, "\"build_requires\"");
    }
}
