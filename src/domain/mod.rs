//! Core domain models for py2rpm
//!
//! This module contains the fundamental types used throughout the converter:
//! - Version values with RPM-oriented rendering
//! - The closed set of PEP 440 comparison operators
//! - Parsed requirements (name + specifier clauses)
//! - Spec-file dependency declarations

mod declaration;
mod operator;
mod requirement;
mod version;

pub use declaration::{Declaration, DeclarationKind, NAME_PLACEHOLDER};
pub use operator::Operator;
pub use requirement::Requirement;
pub use version::{ParsedVersion, PreKind, RpmVersion};
