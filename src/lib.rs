//! py2rpm - Python dependency metadata to RPM declaration converter
//!
//! Translates PEP 440 version constraints from Python package metadata
//! into RPM spec-file dependency declarations, with rich (boolean)
//! expressions where the target distribution supports them and legacy
//! multi-declaration expansion where it does not.
//!
//! Metadata comes from a local pyproject.toml or from the PyPI JSON API.

pub mod cli;
pub mod convert;
pub mod domain;
pub mod error;
pub mod metadata;
pub mod orchestrator;
pub mod parser;
pub mod registry;
pub mod render;
