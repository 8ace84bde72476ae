//! Requirement string parsers
//!
//! Two input grammars feed the converter:
//! - PEP 508-style requirement strings (`foo>=1.0,!=1.2.*`)
//! - structured distribution-metadata entries (`foo (>=1.2,!=1.3)`)

mod requirement;
mod structured;

pub use requirement::parse_requirement;
pub use structured::parse_structured_entry;
