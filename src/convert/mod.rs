//! Dependency conversion engine
//!
//! Translates PEP 440 version constraints into RPM boolean-dependency
//! expressions and assembles spec-file declaration lists:
//! - `translate`: one specifier clause to one RPM expression
//! - `requirement`: one requirement to its declarations (rich or legacy)
//! - `builder`: whole metadata dependency lists, with skip-and-warn
//!   handling for unparsable entries

mod builder;
mod requirement;
mod translate;

pub use builder::{from_requirement_strings, from_structured_entries, BuildOutcome};
pub use requirement::convert_requirement;
pub use translate::{translate, INVALID_VERSION};

/// Target distributions whose RPM version cannot evaluate rich (boolean)
/// dependency expressions; conversion falls back to legacy mode for these.
pub const RICH_DEP_BLACKLIST: &[&str] = &["epel6", "epel7"];

/// Conversion mode switches, threaded explicitly through every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Runtime (Requires/Conflicts) vs build-time (Build-prefixed) output
    pub runtime: bool,
    /// Rich compound expressions vs legacy multi-declaration expansion
    pub rich_deps: bool,
}

impl ConvertOptions {
    /// Creates options with explicit switches
    pub fn new(runtime: bool, rich_deps: bool) -> Self {
        Self { runtime, rich_deps }
    }

    /// Options for a target distribution: rich dependencies unless the
    /// target is on the blacklist
    pub fn for_distro(distro: &str, runtime: bool) -> Self {
        Self {
            runtime,
            rich_deps: !RICH_DEP_BLACKLIST.contains(&distro),
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(true, true)
    }
}
