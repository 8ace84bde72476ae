//! RPM-oriented version value model
//!
//! Parses PEP 440-style version strings into a structured form that can be
//! rendered using RPM's tilde/caret ordering conventions:
//! - dev releases sort before pre-releases (`~~N` < `~rcN`)
//! - pre-releases sort before the clean release (`~rcN` < bare)
//! - post-releases sort after the clean release (bare < `^postN`)
//!
//! Strings that do not match the structured grammar are kept as opaque
//! legacy values; arithmetic on them is not possible and translators must
//! handle that case explicitly.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// [epoch!]N(.N)*[{a|b|rc}N][.postN|-N][.devN]
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)!)?(\d+(?:\.\d+)*)(?:(a|b|rc)(\d+))?(?:(?:\.post|-)(\d+))?(?:\.dev(\d+))?$")
        .unwrap()
});

/// Pre-release kind (`a`, `b`, `rc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreKind {
    Alpha,
    Beta,
    Rc,
}

impl PreKind {
    /// The PEP 440 tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PreKind::Alpha => "a",
            PreKind::Beta => "b",
            PreKind::Rc => "rc",
        }
    }
}

/// A version string decomposed into epoch, release segments and qualifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    /// Explicit epoch (`N!` prefix), 0 when absent
    pub epoch: u64,
    /// Dot-separated numeric release segments, never empty
    pub release: Vec<u64>,
    /// Pre-release qualifier (`a1`, `b2`, `rc3`)
    pub pre: Option<(PreKind, u64)>,
    /// Post-release qualifier (`.post1` or `-1`)
    pub post: Option<u64>,
    /// Dev-release qualifier (`.dev1`)
    pub dev: Option<u64>,
}

impl ParsedVersion {
    /// Returns true if any of pre/dev/post is present
    pub fn has_qualifier(&self) -> bool {
        self.pre.is_some() || self.dev.is_some() || self.post.is_some()
    }

    /// Returns a new version with the last release segment bumped by one
    /// and all qualifiers cleared. Used to build exclusive upper bounds.
    ///
    /// `None` when the last segment cannot be bumped without overflowing.
    pub fn incremented(&self) -> Option<ParsedVersion> {
        let mut release = self.release.clone();
        let last = release.last_mut()?;
        *last = last.checked_add(1)?;
        Some(ParsedVersion {
            epoch: self.epoch,
            release,
            pre: None,
            post: None,
            dev: None,
        })
    }

    /// Upper bound for a compatible-release (`~=`) constraint: drops the
    /// last release segment, then bumps the new last segment.
    ///
    /// Returns `None` for single-segment releases, which have no meaningful
    /// compatible-release upper bound.
    pub fn compatible_upper_bound(&self) -> Option<ParsedVersion> {
        if self.release.len() < 2 {
            return None;
        }
        let truncated = ParsedVersion {
            epoch: self.epoch,
            release: self.release[..self.release.len() - 1].to_vec(),
            pre: None,
            post: None,
            dev: None,
        };
        truncated.incremented()
    }

    /// Returns a copy with trailing zero release segments stripped.
    /// The first segment is never stripped: `(1,2,0)` becomes `(1,2)`,
    /// `(0,0)` becomes `(0,)`.
    pub fn normalized(&self) -> ParsedVersion {
        let mut release = self.release.clone();
        while release.len() > 1 && *release.last().unwrap() == 0 {
            release.pop();
        }
        ParsedVersion {
            epoch: self.epoch,
            release,
            pre: self.pre,
            post: self.post,
            dev: self.dev,
        }
    }

    /// RPM suffix for the qualifier, picked by precedence pre > dev > post.
    ///
    /// A valid PEP 440 version carries at most one qualifier; the precedence
    /// only matters for defensive handling of malformed input.
    fn rpm_suffix(&self) -> String {
        if let Some((kind, num)) = self.pre {
            format!("~{}{}", kind.as_str(), num)
        } else if let Some(num) = self.dev {
            format!("~~{}", num)
        } else if let Some(num) = self.post {
            format!("^post{}", num)
        } else {
            String::new()
        }
    }
}

impl fmt::Display for ParsedVersion {
    /// Renders all release segments as parsed; normalization is opt-in via
    /// [`ParsedVersion::normalized`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch > 0 {
            write!(f, "{}:", self.epoch)?;
        }
        let release = self
            .release
            .iter()
            .map(|seg| seg.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}{}", release, self.rpm_suffix())
    }
}

/// A version value in RPM rendering terms: either a structured PEP 440-style
/// version or an opaque legacy string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpmVersion {
    /// Structured version, supports increment and normalization
    Parsed(ParsedVersion),
    /// Opaque string that did not match the structured grammar
    Legacy(String),
}

impl RpmVersion {
    /// Parses a version string. Never fails: non-conforming strings are
    /// retained as [`RpmVersion::Legacy`].
    pub fn parse(version_str: &str) -> RpmVersion {
        let trimmed = version_str.trim();
        let Some(caps) = VERSION_RE.captures(trimmed) else {
            return RpmVersion::Legacy(trimmed.to_string());
        };

        let epoch = caps
            .get(1)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        let release: Option<Vec<u64>> = caps[2].split('.').map(|seg| seg.parse().ok()).collect();
        let Some(release) = release else {
            // Release segment too large for u64
            return RpmVersion::Legacy(trimmed.to_string());
        };

        let pre = match (caps.get(3), caps.get(4)) {
            (Some(kind), Some(num)) => {
                let kind = match kind.as_str() {
                    "a" => PreKind::Alpha,
                    "b" => PreKind::Beta,
                    _ => PreKind::Rc,
                };
                match num.as_str().parse() {
                    Ok(num) => Some((kind, num)),
                    Err(_) => return RpmVersion::Legacy(trimmed.to_string()),
                }
            }
            _ => None,
        };
        let post = caps.get(5).and_then(|m| m.as_str().parse().ok());
        let dev = caps.get(6).and_then(|m| m.as_str().parse().ok());

        RpmVersion::Parsed(ParsedVersion {
            epoch,
            release,
            pre,
            post,
            dev,
        })
    }

    /// Returns true for opaque legacy versions
    pub fn is_legacy(&self) -> bool {
        matches!(self, RpmVersion::Legacy(_))
    }

    /// Returns the structured version, if any
    pub fn as_parsed(&self) -> Option<&ParsedVersion> {
        match self {
            RpmVersion::Parsed(parsed) => Some(parsed),
            RpmVersion::Legacy(_) => None,
        }
    }
}

impl fmt::Display for RpmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpmVersion::Parsed(parsed) => parsed.fmt(f),
            RpmVersion::Legacy(raw) => f.write_str(raw),
        }
    }
}
