//! PyPI project name to RPM package name conversion
//!
//! Applies the packaging-guidelines naming scheme: names without a `py`
//! fragment get a `python-` prefix with dots folded to dashes, names that
//! already carry the fragment are kept verbatim, a trailing `-python` is
//! folded into the prefix, and Mageia additionally lowercases and uses
//! `python-` itself as the exclusion marker.
//!
//! The default interpreter version is explicit configuration, never
//! ambient state: names are only version-suffixed when the requested
//! interpreter differs from the configured default.

/// Interpreter version that needs no name suffix
pub const DEFAULT_PYTHON_VERSION: &str = "2";

/// Converts source-ecosystem package names to RPM package names
#[derive(Debug, Clone)]
pub struct NameConverter {
    distro: String,
    default_python_version: String,
}

impl NameConverter {
    /// Creates a converter for a target distribution with the stock
    /// default interpreter version
    pub fn new(distro: impl Into<String>) -> Self {
        Self::with_default_python(distro, DEFAULT_PYTHON_VERSION)
    }

    /// Creates a converter with an explicit default interpreter version
    pub fn with_default_python(
        distro: impl Into<String>,
        default_python_version: impl Into<String>,
    ) -> Self {
        Self {
            distro: distro.into(),
            default_python_version: default_python_version.into(),
        }
    }

    /// Converts a PyPI project name to its RPM package name, optionally
    /// versioned for a specific interpreter
    pub fn rpm_name(&self, name: &str, python_version: Option<&str>) -> String {
        let exclude = if self.distro == "mageia" {
            "python-"
        } else {
            "py"
        };

        // Names that already carry the exclusion fragment are kept verbatim,
        // dots included; the dash folding only applies alongside prefixing.
        let mut rpmized = if name.to_lowercase().contains(exclude) {
            name.to_string()
        } else {
            format!("python-{}", name.replace('.', "-"))
        };
        if let Some(stem) = name.strip_suffix("-python") {
            rpmized = format!("python-{}", stem);
        }
        if self.distro == "mageia" {
            rpmized = rpmized.to_lowercase();
        }
        self.versioned_name(&rpmized, python_version)
    }

    /// Inserts the interpreter version into an RPM name
    /// (`python-foo` + `3` → `python3-foo`, `foo` + `3` → `python3-foo`)
    fn versioned_name(&self, name: &str, python_version: Option<&str>) -> String {
        let Some(version) = python_version else {
            return name.to_string();
        };
        if version == self.default_python_version {
            return name.to_string();
        }
        if let Some(stem) = name.strip_prefix("python-") {
            format!("python{}-{}", version, stem)
        } else {
            format!("python{}-{}", version, name)
        }
    }
}
