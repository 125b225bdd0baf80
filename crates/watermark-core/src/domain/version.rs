//! Package version lookup results and request helpers.

use std::collections::BTreeSet;
use std::fmt;

/// Module name that is always loaded and never reported.
const BUILTINS_MODULE: &str = "builtins";

/// Distribution names whose import name differs from the name users type.
const IMPORT_ALIASES: &[(&str, &str)] = &[("scikit-learn", "sklearn")];

/// Outcome of resolving a package to its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionLookup {
    /// The package is importable and reports this version.
    Found(String),
    /// The package could not be imported.
    NotInstalled,
    /// The package imports but exposes no version information.
    Unknown,
}

impl VersionLookup {
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for VersionLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(v) => f.write_str(v),
            Self::NotInstalled => f.write_str("not installed"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// A package to resolve: the name shown in the report and the module to import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    /// Name as requested (and as printed).
    pub name: String,
    /// Module name passed to the importer.
    pub import_name: String,
}

impl PackageRequest {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let import_name = IMPORT_ALIASES
            .iter()
            .find(|(dist, _)| *dist == name)
            .map_or_else(|| name.clone(), |(_, module)| (*module).to_string());
        Self { name, import_name }
    }

    /// Parse a comma-separated package list. Blank entries are dropped.
    pub fn parse_list(list: &str) -> Vec<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::new)
            .collect()
    }
}

/// Collect distinct top-level module names from loaded module identifiers.
///
/// `numpy.linalg` and `numpy` both yield `numpy`; `builtins` is discarded.
/// The result is sorted.
pub fn imported_top_level<S: AsRef<str>>(modules: &[S]) -> Vec<String> {
    modules
        .iter()
        .filter_map(|m| m.as_ref().trim().split('.').next())
        .filter(|top| !top.is_empty() && *top != BUILTINS_MODULE)
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_sentinels() {
        assert_eq!(VersionLookup::Found("1.26.4".into()).to_string(), "1.26.4");
        assert_eq!(VersionLookup::NotInstalled.to_string(), "not installed");
        assert_eq!(VersionLookup::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_scikit_learn_alias() {
        let req = PackageRequest::new("scikit-learn");
        assert_eq!(req.name, "scikit-learn");
        assert_eq!(req.import_name, "sklearn");

        let req = PackageRequest::new("numpy");
        assert_eq!(req.import_name, "numpy");
    }

    #[test]
    fn test_parse_list_trims_and_skips_blanks() {
        let reqs = PackageRequest::parse_list("numpy, pandas,,  ");
        let names: Vec<&str> = reqs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["numpy", "pandas"]);
    }

    #[test]
    fn test_imported_top_level_dedups_and_drops_builtins() {
        let modules = ["numpy.linalg", "numpy", "builtins", "pandas.core.frame", "os", ""];
        assert_eq!(imported_top_level(&modules), vec!["numpy", "os", "pandas"]);
    }
}
