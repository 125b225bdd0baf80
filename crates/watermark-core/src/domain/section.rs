//! Report sections and the report container.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A labeled group of key-value metadata lines, printed as one block.
///
/// Keys keep their insertion order. Inserting a key that is already present
/// replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: Vec<(String, String)>,
}

impl Section {
    /// Create an empty section.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a section holding a single entry.
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut section = Self::new();
        section.insert(key, value);
        section
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`Section::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Width of the longest key, counted in characters.
    pub fn key_width(&self) -> usize {
        self.entries
            .iter()
            .map(|(k, _)| k.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Section {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut section = Self::new();
        for (key, value) in iter {
            section.insert(key, value);
        }
        section
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Ordered sequence of sections produced by one builder invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Append a section. Empty sections are kept here and skipped at render time.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sections that will actually produce output.
    pub fn non_empty(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl From<Vec<Section>> for Report {
    fn from(sections: Vec<Section>) -> Self {
        Self { sections }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let section = Section::new()
            .with("Python implementation", "CPython")
            .with("Python version", "3.11.4")
            .with("IPython version", "8.14.0");

        let keys: Vec<&str> = section.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["Python implementation", "Python version", "IPython version"]
        );
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut section = Section::new().with("numpy", "1.0").with("pandas", "2.0");
        section.insert("numpy", "1.26.4");

        assert_eq!(section.len(), 2);
        assert_eq!(section.iter().next(), Some(("numpy", "1.26.4")));
    }

    #[test]
    fn test_key_width_counts_characters() {
        let section = Section::new().with("Größe", "x").with("OS", "Linux");
        assert_eq!(section.key_width(), 5);
        assert_eq!(Section::new().key_width(), 0);
    }

    #[test]
    fn test_section_serializes_as_ordered_map() {
        let section = Section::new().with("b", "2").with("a", "1");
        let json = serde_json::to_string(&section).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }

    #[test]
    fn test_report_serializes_as_list() {
        let report = Report::from(vec![Section::single("Author", "Ada"), Section::new()]);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"[{"Author":"Ada"},{}]"#);
        assert_eq!(report.non_empty().count(), 1);
    }
}
