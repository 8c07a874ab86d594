//! Display-name to canonical-token lookup tables.
//!
//! A [`CategoryMapping`] is built once at startup and only read afterwards.
//! Lookups are exact: the front end offers the table's own display names, so
//! a key outside the table is a caller bug, reported as [`KeyLookupError`].

use std::collections::BTreeMap;

use rapidfuzz::distance::jaro_winkler;
use serde::Serialize;

use crate::error::{KeyLookupError, MappingBuildError};

/// Number of close matches attached to a [`KeyLookupError`].
const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// One row of a mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    /// Human-readable name offered to the user.
    pub display: String,
    /// Token the model was trained on.
    pub token: String,
}

/// Fixed mapping from display names to canonical tokens.
#[derive(Debug, Clone)]
pub struct CategoryMapping {
    name: String,
    /// Entries in display order.
    entries: Vec<MappingEntry>,
    /// Display name -> index into `entries`.
    by_display: BTreeMap<String, usize>,
}

impl CategoryMapping {
    /// Build a mapping from `(display, token)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails on duplicate display names and on empty names or tokens.
    pub fn new<I, D, T>(name: impl Into<String>, pairs: I) -> Result<Self, MappingBuildError>
    where
        I: IntoIterator<Item = (D, T)>,
        D: Into<String>,
        T: Into<String>,
    {
        let name = name.into();
        let mut entries = Vec::new();
        let mut by_display = BTreeMap::new();
        for (display, token) in pairs {
            let display = display.into();
            let token = token.into();
            if display.trim().is_empty() || token.trim().is_empty() {
                return Err(MappingBuildError::EmptyEntry {
                    mapping: name,
                    display,
                });
            }
            if by_display.contains_key(&display) {
                return Err(MappingBuildError::DuplicateDisplay {
                    mapping: name,
                    display,
                });
            }
            by_display.insert(display.clone(), entries.len());
            entries.push(MappingEntry { display, token });
        }
        Ok(Self {
            name,
            entries,
            by_display,
        })
    }

    /// Name used in error messages (e.g. "degree").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve a display name to its canonical token.
    ///
    /// Every key goes through the table, including identity entries such as
    /// `PhD -> PhD`.
    pub fn normalize(&self, display: &str) -> Result<&str, KeyLookupError> {
        self.by_display
            .get(display)
            .map(|&index| self.entries[index].token.as_str())
            .ok_or_else(|| KeyLookupError {
                mapping: self.name.clone(),
                key: display.to_string(),
                suggestions: self.suggest(display),
            })
    }

    pub fn contains(&self, display: &str) -> bool {
        self.by_display.contains_key(display)
    }

    /// Display names in table order.
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.display.as_str())
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Closest display names to `key`, best first.
    fn suggest(&self, key: &str) -> Vec<String> {
        let needle = key.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut scored: Vec<(f64, &str)> = self
            .entries
            .iter()
            .map(|entry| {
                let candidate = entry.display.to_lowercase();
                let score = jaro_winkler::similarity(needle.chars(), candidate.chars());
                (score, entry.display.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, display)| display.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> CategoryMapping {
        CategoryMapping::new("degree", [("Master of Arts", "MA"), ("PhD", "PhD")]).unwrap()
    }

    #[test]
    fn keeps_insertion_order() {
        let mapping = small();
        let names: Vec<&str> = mapping.display_names().collect();
        assert_eq!(names, vec!["Master of Arts", "PhD"]);
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn rejects_duplicate_display_names() {
        let err = CategoryMapping::new("degree", [("PhD", "PhD"), ("PhD", "DPhil")]).unwrap_err();
        assert!(matches!(err, MappingBuildError::DuplicateDisplay { .. }));
    }

    #[test]
    fn rejects_empty_tokens() {
        let err = CategoryMapping::new("degree", [("PhD", " ")]).unwrap_err();
        assert!(matches!(err, MappingBuildError::EmptyEntry { .. }));
    }

    #[test]
    fn lookup_is_exact() {
        let mapping = small();
        assert_eq!(mapping.normalize("Master of Arts").unwrap(), "MA");
        assert!(mapping.normalize("master of arts").is_err());
        assert!(mapping.normalize("MA").is_err());
    }

    #[test]
    fn unknown_key_carries_suggestions() {
        let err = small().normalize("Master of Art").unwrap_err();
        assert_eq!(err.key, "Master of Art");
        assert_eq!(err.suggestions.first().map(String::as_str), Some("Master of Arts"));
    }
}
