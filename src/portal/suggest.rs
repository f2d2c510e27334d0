use std::collections::HashSet;

use serde::Serialize;

use super::directory::{Directory, IndexedEntry};
use super::normalize::normalize_key;
use crate::config::PortalConfig;

/// Which field of an entry a suggestion was matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Email,
    Name,
}

/// Ranked autocomplete candidate derived from a directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    /// Text copied into the input when the suggestion is selected.
    pub value: String,
    pub primary: String,
    pub secondary: String,
    /// Character offset of the first match within the normalized field.
    pub match_index: usize,
}

impl Suggestion {
    fn from_entry(kind: SuggestionKind, indexed: &IndexedEntry, match_index: usize) -> Self {
        let entry = &indexed.entry;
        let (value, other) = match kind {
            SuggestionKind::Email => (&entry.email, &entry.name),
            SuggestionKind::Name => (&entry.name, &entry.email),
        };

        let secondary = [other.as_str(), entry.country_label(), entry.committee.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");

        Self {
            kind,
            value: value.clone(),
            primary: value.clone(),
            secondary,
            match_index,
        }
    }
}

/// Substring matcher behind the incremental suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionEngine {
    min_query_len: usize,
    max_suggestions: usize,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::from_config(&PortalConfig::default())
    }
}

impl SuggestionEngine {
    pub fn new(min_query_len: usize, max_suggestions: usize) -> Self {
        Self {
            min_query_len,
            max_suggestions,
        }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.min_query_len, config.max_suggestions)
    }

    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Whether the raw input is long enough to trigger suggestions at all.
    pub fn qualifies(&self, raw_query: &str) -> bool {
        let query = normalize_key(raw_query);
        !query.is_empty() && query.char_len() >= self.min_query_len
    }

    pub fn compute(&self, directory: &Directory, raw_query: &str) -> Vec<Suggestion> {
        if !self.qualifies(raw_query) {
            return Vec::new();
        }
        let query = normalize_key(raw_query);

        let mut seen = HashSet::new();
        let mut suggestions = Vec::new();

        for indexed in directory.entries() {
            let fields = [
                (SuggestionKind::Email, &indexed.normalized_email),
                (SuggestionKind::Name, &indexed.normalized_name),
            ];
            for (kind, field) in fields {
                let Some(byte) = field.as_str().find(query.as_str()) else {
                    continue;
                };
                let match_index = field.as_str()[..byte].chars().count();
                let suggestion = Suggestion::from_entry(kind, indexed, match_index);
                if seen.insert((kind, suggestion.value.to_lowercase())) {
                    suggestions.push(suggestion);
                }
            }
        }

        suggestions.sort_by(|a, b| {
            a.match_index
                .cmp(&b.match_index)
                .then_with(|| a.value.cmp(&b.value))
        });
        suggestions.truncate(self.max_suggestions);
        suggestions
    }
}
