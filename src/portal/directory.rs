use std::collections::HashMap;

use tracing::debug;

use super::domain::{CommitteeRoster, StudentEntry};
use super::normalize::{normalize_key, strip_whitespace, NormalizedKey};

/// A directory entry together with the keys it is matched on.
#[derive(Debug, Clone)]
pub struct IndexedEntry {
    pub entry: StudentEntry,
    pub normalized_email: NormalizedKey,
    pub normalized_name: NormalizedKey,
}

/// Result of an exact lookup against the directory index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Every entry registered under the key, in insertion order. Never empty.
    Found(Vec<StudentEntry>),
    NotFound,
}

impl LookupOutcome {
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, LookupOutcome::Found(entries) if entries.len() > 1)
    }
}

/// Immutable student directory built once from the committee rosters.
///
/// Entries are stored once; the index maps each normalized email and name to
/// positions in the entry list so that aliasing keys keep every match.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: Vec<IndexedEntry>,
    index: HashMap<NormalizedKey, Vec<usize>>,
}

impl Directory {
    pub fn from_rosters(rosters: &[CommitteeRoster]) -> Self {
        let mut directory = Self::default();

        for roster in rosters {
            for member in &roster.members {
                let country = member
                    .country
                    .as_deref()
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(str::to_string);

                directory.insert(StudentEntry {
                    email: strip_whitespace(&member.email),
                    name: member.name.trim().to_string(),
                    committee: roster.committee.clone(),
                    country,
                    template: roster.template.clone(),
                });
            }
        }

        debug!(
            entries = directory.entries.len(),
            keys = directory.index.len(),
            "student directory built"
        );
        directory
    }

    fn insert(&mut self, entry: StudentEntry) {
        let position = self.entries.len();
        let normalized_email = normalize_key(&entry.email);
        let normalized_name = normalize_key(&entry.name);

        if !normalized_email.is_empty() {
            self.index
                .entry(normalized_email.clone())
                .or_default()
                .push(position);
        }
        if !normalized_name.is_empty() && normalized_name != normalized_email {
            self.index
                .entry(normalized_name.clone())
                .or_default()
                .push(position);
        }

        self.entries.push(IndexedEntry {
            entry,
            normalized_email,
            normalized_name,
        });
    }

    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    /// Exact lookup of the normalized query. Substrings of a key do not match.
    pub fn lookup(&self, raw_query: &str) -> LookupOutcome {
        let key = normalize_key(raw_query);
        if key.is_empty() {
            return LookupOutcome::NotFound;
        }

        match self.index.get(&key) {
            Some(positions) if !positions.is_empty() => LookupOutcome::Found(
                positions
                    .iter()
                    .map(|&position| self.entries[position].entry.clone())
                    .collect(),
            ),
            _ => LookupOutcome::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rosters() -> Vec<CommitteeRoster> {
        vec![
            CommitteeRoster::new("World Food Programme", "downloads/wfp.docx")
                .member("acruza@noordwijk.edu.mx", "Arantza Cruz", None)
                .member(" mlopez@noordwijk.edu.mx ", "María López", Some("  ")),
            CommitteeRoster::new("World Health Organization", "downloads/who.docx")
                .member("achiuntib@noordwijk.edu.mx", "Ana Chiuntí", Some("Germany"))
                .member("mlopez@noordwijk.edu.mx", "Maria Lopez", Some("Kenya")),
        ]
    }

    #[test]
    fn registers_entries_under_email_and_name() {
        let directory = Directory::from_rosters(&rosters());
        assert_eq!(directory.len(), 4);

        for indexed in directory.entries() {
            for query in [&indexed.entry.email, &indexed.entry.name] {
                match directory.lookup(query) {
                    LookupOutcome::Found(entries) => assert!(entries.contains(&indexed.entry)),
                    LookupOutcome::NotFound => panic!("{query} should resolve"),
                }
            }
        }
    }

    #[test]
    fn lookup_ignores_case_and_diacritics() {
        let directory = Directory::from_rosters(&rosters());
        let LookupOutcome::Found(entries) = directory.lookup("ACRUZA@noordwijk.edu.mx") else {
            panic!("expected a match");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].committee, "World Food Programme");
        assert_eq!(entries[0].country, None);
        assert_eq!(entries[0].country_label(), "Pending Assignment");

        assert!(matches!(
            directory.lookup("ana chiunti"),
            LookupOutcome::Found(ref entries) if entries.len() == 1
        ));
    }

    #[test]
    fn duplicate_keys_keep_every_entry_in_insertion_order() {
        let directory = Directory::from_rosters(&rosters());
        let outcome = directory.lookup("mlopez@noordwijk.edu.mx");
        assert!(outcome.is_ambiguous());
        let LookupOutcome::Found(entries) = outcome else {
            panic!("expected matches");
        };
        let committees: Vec<_> = entries.iter().map(|e| e.committee.as_str()).collect();
        assert_eq!(
            committees,
            vec!["World Food Programme", "World Health Organization"]
        );

        assert!(directory.lookup("Maria Lopez").is_ambiguous());
    }

    #[test]
    fn blank_country_and_padded_email_are_cleaned() {
        let directory = Directory::from_rosters(&rosters());
        let second = &directory.entries()[1].entry;
        assert_eq!(second.email, "mlopez@noordwijk.edu.mx");
        assert_eq!(second.country, None);
    }

    #[test]
    fn substrings_and_blank_queries_do_not_match() {
        let directory = Directory::from_rosters(&rosters());
        assert_eq!(directory.lookup("acruza"), LookupOutcome::NotFound);
        assert_eq!(directory.lookup("   "), LookupOutcome::NotFound);
        assert_eq!(directory.lookup(""), LookupOutcome::NotFound);
    }

    #[test]
    fn entries_with_empty_fields_are_kept() {
        let rosters = vec![CommitteeRoster::new("UNEP", "downloads/unep.docx")
            .member("", "Nameless Delegate", None)
            .member("noname@noordwijk.edu.mx", "", None)];
        let directory = Directory::from_rosters(&rosters);
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.key_count(), 2);
        assert!(matches!(
            directory.lookup("nameless delegate"),
            LookupOutcome::Found(_)
        ));
    }
}
