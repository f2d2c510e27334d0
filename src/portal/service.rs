use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::combobox::Combobox;
use super::committees::{self, Committee};
use super::data::default_rosters;
use super::directory::{Directory, LookupOutcome};
use super::domain::CommitteeRoster;
use super::render::{result_view, LookupView};
use super::roster::{RosterImportError, RosterImporter};
use super::suggest::{Suggestion, SuggestionEngine};
use crate::config::PortalConfig;

pub const LISTBOX_ID: &str = "student-suggestions";

/// Read-only portal state shared by the HTTP routes and the CLI.
#[derive(Debug)]
pub struct PortalService {
    directory: Arc<Directory>,
    engine: SuggestionEngine,
    catalog: Vec<Committee>,
    blur_delay: Duration,
}

impl PortalService {
    pub fn new(rosters: &[CommitteeRoster], config: &PortalConfig) -> Self {
        let directory = Directory::from_rosters(rosters);
        info!(
            entries = directory.len(),
            keys = directory.key_count(),
            committees = rosters.len(),
            "student directory loaded"
        );

        Self {
            directory: Arc::new(directory),
            engine: SuggestionEngine::from_config(config),
            catalog: committees::catalog(rosters),
            blur_delay: config.blur_delay,
        }
    }

    /// Uses the configured roster export when present, the built-in rosters otherwise.
    pub fn from_config(config: &PortalConfig) -> Result<Self, RosterImportError> {
        let rosters = match &config.roster_csv {
            Some(path) => {
                info!(path = %path.display(), "loading roster export");
                RosterImporter::from_path(path)?
            }
            None => default_rosters(),
        };
        Ok(Self::new(&rosters, config))
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn engine(&self) -> SuggestionEngine {
        self.engine
    }

    pub fn suggestions(&self, raw_query: &str) -> Vec<Suggestion> {
        let suggestions = self.engine.compute(&self.directory, raw_query);
        debug!(count = suggestions.len(), "suggestions computed");
        suggestions
    }

    pub fn lookup(&self, raw_query: &str) -> LookupView {
        let outcome = self.directory.lookup(raw_query);
        match &outcome {
            LookupOutcome::Found(entries) if entries.len() > 1 => {
                info!(matches = entries.len(), "lookup matched several assignments")
            }
            LookupOutcome::Found(_) => debug!("lookup matched"),
            LookupOutcome::NotFound => debug!("lookup found no student"),
        }
        result_view(&outcome)
    }

    pub fn committees(&self) -> &[Committee] {
        &self.catalog
    }

    pub fn committee(&self, code: &str) -> Option<&Committee> {
        committees::find(&self.catalog, code)
    }

    /// Fresh interaction state for one lookup input.
    pub fn combobox(&self) -> Combobox {
        Combobox::new(
            Arc::clone(&self.directory),
            self.engine,
            LISTBOX_ID,
            self.blur_delay,
        )
    }
}
