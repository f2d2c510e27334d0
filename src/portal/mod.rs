//! Student directory lookup and incremental suggestions for the conference portal.

pub mod combobox;
pub mod committees;
pub mod data;
pub mod directory;
pub mod domain;
pub mod normalize;
pub mod render;
pub mod roster;
pub mod service;
pub mod suggest;

pub use combobox::{AriaState, Combobox, ComboboxEvent, Effect, Key, ListState, TimerHandle};
pub use committees::{Committee, Seat};
pub use directory::{Directory, IndexedEntry, LookupOutcome};
pub use domain::{CommitteeRoster, RosterMember, StudentEntry, PENDING_ASSIGNMENT};
pub use normalize::{normalize_key, NormalizedKey};
pub use render::{LookupStatus, LookupView, StudentCard};
pub use roster::{RosterImportError, RosterImporter};
pub use service::PortalService;
pub use suggest::{Suggestion, SuggestionEngine, SuggestionKind};
