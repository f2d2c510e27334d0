use serde::{Deserialize, Serialize};

/// Label shown when a delegate has no country yet (moderators, chairs).
pub const PENDING_ASSIGNMENT: &str = "Pending Assignment";

/// One committee assignment for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEntry {
    pub email: String,
    pub name: String,
    pub committee: String,
    pub country: Option<String>,
    pub template: String,
}

impl StudentEntry {
    pub fn country_label(&self) -> &str {
        self.country.as_deref().unwrap_or(PENDING_ASSIGNMENT)
    }
}

/// Delegates assigned to a single committee, as published by the organizers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeRoster {
    pub committee: String,
    pub template: String,
    pub members: Vec<RosterMember>,
}

impl CommitteeRoster {
    pub fn new(committee: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            committee: committee.into(),
            template: template.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, email: &str, name: &str, country: Option<&str>) -> Self {
        self.members.push(RosterMember {
            email: email.to_string(),
            name: name.to_string(),
            country: country.map(str::to_string),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMember {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}
