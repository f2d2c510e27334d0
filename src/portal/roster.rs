use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{CommitteeRoster, RosterMember};

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Committee")]
    committee: String,
    #[serde(rename = "Template")]
    template: String,
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Country", default, deserialize_with = "empty_string_as_none")]
    country: Option<String>,
}

/// Reads a roster export with `Committee,Template,Email,Name,Country` columns.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<CommitteeRoster>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Rows are grouped per committee in first-seen order. The first template
    /// listed for a committee wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<CommitteeRoster>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut rosters: Vec<CommitteeRoster> = Vec::new();

        for record in csv_reader.deserialize::<RosterRow>() {
            let row = record?;
            let member = RosterMember {
                email: row.email,
                name: row.name,
                country: row.country,
            };

            match rosters
                .iter_mut()
                .find(|roster| roster.committee == row.committee)
            {
                Some(roster) => roster.members.push(member),
                None => {
                    let mut roster = CommitteeRoster::new(row.committee, row.template);
                    roster.members.push(member);
                    rosters.push(roster);
                }
            }
        }

        Ok(rosters)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXPORT: &str = "Committee,Template,Email,Name,Country\n\
World Food Programme,downloads/wfp.pdf,acruza@noordwijk.edu.mx,Arantza Cruz,\n\
World Health Organization,downloads/who.pdf,achiuntib@noordwijk.edu.mx,Ana Chiuntí,Germany\n\
World Food Programme,downloads/other.pdf, tlunaq@noordwijk.edu.mx ,Tomás Luna,Ethiopia\n";

    #[test]
    fn groups_rows_by_committee_in_order() {
        let rosters = RosterImporter::from_reader(Cursor::new(EXPORT)).expect("import succeeds");
        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters[0].committee, "World Food Programme");
        assert_eq!(rosters[0].template, "downloads/wfp.pdf");
        assert_eq!(rosters[0].members.len(), 2);
        assert_eq!(rosters[0].members[0].country, None);
        assert_eq!(rosters[0].members[1].email, "tlunaq@noordwijk.edu.mx");
        assert_eq!(rosters[1].members[0].country.as_deref(), Some("Germany"));
    }

    #[test]
    fn missing_columns_are_reported() {
        let error = RosterImporter::from_reader(Cursor::new("Email,Name\na@b.mx,A\n"))
            .expect_err("committee column required");
        assert!(matches!(error, RosterImportError::Csv(_)));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = RosterImporter::from_path("./does-not-exist.csv").expect_err("io error");
        match error {
            RosterImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
