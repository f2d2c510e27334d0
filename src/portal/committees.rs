use serde::Serialize;

use super::data::{CPD, UNEP, UNHRC, UNODC, UNSC, WFP, WHO};
use super::domain::CommitteeRoster;

/// A delegation seat, resolved once against the rosters when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Seat {
    Open { country: String },
    Assigned { country: String, student: String },
}

impl Seat {
    pub fn country(&self) -> &str {
        match self {
            Seat::Open { country } | Seat::Assigned { country, .. } => country,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Seat::Open { country } => country.clone(),
            Seat::Assigned { country, student } => format!("{country} ({student})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Committee {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub template: Option<String>,
    pub seats: Vec<Seat>,
}

impl Committee {
    pub fn seat_labels(&self) -> Vec<String> {
        self.seats.iter().map(Seat::label).collect()
    }

    pub fn assigned_seats(&self) -> usize {
        self.seats
            .iter()
            .filter(|seat| matches!(seat, Seat::Assigned { .. }))
            .count()
    }
}

struct CommitteeDefinition {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    countries: &'static [&'static str],
}

const DEFINITIONS: &[CommitteeDefinition] = &[
    CommitteeDefinition {
        code: "CPD",
        name: CPD,
        description: "The Commission on Population and Development addresses global population trends, demographic transitions, and sustainable development challenges in the 21st century. Delegates will discuss aging populations, youth demographics, migration patterns, and their impacts on sustainable development.",
        countries: &[
            "United States", "China", "India", "Germany", "Brazil", "Nigeria", "Japan",
            "United Kingdom", "France", "Russia", "Mexico", "Indonesia", "Turkey", "Iran",
            "Vietnam", "Philippines", "Ethiopia", "Egypt", "South Africa", "Kenya",
            "Bangladesh", "Pakistan", "South Korea", "Italy",
        ],
    },
    CommitteeDefinition {
        code: "UNSC",
        name: UNSC,
        description: "The United Nations Security Council is responsible for maintaining international peace and security. This committee will address current global conflicts, peacekeeping operations, and threats to international stability through diplomatic solutions and collective action.",
        countries: &[
            "United States", "United Kingdom", "France", "Russia", "China", "Japan", "Germany",
            "Brazil", "India", "South Africa", "Nigeria", "Kenya", "Egypt", "Jordan", "Norway",
        ],
    },
    CommitteeDefinition {
        code: "WHO",
        name: WHO,
        description: "The World Health Organization focuses on global health security and addressing public health emergencies in an interconnected world. Delegates will tackle issues like pandemic preparedness, health equity, antimicrobial resistance, and health system strengthening.",
        countries: &[
            "United States", "China", "India", "Germany", "Brazil", "United Kingdom", "France",
            "Japan", "Canada", "Australia", "South Korea", "Mexico", "Indonesia", "Turkey",
            "Saudi Arabia", "South Africa", "Nigeria", "Kenya", "Ethiopia", "Egypt",
            "Bangladesh", "Pakistan", "Vietnam", "Philippines", "Thailand", "Malaysia",
            "Singapore", "New Zealand", "Chile", "Argentina", "Colombia", "Peru",
        ],
    },
    CommitteeDefinition {
        code: "UNHRC",
        name: UNHRC,
        description: "The UN Human Rights Council is dedicated to protecting and promoting human rights worldwide, addressing violations and strengthening international human rights law. This committee will examine contemporary human rights challenges and develop mechanisms for protection and accountability.",
        countries: &[
            "United States", "Germany", "United Kingdom", "France", "Japan", "Canada",
            "Australia", "Netherlands", "Sweden", "Norway", "Denmark", "Switzerland", "Austria",
            "Belgium", "Finland", "Ireland", "New Zealand", "South Korea", "Chile", "Uruguay",
            "Costa Rica", "Brazil", "Argentina", "Mexico", "India", "South Africa", "Ghana",
            "Botswana", "Senegal", "Tunisia", "Morocco", "Jordan", "Indonesia", "Philippines",
            "Malaysia", "Thailand", "Mongolia", "Fiji", "Samoa", "Tonga", "Vanuatu",
            "Solomon Islands", "Palau", "Micronesia", "Marshall Islands", "Kiribati", "Tuvalu",
        ],
    },
    CommitteeDefinition {
        code: "UNODC",
        name: UNODC,
        description: "The UN Office on Drugs and Crime combats transnational organized crime, drug trafficking, and corruption through international cooperation. Delegates will address cybercrime, human trafficking, money laundering, and the global drug problem.",
        countries: &[
            "United States", "Mexico", "Colombia", "Peru", "Bolivia", "Afghanistan", "Pakistan",
            "Turkey", "Iran", "Russia", "China", "India", "Thailand", "Myanmar", "Laos",
            "Vietnam", "Philippines", "Indonesia", "Malaysia", "Singapore", "Australia", "Japan",
            "South Korea", "Germany", "Netherlands", "Belgium", "France", "Italy",
        ],
    },
    CommitteeDefinition {
        code: "UNEP",
        name: UNEP,
        description: "The UN Environment Programme leads global environmental action and promotes sustainable development for future generations. This committee will tackle climate change mitigation, biodiversity conservation, pollution control, and the transition to a green economy.",
        countries: &[
            "United States", "China", "India", "Germany", "Japan", "United Kingdom", "France",
            "Canada", "Australia", "Brazil", "Russia", "South Africa", "Mexico", "Indonesia",
            "Turkey", "South Korea", "Saudi Arabia", "Argentina", "Poland", "Thailand", "Egypt",
            "Nigeria", "Kenya", "Ethiopia", "Morocco", "Algeria", "Ghana", "Tanzania", "Uganda",
            "Rwanda", "Botswana", "Namibia", "Zimbabwe", "Zambia", "Malawi", "Madagascar",
        ],
    },
    CommitteeDefinition {
        code: "WFP",
        name: WFP,
        description: "Listed in the student rosters. No fixed delegation list is published for this committee.",
        countries: &[],
    },
];

/// Builds the committee catalog, resolving each delegation against the rosters.
pub fn catalog(rosters: &[CommitteeRoster]) -> Vec<Committee> {
    DEFINITIONS
        .iter()
        .map(|definition| {
            let roster = rosters
                .iter()
                .find(|roster| roster.committee == definition.name);

            let seats = definition
                .countries
                .iter()
                .map(|country| {
                    let holder = roster.and_then(|roster| {
                        roster
                            .members
                            .iter()
                            .find(|member| member.country.as_deref() == Some(*country))
                    });
                    match holder {
                        Some(member) => Seat::Assigned {
                            country: country.to_string(),
                            student: member.name.clone(),
                        },
                        None => Seat::Open {
                            country: country.to_string(),
                        },
                    }
                })
                .collect();

            Committee {
                code: definition.code,
                name: definition.name,
                description: definition.description,
                template: roster.map(|roster| roster.template.clone()),
                seats,
            }
        })
        .collect()
}

pub fn find<'a>(catalog: &'a [Committee], code: &str) -> Option<&'a Committee> {
    let code = code.trim();
    catalog
        .iter()
        .find(|committee| committee.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::data::default_rosters;

    #[test]
    fn seats_are_resolved_against_rosters() {
        let catalog = catalog(&default_rosters());
        let who = find(&catalog, "who").expect("WHO present");
        assert_eq!(who.name, "World Health Organization");
        assert_eq!(who.seats.len(), 32);

        let germany = who
            .seats
            .iter()
            .find(|seat| seat.country() == "Germany")
            .expect("Germany seat");
        assert_eq!(
            germany,
            &Seat::Assigned {
                country: "Germany".to_string(),
                student: "Ana Chiuntí".to_string(),
            }
        );
        assert!(who.seat_labels().contains(&"Germany (Ana Chiuntí)".to_string()));
        assert!(who.seat_labels().contains(&"China".to_string()));
        assert_eq!(who.template.as_deref(), Some("downloads/who-background-paper.pdf"));
    }

    #[test]
    fn committees_without_roster_are_all_open() {
        let catalog = catalog(&[]);
        assert_eq!(catalog.len(), 7);
        assert!(catalog.iter().all(|committee| committee.assigned_seats() == 0));
        assert!(catalog.iter().all(|committee| committee.template.is_none()));
    }

    #[test]
    fn roster_only_committee_has_no_fixed_seats() {
        let catalog = catalog(&default_rosters());
        let wfp = find(&catalog, "WFP").expect("WFP present");
        assert!(wfp.seats.is_empty());
        assert_eq!(wfp.template.as_deref(), Some("downloads/wfp-background-paper.pdf"));
    }

    #[test]
    fn lookup_by_code_is_case_insensitive() {
        let catalog = catalog(&default_rosters());
        assert!(find(&catalog, " unsc ").is_some());
        assert!(find(&catalog, "Unhrc").is_some());
        assert!(find(&catalog, "GA").is_none());
    }
}
