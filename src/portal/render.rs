use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use super::directory::LookupOutcome;
use super::domain::StudentEntry;
use super::suggest::Suggestion;

pub const DOWNLOAD_LABEL: &str = "Access Background Paper";
pub const MULTIPLE_MATCHES_NOTICE: &str =
    "Multiple assignments found for this search. All matching records are shown below.";
pub const NOT_FOUND_MESSAGE: &str =
    "Student not found. Please check your email or name and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    Found,
    NotFound,
}

/// "Student Information" card for a single assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentCard {
    pub email: String,
    pub name: String,
    pub committee: String,
    pub country_label: String,
    pub download_href: String,
    pub download_label: &'static str,
}

impl From<&StudentEntry> for StudentCard {
    fn from(entry: &StudentEntry) -> Self {
        Self {
            email: entry.email.clone(),
            name: entry.name.clone(),
            committee: entry.committee.clone(),
            country_label: entry.country_label().to_string(),
            download_href: entry.template.clone(),
            download_label: DOWNLOAD_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupView {
    pub status: LookupStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub cards: Vec<StudentCard>,
}

pub fn result_view(outcome: &LookupOutcome) -> LookupView {
    match outcome {
        LookupOutcome::Found(entries) => LookupView {
            status: LookupStatus::Found,
            notice: (entries.len() > 1).then_some(MULTIPLE_MATCHES_NOTICE),
            message: None,
            cards: entries.iter().map(StudentCard::from).collect(),
        },
        LookupOutcome::NotFound => LookupView {
            status: LookupStatus::NotFound,
            notice: None,
            message: Some(NOT_FOUND_MESSAGE),
            cards: Vec::new(),
        },
    }
}

/// HTML fragment swapped into the result area after a submission.
pub fn result_html(view: &LookupView) -> String {
    let mut html = String::new();

    match view.status {
        LookupStatus::NotFound => {
            let message = view.message.unwrap_or(NOT_FOUND_MESSAGE);
            let _ = write!(
                html,
                "<div class=\"search-error\" role=\"alert\"><p>{}</p></div>",
                encode_text(message)
            );
        }
        LookupStatus::Found => {
            html.push_str("<div class=\"search-result\">");
            if let Some(notice) = view.notice {
                let _ = write!(
                    html,
                    "<p class=\"multi-result-notice\">{}</p>",
                    encode_text(notice)
                );
            }
            for card in &view.cards {
                write_card(&mut html, card);
            }
            html.push_str("</div>");
        }
    }

    html
}

fn write_card(html: &mut String, card: &StudentCard) {
    html.push_str("<article class=\"student-card\"><h3>Student Information</h3><dl>");
    for (label, value) in [
        ("Email", &card.email),
        ("Name", &card.name),
        ("Committee", &card.committee),
        ("Country", &card.country_label),
    ] {
        let _ = write!(html, "<dt>{label}</dt><dd>{}</dd>", encode_text(value));
    }
    let _ = write!(
        html,
        "</dl><a class=\"download-button\" href=\"{}\" download>{}</a></article>",
        encode_double_quoted_attribute(&card.download_href),
        card.download_label
    );
}

/// Listbox markup for the suggestion panel. Empty when there is nothing to show.
pub fn suggestion_list_html(
    listbox_id: &str,
    suggestions: &[Suggestion],
    active_index: Option<usize>,
) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let listbox_id = encode_double_quoted_attribute(listbox_id);
    let mut html = String::new();
    let _ = write!(
        html,
        "<ul id=\"{listbox_id}\" class=\"suggestions\" role=\"listbox\">"
    );
    for (index, suggestion) in suggestions.iter().enumerate() {
        let selected = active_index == Some(index);
        let _ = write!(
            html,
            "<li id=\"{listbox_id}-option-{index}\" role=\"option\" aria-selected=\"{selected}\" \
             data-value=\"{}\"><span class=\"suggestion-primary\">{}</span>\
             <span class=\"suggestion-secondary\">{}</span></li>",
            encode_double_quoted_attribute(&suggestion.value),
            encode_text(&suggestion.primary),
            encode_text(&suggestion.secondary),
        );
    }
    html.push_str("</ul>");
    html
}
