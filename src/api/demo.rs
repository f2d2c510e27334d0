use super::cli::{CommitteesArgs, RosterArgs};
use super::infra::load_cli_portal;
use crate::error::AppError;
use crate::portal::{
    Combobox, ComboboxEvent, Effect, Key, LookupStatus, LookupView, PortalService, Suggestion,
    TimerHandle,
};
use clap::Args;
use std::str::FromStr;

#[derive(Args, Debug)]
pub(crate) struct QueryArgs {
    /// Email address or full name, in any casing
    pub(crate) query: String,
    /// Print the JSON payload served by the HTTP API instead of text
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Comma-separated steps: type:<text>, down, up, enter, esc, focus, blur,
    /// wait, click:<n>, outside, submit
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["type:acru", "down", "enter", "submit"]
    )]
    pub(crate) steps: Vec<DemoStep>,
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
}

/// One simulated user action against the lookup input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DemoStep {
    Type(String),
    Key(Key),
    Focus,
    Blur,
    /// Let the pending blur timer fire.
    Wait,
    Click(usize),
    Outside,
    Submit,
}

impl FromStr for DemoStep {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if let Some(text) = raw.strip_prefix("type:") {
            return Ok(Self::Type(text.to_string()));
        }
        if let Some(index) = raw.strip_prefix("click:") {
            return index
                .trim()
                .parse()
                .map(Self::Click)
                .map_err(|err| format!("invalid option index '{index}' ({err})"));
        }

        match raw.trim().to_ascii_lowercase().as_str() {
            "down" => Ok(Self::Key(Key::ArrowDown)),
            "up" => Ok(Self::Key(Key::ArrowUp)),
            "enter" => Ok(Self::Key(Key::Enter)),
            "esc" | "escape" => Ok(Self::Key(Key::Escape)),
            "focus" => Ok(Self::Focus),
            "blur" => Ok(Self::Blur),
            "wait" => Ok(Self::Wait),
            "outside" => Ok(Self::Outside),
            "submit" => Ok(Self::Submit),
            other => Err(format!("unknown demo step '{other}'")),
        }
    }
}

pub(crate) fn run_lookup(args: QueryArgs) -> Result<(), AppError> {
    let service = load_cli_portal(args.roster)?;
    let view = service.lookup(&args.query);

    if args.json {
        print_json(&view);
    } else {
        render_lookup(&view);
    }
    Ok(())
}

pub(crate) fn run_suggest(args: QueryArgs) -> Result<(), AppError> {
    let service = load_cli_portal(args.roster)?;
    let suggestions = service.suggestions(&args.query);

    if args.json {
        print_json(&suggestions);
    } else if suggestions.is_empty() {
        println!("No suggestions for '{}'", args.query);
    } else {
        render_suggestions(&suggestions, None);
    }
    Ok(())
}

pub(crate) fn run_committees(args: CommitteesArgs) -> Result<(), AppError> {
    let service = load_cli_portal(args.roster)?;
    let lines = match args.code {
        Some(code) => committee_lines(&service, code)?,
        None => service
            .committees()
            .iter()
            .map(|committee| {
                format!(
                    "- {:<6} {} ({} delegations)",
                    committee.code,
                    committee.name,
                    committee.seats.len()
                )
            })
            .collect(),
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn committee_lines(service: &PortalService, code: String) -> Result<Vec<String>, AppError> {
    let Some(committee) = service.committee(&code) else {
        return Err(AppError::UnknownCommittee(code));
    };

    let mut lines = vec![
        format!("{} ({})", committee.name, committee.code),
        committee.description.to_string(),
    ];
    if let Some(template) = &committee.template {
        lines.push(format!("Background paper: {template}"));
    }
    lines.push(format!(
        "\nParticipating countries ({} assigned of {}):",
        committee.assigned_seats(),
        committee.seats.len()
    ));
    lines.extend(committee.seat_labels().into_iter().map(|label| format!("- {label}")));
    Ok(lines)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = load_cli_portal(args.roster)?;
    let mut session = DemoSession::new(&service);

    println!("Student lookup demo");
    for step in args.steps {
        println!("\n> {step:?}");
        for line in session.apply(step) {
            println!("  {line}");
        }
        render_combobox(&session.combobox);
    }
    Ok(())
}

/// Drives a combobox the way a browser host would, keeping the blur timer.
pub(crate) struct DemoSession<'a> {
    service: &'a PortalService,
    combobox: Combobox,
    timer: Option<TimerHandle>,
}

impl<'a> DemoSession<'a> {
    pub(crate) fn new(service: &'a PortalService) -> Self {
        Self {
            service,
            combobox: service.combobox(),
            timer: None,
        }
    }

    /// Applies one step and describes the effects the host carried out.
    pub(crate) fn apply(&mut self, step: DemoStep) -> Vec<String> {
        let event = match step {
            DemoStep::Type(text) => ComboboxEvent::Input(text),
            DemoStep::Key(key) => ComboboxEvent::Key(key),
            DemoStep::Focus => ComboboxEvent::Focus,
            DemoStep::Blur => ComboboxEvent::Blur,
            DemoStep::Wait => match self.timer.take() {
                Some(handle) => ComboboxEvent::BlurElapsed(handle),
                None => return vec!["no pending timer".to_string()],
            },
            DemoStep::Click(index) => ComboboxEvent::PointerDownOption(index),
            DemoStep::Outside => ComboboxEvent::PointerDownOutside,
            DemoStep::Submit => ComboboxEvent::Submit,
        };

        let mut notes = Vec::new();
        for effect in self.combobox.handle(event) {
            match effect {
                Effect::ScheduleBlurClose { handle, delay } => {
                    self.timer = Some(handle);
                    notes.push(format!("close scheduled in {}ms", delay.as_millis()));
                }
                Effect::CancelBlurClose(handle) => {
                    if self.timer == Some(handle) {
                        self.timer = None;
                    }
                    notes.push("scheduled close cancelled".to_string());
                }
                Effect::SetValue { value, caret } => {
                    notes.push(format!("input set to '{value}' (caret {caret})"));
                }
                Effect::SubmitLookup(query) => {
                    let view = self.service.lookup(&query);
                    notes.push(format!("submitted '{query}'"));
                    notes.extend(lookup_lines(&view));
                }
                Effect::Render | Effect::Close | Effect::FocusInput | Effect::PreventDefault => {}
            }
        }
        notes
    }
}

fn render_combobox(combobox: &Combobox) {
    let aria = combobox.aria();
    println!(
        "  value: '{}' | expanded: {} | active: {}",
        combobox.value(),
        aria.expanded,
        aria.active_descendant.as_deref().unwrap_or("none")
    );
    render_suggestions(combobox.suggestions(), combobox.active_index());
}

fn render_suggestions(suggestions: &[Suggestion], active: Option<usize>) {
    for (index, suggestion) in suggestions.iter().enumerate() {
        let marker = if active == Some(index) { '>' } else { ' ' };
        println!(
            "  {marker} {} | {}",
            suggestion.primary, suggestion.secondary
        );
    }
}

fn render_lookup(view: &LookupView) {
    for line in lookup_lines(view) {
        println!("{line}");
    }
}

fn lookup_lines(view: &LookupView) -> Vec<String> {
    let mut lines = Vec::new();
    match view.status {
        LookupStatus::NotFound => {
            lines.push(view.message.unwrap_or_default().to_string());
        }
        LookupStatus::Found => {
            if let Some(notice) = view.notice {
                lines.push(notice.to_string());
            }
            for card in &view.cards {
                lines.push("Student Information".to_string());
                lines.push(format!("  Email: {}", card.email));
                lines.push(format!("  Name: {}", card.name));
                lines.push(format!("  Committee: {}", card.committee));
                lines.push(format!("  Country: {}", card.country_label));
                lines.push(format!("  {}: {}", card.download_label, card.download_href));
            }
        }
    }
    lines
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("unable to encode JSON output: {err}"),
    }
}
