use mun_portal::config::PortalConfig;
use mun_portal::portal::data::default_rosters;
use mun_portal::portal::{
    normalize_key, ComboboxEvent, Directory, Effect, Key, LookupOutcome, LookupStatus,
    PortalService, RosterImporter, SuggestionEngine, SuggestionKind,
};
use std::io::Cursor;
use std::path::PathBuf;

fn service() -> PortalService {
    PortalService::new(&default_rosters(), &PortalConfig::default())
}

#[test]
fn every_entry_is_reachable_by_email_and_name() {
    let directory = Directory::from_rosters(&default_rosters());
    let total_members: usize = default_rosters().iter().map(|r| r.members.len()).sum();
    assert_eq!(directory.len(), total_members);

    for indexed in directory.entries() {
        for key in [&indexed.normalized_email, &indexed.normalized_name] {
            match directory.lookup(key.as_str()) {
                LookupOutcome::Found(entries) => assert!(
                    entries.contains(&indexed.entry),
                    "{key} should include {:?}",
                    indexed.entry
                ),
                LookupOutcome::NotFound => panic!("{key} not registered"),
            }
        }
    }
}

#[test]
fn every_email_prefix_recalls_its_suggestion() {
    let directory = Directory::from_rosters(&default_rosters());
    let engine = SuggestionEngine::new(2, usize::MAX);

    for indexed in directory.entries() {
        let email = indexed.normalized_email.as_str();
        for end in 2..=email.len() {
            let query = &email[..end];
            let suggestions = engine.compute(&directory, query);
            assert!(
                suggestions.iter().any(|s| s.kind == SuggestionKind::Email
                    && normalize_key(&s.value) == indexed.normalized_email),
                "query {query} lost {email}"
            );
        }
    }
}

#[test]
fn suggestions_never_exceed_the_bound() {
    let service = service();
    let suggestions = service.suggestions("noordwijk");
    assert_eq!(suggestions.len(), 10);
    assert!(suggestions.iter().all(|s| s.kind == SuggestionKind::Email));
}

#[test]
fn diacritics_are_optional_in_queries() {
    let service = service();
    assert_eq!(
        service.lookup("ana chiunti"),
        service.lookup("  Ana   Chiuntí ")
    );
    assert_eq!(normalize_key("Ana Chiuntí "), normalize_key("ana chiunti"));
}

#[test]
fn delegate_in_two_committees_sees_both_cards() {
    let view = service().lookup("cquirosm@noordwijk.edu.mx");
    assert_eq!(view.status, LookupStatus::Found);
    assert!(view.notice.is_some());
    let countries: Vec<_> = view.cards.iter().map(|c| c.country_label.as_str()).collect();
    assert_eq!(countries, vec!["United States", "Morocco"]);
}

#[test]
fn typing_selecting_and_submitting_round_trips() {
    let service = service();
    let mut combobox = service.combobox();

    combobox.handle(ComboboxEvent::Focus);
    combobox.handle(ComboboxEvent::Input("Quir".to_string()));
    assert!(combobox.is_open());

    let name_index = combobox
        .suggestions()
        .iter()
        .position(|s| s.kind == SuggestionKind::Name)
        .expect("name suggestion");
    combobox.handle(ComboboxEvent::Blur);
    let effects = combobox.handle(ComboboxEvent::PointerDownOption(name_index));
    assert!(effects.contains(&Effect::FocusInput));
    assert_eq!(combobox.value(), "Camilo Quirós");

    let effects = combobox.handle(ComboboxEvent::Key(Key::Enter));
    assert!(effects.is_empty(), "closed list lets the form submit");

    let effects = combobox.handle(ComboboxEvent::Submit);
    let Some(Effect::SubmitLookup(query)) = effects.last() else {
        panic!("expected a lookup, got {effects:?}");
    };
    let submitted = service.lookup(query);
    assert_eq!(submitted, service.lookup("Camilo Quirós"));
    assert_eq!(submitted.cards.len(), 2);
}

#[test]
fn imported_rosters_feed_the_directory() {
    let export = "Committee,Template,Email,Name,Country\n\
World Food Programme,downloads/wfp.pdf,acruza@noordwijk.edu.mx,Arantza Cruz,\n\
UN Environment Programme,downloads/unep.pdf,srodriguez@noordwijk.edu.mx,Sofía Rodríguez,Kenya\n";
    let rosters = RosterImporter::from_reader(Cursor::new(export)).expect("import succeeds");
    let service = PortalService::new(&rosters, &PortalConfig::default());

    let view = service.lookup("SOFIA RODRIGUEZ");
    assert_eq!(view.cards.len(), 1);
    assert_eq!(view.cards[0].country_label, "Kenya");
    assert_eq!(view.cards[0].download_href, "downloads/unep.pdf");

    let unep = service.committee("UNEP").expect("UNEP in catalog");
    assert_eq!(unep.assigned_seats(), 1);
    assert!(service.committee("CPD").expect("CPD").template.is_none());
}

#[test]
fn sample_roster_export_loads_through_config() {
    let sample = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/rosters.sample.csv");
    let config = PortalConfig {
        roster_csv: Some(sample),
        ..PortalConfig::default()
    };
    let service = PortalService::from_config(&config).expect("sample roster loads");

    assert_eq!(service.directory().len(), 4);
    let view = service.lookup("tomas luna");
    assert_eq!(view.status, LookupStatus::Found);
    assert_eq!(view.cards[0].committee, "World Food Programme");
    assert_eq!(view.cards[0].country_label, "Ethiopia");
    let moderator = service.lookup("acruza@noordwijk.edu.mx");
    assert_eq!(moderator.cards[0].country_label, "Pending Assignment");
}
