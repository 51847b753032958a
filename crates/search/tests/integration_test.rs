//! Integration tests for the search core over real registry records.
//!
//! These exercise the full path a list page uses: fixture-shaped records,
//! a session with the page's searchable fields, and projections under
//! combined criteria.

use chrono::Months;
use registry::{CaseStatus, EyeColor, Gender, HairColor, MissingPerson, SkinColor};
use search::{FilterKey, SearchSession, MISSING_SEARCH_FIELDS};

/// A missing person whose current age is exactly `age` years
fn person(id: &str, name: &str, gender: Gender, age: u32) -> MissingPerson {
    let today = chrono::Utc::now().date_naive();
    let birth = today
        .checked_sub_months(Months::new(12 * age))
        .expect("birth date in range");

    MissingPerson {
        id: id.to_string(),
        user_id: "u-1".to_string(),
        name: name.to_string(),
        nickname: String::new(),
        birth_date: Some(birth),
        date_of_disappearance: None,
        height: String::new(),
        clothes: String::new(),
        gender,
        eyes: EyeColor::Brown,
        hair: HairColor::Black,
        skin: SkinColor::Brown,
        photo_url: String::new(),
        location: None,
        status: CaseStatus::Disappeared,
        event_report: String::new(),
        tattoo_description: String::new(),
        scar_description: String::new(),
    }
}

fn ana_and_bruno() -> Vec<MissingPerson> {
    vec![
        person("m-1", "Ana", Gender::Female, 25),
        person("m-2", "Bruno", Gender::Male, 40),
    ]
}

#[test]
fn query_only_selects_ana() {
    let records = ana_and_bruno();
    let mut session = SearchSession::new(&["name"]);
    session.set(FilterKey::Query, "an");

    let visible = session.filtered(&records);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Ana");
}

#[test]
fn age_window_selects_bruno() {
    let records = ana_and_bruno();
    let mut session = SearchSession::new(&["name"]);
    session.set(FilterKey::AgeMin, "30");
    session.set(FilterKey::AgeMax, "50");

    let visible = session.filtered(&records);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Bruno");
}

#[test]
fn conjunctive_criteria_can_select_nobody() {
    let records = ana_and_bruno();
    let mut session = SearchSession::new(&["name"]);
    // Ana fails the age bound, Bruno fails the gender facet
    session.set(FilterKey::Gender, "female");
    session.set(FilterKey::AgeMin, "30");

    assert!(session.filtered(&records).is_empty());
    assert_eq!(session.active_count(), 2);
}

#[test]
fn facet_equality_holds_for_every_projected_record() {
    let records = ana_and_bruno();
    let mut session = SearchSession::new(&MISSING_SEARCH_FIELDS);
    session.set(FilterKey::Gender, "female");

    for record in session.filtered(&records) {
        assert_eq!(record.gender, Gender::Female);
    }
}

#[test]
fn default_session_is_the_identity_projection() {
    let records = ana_and_bruno();
    let session = SearchSession::new(&MISSING_SEARCH_FIELDS);

    let visible = session.filtered(&records);
    let ids: Vec<&str> = visible.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["m-1", "m-2"]);
}

#[test]
fn query_searches_all_nominated_missing_fields() {
    let mut records = ana_and_bruno();
    records[1].event_report = "seen near Copacabana".to_string();

    let mut session = SearchSession::new(&MISSING_SEARCH_FIELDS);
    session.set(FilterKey::Query, "copacabana");

    let visible = session.filtered(&records);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Bruno");
}
