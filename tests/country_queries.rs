use std::sync::Arc;

use smokestack::error::SmokestackError;
use smokestack::query::QueryService;
use smokestack::store::{Record, RecordStore};

fn setup() -> QueryService {
    let store = Arc::new(RecordStore::from_records(vec![
        Record::new("USA", 2000, "Oil", "X", "State", 10.0),
        Record::new("USA", 2001, "Oil", "X", "State", 12.0),
        Record::new("Chile", 2000, "Coal", "Y", "Company", 5.0),
    ]));
    QueryService::new(store)
}

#[test]
fn country_match_is_case_insensitive() {
    let queries = setup();
    for spelling in ["USA", "usa", "UsA"] {
        let hits = queries.by_country(spelling, None).expect("query ok");
        assert_eq!(hits.len(), 2, "spelling {spelling} should match both USA rows");
        assert!(hits.iter().all(|record| record.country() == "USA"));
    }
}

#[test]
fn country_lookup_is_reflexive() {
    let store = Arc::new(RecordStore::from_records(vec![
        Record::new("USA", 2000, "Oil", "X", "State", 10.0),
        Record::new("USA", 2001, "Oil", "X", "State", 12.0),
        Record::new("Chile", 2000, "Coal", "Y", "Company", 5.0),
    ]));
    let queries = QueryService::new(Arc::clone(&store));
    // Every stored record must be findable through its own country name.
    for record in store.records() {
        let hits = queries.by_country(record.country(), None).expect("query ok");
        assert!(hits.contains(record), "{} row went missing", record.country());
    }
}

#[test]
fn country_with_year_narrows_to_one_row() {
    let queries = setup();
    let hits = queries.by_country("USA", Some(2001)).expect("query ok");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].year(), 2001);
    assert_eq!(hits[0].value(), 12.0);
}

#[test]
fn unknown_country_is_not_found() {
    let queries = setup();
    let err = queries.by_country("France", None).unwrap_err();
    assert!(matches!(err, SmokestackError::NotFound(_)));
    let msg = format!("{err}");
    assert!(msg.contains("france"), "message should name the country: {msg}");
}

#[test]
fn country_year_combination_named_in_error() {
    let queries = setup();
    // Chile exists and 2001 exists, just not together.
    let err = queries.by_country("Chile", Some(2001)).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("chile") && msg.contains("2001"), "both filters should be named: {msg}");
}

#[test]
fn entity_and_entity_type_lookups() {
    let queries = setup();
    let hits = queries.by_entity("x", None).expect("query ok");
    assert_eq!(hits.len(), 2);
    let hits = queries.by_entity_type("company", None).expect("query ok");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].country(), "Chile");
    let err = queries.by_entity_type("cooperative", None).unwrap_err();
    assert!(matches!(err, SmokestackError::NotFound(_)));
}

#[test]
fn commodity_lookup_with_year() {
    let queries = setup();
    let hits = queries.by_commodity("oil", Some(2000)).expect("query ok");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].year(), 2000);
}
