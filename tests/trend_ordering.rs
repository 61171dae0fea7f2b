use std::sync::Arc;

use smokestack::query::QueryService;
use smokestack::store::{Record, RecordStore};

fn setup() -> QueryService {
    // Deliberately out of year order, with a duplicated year to probe
    // sort stability.
    let store = Arc::new(RecordStore::from_records(vec![
        Record::new("USA", 2001, "Oil", "X", "State", 12.0),
        Record::new("USA", 2000, "Oil", "X", "State", 10.0),
        Record::new("USA", 2000, "Coal", "Y", "Company", 3.0),
        Record::new("USA", 1998, "Gas", "X", "State", 7.0),
        Record::new("Chile", 1999, "Coal", "Y", "Company", 5.0),
    ]));
    QueryService::new(store)
}

#[test]
fn trends_sorted_ascending_by_year() {
    let queries = setup();
    let hits = queries.trends("usa", None, None).expect("query ok");
    assert_eq!(hits.len(), 4);
    let years: Vec<i32> = hits.iter().map(|record| record.year()).collect();
    assert_eq!(years, vec![1998, 2000, 2000, 2001]);
}

#[test]
fn trends_sort_is_stable_within_a_year() {
    let queries = setup();
    let hits = queries.trends("USA", None, None).expect("query ok");
    // The two 2000 rows appeared Oil-before-Coal in the store and must
    // keep that relative order.
    let year_2000: Vec<&str> = hits
        .iter()
        .filter(|record| record.year() == 2000)
        .map(|record| record.commodity())
        .collect();
    assert_eq!(year_2000, vec!["Oil", "Coal"]);
}

#[test]
fn trends_honor_the_year_range() {
    let queries = setup();
    let hits = queries.trends("USA", Some(2000), None).expect("query ok");
    assert!(hits.iter().all(|record| record.year() >= 2000));
    assert_eq!(hits.len(), 3);

    let hits = queries.trends("USA", None, Some(1999)).expect("query ok");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].year(), 1998);

    let hits = queries.trends("USA", Some(1999), Some(2000)).expect("query ok");
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|record| record.year() == 2000));
}

#[test]
fn empty_range_is_not_found() {
    let queries = setup();
    let err = queries.trends("USA", Some(2010), Some(2020)).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("2010") && msg.contains("2020"), "range should be named: {msg}");
}
