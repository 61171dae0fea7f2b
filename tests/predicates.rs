use smokestack::filter::{Filter, Predicate};
use smokestack::store::{Column, Record};

fn record() -> Record {
    Record::new("USA", 2000, "Oil", "Exxon", "Company", 10.0)
}

#[test]
fn text_equality_ignores_case() {
    let yes = Predicate::TextEquals {
        column: Column::Country,
        value: "usa".to_string(),
    };
    let no = Predicate::TextEquals {
        column: Column::Country,
        value: "chile".to_string(),
    };
    assert!(yes.matches(&record()));
    assert!(!no.matches(&record()));
}

#[test]
fn membership_checks_the_lowercased_set() {
    let among = Predicate::TextAmong {
        column: Column::Country,
        values: vec!["chile".to_string(), "usa".to_string()],
    };
    assert!(among.matches(&record()));
    let among = Predicate::TextAmong {
        column: Column::Country,
        values: Vec::new(),
    };
    assert!(!among.matches(&record()), "empty set matches nothing");
}

#[test]
fn year_range_bounds_are_inclusive_and_open() {
    let both = Predicate::YearBetween {
        start: Some(2000),
        end: Some(2000),
    };
    assert!(both.matches(&record()));
    let from = Predicate::YearBetween {
        start: Some(2001),
        end: None,
    };
    assert!(!from.matches(&record()));
    let up_to = Predicate::YearBetween {
        start: None,
        end: Some(2005),
    };
    assert!(up_to.matches(&record()));
}

#[test]
fn absent_parameters_add_no_predicate() {
    let filter = Filter::new()
        .text_equals_opt(Column::Country, None)
        .year(None)
        .year_range(None, None);
    assert!(filter.is_empty());
    assert!(filter.matches(&record()), "an empty filter matches everything");

    let filter = Filter::new()
        .text_equals_opt(Column::Country, Some("USA"))
        .year(Some(2000));
    assert_eq!(filter.len(), 2);
    assert!(filter.matches(&record()));
}

#[test]
fn display_names_the_active_filters() {
    let filter = Filter::new()
        .text_equals(Column::Country, "USA")
        .year(Some(2001));
    assert_eq!(filter.to_string(), "country \"usa\" and year 2001");

    let filter = Filter::new()
        .text_equals(Column::Country, "USA")
        .year_range(Some(2000), Some(2010));
    assert_eq!(filter.to_string(), "country \"usa\" and years 2000 to 2010");

    let filter = Filter::new().text_among(
        Column::Country,
        &["USA".to_string(), "Chile".to_string()],
    );
    assert_eq!(filter.to_string(), "country in [\"usa\", \"chile\"]");
}
