//! Row predicates and their AND-composition.
//!
//! A [`Filter`] is built from the optional parameters of a query. Absent
//! parameters contribute no predicate at all, so presence is decided by
//! `Option` and never by truthiness: a year of 0 filters on year 0.

use std::fmt;

use crate::store::{Column, Record, Year};

// ------------- Predicate -------------
#[derive(Clone, Debug)]
pub enum Predicate {
    /// Case-insensitive equality on a text column.
    TextEquals { column: Column, value: String },
    /// Case-insensitive membership on a text column.
    TextAmong { column: Column, values: Vec<String> },
    YearEquals(Year),
    /// Inclusive range, either bound may be open.
    YearBetween {
        start: Option<Year>,
        end: Option<Year>,
    },
}

impl Predicate {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::TextEquals { column, value } => record
                .text(*column)
                .is_some_and(|text| text.to_lowercase() == *value),
            Predicate::TextAmong { column, values } => record
                .text(*column)
                .is_some_and(|text| values.contains(&text.to_lowercase())),
            Predicate::YearEquals(year) => record.year() == *year,
            Predicate::YearBetween { start, end } => {
                start.is_none_or(|start| record.year() >= start)
                    && end.is_none_or(|end| record.year() <= end)
            }
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Predicate::TextEquals { column, value } => write!(f, "{column} \"{value}\""),
            Predicate::TextAmong { column, values } => {
                if values.is_empty() {
                    return write!(f, "{column} (none given)");
                }
                let quoted: Vec<String> =
                    values.iter().map(|value| format!("\"{value}\"")).collect();
                write!(f, "{column} in [{}]", quoted.join(", "))
            }
            Predicate::YearEquals(year) => write!(f, "year {year}"),
            Predicate::YearBetween {
                start: Some(start),
                end: Some(end),
            } => write!(f, "years {start} to {end}"),
            Predicate::YearBetween {
                start: Some(start),
                end: None,
            } => write!(f, "years from {start}"),
            Predicate::YearBetween {
                start: None,
                end: Some(end),
            } => write!(f, "years up to {end}"),
            Predicate::YearBetween {
                start: None,
                end: None,
            } => write!(f, "any year"),
        }
    }
}

// ------------- Filter -------------
// All predicates are ANDed. An empty filter matches every record.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn text_equals(mut self, column: Column, value: &str) -> Self {
        self.predicates.push(Predicate::TextEquals {
            column,
            value: value.to_lowercase(),
        });
        self
    }
    pub fn text_equals_opt(self, column: Column, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.text_equals(column, value),
            None => self,
        }
    }
    pub fn text_among(mut self, column: Column, values: &[String]) -> Self {
        self.predicates.push(Predicate::TextAmong {
            column,
            values: values.iter().map(|value| value.to_lowercase()).collect(),
        });
        self
    }
    pub fn year(mut self, year: Option<Year>) -> Self {
        if let Some(year) = year {
            self.predicates.push(Predicate::YearEquals(year));
        }
        self
    }
    pub fn year_range(mut self, start: Option<Year>, end: Option<Year>) -> Self {
        if start.is_some() || end.is_some() {
            self.predicates.push(Predicate::YearBetween { start, end });
        }
        self
    }
    pub fn matches(&self, record: &Record) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(record))
    }
    pub fn len(&self) -> usize {
        self.predicates.len()
    }
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.predicates.is_empty() {
            return write!(f, "no filter");
        }
        let parts: Vec<String> = self
            .predicates
            .iter()
            .map(|predicate| predicate.to_string())
            .collect();
        write!(f, "{}", parts.join(" and "))
    }
}
