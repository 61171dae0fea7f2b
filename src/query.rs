//! Filtered lookups over a shared record store.
//!
//! Every operation scans the injected store with an ANDed [`Filter`] and
//! classifies an empty result as [`SmokestackError::NotFound`], with the
//! message naming the filter values that produced no match.

use std::sync::Arc;

use crate::error::{Result, SmokestackError};
use crate::filter::Filter;
use crate::store::{Column, Record, RecordStore, Year};

pub struct QueryService {
    store: Arc<RecordStore>,
}

impl QueryService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    fn scan(&self, filter: Filter) -> Result<Vec<Record>> {
        let hits: Vec<Record> = self
            .store
            .records()
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        if hits.is_empty() {
            Err(SmokestackError::NotFound(filter.to_string()))
        } else {
            Ok(hits)
        }
    }

    pub fn by_country(&self, name: &str, year: Option<Year>) -> Result<Vec<Record>> {
        self.scan(Filter::new().text_equals(Column::Country, name).year(year))
    }

    pub fn by_year(&self, year: Year, country: Option<&str>) -> Result<Vec<Record>> {
        self.scan(
            Filter::new()
                .year(Some(year))
                .text_equals_opt(Column::Country, country),
        )
    }

    pub fn by_commodity(&self, name: &str, year: Option<Year>) -> Result<Vec<Record>> {
        self.scan(Filter::new().text_equals(Column::Commodity, name).year(year))
    }

    pub fn by_entity(&self, name: &str, year: Option<Year>) -> Result<Vec<Record>> {
        self.scan(
            Filter::new()
                .text_equals(Column::ParentEntity, name)
                .year(year),
        )
    }

    pub fn by_entity_type(&self, kind: &str, year: Option<Year>) -> Result<Vec<Record>> {
        self.scan(
            Filter::new()
                .text_equals(Column::ParentType, kind)
                .year(year),
        )
    }

    pub fn compare_countries(&self, names: &[String], year: Option<Year>) -> Result<Vec<Record>> {
        self.scan(Filter::new().text_among(Column::Country, names).year(year))
    }

    /// Like [`by_country`](Self::by_country) with an optional year range,
    /// sorted ascending by year. The sort is stable, so records within the
    /// same year keep their store order.
    pub fn trends(
        &self,
        country: &str,
        start_year: Option<Year>,
        end_year: Option<Year>,
    ) -> Result<Vec<Record>> {
        let mut hits = self.scan(
            Filter::new()
                .text_equals(Column::Country, country)
                .year_range(start_year, end_year),
        )?;
        hits.sort_by_key(|record| record.year());
        Ok(hits)
    }
}
