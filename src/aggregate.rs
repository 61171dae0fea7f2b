//! Distinct-value listings and the dataset summary.

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::store::{Column, FieldValue, RecordStore, Year};

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct YearRange {
    pub min: Option<Year>,
    pub max: Option<Year>,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Summary {
    pub total_countries: usize,
    pub year_range: YearRange,
    pub total_records: usize,
    pub commodities: Vec<String>,
    pub entity_types: Vec<String>,
}

pub struct AggregateService {
    store: Arc<RecordStore>,
}

impl AggregateService {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Distinct country names in first-occurrence order.
    /// An empty store yields an empty list, never an error.
    pub fn countries(&self) -> Vec<String> {
        self.store.distinct_text(Column::Country)
    }

    /// Distinct non-null values of an arbitrary column, addressed by name.
    pub fn column_values(&self, name: &str) -> Result<(Column, Vec<FieldValue>)> {
        let column: Column = name.parse()?;
        Ok((column, self.store.distinct_values(column)))
    }

    /// Summary statistics. Total on the empty store: counts are zero and
    /// the year range is open.
    pub fn summary(&self) -> Summary {
        let years = || self.store.records().iter().map(|record| record.year());
        Summary {
            total_countries: self.countries().len(),
            year_range: YearRange {
                min: years().min(),
                max: years().max(),
            },
            total_records: self.store.len(),
            commodities: self.store.distinct_text(Column::Commodity),
            entity_types: self.store.distinct_text(Column::ParentType),
        }
    }
}
