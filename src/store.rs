// other services use HashSet to track already seen values during scans
use std::collections::HashSet;
use std::fmt;
use std::hash::BuildHasherDefault;
use std::path::Path;
use std::str::FromStr;

// we will use a fast hashing algo for the seen-sets, where keys are plain scalars
use seahash::SeaHasher;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SmokestackError};

// ------------- Year -------------
pub type Year = i32;

pub type ValueHasher = BuildHasherDefault<SeaHasher>;

// ------------- Column -------------
// The dataset has exactly these six columns, in this order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Column {
    Country,
    Year,
    Commodity,
    ParentEntity,
    ParentType,
    Value,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Country,
        Column::Year,
        Column::Commodity,
        Column::ParentEntity,
        Column::ParentType,
        Column::Value,
    ];
    pub fn name(&self) -> &'static str {
        match self {
            Column::Country => "country",
            Column::Year => "year",
            Column::Commodity => "commodity",
            Column::ParentEntity => "parent_entity",
            Column::ParentType => "parent_type",
            Column::Value => "value",
        }
    }
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|column| column.name()).collect()
    }
}
impl FromStr for Column {
    type Err = SmokestackError;
    fn from_str(requested: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.name() == requested)
            .ok_or_else(|| SmokestackError::UnknownColumn {
                requested: requested.to_owned(),
                valid: Self::names().join(", "),
            })
    }
}
impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ------------- Record -------------
// One emissions record. Fields are encapsulated and only exposed through
// getters, which yields true immutability for records after loading.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Record {
    country: String,
    year: Year,
    commodity: String,
    parent_entity: String,
    parent_type: String,
    value: f64,
}

impl Record {
    pub fn new(
        country: &str,
        year: Year,
        commodity: &str,
        parent_entity: &str,
        parent_type: &str,
        value: f64,
    ) -> Self {
        Self {
            country: country.to_owned(),
            year,
            commodity: commodity.to_owned(),
            parent_entity: parent_entity.to_owned(),
            parent_type: parent_type.to_owned(),
            value,
        }
    }
    pub fn country(&self) -> &str {
        &self.country
    }
    pub fn year(&self) -> Year {
        self.year
    }
    pub fn commodity(&self) -> &str {
        &self.commodity
    }
    pub fn parent_entity(&self) -> &str {
        &self.parent_entity
    }
    pub fn parent_type(&self) -> &str {
        &self.parent_type
    }
    pub fn value(&self) -> f64 {
        self.value
    }
    /// The textual value of a column, for the four text columns.
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Country => Some(&self.country),
            Column::Commodity => Some(&self.commodity),
            Column::ParentEntity => Some(&self.parent_entity),
            Column::ParentType => Some(&self.parent_type),
            Column::Year | Column::Value => None,
        }
    }
    /// The value of any column as a column-agnostic scalar.
    pub fn field(&self, column: Column) -> FieldValue {
        match column {
            Column::Country => FieldValue::Text(self.country.clone()),
            Column::Year => FieldValue::Year(self.year),
            Column::Commodity => FieldValue::Text(self.commodity.clone()),
            Column::ParentEntity => FieldValue::Text(self.parent_entity.clone()),
            Column::ParentType => FieldValue::Text(self.parent_type.clone()),
            Column::Value => FieldValue::Quantity(self.value),
        }
    }
}

// ------------- FieldValue -------------
// Serializes untagged, so a listing comes out as plain JSON strings/numbers.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Year(Year),
    Quantity(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::Year(year) => write!(f, "{year}"),
            FieldValue::Quantity(quantity) => write!(f, "{quantity}"),
        }
    }
}

// ------------- RecordStore -------------
// Owns the loaded records and guarantees they never change afterwards.
// Queries borrow the records and produce newly allocated results.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }
    /// Parse a CSV file with a header row and the six fixed columns.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: Record = row?;
            records.push(record);
        }
        Ok(Self { records })
    }
    /// Startup entry point: an unreadable or malformed dataset is logged
    /// and replaced by an empty store, so queries answer "no data" rather
    /// than failing the process.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(store) => {
                info!(
                    records = store.len(),
                    path = %path.as_ref().display(),
                    "dataset loaded"
                );
                store
            }
            Err(e) => {
                warn!(
                    error = %e,
                    path = %path.as_ref().display(),
                    "dataset could not be loaded, starting with an empty store"
                );
                Self::empty()
            }
        }
    }
    pub fn records(&self) -> &[Record] {
        &self.records
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn column_names() -> [&'static str; 6] {
        [
            Column::Country.name(),
            Column::Year.name(),
            Column::Commodity.name(),
            Column::ParentEntity.name(),
            Column::ParentType.name(),
            Column::Value.name(),
        ]
    }
    /// Unique values of a text column in first-occurrence order.
    /// Empty cells count as nulls and are skipped.
    pub fn distinct_text(&self, column: Column) -> Vec<String> {
        let mut seen = HashSet::<&str, ValueHasher>::default();
        let mut values = Vec::new();
        for record in &self.records {
            let Some(text) = record.text(column) else {
                continue;
            };
            if text.is_empty() {
                continue;
            }
            if seen.insert(text) {
                values.push(text.to_owned());
            }
        }
        values
    }
    /// Unique values of any column in first-occurrence order.
    pub fn distinct_values(&self, column: Column) -> Vec<FieldValue> {
        match column {
            Column::Year => {
                let mut seen = HashSet::<Year, ValueHasher>::default();
                self.records
                    .iter()
                    .filter(|record| seen.insert(record.year))
                    .map(|record| FieldValue::Year(record.year))
                    .collect()
            }
            Column::Value => {
                // NaN counts as null, otherwise bit-pattern identity
                let mut seen = HashSet::<u64, ValueHasher>::default();
                self.records
                    .iter()
                    .filter(|record| !record.value.is_nan() && seen.insert(record.value.to_bits()))
                    .map(|record| FieldValue::Quantity(record.value))
                    .collect()
            }
            _ => self
                .distinct_text(column)
                .into_iter()
                .map(FieldValue::Text)
                .collect(),
        }
    }
}
