//! Smokestack – a read-only query service over national CO2 emission records.
//!
//! The dataset is a single CSV table with six fixed columns, loaded once at
//! startup and kept resident in memory for the lifetime of the process:
//! * A [`store::Record`] is one emissions record (country, year, commodity,
//!   parent entity, parent type, value).
//! * The [`store::RecordStore`] owns the ordered records and never mutates
//!   them after loading; a failed load degrades to an empty store instead of
//!   failing the process.
//! * A [`filter::Predicate`] is a boolean test over a single record;
//!   a [`filter::Filter`] ANDs the predicates built from a query's optional
//!   parameters.
//! * The [`query::QueryService`] answers the filtered lookups (by country,
//!   year, commodity, entity, entity type, multi-country comparison, and
//!   year-sorted trends) and reports empty results as not-found.
//! * The [`aggregate::AggregateService`] lists distinct column values and
//!   computes the dataset summary.
//!
//! ## Modules
//! * [`store`] – Row model, column introspection and the in-memory table.
//! * [`filter`] – Composable row predicates and their AND-composition.
//! * [`query`] – Filtered lookup operations with not-found classification.
//! * [`aggregate`] – Distinct listings and summary statistics.
//! * [`server`] – The axum HTTP surface mapping the services to routes.
//! * [`settings`] – Dataset path and listen address configuration.
//! * [`error`] – The crate-wide error taxonomy.
//!
//! ## Quick Start
//! ```
//! use std::sync::Arc;
//! use smokestack::query::QueryService;
//! use smokestack::store::{Record, RecordStore};
//!
//! let store = Arc::new(RecordStore::from_records(vec![
//!     Record::new("Sweden", 1990, "Coal", "Statkraft", "State", 1.25),
//! ]));
//! let queries = QueryService::new(store);
//! assert_eq!(queries.by_country("sweden", None).unwrap().len(), 1);
//! ```
//!
//! ## Concurrency
//! The store is shared behind an `Arc` and never written after startup, so
//! any number of requests may scan it in parallel without locking.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod query;
pub mod server;
pub mod settings;
pub mod store;
