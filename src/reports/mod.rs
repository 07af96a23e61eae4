//! Day-report ingestion and querying.
//!
//! [`ingest::ReportIngestionService`] pulls a city's history from the
//! provider and atomically replaces the stored one; [`query::ReportQueryService`]
//! resolves date and date-range queries against the store.

pub mod error;
pub mod ingest;
pub mod query;
