//! Repository abstraction for cities and their day reports.
//!
//! The services depend only on these traits, never on a concrete storage
//! engine. [`MemoryStore`](memory::MemoryStore) is the in-process
//! implementation; a database-backed adapter would implement the same two
//! ports.

pub mod error;
pub mod memory;

use crate::types::city::City;
use crate::types::day_report::DayReport;
use chrono::NaiveDate;
use error::StoreError;

/// Port for persisting and looking up cities.
///
/// Ids are assigned by the store on first save, modeling an external identity
/// generator: a [`City`] without an id has never been stored.
pub trait CityStore {
    fn city_exists(&self, id: u64) -> Result<bool, StoreError>;

    /// Persists the city, assigning an id if it has none, and returns the
    /// stored value.
    fn save_city(&self, city: City) -> Result<City, StoreError>;

    /// All known cities, order unspecified.
    fn find_cities(&self) -> Result<Vec<City>, StoreError>;

    fn find_city(&self, id: u64) -> Result<Option<City>, StoreError>;

    /// Name lookup used by idempotent startup initialization.
    fn find_city_by_name(&self, name: &str) -> Result<Option<City>, StoreError>;
}

/// Port for persisting and querying day reports.
///
/// Reports always live inside their owning city; the store maintains that
/// ownership and the non-owning back-reference on each report.
pub trait ReportStore {
    fn report_exists(&self, id: u64) -> Result<bool, StoreError>;

    /// Persists a single report into its owning city (the report's `city_id`
    /// must be set) and returns the stored value with its assigned id.
    fn save_report(&self, report: DayReport) -> Result<DayReport, StoreError>;

    /// Every stored report across all cities.
    fn find_reports(&self) -> Result<Vec<DayReport>, StoreError>;

    fn find_report(&self, id: u64) -> Result<Option<DayReport>, StoreError>;

    /// Reports whose date is a member of `dates`. Days with no stored report
    /// are silently omitted; each requested day is resolved once and results
    /// follow the requested date order.
    fn find_reports_by_dates(&self, dates: &[NaiveDate]) -> Result<Vec<DayReport>, StoreError>;

    /// Bulk delete by id. Unknown ids are ignored.
    fn delete_reports_by_id(&self, ids: &[u64]) -> Result<(), StoreError>;

    /// Atomically replaces a city's entire history with `reports`: the prior
    /// reports are detached and deleted, the new ones attached and persisted,
    /// all as one unit. Readers never observe the cleared intermediate state.
    ///
    /// Fails with [`StoreError::AlreadyExists`] if a new report carries an id
    /// that still resolves elsewhere in the store, leaving the prior history
    /// intact.
    fn replace_city_reports(
        &self,
        city_id: u64,
        reports: Vec<DayReport>,
    ) -> Result<Vec<DayReport>, StoreError>;
}
