use crate::types::hour_report::HourReport;
use crate::types::temperature::Temperature;
use chrono::NaiveDate;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// One calendar day's aggregated hourly weather data for one city.
///
/// A day report exclusively owns its [`HourReport`]s; replacing or deleting a
/// report takes its hours with it. The `city_id` is a non-owning back-reference
/// to the city the report belongs to, set when the report is attached during
/// ingestion. The id is assigned by the store.
///
/// Equality treats the hour reports as a set: two reports with the same id,
/// date and city are equal whenever each contains all hour reports of the
/// other, regardless of the order the provider delivered them in. Hashing
/// agrees with that equality.
#[derive(Debug, Clone)]
pub struct DayReport {
    id: Option<u64>,
    date: NaiveDate,
    city_id: Option<u64>,
    hour_reports: Vec<HourReport>,
}

impl DayReport {
    /// Creates a report as received from the provider, without an id and not
    /// yet attached to a city.
    pub fn new(date: NaiveDate, hour_reports: Vec<HourReport>) -> Self {
        Self {
            id: None,
            date,
            city_id: None,
            hour_reports,
        }
    }

    /// Reconstructs a stored report with its assigned id.
    pub fn with_id(id: u64, date: NaiveDate, hour_reports: Vec<HourReport>) -> Self {
        Self {
            id: Some(id),
            date,
            city_id: None,
            hour_reports,
        }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The owning city, once the report has been attached.
    pub fn city_id(&self) -> Option<u64> {
        self.city_id
    }

    pub fn hour_reports(&self) -> &[HourReport] {
        &self.hour_reports
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }

    pub(crate) fn set_city_id(&mut self, city_id: u64) {
        self.city_id = Some(city_id);
    }

    pub(crate) fn hour_reports_mut(&mut self) -> &mut Vec<HourReport> {
        &mut self.hour_reports
    }

    /// Arithmetic mean of the contained hourly temperatures.
    ///
    /// An empty report averages to `0` by definition rather than erroring;
    /// a day the provider reported no hours for is a valid, zero-average day.
    pub fn average(&self) -> Temperature {
        if self.hour_reports.is_empty() {
            return Temperature::new(0.0);
        }
        let sum: f64 = self
            .hour_reports
            .iter()
            .map(|hour| hour.temperature().value())
            .sum();
        Temperature::new(sum / self.hour_reports.len() as f64)
    }
}

impl PartialEq for DayReport {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.date == other.date
            && self.city_id == other.city_id
            && contains_all(&self.hour_reports, &other.hour_reports)
            && contains_all(&other.hour_reports, &self.hour_reports)
    }
}

impl Eq for DayReport {}

impl Hash for DayReport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.date.hash(state);
        self.city_id.hash(state);
        unordered_hash(&self.hour_reports, state);
    }
}

fn contains_all<T: PartialEq>(haystack: &[T], needles: &[T]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}

/// Hashes a collection as a set: element order and duplicates do not affect
/// the result, keeping the hash consistent with mutual-containment equality.
pub(crate) fn unordered_hash<T: Hash, H: Hasher>(items: &[T], state: &mut H) {
    let mut element_hashes: Vec<u64> = items
        .iter()
        .map(|item| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            hasher.finish()
        })
        .collect();
    element_hashes.sort_unstable();
    element_hashes.dedup();
    element_hashes.hash(state);
}
