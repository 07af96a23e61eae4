use crate::types::day_report::{unordered_hash, DayReport};
use crate::types::temperature::Temperature;
use std::hash::{Hash, Hasher};

/// A named location with an aggregated weather history.
///
/// The city is the aggregate root: it exclusively owns its [`DayReport`]s, and
/// those reports own their hours, so replacing or dropping a city's history
/// cascades all the way down through plain ownership. The name doubles as the
/// lookup key towards the weather provider; the id is assigned by the store.
///
/// Like day reports, equality treats the owned reports as a set.
#[derive(Debug, Clone)]
pub struct City {
    id: Option<u64>,
    name: String,
    day_reports: Vec<DayReport>,
}

impl City {
    /// Creates a city that has not been stored yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            day_reports: Vec::new(),
        }
    }

    /// Reconstructs a stored city with its assigned id.
    pub fn with_id(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            day_reports: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn day_reports(&self) -> &[DayReport] {
        &self.day_reports
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }

    pub(crate) fn day_reports_mut(&mut self) -> &mut Vec<DayReport> {
        &mut self.day_reports
    }

    /// Mean of the per-day averages.
    ///
    /// This is deliberately a mean of means, not a mean over all hourly
    /// readings: days with few hours weigh as much as fully populated ones.
    /// Returns `0` for a city without reports.
    pub fn average(&self) -> Temperature {
        if self.day_reports.is_empty() {
            return Temperature::new(0.0);
        }
        let sum: f64 = self
            .day_reports
            .iter()
            .map(|report| report.average().value())
            .sum();
        Temperature::new(sum / self.day_reports.len() as f64)
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self
                .day_reports
                .iter()
                .all(|report| other.day_reports.contains(report))
            && other
                .day_reports
                .iter()
                .all(|report| self.day_reports.contains(report))
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        unordered_hash(&self.day_reports, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::hour_report::HourReport;
    use chrono::NaiveDate;

    fn day(date: (i32, u32, u32), values: &[f64]) -> DayReport {
        let hours = values
            .iter()
            .enumerate()
            .map(|(hour, value)| HourReport::new(hour as u32, Temperature::new(*value)))
            .collect();
        DayReport::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            hours,
        )
    }

    #[test]
    fn average_is_mean_of_day_averages() {
        // Day A averages 15.0 over two hours, day B averages 0.0 over one
        // hour. The city average weighs the days equally: 7.5, not the
        // reading-weighted 10.0.
        let mut city = City::with_id(1, "Novi Sad");
        city.day_reports_mut()
            .push(day((2023, 7, 1), &[10.0, 20.0]));
        city.day_reports_mut().push(day((2023, 7, 2), &[0.0]));
        assert_eq!(city.average(), Temperature::new(7.5));
    }

    #[test]
    fn average_without_reports_is_zero() {
        let city = City::new("Belgrade");
        assert_eq!(city.average(), Temperature::new(0.0));
    }

    #[test]
    fn equality_ignores_report_order() {
        let first = day((2023, 7, 1), &[1.0]);
        let second = day((2023, 7, 2), &[2.0]);

        let mut a = City::with_id(1, "Novi Sad");
        a.day_reports_mut().push(first.clone());
        a.day_reports_mut().push(second.clone());

        let mut b = City::with_id(1, "Novi Sad");
        b.day_reports_mut().push(second);
        b.day_reports_mut().push(first);

        assert_eq!(a, b);
    }

    #[test]
    fn differing_names_break_equality() {
        assert_ne!(City::with_id(1, "Novi Sad"), City::with_id(1, "Belgrade"));
    }
}
