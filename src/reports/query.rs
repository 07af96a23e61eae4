use crate::reports::error::ReportError;
use crate::store::ReportStore;
use crate::types::day_report::DayReport;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

/// Resolves date and date-range queries into concrete report sets.
pub struct ReportQueryService<S> {
    store: Arc<S>,
}

impl<S: ReportStore> ReportQueryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Every stored report across all cities.
    pub fn get_all(&self) -> Result<Vec<DayReport>, ReportError> {
        Ok(self.store.find_reports()?)
    }

    /// Reports whose date is a member of `dates`.
    ///
    /// This is membership matching, not range matching: days without stored
    /// reports are silently omitted, never an error.
    pub fn get_by_dates(&self, dates: &[NaiveDate]) -> Result<Vec<DayReport>, ReportError> {
        info!("Fetching reports by dates.");
        Ok(self.store.find_reports_by_dates(dates)?)
    }

    /// Reports for every day in the inclusive range `from..=to`.
    ///
    /// The range is expanded into its concrete day sequence and delegated to
    /// [`get_by_dates`](Self::get_by_dates). A `from` after `to` expands to
    /// zero days and yields an empty result, not an error.
    pub fn get_by_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DayReport>, ReportError> {
        info!("Fetching all city weather reports from {} to {}", from, to);
        self.get_by_dates(&dates_in_range(from, to))
    }
}

/// Expands an inclusive date range into its day sequence, oldest first.
/// Empty when `from > to`.
fn dates_in_range(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = from;
    while current <= to {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::CityStore;
    use crate::types::city::City;
    use crate::types::hour_report::HourReport;
    use crate::types::temperature::Temperature;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, day).unwrap()
    }

    fn report(day: u32, temp: f64) -> DayReport {
        DayReport::new(date(day), vec![HourReport::new(12, Temperature::new(temp))])
    }

    fn seeded_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let city = store.save_city(City::new("Novi Sad")).unwrap();
        store
            .replace_city_reports(
                city.id().unwrap(),
                vec![report(1, 10.0), report(2, 11.0), report(5, 14.0)],
            )
            .unwrap();
        store
    }

    #[test]
    fn dates_in_range_is_inclusive_on_both_ends() {
        let dates = dates_in_range(date(1), date(3));
        assert_eq!(dates, vec![date(1), date(2), date(3)]);
    }

    #[test]
    fn dates_in_range_with_inverted_bounds_is_empty() {
        assert!(dates_in_range(date(3), date(1)).is_empty());
    }

    #[test]
    fn single_day_range_is_just_that_day() {
        assert_eq!(dates_in_range(date(2), date(2)), vec![date(2)]);
    }

    #[test]
    fn get_all_returns_every_stored_report() -> Result<(), ReportError> {
        let queries = ReportQueryService::new(seeded_store());
        assert_eq!(queries.get_all()?.len(), 3);
        Ok(())
    }

    #[test]
    fn get_by_dates_omits_missing_days() -> Result<(), ReportError> {
        let queries = ReportQueryService::new(seeded_store());
        let found = queries.get_by_dates(&[date(1), date(4), date(5)])?;
        let dates: Vec<NaiveDate> = found.iter().map(DayReport::date).collect();
        assert_eq!(dates, vec![date(1), date(5)]);
        Ok(())
    }

    #[test]
    fn inverted_range_yields_empty_result() -> Result<(), ReportError> {
        let queries = ReportQueryService::new(seeded_store());
        assert!(queries.get_by_range(date(5), date(1))?.is_empty());
        Ok(())
    }

    #[test]
    fn single_day_range_matches_get_by_dates() -> Result<(), ReportError> {
        let queries = ReportQueryService::new(seeded_store());
        let by_range = queries.get_by_range(date(2), date(2))?;
        let by_dates = queries.get_by_dates(&[date(2)])?;
        assert_eq!(by_range, by_dates);
        assert_eq!(by_range.len(), 1);
        Ok(())
    }

    #[test]
    fn range_spans_reports_across_cities() -> Result<(), ReportError> {
        let store = seeded_store();
        let other = store.save_city(City::new("Belgrade")).unwrap();
        store
            .replace_city_reports(other.id().unwrap(), vec![report(2, -1.0)])
            .unwrap();

        let queries = ReportQueryService::new(store);
        let found = queries.get_by_range(date(1), date(3))?;
        assert_eq!(found.len(), 3);
        Ok(())
    }
}
