use crate::store::error::StoreError;
use crate::store::{CityStore, ReportStore};
use crate::types::city::City;
use crate::types::day_report::DayReport;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-process store backing both repository ports.
///
/// Cities are the aggregate roots: the map owns each [`City`], and each city
/// owns its reports, so every report lives in exactly one place. All state
/// sits behind a single `RwLock`, which makes each trait method, and in
/// particular [`replace_city_reports`](ReportStore::replace_city_reports),
/// atomic with respect to readers. The lock is never held across an await.
///
/// Ids come from monotone counters, standing in for the identity column a
/// database-backed adapter would provide.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    cities: BTreeMap<u64, City>,
    next_city_id: u64,
    next_report_id: u64,
    next_hour_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                cities: BTreeMap::new(),
                next_city_id: 1,
                next_report_id: 1,
                next_hour_id: 1,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    /// Assigns ids to a report and its hours where missing. Pre-assigned ids
    /// advance the counters past themselves so later assignments cannot
    /// collide.
    fn assign_report_ids(&mut self, report: &mut DayReport) {
        match report.id() {
            None => {
                report.set_id(self.next_report_id);
                self.next_report_id += 1;
            }
            Some(id) => self.next_report_id = self.next_report_id.max(id + 1),
        }
        for hour in report.hour_reports_mut() {
            match hour.id() {
                None => {
                    hour.set_id(self.next_hour_id);
                    self.next_hour_id += 1;
                }
                Some(id) => self.next_hour_id = self.next_hour_id.max(id + 1),
            }
        }
    }

    fn report_ids_excluding_city(&self, excluded_city: u64) -> HashSet<u64> {
        self.cities
            .iter()
            .filter(|(id, _)| **id != excluded_city)
            .flat_map(|(_, city)| city.day_reports().iter().filter_map(DayReport::id))
            .collect()
    }
}

impl CityStore for MemoryStore {
    fn city_exists(&self, id: u64) -> Result<bool, StoreError> {
        Ok(self.read()?.cities.contains_key(&id))
    }

    fn save_city(&self, mut city: City) -> Result<City, StoreError> {
        let mut inner = self.write()?;
        match city.id() {
            None => {
                city.set_id(inner.next_city_id);
                inner.next_city_id += 1;
            }
            Some(id) => inner.next_city_id = inner.next_city_id.max(id + 1),
        }
        let id = city.id().ok_or(StoreError::MissingId)?;
        inner.cities.insert(id, city.clone());
        Ok(city)
    }

    fn find_cities(&self) -> Result<Vec<City>, StoreError> {
        Ok(self.read()?.cities.values().cloned().collect())
    }

    fn find_city(&self, id: u64) -> Result<Option<City>, StoreError> {
        Ok(self.read()?.cities.get(&id).cloned())
    }

    fn find_city_by_name(&self, name: &str) -> Result<Option<City>, StoreError> {
        Ok(self
            .read()?
            .cities
            .values()
            .find(|city| city.name() == name)
            .cloned())
    }
}

impl ReportStore for MemoryStore {
    fn report_exists(&self, id: u64) -> Result<bool, StoreError> {
        Ok(self
            .read()?
            .cities
            .values()
            .flat_map(|city| city.day_reports())
            .any(|report| report.id() == Some(id)))
    }

    fn save_report(&self, mut report: DayReport) -> Result<DayReport, StoreError> {
        let city_id = report.city_id().ok_or(StoreError::MissingId)?;
        let mut inner = self.write()?;
        if !inner.cities.contains_key(&city_id) {
            return Err(StoreError::CityNotFound(city_id));
        }
        inner.assign_report_ids(&mut report);
        let city = inner
            .cities
            .get_mut(&city_id)
            .ok_or(StoreError::CityNotFound(city_id))?;
        city.day_reports_mut().push(report.clone());
        Ok(report)
    }

    fn find_reports(&self) -> Result<Vec<DayReport>, StoreError> {
        Ok(self
            .read()?
            .cities
            .values()
            .flat_map(|city| city.day_reports().iter().cloned())
            .collect())
    }

    fn find_report(&self, id: u64) -> Result<Option<DayReport>, StoreError> {
        Ok(self
            .read()?
            .cities
            .values()
            .flat_map(|city| city.day_reports())
            .find(|report| report.id() == Some(id))
            .cloned())
    }

    fn find_reports_by_dates(&self, dates: &[NaiveDate]) -> Result<Vec<DayReport>, StoreError> {
        let inner = self.read()?;
        let mut seen = HashSet::new();
        let mut matches = Vec::new();
        for date in dates {
            // Resolve each distinct day once, in the requested order.
            if !seen.insert(*date) {
                continue;
            }
            for city in inner.cities.values() {
                for report in city.day_reports() {
                    if report.date() == *date {
                        matches.push(report.clone());
                    }
                }
            }
        }
        Ok(matches)
    }

    fn delete_reports_by_id(&self, ids: &[u64]) -> Result<(), StoreError> {
        let doomed: HashSet<u64> = ids.iter().copied().collect();
        let mut inner = self.write()?;
        for city in inner.cities.values_mut() {
            city.day_reports_mut()
                .retain(|report| !report.id().is_some_and(|id| doomed.contains(&id)));
        }
        Ok(())
    }

    fn replace_city_reports(
        &self,
        city_id: u64,
        reports: Vec<DayReport>,
    ) -> Result<Vec<DayReport>, StoreError> {
        let mut inner = self.write()?;
        if !inner.cities.contains_key(&city_id) {
            return Err(StoreError::CityNotFound(city_id));
        }

        // Validate before mutating: a pre-assigned id may not collide with
        // anything that survives the replacement, nor repeat within the batch.
        let mut taken = inner.report_ids_excluding_city(city_id);
        for report in &reports {
            if let Some(id) = report.id() {
                if !taken.insert(id) {
                    return Err(StoreError::AlreadyExists(id));
                }
            }
        }

        let mut stored = Vec::with_capacity(reports.len());
        for mut report in reports {
            report.set_city_id(city_id);
            inner.assign_report_ids(&mut report);
            stored.push(report);
        }
        let city = inner
            .cities
            .get_mut(&city_id)
            .ok_or(StoreError::CityNotFound(city_id))?;
        *city.day_reports_mut() = stored.clone();
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::hour_report::HourReport;
    use crate::types::temperature::Temperature;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, day).unwrap()
    }

    fn report(day: u32, temp: f64) -> DayReport {
        DayReport::new(date(day), vec![HourReport::new(12, Temperature::new(temp))])
    }

    fn stored_city(store: &MemoryStore, name: &str) -> City {
        store.save_city(City::new(name)).unwrap()
    }

    #[test]
    fn save_city_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = stored_city(&store, "Novi Sad");
        let b = stored_city(&store, "Belgrade");
        assert_eq!(a.id(), Some(1));
        assert_eq!(b.id(), Some(2));
    }

    #[test]
    fn save_report_requires_attached_city() {
        let store = MemoryStore::new();
        let err = store.save_report(report(1, 20.0)).unwrap_err();
        assert!(matches!(err, StoreError::MissingId));
    }

    #[test]
    fn save_report_assigns_ids_down_to_hours() {
        let store = MemoryStore::new();
        let city = stored_city(&store, "Novi Sad");
        let mut fetched = report(1, 20.0);
        fetched.set_city_id(city.id().unwrap());

        let stored = store.save_report(fetched).unwrap();
        assert!(stored.id().is_some());
        assert!(stored.hour_reports()[0].id().is_some());
        assert!(store.report_exists(stored.id().unwrap()).unwrap());
        assert_eq!(
            store.find_report(stored.id().unwrap()).unwrap(),
            Some(stored)
        );
        assert_eq!(store.find_report(999).unwrap(), None);
    }

    #[test]
    fn replace_swaps_entire_history() {
        let store = MemoryStore::new();
        let city = stored_city(&store, "Novi Sad");
        let city_id = city.id().unwrap();

        let old = store
            .replace_city_reports(city_id, vec![report(1, 10.0), report(2, 11.0)])
            .unwrap();
        let old_ids: Vec<u64> = old.iter().filter_map(DayReport::id).collect();

        let new = store
            .replace_city_reports(city_id, vec![report(3, 12.0)])
            .unwrap();

        let remaining = store.find_reports().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), new[0].id());
        for id in old_ids {
            assert!(!store.report_exists(id).unwrap());
        }
    }

    #[test]
    fn replace_rejects_colliding_id_and_keeps_prior_state() {
        let store = MemoryStore::new();
        let a = stored_city(&store, "Novi Sad");
        let b = stored_city(&store, "Belgrade");

        let theirs = store
            .replace_city_reports(a.id().unwrap(), vec![report(1, 10.0)])
            .unwrap();
        store
            .replace_city_reports(b.id().unwrap(), vec![report(2, 12.0)])
            .unwrap();

        // A report pre-assigned to an id owned by the other city.
        let colliding = DayReport::with_id(
            theirs[0].id().unwrap(),
            date(5),
            vec![HourReport::new(3, Temperature::new(1.0))],
        );
        let err = store
            .replace_city_reports(b.id().unwrap(), vec![colliding])
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));

        // Belgrade keeps its previous history untouched.
        let b_after = store.find_city(b.id().unwrap()).unwrap().unwrap();
        assert_eq!(b_after.day_reports().len(), 1);
        assert_eq!(b_after.day_reports()[0].date(), date(2));
    }

    #[test]
    fn replace_allows_reusing_ids_of_the_replaced_history() {
        let store = MemoryStore::new();
        let city = stored_city(&store, "Novi Sad");
        let city_id = city.id().unwrap();

        let old = store
            .replace_city_reports(city_id, vec![report(1, 10.0)])
            .unwrap();

        // Re-ingesting the same stored report replaces it in place.
        let again = store
            .replace_city_reports(city_id, old.clone())
            .unwrap();
        assert_eq!(again[0].id(), old[0].id());
    }

    #[test]
    fn find_reports_by_dates_follows_requested_order() {
        let store = MemoryStore::new();
        let city = stored_city(&store, "Novi Sad");
        store
            .replace_city_reports(
                city.id().unwrap(),
                vec![report(1, 10.0), report(2, 11.0), report(3, 12.0)],
            )
            .unwrap();

        let found = store
            .find_reports_by_dates(&[date(3), date(9), date(1), date(3)])
            .unwrap();
        let dates: Vec<NaiveDate> = found.iter().map(DayReport::date).collect();
        assert_eq!(dates, vec![date(3), date(1)]);
    }

    #[test]
    fn delete_ignores_unknown_ids() {
        let store = MemoryStore::new();
        let city = stored_city(&store, "Novi Sad");
        store
            .replace_city_reports(city.id().unwrap(), vec![report(1, 10.0)])
            .unwrap();

        store.delete_reports_by_id(&[999]).unwrap();
        assert_eq!(store.find_reports().unwrap().len(), 1);
    }
}
