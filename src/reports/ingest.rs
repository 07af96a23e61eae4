use crate::provider::WeatherProvider;
use crate::reports::error::ReportError;
use crate::store::error::StoreError;
use crate::store::{CityStore, ReportStore};
use crate::types::city::City;
use crate::types::day_report::DayReport;
use log::{info, warn};
use std::sync::Arc;

/// Replaces stored city histories with freshly fetched provider data.
///
/// Ingestion is replace-all, never a merge: for each city the prior day
/// reports are discarded and the fetched set takes their place in a single
/// atomic store operation, so readers never see a half-replaced history.
pub struct ReportIngestionService<S, P> {
    store: Arc<S>,
    provider: P,
}

impl<S, P> ReportIngestionService<S, P>
where
    S: CityStore + ReportStore,
    P: WeatherProvider,
{
    pub fn new(store: Arc<S>, provider: P) -> Self {
        Self { store, provider }
    }

    /// Refreshes every known city, sequentially, in store order.
    ///
    /// Cities must already be initialized. A failure for one city is isolated:
    /// it is logged and the remaining cities are still refreshed, so a single
    /// unreachable provider entry cannot abort the whole startup sequence.
    /// Returns the number of cities successfully refreshed.
    pub async fn refresh_all(&self) -> Result<usize, ReportError> {
        info!("Initializing weather reports.");

        let cities = self.store.find_cities()?;
        let mut refreshed = 0;
        for city in &cities {
            match self.refresh_city(city).await {
                Ok(_) => refreshed += 1,
                Err(e) => warn!(
                    "Failed to refresh reports for city '{}', continuing: {}",
                    city.name(),
                    e
                ),
            }
        }

        info!(
            "Finished initializing weather reports ({}/{} cities refreshed).",
            refreshed,
            cities.len()
        );
        Ok(refreshed)
    }

    /// Fetches the provider history for one city and replaces its stored
    /// reports with it.
    ///
    /// Provider failures propagate; the previous history stays in place when
    /// anything goes wrong, including a fetched report whose pre-assigned id
    /// already exists in the store.
    pub async fn refresh_city(&self, city: &City) -> Result<Vec<DayReport>, ReportError> {
        let city_id = city.id().ok_or(StoreError::MissingId)?;

        let fetched = self.provider.get_for_city(city.name()).await?;
        let stored = self
            .store
            .replace_city_reports(city_id, fetched)
            .map_err(|e| match e {
                StoreError::AlreadyExists(id) => ReportError::AlreadyExists(id),
                other => ReportError::Store(other),
            })?;

        info!(
            "Replaced day reports for city '{}' ({} day(s)).",
            city.name(),
            stored.len()
        );
        Ok(stored)
    }

    /// Persists a single new report into its city.
    ///
    /// Rejects a report whose id already resolves in the store with
    /// [`ReportError::AlreadyExists`], without touching stored state.
    pub fn create(&self, report: DayReport) -> Result<DayReport, ReportError> {
        if let Some(id) = report.id() {
            if self.store.report_exists(id)? {
                return Err(ReportError::AlreadyExists(id));
            }
        }
        Ok(self.store.save_report(report)?)
    }
}
