//! Process entry point for the weather history core.
//!
//! Wires the configuration, a weather provider and the in-memory store into
//! the city and report services, and runs the ordered startup sequence.

use crate::cities::CityService;
use crate::config::Config;
use crate::error::WeatherStatsError;
use crate::provider::WeatherProvider;
use crate::reports::ingest::ReportIngestionService;
use crate::reports::query::ReportQueryService;
use crate::store::memory::MemoryStore;
use log::info;
use std::sync::Arc;

/// The assembled weather history system.
///
/// Construction only wires the parts together; [`initialize`](Self::initialize)
/// performs the actual startup work, in strict order: the configured cities
/// are created first, then every city's reports are ingested. Ingestion
/// iterates over stored cities, so the ordering is a hard dependency, not a
/// convention.
///
/// # Examples
///
/// ```no_run
/// use weather_stats::{Config, HttpWeatherProvider, WeatherStats};
///
/// # async fn run() -> Result<(), weather_stats::WeatherStatsError> {
/// let config = Config::from_file("weather-stats.json")?;
/// let provider = HttpWeatherProvider::builder()
///     .base_url(config.provider.base_url.clone())
///     .timeout(config.provider.timeout())
///     .build();
///
/// let app = WeatherStats::new(config, provider);
/// app.initialize().await?;
///
/// let all_reports = app.reports().get_all()?;
/// println!("{} day reports tracked", all_reports.len());
/// # Ok(())
/// # }
/// ```
pub struct WeatherStats<P> {
    config: Config,
    cities: CityService<MemoryStore>,
    ingestion: ReportIngestionService<MemoryStore, P>,
    queries: ReportQueryService<MemoryStore>,
}

impl<P: WeatherProvider> WeatherStats<P> {
    pub fn new(config: Config, provider: P) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            config,
            cities: CityService::new(Arc::clone(&store)),
            ingestion: ReportIngestionService::new(Arc::clone(&store), provider),
            queries: ReportQueryService::new(store),
        }
    }

    /// Runs the startup sequence: configured cities first, then report
    /// ingestion for each of them.
    ///
    /// City initialization must complete before ingestion starts and any
    /// failure there aborts startup. Per-city ingestion failures are isolated
    /// and logged; the number of refreshed cities is returned.
    pub async fn initialize(&self) -> Result<usize, WeatherStatsError> {
        info!("Starting weather-stats initialization.");
        self.cities.initialize(&self.config.cities)?;
        let refreshed = self.ingestion.refresh_all().await?;
        info!("weather-stats initialization complete.");
        Ok(refreshed)
    }

    pub fn cities(&self) -> &CityService<MemoryStore> {
        &self.cities
    }

    pub fn reports(&self) -> &ReportQueryService<MemoryStore> {
        &self.queries
    }

    pub fn ingestion(&self) -> &ReportIngestionService<MemoryStore, P> {
        &self.ingestion
    }
}
