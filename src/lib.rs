mod app;
mod cities;
mod config;
mod error;
mod provider;
mod reports;
mod store;
mod types;

pub use error::WeatherStatsError;

pub use app::WeatherStats;
pub use config::{Config, ConfigError, ProviderConfig};

pub use types::city::City;
pub use types::day_report::DayReport;
pub use types::hour_report::HourReport;
pub use types::temperature::Temperature;

pub use cities::error::CityError;
pub use cities::CityService;

pub use reports::error::ReportError;
pub use reports::ingest::ReportIngestionService;
pub use reports::query::ReportQueryService;

pub use provider::error::ProviderError;
pub use provider::http::{HttpWeatherProvider, ProviderDay, ProviderHour};
pub use provider::WeatherProvider;

pub use store::error::StoreError;
pub use store::memory::MemoryStore;
pub use store::{CityStore, ReportStore};
