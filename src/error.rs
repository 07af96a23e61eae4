use crate::cities::error::CityError;
use crate::config::ConfigError;
use crate::provider::error::ProviderError;
use crate::reports::error::ReportError;
use crate::store::error::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherStatsError {
    #[error(transparent)]
    City(#[from] CityError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
