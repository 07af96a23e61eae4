//! External weather provider collaborator.
//!
//! The core only depends on the [`WeatherProvider`] trait; the shipped
//! [`HttpWeatherProvider`](http::HttpWeatherProvider) is one adapter for it
//! and tests substitute their own.

pub mod error;
pub mod http;

use crate::types::day_report::DayReport;
use error::ProviderError;
use std::future::Future;

/// Port towards the external weather provider.
///
/// `get_for_city` resolves a city name to that city's day-shaped history:
/// zero or more days, each with zero or more hourly readings. An empty
/// result means the provider has no data for the city and is not an error;
/// transport and decode failures surface as [`ProviderError`].
pub trait WeatherProvider {
    fn get_for_city(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<DayReport>, ProviderError>> + Send;
}
