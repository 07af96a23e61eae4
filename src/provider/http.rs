use crate::provider::error::ProviderError;
use crate::provider::WeatherProvider;
use crate::types::day_report::DayReport;
use crate::types::hour_report::HourReport;
use crate::types::temperature::Temperature;
use bon::bon;
use chrono::NaiveDate;
use log::{info, warn};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One day of provider data on the wire.
#[derive(Debug, Deserialize)]
pub struct ProviderDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub hours: Vec<ProviderHour>,
}

/// One hourly reading on the wire.
#[derive(Debug, Deserialize)]
pub struct ProviderHour {
    pub hour: u32,
    pub temperature: f64,
}

impl From<ProviderDay> for DayReport {
    fn from(day: ProviderDay) -> Self {
        let hours = day
            .hours
            .into_iter()
            .map(|hour| HourReport::new(hour.hour, Temperature::new(hour.temperature)))
            .collect();
        DayReport::new(day.date, hours)
    }
}

/// Reqwest-backed [`WeatherProvider`] adapter.
///
/// Issues `GET {base_url}/reports?city={name}` and decodes the JSON body into
/// day reports. Every request carries a bounded timeout so a hung provider
/// surfaces as a [`ProviderError`] instead of stalling startup.
///
/// # Examples
///
/// ```no_run
/// use weather_stats::HttpWeatherProvider;
/// use std::time::Duration;
///
/// let provider = HttpWeatherProvider::builder()
///     .base_url("https://weather.example.com/api")
///     .timeout(Duration::from_secs(5))
///     .build();
/// ```
pub struct HttpWeatherProvider {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

#[bon]
impl HttpWeatherProvider {
    /// Creates a provider for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `.base_url(impl Into<String>)`: **Required.** Root of the provider
    ///   API, without a trailing slash.
    /// * `.timeout(Duration)`: Optional. Per-request timeout. Defaults to 10
    ///   seconds.
    #[builder]
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
            client: reqwest::Client::new(),
        }
    }
}

impl WeatherProvider for HttpWeatherProvider {
    async fn get_for_city(&self, name: &str) -> Result<Vec<DayReport>, ProviderError> {
        let url = format!("{}/reports", self.base_url);
        info!("Fetching weather history for city '{}' from {}", name, url);

        let response = self
            .client
            .get(&url)
            .query(&[("city", name)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ProviderError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    ProviderError::NetworkRequest(url, e)
                });
            }
        };

        let days: Vec<ProviderDay> = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(url, e))?;
        info!("Provider returned {} day(s) for city '{}'", days.len(), name);

        Ok(days.into_iter().map(DayReport::from).collect())
    }
}
