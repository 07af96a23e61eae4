//! End-to-end walkthrough: initialize cities, ingest a canned history and
//! resolve date-range queries, without a live provider.

use chrono::NaiveDate;
use weather_stats::{
    Config, DayReport, HourReport, ProviderConfig, ProviderError, Temperature, WeatherProvider,
    WeatherStats, WeatherStatsError,
};

/// Stands in for the external weather API.
struct CannedProvider;

impl WeatherProvider for CannedProvider {
    async fn get_for_city(&self, name: &str) -> Result<Vec<DayReport>, ProviderError> {
        // A short heat wave, slightly offset per city so the averages differ.
        let offset = name.len() as f64;
        let days = (1..=3)
            .map(|day| {
                let hours = (0..4)
                    .map(|hour| {
                        HourReport::new(hour, Temperature::new(20.0 + offset + hour as f64))
                    })
                    .collect();
                DayReport::new(NaiveDate::from_ymd_opt(2023, 7, day).unwrap(), hours)
            })
            .collect();
        Ok(days)
    }
}

#[tokio::main]
async fn main() -> Result<(), WeatherStatsError> {
    let config = Config {
        cities: vec!["Novi Sad".to_string(), "Belgrade".to_string()],
        provider: ProviderConfig {
            base_url: "https://weather.example.com/api".to_string(),
            timeout_secs: 5,
        },
    };

    let app = WeatherStats::new(config, CannedProvider);
    let refreshed = app.initialize().await?;
    println!("Refreshed {} cities", refreshed);

    for city in app.cities().get_all()? {
        println!(
            "{}: {} day(s) tracked, city average {}",
            city.name(),
            city.day_reports().len(),
            city.average()
        );
    }

    let from = NaiveDate::from_ymd_opt(2023, 7, 2).unwrap();
    let to = NaiveDate::from_ymd_opt(2023, 7, 3).unwrap();
    let in_range = app.reports().get_by_range(from, to)?;
    println!("{} reports between {} and {}:", in_range.len(), from, to);
    for report in in_range {
        println!(
            "  city {:?} on {}: daily average {}",
            report.city_id(),
            report.date(),
            report.average()
        );
    }

    Ok(())
}
