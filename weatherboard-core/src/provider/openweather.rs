use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    aggregate::aggregate_daily_local,
    error::WeatherError,
    model::{CurrentWeather, DailyForecast, ForecastSample, round_half_up},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// OpenWeatherMap client: current conditions plus the 5-day / 3-hour
/// forecast feed, both requested with metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint, e.g. a mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(endpoint, city, "requesting OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                WeatherError::unavailable(format!("request to OpenWeather /{endpoint} failed: {e}"))
            })?;

        let status = res.status();

        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound { city: city.to_string() });
        }

        let body = res.text().await.map_err(|e| {
            WeatherError::unavailable(format!("failed to read /{endpoint} response body: {e}"))
        })?;

        if !status.is_success() {
            return Err(WeatherError::unavailable(format!(
                "OpenWeather /{endpoint} returned status {status}: {}",
                truncate_body(&body),
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            WeatherError::unavailable(format!("failed to parse /{endpoint} JSON: {e}"))
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let parsed: OwCurrentResponse = self.get_json("weather", city).await?;

        let condition = parsed.weather.into_iter().next().unwrap_or_default();

        Ok(CurrentWeather {
            city: parsed.name,
            country: parsed.sys.country,
            temperature: round_half_up(parsed.main.temp),
            feels_like: round_half_up(parsed.main.feels_like),
            description: condition.description,
            humidity: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            sunrise: parsed.sys.sunrise,
            sunset: parsed.sys.sunset,
            icon: condition.icon,
            main: condition.main,
        })
    }

    async fn fetch_forecast(&self, city: &str) -> Result<Vec<DailyForecast>, WeatherError> {
        let parsed: OwForecastResponse = self.get_json("forecast", city).await?;

        let samples: Vec<ForecastSample> = parsed
            .list
            .into_iter()
            .map(|entry| {
                let condition = entry.weather.into_iter().next().unwrap_or_default();
                ForecastSample {
                    timestamp: entry.dt,
                    temperature: entry.main.temp,
                    pop: entry.pop,
                    description: condition.description,
                    icon: condition.icon,
                    main: condition.main,
                }
            })
            .collect();

        Ok(aggregate_daily_local(&samples))
    }
}

#[derive(Debug, Deserialize)]
struct OwCurrentMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Default, Deserialize)]
struct OwCondition {
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwCurrentMain,
    wind: OwWind,
    weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    #[serde(default)]
    pop: Option<f64>,
    #[serde(default)]
    weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_error_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn short_bodies_pass_through() {
        assert_eq!(truncate_body("{\"cod\":\"404\"}"), "{\"cod\":\"404\"}");
    }
}
