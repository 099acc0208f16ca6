use std::fmt::Debug;

use async_trait::async_trait;

use crate::{
    error::WeatherError,
    model::{CurrentWeather, DailyForecast, WeatherData},
};

pub mod openweather;

/// Capability the dashboard core depends on: turn a city name into
/// normalized weather entities, or a typed failure.
///
/// City names are free text and may carry a country hint ("London,GB");
/// interpretation is left to the provider. Empty input is a caller concern,
/// the client does not validate it.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a city.
    async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, WeatherError>;

    /// Daily forecast for a city, at most seven entries.
    async fn fetch_forecast(&self, city: &str) -> Result<Vec<DailyForecast>, WeatherError>;

    /// Both fetches for one city, issued concurrently and joined.
    ///
    /// Succeeds only if both succeed; otherwise fails with whichever error
    /// occurred first and never returns a partial result. The sibling
    /// request is not cancelled, its result is simply dropped.
    async fn fetch_weather_data(&self, city: &str) -> Result<WeatherData, WeatherError> {
        let (current, forecast) =
            tokio::try_join!(self.fetch_current(city), self.fetch_forecast(city))?;

        Ok(WeatherData { current, forecast })
    }
}
