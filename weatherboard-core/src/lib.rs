//! Core library for the `weatherboard` dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - Forecast aggregation (3-hour samples collapsed into daily entries)
//! - Background theme derivation
//! - Shared domain models and the error taxonomy
//!
//! It is used by `weatherboard-cli`, but can also be reused by other binaries
//! or services.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod theme;

pub use aggregate::{MAX_FORECAST_DAYS, aggregate_daily, aggregate_daily_local};
pub use config::{Config, provider_from_config};
pub use error::WeatherError;
pub use model::{CurrentWeather, DailyForecast, ForecastSample, WeatherData};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use theme::{Theme, icon_url};
