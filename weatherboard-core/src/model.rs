use serde::{Deserialize, Serialize};

/// Current conditions for one city, normalized from the provider payload.
///
/// Snapshot semantics: built fresh on every search and replaced wholesale by
/// the next successful fetch, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    /// ISO country code, e.g. "GB".
    pub country: String,
    /// Rounded °C.
    pub temperature: i32,
    /// Rounded °C.
    pub feels_like: i32,
    /// Lowercase free text, e.g. "light rain".
    pub description: String,
    /// Percent, 0..=100.
    pub humidity: u8,
    /// Meters per second.
    pub wind_speed: f64,
    /// Unix seconds, UTC.
    pub sunrise: i64,
    /// Unix seconds, UTC.
    pub sunset: i64,
    /// Provider icon code, `"<two digits><d|n>"`, e.g. "01d".
    pub icon: String,
    /// Coarse condition category, e.g. "Clear", "Rain".
    pub main: String,
}

/// One aggregated forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Unix seconds of the day's first interval sample (not midnight).
    pub date: i64,
    pub temp_max: i32,
    pub temp_min: i32,
    /// Taken verbatim from the day's representative sample.
    pub description: String,
    pub icon: String,
    pub main: String,
    /// Peak probability of precipitation, percent 0..=100.
    pub pop: u8,
}

/// Combined result of the two concurrent fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub current: CurrentWeather,
    pub forecast: Vec<DailyForecast>,
}

/// One raw 3-hour interval reading from the forecast feed, before
/// aggregation into [`DailyForecast`] entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Unix seconds, UTC.
    pub timestamp: i64,
    /// °C, unrounded.
    pub temperature: f64,
    /// Probability of precipitation in [0, 1]; absent in some feed entries.
    pub pop: Option<f64>,
    pub description: String,
    pub icon: String,
    pub main: String,
}

/// Round half up, matching `Math.round`: `2.5 -> 3`, `-2.5 -> -2`.
///
/// `f64::round` rounds half away from zero, which disagrees for negative
/// Celsius values, so temperatures go through this instead.
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_for_positive_values() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(19.96), 20);
    }

    #[test]
    fn rounds_half_up_for_negative_values() {
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(-0.4), 0);
    }

    #[test]
    fn rounds_integers_to_themselves() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(-7.0), -7);
        assert_eq!(round_half_up(31.0), 31);
    }
}
