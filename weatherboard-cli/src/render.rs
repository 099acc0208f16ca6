//! Human-friendly output formatting for the dashboard entities.

use chrono::{Local, TimeZone};
use std::fmt::Write;
use weatherboard_core::{CurrentWeather, DailyForecast, Theme, icon_url};

pub fn render_current(current: &CurrentWeather) -> String {
    let theme = Theme::for_conditions(&current.main, &current.icon);

    let mut out = String::new();
    let _ = writeln!(out, "{}, {} — {}", current.city, current.country, current.description);
    let _ = writeln!(
        out,
        "  {}°C (feels like {}°C)",
        current.temperature, current.feels_like
    );
    let _ = writeln!(
        out,
        "  humidity {}%   wind {:.1} m/s",
        current.humidity, current.wind_speed
    );
    let _ = writeln!(
        out,
        "  sunrise {}   sunset {}",
        local_time(current.sunrise),
        local_time(current.sunset)
    );
    let _ = writeln!(out, "  icon  {}", icon_url(&current.icon));
    let _ = write!(out, "  theme {theme:?} ({})", theme.gradient_classes());
    out
}

pub fn render_forecast(forecast: &[DailyForecast]) -> String {
    if forecast.is_empty() {
        return "No forecast data available.".to_string();
    }

    let mut out = String::from("Forecast:");
    for day in forecast {
        let _ = write!(
            out,
            "\n  {}  {:>3}° / {:>3}°  {:<20}  pop {:>3}%",
            local_day(day.date),
            day.temp_min,
            day.temp_max,
            day.description,
            day.pop
        );
    }
    out
}

fn local_time(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map_or_else(|| "--:--".to_string(), |dt| dt.format("%H:%M").to_string())
}

fn local_day(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map_or_else(|| "???".to_string(), |dt| dt.format("%a %d %b").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_fixture() -> CurrentWeather {
        CurrentWeather {
            city: "London".to_string(),
            country: "GB".to_string(),
            temperature: 7,
            feels_like: 5,
            description: "overcast clouds".to_string(),
            humidity: 81,
            wind_speed: 5.66,
            sunrise: 1_700_030_000,
            sunset: 1_700_062_000,
            icon: "04d".to_string(),
            main: "Clouds".to_string(),
        }
    }

    #[test]
    fn current_card_shows_city_temps_and_theme() {
        let out = render_current(&current_fixture());

        assert!(out.contains("London, GB — overcast clouds"));
        assert!(out.contains("7°C (feels like 5°C)"));
        assert!(out.contains("humidity 81%"));
        assert!(out.contains("wind 5.7 m/s"));
        assert!(out.contains("theme Clouds"));
        assert!(out.contains("https://openweathermap.org/img/wn/04d@4x.png"));
    }

    #[test]
    fn night_icon_selects_the_night_theme() {
        let mut current = current_fixture();
        current.icon = "04n".to_string();

        assert!(render_current(&current).contains("theme Night"));
    }

    #[test]
    fn forecast_rows_show_min_max_and_pop() {
        let forecast = vec![DailyForecast {
            date: 1_700_049_600,
            temp_max: 16,
            temp_min: 10,
            description: "moderate rain".to_string(),
            icon: "10d".to_string(),
            main: "Rain".to_string(),
            pop: 70,
        }];

        let out = render_forecast(&forecast);
        assert!(out.contains("10° /  16°"));
        assert!(out.contains("moderate rain"));
        assert!(out.contains("pop  70%"));
    }

    #[test]
    fn empty_forecast_renders_a_placeholder() {
        assert_eq!(render_forecast(&[]), "No forecast data available.");
    }
}
