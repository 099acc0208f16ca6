//! Collapse the 3-hour interval forecast feed into one entry per day.
//!
//! Pure functions, no I/O. The grouping key is the sample's *local* calendar
//! date in the supplied timezone, so two samples one second apart can land in
//! different days if they straddle local midnight.

use chrono::{Local, TimeZone};

use crate::model::{DailyForecast, ForecastSample, round_half_up};

/// The dashboard shows at most one week of forecast days.
pub const MAX_FORECAST_DAYS: usize = 7;

/// Group time-ordered interval samples into at most [`MAX_FORECAST_DAYS`]
/// daily entries, keyed by the calendar date in `tz`.
///
/// Groups keep first-encountered order, which for a time-ordered input is
/// chronological day order. An empty input yields an empty output.
pub fn aggregate_daily<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz) -> Vec<DailyForecast> {
    let mut groups: Vec<(chrono::NaiveDate, Vec<&ForecastSample>)> = Vec::new();

    for sample in samples {
        // A unix timestamp maps to exactly one instant in any timezone.
        let Some(day) = tz
            .timestamp_opt(sample.timestamp, 0)
            .single()
            .map(|dt| dt.date_naive())
        else {
            continue;
        };

        match groups.iter_mut().find(|(d, _)| *d == day) {
            Some((_, group)) => group.push(sample),
            None => groups.push((day, vec![sample])),
        }
    }

    groups.truncate(MAX_FORECAST_DAYS);
    groups.into_iter().map(|(_, group)| collapse_day(&group)).collect()
}

/// [`aggregate_daily`] in the system-local timezone, matching what a browser
/// dashboard running on the same machine would show.
pub fn aggregate_daily_local(samples: &[ForecastSample]) -> Vec<DailyForecast> {
    aggregate_daily(samples, &Local)
}

fn collapse_day(group: &[&ForecastSample]) -> DailyForecast {
    debug_assert!(!group.is_empty());

    let temp_max = group.iter().map(|s| s.temperature).fold(f64::NEG_INFINITY, f64::max);
    let temp_min = group.iter().map(|s| s.temperature).fold(f64::INFINITY, f64::min);
    let peak_pop = group.iter().map(|s| s.pop.unwrap_or(0.0)).fold(0.0, f64::max);

    // Lower-middle sample supplies the day's textual condition verbatim;
    // no consensus value is recomputed from the group.
    let representative = group[group.len() / 2];

    DailyForecast {
        date: group[0].timestamp,
        temp_max: round_half_up(temp_max),
        temp_min: round_half_up(temp_min),
        description: representative.description.clone(),
        icon: representative.icon.clone(),
        main: representative.main.clone(),
        pop: round_half_up(peak_pop * 100.0).clamp(0, 100) as u8,
    }
}
