//! Background theme selection and icon URL templating.
//!
//! Pure presentation derivation: total functions, no I/O, never fail.

use serde::{Deserialize, Serialize};

/// Opaque token for a background treatment, one per coarse condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    /// Fixed night treatment, chosen whenever the icon carries the `n` suffix.
    Night,
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    /// Unrecognized condition category.
    Fallback,
}

impl Theme {
    /// Select the theme for a condition category and icon code.
    ///
    /// The night suffix wins over the category; the category match is
    /// case-insensitive. Total: unknown categories map to [`Theme::Fallback`].
    #[must_use]
    pub fn for_conditions(main: &str, icon: &str) -> Self {
        if icon.ends_with('n') {
            return Self::Night;
        }

        match main.to_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" | "drizzle" => Self::Rain,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            "mist" | "fog" | "haze" => Self::Mist,
            _ => Self::Fallback,
        }
    }

    /// Tailwind gradient classes for this theme, as the dashboard renders
    /// them. `Fallback` shares the clear-day visual but stays a distinct
    /// token.
    #[must_use]
    pub const fn gradient_classes(self) -> &'static str {
        match self {
            Self::Night => "from-indigo-900 via-blue-900 to-purple-900",
            Self::Clear | Self::Fallback => "from-blue-400 via-blue-500 to-blue-600",
            Self::Clouds => "from-gray-400 via-gray-500 to-gray-600",
            Self::Rain => "from-gray-600 via-gray-700 to-gray-800",
            Self::Thunderstorm => "from-gray-700 via-gray-800 to-gray-900",
            Self::Snow => "from-blue-200 via-blue-300 to-blue-400",
            Self::Mist => "from-gray-300 via-gray-400 to-gray-500",
        }
    }
}

/// URL of the provider's rendered icon for an icon code.
///
/// String templating only; the code is not validated.
#[must_use]
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{icon}@4x.png")
}
