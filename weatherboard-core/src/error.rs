use thiserror::Error;

/// Failure taxonomy for the weather client.
///
/// Both variants carry a user-displayable message via `Display`; callers
/// surface them unchanged, there is no local recovery or retry.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider reported no match for the given city name.
    #[error("City not found. Please check the spelling and try again.")]
    CityNotFound { city: String },

    /// Any other transport, decode, or server failure.
    #[error("Failed to fetch weather data. Please try again later.")]
    ServiceUnavailable {
        /// Diagnostic detail for logs, not shown to the user.
        detail: String,
    },
}

impl WeatherError {
    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::ServiceUnavailable { detail: detail.into() }
    }
}
