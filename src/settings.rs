//! The settings module describes the defaults a clock session starts out with.
//! Settings are usually stored as JSON, where every field is optional:
//!
//! ```
//! use board_clock_core::Settings;
//!
//! let settings = Settings::from_json(r#"{ "configuredDurationMs": 300000 }"#).unwrap();
//! assert_eq!(settings.configured_duration_ms, 300_000);
//! assert_eq!(settings.tick_interval_ms, 1000);
//! ```

use crate::clock::{
    DEFAULT_CONFIGURED_DURATION_MS, DEFAULT_INITIAL_REMAINING_MS, TICK_INTERVAL_MS,
};
use serde::{Deserialize, Serialize};
use snafu::{ensure, ResultExt};
use std::{io::Read, time::Duration};

/// The error type for loading settings.
#[derive(Debug, snafu::Snafu)]
pub enum Error {
    /// The settings are not valid JSON or have fields of the wrong type.
    #[snafu(display("Failed to parse the settings: {}", source))]
    Json {
        /// The underlying error.
        source: serde_json::Error,
    },
    /// A tick interval of zero would tick the clock in a busy loop.
    #[snafu(display("The tick interval must not be zero"))]
    ZeroTickInterval,
}

/// The Result type for loading settings.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The defaults of a clock session. All durations are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// The duration each player receives when the clock is reset.
    pub configured_duration_ms: u64,
    /// The duration both players start out with before the first reset.
    pub initial_remaining_ms: u64,
    /// How often the ticker ticks the clock. Every tick takes a second off,
    /// so any other value speeds the clock up or slows it down.
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            configured_duration_ms: DEFAULT_CONFIGURED_DURATION_MS,
            initial_remaining_ms: DEFAULT_INITIAL_REMAINING_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Parses settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)
            .context(Json)?
            .validated()
    }

    /// Parses settings from a reader providing JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader::<_, Self>(reader)
            .context(Json)?
            .validated()
    }

    fn validated(self) -> Result<Self> {
        ensure!(self.tick_interval_ms != 0, ZeroTickInterval);
        Ok(self)
    }

    /// The tick interval as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn defaults_match_the_clock() {
        let settings = Settings::default();
        assert_eq!(settings.configured_duration_ms, 100_000);
        assert_eq!(settings.initial_remaining_ms, 10_000);
        assert_eq!(settings.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn overrides_fields() {
        let settings = Settings::from_reader(
            &br#"{ "initialRemainingMs": 60000, "tickIntervalMs": 250 }"#[..],
        )
        .unwrap();
        assert_eq!(settings.configured_duration_ms, 100_000);
        assert_eq!(settings.initial_remaining_ms, 60_000);
        assert_eq!(settings.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            Settings::from_json(r#"{ "tickIntervalMs": "soon" }"#),
            Err(Error::Json { .. })
        ));
        assert!(matches!(Settings::from_json("{"), Err(Error::Json { .. })));
    }

    #[test]
    fn rejects_zero_tick_interval() {
        assert!(matches!(
            Settings::from_json(r#"{ "tickIntervalMs": 0 }"#),
            Err(Error::ZeroTickInterval)
        ));
    }
}
