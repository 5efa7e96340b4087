//! # Clock Format
//!
//! Message timestamps are shown as zero-padded `hour:minute`. Whether that
//! is a 24-hour or a 12-hour reading depends on the user's locale, unless
//! the config file, `CHATROOM_CLOCK`, or `--clock` pins it.

use chrono::{DateTime, TimeZone};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locales whose conventional clock is 12-hour.
const TWELVE_HOUR_LOCALES: &[&str] = &["en_US", "en_CA", "en_AU", "en_PH", "en_IN"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ClockFormat {
    #[default]
    #[value(name = "24h")]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[value(name = "12h")]
    #[serde(rename = "12h")]
    TwelveHour,
}

impl ClockFormat {
    /// Pick the clock for a POSIX locale string like `en_US.UTF-8`.
    pub fn from_locale(locale: &str) -> Self {
        let name = locale.split(['.', '@']).next().unwrap_or_default();
        if name == "en" || TWELVE_HOUR_LOCALES.contains(&name) {
            ClockFormat::TwelveHour
        } else {
            ClockFormat::TwentyFourHour
        }
    }

    /// Derive the clock from `LC_ALL`, `LC_TIME`, then `LANG` (first non-empty wins).
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|locale| Self::from_locale(&locale))
            .unwrap_or_default()
    }

    /// Format a timestamp as zero-padded `HH:MM` (or `hh:MM AM/PM`).
    pub fn format<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            ClockFormat::TwentyFourHour => timestamp.format("%H:%M").to_string(),
            ClockFormat::TwelveHour => timestamp.format("%I:%M %p").to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClockFormat::TwentyFourHour => "24h",
            ClockFormat::TwelveHour => "12h",
        }
    }
}

impl FromStr for ClockFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24" | "24h" => Ok(ClockFormat::TwentyFourHour),
            "12" | "12h" => Ok(ClockFormat::TwelveHour),
            other => Err(format!("unknown clock format: {other}")),
        }
    }
}
