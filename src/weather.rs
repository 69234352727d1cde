//! Weather penalties derived from free-text condition reports.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::trace;

use crate::error::{check_positive, InvalidInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Conditions {
    Clear,
    Clouds,
    #[strum(to_string = "mist", serialize = "fog", serialize = "haze")]
    Mist,
    Drizzle,
    Rain,
    #[strum(to_string = "showers", serialize = "shower")]
    Showers,
    Thunderstorm,
    Snow,
    Sleet,
    Other,
}
impl Conditions {
    /// Classifies a description such as "light rain" or "Snow showers" by its leading keyword,
    /// skipping intensity qualifiers.
    pub fn parse(description: &str) -> Self {
        const QUALIFIERS: [&str; 9] = [
            "light", "moderate", "heavy", "intensity", "very", "extreme", "few", "scattered", "ragged",
        ];
        let keyword = description
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_ascii_lowercase())
            .find(|word| !word.is_empty() && !QUALIFIERS.contains(&word.as_str()));
        let conditions = match keyword.as_deref() {
            None => Conditions::Other,
            Some("sky") | Some("sunny") => Conditions::Clear,
            Some("overcast") | Some("cloudy") | Some("broken") => Conditions::Clouds,
            Some(keyword) => Conditions::from_str(keyword).unwrap_or(Conditions::Other),
        };
        trace!("'{description}' classified as {conditions}");
        conditions
    }
}

/// Multiplicative scoring-rate penalty for each weather classification. Every penalty lies in
/// (0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPenalties {
    pub drizzle: f64,
    pub rain: f64,
    pub showers: f64,
    pub thunderstorm: f64,
    pub snow: f64,
    pub sleet: f64,
    pub mist: f64,
}
impl WeatherPenalties {
    pub fn penalty(&self, conditions: Conditions) -> f64 {
        match conditions {
            Conditions::Clear | Conditions::Clouds | Conditions::Other => 1.0,
            Conditions::Mist => self.mist,
            Conditions::Drizzle => self.drizzle,
            Conditions::Rain => self.rain,
            Conditions::Showers => self.showers,
            Conditions::Thunderstorm => self.thunderstorm,
            Conditions::Snow => self.snow,
            Conditions::Sleet => self.sleet,
        }
    }

    pub fn penalty_for(&self, description: &str) -> f64 {
        self.penalty(Conditions::parse(description))
    }

    pub fn validate(&self) -> Result<(), InvalidInput> {
        for (field, value) in [
            ("weather.drizzle", self.drizzle),
            ("weather.rain", self.rain),
            ("weather.showers", self.showers),
            ("weather.thunderstorm", self.thunderstorm),
            ("weather.snow", self.snow),
            ("weather.sleet", self.sleet),
            ("weather.mist", self.mist),
        ] {
            check_positive(field, value)?;
            if value > 1.0 {
                return Err(InvalidInput::new(field, value, "must not exceed 1"));
            }
        }
        Ok(())
    }
}

impl Default for WeatherPenalties {
    fn default() -> Self {
        Self {
            drizzle: 0.97,
            rain: 0.95,
            showers: 0.95,
            thunderstorm: 0.9,
            snow: 0.95,
            sleet: 0.95,
            mist: 1.0,
        }
    }
}
