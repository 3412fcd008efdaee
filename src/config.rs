//! TOML configuration for a calculator.
//!
//! ```toml
//! method = "ISNA"
//! time_format = "12h"
//!
//! [location]
//! latitude = 43.6532
//! longitude = -79.3832
//! timezone = -5
//!
//! [params]
//! asr = "Hanafi"
//! isha = "90 min"
//!
//! [offsets]
//! fajr = 2
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::calculator::{Coordinates, PrayerTimes};
use crate::error::{Error, Result};
use crate::format::TimeFormat;
use crate::method::CalculationMethod;
use crate::times::{Offsets, TimeName};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculatorConfig {
    pub location: LocationConfig,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Setting overrides applied on top of the method preset.
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
    /// Minutes added to each named time.
    #[serde(default)]
    pub offsets: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: f64,
    #[serde(default)]
    pub elevation: f64,
}

/// A parameter written either as a bare number or as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    fn to_text(&self) -> String {
        match self {
            ParamValue::Number(number) => number.to_string(),
            ParamValue::Text(text) => text.clone(),
        }
    }
}

fn default_method() -> String {
    CalculationMethod::default().to_string()
}

fn default_time_format() -> String {
    TimeFormat::default().to_string()
}

impl CalculatorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading calculator config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Build a calculator, validating the location and every named key.
    ///
    /// An unknown method name falls back to MWL; unknown setting, offset or
    /// format names are errors.
    pub fn build_calculator(&self) -> Result<PrayerTimes> {
        let LocationConfig {
            latitude,
            longitude,
            timezone,
            elevation,
        } = self.location;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLocation {
                latitude,
                longitude,
            });
        }

        let method = CalculationMethod::from_name_or_default(&self.method);
        let coordinates = Coordinates::new(latitude, longitude).with_elevation(elevation);
        let mut calculator = PrayerTimes::new(method, coordinates, timezone);

        for (name, value) in &self.params {
            calculator.adjust(name, &value.to_text())?;
        }

        let mut offsets = Offsets::new();
        for (name, minutes) in &self.offsets {
            offsets.set(name.parse::<TimeName>()?, *minutes);
        }
        calculator.tune(offsets);
        calculator.set_time_format(self.time_format.parse()?);

        Ok(calculator)
    }
}
