//! Typed calculation parameters.
//!
//! Parameters arrive as text in configuration files (`"18"`, `"90 min"`,
//! `"Hanafi"`) and are resolved here once, so the calculation never inspects
//! strings. Malformed numbers fall back to zero.

use std::fmt;

use log::warn;

use crate::error::{Error, Result};

/// Either a solar depression angle or a fixed interval from an anchor time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Param {
    /// Degrees below the horizon.
    Angle(f64),
    /// Minutes from the anchor: before fajr for imsak, after sunset for
    /// maghrib, after maghrib for isha.
    Minutes(f64),
}

impl Param {
    /// Parse `"18"`, `"17.5"` or `"10 min"`.
    pub fn parse(text: &str) -> Self {
        let value = parse_number(text);
        if text.contains("min") {
            Param::Minutes(value)
        } else {
            Param::Angle(value)
        }
    }

    pub fn angle(self) -> Option<f64> {
        match self {
            Param::Angle(degrees) => Some(degrees),
            Param::Minutes(_) => None,
        }
    }

    pub fn minutes(self) -> Option<f64> {
        match self {
            Param::Minutes(minutes) => Some(minutes),
            Param::Angle(_) => None,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Angle(degrees) => write!(f, "{}", degrees),
            Param::Minutes(minutes) => write!(f, "{} min", minutes),
        }
    }
}

/// Shadow-length rule for Asr.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AsrJuristic {
    /// Shadow equals object length (Shafii, Maliki, Hanbali).
    #[default]
    Standard,
    /// Shadow equals twice the object length.
    Hanafi,
    /// Any other shadow ratio.
    Factor(f64),
}

impl AsrJuristic {
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "Standard" => AsrJuristic::Standard,
            "Hanafi" => AsrJuristic::Hanafi,
            other => AsrJuristic::Factor(parse_number(other)),
        }
    }

    pub fn factor(self) -> f64 {
        match self {
            AsrJuristic::Standard => 1.,
            AsrJuristic::Hanafi => 2.,
            AsrJuristic::Factor(factor) => factor,
        }
    }
}

/// Fallback for fajr and isha where the sun stays too close to the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighLatMethod {
    None,
    /// Half of the night.
    #[default]
    NightMiddle,
    /// `angle / 60` of the night.
    AngleBased,
    /// One seventh of the night.
    OneSeventh,
}

impl HighLatMethod {
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "None" => HighLatMethod::None,
            "NightMiddle" => HighLatMethod::NightMiddle,
            "AngleBased" => HighLatMethod::AngleBased,
            "OneSeventh" => HighLatMethod::OneSeventh,
            other => {
                warn!("unknown high latitude method {:?}, using NightMiddle", other);
                HighLatMethod::NightMiddle
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HighLatMethod::None => "None",
            HighLatMethod::NightMiddle => "NightMiddle",
            HighLatMethod::AngleBased => "AngleBased",
            HighLatMethod::OneSeventh => "OneSeventh",
        }
    }

    /* the night portion used for adjusting times in higher latitudes */
    pub fn night_portion(self, angle: f64) -> f64 {
        match self {
            HighLatMethod::AngleBased => 1.0 / 60.0 * angle,
            HighLatMethod::OneSeventh => 1.0 / 7.0,
            HighLatMethod::NightMiddle | HighLatMethod::None => 1.0 / 2.0,
        }
    }
}

/// Where the night is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MidnightMethod {
    /// Halfway from sunset to sunrise.
    #[default]
    Standard,
    /// Halfway from sunset to fajr.
    Jafari,
}

impl MidnightMethod {
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "Jafari" => MidnightMethod::Jafari,
            _ => MidnightMethod::Standard,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MidnightMethod::Standard => "Standard",
            MidnightMethod::Jafari => "Jafari",
        }
    }
}

/// The effective parameter table of a calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub imsak: Param,
    /// Fajr depression angle in degrees.
    pub fajr: f64,
    /// Minutes added to solar noon.
    pub dhuhr: f64,
    pub asr: AsrJuristic,
    pub maghrib: Param,
    pub isha: Param,
    pub high_lats: HighLatMethod,
    pub midnight: MidnightMethod,
}

impl Settings {
    /// Global defaults with the given fajr and isha.
    pub fn new(fajr: f64, isha: Param) -> Self {
        Self {
            imsak: Param::Minutes(10.),
            fajr,
            dhuhr: 0.,
            asr: AsrJuristic::Standard,
            maghrib: Param::Minutes(0.),
            isha,
            high_lats: HighLatMethod::NightMiddle,
            midnight: MidnightMethod::Standard,
        }
    }

    pub fn with_maghrib(mut self, maghrib: Param) -> Self {
        self.maghrib = maghrib;
        self
    }

    pub fn with_midnight(mut self, midnight: MidnightMethod) -> Self {
        self.midnight = midnight;
        self
    }

    pub fn with_asr(mut self, asr: AsrJuristic) -> Self {
        self.asr = asr;
        self
    }

    pub fn with_high_lats(mut self, high_lats: HighLatMethod) -> Self {
        self.high_lats = high_lats;
        self
    }

    /// Override one parameter by name from its textual form.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "imsak" => self.imsak = Param::parse(value),
            "fajr" => self.fajr = parse_number(value),
            "dhuhr" => self.dhuhr = parse_number(value),
            "asr" => self.asr = AsrJuristic::parse(value),
            "maghrib" => self.maghrib = Param::parse(value),
            "isha" => self.isha = Param::parse(value),
            "highLats" | "high_lats" => self.high_lats = HighLatMethod::parse(value),
            "midnight" => self.midnight = MidnightMethod::parse(value),
            _ => return Err(Error::UnknownSetting(name.to_string())),
        }
        Ok(())
    }
}

/// Leading numeric part of `text`, or 0 when there is none.
pub(crate) fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')))
        .unwrap_or(text.len());
    let number = &text[..end];
    if number.is_empty() {
        return 0.;
    }
    number.parse().unwrap_or_else(|_| {
        warn!("malformed number {:?}, using 0", text);
        0.
    })
}
