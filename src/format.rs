use std::fmt;
use std::str::FromStr;

use crate::astronomy::fix_hour;
use crate::error::Error;

/// Placeholder for a time that has no solution at this date and place.
pub const INVALID_TIME: &str = "-----";

/// Output layout of a formatted time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// `"13:05"`
    #[default]
    Hour24,
    /// `"1:05 PM"`
    Hour12,
    /// `"1:05"`
    Hour12NoSuffix,
    /// `"13.08"`, fractional hours
    Float,
}

impl TimeFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFormat::Hour24 => "24h",
            TimeFormat::Hour12 => "12h",
            TimeFormat::Hour12NoSuffix => "12hNS",
            TimeFormat::Float => "Float",
        }
    }

    /// Render one hour-of-day value; `None` becomes [`INVALID_TIME`].
    pub fn format(self, time: Option<f64>) -> String {
        let Some(time) = time.filter(|t| t.is_finite()) else {
            return INVALID_TIME.into();
        };
        match self {
            TimeFormat::Hour24 => float_time_to_time24(time),
            TimeFormat::Hour12 => {
                let (hours, minutes) = get_float_time_parts(time);
                let suffix = if hours < 12 { "AM" } else { "PM" };
                format!("{}:{:02} {}", hour12(hours), minutes, suffix)
            }
            TimeFormat::Hour12NoSuffix => {
                let (hours, minutes) = get_float_time_parts(time);
                format!("{}:{:02}", hour12(hours), minutes)
            }
            TimeFormat::Float => format!("{:.2}", fix_hour(time)),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(TimeFormat::Hour24),
            "12h" => Ok(TimeFormat::Hour12),
            "12hNS" => Ok(TimeFormat::Hour12NoSuffix),
            "Float" | "float" => Ok(TimeFormat::Float),
            _ => Err(Error::UnknownTimeFormat(s.to_string())),
        }
    }
}

/* convert float hours to 24h format */
pub fn float_time_to_time24(time: f64) -> String {
    if !time.is_finite() {
        return INVALID_TIME.into();
    }
    let (hours, minutes) = get_float_time_parts(time);
    format!("{:02}:{:02}", hours, minutes)
}

fn hour12(hours: u32) -> u32 {
    match hours % 12 {
        0 => 12,
        h => h,
    }
}

/* get hours and minutes parts of a float time */
fn get_float_time_parts(time: f64) -> (u32, u32) {
    let time = fix_hour(time + 0.5 / 60.); // add 0.5 minutes to round
    let hours = time.floor();
    let minutes = ((time - hours) * 60.).floor();
    (hours as u32, minutes as u32)
}
