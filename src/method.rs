use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::error::Error;
use crate::settings::{MidnightMethod, Param, Settings};

// Calculation Methods
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CalculationMethod {
    #[default]
    MWL, // Muslim World League
    ISNA,    // Islamic Society of North America
    Egypt,   // Egyptian General Authority of Survey
    Makkah,  // Umm Al-Qura University, Makkah
    Karachi, // University of Islamic Sciences, Karachi
    Tehran,  // Institute of Geophysics, University of Tehran
    Jafari,  // Shia Ithna-Ashari, Leva Institute, Qum
}

impl CalculationMethod {
    pub const ALL: [CalculationMethod; 7] = [
        CalculationMethod::MWL,
        CalculationMethod::ISNA,
        CalculationMethod::Egypt,
        CalculationMethod::Makkah,
        CalculationMethod::Karachi,
        CalculationMethod::Tehran,
        CalculationMethod::Jafari,
    ];

    /// Look up `name`, falling back to MWL for unknown identifiers.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("unknown calculation method {:?}, using MWL", name);
            CalculationMethod::MWL
        })
    }

    pub fn identifier(self) -> &'static str {
        match self {
            CalculationMethod::MWL => "MWL",
            CalculationMethod::ISNA => "ISNA",
            CalculationMethod::Egypt => "Egypt",
            CalculationMethod::Makkah => "Makkah",
            CalculationMethod::Karachi => "Karachi",
            CalculationMethod::Tehran => "Tehran",
            CalculationMethod::Jafari => "Jafari",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CalculationMethod::MWL => "Muslim World League",
            CalculationMethod::ISNA => "Islamic Society of North America",
            CalculationMethod::Egypt => "Egyptian General Authority of Survey",
            CalculationMethod::Makkah => "Umm Al-Qura University, Makkah",
            CalculationMethod::Karachi => "University of Islamic Sciences, Karachi",
            CalculationMethod::Tehran => "Institute of Geophysics, University of Tehran",
            CalculationMethod::Jafari => "Shia Ithna-Ashari, Leva Institute, Qum",
        }
    }

    /// Method number used by the aladhan.com timings API.
    pub fn aladhan_id(self) -> u8 {
        match self {
            CalculationMethod::Jafari => 0,
            CalculationMethod::ISNA => 2,
            CalculationMethod::MWL => 3,
            CalculationMethod::Makkah => 4,
            CalculationMethod::Egypt => 5,
            CalculationMethod::Karachi => 6,
            CalculationMethod::Tehran => 7,
        }
    }

    /// Global defaults with this method's angles layered on top.
    pub fn settings(self) -> Settings {
        use CalculationMethod::*;
        match self {
            MWL => Settings::new(18., Param::Angle(17.)),
            ISNA => Settings::new(15., Param::Angle(15.)),
            Egypt => Settings::new(19.5, Param::Angle(17.5)),
            Makkah => Settings::new(18.5, Param::Minutes(90.)),
            Karachi => Settings::new(18., Param::Angle(18.)),
            Tehran => Settings::new(17.7, Param::Angle(14.))
                .with_maghrib(Param::Angle(4.5))
                .with_midnight(MidnightMethod::Jafari),
            Jafari => Settings::new(16., Param::Angle(14.))
                .with_maghrib(Param::Angle(4.))
                .with_midnight(MidnightMethod::Jafari),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        CalculationMethod::default().settings()
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for CalculationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculationMethod::ALL
            .into_iter()
            .find(|method| method.identifier().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownMethod(s.to_string()))
    }
}
