/*-------------------------- In the name of God ----------------------------*\

    prayer_engine (rust)
    Offline Islamic prayer times calculation engine
    Based on libprayertimes 1.0 Cpp library
    Based on PrayTimes 1.1 JavaScript library

----------------------------- Copyright Block --------------------------------

Copyright (C) 2007-2010 PrayTimes.org

Developed By: Nbiba Bedis <bedis at nbiba at gmail dot com>
Based on Cpp Code By: Mohammad Ebrahim Mohammadi Panah <ebrahim at mohammadi dot ir>
Based on a JavaScript Code By: Hamid Zarrabi-Zadeh

License: GNU GPL v3.0

TERMS OF USE:
    Permission is granted to use this code, with or
    without modification, in any website or application
    provided that credit is given to the original work
    with a link back to PrayTimes.org.

This program is distributed in the hope that it will
be useful, but WITHOUT ANY WARRANTY.

PLEASE DO NOT REMOVE THIS COPYRIGHT BLOCK.

------------------------------------------------------------------------------

User's Manual:
http://praytimes.org/manual

Calculating Formulas:
http://praytimes.org/calculation

\*--------------------------------------------------------------------------*/

//! Offline Islamic prayer times.
//!
//! [`PrayerTimes`] turns a date, a location and a [`CalculationMethod`] into
//! the nine daily times from imsak to midnight, using a low-order solar
//! ephemeris and the adjustment rules of the PrayTimes algorithm.
//!
//! ```
//! use chrono::NaiveDate;
//! use prayer_engine::{CalculationMethod, Coordinates, PrayerTimes};
//!
//! let pt = PrayerTimes::new(CalculationMethod::MWL, Coordinates::new(36., 10.), 1.);
//! let times = pt.get_prayer_times_easy(NaiveDate::from_ymd_opt(2022, 11, 27).unwrap());
//! assert_eq!(times.fajr, "05:38");
//! ```

pub mod astronomy;
pub mod calculator;
pub mod config;
pub mod easy;
pub mod error;
pub mod format;
pub mod method;
pub mod settings;
pub mod times;

pub use calculator::{Coordinates, PrayerTimes};
pub use config::CalculatorConfig;
pub use easy::EasyTimes;
pub use error::{Error, Result};
pub use format::{float_time_to_time24, TimeFormat, INVALID_TIME};
pub use method::CalculationMethod;
pub use settings::{AsrJuristic, HighLatMethod, MidnightMethod, Param, Settings};
pub use times::{Offsets, TimeName, TimeTable};
