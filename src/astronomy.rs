//! Low-order solar ephemeris and degree-based trigonometry.
//!
//! The sun position series is the one published at praytimes.org; it is good
//! to a few minutes of time, which is all prayer schedules need.

use chrono::{Datelike, NaiveDate};

/// Julian date of the J2000.0 epoch.
const J2000: f64 = 2451545.0;

/// Declination of the sun and the equation of time at a Julian date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Degrees north of the celestial equator.
    pub declination: f64,
    /// Apparent minus mean solar time, in hours.
    pub equation_of_time: f64,
}

/* compute declination angle of sun and equation of time */
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000;
    let g = fix_angle(357.529 + 0.98560028 * d);
    let q = fix_angle(280.459 + 0.98564736 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2. * g));

    let e = 23.439 - 0.00000036 * d;

    let ra = darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0;
    let equation_of_time = q / 15.0 - fix_hour(ra);
    let declination = darcsin(dsin(e) * dsin(l));

    SunPosition {
        declination,
        equation_of_time,
    }
}

/// Julian day at 0h UT of a proleptic Gregorian date.
pub fn julian_date(date: NaiveDate) -> f64 {
    let mut year = date.year() as f64;
    let mut month = date.month() as f64;
    if month <= 2. {
        year -= 1.;
        month += 12.;
    }

    let a = (year / 100.).floor();
    let b = 2. - a + (a / 4.).floor();

    (365.25 * (year + 4716.)).floor() + (30.6001 * (month + 1.)).floor() + date.day() as f64 + b
        - 1524.5
}

/* ---------------------- Trigonometric Functions ----------------------- */

/* degree sin */
pub fn dsin(d: f64) -> f64 {
    d.to_radians().sin()
}

/* degree cos */
pub fn dcos(d: f64) -> f64 {
    d.to_radians().cos()
}

/* degree tan */
pub fn dtan(d: f64) -> f64 {
    d.to_radians().tan()
}

/* degree arcsin */
pub fn darcsin(x: f64) -> f64 {
    x.asin().to_degrees()
}

/* degree arccos, None outside [-1, 1] */
pub fn darccos(x: f64) -> Option<f64> {
    if (-1.0..=1.0).contains(&x) {
        Some(x.acos().to_degrees())
    } else {
        None
    }
}

/* degree arctan2 */
pub fn darctan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/* degree arccot */
pub fn darccot(x: f64) -> f64 {
    (1.0 / x).atan().to_degrees()
}

/* range reduce angle to [0, 360) */
pub fn fix_angle(a: f64) -> f64 {
    fix(a, 360.0)
}

/* range reduce hours to [0, 24) */
pub fn fix_hour(a: f64) -> f64 {
    fix(a, 24.0)
}

fn fix(a: f64, mode: f64) -> f64 {
    let a = a - mode * (a / mode).floor();
    if a < 0.0 {
        a + mode
    } else {
        a
    }
}

/* compute the difference between two times, wrapping past midnight */
pub fn time_diff(time1: f64, time2: f64) -> f64 {
    fix_hour(time2 - time1)
}
