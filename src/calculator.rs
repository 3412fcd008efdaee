use chrono::NaiveDate;
use log::{debug, trace};

use crate::astronomy::{
    darccos, darccot, dcos, dsin, dtan, fix_hour, julian_date, sun_position, time_diff,
};
use crate::error::Result;
use crate::format::TimeFormat;
use crate::method::CalculationMethod;
use crate::settings::{HighLatMethod, MidnightMethod, Param, Settings};
use crate::times::{Offsets, TimeName, TimeTable};

/// Number of refinement passes over the initial guesses.
const NUM_ITERATIONS: usize = 1;

/// Observer position on the earth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Meters above sea level.
    pub elevation: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: 0.,
        }
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }
}

/// Which side of solar noon a time falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Before noon.
    Ccw,
    /// After noon.
    Cw,
}

/// Prayer times calculator for one location and parameter set.
///
/// Calculation takes `&self` and never fails; times that cannot be solved
/// for the date and place come back as `None` and format as
/// [`INVALID_TIME`](crate::INVALID_TIME).
#[derive(Debug, Clone)]
pub struct PrayerTimes {
    settings: Settings,
    coordinates: Coordinates,
    timezone: f64, // hours from UTC
    offsets: Offsets,
    time_format: TimeFormat,
}

impl PrayerTimes {
    pub fn new(method: CalculationMethod, coordinates: Coordinates, timezone: f64) -> Self {
        Self::with_settings(method.settings(), coordinates, timezone)
    }

    /// Calculator with a caller-defined parameter table.
    pub fn with_settings(settings: Settings, coordinates: Coordinates, timezone: f64) -> Self {
        Self {
            settings,
            coordinates,
            timezone,
            offsets: Offsets::default(),
            time_format: TimeFormat::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn timezone(&self) -> f64 {
        self.timezone
    }

    pub fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    pub fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    pub fn set_location(&mut self, coordinates: Coordinates, timezone: f64) {
        debug!(
            "location set to ({}, {}) at UTC{:+}",
            coordinates.latitude, coordinates.longitude, timezone
        );
        self.coordinates = coordinates;
        self.timezone = timezone;
    }

    pub fn set_elevation(&mut self, elevation: f64) {
        self.coordinates.elevation = elevation;
    }

    /// Replace the settings with the preset of `method`, discarding overrides.
    pub fn set_method(&mut self, method: CalculationMethod) {
        debug!("calculation method set to {}", method);
        self.settings = method.settings();
    }

    /// Override one setting by name, e.g. `adjust("asr", "Hanafi")`.
    pub fn adjust(&mut self, name: &str, value: &str) -> Result<()> {
        self.settings.set(name, value)
    }

    pub fn tune(&mut self, offsets: Offsets) {
        self.offsets = offsets;
    }

    pub fn set_time_format(&mut self, time_format: TimeFormat) {
        self.time_format = time_format;
    }

    /// Unformatted times for `date`, in hours of the configured timezone.
    ///
    /// Values are not wrapped to `[0, 24)`: a midnight past 24:00 stays
    /// above 24 so that the order of the table is preserved.
    pub fn get_prayer_times(&self, date: NaiveDate) -> TimeTable {
        let jd = julian_date(date) - self.coordinates.longitude / (15. * 24.);

        let mut times = TimeTable::initial();
        for _ in 0..NUM_ITERATIONS {
            times = self.compute_times(jd, times);
        }
        trace!("{} raw times: {:?}", date, times);

        let times = self.adjust_times(times);
        let times = self.add_midnight(times);
        let times = self.tune_times(times);
        trace!("{} adjusted times: {:?}", date, times);
        times
    }

    /* ---------------------- Compute Prayer Times ----------------------- */

    /* compute prayer times at given julian date */
    fn compute_times(&self, jd: f64, guesses: TimeTable) -> TimeTable {
        use TimeName::*;
        let settings = &self.settings;
        let rise_set = rise_set_angle(self.coordinates.elevation);

        let mut times = TimeTable::default();
        for name in [Imsak, Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib, Isha] {
            // guesses are hours, the ephemeris wants fractions of a day
            let Some(t) = guesses[name].map(|hours| hours / 24.) else {
                continue;
            };
            times[name] = match name {
                Imsak => settings
                    .imsak
                    .angle()
                    .and_then(|angle| self.sun_angle_time(jd, angle, t, Direction::Ccw)),
                Fajr => self.sun_angle_time(jd, settings.fajr, t, Direction::Ccw),
                Sunrise => self.sun_angle_time(jd, rise_set, t, Direction::Ccw),
                Dhuhr => Some(self.mid_day(jd, t)),
                Asr => self.asr_time(jd, settings.asr.factor(), t),
                Sunset => self.sun_angle_time(jd, rise_set, t, Direction::Cw),
                Maghrib => settings
                    .maghrib
                    .angle()
                    .and_then(|angle| self.sun_angle_time(jd, angle, t, Direction::Cw)),
                Isha => settings
                    .isha
                    .angle()
                    .and_then(|angle| self.sun_angle_time(jd, angle, t, Direction::Cw)),
                Midnight => None,
            };
        }
        times
    }

    /* compute mid-day (Dhuhr, Zawal) time */
    fn mid_day(&self, jd: f64, t: f64) -> f64 {
        let eqt = sun_position(jd + t).equation_of_time;
        fix_hour(12. - eqt)
    }

    /* compute the time at which the sun is `angle` degrees below the horizon */
    fn sun_angle_time(&self, jd: f64, angle: f64, t: f64, direction: Direction) -> Option<f64> {
        let latitude = self.coordinates.latitude;
        let decl = sun_position(jd + t).declination;
        let noon = self.mid_day(jd, t);
        let cos_hour_angle =
            (-dsin(angle) - dsin(decl) * dsin(latitude)) / (dcos(decl) * dcos(latitude));
        let v = 1.0 / 15.0 * darccos(cos_hour_angle)?;
        Some(match direction {
            Direction::Ccw => noon - v,
            Direction::Cw => noon + v,
        })
    }

    /* compute the time of Asr */
    fn asr_time(&self, jd: f64, factor: f64, t: f64) -> Option<f64> {
        let decl = sun_position(jd + t).declination;
        let angle = -darccot(factor + dtan((self.coordinates.latitude - decl).abs()));
        self.sun_angle_time(jd, angle, t, Direction::Cw)
    }

    /* ---------------------- Adjust Prayer Times ----------------------- */

    /* shift to the civil timezone, then resolve high latitudes and minute offsets */
    fn adjust_times(&self, times: TimeTable) -> TimeTable {
        use TimeName::*;
        let settings = &self.settings;

        let tz_adjust = self.timezone - self.coordinates.longitude / 15.0;
        let mut times = times.map(|_, t| t + tz_adjust);

        if settings.high_lats != HighLatMethod::None {
            times = self.adjust_high_lats(times);
        }

        if let Param::Minutes(minutes) = settings.imsak {
            times[Imsak] = times[Fajr].map(|fajr| fajr - minutes / 60.0);
        }
        if let Param::Minutes(minutes) = settings.maghrib {
            times[Maghrib] = times[Sunset].map(|sunset| sunset + minutes / 60.0);
        }
        if let Param::Minutes(minutes) = settings.isha {
            times[Isha] = times[Maghrib].map(|maghrib| maghrib + minutes / 60.0);
        }
        times[Dhuhr] = times[Dhuhr].map(|dhuhr| dhuhr + settings.dhuhr / 60.0);

        times
    }

    /* adjust imsak, fajr, maghrib and isha for locations in higher latitudes */
    fn adjust_high_lats(&self, mut times: TimeTable) -> TimeTable {
        use TimeName::*;
        let (Some(sunrise), Some(sunset)) = (times[Sunrise], times[Sunset]) else {
            return times;
        };
        let night = time_diff(sunset, sunrise);
        let settings = &self.settings;

        for (name, param, base, direction) in [
            (Imsak, settings.imsak, sunrise, Direction::Ccw),
            (Fajr, Param::Angle(settings.fajr), sunrise, Direction::Ccw),
            (Isha, settings.isha, sunset, Direction::Cw),
            (Maghrib, settings.maghrib, sunset, Direction::Cw),
        ] {
            // minute-based times are derived from their anchor afterwards
            let Some(angle) = param.angle() else {
                continue;
            };
            let portion = settings.high_lats.night_portion(angle) * night;
            let diff = times[name].map(|time| match direction {
                Direction::Ccw => time_diff(time, base),
                Direction::Cw => time_diff(base, time),
            });
            if diff.map_or(true, |diff| diff > portion) {
                let adjusted = match direction {
                    Direction::Ccw => base - portion,
                    Direction::Cw => base + portion,
                };
                debug!(
                    "{} moved from {:?} to {} by {} rule",
                    name,
                    times[name],
                    adjusted,
                    settings.high_lats.as_str()
                );
                times[name] = Some(adjusted);
            }
        }
        times
    }

    fn add_midnight(&self, mut times: TimeTable) -> TimeTable {
        use TimeName::*;
        let end = match self.settings.midnight {
            MidnightMethod::Standard => times[Sunrise],
            MidnightMethod::Jafari => times[Fajr],
        };
        times[Midnight] = match (times[Sunset], end) {
            (Some(sunset), Some(end)) => Some(sunset + time_diff(sunset, end) / 2.),
            _ => None,
        };
        times
    }

    fn tune_times(&self, times: TimeTable) -> TimeTable {
        times.map(|name, t| t + self.offsets.get(name) / 60.0)
    }
}

/* sun angle for sunrise and sunset, with refraction and horizon dip */
fn rise_set_angle(elevation: f64) -> f64 {
    0.833 + 0.0347 * elevation.max(0.).sqrt()
}
