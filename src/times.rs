use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::Error;

/// The nine named times of a prayer day, in chronological order for a
/// typical mid-latitude location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeName {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
}

impl TimeName {
    pub const COUNT: usize = 9;

    pub const ALL: [TimeName; TimeName::COUNT] = [
        TimeName::Imsak,
        TimeName::Fajr,
        TimeName::Sunrise,
        TimeName::Dhuhr,
        TimeName::Asr,
        TimeName::Sunset,
        TimeName::Maghrib,
        TimeName::Isha,
        TimeName::Midnight,
    ];

    /// Lowercase key, shared with online timing providers.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeName::Imsak => "imsak",
            TimeName::Fajr => "fajr",
            TimeName::Sunrise => "sunrise",
            TimeName::Dhuhr => "dhuhr",
            TimeName::Asr => "asr",
            TimeName::Sunset => "sunset",
            TimeName::Maghrib => "maghrib",
            TimeName::Isha => "isha",
            TimeName::Midnight => "midnight",
        }
    }
}

impl fmt::Display for TimeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownTimeName(s.to_string()))
    }
}

/// Hour-of-day values for one calculation, before wrapping to a calendar day.
///
/// `None` marks a time the sun never reaches for this date and place.
/// The table is `Copy`: every pipeline stage takes one and returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeTable {
    times: [Option<f64>; TimeName::COUNT],
}

impl TimeTable {
    /// Starting guesses for the refinement pass. Midnight is derived later.
    pub(crate) fn initial() -> Self {
        let mut table = Self::default();
        for (name, hours) in [
            (TimeName::Imsak, 5.),
            (TimeName::Fajr, 5.),
            (TimeName::Sunrise, 6.),
            (TimeName::Dhuhr, 12.),
            (TimeName::Asr, 13.),
            (TimeName::Sunset, 18.),
            (TimeName::Maghrib, 18.),
            (TimeName::Isha, 18.),
        ] {
            table[name] = Some(hours);
        }
        table
    }

    pub fn get(&self, name: TimeName) -> Option<f64> {
        self[name]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeName, Option<f64>)> + '_ {
        TimeName::ALL.into_iter().zip(self.times.iter().copied())
    }

    /// Apply `f` to every solved time, leaving unsolved ones untouched.
    pub(crate) fn map(mut self, f: impl Fn(TimeName, f64) -> f64) -> Self {
        for (name, time) in TimeName::ALL.into_iter().zip(self.times.iter_mut()) {
            *time = time.map(|t| f(name, t));
        }
        self
    }
}

impl Index<TimeName> for TimeTable {
    type Output = Option<f64>;

    fn index(&self, name: TimeName) -> &Self::Output {
        &self.times[name as usize]
    }
}

impl IndexMut<TimeName> for TimeTable {
    fn index_mut(&mut self, name: TimeName) -> &mut Self::Output {
        &mut self.times[name as usize]
    }
}

/// Per-time tuning, in minutes, added after every other adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offsets {
    minutes: [f64; TimeName::COUNT],
}

impl Offsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: TimeName, minutes: f64) -> Self {
        self.set(name, minutes);
        self
    }

    pub fn set(&mut self, name: TimeName, minutes: f64) {
        self.minutes[name as usize] = minutes;
    }

    pub fn get(&self, name: TimeName) -> f64 {
        self.minutes[name as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_strings() {
        for name in TimeName::ALL {
            assert_eq!(name.as_str().parse::<TimeName>().unwrap(), name);
        }
        assert_eq!("Fajr".parse::<TimeName>().unwrap(), TimeName::Fajr);
        assert!(matches!(
            "tahajjud".parse::<TimeName>(),
            Err(Error::UnknownTimeName(_))
        ));
    }

    #[test]
    fn initial_table_leaves_midnight_unset() {
        let table = TimeTable::initial();
        assert_eq!(table[TimeName::Fajr], Some(5.));
        assert_eq!(table[TimeName::Asr], Some(13.));
        assert_eq!(table[TimeName::Midnight], None);
    }

    #[test]
    fn map_skips_unsolved_times() {
        let mut table = TimeTable::initial();
        table[TimeName::Isha] = None;
        let shifted = table.map(|_, t| t + 1.);
        assert_eq!(shifted[TimeName::Dhuhr], Some(13.));
        assert_eq!(shifted[TimeName::Isha], None);
        // the input table is left unchanged
        assert_eq!(table[TimeName::Dhuhr], Some(12.));
    }

    #[test]
    fn offsets_default_to_zero() {
        let offsets = Offsets::new().with(TimeName::Asr, 3.);
        assert_eq!(offsets.get(TimeName::Asr), 3.);
        assert_eq!(offsets.get(TimeName::Fajr), 0.);
    }
}
