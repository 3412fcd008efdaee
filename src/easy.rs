use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::times::{TimeName, TimeTable};
use crate::TimeFormat;

impl crate::PrayerTimes {
    /// Times for `date` rendered in the calculator's time format.
    pub fn get_prayer_times_easy(&self, date: NaiveDate) -> EasyTimes {
        EasyTimes::from_table(&self.get_prayer_times(date), self.time_format())
    }
}

/// Formatted times keyed by lowercase time name.
///
/// The layout matches the `timings` record of online prayer time providers,
/// so either source can feed the same consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasyTimes {
    pub imsak: String,
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub sunset: String,
    pub maghrib: String,
    pub isha: String,
    pub midnight: String,
}

impl EasyTimes {
    pub fn from_table(times: &TimeTable, format: TimeFormat) -> Self {
        let f = |name: TimeName| format.format(times[name]);
        EasyTimes {
            imsak: f(TimeName::Imsak),
            fajr: f(TimeName::Fajr),
            sunrise: f(TimeName::Sunrise),
            dhuhr: f(TimeName::Dhuhr),
            asr: f(TimeName::Asr),
            sunset: f(TimeName::Sunset),
            maghrib: f(TimeName::Maghrib),
            isha: f(TimeName::Isha),
            midnight: f(TimeName::Midnight),
        }
    }

    pub fn get(&self, name: TimeName) -> &str {
        match name {
            TimeName::Imsak => &self.imsak,
            TimeName::Fajr => &self.fajr,
            TimeName::Sunrise => &self.sunrise,
            TimeName::Dhuhr => &self.dhuhr,
            TimeName::Asr => &self.asr,
            TimeName::Sunset => &self.sunset,
            TimeName::Maghrib => &self.maghrib,
            TimeName::Isha => &self.isha,
            TimeName::Midnight => &self.midnight,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeName, &str)> + '_ {
        TimeName::ALL.into_iter().map(move |name| (name, self.get(name)))
    }
}
