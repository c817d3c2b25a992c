//! Day/night phase and time lords used by Kala Bala.
//!
//! The Vedic day runs from one sunrise to the next. When a chart carries
//! [`SunEvents`] the phase is exact; otherwise [`day_phase`] falls back to
//! the named [`DayPhaseSource::HouseHeuristic`] path: the Sun in houses
//! 7-12 (above the horizon) means day, and the position within the day or
//! night is taken from local mean time against nominal 06:00 and 18:00
//! boundaries.
//!
//! The year lord uses a fixed 60-year cycle from CE 1987 and the month
//! lord uses the Sun's sidereal sign. Both are calendar approximations,
//! not a lunar calendar or a Jupiter-longitude cycle.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chart::{Chart, GeoLocation, SunEvents};
use crate::graha::{Graha, SAPTA_GRAHAS, rashi_lord};
use crate::rashi::rashi_from_longitude;

/// Planetary hour sequence (descending orbital period).
pub const CHALDEAN_ORDER: [Graha; 7] = [
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
];

/// Lords of the three thirds of the day.
pub const DAY_TRIBHAGA_LORDS: [Graha; 3] = [Graha::Guru, Graha::Surya, Graha::Shani];

/// Lords of the three thirds of the night.
pub const NIGHT_TRIBHAGA_LORDS: [Graha; 3] = [Graha::Chandra, Graha::Shukra, Graha::Mangal];

/// Reference epoch: CE 1987 = Prabhava, index 0 of the 60-year cycle.
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

const NOMINAL_SUNRISE_HOUR: f64 = 6.0;
const NOMINAL_SUNSET_HOUR: f64 = 18.0;

/// How the day/night phase was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPhaseSource {
    /// True sunrise/sunset bracketing the instant.
    SunEvents,
    /// Sun house placement plus local mean time.
    HouseHeuristic,
}

/// Position of an instant within the Vedic day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayPhase {
    /// Between sunrise and sunset.
    pub is_day: bool,
    /// Fraction [0, 1) elapsed of the current day or night.
    pub fraction: f64,
    /// Local civil date on which the current Vedic day began.
    pub vedic_date: NaiveDate,
    pub source: DayPhaseSource,
}

impl DayPhase {
    pub fn weekday(&self) -> Weekday {
        self.vedic_date.weekday()
    }

    /// Lord of the Vedic weekday.
    pub fn day_lord(&self) -> Graha {
        weekday_lord(self.weekday())
    }

    /// Planetary hour 0-23 counted from sunrise; 12-23 are night horas.
    pub fn hora_index(&self) -> u8 {
        let within = ((self.fraction * 12.0).floor() as u8).min(11);
        if self.is_day { within } else { 12 + within }
    }

    pub fn hora_lord(&self) -> Graha {
        hora_lord(self.day_lord(), self.hora_index())
    }

    pub fn tribhaga_lord(&self) -> Graha {
        tribhaga_lord(self.is_day, self.fraction)
    }
}

/// Weekday lord.
pub const fn weekday_lord(weekday: Weekday) -> Graha {
    match weekday {
        Weekday::Sun => Graha::Surya,
        Weekday::Mon => Graha::Chandra,
        Weekday::Tue => Graha::Mangal,
        Weekday::Wed => Graha::Buddh,
        Weekday::Thu => Graha::Guru,
        Weekday::Fri => Graha::Shukra,
        Weekday::Sat => Graha::Shani,
    }
}

/// Lord of planetary hour `hora_index` (0 = first hour after sunrise).
pub fn hora_lord(day_lord: Graha, hora_index: u8) -> Graha {
    let start = CHALDEAN_ORDER
        .iter()
        .position(|&g| g == day_lord)
        .unwrap_or(0);
    CHALDEAN_ORDER[(start + hora_index as usize) % 7]
}

/// Lord of the current third of the day or night.
pub fn tribhaga_lord(is_day: bool, fraction: f64) -> Graha {
    let idx = ((fraction * 3.0).floor().max(0.0) as usize).min(2);
    if is_day {
        DAY_TRIBHAGA_LORDS[idx]
    } else {
        NIGHT_TRIBHAGA_LORDS[idx]
    }
}

/// Solar month lord: lord of the Sun's sidereal sign.
pub fn masa_lord(sun_sid_lon: f64) -> Graha {
    rashi_lord(rashi_from_longitude(sun_sid_lon).rashi)
}

/// Position 0-59 in the 60-year samvatsara cycle.
pub fn samvatsara_index(ce_year: i32) -> u8 {
    (ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as u8
}

/// Year lord: samvatsara index mod 7 over the sapta grahas.
pub fn varsha_lord(ce_year: i32) -> Graha {
    SAPTA_GRAHAS[samvatsara_index(ce_year) as usize % 7]
}

pub(crate) fn to_local_mean(instant: DateTime<Utc>, location: &GeoLocation) -> DateTime<Utc> {
    let offset_ms = (location.longitude_deg * 240_000.0).round() as i64;
    instant + Duration::milliseconds(offset_ms)
}

fn fraction_between(start: DateTime<Utc>, end: DateTime<Utc>, instant: DateTime<Utc>) -> f64 {
    let total = (end - start).num_milliseconds() as f64;
    if total <= 0.0 {
        return 0.0;
    }
    let elapsed = (instant - start).num_milliseconds() as f64;
    (elapsed / total).clamp(0.0, 1.0 - f64::EPSILON)
}

/// Exact phase from sunrise/sunset. `None` if the events do not bracket
/// the instant.
pub fn day_phase_from_events(
    instant: DateTime<Utc>,
    events: &SunEvents,
    location: &GeoLocation,
) -> Option<DayPhase> {
    if !events.brackets(instant) {
        return None;
    }
    let is_day = instant < events.sunset;
    let fraction = if is_day {
        fraction_between(events.sunrise, events.sunset, instant)
    } else {
        fraction_between(events.sunset, events.next_sunrise, instant)
    };
    Some(DayPhase {
        is_day,
        fraction,
        vedic_date: to_local_mean(events.sunrise, location).date_naive(),
        source: DayPhaseSource::SunEvents,
    })
}

/// Coarse phase from the Sun's house and local mean time.
pub fn day_phase_from_houses(chart: &Chart) -> DayPhase {
    let local = to_local_mean(chart.timestamp(), chart.location());
    let t = local.time();
    let hour = t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0;

    let is_day = match chart.planet(Graha::Surya) {
        Some(sun) => (7..=12).contains(&sun.house),
        None => (NOMINAL_SUNRISE_HOUR..NOMINAL_SUNSET_HOUR).contains(&hour),
    };
    let fraction = if is_day {
        (hour - NOMINAL_SUNRISE_HOUR) / 12.0
    } else {
        (hour - NOMINAL_SUNSET_HOUR).rem_euclid(24.0) / 12.0
    }
    .clamp(0.0, 1.0 - f64::EPSILON);

    let mut vedic_date = local.date_naive();
    if hour < NOMINAL_SUNRISE_HOUR {
        vedic_date = vedic_date.pred_opt().unwrap_or(vedic_date);
    }

    DayPhase {
        is_day,
        fraction,
        vedic_date,
        source: DayPhaseSource::HouseHeuristic,
    }
}

/// Day phase of a chart, preferring true sunrise/sunset.
pub fn day_phase(chart: &Chart) -> DayPhase {
    if let Some(events) = chart.sun_events() {
        if let Some(phase) = day_phase_from_events(chart.timestamp(), events, chart.location()) {
            return phase;
        }
        warn!(
            timestamp = %chart.timestamp(),
            "sun events do not bracket chart instant, using house heuristic"
        );
    } else {
        warn!(
            timestamp = %chart.timestamp(),
            "no sunrise/sunset for chart, using house heuristic"
        );
    }
    day_phase_from_houses(chart)
}
