//! Chart snapshot: planet positions, houses and derived placement data.
//!
//! A [`Chart`] is immutable once built. Divisional charts are derived as
//! new values (see [`crate::varga::divisional_chart`]).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::combustion::is_combust;
use crate::dignity::{Dignity, dignity};
use crate::error::BalaError;
use crate::graha::Graha;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{forward_distance, normalize_360};

/// Geographic location for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }
}

/// Raw ephemeris output for one graha at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal longitude in degrees, [0, 360).
    pub longitude: f64,
    #[serde(default)]
    pub latitude: f64,
    /// Distance in AU.
    #[serde(default)]
    pub distance: f64,
    /// Degrees per day; negative while retrograde.
    #[serde(default)]
    pub longitude_speed: f64,
    #[serde(default)]
    pub latitude_speed: f64,
    #[serde(default)]
    pub distance_speed: f64,
    /// Declination in degrees, north positive.
    #[serde(default)]
    pub declination: f64,
    pub timestamp: DateTime<Utc>,
}

impl PlanetPosition {
    /// Position with only a longitude, every other field zero.
    pub fn at_longitude(graha: Graha, longitude: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            graha,
            longitude: normalize_360(longitude),
            latitude: 0.0,
            distance: 0.0,
            longitude_speed: 0.0,
            latitude_speed: 0.0,
            distance_speed: 0.0,
            declination: 0.0,
            timestamp,
        }
    }

    pub fn is_retrograde(&self) -> bool {
        self.longitude_speed < 0.0
    }

    pub fn rashi(&self) -> Rashi {
        rashi_from_longitude(self.longitude).rashi
    }
}

/// Twelve house cusps plus the ascendant and midheaven.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseSystem {
    cusps: [f64; 12],
    ascendant: f64,
    midheaven: f64,
}

impl HouseSystem {
    /// Whole-sign houses: house 1 starts at the ascendant's sign,
    /// midheaven is ascendant + 270.
    pub fn whole_sign(ascendant: f64) -> Self {
        let asc = normalize_360(ascendant);
        let first = rashi_from_longitude(asc).rashi.start_longitude();
        let cusps = std::array::from_fn(|k| normalize_360(first + k as f64 * 30.0));
        Self {
            cusps,
            ascendant: asc,
            midheaven: normalize_360(asc + 270.0),
        }
    }

    /// Explicit cusps from an external house computation.
    pub fn from_cusps(cusps: [f64; 12], ascendant: f64, midheaven: f64) -> Result<Self, BalaError> {
        if !cusps.iter().all(|c| c.is_finite()) {
            return Err(BalaError::InvalidCusps("non-finite cusp longitude"));
        }
        if !ascendant.is_finite() || !midheaven.is_finite() {
            return Err(BalaError::InvalidCusps("non-finite ascendant or midheaven"));
        }
        let total: f64 = (0..12)
            .map(|k| forward_distance(cusps[k], cusps[(k + 1) % 12]))
            .sum();
        if (total - 360.0).abs() > 1e-6 {
            return Err(BalaError::InvalidCusps("cusps are not in zodiacal order"));
        }
        Ok(Self {
            cusps: cusps.map(normalize_360),
            ascendant: normalize_360(ascendant),
            midheaven: normalize_360(midheaven),
        })
    }

    /// Replace the midheaven, e.g. with the ephemeris MC.
    pub fn with_midheaven(mut self, midheaven: f64) -> Self {
        self.midheaven = normalize_360(midheaven);
        self
    }

    pub fn cusps(&self) -> &[f64; 12] {
        &self.cusps
    }

    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    pub fn midheaven(&self) -> f64 {
        self.midheaven
    }

    /// Cusp longitude of house `house` (1-based).
    pub fn cusp(&self, house: u8) -> Result<f64, BalaError> {
        if !(1..=12).contains(&house) {
            return Err(BalaError::InvalidHouseNumber(house));
        }
        Ok(self.cusps[(house - 1) as usize])
    }

    /// House (1-12) containing a longitude, by walking the cusp table.
    pub fn house_of(&self, longitude: f64) -> u8 {
        let lon = normalize_360(longitude);
        for k in 0..12 {
            let start = self.cusps[k];
            let span = forward_distance(start, self.cusps[(k + 1) % 12]);
            if forward_distance(start, lon) < span {
                return k as u8 + 1;
            }
        }
        // Degenerate cusps (all equal): fall back to whole-sign counting
        let asc_sign = rashi_from_longitude(self.ascendant).rashi_index as i32;
        let sign = rashi_from_longitude(lon).rashi_index as i32;
        (sign - asc_sign).rem_euclid(12) as u8 + 1
    }
}

/// Sunrise and sunset bracketing a chart instant.
///
/// The chart instant lies in `[sunrise, next_sunrise)`; day runs from
/// `sunrise` to `sunset`, night from `sunset` to `next_sunrise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunEvents {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub next_sunrise: DateTime<Utc>,
}

impl SunEvents {
    /// Whether the events are ordered and bracket `instant`.
    pub fn brackets(&self, instant: DateTime<Utc>) -> bool {
        self.sunrise < self.sunset
            && self.sunset < self.next_sunrise
            && self.sunrise <= instant
            && instant < self.next_sunrise
    }
}

/// Per-graha placement data in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetInfo {
    pub position: PlanetPosition,
    /// House number, always 1-12.
    pub house: u8,
    pub dignity: Dignity,
    pub is_combust: bool,
    /// Subdivision of the natal sign, set in divisional charts.
    pub subdivision_index: Option<u16>,
    /// Width in degrees of that subdivision.
    pub subdivision_span: Option<f64>,
}

impl PlanetInfo {
    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }

    pub fn rashi(&self) -> Rashi {
        self.position.rashi()
    }
}

/// Immutable chart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    timestamp: DateTime<Utc>,
    location: GeoLocation,
    houses: HouseSystem,
    planets: BTreeMap<Graha, PlanetInfo>,
    sun_events: Option<SunEvents>,
}

impl Chart {
    /// Start building a chart for an instant and location.
    pub fn builder(timestamp: DateTime<Utc>, location: GeoLocation) -> ChartBuilder {
        ChartBuilder {
            timestamp,
            location,
            houses: None,
            positions: BTreeMap::new(),
            sun_events: None,
        }
    }

    pub(crate) fn from_parts(
        timestamp: DateTime<Utc>,
        location: GeoLocation,
        houses: HouseSystem,
        planets: BTreeMap<Graha, PlanetInfo>,
        sun_events: Option<SunEvents>,
    ) -> Self {
        Self {
            timestamp,
            location,
            houses,
            planets,
            sun_events,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn houses(&self) -> &HouseSystem {
        &self.houses
    }

    pub fn ascendant(&self) -> f64 {
        self.houses.ascendant
    }

    pub fn planets(&self) -> &BTreeMap<Graha, PlanetInfo> {
        &self.planets
    }

    /// Placement of a graha, `None` when the chart has no position for it.
    pub fn planet(&self, graha: Graha) -> Option<&PlanetInfo> {
        self.planets.get(&graha)
    }

    pub fn longitude(&self, graha: Graha) -> Option<f64> {
        self.planet(graha).map(PlanetInfo::longitude)
    }

    pub fn sun_events(&self) -> Option<&SunEvents> {
        self.sun_events.as_ref()
    }
}

/// Collects positions and houses, then derives houses, dignity and
/// combustion for each graha.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    timestamp: DateTime<Utc>,
    location: GeoLocation,
    houses: Option<HouseSystem>,
    positions: BTreeMap<Graha, PlanetPosition>,
    sun_events: Option<SunEvents>,
}

impl ChartBuilder {
    pub fn houses(mut self, houses: HouseSystem) -> Self {
        self.houses = Some(houses);
        self
    }

    /// Add a position. A later position for the same graha replaces it.
    pub fn planet(mut self, position: PlanetPosition) -> Self {
        self.positions.insert(position.graha, position);
        self
    }

    pub fn planets(mut self, positions: impl IntoIterator<Item = PlanetPosition>) -> Self {
        for p in positions {
            self.positions.insert(p.graha, p);
        }
        self
    }

    pub fn sun_events(mut self, events: Option<SunEvents>) -> Self {
        self.sun_events = events;
        self
    }

    /// Finish the chart.
    ///
    /// Ketu is always placed opposite Rahu when Rahu is present, replacing
    /// any supplied Ketu position.
    pub fn build(mut self) -> Result<Chart, BalaError> {
        let houses = self
            .houses
            .ok_or(BalaError::InvalidCusps("house system not set"))?;

        if let Some(rahu) = self.positions.get(&Graha::Rahu).copied() {
            let ketu = PlanetPosition {
                graha: Graha::Ketu,
                longitude: normalize_360(rahu.longitude + 180.0),
                latitude: -rahu.latitude,
                declination: -rahu.declination,
                ..rahu
            };
            self.positions.insert(Graha::Ketu, ketu);
        }

        let sun = self.positions.get(&Graha::Surya).map(|p| p.longitude);
        if sun.is_none() {
            debug!("chart has no Sun position, combustion flags left unset");
        }

        let planets = self
            .positions
            .into_values()
            .map(|mut pos| {
                pos.longitude = normalize_360(pos.longitude);
                let combust = sun.is_some_and(|s| {
                    is_combust(pos.graha, pos.longitude, s, pos.is_retrograde())
                });
                let info = PlanetInfo {
                    position: pos,
                    house: houses.house_of(pos.longitude),
                    dignity: dignity(pos.graha, pos.rashi()),
                    is_combust: combust,
                    subdivision_index: None,
                    subdivision_span: None,
                };
                (pos.graha, info)
            })
            .collect();

        Ok(Chart {
            timestamp: self.timestamp,
            location: self.location,
            houses,
            planets,
            sun_events: self.sun_events,
        })
    }
}
