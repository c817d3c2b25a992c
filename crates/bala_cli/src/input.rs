//! Chart input file format.
//!
//! ```json
//! {
//!   "timestamp": "2024-01-15T12:00:00Z",
//!   "location": { "latitude_deg": 28.6139, "longitude_deg": 77.209 },
//!   "ascendant": 71.0,
//!   "planets": [
//!     { "graha": "Sun", "longitude": 270.6, "longitude_speed": 1.017, "declination": -21.1 },
//!     { "graha": "Rahu", "longitude": 351.0, "longitude_speed": -0.05 }
//!   ]
//! }
//! ```
//!
//! `cusps` (12 longitudes) selects explicit houses, otherwise houses are
//! whole signs from the ascendant. Ketu is always derived from Rahu.

use bala_vedic_base::{
    BalaError, Chart, GeoLocation, Graha, HouseSystem, PlanetPosition, SunEvents,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One graha as supplied on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetInput {
    /// Sanskrit or English name.
    pub graha: Graha,
    /// Sidereal longitude, degrees.
    pub longitude: f64,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub longitude_speed: f64,
    #[serde(default)]
    pub latitude_speed: f64,
    #[serde(default)]
    pub distance_speed: f64,
    #[serde(default)]
    pub declination: f64,
}

impl PlanetInput {
    fn at(self, timestamp: DateTime<Utc>) -> PlanetPosition {
        PlanetPosition {
            graha: self.graha,
            longitude: self.longitude,
            latitude: self.latitude,
            distance: self.distance,
            longitude_speed: self.longitude_speed,
            latitude_speed: self.latitude_speed,
            distance_speed: self.distance_speed,
            declination: self.declination,
            timestamp,
        }
    }
}

/// A chart as read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    pub timestamp: DateTime<Utc>,
    pub location: GeoLocation,
    /// Sidereal ascendant, degrees.
    pub ascendant: f64,
    #[serde(default)]
    pub midheaven: Option<f64>,
    #[serde(default)]
    pub cusps: Option<[f64; 12]>,
    pub planets: Vec<PlanetInput>,
    #[serde(default)]
    pub sun_events: Option<SunEvents>,
}

impl ChartInput {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Validate and build the chart.
    pub fn into_chart(self) -> Result<Chart, BalaError> {
        let houses = match self.cusps {
            Some(cusps) => HouseSystem::from_cusps(
                cusps,
                self.ascendant,
                self.midheaven.unwrap_or(self.ascendant + 270.0),
            )?,
            None => {
                let whole = HouseSystem::whole_sign(self.ascendant);
                match self.midheaven {
                    Some(mc) => whole.with_midheaven(mc),
                    None => whole,
                }
            }
        };
        let ts = self.timestamp;
        Chart::builder(ts, self.location)
            .houses(houses)
            .planets(self.planets.into_iter().map(|p| p.at(ts)))
            .sun_events(self.sun_events)
            .build()
    }
}
