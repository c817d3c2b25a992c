//! Chart construction from an external ephemeris.
//!
//! The positional engine itself lives outside this crate. Anything that
//! can answer [`EphemerisProvider`] queries can be turned into a [`Chart`]
//! with [`chart_from_ephemeris`].

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::chart::{Chart, GeoLocation, HouseSystem, PlanetPosition, SunEvents};
use crate::error::BalaError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::kala::to_local_mean;

/// Source of raw positions, sunrise/sunset and chart angles.
pub trait EphemerisProvider: Send + Sync {
    /// Sidereal position of a graha. `Ok(None)` when the provider has no
    /// data for it.
    fn position_of(
        &self,
        graha: Graha,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<Option<PlanetPosition>, BalaError>;

    /// Sunrise and sunset on a local date. Either may be `None` near the
    /// poles.
    fn sunrise_sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
    ) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), BalaError>;

    /// Sidereal (ascendant, midheaven).
    fn angles(&self, instant: DateTime<Utc>, location: &GeoLocation)
    -> Result<(f64, f64), BalaError>;
}

/// Build a whole-sign chart at `instant`.
///
/// Ketu is derived from Rahu. Sunrise/sunset are attached when the
/// provider can bracket the instant; otherwise the chart carries none and
/// Kala Bala falls back to the house heuristic.
pub fn chart_from_ephemeris<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: DateTime<Utc>,
    location: GeoLocation,
) -> Result<Chart, BalaError> {
    let (asc, mc) = provider.angles(instant, &location)?;
    let houses = HouseSystem::whole_sign(asc).with_midheaven(mc);

    let mut positions = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        if graha == Graha::Ketu {
            continue;
        }
        match provider.position_of(graha, instant, &location)? {
            Some(pos) => positions.push(pos),
            None => debug!(graha = graha.english_name(), "no ephemeris position"),
        }
    }

    let sun_events = sun_events_for(provider, instant, &location)?;

    Chart::builder(instant, location)
        .houses(houses)
        .planets(positions)
        .sun_events(sun_events)
        .build()
}

/// Sunrise, sunset and next sunrise around `instant`.
///
/// The Vedic day starts at sunrise, so an instant before the local
/// sunrise belongs to the previous civil date.
pub fn sun_events_for<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: DateTime<Utc>,
    location: &GeoLocation,
) -> Result<Option<SunEvents>, BalaError> {
    let mut date = to_local_mean(instant, location).date_naive();
    let (mut rise, mut set) = provider.sunrise_sunset(date, location)?;

    if rise.is_some_and(|r| instant < r) {
        let Some(prev) = date.pred_opt() else {
            return Ok(None);
        };
        date = prev;
        (rise, set) = provider.sunrise_sunset(date, location)?;
    }

    let Some(next_date) = date.succ_opt() else {
        return Ok(None);
    };
    let (next_rise, _) = provider.sunrise_sunset(next_date, location)?;

    match (rise, set, next_rise) {
        (Some(sunrise), Some(sunset), Some(next_sunrise)) => {
            let events = SunEvents {
                sunrise,
                sunset,
                next_sunrise,
            };
            if events.brackets(instant) {
                Ok(Some(events))
            } else {
                warn!(%instant, %date, "sunrise/sunset do not bracket instant");
                Ok(None)
            }
        }
        _ => {
            debug!(%date, "sunrise or sunset unavailable");
            Ok(None)
        }
    }
}
