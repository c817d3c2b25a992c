//! Combustion (Asta/Moudhya) detection for grahas.
//!
//! A graha is combust when it is too close to the Sun, with thresholds
//! varying by planet and retrograde status per BPHS.

use crate::graha::Graha;
use crate::util::arc_distance;

/// BPHS combustion threshold (degrees from Sun) for a graha.
///
/// Returns `None` for Sun, Rahu, and Ketu. Mercury and Venus use tighter
/// thresholds while retrograde.
pub const fn combustion_threshold(graha: Graha, is_retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => Some(if is_retrograde { 12.0 } else { 14.0 }),
        Graha::Guru => Some(11.0),
        Graha::Shukra => Some(if is_retrograde { 8.0 } else { 10.0 }),
        Graha::Shani => Some(15.0),
    }
}

/// Whether a graha is combust.
///
/// A graha at exactly the threshold distance is not combust.
pub fn is_combust(graha: Graha, graha_sid_lon: f64, sun_sid_lon: f64, is_retrograde: bool) -> bool {
    combustion_threshold(graha, is_retrograde)
        .is_some_and(|t| arc_distance(graha_sid_lon, sun_sid_lon) < t)
}
