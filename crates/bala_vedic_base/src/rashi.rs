//! Rashi (zodiac sign) and DMS (degrees-minutes-seconds) computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given a sidereal longitude, we identify which rashi the point falls in
//! and express the position as degrees-minutes-seconds within that sign.
//!
//! Clean-room implementation from universal Vedic convention:
//! 12 rashis of 30 deg each, starting from Mesha (Aries) at 0 deg.

use serde::{Deserialize, Serialize};

use crate::error::BalaError;
use crate::util::{normalize_360, wrap_sign};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Modal quality of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Chara: Mesha, Karka, Tula, Makara.
    Movable,
    /// Sthira: Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Dvisvabhava: Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

/// Elemental quality of a rashi (tattva).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi for a 0-based index. Out-of-range indices are a contract violation.
    pub fn from_index(idx: u8) -> Result<Rashi, BalaError> {
        ALL_RASHIS
            .get(idx as usize)
            .copied()
            .ok_or(BalaError::InvalidRashiIndex(idx))
    }

    /// Rashi `n` signs forward (negative counts backward), wrapping.
    pub fn offset(self, n: i32) -> Rashi {
        ALL_RASHIS[wrap_sign(self.index() as i32 + n) as usize]
    }

    /// Odd signs in 1-based counting (Mesha, Mithuna, ...).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    /// Movable / fixed / dual classification.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    /// Element: fire, earth, air, water repeat from Mesha.
    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Longitude of the start of this rashi.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full rashi position result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(Rashi::from_index(11), Ok(Rashi::Meena));
        assert_eq!(Rashi::from_index(12), Err(BalaError::InvalidRashiIndex(12)));
    }

    #[test]
    fn offset_wraps_both_ways() {
        assert_eq!(Rashi::Meena.offset(1), Rashi::Mesha);
        assert_eq!(Rashi::Mesha.offset(-1), Rashi::Meena);
        assert_eq!(Rashi::Karka.offset(24), Rashi::Karka);
    }

    #[test]
    fn parity() {
        assert!(Rashi::Mesha.is_odd());
        assert!(!Rashi::Vrishabha.is_odd());
        assert!(Rashi::Kumbha.is_odd());
    }

    #[test]
    fn modality_groups() {
        assert_eq!(Rashi::Makara.modality(), Modality::Movable);
        assert_eq!(Rashi::Kumbha.modality(), Modality::Fixed);
        assert_eq!(Rashi::Meena.modality(), Modality::Dual);
    }

    #[test]
    fn element_groups() {
        assert_eq!(Rashi::Dhanu.element(), Element::Fire);
        assert_eq!(Rashi::Makara.element(), Element::Earth);
        assert_eq!(Rashi::Tula.element(), Element::Air);
        assert_eq!(Rashi::Meena.element(), Element::Water);
    }

    #[test]
    fn rashi_from_longitude_boundaries() {
        let info = rashi_from_longitude(30.0);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!(info.degrees_in_rashi.abs() < 1e-12);

        let info = rashi_from_longitude(-0.5);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 29.5).abs() < 1e-12);
    }

    #[test]
    fn dms_round_trip() {
        let dms = deg_to_dms(23.456);
        assert_eq!(dms.degrees, 23);
        assert_eq!(dms.minutes, 27);
        assert!((dms_to_deg(&dms) - 23.456).abs() < 1e-9);
    }
}
