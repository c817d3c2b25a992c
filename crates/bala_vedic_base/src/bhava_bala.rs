//! Bhava (house) strength.
//!
//! Per house: Shadbala total of the lord of the cusp's sign, plus
//! kendradi strength of the house, plus net benefic-minus-malefic
//! drishti on the cusp (each aspect divided by 4, unclamped).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::Chart;
use crate::drishti::{DrishtiMode, net_drishti_on_point};
use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::shadbala::{ShadbalaResult, kendradi_bala};

/// House strength category by total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BhavaCategory {
    AtiKrishna,
    Krishna,
    Madhyama,
    Shadbalardha,
    Shadbalapurna,
    AtiShadbalapurna,
}

impl BhavaCategory {
    pub fn from_total(total: f64) -> Self {
        if total >= 150.0 {
            Self::AtiShadbalapurna
        } else if total >= 120.0 {
            Self::Shadbalapurna
        } else if total >= 90.0 {
            Self::Shadbalardha
        } else if total >= 60.0 {
            Self::Madhyama
        } else if total >= 30.0 {
            Self::Krishna
        } else {
            Self::AtiKrishna
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::AtiKrishna => "Ati Krishna",
            Self::Krishna => "Krishna",
            Self::Madhyama => "Madhyama",
            Self::Shadbalardha => "Shadbalardha",
            Self::Shadbalapurna => "Shadbalapurna",
            Self::AtiShadbalapurna => "Ati Shadbalapurna",
        }
    }
}

/// Strength of one house with its components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseStrength {
    /// 1-12.
    pub house: u8,
    pub cusp: f64,
    /// Sign of the cusp.
    pub rashi: Rashi,
    pub lord: Graha,
    /// Shadbala total of the lord; 0 when the lord has no result.
    pub lord_strength: f64,
    pub kendradi: f64,
    pub drishti: f64,
    pub total: f64,
    pub category: BhavaCategory,
}

/// Strength of houses 1-12 with classical aspects.
pub fn calculate_house_strength(
    chart: &Chart,
    shadbala: &BTreeMap<Graha, ShadbalaResult>,
) -> BTreeMap<u8, HouseStrength> {
    calculate_house_strength_with_mode(chart, shadbala, DrishtiMode::Classical)
}

/// Strength of houses 1-12.
pub fn calculate_house_strength_with_mode(
    chart: &Chart,
    shadbala: &BTreeMap<Graha, ShadbalaResult>,
    mode: DrishtiMode,
) -> BTreeMap<u8, HouseStrength> {
    chart
        .houses()
        .cusps()
        .iter()
        .zip(1u8..)
        .map(|(&cusp, house)| (house, house_strength(chart, shadbala, house, cusp, mode)))
        .collect()
}

fn house_strength(
    chart: &Chart,
    shadbala: &BTreeMap<Graha, ShadbalaResult>,
    house: u8,
    cusp: f64,
    mode: DrishtiMode,
) -> HouseStrength {
    let rashi = rashi_from_longitude(cusp).rashi;
    let lord = rashi_lord(rashi);
    let lord_strength = match shadbala.get(&lord) {
        Some(r) => r.total,
        None => {
            debug!(house, lord = lord.english_name(), "no shadbala for house lord");
            0.0
        }
    };
    let kendradi = kendradi_bala(house);
    let drishti = net_drishti_on_point(chart, cusp, None, mode);
    let total = lord_strength + kendradi + drishti;

    HouseStrength {
        house,
        cusp,
        rashi,
        lord,
        lord_strength,
        kendradi,
        drishti,
        total,
        category: BhavaCategory::from_total(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{GeoLocation, HouseSystem, PlanetPosition};
    use chrono::{TimeZone, Utc};

    const EPS: f64 = 1e-9;

    fn chart_with(planets: &[(Graha, f64)]) -> Chart {
        let ts = Utc.with_ymd_and_hms(2024, 3, 14, 6, 0, 0).unwrap();
        Chart::builder(ts, GeoLocation::new(28.6, 77.2, 0.0))
            .houses(HouseSystem::whole_sign(15.0))
            .planets(
                planets
                    .iter()
                    .map(|&(g, lon)| PlanetPosition::at_longitude(g, lon, ts)),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn category_thresholds() {
        assert_eq!(BhavaCategory::from_total(150.0), BhavaCategory::AtiShadbalapurna);
        assert_eq!(BhavaCategory::from_total(149.9), BhavaCategory::Shadbalapurna);
        assert_eq!(BhavaCategory::from_total(90.0), BhavaCategory::Shadbalardha);
        assert_eq!(BhavaCategory::from_total(60.0), BhavaCategory::Madhyama);
        assert_eq!(BhavaCategory::from_total(30.0), BhavaCategory::Krishna);
        assert_eq!(BhavaCategory::from_total(-5.0), BhavaCategory::AtiKrishna);
    }

    #[test]
    fn twelve_houses_without_shadbala() {
        let chart = chart_with(&[]);
        let houses = calculate_house_strength(&chart, &BTreeMap::new());
        assert_eq!(houses.len(), 12);
        for (h, s) in &houses {
            assert_eq!(*h, s.house);
            assert_eq!(s.lord_strength, 0.0);
            assert_eq!(s.drishti, 0.0);
            assert!((s.total - kendradi_bala(*h)).abs() < EPS);
        }
        // Whole-sign from Mesha: house 1 ruled by Mars
        assert_eq!(houses[&1].rashi, Rashi::Mesha);
        assert_eq!(houses[&1].lord, Graha::Mangal);
        assert_eq!(houses[&10].lord, Graha::Shani);
    }

    #[test]
    fn jupiter_aspect_lifts_cusp() {
        // Jupiter at 180 aspects the 1st cusp (0) at exactly 180
        let chart = chart_with(&[(Graha::Guru, 180.0)]);
        let houses = calculate_house_strength(&chart, &BTreeMap::new());
        assert!((houses[&1].drishti - 15.0).abs() < EPS);
        assert!((houses[&1].total - 75.0).abs() < EPS);
    }

    #[test]
    fn saturn_aspect_lowers_cusp() {
        let chart = chart_with(&[(Graha::Shani, 180.0)]);
        let houses = calculate_house_strength(&chart, &BTreeMap::new());
        assert!((houses[&1].drishti + 15.0).abs() < EPS);
    }
}
