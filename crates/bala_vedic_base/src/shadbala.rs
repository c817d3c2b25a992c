//! Shadbala (six-fold planetary strength) computation.
//!
//! Every graha present in the chart gets a result. Rahu and Ketu have no
//! exaltation, dignity, direction, gender, time lordship or natural
//! strength, so those terms are 0 for them; they still score Kendradi by
//! house, Chesta by motion and Drik from received aspects.
//!
//! The six components, all in virupas (60 virupas = 1 rupa):
//! 1. Sthana Bala (positional): uchcha + saptavargaja + ojayugma + drekkana + kendradi
//! 2. Dig Bala (directional)
//! 3. Kala Bala (temporal): natonnata + paksha + tribhaga + vara + masa + varsha + hora + ayana
//! 4. Chesta Bala (motional)
//! 5. Naisargika Bala (natural)
//! 6. Drik Bala (aspectual), signed and clamped to [-60, 60]
//!
//! Clean-room implementation from BPHS.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::chart::Chart;
use crate::dignity::{
    BeneficNature, Dignity, DignityMode, GrahaGender, debilitation_degree, dignity_at_longitude,
    graha_gender, natural_benefic_malefic,
};
use crate::drishti::{DrishtiMode, net_drishti_on_point};
use crate::graha::Graha;
use crate::kala::{DayPhase, DayPhaseSource, day_phase, masa_lord, varsha_lord};
use crate::rashi::rashi_from_longitude;
use crate::util::arc_distance;
use crate::varga::{SAPTAVARGA, Varga, saptavarga_charts};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Natural strength in virupas, in SAPTA_GRAHAS order.
pub const NAISARGIKA_BALA: [f64; 7] = [60.0, 51.43, 17.14, 25.71, 34.28, 42.85, 8.57];

/// House of maximum directional strength.
/// Sun=10, Moon=4, Mars=10, Mercury=1, Jupiter=1, Venus=4, Saturn=7.
pub const DIG_BALA_BHAVA: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

/// Mean daily motion (deg/day) for chesta bala normalization.
pub const MEAN_SPEED: [f64; 7] = [0.9856, 13.1764, 0.524, 0.9856, 0.0831, 0.9856, 0.0335];

/// Mean daily motion of the lunar nodes (deg/day, retrograde).
pub const NODE_MEAN_SPEED: f64 = 0.0529;

/// Minimum total (virupas) for a graha to count as strong, per BPHS.
pub const REQUIRED_STRENGTH: [f64; 7] = [390.0, 360.0, 300.0, 420.0, 390.0, 330.0, 300.0];

/// Saptavargaja points per dignity, strongest first.
pub const SAPTAVARGAJA_POINTS: [f64; 9] = [
    60.0,  // Exalted
    45.0,  // MoolaTrikona
    30.0,  // OwnSign
    22.5,  // GreatFriend
    15.0,  // FriendSign
    7.5,   // NeutralSign
    3.75,  // EnemySign
    1.875, // GreatEnemy
    0.0,   // Debilitated
];

pub const VARA_BALA: f64 = 45.0;
pub const MASA_BALA: f64 = 30.0;
pub const VARSHA_BALA: f64 = 15.0;
pub const HORA_BALA: f64 = 60.0;

/// Tunables for the chart-level calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadbalaConfig {
    /// Aspect angles counted by Drik Bala.
    pub drishti_mode: DrishtiMode,
    /// Dignity lookup used by Saptavargaja Bala.
    pub dignity_mode: DignityMode,
    /// Obliquity of the ecliptic for Ayana Bala, degrees.
    pub obliquity_deg: f64,
    /// Below this absolute speed (deg/day) a graha is stationary.
    pub stationary_speed_deg: f64,
    /// Drik Bala is clamped to +/- this value.
    pub drik_clamp: f64,
}

impl Default for ShadbalaConfig {
    fn default() -> Self {
        Self {
            drishti_mode: DrishtiMode::Classical,
            dignity_mode: DignityMode::SignOnly,
            obliquity_deg: 23.45,
            stationary_speed_deg: 0.01,
            drik_clamp: 60.0,
        }
    }
}

fn sapta_index(graha: Graha) -> Option<usize> {
    graha.is_sapta().then_some(graha.index() as usize)
}

fn mean_speed(graha: Graha) -> f64 {
    sapta_index(graha).map_or(NODE_MEAN_SPEED, |i| MEAN_SPEED[i])
}

// ---------------------------------------------------------------------------
// 1. Sthana Bala Sub-Components
// ---------------------------------------------------------------------------

/// Uchcha Bala: 60 * elongation from deep debilitation / 180.
pub fn uchcha_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    match debilitation_degree(graha) {
        Some(deb) => 60.0 * arc_distance(sidereal_lon, deb) / 180.0,
        None => 0.0,
    }
}

/// Points for one varga placement.
pub const fn saptavargaja_points(dignity: Dignity) -> f64 {
    SAPTAVARGAJA_POINTS[dignity as usize]
}

/// Saptavargaja Bala from the dignities in D1, D2, D3, D7, D9, D12, D30.
pub fn saptavargaja_bala(dignities: &[Dignity; 7]) -> f64 {
    dignities.iter().map(|&d| saptavargaja_points(d)).sum()
}

/// Ojayugmarasyamsa Bala: 15 each for the D1 and D9 signs matching the
/// graha's gender (male: odd, female: even). Mercury and Saturn score 0.
pub fn ojayugma_bala(graha: Graha, d1_lon: f64, d9_lon: f64) -> f64 {
    let wants_odd = match graha_gender(graha) {
        GrahaGender::Male => true,
        GrahaGender::Female => false,
        GrahaGender::Neuter => return 0.0,
    };
    [d1_lon, d9_lon]
        .iter()
        .filter(|&&lon| rashi_from_longitude(lon).rashi.is_odd() == wants_odd)
        .count() as f64
        * 15.0
}

/// Drekkana Bala: 15 when the decanate matches the gender class
/// (male 1st, neuter 2nd, female 3rd).
pub fn drekkana_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let deg = rashi_from_longitude(sidereal_lon).degrees_in_rashi;
    let decanate = ((deg / 10.0).floor() as u8).min(2);
    match (graha_gender(graha), decanate) {
        (GrahaGender::Male, 0) | (GrahaGender::Neuter, 1) | (GrahaGender::Female, 2) => 15.0,
        _ => 0.0,
    }
}

/// Kendradi Bala: kendra(1,4,7,10)=60, panaphara(2,5,8,11)=30, apoklima(3,6,9,12)=15.
pub fn kendradi_bala(bhava_number: u8) -> f64 {
    match bhava_number {
        1 | 4 | 7 | 10 => 60.0,
        2 | 5 | 8 | 11 => 30.0,
        3 | 6 | 9 | 12 => 15.0,
        _ => 0.0,
    }
}

/// Sthana Bala breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SthanaBalaBreakdown {
    pub uchcha: f64,
    pub saptavargaja: f64,
    pub ojayugma: f64,
    pub drekkana: f64,
    pub kendradi: f64,
    pub total: f64,
    /// Dignity in each of D1, D2, D3, D7, D9, D12, D30. `None` for the nodes.
    pub saptavarga_dignities: Option<[Dignity; 7]>,
}

// ---------------------------------------------------------------------------
// 2. Dig Bala
// ---------------------------------------------------------------------------

/// Dig Bala: 60 * (1 - houses from the strongest house / 6).
pub fn dig_bala(graha: Graha, bhava_number: u8) -> f64 {
    let Some(i) = sapta_index(graha) else {
        return 0.0;
    };
    if !(1..=12).contains(&bhava_number) {
        return 0.0;
    }
    let diff = (bhava_number as i32 - DIG_BALA_BHAVA[i] as i32).rem_euclid(12);
    let dist = diff.min(12 - diff) as f64;
    60.0 * (1.0 - dist / 6.0)
}

// ---------------------------------------------------------------------------
// 3. Kala Bala Sub-Components
// ---------------------------------------------------------------------------

/// Natonnata Bala: Mercury always 60; Sun, Jupiter, Saturn 60 by day;
/// Moon, Mars, Venus 60 by night.
pub fn natonnata_bala(graha: Graha, is_day: bool) -> f64 {
    match graha {
        Graha::Buddh => 60.0,
        Graha::Surya | Graha::Guru | Graha::Shani if is_day => 60.0,
        Graha::Chandra | Graha::Mangal | Graha::Shukra if !is_day => 60.0,
        _ => 0.0,
    }
}

/// Paksha Bala from the Sun-Moon elongation.
///
/// The phase angle is the elongation folded into [0, 180]: 0 at new moon,
/// 180 at full moon. Benefics (including the Moon) score phase/3,
/// malefics 60 - phase/3.
pub fn paksha_bala(graha: Graha, sun_lon: f64, moon_lon: f64) -> f64 {
    if !graha.is_sapta() {
        return 0.0;
    }
    let phase = arc_distance(moon_lon, sun_lon);
    let waxing = phase / 3.0;
    match natural_benefic_malefic(graha) {
        BeneficNature::Benefic => waxing,
        BeneficNature::Malefic => 60.0 - waxing,
    }
}

/// Tribhaga Bala: 60 for the lord of the current third of day or night;
/// Mercury always 60.
pub fn tribhaga_bala(graha: Graha, phase: &DayPhase) -> f64 {
    if graha == Graha::Buddh || graha == phase.tribhaga_lord() {
        60.0
    } else {
        0.0
    }
}

/// Points awarded to `graha` when it is `lord`.
fn lord_bala(graha: Graha, lord: Graha, points: f64) -> f64 {
    if graha.is_sapta() && graha == lord {
        points
    } else {
        0.0
    }
}

/// Vara Bala: 45 for the weekday lord.
pub fn vara_bala(graha: Graha, weekday_lord: Graha) -> f64 {
    lord_bala(graha, weekday_lord, VARA_BALA)
}

/// Masa Bala: 30 for the solar month lord.
pub fn masa_bala(graha: Graha, month_lord: Graha) -> f64 {
    lord_bala(graha, month_lord, MASA_BALA)
}

/// Varsha Bala: 15 for the year lord.
pub fn varsha_bala(graha: Graha, year_lord: Graha) -> f64 {
    lord_bala(graha, year_lord, VARSHA_BALA)
}

/// Hora Bala: 60 for the lord of the planetary hour.
pub fn hora_bala(graha: Graha, hora_lord: Graha) -> f64 {
    lord_bala(graha, hora_lord, HORA_BALA)
}

/// Ayana Bala from declination, clamped to the obliquity.
///
/// Sun, Mars, Jupiter, Venus gain with north declination; Moon and Saturn
/// with south; Mercury uses the absolute declination.
pub fn ayana_bala(graha: Graha, declination_deg: f64, obliquity_deg: f64) -> f64 {
    if !graha.is_sapta() || obliquity_deg <= 0.0 {
        return 0.0;
    }
    let eps = obliquity_deg;
    let d = declination_deg.clamp(-eps, eps);
    let numerator = match graha {
        Graha::Surya | Graha::Mangal | Graha::Guru | Graha::Shukra => eps + d,
        Graha::Chandra | Graha::Shani => eps - d,
        _ => eps + d.abs(),
    };
    60.0 * numerator / (2.0 * eps)
}

/// Everything Kala Bala needs beyond the graha itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalaBalaInputs {
    pub phase: DayPhase,
    /// Sun longitude, if the chart has one.
    pub sun_lon: Option<f64>,
    /// Moon longitude, if the chart has one.
    pub moon_lon: Option<f64>,
    pub obliquity_deg: f64,
}

impl KalaBalaInputs {
    pub fn from_chart(chart: &Chart, obliquity_deg: f64) -> Self {
        Self {
            phase: day_phase(chart),
            sun_lon: chart.longitude(Graha::Surya),
            moon_lon: chart.longitude(Graha::Chandra),
            obliquity_deg,
        }
    }
}

/// Kala Bala breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KalaBalaBreakdown {
    pub natonnata: f64,
    pub paksha: f64,
    pub tribhaga: f64,
    pub vara: f64,
    pub masa: f64,
    pub varsha: f64,
    pub hora: f64,
    pub ayana: f64,
    pub total: f64,
    pub day_phase_source: DayPhaseSource,
}

/// Kala Bala for a single graha.
pub fn kala_bala(graha: Graha, declination_deg: f64, inputs: &KalaBalaInputs) -> KalaBalaBreakdown {
    let phase = &inputs.phase;
    let paksha = match (inputs.sun_lon, inputs.moon_lon) {
        (Some(s), Some(m)) => paksha_bala(graha, s, m),
        _ => {
            debug!(graha = graha.english_name(), "no Sun/Moon pair, paksha bala is 0");
            0.0
        }
    };
    let masa = match inputs.sun_lon {
        Some(s) => masa_bala(graha, masa_lord(s)),
        None => {
            debug!(graha = graha.english_name(), "no Sun, masa bala is 0");
            0.0
        }
    };

    let natonnata = natonnata_bala(graha, phase.is_day);
    let tribhaga = tribhaga_bala(graha, phase);
    let vara = vara_bala(graha, phase.day_lord());
    let varsha = varsha_bala(graha, varsha_lord(phase.vedic_date.year()));
    let hora = hora_bala(graha, phase.hora_lord());
    let ayana = ayana_bala(graha, declination_deg, inputs.obliquity_deg);

    KalaBalaBreakdown {
        natonnata,
        paksha,
        tribhaga,
        vara,
        masa,
        varsha,
        hora,
        ayana,
        total: natonnata + paksha + tribhaga + vara + masa + varsha + hora + ayana,
        day_phase_source: phase.source,
    }
}

// ---------------------------------------------------------------------------
// 4. Chesta Bala
// ---------------------------------------------------------------------------

/// Chesta Bala: 0 for the luminaries, 60 while retrograde, 0 while
/// stationary, otherwise speed relative to mean motion, capped at 60.
///
/// The nodes follow the same rule against [`NODE_MEAN_SPEED`].
pub fn chesta_bala(graha: Graha, speed_deg_per_day: f64, stationary_threshold: f64) -> f64 {
    if matches!(graha, Graha::Surya | Graha::Chandra) {
        return 0.0;
    }
    if speed_deg_per_day < 0.0 {
        return 60.0;
    }
    if speed_deg_per_day.abs() < stationary_threshold {
        return 0.0;
    }
    60.0 * (speed_deg_per_day / mean_speed(graha)).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// 5. Naisargika Bala
// ---------------------------------------------------------------------------

pub fn naisargika_bala(graha: Graha) -> f64 {
    sapta_index(graha).map_or(0.0, |i| NAISARGIKA_BALA[i])
}

// ---------------------------------------------------------------------------
// 6. Drik Bala
// ---------------------------------------------------------------------------

/// Drik Bala: benefic aspects minus malefic aspects from the other
/// classical grahas, each divided by 4, clamped to +/- `clamp`.
pub fn drik_bala(graha: Graha, chart: &Chart, mode: DrishtiMode, clamp: f64) -> f64 {
    let Some(lon) = chart.longitude(graha) else {
        return 0.0;
    };
    net_drishti_on_point(chart, lon, Some(graha), mode).clamp(-clamp, clamp)
}

// ---------------------------------------------------------------------------
// 7. Complete Shadbala
// ---------------------------------------------------------------------------

/// Strength category by total virupas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthCategory {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthCategory {
    /// >=380 very strong, >=330 strong, >=280 moderate, >=230 weak.
    pub fn from_total(total: f64) -> Self {
        if total >= 380.0 {
            Self::VeryStrong
        } else if total >= 330.0 {
            Self::Strong
        } else if total >= 280.0 {
            Self::Moderate
        } else if total >= 230.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

/// Full Shadbala for one graha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadbalaResult {
    pub graha: Graha,
    pub sthana: SthanaBalaBreakdown,
    pub dig: f64,
    pub kala: KalaBalaBreakdown,
    pub chesta: f64,
    pub naisargika: f64,
    pub drik: f64,
    /// Sum of the six components, virupas.
    pub total: f64,
    pub total_rupas: f64,
    /// Minimum total for the graha to count as strong. `None` for the nodes.
    pub required_strength: Option<f64>,
    pub is_strong: bool,
    pub category: StrengthCategory,
}

/// Shadbala for every graha in the chart with default settings.
pub fn calculate_shadbala(chart: &Chart) -> BTreeMap<Graha, ShadbalaResult> {
    calculate_shadbala_with(chart, &ShadbalaConfig::default())
}

/// Shadbala for every graha in the chart.
///
/// Grahas without a position are omitted. The seven Saptavargaja charts
/// and the day phase are computed once per call.
pub fn calculate_shadbala_with(
    chart: &Chart,
    config: &ShadbalaConfig,
) -> BTreeMap<Graha, ShadbalaResult> {
    let _span = debug_span!("shadbala", timestamp = %chart.timestamp()).entered();

    let vargas = saptavarga_charts(chart);
    let inputs = KalaBalaInputs::from_chart(chart, config.obliquity_deg);

    let results: BTreeMap<_, _> = chart
        .planets()
        .keys()
        .filter_map(|&g| shadbala_for_graha(g, chart, &vargas, &inputs, config).map(|r| (g, r)))
        .collect();

    debug!(
        grahas = results.len(),
        day_phase = ?inputs.phase.source,
        "shadbala computed"
    );
    results
}

fn varga_dignities(graha: Graha, vargas: &[Chart; 7], mode: DignityMode) -> Option<[Dignity; 7]> {
    let mut out = [Dignity::NeutralSign; 7];
    for (slot, chart) in out.iter_mut().zip(vargas) {
        let info = chart.planet(graha)?;
        *slot = match mode {
            DignityMode::SignOnly => info.dignity,
            DignityMode::DegreeAware => dignity_at_longitude(graha, info.longitude()),
        };
    }
    Some(out)
}

fn shadbala_for_graha(
    graha: Graha,
    chart: &Chart,
    vargas: &[Chart; 7],
    inputs: &KalaBalaInputs,
    config: &ShadbalaConfig,
) -> Option<ShadbalaResult> {
    let info = chart.planet(graha)?;
    let lon = info.longitude();

    let d9_pos = SAPTAVARGA.iter().position(|&v| v == Varga::D9)?;
    let d9_lon = vargas[d9_pos].longitude(graha)?;
    let dignities = if graha.is_sapta() {
        Some(varga_dignities(graha, vargas, config.dignity_mode)?)
    } else {
        None
    };

    let uchcha = uchcha_bala(graha, lon);
    let saptavargaja = dignities.as_ref().map_or(0.0, saptavargaja_bala);
    let ojayugma = ojayugma_bala(graha, lon, d9_lon);
    let drekkana = drekkana_bala(graha, lon);
    let kendradi = kendradi_bala(info.house);
    let sthana = SthanaBalaBreakdown {
        uchcha,
        saptavargaja,
        ojayugma,
        drekkana,
        kendradi,
        total: uchcha + saptavargaja + ojayugma + drekkana + kendradi,
        saptavarga_dignities: dignities,
    };

    let dig = dig_bala(graha, info.house);
    let kala = kala_bala(graha, info.position.declination, inputs);
    let chesta = chesta_bala(
        graha,
        info.position.longitude_speed,
        config.stationary_speed_deg,
    );
    let naisargika = naisargika_bala(graha);
    let drik = drik_bala(graha, chart, config.drishti_mode, config.drik_clamp);

    let total = sthana.total + dig + kala.total + chesta + naisargika + drik;
    let required = sapta_index(graha).map(|i| REQUIRED_STRENGTH[i]);
    Some(ShadbalaResult {
        graha,
        sthana,
        dig,
        kala,
        chesta,
        naisargika,
        drik,
        total,
        total_rupas: total / 60.0,
        required_strength: required,
        is_strong: required.is_some_and(|r| total >= r),
        category: StrengthCategory::from_total(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dignity::ALL_DIGNITIES;
    use chrono::NaiveDate;

    const EPS: f64 = 1e-9;

    fn phase(is_day: bool, fraction: f64) -> DayPhase {
        DayPhase {
            is_day,
            fraction,
            // Thursday
            vedic_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            source: DayPhaseSource::SunEvents,
        }
    }

    #[test]
    fn uchcha_sun_at_exaltation() {
        assert!((uchcha_bala(Graha::Surya, 10.0) - 60.0).abs() < EPS);
    }

    #[test]
    fn uchcha_sun_at_debilitation() {
        assert!(uchcha_bala(Graha::Surya, 190.0).abs() < EPS);
    }

    #[test]
    fn uchcha_halfway() {
        assert!((uchcha_bala(Graha::Surya, 100.0) - 30.0).abs() < EPS);
        assert!((uchcha_bala(Graha::Surya, 280.0) - 30.0).abs() < EPS);
    }

    #[test]
    fn uchcha_venus_wraps() {
        // Venus exalted at 357
        assert!((uchcha_bala(Graha::Shukra, 357.0) - 60.0).abs() < EPS);
        assert!((uchcha_bala(Graha::Shukra, 3.0) - 58.0).abs() < EPS);
    }

    #[test]
    fn uchcha_nodes_zero() {
        assert_eq!(uchcha_bala(Graha::Rahu, 10.0), 0.0);
    }

    #[test]
    fn saptavargaja_points_table() {
        assert_eq!(saptavargaja_points(Dignity::Exalted), 60.0);
        assert_eq!(saptavargaja_points(Dignity::MoolaTrikona), 45.0);
        assert_eq!(saptavargaja_points(Dignity::GreatEnemy), 1.875);
        assert_eq!(saptavargaja_points(Dignity::Debilitated), 0.0);
        for pair in ALL_DIGNITIES.windows(2) {
            assert!(saptavargaja_points(pair[0]) > saptavargaja_points(pair[1]));
        }
    }

    #[test]
    fn saptavargaja_all_debilitated_is_zero() {
        assert_eq!(saptavargaja_bala(&[Dignity::Debilitated; 7]), 0.0);
        assert_eq!(saptavargaja_bala(&[Dignity::Exalted; 7]), 420.0);
    }

    #[test]
    fn ojayugma_by_gender() {
        // Sun in Mesha (odd), navamsha in Simha (odd)
        assert_eq!(ojayugma_bala(Graha::Surya, 5.0, 125.0), 30.0);
        // Moon in Vrishabha (even), navamsha Mesha (odd)
        assert_eq!(ojayugma_bala(Graha::Chandra, 35.0, 5.0), 15.0);
        assert_eq!(ojayugma_bala(Graha::Buddh, 5.0, 125.0), 0.0);
        assert_eq!(ojayugma_bala(Graha::Shani, 35.0, 65.0), 0.0);
    }

    #[test]
    fn drekkana_by_gender() {
        assert_eq!(drekkana_bala(Graha::Mangal, 5.0), 15.0);
        assert_eq!(drekkana_bala(Graha::Mangal, 15.0), 0.0);
        assert_eq!(drekkana_bala(Graha::Shani, 15.0), 15.0);
        assert_eq!(drekkana_bala(Graha::Shukra, 25.0), 15.0);
        assert_eq!(drekkana_bala(Graha::Shukra, 5.0), 0.0);
    }

    #[test]
    fn kendradi_classes() {
        assert_eq!(kendradi_bala(1), 60.0);
        assert_eq!(kendradi_bala(11), 30.0);
        assert_eq!(kendradi_bala(12), 15.0);
        assert_eq!(kendradi_bala(0), 0.0);
    }

    #[test]
    fn dig_bala_peaks_and_troughs() {
        assert!((dig_bala(Graha::Surya, 10) - 60.0).abs() < EPS);
        assert!(dig_bala(Graha::Surya, 4).abs() < EPS);
        assert!((dig_bala(Graha::Surya, 1) - 30.0).abs() < EPS);
        // Saturn strongest in 7, wraps through 12
        assert!((dig_bala(Graha::Shani, 12) - 10.0).abs() < EPS);
        assert!((dig_bala(Graha::Buddh, 12) - 50.0).abs() < EPS);
        assert_eq!(dig_bala(Graha::Ketu, 1), 0.0);
    }

    #[test]
    fn natonnata_day_night() {
        assert_eq!(natonnata_bala(Graha::Buddh, false), 60.0);
        assert_eq!(natonnata_bala(Graha::Surya, true), 60.0);
        assert_eq!(natonnata_bala(Graha::Surya, false), 0.0);
        assert_eq!(natonnata_bala(Graha::Chandra, false), 60.0);
        assert_eq!(natonnata_bala(Graha::Shukra, true), 0.0);
    }

    #[test]
    fn paksha_full_and_new_moon() {
        // Full moon: benefics 60, malefics 0
        assert!((paksha_bala(Graha::Guru, 0.0, 180.0) - 60.0).abs() < EPS);
        assert!(paksha_bala(Graha::Shani, 0.0, 180.0).abs() < EPS);
        assert!((paksha_bala(Graha::Chandra, 0.0, 180.0) - 60.0).abs() < EPS);
        // New moon: reversed
        assert!(paksha_bala(Graha::Chandra, 100.0, 100.0).abs() < EPS);
        assert!((paksha_bala(Graha::Mangal, 100.0, 100.0) - 60.0).abs() < EPS);
        // Waning side folds back
        assert!((paksha_bala(Graha::Shukra, 0.0, 270.0) - 30.0).abs() < EPS);
    }

    #[test]
    fn tribhaga_lords() {
        let p = phase(true, 0.1);
        assert_eq!(tribhaga_bala(Graha::Guru, &p), 60.0);
        assert_eq!(tribhaga_bala(Graha::Surya, &p), 0.0);
        assert_eq!(tribhaga_bala(Graha::Buddh, &p), 60.0);
        let n = phase(false, 0.9);
        assert_eq!(tribhaga_bala(Graha::Mangal, &n), 60.0);
    }

    #[test]
    fn lord_balas() {
        assert_eq!(vara_bala(Graha::Guru, Graha::Guru), 45.0);
        assert_eq!(masa_bala(Graha::Surya, Graha::Surya), 30.0);
        assert_eq!(varsha_bala(Graha::Shani, Graha::Shani), 15.0);
        assert_eq!(hora_bala(Graha::Shukra, Graha::Shukra), 60.0);
        assert_eq!(hora_bala(Graha::Shukra, Graha::Surya), 0.0);
    }

    #[test]
    fn ayana_groups() {
        let e = 23.45;
        assert!((ayana_bala(Graha::Surya, e, e) - 60.0).abs() < EPS);
        assert!(ayana_bala(Graha::Surya, -e, e).abs() < EPS);
        assert!((ayana_bala(Graha::Surya, 0.0, e) - 30.0).abs() < EPS);
        assert!((ayana_bala(Graha::Shani, -e, e) - 60.0).abs() < EPS);
        assert!((ayana_bala(Graha::Chandra, e, e)).abs() < EPS);
        // Mercury ignores direction
        assert!((ayana_bala(Graha::Buddh, -e, e) - 60.0).abs() < EPS);
        assert!((ayana_bala(Graha::Buddh, 0.0, e) - 30.0).abs() < EPS);
        // Clamped beyond obliquity
        assert!((ayana_bala(Graha::Guru, 28.0, e) - 60.0).abs() < EPS);
    }

    #[test]
    fn chesta_rules() {
        assert_eq!(chesta_bala(Graha::Surya, 1.0, 0.01), 0.0);
        assert_eq!(chesta_bala(Graha::Chandra, -1.0, 0.01), 0.0);
        assert_eq!(chesta_bala(Graha::Guru, -0.05, 0.01), 60.0);
        assert_eq!(chesta_bala(Graha::Guru, -5.0, 0.01), 60.0);
        assert_eq!(chesta_bala(Graha::Shani, 0.005, 0.01), 0.0);
        assert!((chesta_bala(Graha::Mangal, 0.262, 0.01) - 30.0).abs() < EPS);
        assert_eq!(chesta_bala(Graha::Mangal, 0.9, 0.01), 60.0);
    }

    #[test]
    fn chesta_nodes() {
        assert_eq!(chesta_bala(Graha::Rahu, -0.053, 0.01), 60.0);
        assert_eq!(chesta_bala(Graha::Ketu, -0.053, 0.01), 60.0);
        assert_eq!(chesta_bala(Graha::Rahu, 0.002, 0.01), 0.0);
        let half = NODE_MEAN_SPEED / 2.0;
        assert!((chesta_bala(Graha::Ketu, half, 0.01) - 30.0).abs() < EPS);
    }

    #[test]
    fn node_time_terms_are_zero() {
        let inputs = KalaBalaInputs {
            phase: phase(true, 0.1),
            sun_lon: Some(0.0),
            moon_lon: Some(180.0),
            obliquity_deg: 23.45,
        };
        for node in [Graha::Rahu, Graha::Ketu] {
            let k = kala_bala(node, 20.0, &inputs);
            assert_eq!(k.total, 0.0);
            assert_eq!(dig_bala(node, 10), 0.0);
            assert_eq!(drekkana_bala(node, 5.0), 0.0);
            assert_eq!(ojayugma_bala(node, 5.0, 125.0), 0.0);
        }
    }

    #[test]
    fn naisargika_values() {
        assert_eq!(naisargika_bala(Graha::Surya), 60.0);
        assert_eq!(naisargika_bala(Graha::Guru), 34.28);
        assert_eq!(naisargika_bala(Graha::Shani), 8.57);
        assert_eq!(naisargika_bala(Graha::Rahu), 0.0);
    }

    #[test]
    fn categories() {
        assert_eq!(StrengthCategory::from_total(380.0), StrengthCategory::VeryStrong);
        assert_eq!(StrengthCategory::from_total(379.9), StrengthCategory::Strong);
        assert_eq!(StrengthCategory::from_total(280.0), StrengthCategory::Moderate);
        assert_eq!(StrengthCategory::from_total(230.0), StrengthCategory::Weak);
        assert_eq!(StrengthCategory::from_total(-10.0), StrengthCategory::VeryWeak);
    }

    #[test]
    fn kala_without_luminaries() {
        let inputs = KalaBalaInputs {
            phase: phase(true, 0.5),
            sun_lon: None,
            moon_lon: None,
            obliquity_deg: 23.45,
        };
        let k = kala_bala(Graha::Guru, 0.0, &inputs);
        assert_eq!(k.paksha, 0.0);
        assert_eq!(k.masa, 0.0);
        // Thursday, day: natonnata 60 + vara 45 + ayana 30
        assert_eq!(k.natonnata, 60.0);
        assert_eq!(k.vara, 45.0);
        assert!((k.total - (k.natonnata + k.tribhaga + k.vara + k.varsha + k.hora + k.ayana)).abs() < EPS);
    }
}
