//! Varga (divisional chart) calculations.
//!
//! Transforms a sidereal longitude through a divisional mapping to produce
//! a new longitude in the varga chart. Most vargas divide the 30-degree
//! rashi into N equal parts and map each part to a target rashi. D30 uses
//! unequal degree segments and D249 uses Vimshottari-weighted slots.
//!
//! Each varga's mapping is a [`VargaRule`] value looked up from
//! [`Varga::rule`], so the whole family of rules is data and the
//! transformation code is shared.
//!
//! Clean-room implementation from BPHS Shodashavarga definitions.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::chart::{Chart, HouseSystem, PlanetInfo};
use crate::dignity::dignity;
use crate::error::BalaError;
use crate::graha::Graha;
use crate::rashi::{ALL_RASHIS, Element, Modality, Rashi, RashiInfo, rashi_from_longitude};
use crate::util::normalize_360;

// ---------------------------------------------------------------------------
// Varga enum
// ---------------------------------------------------------------------------

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    D10,
    D11,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
    D150,
    D249,
}

/// All supported vargas in ascending division order.
pub const ALL_VARGAS: [Varga; 22] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D4,
    Varga::D5,
    Varga::D6,
    Varga::D7,
    Varga::D8,
    Varga::D9,
    Varga::D10,
    Varga::D11,
    Varga::D12,
    Varga::D16,
    Varga::D20,
    Varga::D24,
    Varga::D27,
    Varga::D30,
    Varga::D40,
    Varga::D45,
    Varga::D60,
    Varga::D150,
    Varga::D249,
];

/// The seven vargas scored by Saptavargaja Bala, in scoring order.
pub const SAPTAVARGA: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D12,
    Varga::D30,
];

impl Varga {
    /// Number of subdivisions of one rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D5 => 5,
            Self::D6 => 6,
            Self::D7 => 7,
            Self::D8 => 8,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D11 => 11,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
            Self::D150 => 150,
            Self::D249 => 249,
        }
    }

    /// Short code, e.g. "D9".
    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D4 => "D4",
            Self::D5 => "D5",
            Self::D6 => "D6",
            Self::D7 => "D7",
            Self::D8 => "D8",
            Self::D9 => "D9",
            Self::D10 => "D10",
            Self::D11 => "D11",
            Self::D12 => "D12",
            Self::D16 => "D16",
            Self::D20 => "D20",
            Self::D24 => "D24",
            Self::D27 => "D27",
            Self::D30 => "D30",
            Self::D40 => "D40",
            Self::D45 => "D45",
            Self::D60 => "D60",
            Self::D150 => "D150",
            Self::D249 => "D249",
        }
    }

    /// Traditional Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsha",
            Self::D5 => "Panchamsha",
            Self::D6 => "Shashthamsha",
            Self::D7 => "Saptamsha",
            Self::D8 => "Ashtamsha",
            Self::D9 => "Navamsha",
            Self::D10 => "Dashamsha",
            Self::D11 => "Rudramsha",
            Self::D12 => "Dwadashamsha",
            Self::D16 => "Shodashamsha",
            Self::D20 => "Vimshamsha",
            Self::D24 => "Chaturvimshamsha",
            Self::D27 => "Saptavimshamsha",
            Self::D30 => "Trimshamsha",
            Self::D40 => "Khavedamsha",
            Self::D45 => "Akshavedamsha",
            Self::D60 => "Shashtiamsha",
            Self::D150 => "Nadiamsha",
            Self::D249 => "Vimshottari Amsha",
        }
    }

    /// Look up a varga by division count.
    pub fn from_divisions(n: u16) -> Option<Varga> {
        ALL_VARGAS.iter().copied().find(|v| v.divisions() == n)
    }

    /// Parse "D9", "d9" or "9".
    pub fn from_code(code: &str) -> Result<Varga, BalaError> {
        let trimmed = code.trim();
        let digits = trimmed
            .strip_prefix('D')
            .or_else(|| trimmed.strip_prefix('d'))
            .unwrap_or(trimmed);
        digits
            .parse::<u16>()
            .ok()
            .and_then(Varga::from_divisions)
            .ok_or_else(|| BalaError::UnknownVarga(code.to_string()))
    }

    /// Sign-mapping rule for this varga.
    pub const fn rule(self) -> VargaRule {
        use Rashi::*;
        use VargaRule::*;
        match self {
            Self::D1 => Identity,
            Self::D2 => Parity {
                odd: Anchor::Sign(Simha),
                odd_step: -1,
                even: Anchor::Sign(Karka),
                even_step: 1,
            },
            Self::D3 => SignStep(4),
            Self::D4 => SignStep(3),
            Self::D5 | Self::D6 | Self::D40 => Parity {
                odd: Anchor::Sign(Mesha),
                odd_step: 1,
                even: Anchor::Sign(Tula),
                even_step: 1,
            },
            Self::D7 => Parity {
                odd: Anchor::Offset(0),
                odd_step: 1,
                even: Anchor::Offset(6),
                even_step: 1,
            },
            Self::D8 | Self::D20 => ByModality([Mesha, Dhanu, Simha]),
            Self::D9 => ByElement([Mesha, Makara, Tula, Karka]),
            Self::D10 => Parity {
                odd: Anchor::Offset(0),
                odd_step: 1,
                even: Anchor::Offset(8),
                even_step: 1,
            },
            Self::D11 | Self::D16 | Self::D45 => ByModality([Mesha, Simha, Dhanu]),
            Self::D12 => SameSign,
            Self::D24 => Parity {
                odd: Anchor::Sign(Simha),
                odd_step: 1,
                even: Anchor::Sign(Karka),
                even_step: 1,
            },
            Self::D27 => ByElement([Mesha, Karka, Tula, Makara]),
            Self::D30 => Trimshamsha,
            Self::D60 => ReverseEven { even_anchor: 9 },
            Self::D150 => ReverseEven { even_anchor: 0 },
            Self::D249 => DashaProportional,
        }
    }
}

// ---------------------------------------------------------------------------
// Rule families
// ---------------------------------------------------------------------------

/// Where counting starts for a parity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// A fixed rashi regardless of the natal sign.
    Sign(Rashi),
    /// Signs forward from the natal sign.
    Offset(i32),
}

impl Anchor {
    const fn resolve(self, natal: u8) -> i32 {
        match self {
            Self::Sign(r) => r.index() as i32,
            Self::Offset(n) => natal as i32 + n,
        }
    }
}

/// Sign-subdivision rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VargaRule {
    /// The base chart itself.
    Identity,
    /// target = S + part.
    SameSign,
    /// Odd and even signs count from separate anchors, each with its own step.
    Parity {
        odd: Anchor,
        odd_step: i32,
        even: Anchor,
        even_step: i32,
    },
    /// Start sign chosen by movable / fixed / dual quality, then count forward.
    ByModality([Rashi; 3]),
    /// Start sign chosen by fire / earth / air / water, then count forward.
    ByElement([Rashi; 4]),
    /// target = S + part * step.
    SignStep(i32),
    /// Odd signs count forward from S, even signs backward from S + anchor.
    ReverseEven { even_anchor: i32 },
    /// Unequal degree segments (D30).
    Trimshamsha,
    /// Vimshottari-weighted slots (D249).
    DashaProportional,
}

/// D30 segments for odd signs: (end degree, target rashi).
pub const TRIMSHAMSHA_ODD: [(f64, Rashi); 5] = [
    (5.0, Rashi::Mesha),
    (10.0, Rashi::Kumbha),
    (18.0, Rashi::Dhanu),
    (25.0, Rashi::Mithuna),
    (30.0, Rashi::Tula),
];

/// D30 segments for even signs: (end degree, target rashi).
pub const TRIMSHAMSHA_EVEN: [(f64, Rashi); 5] = [
    (5.0, Rashi::Vrishabha),
    (12.0, Rashi::Kanya),
    (20.0, Rashi::Meena),
    (25.0, Rashi::Makara),
    (30.0, Rashi::Vrischika),
];

/// Vimshottari dasha years in sequence order, Ketu first.
pub const DASHA_YEARS: [u16; 9] = [7, 20, 6, 10, 7, 18, 16, 19, 17];

/// Total years of one Vimshottari cycle.
pub const DASHA_CYCLE_YEARS: u16 = 120;

/// Number of D249 slots in one rashi.
pub const D249_SLOTS: u16 = 249;

/// Largest offset inside a sign that stays clear of the next sign after rounding.
const MAX_IN_SIGN: f64 = 30.0 - 1e-9;

fn place_in_sign(target: Rashi, deg_in_sign: f64) -> f64 {
    target.start_longitude() + deg_in_sign.clamp(0.0, MAX_IN_SIGN)
}

/// Year-units spanned by all 249 slots: 27 full cycles plus the first 6 slots.
fn d249_total_units() -> u32 {
    let full = (D249_SLOTS / 9) as u32 * DASHA_CYCLE_YEARS as u32;
    let partial: u32 = DASHA_YEARS[..(D249_SLOTS % 9) as usize]
        .iter()
        .map(|&y| y as u32)
        .sum();
    full + partial
}

/// Width in degrees of D249 slot `slot` (0-based).
pub fn d249_slot_width(slot: u16) -> f64 {
    let years = DASHA_YEARS[(slot % 9) as usize] as f64;
    years * 30.0 / d249_total_units() as f64
}

// ---------------------------------------------------------------------------
// Position within a varga
// ---------------------------------------------------------------------------

/// Result of mapping one longitude through a varga.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VargaPosition {
    /// Target rashi in the varga chart.
    pub rashi: Rashi,
    /// 0-based subdivision of the natal sign the longitude fell in.
    pub subdivision_index: u16,
    /// Width in degrees of that subdivision.
    pub subdivision_span: f64,
    /// Fraction [0, 1) of the way through the subdivision.
    pub fraction: f64,
    /// Sidereal longitude in the varga chart.
    pub longitude: f64,
}

/// Target sign for an equal-division rule.
fn equal_division_target(rule: VargaRule, natal: Rashi, part: u16) -> u8 {
    let s = natal.index();
    let p = part as i32;
    let target = match rule {
        VargaRule::Identity => s as i32,
        VargaRule::SameSign => s as i32 + p,
        VargaRule::Parity {
            odd,
            odd_step,
            even,
            even_step,
        } => {
            if natal.is_odd() {
                odd.resolve(s) + odd_step * p
            } else {
                even.resolve(s) + even_step * p
            }
        }
        VargaRule::ByModality(starts) => {
            let start = match natal.modality() {
                Modality::Movable => starts[0],
                Modality::Fixed => starts[1],
                Modality::Dual => starts[2],
            };
            start.index() as i32 + p
        }
        VargaRule::ByElement(starts) => {
            let start = match natal.element() {
                Element::Fire => starts[0],
                Element::Earth => starts[1],
                Element::Air => starts[2],
                Element::Water => starts[3],
            };
            start.index() as i32 + p
        }
        VargaRule::SignStep(step) => s as i32 + step * p,
        VargaRule::ReverseEven { even_anchor } => {
            if natal.is_odd() {
                s as i32 + p
            } else {
                s as i32 + even_anchor - p
            }
        }
        // Non-equal rules never reach here
        VargaRule::Trimshamsha | VargaRule::DashaProportional => s as i32,
    };
    target.rem_euclid(12) as u8
}

fn trimshamsha_position(natal: Rashi, deg: f64) -> VargaPosition {
    let table = if natal.is_odd() {
        &TRIMSHAMSHA_ODD
    } else {
        &TRIMSHAMSHA_EVEN
    };
    let mut start = 0.0;
    for (i, &(end, target)) in table.iter().enumerate() {
        if deg < end || i == table.len() - 1 {
            let span = end - start;
            let fraction = ((deg - start) / span).clamp(0.0, 1.0 - f64::EPSILON);
            return VargaPosition {
                rashi: target,
                subdivision_index: i as u16,
                subdivision_span: span,
                fraction,
                longitude: place_in_sign(target, fraction * 30.0),
            };
        }
        start = end;
    }
    // Tables always end at 30 degrees, so the loop returns above.
    unreachable_position(natal, deg)
}

fn unreachable_position(natal: Rashi, deg: f64) -> VargaPosition {
    VargaPosition {
        rashi: natal,
        subdivision_index: 0,
        subdivision_span: 30.0,
        fraction: deg / 30.0,
        longitude: natal.start_longitude() + deg,
    }
}

fn dasha_proportional_position(natal: Rashi, deg: f64) -> VargaPosition {
    let total_units = d249_total_units() as f64;
    let units = (deg / 30.0 * total_units).clamp(0.0, total_units);
    let cycle_units = DASHA_CYCLE_YEARS as f64;

    let max_cycle = ((D249_SLOTS - 1) / 9) as f64;
    let cycle = (units / cycle_units).floor().min(max_cycle);
    let mut slot = cycle as u16 * 9;
    let mut slot_start = cycle * cycle_units;

    for &years in &DASHA_YEARS {
        let width = years as f64;
        if units < slot_start + width || slot == D249_SLOTS - 1 {
            break;
        }
        slot_start += width;
        slot += 1;
    }

    let years = DASHA_YEARS[(slot % 9) as usize] as f64;
    let fraction = ((units - slot_start) / years).clamp(0.0, 1.0 - f64::EPSILON);
    let rashi = natal.offset(slot as i32);
    VargaPosition {
        rashi,
        subdivision_index: slot,
        subdivision_span: d249_slot_width(slot),
        fraction,
        longitude: place_in_sign(rashi, fraction * 30.0),
    }
}

/// Map a sidereal longitude through a varga.
pub fn varga_position(sidereal_lon: f64, varga: Varga) -> VargaPosition {
    let info = rashi_from_longitude(sidereal_lon);
    let natal = info.rashi;
    let deg = info.degrees_in_rashi;
    let rule = varga.rule();

    match rule {
        VargaRule::Identity => VargaPosition {
            rashi: natal,
            subdivision_index: 0,
            subdivision_span: 30.0,
            fraction: deg / 30.0,
            longitude: normalize_360(sidereal_lon),
        },
        VargaRule::Trimshamsha => trimshamsha_position(natal, deg),
        VargaRule::DashaProportional => dasha_proportional_position(natal, deg),
        _ => {
            let n = varga.divisions();
            // Part and offset both come from the scaled degree so they
            // agree at subdivision boundaries.
            let scaled = deg * n as f64;
            let part = ((scaled / 30.0).floor() as u16).min(n - 1);
            let target = ALL_RASHIS[equal_division_target(rule, natal, part) as usize];
            let within = (scaled - part as f64 * 30.0).clamp(0.0, MAX_IN_SIGN);
            VargaPosition {
                rashi: target,
                subdivision_index: part,
                subdivision_span: 30.0 / n as f64,
                fraction: within / 30.0,
                longitude: place_in_sign(target, within),
            }
        }
    }
}

/// Sidereal longitude of a point in the given varga chart.
pub fn varga_longitude(sidereal_lon: f64, varga: Varga) -> f64 {
    varga_position(sidereal_lon, varga).longitude
}

/// Rashi placement of a point in the given varga chart.
pub fn varga_rashi_info(sidereal_lon: f64, varga: Varga) -> RashiInfo {
    rashi_from_longitude(varga_longitude(sidereal_lon, varga))
}

// ---------------------------------------------------------------------------
// Whole-chart transformation
// ---------------------------------------------------------------------------

/// Derive a divisional chart from a base chart.
///
/// D1 returns an identical copy. For every other varga the ascendant and
/// every graha are mapped through the varga rule, houses are rebuilt as
/// whole signs from the new ascendant and dignities are recomputed from
/// the new signs. Ketu is placed opposite the transformed Rahu.
/// Combustion is an astronomical condition and carries over unchanged.
pub fn divisional_chart(base: &Chart, varga: Varga) -> Chart {
    if varga == Varga::D1 {
        return base.clone();
    }

    let asc = varga_longitude(base.houses().ascendant(), varga);
    let houses = HouseSystem::whole_sign(asc);
    trace!(varga = varga.name(), ascendant = asc, "deriving divisional chart");

    let mut planets = base
        .planets()
        .iter()
        .filter(|(g, _)| **g != Graha::Ketu || !base.planets().contains_key(&Graha::Rahu))
        .map(|(&graha, info)| {
            let pos = varga_position(info.position.longitude, varga);
            let placed = varga_planet(graha, info, pos.longitude, &houses, &pos);
            (graha, placed)
        })
        .collect::<std::collections::BTreeMap<_, _>>();

    if let (Some(rahu), Some(base_ketu)) = (
        planets.get(&Graha::Rahu).copied(),
        base.planet(Graha::Ketu),
    ) {
        let ketu_lon = normalize_360(rahu.position.longitude + 180.0);
        let pos = VargaPosition {
            rashi: rashi_from_longitude(ketu_lon).rashi,
            subdivision_index: rahu.subdivision_index.unwrap_or(0),
            subdivision_span: rahu.subdivision_span.unwrap_or(30.0),
            fraction: 0.0,
            longitude: ketu_lon,
        };
        let placed = varga_planet(Graha::Ketu, base_ketu, ketu_lon, &houses, &pos);
        planets.insert(Graha::Ketu, placed);
    }

    Chart::from_parts(
        base.timestamp(),
        *base.location(),
        houses,
        planets,
        base.sun_events().copied(),
    )
}

fn varga_planet(
    graha: Graha,
    base: &PlanetInfo,
    longitude: f64,
    houses: &HouseSystem,
    pos: &VargaPosition,
) -> PlanetInfo {
    let mut position = base.position;
    position.longitude = longitude;
    PlanetInfo {
        position,
        house: houses.house_of(longitude),
        dignity: dignity(graha, rashi_from_longitude(longitude).rashi),
        is_combust: base.is_combust,
        subdivision_index: Some(pos.subdivision_index),
        subdivision_span: Some(pos.subdivision_span),
    }
}

/// The seven Saptavargaja charts, in [`SAPTAVARGA`] order.
pub fn saptavarga_charts(base: &Chart) -> [Chart; 7] {
    SAPTAVARGA.map(|v| divisional_chart(base, v))
}
