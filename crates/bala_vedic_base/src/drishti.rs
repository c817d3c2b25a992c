//! Graha drishti (planetary aspect) strength in virupas.
//!
//! Every graha casts a full aspect on the point opposite it. Mars also
//! aspects at 90 and 210 degrees, Jupiter at 120 and 240, Saturn at 60
//! and 270. Strength falls off linearly with the orb from the exact aspect
//! angle, and only the strongest matching aspect counts.
//!
//! The optional partial-aspect mode adds 90 and 270 degree aspects for
//! every graha at reduced weight.

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::dignity::natural_benefic_malefic;
use crate::graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS};
use crate::util::{arc_distance, forward_distance};

/// Full strength of an exact aspect.
pub const FULL_VIRUPA: f64 = 60.0;

/// Maximum orb for the 180 degree aspect.
pub const FULL_ASPECT_MAX_ORB: f64 = 30.0;

/// Maximum orb for special and partial aspects.
pub const SPECIAL_ASPECT_MAX_ORB: f64 = 15.0;

/// Which aspect angles count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrishtiMode {
    /// Full aspect plus the Mars/Jupiter/Saturn special aspects.
    #[default]
    Classical,
    /// Classical aspects plus universal partial aspects at 90 (3/4) and
    /// 270 (1/4) degrees.
    WithPartialAspects,
}

/// One aspect angle a graha casts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectAngle {
    /// Forward angle from the aspecting graha, degrees.
    pub angle: f64,
    pub max_orb: f64,
    /// Fraction of full strength at zero orb.
    pub weight: f64,
}

const fn full(angle: f64) -> AspectAngle {
    AspectAngle {
        angle,
        max_orb: FULL_ASPECT_MAX_ORB,
        weight: 1.0,
    }
}

const fn special(angle: f64) -> AspectAngle {
    AspectAngle {
        angle,
        max_orb: SPECIAL_ASPECT_MAX_ORB,
        weight: 1.0,
    }
}

static PARTIAL_ASPECTS: [AspectAngle; 2] = [
    AspectAngle {
        angle: 90.0,
        max_orb: SPECIAL_ASPECT_MAX_ORB,
        weight: 0.75,
    },
    AspectAngle {
        angle: 270.0,
        max_orb: SPECIAL_ASPECT_MAX_ORB,
        weight: 0.25,
    },
];

static COMMON_ASPECTS: [AspectAngle; 1] = [full(180.0)];
static MANGAL_ASPECTS: [AspectAngle; 3] = [full(180.0), special(90.0), special(210.0)];
static GURU_ASPECTS: [AspectAngle; 3] = [full(180.0), special(120.0), special(240.0)];
static SHANI_ASPECTS: [AspectAngle; 3] = [full(180.0), special(60.0), special(270.0)];

/// Full and special aspect angles cast by a graha.
pub fn aspect_angles(graha: Graha) -> &'static [AspectAngle] {
    match graha {
        Graha::Mangal => &MANGAL_ASPECTS,
        Graha::Guru => &GURU_ASPECTS,
        Graha::Shani => &SHANI_ASPECTS,
        _ => &COMMON_ASPECTS,
    }
}

fn angle_strength(aspect: &AspectAngle, angular_diff: f64) -> f64 {
    let orb = arc_distance(angular_diff, aspect.angle);
    if orb >= aspect.max_orb {
        0.0
    } else {
        FULL_VIRUPA * aspect.weight * (1.0 - orb / aspect.max_orb)
    }
}

/// Aspect strength for a single source→target pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrishtiEntry {
    /// Forward angular distance from source to target in [0, 360).
    pub angular_distance: f64,
    /// Aspect angle that produced the strength, if any matched.
    pub aspect_angle: Option<f64>,
    /// Strength in virupas, [0, 60].
    pub virupa: f64,
}

impl DrishtiEntry {
    pub const fn zero() -> Self {
        Self {
            angular_distance: 0.0,
            aspect_angle: None,
            virupa: 0.0,
        }
    }
}

/// Aspect of `graha` at `source_lon` on the point `target_lon`.
pub fn graha_drishti(
    graha: Graha,
    source_lon: f64,
    target_lon: f64,
    mode: DrishtiMode,
) -> DrishtiEntry {
    let angular_distance = forward_distance(source_lon, target_lon);
    let partial: &[AspectAngle] = match mode {
        DrishtiMode::Classical => &[],
        DrishtiMode::WithPartialAspects => &PARTIAL_ASPECTS,
    };

    let mut best = DrishtiEntry {
        angular_distance,
        ..DrishtiEntry::zero()
    };
    for aspect in aspect_angles(graha).iter().chain(partial) {
        let s = angle_strength(aspect, angular_distance);
        if s > best.virupa {
            best.virupa = s;
            best.aspect_angle = Some(aspect.angle);
        }
    }
    best
}

/// Classical aspect strength in virupas, [0, 60].
pub fn aspect_strength(graha: Graha, aspecting_lon: f64, aspected_lon: f64) -> f64 {
    graha_drishti(graha, aspecting_lon, aspected_lon, DrishtiMode::Classical).virupa
}

/// Aspect strength under the given mode.
pub fn aspect_strength_with_mode(
    graha: Graha,
    aspecting_lon: f64,
    aspected_lon: f64,
    mode: DrishtiMode,
) -> f64 {
    graha_drishti(graha, aspecting_lon, aspected_lon, mode).virupa
}

/// 9×9 graha-to-graha drishti matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaDrishtiMatrix {
    /// `entries[source][target]`, indexed by `Graha::index()`.
    /// Self-aspects and absent grahas are zero.
    pub entries: [[DrishtiEntry; 9]; 9],
}

impl GrahaDrishtiMatrix {
    pub fn get(&self, source: Graha, target: Graha) -> &DrishtiEntry {
        &self.entries[source.index() as usize][target.index() as usize]
    }
}

/// Aspects between every pair of grahas in a chart.
pub fn graha_drishti_matrix(chart: &Chart, mode: DrishtiMode) -> GrahaDrishtiMatrix {
    let mut entries = [[DrishtiEntry::zero(); 9]; 9];
    for src in ALL_GRAHAS {
        let Some(src_lon) = chart.longitude(src) else {
            continue;
        };
        for tgt in ALL_GRAHAS {
            if src == tgt {
                continue;
            }
            if let Some(tgt_lon) = chart.longitude(tgt) {
                entries[src.index() as usize][tgt.index() as usize] =
                    graha_drishti(src, src_lon, tgt_lon, mode);
            }
        }
    }
    GrahaDrishtiMatrix { entries }
}

/// Net benefic-minus-malefic aspect on a point, each aspect divided by 4.
///
/// Sums over the classical grahas present in the chart, skipping
/// `exclude`. The result is not clamped.
pub fn net_drishti_on_point(
    chart: &Chart,
    point_lon: f64,
    exclude: Option<Graha>,
    mode: DrishtiMode,
) -> f64 {
    SAPTA_GRAHAS
        .iter()
        .filter(|&&g| Some(g) != exclude)
        .filter_map(|&g| chart.longitude(g).map(|lon| (g, lon)))
        .map(|(g, lon)| {
            let v = aspect_strength_with_mode(g, lon, point_lon, mode);
            natural_benefic_malefic(g).sign() * v / 4.0
        })
        .sum()
}
