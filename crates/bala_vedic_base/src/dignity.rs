//! Graha dignity, friendship and classification tables.
//!
//! Provides exaltation/debilitation data, moolatrikona signs and ranges,
//! own-sign ownership, natural (naisargika) friendship, dignity
//! determination, benefic/malefic classification and gender.
//!
//! Rahu and Ketu carry no entries in any table: every lookup returns
//! `None`, an empty slice, or `Neutral`.
//!
//! Clean-room implementation from BPHS (Brihat Parashara Hora Shastra).

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_from_longitude};

// ---------------------------------------------------------------------------
// 1a. Exaltation & Debilitation
// ---------------------------------------------------------------------------

/// Deep exaltation degree (sidereal). Returns None for Rahu/Ketu.
///
/// Sun 10 Ari=10, Moon 3 Tau=33, Mars 28 Cap=298,
/// Mercury 15 Vir=165, Jupiter 5 Can=95, Venus 27 Pis=357, Saturn 20 Lib=200.
pub const fn exaltation_degree(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya => Some(10.0),
        Graha::Chandra => Some(33.0),
        Graha::Mangal => Some(298.0),
        Graha::Buddh => Some(165.0),
        Graha::Guru => Some(95.0),
        Graha::Shukra => Some(357.0),
        Graha::Shani => Some(200.0),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Deep debilitation degree = exaltation + 180 mod 360.
pub const fn debilitation_degree(graha: Graha) -> Option<f64> {
    match exaltation_degree(graha) {
        Some(e) => {
            let d = e + 180.0;
            Some(if d >= 360.0 { d - 360.0 } else { d })
        }
        None => None,
    }
}

/// Sign of exaltation.
pub fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    exaltation_degree(graha).map(|d| rashi_from_longitude(d).rashi)
}

/// Sign of debilitation, always the 7th from the exaltation sign.
pub fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    exaltation_rashi(graha).map(|r| r.offset(6))
}

// ---------------------------------------------------------------------------
// 1b. Own Signs & Moolatrikona
// ---------------------------------------------------------------------------

/// Own-sign rashis. The luminaries own exactly one sign each.
pub const fn own_rashis(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Moolatrikona range: (rashi, start_deg_in_rashi, end_deg_in_rashi).
///
/// Sun 0-20 Leo, Moon 4-20 Tau, Mars 0-12 Ari, Mercury 16-20 Vir,
/// Jupiter 0-10 Sag, Venus 0-15 Lib, Saturn 0-20 Aqu.
pub const fn moolatrikona_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Surya => Some((Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some((Rashi::Vrishabha, 4.0, 20.0)),
        Graha::Mangal => Some((Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some((Rashi::Kanya, 16.0, 20.0)),
        Graha::Guru => Some((Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some((Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some((Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Moolatrikona sign.
///
/// Every planet's moolatrikona lies in one of its own signs except the
/// Moon, whose moolatrikona (Vrishabha) is its exaltation sign.
pub const fn moola_trikona_rashi(graha: Graha) -> Option<Rashi> {
    match moolatrikona_range(graha) {
        Some((r, _, _)) => Some(r),
        None => None,
    }
}

// ---------------------------------------------------------------------------
// 1c. Natural Friendship (Naisargika Maitri)
// ---------------------------------------------------------------------------

/// Natural relationship of one graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    Friend,
    Neutral,
    Enemy,
}

/// How `graha` regards `other` (BPHS table). Not symmetric.
/// Returns Neutral for any pairing involving Rahu/Ketu, and for self.
pub const fn relationship(graha: Graha, other: Graha) -> Relationship {
    use Graha::*;
    use Relationship::*;

    match (graha, other) {
        (Rahu | Ketu, _) | (_, Rahu | Ketu) => Neutral,

        // Sun: friends=Moon,Mars,Jupiter; enemies=Venus,Saturn
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,

        // Moon: friends=Sun,Mercury; no enemies
        (Chandra, Surya | Buddh) => Friend,

        // Mars: friends=Sun,Moon,Jupiter; enemy=Mercury
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,

        // Mercury: friends=Sun,Venus; enemy=Moon
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,

        // Jupiter: friends=Sun,Moon,Mars; enemies=Mercury,Venus
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,

        // Venus: friends=Mercury,Saturn; enemies=Sun,Moon
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,

        // Saturn: friends=Mercury,Venus; enemies=Sun,Moon,Mars
        (Shani, Buddh | Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,

        _ => Neutral,
    }
}

// ---------------------------------------------------------------------------
// 1d. Dignity Determination
// ---------------------------------------------------------------------------

/// Dignity of a graha in a rashi, strongest first.
///
/// The derived `Ord` follows placement strength: `Exalted < Debilitated`
/// means "stronger than".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    MoolaTrikona,
    OwnSign,
    GreatFriend,
    FriendSign,
    NeutralSign,
    EnemySign,
    GreatEnemy,
    Debilitated,
}

/// All dignities from strongest to weakest.
pub const ALL_DIGNITIES: [Dignity; 9] = [
    Dignity::Exalted,
    Dignity::MoolaTrikona,
    Dignity::OwnSign,
    Dignity::GreatFriend,
    Dignity::FriendSign,
    Dignity::NeutralSign,
    Dignity::EnemySign,
    Dignity::GreatEnemy,
    Dignity::Debilitated,
];

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::MoolaTrikona => "Moolatrikona",
            Self::OwnSign => "Own Sign",
            Self::GreatFriend => "Great Friend",
            Self::FriendSign => "Friend",
            Self::NeutralSign => "Neutral",
            Self::EnemySign => "Enemy",
            Self::GreatEnemy => "Great Enemy",
            Self::Debilitated => "Debilitated",
        }
    }
}

/// How the Saptavargaja dignity of each varga placement is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DignityMode {
    /// Sign-only lookup, see [`dignity`].
    #[default]
    SignOnly,
    /// Degree-aware lookup, see [`dignity_at_longitude`].
    DegreeAware,
}

fn dignity_from_lord(graha: Graha, rashi: Rashi) -> Dignity {
    let lord = rashi_lord(rashi);
    let towards_lord = relationship(graha, lord);
    let from_lord = relationship(lord, graha);
    match (towards_lord, from_lord) {
        (Relationship::Friend, Relationship::Friend) => Dignity::GreatFriend,
        (Relationship::Friend, _) | (_, Relationship::Friend) => Dignity::FriendSign,
        (Relationship::Enemy, Relationship::Enemy) => Dignity::GreatEnemy,
        (Relationship::Enemy, _) | (_, Relationship::Enemy) => Dignity::EnemySign,
        _ => Dignity::NeutralSign,
    }
}

/// Sign-only dignity.
///
/// Strict priority: exalted > debilitated > own sign > moolatrikona >
/// relationship with the sign lord (mutual friend, one-way friend, mutual
/// enemy, one-way enemy, neutral). Rahu/Ketu are always `NeutralSign`.
pub fn dignity(graha: Graha, rashi: Rashi) -> Dignity {
    if !graha.is_sapta() {
        return Dignity::NeutralSign;
    }
    if exaltation_rashi(graha) == Some(rashi) {
        return Dignity::Exalted;
    }
    if debilitation_rashi(graha) == Some(rashi) {
        return Dignity::Debilitated;
    }
    if own_rashis(graha).contains(&rashi) {
        return Dignity::OwnSign;
    }
    if moola_trikona_rashi(graha) == Some(rashi) {
        return Dignity::MoolaTrikona;
    }
    dignity_from_lord(graha, rashi)
}

/// Degree-aware dignity: a longitude inside the moolatrikona arc reports
/// `MoolaTrikona` ahead of every sign-level category, otherwise the
/// sign-only lookup applies.
pub fn dignity_at_longitude(graha: Graha, sidereal_lon: f64) -> Dignity {
    if !graha.is_sapta() {
        return Dignity::NeutralSign;
    }
    let info = rashi_from_longitude(sidereal_lon);
    if let Some((mt, start, end)) = moolatrikona_range(graha) {
        if info.rashi == mt && info.degrees_in_rashi >= start && info.degrees_in_rashi < end {
            return Dignity::MoolaTrikona;
        }
    }
    dignity(graha, info.rashi)
}

/// Dignity lookup in the chosen mode.
pub fn dignity_with_mode(graha: Graha, sidereal_lon: f64, mode: DignityMode) -> Dignity {
    match mode {
        DignityMode::SignOnly => dignity(graha, rashi_from_longitude(sidereal_lon).rashi),
        DignityMode::DegreeAware => dignity_at_longitude(graha, sidereal_lon),
    }
}

// ---------------------------------------------------------------------------
// 1e. Classification
// ---------------------------------------------------------------------------

/// Natural benefic/malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

impl BeneficNature {
    /// +1 for benefics, -1 for malefics.
    pub const fn sign(self) -> f64 {
        match self {
            Self::Benefic => 1.0,
            Self::Malefic => -1.0,
        }
    }
}

/// Benefics: Moon, Mercury, Jupiter, Venus. Malefics: Sun, Mars, Saturn
/// and the nodes.
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
    }
}

/// Graha gender classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrahaGender {
    Male,
    Female,
    Neuter,
}

/// Male: Sun, Mars, Jupiter. Female: Moon, Venus. Neuter: Mercury, Saturn.
/// Rahu/Ketu are treated as Neuter.
pub const fn graha_gender(graha: Graha) -> GrahaGender {
    match graha {
        Graha::Surya | Graha::Mangal | Graha::Guru => GrahaGender::Male,
        Graha::Chandra | Graha::Shukra => GrahaGender::Female,
        Graha::Buddh | Graha::Shani | Graha::Rahu | Graha::Ketu => GrahaGender::Neuter,
    }
}
