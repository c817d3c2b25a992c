//! Vedic planetary strength and divisional chart engine.
//!
//! This crate provides:
//! - Rashi, graha and dignity tables (exaltation, own signs, moolatrikona,
//!   natural friendship, benefic/malefic, gender)
//! - 22 divisional charts (D1-D60, D150, D249)
//! - Graha drishti in virupas with orb falloff
//! - Shadbala, the six-fold planetary strength
//! - Bhava (house) strength
//!
//! Raw positions come from any [`EphemerisProvider`]; everything else is
//! pure computation over an immutable [`Chart`].
//!
//! All implementations are clean-room, derived from BPHS.

pub mod bhava_bala;
pub mod chart;
pub mod combustion;
pub mod dignity;
pub mod drishti;
pub mod ephemeris;
pub mod error;
pub mod graha;
pub mod kala;
pub mod rashi;
pub mod shadbala;
pub mod util;
pub mod varga;

pub use bhava_bala::{
    BhavaCategory, HouseStrength, calculate_house_strength, calculate_house_strength_with_mode,
};
pub use chart::{
    Chart, ChartBuilder, GeoLocation, HouseSystem, PlanetInfo, PlanetPosition, SunEvents,
};
pub use combustion::{combustion_threshold, is_combust};
pub use dignity::{
    ALL_DIGNITIES, BeneficNature, Dignity, DignityMode, GrahaGender, Relationship,
    debilitation_degree, debilitation_rashi, dignity, dignity_at_longitude, dignity_with_mode,
    exaltation_degree, exaltation_rashi, graha_gender, moola_trikona_rashi, moolatrikona_range,
    natural_benefic_malefic, own_rashis, relationship,
};
pub use drishti::{
    DrishtiEntry, DrishtiMode, GrahaDrishtiMatrix, aspect_strength, aspect_strength_with_mode,
    graha_drishti, graha_drishti_matrix, net_drishti_on_point,
};
pub use ephemeris::{EphemerisProvider, chart_from_ephemeris, sun_events_for};
pub use error::BalaError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord, rashi_lord_by_index};
pub use kala::{
    DayPhase, DayPhaseSource, day_phase, hora_lord, masa_lord, samvatsara_index, tribhaga_lord,
    varsha_lord, weekday_lord,
};
pub use rashi::{
    ALL_RASHIS, Dms, Element, Modality, Rashi, RashiInfo, deg_to_dms, dms_to_deg,
    rashi_from_longitude,
};
pub use shadbala::{
    KalaBalaBreakdown, ShadbalaConfig, ShadbalaResult, SthanaBalaBreakdown, StrengthCategory,
    calculate_shadbala, calculate_shadbala_with,
};
pub use util::normalize_360;
pub use varga::{
    ALL_VARGAS, SAPTAVARGA, Varga, VargaPosition, divisional_chart, saptavarga_charts,
    varga_longitude, varga_position, varga_rashi_info,
};
