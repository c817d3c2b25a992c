//! Error types for strength and varga calculations.

use thiserror::Error;

use crate::graha::Graha;

/// Errors from chart construction and contract violations.
///
/// Missing planets in a built chart are not errors: per-planet lookups
/// return `Option` and aggregates skip absent grahas.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BalaError {
    /// Rashi index outside [0, 11].
    #[error("invalid rashi index {0}, expected 0..=11")]
    InvalidRashiIndex(u8),
    /// House number outside [1, 12].
    #[error("invalid house number {0}, expected 1..=12")]
    InvalidHouseNumber(u8),
    /// Divisional chart code not recognised.
    #[error("unknown divisional chart: {0}")]
    UnknownVarga(String),
    /// House cusps are not usable (non-finite values).
    #[error("invalid house cusps: {0}")]
    InvalidCusps(&'static str),
    /// A graha required to build the chart was not supplied.
    #[error("missing position for {}", .0.english_name())]
    MissingPlanet(Graha),
    /// Error surfaced by the ephemeris collaborator.
    #[error("ephemeris error: {0}")]
    Ephemeris(String),
}
