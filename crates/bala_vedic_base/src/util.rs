//! Shared angle arithmetic.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn arc_distance(a: f64, b: f64) -> f64 {
    let diff = normalize_360(a - b);
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Forward distance from `from` to `to`, in [0, 360).
pub fn forward_distance(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

/// Positive-residue modulo 12 for sign arithmetic.
pub fn wrap_sign(idx: i32) -> u8 {
    idx.rem_euclid(12) as u8
}
