//! Great-circle distance and nearest-neighbor matching over WGS84 points.

use crate::records::Coordinates;
use crate::stats::EmptyInputError;

/// Earth's mean radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine great-circle distance between two points, in statute miles.
///
/// Inputs are decimal degrees. The result is non-negative, symmetric up to
/// floating-point rounding, and zero for coincident points.
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1] at coincident or
    // antipodal points, which would feed sqrt a negative argument.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Finds the candidate closest to `(lat, lon)` by great-circle distance.
///
/// Ties keep the first candidate in iteration order, so the result is
/// deterministic for a fixed input order. The scan is brute force with
/// no spatial index; both point sets are expected to stay small.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `candidates` is empty.
pub fn nearest<'a, T: Coordinates>(
    lat: f64,
    lon: f64,
    candidates: &'a [T],
) -> Result<(&'a T, f64), EmptyInputError> {
    let mut best: Option<(&T, f64)> = None;

    for candidate in candidates {
        let (candidate_lat, candidate_lon) = candidate.coordinates();
        let distance = haversine_miles(lat, lon, candidate_lat, candidate_lon);

        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.ok_or(EmptyInputError)
}
