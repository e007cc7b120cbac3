use itertools::Itertools;

use crate::config;
use crate::distance::matrix::dist_between;

/// Sum of consecutive-pair edges in tour order. No closing edge back to
/// the start is included.
pub fn open_path_distance(tour: &[usize], dm: &[Vec<f64>]) -> f64 {
    tour.iter()
        .tuple_windows()
        .map(|(&from, &to)| dist_between(from, to, dm))
        .sum()
}

/// Display-only approximation; the solver itself stays in coordinate units.
pub fn degrees_to_km(degrees: f64) -> f64 {
    degrees * config::constant::KM_PER_DEGREE
}
