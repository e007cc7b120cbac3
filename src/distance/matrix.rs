use tracing::debug;

use crate::domain::types::Waypoint;

/// Create the full Euclidean distance matrix for the given stops.
///
/// `dm[i][j]` is the planar distance between stop `i` and stop `j` in
/// coordinate units; the diagonal is zero and the matrix is symmetric.
/// Coordinates are not validated, non-finite values propagate as-is.
pub fn create_dm<P: Waypoint>(stops: &[P]) -> Vec<Vec<f64>> {
    let n = stops.len();
    let mut dm = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let d = (stops[i].lat() - stops[j].lat()).hypot(stops[i].lng() - stops[j].lng());
            dm[i][j] = d;
            dm[j][i] = d;
        }
    }

    debug!("Created {}x{} distance matrix", n, n);
    dm
}

pub fn dist_between(from_loc: usize, to_loc: usize, dm: &[Vec<f64>]) -> f64 {
    dm[from_loc][to_loc]
}

// Print distance matrix for debugging
pub fn print_dist_matrix(dm: &[Vec<f64>]) {
    debug!("Distance matrix:");
    for row in dm {
        debug!("{:?}", row);
    }
}
