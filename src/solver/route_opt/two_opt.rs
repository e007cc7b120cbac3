use tracing::trace;

use crate::distance::matrix::dist_between;

/// First-improvement 2-opt: reverse the segment between the first pair of
/// positions whose reconnection shortens the tour, then rescan from the
/// top until no improving pair remains.
///
/// Swap gain is evaluated with a wraparound edge `(j + 1) % n`, i.e. on the
/// cyclic tour, while the reported route length elsewhere stays open-path.
/// That mismatch is inherited behaviour and is kept as-is.
pub fn two_opt(dm: &[Vec<f64>], tour: &mut [usize]) {
    let n = tour.len();
    if n < 3 {
        return;
    }

    let mut improved = true;
    while improved {
        improved = false;

        'scan: for i in 0..(n - 2) {
            for j in (i + 2)..n {
                let removed = dist_between(tour[i], tour[i + 1], dm)
                    + dist_between(tour[j], tour[(j + 1) % n], dm);
                let added = dist_between(tour[i], tour[j], dm)
                    + dist_between(tour[i + 1], tour[(j + 1) % n], dm);

                if added < removed {
                    trace!("2-opt reversal at ({}, {}): {:.4} -> {:.4}", i, j, removed, added);
                    tour[(i + 1)..=j].reverse();
                    improved = true;
                    break 'scan;
                }
            }
        }
    }
}
