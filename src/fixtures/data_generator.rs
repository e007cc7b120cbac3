use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::types::StoreStop;

// Bounding box roughly covering the greater Tokyo store catalogue.
const LAT_RANGE: (f64, f64) = (35.45, 35.85);
const LNG_RANGE: (f64, f64) = (139.3, 139.95);

/// Generates a seeded list of random store stops for demos and benchmarks.
pub fn generate_random_stops(count: usize, seed: u64) -> Vec<StoreStop> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut stops = Vec::with_capacity(count);

    for ind in 0..count {
        stops.push(StoreStop {
            id: (ind + 1) as u32,
            name: format!("Store {:02}", ind + 1),
            lat: rng.gen_range(LAT_RANGE.0..LAT_RANGE.1),
            lng: rng.gen_range(LNG_RANGE.0..LNG_RANGE.1),
        });
    }

    stops
}
