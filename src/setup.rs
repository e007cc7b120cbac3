use std::error::Error;
use std::fs;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::types::StoreStop;

/// Raw catalogue entry; geocoding occasionally leaves coordinates empty,
/// so they arrive as optional.
#[derive(Debug, Deserialize)]
struct RawStop {
    id: u32,
    name: String,
    lat: Option<f64>,
    lng: Option<f64>,
}

/// Reads the store catalogue JSON and returns the stops that carry usable
/// coordinates. The solver does no validation of its own, so entries
/// without finite coordinates are dropped here.
pub fn load_stops(path: &str) -> Result<Vec<StoreStop>, Box<dyn Error>> {
    let file_content = fs::read_to_string(path)?;
    let raw: Vec<RawStop> = serde_json::from_str(&file_content)?;
    let total = raw.len();

    let stops: Vec<StoreStop> = raw
        .into_iter()
        .filter_map(|r| match (r.lat, r.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some(StoreStop {
                id: r.id,
                name: r.name,
                lat,
                lng,
            }),
            _ => {
                warn!("Dropping store {} ({}): no usable coordinates", r.id, r.name);
                None
            }
        })
        .collect();

    info!("Loaded {} of {} stops from {}", stops.len(), total, path);
    Ok(stops)
}
