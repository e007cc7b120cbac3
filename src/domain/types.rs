use serde::{Deserialize, Serialize};

/// Minimal coordinate-bearing shape the solver needs from a stop.
/// Anything else the caller attaches rides through the pipeline unchanged.
pub trait Waypoint {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

/// One selectable store from the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreStop {
    pub id: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint for StoreStop {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

// Bare coordinate pairs are enough for tests and quick experiments.
impl Waypoint for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }

    fn lng(&self) -> f64 {
        self.1
    }
}

/// Optimised visiting order plus its open-path length, in the same unit
/// as the input coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan<P> {
    pub route: Vec<P>,
    pub total_distance: f64,
}
