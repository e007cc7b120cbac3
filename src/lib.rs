pub mod config;
pub mod distance;
pub mod domain;
pub mod fixtures;
pub mod setup;
pub mod solver;
pub mod utils;
