use std::env;
use std::error::Error;

use chrono::Utc;
use colored::Colorize;
use csv::Writer;
use dotenv::dotenv;
use itertools::Itertools;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use store_route::config::constant::{MAX_SELECTION, SEED, START_INDEX, STOP_COUNT};
use store_route::domain::types::{RoutePlan, StoreStop};
use store_route::fixtures::data_generator::generate_random_stops;
use store_route::setup::load_stops;
use store_route::solver::route_opt::plan_route;
use store_route::utils::degrees_to_km;

/// Initialize tracing and environment
fn init_tracing_and_env() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().pretty())
        .init();

    dotenv().ok();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env();

    let mut stops = match env::var("STORES_FILE") {
        Ok(path) => load_stops(&path)?,
        Err(_) => {
            info!(
                "STORES_FILE not set, generating {} random stops (seed {})",
                STOP_COUNT, SEED
            );
            generate_random_stops(STOP_COUNT, SEED)
        }
    };

    // The solver itself puts no bound on N, so the selection is capped here.
    if stops.len() > MAX_SELECTION {
        warn!(
            "Selection of {} stops exceeds the cap of {}, truncating",
            stops.len(),
            MAX_SELECTION
        );
        stops.truncate(MAX_SELECTION);
    }

    let start_index = env::var("START_INDEX")
        .ok()
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(START_INDEX);
    if stops.len() >= 2 && start_index >= stops.len() {
        return Err(format!(
            "START_INDEX {} is out of range for {} stops",
            start_index,
            stops.len()
        )
        .into());
    }

    info!(
        "Planning a route over {} stops from start index {}",
        stops.len(),
        start_index
    );

    let plan = plan_route(&stops, start_index);
    print_plan(&plan);

    let filename = format!("route_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));
    save_to_csv(&plan, &filename)?;
    info!("Saved route to {}", filename);

    Ok(())
}

fn print_plan(plan: &RoutePlan<StoreStop>) {
    println!(
        "{}",
        format_args!(
            "Total distance: {:.4} deg (~{:.1} km)",
            plan.total_distance,
            degrees_to_km(plan.total_distance)
        )
        .to_string()
        .green()
    );

    let order = plan.route.iter().map(|s| s.name.as_str()).join(" -> ");
    println!("Visiting order: {}", order);
}

fn save_to_csv(plan: &RoutePlan<StoreStop>, filename: &str) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["order", "id", "name", "lat", "lng"])?;

    for (ind, stop) in plan.route.iter().enumerate() {
        wtr.write_record([
            ind.to_string(),
            stop.id.to_string(),
            stop.name.clone(),
            stop.lat.to_string(),
            stop.lng.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
