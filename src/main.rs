use std::path::PathBuf;

use anyhow::Context;
use chrono::{TimeDelta, Utc};
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use venue_admission::domain::admission::admission::Admission;
use venue_admission::domain::admission::admission_controller::AdmissionController;
use venue_admission::domain::reservation::reservation::Reservation;
use venue_admission::domain::utils::id::ReservationName;
use venue_admission::{load_admission_controller, load_reservations, logger};

/// Checks reservation requests against the slot and venue capacity of a venue.
#[derive(Debug, Parser)]
#[command(name = "venue_admission", version, about)]
struct Cli {
    /// Admission configuration JSON. The default policy is used if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reservation requests JSON, processed in file order.
    #[arg(short, long, required_unless_present = "demo")]
    requests: Option<PathBuf>,

    /// Run the built-in scenario of three parties of 20 starting now.
    #[arg(long, conflicts_with = "requests")]
    demo: bool,

    /// Log level, overrides RUST_LOG (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Log to the console only.
    #[arg(long)]
    no_log_file: bool,
}

fn demo_reservations() -> Vec<Reservation> {
    let now = Utc::now();

    ["party-a", "party-b", "party-c"]
        .into_iter()
        .map(|name| Reservation::with_name(ReservationName::new(name), 20, now, TimeDelta::minutes(120)))
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init(cli.log_level, !cli.no_log_file);

    let mut controller = match &cli.config {
        Some(path) => load_admission_controller(path).with_context(|| format!("Failed to load admission configuration '{}'", path.display()))?,
        None => {
            log::info!("No admission configuration given, using the default policy.");
            AdmissionController::default()
        }
    };

    let reservations = match &cli.requests {
        Some(path) => load_reservations(path).with_context(|| format!("Failed to load reservation requests '{}'", path.display()))?,
        None => demo_reservations(),
    };

    let total = reservations.len();
    let mut accepted = 0;

    for reservation in reservations {
        let line = reservation.to_string();

        match controller.admit(reservation) {
            Admission::Accepted => {
                accepted += 1;
                println!("{} {}", "ACCEPTED".green().bold(), line);
            }
            Admission::Rejected(rejection) => {
                println!("{} {} -> {}", "REJECTED".red().bold(), line, rejection);
            }
        }
    }

    println!("{} of {} reservations admitted.", accepted, total);
    log::info!("Processed {} reservation requests, {} admitted, {} committed in total.", total, accepted, controller.len());

    Ok(())
}
