use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tripweaver::TripWeaverError;
use tripweaver::cli::{Cli, Command, PlanArgs};
use tripweaver::config::TripWeaverConfig;
use tripweaver::models::TripPlan;
use tripweaver::planner::{TripPlanner, TripRequest};
use tripweaver::report;
use tripweaver::route::total_route_km;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let friendly = e
            .downcast_ref::<TripWeaverError>()
            .map_or_else(|| e.to_string(), TripWeaverError::user_message);
        eprintln!("Error: {friendly}");
        tracing::debug!("Full error chain: {e:?}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<()> {
    let config = TripWeaverConfig::load_from_path(cli.config.clone())?;
    init_tracing(&config, cli.verbose);

    match cli.command {
        Command::Plan(args) => plan_trip(&config, args).await,
    }
}

/// Initialize the tracing subscriber from the logging config.
///
/// An explicit `RUST_LOG` wins over both the config and `--verbose`.
fn init_tracing(config: &TripWeaverConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn plan_trip(config: &TripWeaverConfig, args: PlanArgs) -> Result<()> {
    let request = TripRequest {
        destinations: args.destinations,
        num_days: args.days.unwrap_or(config.defaults.num_days),
        route_mode: args.route.into(),
    };

    println!(
        "Planning a {}-day trip across {} destinations...",
        request.num_days,
        request.destinations.len()
    );

    let planner = TripPlanner::new(config)?;
    let plan = planner.plan(&request).await?;

    print_summary(&plan);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.defaults.output));
    report::write_html_report(&plan, &output)?;
    println!("Trip report written to {}", output.display());

    if args.open {
        open::that(&output).with_context(|| "Failed to open the report in a browser")?;
    }

    Ok(())
}

fn print_summary(plan: &TripPlan) {
    println!();
    println!("Visiting order:");
    for (idx, point) in plan.route.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            idx + 1,
            point.display_name,
            point.format_coordinates()
        );
    }

    match plan.route_distance_km {
        Some(km) => println!("Road distance: {km:.0} km"),
        None => println!(
            "Great-circle distance: {:.0} km",
            total_route_km(&plan.route)
        ),
    }

    println!();
    for city in &plan.cities {
        match &city.generation_error {
            Some(message) => println!("  {} - {}", city.place.display_name, message),
            None => println!(
                "  {} - {} days planned",
                city.place.display_name, city.days_allocated
            ),
        }
    }
}
