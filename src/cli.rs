//! Command-line surface for tripweaver
//!
//! This module owns translation of CLI arguments into planner inputs so
//! the rest of the crate never re-parses flags.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::planner::RouteMode;

/// Multi-city trip planning with AI-generated itineraries
#[derive(Debug, Parser)]
#[command(name = "tripweaver", version)]
pub struct Cli {
    /// Emit verbose logging
    #[arg(long = "verbose", global = true, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
    /// Path to a configuration file
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plan a trip across two or more destinations
    Plan(PlanArgs),
}

/// Arguments accepted by the `plan` subcommand
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Destination name; repeat for every stop, the first is the starting point
    #[arg(
        short = 'd',
        long = "destination",
        value_name = "PLACE",
        required = true
    )]
    pub destinations: Vec<String>,
    /// Total trip length in days
    #[arg(long = "days", value_name = "N")]
    pub days: Option<u32>,
    /// Visiting-order selection
    #[arg(long = "route", value_enum, default_value_t = RouteModeArg::Optimal)]
    pub route: RouteModeArg,
    /// Report output path
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
    /// Open the report in the system browser
    #[arg(long = "open", action = clap::ArgAction::SetTrue)]
    pub open: bool,
}

/// CLI name for the visiting-order selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RouteModeArg {
    /// Nearest-neighbor ordering from the first destination
    Optimal,
    /// Keep the entered order
    Sequential,
}

impl From<RouteModeArg> for RouteMode {
    fn from(arg: RouteModeArg) -> Self {
        match arg {
            RouteModeArg::Optimal => RouteMode::Optimized,
            RouteModeArg::Sequential => RouteMode::Sequential,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_command() {
        let cli = Cli::try_parse_from([
            "tripweaver",
            "plan",
            "-d",
            "Paris",
            "-d",
            "Rome",
            "--days",
            "5",
        ])
        .unwrap();

        let Command::Plan(args) = cli.command;
        assert_eq!(args.destinations, ["Paris", "Rome"]);
        assert_eq!(args.days, Some(5));
        assert_eq!(args.route, RouteModeArg::Optimal);
        assert!(!args.open);
    }

    #[test]
    fn test_plan_requires_destinations() {
        let result = Cli::try_parse_from(["tripweaver", "plan"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_route_mode_values() {
        let cli = Cli::try_parse_from([
            "tripweaver",
            "plan",
            "-d",
            "Paris",
            "-d",
            "Rome",
            "--route",
            "sequential",
        ])
        .unwrap();

        let Command::Plan(args) = cli.command;
        assert_eq!(args.route, RouteModeArg::Sequential);
        assert_eq!(RouteMode::from(args.route), RouteMode::Sequential);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "tripweaver",
            "plan",
            "-d",
            "Paris",
            "-d",
            "Rome",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }
}
