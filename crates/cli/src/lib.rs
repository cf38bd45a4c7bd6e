pub mod commands;

use chrono::Local;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::commands::{milestones::MilestonesArgs, recommend::RecommendArgs};

#[derive(Debug, Parser)]
#[command(
    name = "babywear",
    about = "Babywear recommender CLI",
    long_about = "Recommend baby clothing by age and temperature, project milestones, and inspect runtime configuration.",
    after_help = "Examples:\n  babywear recommend --birth-date 2025-10-01 --shop uniqlo\n  babywear milestones --birth-date 2025-10-01 --json\n  babywear doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Recommend items for the child's age on a target date")]
    Recommend {
        #[arg(long, help = "Birth date in YYYY-MM-DD format")]
        birth_date: String,
        #[arg(long, help = "Date to dress for (defaults to today)")]
        target_date: Option<String>,
        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Temperature in °C (defaults to the monthly estimate)"
        )]
        temperature: Option<String>,
        #[arg(long, help = "Shop key used to translate item names")]
        shop: Option<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Project recommendations for every month from birth to 24 months")]
    Milestones {
        #[arg(long, help = "Birth date in YYYY-MM-DD format")]
        birth_date: String,
        #[arg(long, help = "Shop key used to translate item names")]
        shop: Option<String>,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and check the catalog covers every recommendable item")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let result = match cli.command {
        Command::Recommend { birth_date, target_date, temperature, shop, json } => {
            commands::recommend::run(
                RecommendArgs { birth_date, target_date, temperature, shop, json },
                today,
            )
        }
        Command::Milestones { birth_date, shop, json } => {
            commands::milestones::run(MilestonesArgs { birth_date, shop, json })
        }
        Command::Config => commands::config::run(),
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
