// ABOUTME: DesiTracker CLI - energy targets, meal plans and food preference management
// ABOUTME: Human-readable output by default, --json for machine consumption
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DesiTracker contributors
//!
//! Usage:
//! ```bash
//! # Daily calorie and macro targets
//! desi-cli targets --age 30 --weight 70 --height 175 --sex male --activity sedentary --goal maintain
//!
//! # Save preferences, then plan a day
//! desi-cli preferences set --user <uuid> --proteins "Egg (Whole),Chicken Breast (Uncooked)" --carbs "Oats,Basmati Rice"
//! desi-cli plan --user <uuid> --age 30 --weight 70 --height 175 --sex male --activity sedentary --goal maintain --json
//!
//! # Browse the catalog
//! desi-cli catalog --category protein
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use desi_core::constants::service_names;
use desi_core::errors::{AppResult, ErrorResponse};
use desi_core::models::{ActivityLevel, BiologicalSex, FoodCategory, Goal, UserProfile};
use desi_tracker::config::AppConfig;
use desi_tracker::preferences::repository_from_config;
use desi_tracker::services::PlanningService;
use std::process::ExitCode;
use tracing::error;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "desi-cli",
    about = "DesiTracker calorie targets and meal planning",
    long_about = "Compute daily calorie targets, manage food preferences and generate South-Asian meal plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute BMR, TDEE, daily calories and macro targets
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate today's meal plan from saved preferences
    Plan {
        /// User id
        #[arg(long)]
        user: Uuid,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Food preference management
    Preferences {
        #[command(subcommand)]
        action: PreferencesCommand,
    },

    /// List catalog foods
    Catalog {
        /// Only show one category (protein, carb, fat, vegetable, fruit)
        #[arg(long)]
        category: Option<FoodCategory>,
    },
}

#[derive(Subcommand)]
enum PreferencesCommand {
    /// Replace a user's preferences
    Set {
        /// User id
        #[arg(long)]
        user: Uuid,

        /// Protein labels (comma-separated)
        #[arg(long, value_delimiter = ',')]
        proteins: Vec<String>,

        /// Carb labels (comma-separated)
        #[arg(long, value_delimiter = ',')]
        carbs: Vec<String>,

        /// Fat labels (comma-separated)
        #[arg(long, value_delimiter = ',')]
        fats: Vec<String>,

        /// Vegetable labels (comma-separated)
        #[arg(long, value_delimiter = ',')]
        vegetables: Vec<String>,

        /// Fruit labels (comma-separated)
        #[arg(long, value_delimiter = ',')]
        fruits: Vec<String>,
    },

    /// Show a user's preferences
    Show {
        /// User id
        #[arg(long)]
        user: Uuid,
    },
}

/// Biometric profile flags
#[derive(Args)]
struct ProfileArgs {
    /// Age in years
    #[arg(long)]
    age: u32,

    /// Weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in centimeters
    #[arg(long)]
    height: f64,

    /// Biological sex (male, female)
    #[arg(long)]
    sex: BiologicalSex,

    /// Activity level (sedentary, lightly_active, moderately_active, very_active, extremely_active)
    #[arg(long)]
    activity: ActivityLevel,

    /// Goal (lose, maintain, gain)
    #[arg(long)]
    goal: Goal,
}

impl ProfileArgs {
    fn to_profile(&self) -> UserProfile {
        UserProfile::new(
            self.age,
            self.weight,
            self.height,
            self.sex,
            self.activity,
            self.goal,
        )
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => return report(&e, cli.json),
    };

    let mut logging = config.logging.clone().with_service_name(service_names::DESI_CLI);
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command, &config, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "Command failed: {}", e.message);
            report(&e, cli.json)
        }
    }
}

async fn run(command: Command, config: &AppConfig, json: bool) -> AppResult<()> {
    let service = PlanningService::new(repository_from_config(config));

    match command {
        Command::Targets { profile } => {
            commands::planning::targets(&service, &profile.to_profile(), json)
        }
        Command::Plan { user, profile } => {
            commands::planning::plan(&service, user, &profile.to_profile(), json).await
        }
        Command::Preferences { action } => match action {
            PreferencesCommand::Set {
                user,
                proteins,
                carbs,
                fats,
                vegetables,
                fruits,
            } => {
                let preferences = desi_core::models::FoodPreferenceSet {
                    proteins,
                    carbs,
                    fats,
                    vegetables,
                    fruits,
                };
                commands::preferences::set(&service, user, preferences, json).await
            }
            PreferencesCommand::Show { user } => {
                commands::preferences::show(&service, user, json).await
            }
        },
        Command::Catalog { category } => commands::catalog::list(&service, category, json),
    }
}

fn report(error: &desi_core::errors::AppError, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
            Ok(body) => println!("{body}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    } else {
        eprintln!("Error: {}", error.message);
    }
    ExitCode::FAILURE
}
