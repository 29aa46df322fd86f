use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::models::ParseConfig;

/// meal-plan: turn generated meal-plan text into structured days and meals.
#[derive(Parser, Debug)]
#[command(name = "meal-plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the saved meal plan library JSON file.
    #[arg(short, long, default_value = "meal_plans.json")]
    pub library: PathBuf,

    /// Log parsing decisions.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Target shape of the parsed plan.
#[derive(Args, Debug, Clone)]
pub struct ShapeArgs {
    /// Number of days in the plan.
    #[arg(long, default_value = "7")]
    pub days: usize,

    /// Meals per day (Breakfast, Lunch, Dinner, Snack, then extra snacks).
    #[arg(long, default_value = "3")]
    pub meals_per_day: usize,

    /// Daily calorie target.
    #[arg(long, default_value = "2000")]
    pub calories: u32,
}

impl ShapeArgs {
    pub fn to_config(&self) -> Result<ParseConfig> {
        ParseConfig::new(self.days, self.meals_per_day, self.calories)
    }
}

/// How a parsed plan is written out.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Share,
    Json,
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a meal plan text file ("-" reads stdin).
    Parse {
        file: PathBuf,

        #[command(flatten)]
        shape: ShapeArgs,

        /// Seed for synthesised titles.
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print a fully synthesised plan.
    Sample {
        #[command(flatten)]
        shape: ShapeArgs,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Save a meal plan text file to the library.
    Save {
        file: PathBuf,

        /// Name to save under (prompted when omitted).
        #[arg(short, long)]
        name: Option<String>,

        #[command(flatten)]
        shape: ShapeArgs,
    },

    /// List saved meal plans.
    List,

    /// Parse and show a saved meal plan.
    Show {
        name: String,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Remove a saved meal plan.
    Remove { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_defaults() {
        let cli = Cli::try_parse_from(["meal-plan", "parse", "plan.txt"]).unwrap();
        match cli.command {
            Command::Parse {
                shape, seed, format, ..
            } => {
                assert_eq!(shape.days, 7);
                assert_eq!(shape.meals_per_day, 3);
                assert_eq!(shape.calories, 2000);
                assert_eq!(seed, None);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.library, PathBuf::from("meal_plans.json"));
    }

    #[test]
    fn test_sample_with_shape() {
        let cli = Cli::try_parse_from([
            "meal-plan",
            "--verbose",
            "sample",
            "--days",
            "3",
            "--meals-per-day",
            "2",
            "--calories",
            "1800",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Sample { shape, format, .. } => {
                let config = shape.to_config().unwrap();
                assert_eq!(config, ParseConfig::new(3, 2, 1800).unwrap());
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_zero_days_rejected_by_config() {
        let cli = Cli::try_parse_from(["meal-plan", "sample", "--days", "0"]).unwrap();
        match cli.command {
            Command::Sample { shape, .. } => assert!(shape.to_config().is_err()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_huge_day_count_rejected_by_config() {
        let cli = Cli::try_parse_from(["meal-plan", "sample", "--days", "100000"]).unwrap();
        match cli.command {
            Command::Sample { shape, .. } => assert!(matches!(
                shape.to_config(),
                Err(crate::error::MealPlanError::InvalidConfig(_))
            )),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
