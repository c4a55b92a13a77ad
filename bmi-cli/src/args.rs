use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "bmi", about = "Body mass index calculator")]
pub struct Cli {
    /// log4rs configuration file
    #[arg(long, global = true, default_value = "log4rs.yml")]
    pub log_config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Compute and classify the BMI of one person
    Evaluate {
        #[arg(long)]
        name: String,
        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,
        /// Height in meters
        #[arg(long, allow_hyphen_values = true)]
        height: String,
    },
    /// Print the data principles
    Principles,
}

#[derive(Debug, Parser)]
#[command(name = "evaluate-json", about = "Evaluate a JSON array of BMI forms")]
pub struct BatchCli {
    /// JSON file holding an array of {"name", "weight", "height"} objects
    #[arg(default_value = "forms.json")]
    pub file: PathBuf,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}
