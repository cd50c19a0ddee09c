use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SmartGrocer — estimates bulk-buy savings for a meal plan's shopping list.
#[derive(Parser, Debug)]
#[command(name = "smart_grocer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal plan JSON file.
    #[arg(short, long, default_value = "meal_plan.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a meal plan and print the annotated shopping list.
    Analyze {
        /// Group the list by store department instead of a flat list.
        #[arg(long)]
        organized: bool,

        /// Also write the per-ingredient analysis to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also write the full analysis to a JSON file.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Look up estimated prices for ingredients interactively.
    Lookup,

    /// Print the built-in ingredient price table.
    Prices {
        /// Only show entries containing this substring.
        #[arg(long)]
        filter: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Analyze {
            organized: false,
            csv: None,
            json: None,
        }
    }
}
