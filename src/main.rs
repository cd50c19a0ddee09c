use std::path::{Path, PathBuf};

use clap::Parser;

use smart_grocer_rs::analyzer::analyze_plan;
use smart_grocer_rs::cli::{Cli, Command};
use smart_grocer_rs::error::Result;
use smart_grocer_rs::interface::{
    display_organized_list, display_price_table, display_shopping_list, run_price_lookup,
};
use smart_grocer_rs::listing::{organize_records, write_analysis_csv, write_analysis_json};
use smart_grocer_rs::storage::load_plan;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Analyze {
            organized,
            csv,
            json,
        } => cmd_analyze(&cli.file, organized, csv.as_deref(), json.as_deref()),
        Command::Lookup => run_price_lookup(),
        Command::Prices { filter } => {
            display_price_table(filter.as_deref());
            Ok(())
        }
    }
}

/// Analyze a meal plan file and display the shopping list.
fn cmd_analyze(
    file_path: &str,
    organized: bool,
    csv: Option<&Path>,
    json: Option<&Path>,
) -> Result<()> {
    let path = PathBuf::from(file_path);

    if !path.exists() {
        eprintln!("Meal plan file not found: {}", file_path);
        eprintln!("Provide one with --file, or create meal_plan.json in the current directory.");
        return Ok(());
    }

    let plan = load_plan(&path)?;
    println!("Loaded {} meals", plan.meal_count());

    let records = analyze_plan(&plan);

    if organized {
        let list = organize_records(&records);
        display_organized_list(&list);
    } else {
        display_shopping_list(&records);
    }

    if let Some(csv_path) = csv {
        write_analysis_csv(&records, csv_path)?;
        println!("Analysis written to {}", csv_path.display());
    }

    if let Some(json_path) = json {
        write_analysis_json(&records, json_path)?;
        println!("Analysis written to {}", json_path.display());
    }

    Ok(())
}
