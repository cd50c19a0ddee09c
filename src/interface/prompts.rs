use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::pricing::constants::{DEFAULT_UNIT_PRICE, PRICE_TABLE};
use crate::pricing::{match_price, normalize_name};

/// Interactive price lookup loop.
///
/// Prompts for ingredient lines until the user enters an empty one. Each line
/// is normalized and resolved against the price table; when the fuzzy match
/// comes up empty, near-miss table keys are offered as suggestions.
pub fn run_price_lookup() -> Result<()> {
    loop {
        let input: String = Input::new()
            .with_prompt("Enter an ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let name = normalize_name(input);
        if name.is_empty() {
            println!("Nothing left of '{}' after stripping descriptors.", input);
            continue;
        }

        if let Some((key, price)) = match_price(&name) {
            println!("{} -> ${:.2} (matched '{}')", name, price, key);
            continue;
        }

        match suggest_key(&name)? {
            Some((key, price)) => println!("{} -> ${:.2} (matched '{}')", name, price, key),
            None => println!(
                "No table match for '{}'; using default price ${:.2}.",
                name, DEFAULT_UNIT_PRICE
            ),
        }
    }

    Ok(())
}

/// Offer near-miss table keys for a name the fuzzy matcher rejected.
fn suggest_key(name: &str) -> Result<Option<(&'static str, f64)>> {
    let mut candidates: Vec<(&'static str, f64, f64)> = PRICE_TABLE
        .iter()
        .map(|(key, price)| (*key, *price, jaro_winkler(key, name)))
        .filter(|(_, _, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let (key, price, _) = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", key))
            .default(true)
            .interact()?;

        return Ok(confirm.then_some((key, price)));
    }

    let options: Vec<&'static str> = candidates.iter().take(5).map(|(key, _, _)| *key).collect();

    let mut selection_options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        let key = options[selection];
        let price = candidates[selection].1;
        Ok(Some((key, price)))
    } else {
        Ok(None)
    }
}
