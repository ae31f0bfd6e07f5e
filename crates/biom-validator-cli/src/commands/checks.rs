//! Checks command - list the document checks in execution order.

use biom_validator::Check;
use colored::Colorize;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        let names: Vec<&str> = Check::ALL.iter().map(Check::name).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!("{}", "Checks (in order):".cyan().bold());
    for (i, check) in Check::ALL.iter().enumerate() {
        println!("  {:2}. {}", i + 1, check.name());
    }

    Ok(())
}
