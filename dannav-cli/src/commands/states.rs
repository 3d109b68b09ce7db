//! States command - list state codes accepted in DANs.

use console::style;

use dannav::state::STATES;

use crate::error::CliError;

/// Run the states command.
pub fn run() -> Result<(), CliError> {
    println!(
        "{}",
        style(format!("{:<6} {:<6} {}", "CODE", "ABBR", "NAME")).bold()
    );
    for state in STATES.iter() {
        println!("{:<6} {:<6} {}", state.code, state.abbreviation, state.name);
    }
    println!();
    println!("Names and abbreviations are accepted case-insensitively by 'dannav encode'.");
    Ok(())
}
