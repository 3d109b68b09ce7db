//! Format command - print a DAN in canonical `CCC-SS-LLLLLLL` form.

use clap::Args;

use dannav::dan::format_dan;

use crate::error::CliError;

/// Arguments for the format command.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// DAN in any accepted form (e.g., "234 24 2396056" or 234242396056)
    pub dan: String,
}

/// Run the format command.
pub fn run(args: FormatArgs) -> Result<(), CliError> {
    println!("{}", format_dan(&args.dan)?);
    Ok(())
}
