//! Key command
//!
//! Usage: dumpalign key <LINE>...

use clap::Args;
use dumpalign_core::normalize::fuzzy_key;

#[derive(Debug, Args)]
pub struct KeyArgs {
    /// Lines to normalize
    #[arg(required = true)]
    pub lines: Vec<String>,
}

/// Execute key command
pub fn execute(args: KeyArgs) -> Result<(), Box<dyn std::error::Error>> {
    for line in &args.lines {
        println!("{}", fuzzy_key(line));
    }
    Ok(())
}
