//! Blocks command
//!
//! Usage: dumpalign blocks <PATH>

use clap::Args;
use dumpalign_core::blocks::parse_blocks;
use dumpalign_store::files::read_working_file;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Dump file to segment
    pub path: PathBuf,
}

/// Execute blocks command
pub fn execute(args: BlocksArgs) -> Result<(), Box<dyn std::error::Error>> {
    let working = read_working_file(&args.path)?
        .ok_or_else(|| format!("{} does not exist", args.path.display()))?;

    for block in parse_blocks(&working.text) {
        println!("{:>6} {:>4}  {}", block.start, block.len(), block.first_line());
    }
    Ok(())
}
