//! dumpalign CLI
//!
//! Command-line interface for realigning regenerated binary dumps

use clap::{Parser, Subcommand};
use dumpalign_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "dumpalign")]
#[command(
    about = "dumpalign - Realign regenerated binary dumps with their git baseline",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Realign the configured dump files in place
    Align(commands::align::AlignArgs),
    /// Print the fuzzy comparison key of each line
    Key(commands::key::KeyArgs),
    /// Print the block layout of a dump file
    Blocks(commands::blocks::BlocksArgs),
}

fn main() {
    let cli = Cli::parse();

    let profile = match &cli.command {
        Commands::Align(args) if args.log_json => Profile::Production,
        _ => Profile::Development,
    };
    init(profile);

    let result = match cli.command {
        Commands::Align(args) => commands::align::execute(args),
        Commands::Key(args) => commands::key::execute(args),
        Commands::Blocks(args) => commands::blocks::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
