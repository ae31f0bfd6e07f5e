//! biom-validate CLI - check BIOM-format documents.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Validate {
            files,
            strict,
            all,
            format,
        } => commands::validate::run(files, strict, all, format, cli.verbose),

        Commands::Checks { json } => commands::checks::run(json).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
