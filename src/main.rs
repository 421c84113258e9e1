//! vsrecipe - Vintage Story recipe designer
//!
//! Scans a local Vintage Story installation for item and block codes, lets
//! the user assemble a 3x3 crafting grid with wildcard/variant support, and
//! exports the recipe as game-ready JSON5.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod discovery;
mod error;
mod export;
mod progress;
mod recipe;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let env_var = cli.env_var.as_str();
    let root = cli.root.as_deref();

    let result = match cli.command {
        Commands::Discover => commands::discover::run(env_var, root, cli.verbose),
        Commands::Codes(args) => commands::codes::run(env_var, root, args),
        Commands::Variants(args) => commands::variants::run(env_var, root, args),
        Commands::Edit(args) => commands::edit::run(env_var, root, args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
