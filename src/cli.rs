//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vsrecipe - Vintage Story recipe designer
///
/// Build a 3x3 crafting recipe against your local game assets and export it
/// as a JSON5 document.
#[derive(Parser, Debug)]
#[command(
    name = "vsrecipe",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Vintage Story crafting-recipe designer for the terminal",
    long_about = "vsrecipe scans your Vintage Story installation for item and block codes, \
                  lets you assemble a 3x3 crafting grid with wildcard and variant support, \
                  and exports the recipe as game-ready JSON5.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  vsrecipe discover --root ~/Vintagestory\n    \
                  vsrecipe codes --filter ingot\n    \
                  vsrecipe variants game:ingot-*\n    \
                  vsrecipe edit\n    \
                  vsrecipe export --out recipe.json5"
)]
pub struct Cli {
    /// Game folder (or assets/survival directly) to search for definitions
    #[arg(long, short = 'r', global = true)]
    pub root: Option<String>,

    /// Environment variable consulted when --root is not given
    #[arg(long, global = true, default_value = crate::discovery::DEFAULT_ENV_VAR)]
    pub env_var: String,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Locate the asset root and report what was found
    Discover,

    /// List discovered item/block codes for autocomplete
    Codes(CodesArgs),

    /// List known variant tokens for a wildcarded code
    Variants(VariantsArgs),

    /// Interactively edit a recipe
    Edit(EditArgs),

    /// Export a recipe as JSON5
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the codes command
#[derive(Parser, Debug)]
pub struct CodesArgs {
    /// Only show codes containing this substring (case-insensitive)
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Emit the pool as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the variants command
#[derive(Parser, Debug)]
pub struct VariantsArgs {
    /// Identifier pattern, e.g. game:ingot-* (the trailing * is optional)
    pub pattern: String,

    /// Emit the tokens as a JSON object keyed by the base
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the edit command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Recipe file to edit (created on save if missing)
    #[arg(long, short = 'f', default_value = crate::config::DEFAULT_RECIPE_FILE)]
    pub file: PathBuf,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Recipe file to export; a missing file exports an empty recipe
    #[arg(long, short = 'f', default_value = crate::config::DEFAULT_RECIPE_FILE)]
    pub file: PathBuf,

    /// Write the JSON5 document here instead of stdout
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
