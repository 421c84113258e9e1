//! Error types and handling for vsrecipe
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for vsrecipe operations
#[derive(Error, Diagnostic, Debug)]
pub enum VsrecipeError {
    // Recipe file errors
    #[error("Recipe file not found: {path}")]
    #[diagnostic(
        code(vsrecipe::recipe::not_found),
        help("Run 'vsrecipe edit' to create a recipe first")
    )]
    RecipeNotFound { path: String },

    #[error("Failed to parse recipe file: {path}")]
    #[diagnostic(code(vsrecipe::recipe::parse_failed))]
    RecipeParseFailed { path: String, reason: String },

    #[error("Failed to write recipe file: {path}")]
    #[diagnostic(code(vsrecipe::recipe::write_failed))]
    RecipeWriteFailed { path: String, reason: String },

    // Slot errors
    #[error("Symbol '{symbol}' is already used by another ingredient")]
    #[diagnostic(
        code(vsrecipe::slot::duplicate_symbol),
        help("Each distinct item code needs its own letter; pick an unused one")
    )]
    DuplicateSymbol { symbol: char },

    #[error("Invalid symbol: {value}")]
    #[diagnostic(
        code(vsrecipe::slot::invalid_symbol),
        help("Symbols are single letters A-Z")
    )]
    InvalidSymbol { value: String },

    #[error("Slot {row}\u{d7}{col} is out of range")]
    #[diagnostic(code(vsrecipe::slot::out_of_range))]
    SlotOutOfRange { row: usize, col: usize },

    // Serialization errors
    #[error("YAML error: {0}")]
    #[diagnostic(code(vsrecipe::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(vsrecipe::json))]
    Json(#[from] serde_json::Error),

    // Interactive prompt errors
    #[error("Prompt failed: {0}")]
    #[diagnostic(code(vsrecipe::prompt))]
    Prompt(String),

    // IO errors
    #[error("IO error: {message}")]
    #[diagnostic(code(vsrecipe::io))]
    IoError { message: String },
}

impl From<std::io::Error> for VsrecipeError {
    fn from(err: std::io::Error) -> Self {
        VsrecipeError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for VsrecipeError {
    fn from(err: inquire::InquireError) -> Self {
        VsrecipeError::Prompt(err.to_string())
    }
}

/// Result type alias for vsrecipe operations
pub type Result<T> = std::result::Result<T, VsrecipeError>;
