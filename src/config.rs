//! Recipe file persistence (recipe.yaml)

use std::path::Path;

use crate::error::{Result, VsrecipeError};
use crate::recipe::RecipeGrid;

/// Default recipe filename in the working directory
pub const DEFAULT_RECIPE_FILE: &str = "recipe.yaml";

/// Load a recipe file, failing when it does not exist
pub fn load(path: &Path) -> Result<RecipeGrid> {
    if !path.is_file() {
        return Err(VsrecipeError::RecipeNotFound {
            path: path.display().to_string(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&text).map_err(|e| VsrecipeError::RecipeParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Load a recipe file, falling back to an empty grid when it is missing.
///
/// Export must succeed on a fresh directory: an absent recipe yields the
/// placeholder output code and an empty ingredient mapping.
pub fn load_or_default(path: &Path) -> Result<RecipeGrid> {
    match load(path) {
        Ok(grid) => Ok(grid),
        Err(VsrecipeError::RecipeNotFound { .. }) => Ok(RecipeGrid::default()),
        Err(e) => Err(e),
    }
}

/// Save a recipe to disk as YAML
pub fn save(path: &Path, grid: &RecipeGrid) -> Result<()> {
    let yaml = serde_yaml::to_string(grid)?;
    std::fs::write(path, yaml).map_err(|e| VsrecipeError::RecipeWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
