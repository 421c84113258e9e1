//! Recipe domain types
//!
//! The 3×3 grid of ingredient slots plus the recipe-level settings
//! (shapeless flag, output stack) and the explicit symbol table. All
//! mutation is synchronous and in-memory.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VsrecipeError};

pub mod symbols;
pub mod wildcard;

pub use symbols::SymbolTable;

/// Crafting grid dimension
pub const GRID_SIZE: usize = 3;

/// Output code emitted when the user leaves the result blank
pub const OUTPUT_PLACEHOLDER: &str = "game:__set_output__";

fn default_quantity() -> u32 {
    1
}

/// One filled grid slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Identifier pattern, e.g. `game:plank` or `game:ingot-*`
    #[serde(default)]
    pub code: String,

    /// Stack size consumed, at least 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Tool ingredients lose durability instead of being consumed
    #[serde(default)]
    pub is_tool: bool,

    /// Durability points spent per craft, tools only
    #[serde(default)]
    pub tool_cost: u32,

    /// Single letter A-Z; shared across slots holding the same code
    #[serde(default)]
    pub symbol: Option<char>,

    /// Optional display name carried into the exported recipe
    #[serde(default)]
    pub name: String,

    /// Variant tokens pinned on a wildcarded code; non-empty implies a
    /// `-*` suffix, empty plus wildcard implies a bare `*` suffix
    #[serde(default)]
    pub allowed_variants: Vec<String>,
}

impl Default for Ingredient {
    fn default() -> Self {
        Self {
            code: String::new(),
            quantity: 1,
            is_tool: false,
            tool_cost: 0,
            symbol: None,
            name: String::new(),
            allowed_variants: Vec::new(),
        }
    }
}

impl Ingredient {
    /// Parse a quantity field, clamping to at least 1 on garbage input
    pub fn set_quantity_from_str(&mut self, raw: &str) {
        self.quantity = raw.trim().parse::<u32>().map_or(1, |q| q.max(1));
    }

    /// Parse a tool-cost field, falling back to 0 on garbage input
    pub fn set_tool_cost_from_str(&mut self, raw: &str) {
        self.tool_cost = raw.trim().parse::<u32>().unwrap_or(0);
    }
}

/// The whole editable recipe state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeGrid {
    #[serde(default)]
    pub shapeless: bool,

    /// Result item code; empty means the export placeholder
    #[serde(default)]
    pub output_code: String,

    #[serde(default = "default_quantity")]
    pub output_quantity: u32,

    #[serde(default)]
    pub slots: [[Option<Ingredient>; GRID_SIZE]; GRID_SIZE],

    /// Remembered code-to-letter assignments
    #[serde(default)]
    pub symbols: SymbolTable,
}

impl Default for RecipeGrid {
    fn default() -> Self {
        Self {
            shapeless: false,
            output_code: String::new(),
            output_quantity: 1,
            slots: Default::default(),
            symbols: SymbolTable::default(),
        }
    }
}

impl RecipeGrid {
    pub fn get(&self, row: usize, col: usize) -> Result<&Option<Ingredient>> {
        self.slots
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(VsrecipeError::SlotOutOfRange { row, col })
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Option<Ingredient>> {
        self.slots
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(VsrecipeError::SlotOutOfRange { row, col })
    }

    /// (code, symbol) pairs for every slot that has both
    fn symbol_pairs(&self) -> Vec<(String, char)> {
        let mut pairs = Vec::new();
        for row in &self.slots {
            for slot in row.iter().flatten() {
                if let Some(sym) = slot.symbol {
                    pairs.push((slot.code.clone(), sym));
                }
            }
        }
        pairs
    }

    /// Assign a code to a slot, creating the ingredient if the slot was
    /// empty and auto-assigning a symbol if it has none yet
    pub fn set_item(&mut self, row: usize, col: usize, code: &str) -> Result<()> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(VsrecipeError::SlotOutOfRange { row, col });
        }
        let pairs = self.symbol_pairs();
        let slot = &mut self.slots[row][col];
        let ing = slot.get_or_insert_with(Ingredient::default);
        ing.code = code.to_string();
        if ing.symbol.is_none() {
            ing.symbol = Some(self.symbols.assign_for_code(code, &pairs));
        }
        Ok(())
    }

    /// Set a slot's symbol, rejecting letters already used by a different
    /// code. On rejection nothing is mutated. On success the letter is
    /// propagated to every slot holding the same code.
    pub fn set_symbol(&mut self, row: usize, col: usize, letter: char) -> Result<()> {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(VsrecipeError::InvalidSymbol {
                value: letter.to_string(),
            });
        }

        let code = match self.get(row, col)? {
            Some(ing) => ing.code.clone(),
            None => return Ok(()),
        };

        for (rr, grid_row) in self.slots.iter().enumerate() {
            for (cc, other) in grid_row.iter().enumerate() {
                if (rr, cc) == (row, col) {
                    continue;
                }
                if let Some(other) = other {
                    if other.code != code && other.symbol == Some(letter) {
                        return Err(VsrecipeError::DuplicateSymbol { symbol: letter });
                    }
                }
            }
        }

        self.symbols.remember(&code, letter);
        for grid_row in &mut self.slots {
            for slot in grid_row.iter_mut().flatten() {
                if slot.code == code {
                    slot.symbol = Some(letter);
                }
            }
        }
        Ok(())
    }

    /// Clear one slot
    pub fn clear_slot(&mut self, row: usize, col: usize) -> Result<()> {
        *self.get_mut(row, col)? = None;
        Ok(())
    }

    /// Clear the grid, symbol memory, and output settings
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Give every coded slot a symbol; used before building the pattern
    pub fn ensure_symbols(&mut self) {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let needs = matches!(
                    &self.slots[row][col],
                    Some(ing) if !ing.code.is_empty() && ing.symbol.is_none()
                );
                if needs {
                    let pairs = self.symbol_pairs();
                    if let Some(ing) = &mut self.slots[row][col] {
                        let code = ing.code.clone();
                        ing.symbol = Some(self.symbols.assign_for_code(&code, &pairs));
                    }
                }
            }
        }
    }

    /// Count of slots holding a coded ingredient
    pub fn filled_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .flatten()
            .filter(|ing| !ing.code.is_empty())
            .count()
    }
}
