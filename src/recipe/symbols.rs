//! Symbol assignment table
//!
//! Maps item codes to their single-letter recipe symbols. The table is an
//! explicit value passed through the grid operations rather than ambient
//! state, and it is persisted with the recipe so assignments survive an
//! edit/export round trip.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Remembered `code -> letter` assignments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolTable {
    map: BTreeMap<String, char>,
}

impl SymbolTable {
    pub fn remembered(&self, code: &str) -> Option<char> {
        self.map.get(code).copied()
    }

    pub fn remember(&mut self, code: &str, letter: char) {
        self.map.insert(code.to_string(), letter);
    }

    /// Pick a symbol for a code given the `(code, symbol)` pairs currently
    /// on the grid.
    ///
    /// A remembered letter is reused unless another code on the grid holds
    /// it; otherwise the first free letter A-Z is taken and remembered.
    /// With all 26 letters exhausted the overflow letter is `X`.
    pub fn assign_for_code(&mut self, code: &str, grid_pairs: &[(String, char)]) -> char {
        let used: BTreeSet<char> = grid_pairs.iter().map(|(_, sym)| *sym).collect();
        let mut by_code: BTreeMap<&str, BTreeSet<char>> = BTreeMap::new();
        for (c, sym) in grid_pairs {
            by_code.entry(c.as_str()).or_default().insert(*sym);
        }

        if let Some(letter) = self.remembered(code) {
            let taken_by_other = used.contains(&letter)
                && !by_code.get(code).is_some_and(|set| set.contains(&letter));
            if !taken_by_other {
                return letter;
            }
        }

        for letter in 'A'..='Z' {
            if !used.contains(&letter) {
                self.remember(code, letter);
                return letter;
            }
        }
        self.remember(code, 'X');
        'X'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, char)]) -> Vec<(String, char)> {
        entries
            .iter()
            .map(|(c, s)| (c.to_string(), *s))
            .collect()
    }

    #[test]
    fn test_first_free_letter() {
        let mut table = SymbolTable::default();
        assert_eq!(table.assign_for_code("game:plank", &[]), 'A');
        assert_eq!(
            table.assign_for_code("game:log", &pairs(&[("game:plank", 'A')])),
            'B'
        );
    }

    #[test]
    fn test_remembered_letter_reused() {
        let mut table = SymbolTable::default();
        table.remember("game:plank", 'P');
        assert_eq!(table.assign_for_code("game:plank", &[]), 'P');
    }

    #[test]
    fn test_remembered_letter_shared_with_same_code_slots() {
        let mut table = SymbolTable::default();
        table.remember("game:plank", 'P');
        let on_grid = pairs(&[("game:plank", 'P')]);
        assert_eq!(table.assign_for_code("game:plank", &on_grid), 'P');
    }

    #[test]
    fn test_remembered_letter_stolen_by_other_code_forces_fresh() {
        let mut table = SymbolTable::default();
        table.remember("game:plank", 'A');
        let on_grid = pairs(&[("game:log", 'A')]);
        let assigned = table.assign_for_code("game:plank", &on_grid);
        assert_eq!(assigned, 'B');
    }

    #[test]
    fn test_exhausted_alphabet_overflows_to_x() {
        let mut table = SymbolTable::default();
        let on_grid: Vec<(String, char)> = ('A'..='Z')
            .enumerate()
            .map(|(i, sym)| (format!("game:item{i}"), sym))
            .collect();
        assert_eq!(table.assign_for_code("game:extra", &on_grid), 'X');
    }
}
