//! Edit command implementation
//!
//! Interactive recipe editing: slot-by-slot code entry with autocomplete
//! backed by the discovery pool, wildcard toggling, variant picking backed
//! by the corpus, and live symbol validation. All edits happen in memory
//! and are written back to the recipe file on "Save & quit".

use console::Style;
use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::{Confirm, CustomUserError, MultiSelect, Select, Text};

use crate::cli::EditArgs;
use crate::discovery::Discovery;
use crate::error::Result;
use crate::recipe::{GRID_SIZE, RecipeGrid, wildcard};
use crate::{config, export};

/// Case-insensitive substring completion over the discovery pool
#[derive(Clone)]
struct PoolCompleter {
    items: Vec<String>,
}

impl Autocomplete for PoolCompleter {
    fn get_suggestions(&mut self, input: &str) -> std::result::Result<Vec<String>, CustomUserError> {
        let needle = input.to_lowercase();
        Ok(self
            .items
            .iter()
            .filter(|item| item.to_lowercase().contains(&needle))
            .take(8)
            .cloned()
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> std::result::Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

/// Run edit command
pub fn run(env_var: &str, root: Option<&str>, args: EditArgs) -> Result<()> {
    let mut discovery = Discovery::run_with_progress(Some(env_var), root, true);
    super::print_discovery_status(discovery.root.as_deref());

    let mut grid = config::load_or_default(&args.file)?;

    loop {
        println!();
        render_grid(&grid);

        let choice = Select::new(
            "Action",
            vec![
                "Edit slot",
                "Set output",
                "Toggle shapeless",
                "Add custom items",
                "Preview JSON5",
                "Reset",
                "Save & quit",
                "Quit without saving",
            ],
        )
        .prompt()?;

        match choice {
            "Edit slot" => {
                if let Some((row, col)) = pick_slot(&grid)? {
                    edit_slot(&mut grid, &discovery, row, col)?;
                }
            }
            "Set output" => set_output(&mut grid, &discovery)?,
            "Toggle shapeless" => grid.shapeless = !grid.shapeless,
            "Add custom items" => add_custom_items(&mut discovery)?,
            "Preview JSON5" => {
                let mut preview = grid.clone();
                println!("{}", export::build_document(&mut preview));
            }
            "Reset" => {
                if Confirm::new("Clear the grid and output?")
                    .with_default(false)
                    .prompt()?
                {
                    grid.reset();
                }
            }
            "Save & quit" => {
                config::save(&args.file, &grid)?;
                println!("Saved {}", args.file.display());
                break;
            }
            _ => break,
        }
    }
    Ok(())
}

fn render_grid(grid: &RecipeGrid) {
    for row in &grid.slots {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| match slot {
                Some(ing) if !ing.code.is_empty() => {
                    ing.symbol.map_or("?".to_string(), |s| s.to_string())
                }
                _ => "_".to_string(),
            })
            .collect();
        println!("  {}", Style::new().bold().apply_to(cells.join(" ")));
    }
    let output = if grid.output_code.is_empty() {
        "(not set)".to_string()
    } else {
        format!("{} x{}", grid.output_code, grid.output_quantity)
    };
    println!(
        "  {} {}   {} {}   {} {}/{}",
        Style::new().bold().apply_to("Output:"),
        output,
        Style::new().bold().apply_to("Shapeless:"),
        grid.shapeless,
        Style::new().bold().apply_to("Filled:"),
        grid.filled_count(),
        GRID_SIZE * GRID_SIZE
    );
}

fn slot_label(grid: &RecipeGrid, row: usize, col: usize) -> String {
    match &grid.slots[row][col] {
        Some(ing) if !ing.code.is_empty() => format!(
            "{}x{}  [{}] {}",
            col + 1,
            row + 1,
            ing.symbol.unwrap_or('?'),
            ing.code
        ),
        _ => format!("{}x{}  (empty)", col + 1, row + 1),
    }
}

fn pick_slot(grid: &RecipeGrid) -> Result<Option<(usize, usize)>> {
    let labels: Vec<String> = (0..GRID_SIZE * GRID_SIZE)
        .map(|i| slot_label(grid, i / GRID_SIZE, i % GRID_SIZE))
        .collect();
    let picked = Select::new("Slot", labels.clone()).prompt_skippable()?;
    Ok(picked
        .and_then(|label| labels.iter().position(|l| *l == label))
        .map(|i| (i / GRID_SIZE, i % GRID_SIZE)))
}

fn edit_slot(
    grid: &mut RecipeGrid,
    discovery: &Discovery,
    row: usize,
    col: usize,
) -> Result<()> {
    loop {
        let (filled, is_tool, variants_offered) = {
            let slot = &grid.slots[row][col];
            let filled = slot.as_ref().is_some_and(|i| !i.code.is_empty());
            let is_tool = slot.as_ref().is_some_and(|i| i.is_tool);
            let offered = slot
                .as_ref()
                .and_then(|i| wildcard::variant_key(&i.code))
                .and_then(|key| discovery.corpus.get(&key))
                .is_some();
            (filled, is_tool, offered)
        };

        let mut options = vec!["Set code"];
        if filled {
            options.extend(["Quantity", "Toggle tool"]);
            if is_tool {
                options.push("Tool cost");
            }
            options.push("Wildcard");
            if variants_offered {
                options.push("Variants");
            }
            options.extend(["Symbol", "Name", "Clear slot"]);
        }
        options.push("Back");

        let choice = Select::new(&slot_label(grid, row, col), options).prompt()?;
        match choice {
            "Set code" => {
                let code = Text::new("Item code:")
                    .with_autocomplete(PoolCompleter {
                        items: discovery.pool.clone(),
                    })
                    .prompt()?;
                let code = code.trim();
                if !code.is_empty() {
                    grid.set_item(row, col, code)?;
                }
            }
            "Quantity" => {
                let raw = Text::new("Quantity:").prompt()?;
                if let Some(ing) = &mut grid.slots[row][col] {
                    ing.set_quantity_from_str(&raw);
                }
            }
            "Toggle tool" => {
                if let Some(ing) = &mut grid.slots[row][col] {
                    ing.is_tool = !ing.is_tool;
                }
            }
            "Tool cost" => {
                let raw = Text::new("Tool durability cost:").prompt()?;
                if let Some(ing) = &mut grid.slots[row][col] {
                    ing.set_tool_cost_from_str(&raw);
                }
            }
            "Wildcard" => {
                let current = grid.slots[row][col]
                    .as_ref()
                    .is_some_and(|i| wildcard::state_of(i) != wildcard::WildcardState::Bare);
                let enabled = Confirm::new("Allow variants (*)?")
                    .with_default(current)
                    .prompt()?;
                if let Some(ing) = &mut grid.slots[row][col] {
                    wildcard::set_wildcard(ing, enabled);
                }
            }
            "Variants" => pick_variants(grid, discovery, row, col)?,
            "Symbol" => {
                let raw = Text::new("Symbol (A-Z):").prompt()?;
                apply_symbol(grid, row, col, &raw);
            }
            "Name" => {
                let name = Text::new("Key (name):").prompt()?;
                if let Some(ing) = &mut grid.slots[row][col] {
                    ing.name = name.trim().to_string();
                }
            }
            "Clear slot" => {
                grid.clear_slot(row, col)?;
                break;
            }
            _ => break,
        }
    }
    Ok(())
}

fn pick_variants(
    grid: &mut RecipeGrid,
    discovery: &Discovery,
    row: usize,
    col: usize,
) -> Result<()> {
    let (options, defaults) = {
        let Some(ing) = &grid.slots[row][col] else {
            return Ok(());
        };
        let Some(tokens) = wildcard::variant_key(&ing.code)
            .and_then(|key| discovery.corpus.get(&key).cloned())
        else {
            return Ok(());
        };
        let options: Vec<String> = tokens.into_iter().collect();
        let defaults: Vec<usize> = options
            .iter()
            .enumerate()
            .filter(|(_, opt)| ing.allowed_variants.contains(opt))
            .map(|(i, _)| i)
            .collect();
        (options, defaults)
    };

    let selected = MultiSelect::new("Variants", options)
        .with_default(&defaults)
        .prompt()?;
    if let Some(ing) = &mut grid.slots[row][col] {
        wildcard::set_variants(ing, selected);
    }
    Ok(())
}

/// Apply a symbol edit: first letter wins, rejections are reported with the
/// previous value left intact.
fn apply_symbol(grid: &mut RecipeGrid, row: usize, col: usize, raw: &str) {
    let Some(letter) = raw.chars().find(|c| c.is_alphabetic()) else {
        return;
    };
    if let Err(e) = grid.set_symbol(row, col, letter.to_ascii_uppercase()) {
        println!("{} {e}", Style::new().red().apply_to("rejected:"));
    }
}

fn set_output(grid: &mut RecipeGrid, discovery: &Discovery) -> Result<()> {
    let code = Text::new("Result item code:")
        .with_initial_value(&grid.output_code)
        .with_autocomplete(PoolCompleter {
            items: discovery.pool.clone(),
        })
        .prompt()?;
    grid.output_code = code.trim().to_string();

    let raw = Text::new("Result quantity:")
        .with_initial_value(&grid.output_quantity.to_string())
        .prompt()?;
    grid.output_quantity = raw.trim().parse::<u32>().map_or(1, |q| q.max(1));
    Ok(())
}

fn add_custom_items(discovery: &mut Discovery) -> Result<()> {
    let raw = Text::new("Codes (comma or space separated):").prompt()?;
    let items: Vec<String> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect();
    if items.is_empty() {
        return Ok(());
    }
    let count = items.len();
    discovery.add_custom_items(items);
    println!("Added {count} item(s) to autocomplete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_symbol_non_ascii_letter_keeps_previous() {
        let mut grid = RecipeGrid::default();
        grid.set_item(0, 0, "game:plank").unwrap();
        let before = grid.slots[0][0].as_ref().unwrap().symbol;

        apply_symbol(&mut grid, 0, 0, "é");
        assert_eq!(grid.slots[0][0].as_ref().unwrap().symbol, before);
    }

    #[test]
    fn test_apply_symbol_takes_first_letter() {
        let mut grid = RecipeGrid::default();
        grid.set_item(0, 0, "game:plank").unwrap();

        apply_symbol(&mut grid, 0, 0, " 3p!");
        assert_eq!(grid.slots[0][0].as_ref().unwrap().symbol, Some('P'));
    }
}
