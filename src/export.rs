//! JSON5 recipe document emitter
//!
//! Reproduces the layout the game's modding docs use: one array holding one
//! recipe object, tab-indented, with ingredient symbols emitted in sorted
//! order. This is an output contract; the emitter never fails.

use std::collections::BTreeMap;

use crate::recipe::{GRID_SIZE, Ingredient, OUTPUT_PLACEHOLDER, RecipeGrid};

/// Comma-joined per-row symbol strings, `_` for empty cells
fn ingredient_pattern(grid: &RecipeGrid) -> String {
    let rows: Vec<String> = grid
        .slots
        .iter()
        .map(|row| {
            row.iter()
                .map(|slot| match slot {
                    Some(ing) if !ing.code.is_empty() => ing.symbol.unwrap_or('?'),
                    _ => '_',
                })
                .collect()
        })
        .collect();
    rows.join(",")
}

/// First ingredient per symbol, row-major order
fn collect_ingredients(grid: &RecipeGrid) -> BTreeMap<char, &Ingredient> {
    let mut map = BTreeMap::new();
    for row in &grid.slots {
        for ing in row.iter().flatten() {
            if ing.code.is_empty() {
                continue;
            }
            let sym = ing.symbol.unwrap_or('?');
            map.entry(sym).or_insert(ing);
        }
    }
    map
}

fn ingredient_fields(ing: &Ingredient) -> String {
    let mut inner = vec![
        r#"type: "item""#.to_string(),
        format!(r#"code: "{}""#, ing.code),
    ];
    if !ing.name.is_empty() {
        inner.push(format!(r#"name: "{}""#, ing.name));
    }
    if !ing.allowed_variants.is_empty() {
        let av = ing
            .allowed_variants
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(", ");
        inner.push(format!("allowedVariants: [ {av} ]"));
    }
    if ing.is_tool {
        inner.push("isTool: true".to_string());
        if ing.tool_cost > 0 {
            inner.push(format!("toolDurabilityCost: {}", ing.tool_cost));
        }
    }
    if ing.quantity != 1 {
        inner.push(format!("quantity: {}", ing.quantity));
    }
    inner.join(", ")
}

/// Build the complete JSON5 document for a recipe.
///
/// Symbols are ensured first so every coded slot contributes to the
/// pattern; a blank output code becomes the placeholder literal.
pub fn build_document(grid: &mut RecipeGrid) -> String {
    grid.ensure_symbols();

    let pattern = ingredient_pattern(grid);
    let ingredients = collect_ingredients(grid);

    let mut lines = vec![
        "[".to_string(),
        "\t{".to_string(),
        format!("\t\tingredientPattern: \"{pattern}\","),
        format!("\t\tshapeless: {},", grid.shapeless),
        "\t\tingredients: {".to_string(),
    ];
    for (sym, ing) in &ingredients {
        lines.push(format!("\t\t\t\"{sym}\": {{ {} }},", ingredient_fields(ing)));
    }
    if let Some(last) = lines.last_mut() {
        if last.ends_with(',') {
            last.pop();
        }
    }
    lines.push("\t\t},".to_string());
    lines.push(format!("\t\twidth: {GRID_SIZE},"));
    lines.push(format!("\t\theight: {GRID_SIZE},"));

    let out_code = grid.output_code.trim();
    let out_code = if out_code.is_empty() {
        OUTPUT_PLACEHOLDER
    } else {
        out_code
    };
    let mut out_inner = vec![
        r#"type: "item""#.to_string(),
        format!(r#"code: "{out_code}""#),
    ];
    if grid.output_quantity != 1 {
        out_inner.push(format!("quantity: {}", grid.output_quantity));
    }
    lines.push(format!("\t\toutput: {{ {} }}", out_inner.join(", ")));
    lines.push("\t},".to_string());
    lines.push("]".to_string());
    lines.join("\n")
}
