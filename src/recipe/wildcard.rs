//! Wildcard normalization state machine
//!
//! An ingredient's code moves between three forms as the user toggles the
//! wildcard flag and pins variants:
//!
//! - **Bare** - no trailing `*`
//! - **Open** - `base*`, wildcarded with no variants pinned
//! - **Scoped** - `base-*`, one or more variants pinned
//!
//! Normalization keeps the code string and the variant selection mutually
//! consistent and never produces `--` or `**` sequences no matter how often
//! it runs.

use crate::discovery::DEFAULT_DOMAIN;
use crate::recipe::Ingredient;

/// Logical wildcard state of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardState {
    Bare,
    Open,
    Scoped,
}

pub fn state_of(ing: &Ingredient) -> WildcardState {
    if !ing.code.ends_with('*') {
        WildcardState::Bare
    } else if ing.allowed_variants.is_empty() {
        WildcardState::Open
    } else {
        WildcardState::Scoped
    }
}

/// Rewrite a wildcarded code to match its variant selection.
///
/// Strips the trailing `*` and any trailing dashes, then re-appends `-*`
/// when variants are pinned and a bare `*` otherwise. Idempotent; a bare
/// code is left untouched.
pub fn normalize(ing: &mut Ingredient) {
    if ing.code.is_empty() || !ing.code.ends_with('*') {
        return;
    }
    let base = ing.code[..ing.code.len() - 1].trim_end_matches('-');
    ing.code = if ing.allowed_variants.is_empty() {
        format!("{base}*")
    } else {
        format!("{base}-*")
    };
}

/// Apply the wildcard toggle.
///
/// Enabling appends `*` to a non-empty code and normalizes. Disabling
/// strips the trailing `*` and forgets the variant selection entirely;
/// switching wildcarding off always drops pinned variants.
pub fn set_wildcard(ing: &mut Ingredient, enabled: bool) {
    if ing.code.is_empty() {
        return;
    }
    if enabled {
        if !ing.code.ends_with('*') {
            ing.code.push('*');
        }
        normalize(ing);
    } else {
        if ing.code.ends_with('*') {
            ing.code.pop();
        }
        ing.allowed_variants.clear();
    }
}

/// Replace the pinned variant set and renormalize the code
pub fn set_variants(ing: &mut Ingredient, variants: Vec<String>) {
    ing.allowed_variants = variants;
    if !ing.code.ends_with('*') {
        ing.code.push('*');
    }
    normalize(ing);
}

/// Corpus key for a wildcarded code: stripped base, domain-qualified,
/// dash-suffixed. `None` when the code is not wildcarded.
pub fn variant_key(code: &str) -> Option<String> {
    let prefix = code.strip_suffix('*')?;
    let key = if prefix.contains(':') {
        if prefix.ends_with('-') {
            prefix.to_string()
        } else {
            format!("{prefix}-")
        }
    } else if prefix.ends_with('-') {
        format!("{DEFAULT_DOMAIN}:{prefix}")
    } else {
        format!("{DEFAULT_DOMAIN}:{prefix}-")
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(code: &str, variants: &[&str]) -> Ingredient {
        Ingredient {
            code: code.to_string(),
            allowed_variants: variants.iter().map(|v| v.to_string()).collect(),
            ..Ingredient::default()
        }
    }

    #[test]
    fn test_enable_appends_star() {
        let mut ing = ingredient("game:plank", &[]);
        set_wildcard(&mut ing, true);
        assert_eq!(ing.code, "game:plank*");
        assert_eq!(state_of(&ing), WildcardState::Open);
    }

    #[test]
    fn test_disable_strips_star_and_forgets_variants() {
        let mut ing = ingredient("game:ingot-*", &["copper"]);
        set_wildcard(&mut ing, false);
        assert_eq!(ing.code, "game:ingot-");
        assert!(ing.allowed_variants.is_empty());
        assert_eq!(state_of(&ing), WildcardState::Bare);
    }

    #[test]
    fn test_variants_pin_switches_to_scoped_form() {
        let mut ing = ingredient("game:ingot*", &[]);
        set_variants(&mut ing, vec!["copper".to_string()]);
        assert_eq!(ing.code, "game:ingot-*");
        assert_eq!(state_of(&ing), WildcardState::Scoped);
    }

    #[test]
    fn test_variants_emptied_switches_back_to_open_form() {
        let mut ing = ingredient("game:ingot-*", &["copper"]);
        set_variants(&mut ing, Vec::new());
        assert_eq!(ing.code, "game:ingot*");
        assert_eq!(state_of(&ing), WildcardState::Open);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for (code, variants) in [
            ("game:ingot*", vec!["copper"]),
            ("game:ingot---*", vec![]),
            ("game:ingot-*", vec![]),
            ("plank*", vec!["oak", "pine"]),
        ] {
            let mut ing = ingredient(code, &variants);
            normalize(&mut ing);
            let once = ing.code.clone();
            normalize(&mut ing);
            assert_eq!(ing.code, once, "start: {code:?}");
        }
    }

    #[test]
    fn test_never_double_dash_or_double_star() {
        let mut ing = ingredient("game:ingot", &[]);
        // arbitrary toggle/pin churn starting from a bare code
        set_wildcard(&mut ing, true);
        set_variants(&mut ing, vec!["copper".to_string()]);
        set_variants(&mut ing, vec![]);
        set_wildcard(&mut ing, false);
        set_wildcard(&mut ing, true);
        set_variants(&mut ing, vec!["iron".to_string(), "tin".to_string()]);
        set_wildcard(&mut ing, false);
        set_wildcard(&mut ing, true);

        assert!(!ing.code.contains("--"), "code: {}", ing.code);
        assert!(!ing.code.contains("**"), "code: {}", ing.code);
    }

    #[test]
    fn test_trailing_dash_garbage_is_cleaned() {
        let mut ing = ingredient("game:ingot----*", &[]);
        normalize(&mut ing);
        assert_eq!(ing.code, "game:ingot*");

        ing.allowed_variants = vec!["copper".to_string()];
        normalize(&mut ing);
        assert_eq!(ing.code, "game:ingot-*");
    }

    #[test]
    fn test_empty_code_untouched_by_toggle() {
        let mut ing = ingredient("", &[]);
        set_wildcard(&mut ing, true);
        assert_eq!(ing.code, "");
    }

    #[test]
    fn test_variant_key_forms() {
        assert_eq!(variant_key("game:ingot-*").as_deref(), Some("game:ingot-"));
        assert_eq!(variant_key("game:ingot*").as_deref(), Some("game:ingot-"));
        assert_eq!(variant_key("ingot*").as_deref(), Some("game:ingot-"));
        assert_eq!(variant_key("ingot-*").as_deref(), Some("game:ingot-"));
        assert_eq!(variant_key("game:plank"), None);
    }
}
