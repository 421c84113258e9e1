//! Identifier-pattern extraction from JSON5-ish definition text
//!
//! The game's definition files are not strict JSON (comments, unquoted keys),
//! so this is a lexical scan, not a parser. Four independent rules pull
//! quoted string literals out of known keyword contexts and normalize them
//! into `domain:base` / `domain:base-*` patterns. Arbitrary garbage input
//! yields an empty set, never an error.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::DEFAULT_DOMAIN;

// match "..." or '...'
const STR_RE: &str = r#"(?:"([^"]+)"|'([^']+)')"#;

static BRACE_PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("placeholder regex"));
static STAR_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*{2,}").expect("star run regex"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\bcode\s*:\s*{STR_RE}")).expect("code regex"));
static CODE_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?s)\bcode\s*:\s*\{{[^{{}}]*?\bpath\s*:\s*{STR_RE}"))
        .expect("code path regex")
});
static ALLOWED_VARIANTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\ballowedVariants\s*:\s*\[(.*?)\]").expect("allowedVariants regex")
});
static GROUP_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\bgroupBy\s*:\s*\[(.*?)\]").expect("groupBy regex"));
static STR_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(STR_RE).expect("string regex"));

/// Collapse `{metal}`-style placeholders to `*`, squash `**` runs, trim.
pub fn normalize_pattern(s: &str) -> String {
    let s = BRACE_PLACEHOLDER_RE.replace_all(s, "*");
    let s = STAR_RUN_RE.replace_all(&s, "*");
    s.trim().to_string()
}

/// Prefix the default domain when the code carries none
pub fn with_domain(code: &str) -> String {
    if code.contains(':') {
        code.to_string()
    } else {
        format!("{DEFAULT_DOMAIN}:{code}")
    }
}

fn quoted_value(caps: &regex::Captures) -> Option<String> {
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
        .filter(|v| !v.is_empty())
}

/// Extract identifier patterns from a blob of definition text.
///
/// Rule 1 (`code: "foo"`) also adds a `foo-*` sibling for bare bases: most
/// base codes have variant siblings in practice. The sibling may name a
/// variant base that never occurs in the corpus; the variant picker simply
/// won't offer it.
pub fn extract_codes(text: &str) -> BTreeSet<String> {
    let mut codes = BTreeSet::new();

    // 1) code: "foo"
    for caps in CODE_RE.captures_iter(text) {
        let Some(val) = quoted_value(&caps) else {
            continue;
        };
        let base = with_domain(&normalize_pattern(&val));
        if !base.ends_with('*') && !base.contains("-*") {
            codes.insert(format!("{base}-*"));
        }
        codes.insert(base);
    }

    // 2) code: { path: "foo-*" }
    for caps in CODE_PATH_RE.captures_iter(text) {
        if let Some(val) = quoted_value(&caps) {
            codes.insert(with_domain(&normalize_pattern(&val)));
        }
    }

    // 3) allowedVariants: ["foo-*", ...]  4) groupBy: ["foo-*", ...]
    for list_re in [&*ALLOWED_VARIANTS_RE, &*GROUP_BY_RE] {
        for caps in list_re.captures_iter(text) {
            let body = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            for inner in STR_ONLY_RE.captures_iter(body) {
                if let Some(val) = quoted_value(&inner) {
                    codes.insert(with_domain(&normalize_pattern(&val)));
                }
            }
        }
    }

    codes
}
