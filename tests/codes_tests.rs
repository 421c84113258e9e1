//! Codes command tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn vsrecipe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vsrecipe").unwrap();
    cmd.env_remove("VINTAGE_STORY");
    cmd
}

#[test]
fn test_codes_lists_extracted_patterns() {
    let assets = common::TestAssets::with_survival_tree();

    vsrecipe_cmd()
        .args(["codes", "--root", assets.root_arg()])
        .assert()
        .success()
        // ingot-{metal} normalizes to a wildcard pattern, no bare sibling
        .stdout(predicate::str::contains("game:ingot-*"))
        // bare codes get the wildcard sibling heuristic
        .stdout(predicate::str::contains("game:stick\n"))
        .stdout(predicate::str::contains("game:stick-*"))
        // groupBy entries are unioned in
        .stdout(predicate::str::contains("game:plank-*"));
}

#[test]
fn test_codes_filter_is_case_insensitive() {
    let assets = common::TestAssets::with_survival_tree();

    vsrecipe_cmd()
        .args(["codes", "--root", assets.root_arg(), "--filter", "INGOT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("game:ingot-*"))
        .stdout(predicate::str::contains("plank").not());
}

#[test]
fn test_codes_sorted_output() {
    let assets = common::TestAssets::with_survival_tree();

    let output = vsrecipe_cmd()
        .args(["codes", "--root", assets.root_arg()])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}

#[test]
fn test_codes_json_output() {
    let assets = common::TestAssets::with_survival_tree();

    let output = vsrecipe_cmd()
        .args(["codes", "--json", "--root", assets.root_arg()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed.contains(&"game:ingot-*".to_string()));
}

#[test]
fn test_codes_degrade_to_empty_on_miss() {
    let assets = common::TestAssets::empty();

    vsrecipe_cmd()
        .args(["codes", "--root", assets.root_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}
