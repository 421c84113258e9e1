//! Variants command tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn vsrecipe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vsrecipe").unwrap();
    cmd.env_remove("VINTAGE_STORY");
    cmd
}

#[test]
fn test_variants_for_wildcard_pattern() {
    let assets = common::TestAssets::with_survival_tree();

    vsrecipe_cmd()
        .args(["variants", "game:log-*", "--root", assets.root_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("game:log-"))
        .stdout(predicate::str::contains("oak"))
        .stdout(predicate::str::contains("pine"));
}

#[test]
fn test_variants_accepts_bare_pattern() {
    let assets = common::TestAssets::with_survival_tree();

    vsrecipe_cmd()
        .args(["variants", "log", "--root", assets.root_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("oak"));
}

#[test]
fn test_variants_unknown_base() {
    let assets = common::TestAssets::with_survival_tree();

    vsrecipe_cmd()
        .args(["variants", "game:gearbox-*", "--root", assets.root_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No variants known for game:gearbox-"));
}

#[test]
fn test_variants_json_output() {
    let assets = common::TestAssets::with_survival_tree();

    let output = vsrecipe_cmd()
        .args(["variants", "--json", "game:log-*", "--root", assets.root_arg()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: std::collections::BTreeMap<String, Vec<String>> =
        serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["game:log-"], vec!["oak", "pine"]);
}

#[test]
fn test_variants_on_miss_reports_status() {
    let assets = common::TestAssets::empty();

    vsrecipe_cmd()
        .args(["variants", "game:ingot-*", "--root", assets.root_arg()])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}
