use std::fs;

use super::*;
use crate::naming::{LevelRules, PatternComposer};
use tempfile::TempDir;

fn rules() -> LevelRules {
    PatternComposer::new("[0-9]+", "[0-9]+_[А-Я]", "[0-9]+_[А-Я]", "-")
        .compose()
        .unwrap()
}

fn kinds(violations: &[Violation]) -> Vec<&'static str> {
    violations.iter().map(|v| v.kind.code()).collect()
}

#[test]
fn valid_inventory_has_no_violations() {
    let temp_dir = TempDir::new().unwrap();
    let inventory = temp_dir.path().join("42-1_А");
    fs::create_dir_all(inventory.join("42-1_А-7_Б")).unwrap();

    let violations =
        check_directory(&ArchivalPath::new(&inventory), &rules().inventory, "42");

    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn fund_has_empty_required_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let fund = temp_dir.path().join("42");
    fs::create_dir_all(fund.join("42-1_А")).unwrap();

    let violations = check_directory(&ArchivalPath::new(&fund), &rules().fund, "");

    assert!(violations.is_empty());
}

#[test]
fn pattern_mismatch_reports_composed_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let inventory = temp_dir.path().join("42-x");
    fs::create_dir_all(inventory.join("child")).unwrap();
    let rules = rules();

    let violations =
        check_directory(&ArchivalPath::new(&inventory), &rules.inventory, "42");

    assert_eq!(kinds(&violations), vec!["PatternMismatch"]);
    assert_eq!(
        violations[0].kind,
        ViolationKind::PatternMismatch {
            pattern: rules.inventory.pattern().to_string()
        }
    );
    assert_eq!(
        violations[0].subject,
        Subject::Directory(crate::naming::Level::Inventory)
    );
}

#[test]
fn prefix_mismatch_when_parent_name_differs() {
    let temp_dir = TempDir::new().unwrap();
    let inventory = temp_dir.path().join("43-1_А");
    fs::create_dir_all(inventory.join("child")).unwrap();

    let violations =
        check_directory(&ArchivalPath::new(&inventory), &rules().inventory, "42");

    assert_eq!(kinds(&violations), vec!["PrefixMismatch"]);
}

#[test]
fn empty_directory_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let unit = ArchivalPath::new(temp_dir.path().join("42-1_А-7_Б"));
    fs::create_dir(unit.path()).unwrap();

    assert!(check_directory(&unit, &rules().unit, "42-1_А").is_empty());
    let violation = check_not_empty(&unit, &rules().unit).unwrap().unwrap();
    assert_eq!(violation.kind, ViolationKind::EmptyDirectory);
    assert_eq!(violation.subject, Subject::Directory(crate::naming::Level::Unit));
}

#[test]
fn directory_with_entries_is_not_empty() {
    let temp_dir = TempDir::new().unwrap();
    let fund = ArchivalPath::new(temp_dir.path().join("42"));
    fs::create_dir_all(fund.path().join("42-1_А")).unwrap();

    assert!(check_not_empty(&fund, &rules().fund).unwrap().is_none());
}

#[test]
fn emptiness_is_not_checked_for_files_or_missing_entries() {
    let temp_dir = TempDir::new().unwrap();
    let file = ArchivalPath::new(temp_dir.path().join("42"));
    fs::write(file.path(), "").unwrap();
    let missing = ArchivalPath::new(temp_dir.path().join("43"));

    assert!(check_not_empty(&file, &rules().fund).unwrap().is_none());
    assert!(check_not_empty(&missing, &rules().fund).unwrap().is_none());
}

#[test]
fn file_in_place_of_directory_is_not_a_directory() {
    let temp_dir = TempDir::new().unwrap();
    let fund = temp_dir.path().join("42");
    fs::write(&fund, "").unwrap();

    let violations = check_directory(&ArchivalPath::new(&fund), &rules().fund, "");

    assert_eq!(kinds(&violations), vec!["NotADirectory"]);
}

#[test]
fn name_checks_run_in_fixed_order() {
    let temp_dir = TempDir::new().unwrap();
    let unit = temp_dir.path().join("junk");
    fs::create_dir(&unit).unwrap();

    let violations = check_directory(&ArchivalPath::new(&unit), &rules().unit, "42-1_А");

    assert_eq!(
        kinds(&violations),
        vec!["PatternMismatch", "PrefixMismatch"]
    );
}

#[test]
fn missing_directory_reports_without_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = ArchivalPath::new(temp_dir.path().join("42"));

    let violations = check_directory(&missing, &rules().fund, "");

    assert_eq!(kinds(&violations), vec!["NotADirectory"]);
}
