//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the TALLY_CLI_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_creates_catalog_and_data_files() {
    let data_dir = TempDir::new().unwrap();

    tally(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(data_dir.path().join("catalog.yaml").exists());
    assert!(data_dir.path().join("data").join("records.json").exists());
    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn add_and_list_records() {
    let data_dir = TempDir::new().unwrap();

    tally(&data_dir).arg("init").assert().success();

    tally(&data_dir)
        .args([
            "record", "add", "income", "salary", "8500", "--date", "2025-01-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));

    tally(&data_dir)
        .args(["record", "list", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("salary"))
        .stdout(predicate::str::contains("$8500.00"));
}

#[test]
fn add_rejects_unknown_category() {
    let data_dir = TempDir::new().unwrap();

    tally(&data_dir).arg("init").assert().success();

    tally(&data_dir)
        .args(["record", "add", "income", "lottery", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vocabulary"));
}

#[test]
fn monthly_report_shows_scenario_balances() {
    let data_dir = TempDir::new().unwrap();

    tally(&data_dir).arg("init").assert().success();

    for args in [
        ["record", "add", "income", "salary", "8500", "--date", "2025-01-05"],
        ["record", "add", "fixed-expense", "rent", "1500", "--date", "2025-01-01"],
        ["record", "add", "income", "salary", "8500", "--date", "2025-02-05"],
    ] {
        tally(&data_dir).args(args).assert().success();
    }

    tally(&data_dir)
        .args(["report", "monthly", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January"))
        .stdout(predicate::str::contains("$7000.00"))
        .stdout(predicate::str::contains("$8500.00"));
}

#[test]
fn compare_reports_percentage_change() {
    let data_dir = TempDir::new().unwrap();

    tally(&data_dir).arg("init").assert().success();

    for args in [
        ["record", "add", "income", "salary", "8500", "--date", "2025-01-05"],
        ["record", "add", "fixed-expense", "rent", "1500", "--date", "2025-01-01"],
        ["record", "add", "income", "salary", "8500", "--date", "2025-02-05"],
    ] {
        tally(&data_dir).args(args).assert().success();
    }

    tally(&data_dir)
        .args(["report", "compare", "2025-01", "2025-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-100.0%"));
}

#[test]
fn export_and_import_round_trip() {
    let data_dir = TempDir::new().unwrap();
    let export_path = data_dir.path().join("records.csv");

    tally(&data_dir).arg("init").assert().success();

    tally(&data_dir)
        .args([
            "record",
            "add",
            "variable-expense",
            "groceries",
            "123.45",
            "--date",
            "2025-03-10",
            "--description",
            "weekly shop",
        ])
        .assert()
        .success();

    tally(&data_dir)
        .args(["export", "csv"])
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 records"));

    // Import into a fresh data directory
    let second_dir = TempDir::new().unwrap();
    tally(&second_dir).arg("init").assert().success();

    tally(&second_dir)
        .arg("import")
        .arg(&export_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 records"));

    tally(&second_dir)
        .args(["record", "list", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groceries"))
        .stdout(predicate::str::contains("$123.45"));
}
