use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("EXPENSE_TRACKER_BACKEND")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_then_list() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "Nov-2025", "--salary", "5000", "--gas", "200", "--food", "1,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings made this month! Total: ₹1,200.00"));

    expense(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nov-2025"))
        .stdout(predicate::str::contains("Savings Made"))
        .stdout(predicate::str::contains("1 record(s)"));

    assert!(data_dir.path().join("data").join("records.json").exists());
}

#[test]
fn test_overspent_message() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "Oct-2025", "--salary", "1000", "--food", "901"])
        .assert()
        .success()
        .stdout(predicate::str::contains("This month you overspent!"));
}

#[test]
fn test_bad_amount_names_field() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "Oct-2025", "--salary", "1000", "--food", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'food'"));

    expense(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn test_sqlite_backend() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["--backend", "sqlite", "add", "Oct-2025", "--salary", "2000", "--travel", "300"])
        .assert()
        .success();

    expense(&data_dir)
        .args(["--backend", "sqlite", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oct-2025"));

    assert!(data_dir.path().join("data").join("expenses.db").exists());

    // The file backend is a separate medium
    expense(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn test_export_csv() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("out.csv");

    expense(&data_dir)
        .args(["add", "Oct, 2025", "--salary", "1000", "--water", "50"])
        .assert()
        .success();

    expense(&data_dir)
        .arg("export")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 record(s)"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.starts_with(
        "Month,Salary,Electricity,Water,Gas,Food,Travel,Shopping,Miscellaneous,Total,Remarks,SavedAt\n"
    ));
    assert!(contents.contains("\"Oct, 2025\",1000.00,0.00,50.00"));
}

#[test]
fn test_export_nothing() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("out.json");

    expense(&data_dir)
        .args(["export", "--format", "json"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No records to export."));

    assert!(!output.exists());
}

#[test]
fn test_clear_requires_force() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "Oct-2025", "--salary", "1000"])
        .assert()
        .success();

    expense(&data_dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    expense(&data_dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Oct-2025"));

    expense(&data_dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 removed"));

    expense(&data_dir)
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("No records found."));
    assert!(!data_dir.path().join("data").join("records.json").exists());
}

#[test]
fn test_config_sets_rule() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["config", "--set-rule", "strict-budget", "--set-currency", "$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict budget"));

    expense(&data_dir)
        .args(["add", "Oct-2025", "--salary", "1000", "--shopping", "1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Over budget! Total: $1,001.00 exceeds salary $1,000.00",
        ));
}

#[test]
fn test_empty_month_rejected() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", " ", "--salary", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("month is required"));
}

#[test]
fn test_oversized_total_rejected() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args([
            "add",
            "Oct-2025",
            "--salary",
            "1000",
            "--food",
            "90000000000000000",
            "--travel",
            "90000000000000000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'travel'"))
        .stderr(predicate::str::contains("amount too large"));

    expense(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn test_extra_decimals_rejected() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "Oct-2025", "--salary", "1000", "--water", "12.999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than two decimal places"));
}
