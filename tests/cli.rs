use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn expenses(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.arg("--data-dir").arg(data_dir).env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &Path, amount: &str, category: &str, description: &str, date: &str) {
    expenses(data_dir)
        .args(["add", amount, "--category", category])
        .args(["--description", description, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Expense added"));
}

#[test]
fn first_run_creates_data_file() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .arg("tips")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created new expense file!"))
        .stdout(predicate::str::contains("Spending Tips"));

    assert_eq!(
        fs::read_to_string(temp.path().join("expenses.csv")).unwrap(),
        "Date,Category,Description,Amount\n"
    );
    assert!(temp.path().join("backups").is_dir());
}

#[test]
fn add_then_monthly_report() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "$12.50", "food", "Lunch", "2024-03-01");
    add(temp.path(), "27.50", "food", "Dinner", "2024-03-02");
    add(temp.path(), "10", "transport", "Bus", "2024-03-03");

    let data = fs::read_to_string(temp.path().join("expenses.csv")).unwrap();
    assert!(data.contains("2024-03-01,🍕 Food & Dining,Lunch,12.50"));

    expenses(temp.path())
        .args(["report", "--month", "03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📊 Monthly Report for 03-2024"))
        .stdout(predicate::str::contains("💵 Total Spending: $50.00"))
        .stdout(predicate::str::contains(
            "📈 Highest Spending: 🍕 Food & Dining ($40.00)",
        ))
        .stdout(predicate::str::contains("80.0%"));
}

#[test]
fn negative_amount_is_rejected() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["add", "-5", "--category", "fun"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));

    expenses(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet"));
}

#[test]
fn bad_month_is_a_usage_error() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .args(["report", "--month", "2024-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MM-YYYY"));
}

#[test]
fn tax_export_writes_business_rows() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "60", "bills", "Internet", "2024-03-05");
    add(temp.path(), "8", "food", "Snack", "2024-03-05");
    let out = temp.path().join("tax.csv");

    expenses(temp.path())
        .arg("export-tax")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 tax expense(s)"));

    let csv = fs::read_to_string(out).unwrap();
    assert_eq!(
        csv,
        "Date,Category,Description,Amount,Tax Purpose\n\
         2024-03-05,📄 Bills & Utilities,Internet,60.00,Business\n"
    );
}

#[test]
fn menu_exit_takes_a_backup() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .write_stdin("4\nTacos\n9.75\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("🍕 Food & Dining (Tacos)"))
        .stdout(predicate::str::contains("✓ Backup created:"));

    let backups: Vec<_> = fs::read_dir(temp.path().join("backups"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(backups.len(), 1);
    assert!(backups[0].starts_with("expenses_backup_"));
}

#[test]
fn backup_restore_round_trip() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "5", "misc", "Stamps", "2024-03-01");
    let backup_dir = temp.path().join("backups");
    fs::create_dir_all(&backup_dir).unwrap();
    fs::copy(
        temp.path().join("expenses.csv"),
        backup_dir.join("expenses_backup_20240301_120000.csv"),
    )
    .unwrap();
    fs::write(
        temp.path().join("expenses.csv"),
        "Date,Category,Description,Amount\n",
    )
    .unwrap();

    expenses(temp.path())
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses_backup_20240301_120000.csv"));

    expenses(temp.path())
        .args(["backup", "restore", "expenses_backup_20240301_120000", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 1 expense(s)"));

    expenses(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stamps"));
}

#[test]
fn menu_backup_then_exit_both_succeed() {
    let temp = TempDir::new().unwrap();

    expenses(temp.path())
        .write_stdin("7\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catch you later!"))
        .stdout(predicate::str::contains("⚠️").not());

    let backups = fs::read_dir(temp.path().join("backups")).unwrap().count();
    assert_eq!(backups, 2);
}

#[test]
fn restore_right_after_backup_create() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "5", "misc", "Stamps", "2024-03-01");

    expenses(temp.path())
        .args(["backup", "create"])
        .assert()
        .success();

    expenses(temp.path())
        .args(["backup", "restore", "latest", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pre-restore backup saved:"))
        .stdout(predicate::str::contains("Restored 1 expense(s)"));
}

#[test]
fn settings_file_uses_decimal_amounts() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{"monthly_food_limit": "30.00"}"#,
    )
    .unwrap();
    add(temp.path(), "27", "food", "Groceries", "2024-03-02");

    expenses(temp.path())
        .args(["report", "--month", "03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("of your $30.00 monthly limit"));

    let written = fs::read_to_string(temp.path().join("config.json")).unwrap();
    assert_eq!(written, r#"{"monthly_food_limit": "30.00"}"#);
}
