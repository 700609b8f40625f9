use assert_cmd::Command;
use predicates::str::contains;
use tempfile::{tempdir, TempDir};

fn ledger_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense_ledger_cli").unwrap();
    cmd.env("EXPENSE_LEDGER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = tempdir().unwrap();
    ledger_cmd(&home)
        .arg("help")
        .assert()
        .success()
        .stdout(contains("Available commands"))
        .stdout(contains("breakdown"))
        .stdout(contains("limit"));
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = tempdir().unwrap();
    ledger_cmd(&home)
        .env("EXPENSE_LEDGER_CLI_SCRIPT", "1")
        .write_stdin("# monthly setup\nlimit 1000\nadd 250 Food\nsummary\nbreakdown\nexit\n")
        .assert()
        .success()
        .stdout(contains("Monthly limit updated!"))
        .stdout(contains("Total Spent This Month: ₹250.00"))
        .stdout(contains("Remaining Balance: ₹750.00"))
        .stdout(contains("Expenses by Category"))
        .stdout(contains("100.0%"));

    let csv = std::fs::read_to_string(home.path().join("expenses.csv")).unwrap();
    assert!(csv.ends_with(",250,Food\n"));
    let limit = std::fs::read_to_string(home.path().join("limit.txt")).unwrap();
    assert_eq!(limit, "1000");
}

#[test]
fn breakdown_on_empty_ledger_is_informational() {
    let home = tempdir().unwrap();
    ledger_cmd(&home)
        .arg("breakdown")
        .assert()
        .success()
        .stdout(contains("No expenses to show."));
}

#[test]
fn invalid_amount_fails_without_writing() {
    let home = tempdir().unwrap();
    ledger_cmd(&home)
        .args(["add", "abc", "Food"])
        .assert()
        .code(1)
        .stdout(contains("not a number"));

    let csv = std::fs::read_to_string(home.path().join("expenses.csv")).unwrap();
    assert!(csv.is_empty());
}

#[test]
fn delete_out_of_range_names_the_number() {
    let home = tempdir().unwrap();
    ledger_cmd(&home)
        .env("EXPENSE_LEDGER_CLI_SCRIPT", "1")
        .write_stdin("add 5 Travel\ndelete 4\n")
        .assert()
        .code(1)
        .stdout(contains("There is no expense #4"));
}

#[test]
fn unknown_command_suggests_closest() {
    let home = tempdir().unwrap();
    ledger_cmd(&home)
        .arg("sumary")
        .assert()
        .code(1)
        .stdout(contains("Unknown command `sumary`"))
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn config_changes_currency_symbol() {
    let home = tempdir().unwrap();
    ledger_cmd(&home)
        .args(["config", "currency", "$"])
        .assert()
        .success()
        .stdout(contains("Configuration saved."));

    ledger_cmd(&home)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total Spent This Month: $0.00"));
}
