//! End-to-end tests for the paycycle binary
//!
//! Each test builds a JSON events document in a temp directory and points
//! the binary at it. Event dates are computed relative to the real current
//! date because the first cycle is always anchored on today.

use std::path::PathBuf;

use assert_cmd::Command;
use chrono::{Days, Local, NaiveDate};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    events_file: PathBuf,
    today: NaiveDate,
}

impl Fixture {
    fn new(paydays: &[(u64, &str)], bills: &[(u64, &str)]) -> Self {
        let today = Local::now().date_naive();
        let dated = |offset: u64, title: &str| {
            json!({
                "title": title,
                "date": (today + Days::new(offset)).format("%Y-%m-%d").to_string(),
            })
        };

        let document = json!({
            "calendars": {
                "primary": paydays
                    .iter()
                    .map(|(offset, title)| dated(*offset, title))
                    .collect::<Vec<_>>(),
                "bills": bills
                    .iter()
                    .map(|(offset, title)| dated(*offset, title))
                    .collect::<Vec<_>>(),
            }
        });

        let dir = TempDir::new().unwrap();
        let events_file = dir.path().join("events.json");
        std::fs::write(&events_file, document.to_string()).unwrap();
        Self {
            _dir: dir,
            events_file,
            today,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("paycycle").unwrap();
        cmd.env("PAYCYCLE_DATA_DIR", self._dir.path())
            .env("DEFAULT_CALENDAR_ID", "primary")
            .env("BILLS_CALENDAR_ID", "bills")
            .env_remove("PAYCYCLE_EVENTS_FILE")
            .arg("--events")
            .arg(&self.events_file);
        cmd
    }

    fn date(&self, offset: u64) -> String {
        (self.today + Days::new(offset)).format("%Y-%m-%d").to_string()
    }
}

fn standard_fixture() -> Fixture {
    Fixture::new(
        &[(10, "Payday ($1000.00)"), (24, "Payday ($1000.00)")],
        &[(5, "Rent ($400.00)"), (15, "Phone ($50.00)")],
    )
}

#[test]
fn summary_mode_prints_one_line_per_cycle() {
    let fixture = standard_fixture();
    fixture
        .command()
        .args(["--summary", "500.00", "2"])
        .assert()
        .success()
        .stdout(format!(
            "{}: 100.00\n{}: 1050.00\n",
            fixture.date(10),
            fixture.date(24)
        ));
}

#[test]
fn detailed_mode_prints_ledger_and_balances() {
    let fixture = standard_fixture();
    fixture
        .command()
        .args(["500.00", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Payday Cycle 1 ==="))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("-$400.00"))
        .stdout(predicate::str::contains(format!(
            "Balance on {} (before payday): $100.00",
            fixture.date(10)
        )))
        .stdout(predicate::str::contains("After payday (+$1000.00): $1100.00"))
        .stdout(predicate::str::contains(format!(
            "Balance on {} (before payday): $1050.00",
            fixture.date(24)
        )))
        .stdout(predicate::str::contains("After payday (+$1000.00): $2050.00"));
}

#[test]
fn bill_on_payday_is_not_deducted() {
    let fixture = Fixture::new(
        &[(10, "Payday ($1000.00)")],
        &[(10, "Gym ($25.00)")],
    );
    fixture
        .command()
        .args(["--summary", "500.00", "1"])
        .assert()
        .success()
        .stdout(format!("{}: 500.00\n", fixture.date(10)));
}

#[test]
fn missing_paydays_warns_and_projects_fewer_cycles() {
    let fixture = standard_fixture();
    fixture
        .command()
        .args(["--summary", "500.00", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: Not enough payday events found for 5 cycles.",
        ));
}

#[test]
fn huge_cycle_count_projects_available_paydays() {
    let fixture = standard_fixture();
    fixture
        .command()
        .args(["--summary", "500.00", "10000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: Not enough payday events found for 10000000 cycles.",
        ));
}

#[test]
fn empty_payday_calendar_reports_no_data() {
    let fixture = Fixture::new(&[], &[(5, "Rent ($400.00)")]);
    fixture
        .command()
        .args(["500.00", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No payday events found in the default calendar.",
        ));
}

#[test]
fn payday_retrieval_failure_is_a_warning_not_an_error() {
    let fixture = standard_fixture();
    fixture
        .command()
        .env("DEFAULT_CALENDAR_ID", "does-not-exist")
        .args(["500.00", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error fetching payday events"))
        .stdout(predicate::str::contains(
            "No payday events found in the default calendar.",
        ));
}

#[test]
fn bill_retrieval_failure_aborts_the_run() {
    let fixture = standard_fixture();
    fixture
        .command()
        .env("BILLS_CALENDAR_ID", "does-not-exist")
        .args(["500.00", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown calendar: does-not-exist"));
}

#[test]
fn no_arguments_uses_defaults() {
    let fixture = standard_fixture();
    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Using default values: current balance = $500.00, payday cycles = 3",
        ))
        .stdout(predicate::str::contains(
            "Warning: Not enough payday events found for 3 cycles.",
        ));
}

#[test]
fn invalid_balance_is_rejected_before_retrieval() {
    let fixture = standard_fixture();
    fixture
        .command()
        .args(["abc", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid current balance amount"))
        .stderr(predicate::str::contains("Usage: paycycle"));
}

#[test]
fn zero_cycles_is_rejected() {
    let fixture = standard_fixture();
    fixture
        .command()
        .args(["500.00", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number of payday cycles"));
}

#[test]
fn non_numeric_cycles_is_rejected() {
    let fixture = standard_fixture();
    fixture
        .command()
        .args(["500.00", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number of payday cycles"));
}

#[test]
fn single_positional_argument_is_rejected() {
    let fixture = standard_fixture();
    fixture.command().arg("500.00").assert().failure();
}
