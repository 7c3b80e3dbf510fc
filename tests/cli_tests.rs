use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rpl, rpl_db, setup_test_db, temp_input, turnstile_csv};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rpl_db(&db_path)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("cli_add_list");
    init_db(&db_path);

    rpl_db(&db_path)
        .args(["add", "2025-03-12", "08:00"])
        .assert()
        .success()
        .stdout(contains("1 punch(es) applied"));

    rpl_db(&db_path)
        .args(["add", "2025-03-12", "18:18"])
        .assert()
        .success();

    rpl_db(&db_path)
        .args(["list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("12/03/2025"))
        .stdout(contains("Wed"))
        .stdout(contains("10h 18min"))
        .stdout(contains("+1h 30min"));
}

#[test]
fn test_add_same_punch_twice_reports_no_changes() {
    let db_path = setup_test_db("cli_add_twice");
    init_db(&db_path);

    rpl_db(&db_path)
        .args(["add", "2025-03-12", "08:00"])
        .assert()
        .success();

    rpl_db(&db_path)
        .args(["add", "2025-03-12", "08:00"])
        .assert()
        .success()
        .stdout(contains("No changes").and(contains("1 duplicate(s) ignored")));
}

#[test]
fn test_punch_quick_action_with_kind() {
    let db_path = setup_test_db("cli_punch");
    init_db(&db_path);

    rpl_db(&db_path)
        .args(["punch", "in", "--date", "2025-03-12", "--time", "08:00"])
        .assert()
        .success();

    rpl_db(&db_path)
        .args(["punch", "lunch-out", "--date", "2025-03-12", "--time", "12:00"])
        .assert()
        .success();

    rpl_db(&db_path)
        .args(["punch", "entry", "--date", "2025-03-12", "--time", "09:00"])
        .assert()
        .success()
        .stdout(contains("conflict"));

    rpl_db(&db_path)
        .args(["list", "--period", "2025-03-12"])
        .assert()
        .success()
        .stdout(contains("08:00").and(contains("12:00")))
        .stdout(contains("no exit"));
}

#[test]
fn test_invalid_date_and_time_fail() {
    let db_path = setup_test_db("cli_invalid");
    init_db(&db_path);

    rpl_db(&db_path)
        .args(["add", "2025-13-01", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    rpl_db(&db_path)
        .args(["add", "2025-03-12", "8h"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
}

#[test]
fn test_import_turnstile_csv_is_idempotent() {
    let db_path = setup_test_db("cli_import");
    init_db(&db_path);

    let csv = format!(
        "\u{feff}{}",
        turnstile_csv(&[
            "12/03/2025 08:00",
            "12/03/2025 12:00",
            "12/03/2025 13:00",
            "12/03/2025 17:00",
        ])
    );
    let file = temp_input("cli_import", "csv", &csv);

    rpl_db(&db_path)
        .args(["import", &file])
        .assert()
        .success()
        .stdout(contains("4 punch(es) applied"));

    rpl_db(&db_path)
        .args(["import", &file])
        .assert()
        .success()
        .stdout(contains("No changes").and(contains("4 duplicate(s) ignored")));
}

#[test]
fn test_sync_saved_api_response() {
    let db_path = setup_test_db("cli_sync");
    init_db(&db_path);

    let json = r#"{"data":{"data":[{"time":"2025-03-15T09:00:00"},{"time":"2025-03-15T13:00:00"},{"time":"bad"}]}}"#;
    let file = temp_input("cli_sync", "json", json);

    rpl_db(&db_path)
        .args(["sync", &file])
        .assert()
        .success()
        .stdout(contains("2 punch(es) applied"))
        .stdout(contains("1 malformed item(s) skipped"));

    // Saturday: every worked minute is overtime
    rpl_db(&db_path)
        .args(["list", "--period", "2025-03-15"])
        .assert()
        .success()
        .stdout(contains("Sat"))
        .stdout(contains("+4h 00min"));
}

#[test]
fn test_del_single_day_and_all() {
    let db_path = setup_test_db("cli_del");
    init_db(&db_path);

    for (date, time) in [("2025-03-12", "08:00"), ("2025-03-13", "08:00")] {
        rpl_db(&db_path)
            .args(["add", date, time])
            .assert()
            .success();
    }

    rpl_db(&db_path)
        .args(["del", "2025-03-12", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    rpl_db(&db_path)
        .args(["del", "2025-03-12", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No record found"));

    rpl_db(&db_path)
        .args(["del", "--all", "--yes"])
        .assert()
        .success()
        .stdout(contains("1 record(s) deleted"));

    rpl_db(&db_path)
        .args(["list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("No records"));
}

#[test]
fn test_policy_update_and_rejection() {
    let db_path = setup_test_db("cli_policy");
    init_db(&db_path);

    rpl_db(&db_path)
        .arg("policy")
        .assert()
        .success()
        .stdout(contains("8h 48min"));

    rpl_db(&db_path)
        .args(["policy", "--threshold", "8h", "--daily-cap", "2h"])
        .assert()
        .success()
        .stdout(contains("Policy updated"))
        .stdout(contains("8h 00min").and(contains("2h 00min")));

    rpl_db(&db_path)
        .args(["policy", "--threshold", "30h"])
        .assert()
        .failure()
        .stderr(contains("Invalid policy"));

    rpl_db(&db_path)
        .arg("policy")
        .assert()
        .success()
        .stdout(contains("8h 00min"));
}

#[test]
fn test_dashboard_and_saved_filter() {
    let db_path = setup_test_db("cli_dashboard");
    init_db(&db_path);

    for time in ["08:00", "18:18"] {
        rpl_db(&db_path)
            .args(["add", "2025-03-12", time])
            .assert()
            .success();
    }

    rpl_db(&db_path)
        .args(["dashboard", "--from", "2025-03-01", "--to", "2025-03-31", "--save"])
        .assert()
        .success()
        .stdout(contains("Dashboard filter saved"))
        .stdout(contains("2025-W11"))
        .stdout(contains("1h 30min"));

    // saved filter is reused
    rpl_db(&db_path)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("01/03/2025 to 31/03/2025"))
        .stdout(contains("2025-W11"));
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);

    rpl_db(&db_path)
        .args(["add", "2025-03-12", "08:00"])
        .assert()
        .success();

    rpl_db(&db_path)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("add")));
}

#[test]
fn test_help_lists_commands() {
    rpl()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("import").and(contains("dashboard")).and(contains("export")));
}
