#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn garde(state: &Path) -> Command {
    let mut cmd = Command::cargo_bin("garde-cli").unwrap();
    cmd.arg("--state").arg(state);
    cmd
}

#[test]
fn init_generate_stats_reset() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("garde.json");

    garde(&state).arg("init").assert().success();
    garde(&state)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    garde(&state)
        .args(["generate", "--start", "2025-03-03", "--end", "2025-03-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon 03 Mar: YMC (weekday)"))
        .stdout(predicate::str::contains("Tue 04 Mar: WT (weekday)"))
        .stdout(predicate::str::contains("Wed 05 Mar: YY (weekday)"))
        .stdout(predicate::str::contains("Wed 05 Mar: Kel (weekday)"));

    garde(&state)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("first    YMC"));

    let stats = dir.path().join("stats.csv");
    garde(&state).arg("reset").assert().success();
    garde(&state)
        .args(["stats", "--out-csv"])
        .arg(&stats)
        .assert()
        .success();
    let text = std::fs::read_to_string(&stats).unwrap();
    assert!(text.contains("first,YMC,0,0,0,0"));
}

#[test]
fn fallback_exits_with_warning_code() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("garde.json");

    garde(&state)
        .args(["add-roster", "--name", "solo", "--doctors", "A"])
        .assert()
        .success();
    garde(&state)
        .args(["generate", "--start", "2025-03-03", "--end", "2025-03-04"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("rest constraint relaxed"));
}

#[test]
fn generate_requires_a_period() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("garde.json");
    garde(&state).arg("init").assert().success();
    garde(&state)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--month"));
}

#[test]
fn empty_roster_is_reported() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("garde.json");
    garde(&state)
        .args(["add-roster", "--name", "ghost", "--doctors", ""])
        .assert()
        .success();
    garde(&state)
        .args(["generate", "--month", "2025-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost has no doctor"));
}

#[test]
fn fallback_from_a_previous_run_is_reported() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("garde.json");

    garde(&state)
        .args(["add-roster", "--name", "solo", "--doctors", "A"])
        .assert()
        .success();
    garde(&state)
        .args(["generate", "--start", "2025-03-03", "--end", "2025-03-03"])
        .assert()
        .success();
    // A a travaillé la veille lors du run précédent
    garde(&state)
        .args(["generate", "--start", "2025-03-04", "--end", "2025-03-04"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Tue 04 Mar: A (weekday) [repos non respecté]"))
        .stderr(predicate::str::contains("1 day(s) without a rested doctor"));
}

#[test]
fn failed_export_leaves_counters_untouched() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("garde.json");
    let missing = dir.path().join("missing").join("schedule.csv");
    let stats = dir.path().join("stats.csv");

    garde(&state)
        .args(["add-roster", "--name", "pair", "--doctors", "A,B"])
        .assert()
        .success();
    garde(&state)
        .args(["generate", "--start", "2025-03-03", "--end", "2025-03-04", "--out-csv"])
        .arg(&missing)
        .assert()
        .failure();

    garde(&state)
        .args(["stats", "--out-csv"])
        .arg(&stats)
        .assert()
        .success();
    let text = std::fs::read_to_string(&stats).unwrap();
    assert!(text.contains("pair,A,0,0,0,0"));
    assert!(text.contains("pair,B,0,0,0,0"));
}

#[test]
fn holidays_cannot_be_combined_with_a_classified_calendar() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("garde.json");
    garde(&state)
        .args([
            "generate",
            "--calendar",
            "calendar.csv",
            "--holidays",
            "holidays.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
