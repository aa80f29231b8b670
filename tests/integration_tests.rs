use chrono::{NaiveDate, NaiveTime};
use frecuencia::store::EpisodeLog;
use frecuencia::store::slot::StorageSlot;
use predicates::str::contains;
use std::fs;

mod common;
use common::{fre, init_with_data, setup_test_storage};

#[test]
fn test_init_creates_empty_log() {
    let storage = setup_test_storage("init_empty");

    fre()
        .args(["--storage", &storage, "--test", "init"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&storage).unwrap().trim(), "[]");

    fre()
        .args(["--storage", &storage, "status"])
        .assert()
        .success()
        .stdout(contains("--:--"))
        .stdout(contains("0 episodes"));
}

#[test]
fn test_reg_then_status_counts_today() {
    let storage = setup_test_storage("reg_status");

    fre()
        .args(["--storage", &storage, "--test", "init"])
        .assert()
        .success();

    fre()
        .args(["--storage", &storage, "reg"])
        .assert()
        .success()
        .stdout(contains("Episode registered at"));

    fre()
        .args(["--storage", &storage, "status"])
        .assert()
        .success()
        .stdout(contains("Time since:"))
        .stdout(contains("episodes"));
}

#[test]
fn test_add_and_list_day() {
    let storage = setup_test_storage("add_list");
    init_with_data(&storage);

    fre()
        .args(["--storage", &storage, "list", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("09:00"))
        .stdout(contains("10:30"))
        .stdout(contains("1h 30m"))
        .stdout(contains("📝"));

    // interval crossing midnight: 2025-09-01 10:30 → 2025-09-02 08:15
    fre()
        .args(["--storage", &storage, "list", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("08:15"))
        .stdout(contains("21h 45m"));
}

#[test]
fn test_list_empty_day() {
    let storage = setup_test_storage("list_empty");
    init_with_data(&storage);

    fre()
        .args(["--storage", &storage, "list", "2020-01-01"])
        .assert()
        .success()
        .stdout(contains("No episodes on 2020-01-01"));
}

#[test]
fn test_undo_removes_newest() {
    let storage = setup_test_storage("undo");
    init_with_data(&storage);

    fre()
        .args(["--storage", &storage, "undo"])
        .assert()
        .success()
        .stdout(contains("Removed episode of 2025-09-02 08:15"));

    fre()
        .args(["--storage", &storage, "list", "2025-09-02"])
        .assert()
        .success()
        .stdout(contains("No episodes on 2025-09-02"));
}

#[test]
fn test_undo_on_empty_log_is_a_noop() {
    let storage = setup_test_storage("undo_empty");

    fre()
        .args(["--storage", &storage, "--test", "init"])
        .assert()
        .success();

    for _ in 0..2 {
        fre()
            .args(["--storage", &storage, "undo"])
            .assert()
            .success()
            .stdout(contains("Nothing to undo"));
    }
}

#[test]
fn test_edit_unknown_id_warns_but_succeeds() {
    let storage = setup_test_storage("edit_unknown");
    init_with_data(&storage);

    fre()
        .args(["--storage", &storage, "edit", "no-such-id", "--time", "12:00"])
        .assert()
        .success()
        .stdout(contains("No episode with id no-such-id"));
}

#[test]
fn test_del_unknown_id_warns_but_succeeds() {
    let storage = setup_test_storage("del_unknown");
    init_with_data(&storage);

    fre()
        .args(["--storage", &storage, "del", "no-such-id"])
        .assert()
        .success()
        .stdout(contains("No episode with id no-such-id"));

    fre()
        .args(["--storage", &storage, "list", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("09:00"));
}

#[test]
fn test_edit_moves_time_but_keeps_date() {
    let storage = setup_test_storage("edit_cli");

    let id = {
        let mut log = EpisodeLog::open(StorageSlot::new(&storage));
        log.add_manual(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            "",
        )
        .unwrap()
    };

    fre()
        .args(["--storage", &storage, "edit", &id, "--time", "14:05"])
        .assert()
        .success()
        .stdout(contains("moved to 14:05"));

    fre()
        .args(["--storage", &storage, "list", "2024-03-01"])
        .assert()
        .success()
        .stdout(contains("14:05"));
}

#[test]
fn test_corrupt_storage_resets_to_empty() {
    let storage = setup_test_storage("corrupt");
    fs::write(&storage, "{ this is not an episode dump").unwrap();

    fre()
        .args(["--storage", &storage, "status"])
        .assert()
        .success()
        .stdout(contains("0 episodes"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let storage = setup_test_storage("bad_date");

    fre()
        .args(["--storage", &storage, "--test", "init"])
        .assert()
        .success();

    fre()
        .args(["--storage", &storage, "add", "2025-13-99", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    fre()
        .args(["--storage", &storage, "add", "2025-09-01", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}
