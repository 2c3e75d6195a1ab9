use chrono::Utc;
use predicates::str::contains;

mod common;
use common::{read_records, record, seed_state, setup_data_dir, student, tdl};

#[test]
fn test_init_creates_storage_dir() {
    let dir = setup_data_dir("init_creates");
    std::fs::remove_dir_all(&dir).ok();

    tdl()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Storage dir"));

    assert!(std::path::Path::new(&dir).exists());
}

#[test]
fn test_add_unknown_student_without_details_fails() {
    let dir = setup_data_dir("add_unknown");

    tdl()
        .args(["--data-dir", &dir, "add", "S999"])
        .assert()
        .failure()
        .stderr(contains("not in the roster"));
}

#[test]
fn test_add_with_explicit_details() {
    let dir = setup_data_dir("add_explicit");

    tdl()
        .args([
            "--data-dir",
            &dir,
            "add",
            "S1",
            "--name",
            "Alice",
            "--class",
            "7A",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded tardy event for Alice (S1)"));

    let records = read_records(&dir);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].nis, "S1");
    assert!(!records[0].id.is_empty());
}

#[test]
fn test_add_looks_up_roster_by_nis() {
    let dir = setup_data_dir("add_roster");
    seed_state(&dir, &[], &[student("Budi", "S7", "8B")]);

    tdl()
        .args(["--data-dir", &dir, "add", "S7"])
        .assert()
        .success()
        .stdout(contains("Budi (S7)"));

    let records = read_records(&dir);
    assert_eq!(records[0].name, "Budi");
    assert_eq!(records[0].class_name, "8B");
}

#[test]
fn test_add_explicit_details_do_not_touch_roster() {
    let dir = setup_data_dir("add_no_roster_write");

    tdl()
        .args([
            "--data-dir",
            &dir,
            "add",
            "S1",
            "--name",
            "Alice",
            "--class",
            "7A",
        ])
        .assert()
        .success();

    assert!(common::read_roster(&dir).is_empty());
}

#[test]
fn test_del_is_idempotent() {
    let dir = setup_data_dir("del_idempotent");
    seed_state(
        &dir,
        &[record("100-abcdefghi", "Alice", "S1", "7A", 1700000000000)],
        &[],
    );

    tdl()
        .args(["--data-dir", &dir, "del", "100-abcdefghi", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    tdl()
        .args(["--data-dir", &dir, "del", "100-abcdefghi", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to do"));

    assert!(read_records(&dir).is_empty());
}

#[test]
fn test_del_by_fallback_id() {
    let dir = setup_data_dir("del_fallback");
    // record without a real id, as rows pulled from the cloud may be
    seed_state(&dir, &[record("", "Alice", "S1", "7A", 1700000000000)], &[]);

    tdl()
        .args(["--data-dir", &dir, "del", "S1:1700000000000", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    assert!(read_records(&dir).is_empty());
}

#[test]
fn test_list_window_filters_records() {
    let dir = setup_data_dir("list_window");
    let now_ms = Utc::now().timestamp_millis();
    seed_state(
        &dir,
        &[
            record("a-1", "Alice", "S1", "7A", now_ms),
            record("b-1", "Budi", "S2", "7B", 1577836800000), // 2020-01-01
        ],
        &[],
    );

    tdl()
        .args(["--data-dir", &dir, "list", "--window", "day"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("1 of 2 records shown"));
}

#[test]
fn test_list_class_filter_is_exact() {
    let dir = setup_data_dir("list_class");
    let now_ms = Utc::now().timestamp_millis();
    seed_state(
        &dir,
        &[
            record("a-1", "Alice", "S1", "7A", now_ms),
            record("b-1", "Budi", "S2", "7B", now_ms),
        ],
        &[],
    );

    tdl()
        .args(["--data-dir", &dir, "list", "--class", "7A"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("1 of 2 records shown"));

    // "7" matches nothing: no prefix matching
    tdl()
        .args(["--data-dir", &dir, "list", "--class", "7"])
        .assert()
        .success()
        .stdout(contains("No records in window 'all' for class 7."));
}

#[test]
fn test_list_empty_state() {
    let dir = setup_data_dir("list_empty");

    tdl()
        .args(["--data-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(contains("No records in window 'all'."));
}

#[test]
fn test_fresh_dir_persists_exactly_one_record_after_add() {
    // A fresh start must never write out empty state before the first load;
    // the first add on an empty dir therefore persists exactly one record.
    let dir = setup_data_dir("fresh_persist");

    tdl()
        .args([
            "--data-dir",
            &dir,
            "add",
            "S1",
            "--name",
            "Alice",
            "--class",
            "7A",
        ])
        .assert()
        .success();

    assert_eq!(read_records(&dir).len(), 1);
}

#[test]
fn test_corrupt_blob_is_treated_as_empty() {
    let dir = setup_data_dir("corrupt_blob");
    std::fs::write(
        std::path::Path::new(&dir).join("tardyRecords.json"),
        "{not json",
    )
    .expect("write corrupt blob");

    tdl()
        .args(["--data-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(contains("No records in window 'all'."));
}

#[test]
fn test_stats_overview_and_top_offenders() {
    let dir = setup_data_dir("stats_overview");
    let now_ms = Utc::now().timestamp_millis();
    seed_state(
        &dir,
        &[
            record("a-1", "Alice", "S1", "7A", now_ms),
            record("a-2", "Alice", "S1", "7A", now_ms - 1000),
            record("b-1", "Budi", "S2", "7B", now_ms - 2000),
        ],
        &[],
    );

    tdl()
        .args(["--data-dir", &dir, "stats", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("Overview"))
        .stdout(contains("By class"))
        .stdout(contains("By month"))
        .stdout(contains("Top 1 offenders"))
        .stdout(contains("Alice"));
}

#[test]
fn test_stats_empty_state() {
    let dir = setup_data_dir("stats_empty");

    tdl()
        .args(["--data-dir", &dir, "stats"])
        .assert()
        .success()
        .stdout(contains("No records yet."));
}

#[test]
fn test_config_print_shows_storage_dir() {
    let dir = setup_data_dir("config_print");

    tdl()
        .args(["--data-dir", &dir, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("storage_dir"))
        .stdout(contains("top_limit"));
}

#[test]
fn test_log_records_mutations() {
    let dir = setup_data_dir("log_mutations");

    tdl()
        .args(["--data-dir", &dir, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("The operation log is empty."));

    tdl()
        .args([
            "--data-dir",
            &dir,
            "add",
            "S1",
            "--name",
            "Alice",
            "--class",
            "7A",
        ])
        .assert()
        .success();

    tdl()
        .args(["--data-dir", &dir, "log", "--print"])
        .assert()
        .success()
        .stdout(contains(" | add | "));
}

#[test]
fn test_cloud_status_unconfigured() {
    let dir = setup_data_dir("cloud_status");

    tdl()
        .args(["--data-dir", &dir, "cloud"])
        .assert()
        .success()
        .stdout(contains("Cloud mirroring is not configured."));
}

#[test]
fn test_cloud_partial_flags_fail() {
    let dir = setup_data_dir("cloud_partial");

    tdl()
        .args(["--data-dir", &dir, "cloud", "--url", "https://x.example"])
        .assert()
        .failure()
        .stderr(contains("both --url and --key"));
}

#[test]
fn test_cloud_sync_without_config_warns() {
    let dir = setup_data_dir("cloud_sync_unconf");

    tdl()
        .args(["--data-dir", &dir, "cloud", "--sync"])
        .assert()
        .success()
        .stdout(contains("Cloud is not configured."));
}

#[test]
fn test_cloud_clear_removes_credentials() {
    let dir = setup_data_dir("cloud_clear");
    std::fs::write(
        std::path::Path::new(&dir).join("cloudConfig.json"),
        r#"{"url":"https://x.example","key":"k"}"#,
    )
    .expect("write cloud config");

    tdl()
        .args(["--data-dir", &dir, "cloud", "--clear"])
        .assert()
        .success()
        .stdout(contains("Cloud mirroring disabled."));

    assert!(!std::path::Path::new(&dir).join("cloudConfig.json").exists());

    tdl()
        .args(["--data-dir", &dir, "cloud"])
        .assert()
        .success()
        .stdout(contains("Cloud mirroring is not configured."));
}
