#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, TimeZone};
use rcheckin::core::checkin::CheckinForm;
use rcheckin::db::kv::MemoryKv;
use rcheckin::db::store::RecordStore;
use rcheckin::models::client::ClientMetadata;
use rcheckin::models::record::AttendanceRecord;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test, isolated from the user's real config directory.
pub fn rci() -> Command {
    let home = temp_home();
    let mut cmd = cargo_bin_cmd!("rcheckin");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env("NO_COLOR", "1");
    cmd
}

/// Binary under test with its own HOME, for tests that write the config file.
pub fn rci_with_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rcheckin");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env("NO_COLOR", "1");
    cmd
}

/// Fresh, empty HOME directory reserved for one test.
pub fn isolated_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rcheckin_home_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).ok();
    path
}

pub fn temp_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("rcheckin_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcheckin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Local time in Brasília (UTC-3).
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    FixedOffset::west_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}

pub fn memory_store() -> RecordStore<MemoryKv> {
    RecordStore::new(MemoryKv::new())
}

pub fn lab_client() -> ClientMetadata {
    ClientMetadata {
        ip: "10.0.0.7".to_string(),
        user_agent: "test-agent".to_string(),
        device_hint: "linux / lab".to_string(),
    }
}

pub fn form(name: &str, enrollment: &str) -> CheckinForm {
    CheckinForm::new(name, enrollment, lab_client())
}

pub fn record(name: &str, enrollment: &str, ts: DateTime<FixedOffset>) -> AttendanceRecord {
    AttendanceRecord::new(name, enrollment, ts, lab_client())
}

/// Initialize DB through the CLI without touching the config file
pub fn init_db(db_path: &str) {
    rci()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}
