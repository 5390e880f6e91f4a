#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique workbook path inside the system temp dir and remove any
/// leftover workbook/log from a previous run
pub fn setup_test_workbook(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.json", name));
    let wb = path.to_string_lossy().to_string();
    fs::remove_file(&wb).ok();
    fs::remove_file(path.with_extension("log")).ok();
    wb
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a workbook and create timesheet #1 (week ending 2025-10-23, a Thursday)
pub fn init_workbook_with_sheet(wb: &str) {
    rts()
        .args(["--workbook", wb, "--test", "init"])
        .assert()
        .success();

    rts()
        .args([
            "--workbook",
            wb,
            "new",
            "--employee",
            "Jane Doe",
            "--employee-id",
            "E-042",
            "--foreman",
            "Bob Smith",
            "--week-ending",
            "2025-10-23",
        ])
        .assert()
        .success();
}

/// Run a command against the workbook and assert success
pub fn ok(wb: &str, args: &[&str]) {
    let mut full = vec!["--workbook", wb];
    full.extend_from_slice(args);
    rts().args(&full).assert().success();
}

pub fn read_workbook(wb: &str) -> serde_json::Value {
    let content = fs::read_to_string(wb).expect("read workbook");
    serde_json::from_str(&content).expect("parse workbook")
}
