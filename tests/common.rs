#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cf() -> Command {
    cargo_bin_cmd!("clockflow")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (and its session pointer).
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clockflow.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{}.session", &db_path)).ok();
    db_path
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a throwaway input file and return its path
pub fn temp_input(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_in.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write temp input");
    p
}

/// Initialize DB and register one company / cost center / employee,
/// the minimum dataset most import tests need.
pub fn init_db_with_org(db_path: &str) {
    cf().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    cf().args([
        "--db", db_path, "--test", "company", "add", "--name", "Acme Industries",
    ])
    .assert()
    .success();

    cf().args([
        "--db",
        db_path,
        "--test",
        "cost-center",
        "add",
        "--company-id",
        "1",
        "--name",
        "Plant 1",
    ])
    .assert()
    .success();

    cf().args([
        "--db",
        db_path,
        "--test",
        "employee",
        "add",
        "--matricula",
        "100",
        "--name",
        "Jane Doe",
        "--company-id",
        "1",
        "--cost-center-id",
        "1",
    ])
    .assert()
    .success();
}
