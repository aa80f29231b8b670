#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fre() -> Command {
    cargo_bin_cmd!("frecuencia")
}

/// Create a unique test storage path inside the system temp dir and remove any existing file
pub fn setup_test_storage(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_frecuencia.json", name));
    let storage = path.to_string_lossy().to_string();
    fs::remove_file(&storage).ok();
    storage
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize storage and add a small dataset useful for many tests
pub fn init_with_data(storage: &str) {
    // init storage (creates the empty slot)
    fre()
        .args(["--storage", storage, "--test", "init"])
        .assert()
        .success();

    // backfill a few episodes via the CLI
    fre()
        .args(["--storage", storage, "add", "2025-09-01", "09:00"])
        .assert()
        .success();

    fre()
        .args([
            "--storage",
            storage,
            "add",
            "2025-09-01",
            "10:30",
            "--notes",
            "after breakfast",
        ])
        .assert()
        .success();

    fre()
        .args(["--storage", storage, "add", "2025-09-02", "08:15"])
        .assert()
        .success();
}
