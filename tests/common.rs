use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

pub fn binary() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("instrumentald-defaults"))
}

pub fn write_overrides(contents: &str) -> (TempDir, std::path::PathBuf) {
    let tmp = tempfile::tempdir().expect("create tempdir");
    let path = tmp.path().join("overrides.toml");
    fs::write(&path, contents).expect("write overrides");
    (tmp, path)
}
