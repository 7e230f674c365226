mod common;

use predicates::prelude::*;

#[test]
fn prints_posix_attributes_as_toml() {
    common::binary()
        .args(["--platform", "centos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[instrumental]"))
        .stdout(predicate::str::contains("user = \"nobody\""))
        .stdout(predicate::str::contains(
            "pid_file = \"/opt/instrumentald/instrumentald.pid\"",
        ));
}

#[test]
fn windows_json_omits_process_fields() {
    let output = common::binary()
        .args(["--platform", "windows", "--format", "json"])
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let attrs = &value["instrumental"];
    assert_eq!(
        attrs["script_dir"],
        "C:\\Program Files (x86)\\Instrumental Tools\\scripts"
    );
    assert!(attrs.get("pid_file").is_none());
    assert!(attrs.get("log_file").is_none());
    assert!(attrs.get("user").is_none());
}

#[test]
fn overrides_file_is_layered() {
    let (_tmp, path) = common::write_overrides(
        "[instrumental]\napi_key = \"deadbeef\"\nenable_scripts = true\n",
    );
    common::binary()
        .args(["--platform", "linux", "--overrides"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key = \"deadbeef\""))
        .stdout(predicate::str::contains("enable_scripts = true"));
}

#[test]
fn missing_overrides_file_fails_with_context() {
    common::binary()
        .args(["--overrides", "/nonexistent/instrumental-overrides.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to load overrides"))
        .stderr(
            predicate::str::contains("/nonexistent/instrumental-overrides.toml")
                .count(1),
        );
}

#[test]
fn help_lists_every_option_in_usage() {
    common::binary()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[--format toml|json] [--log-level <level>]",
        ));
}

#[test]
fn rejects_unknown_arguments() {
    common::binary()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown argument '--bogus'"));
}
