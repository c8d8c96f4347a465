//! Integration tests for the invgen binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `invgen` running inside `dir`, isolated from the user's config and env.
fn invgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("invgen").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn yaml(path: &Path) -> serde_yaml::Value {
    serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn hosts<'a>(doc: &'a serde_yaml::Value, group: &str) -> &'a serde_yaml::Value {
    &doc["all"]["children"][group]["hosts"]
}

#[test]
fn help_flag_succeeds() {
    let temp = TempDir::new().unwrap();
    invgen(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--no-playbook"));
}

#[test]
fn version_flag_prints_version() {
    let temp = TempDir::new().unwrap();
    invgen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn default_run_writes_inventory_playbook_and_log() {
    let temp = TempDir::new().unwrap();
    invgen(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory written to inventory.yaml"))
        .stderr(predicate::str::contains("No input file provided"));

    let doc = yaml(&temp.path().join("inventory.yaml"));
    assert_eq!(
        hosts(&doc, "web_servers")["serverA.example.com"]["ansible_host"],
        "10.0.1.5"
    );
    assert_eq!(
        hosts(&doc, "web_servers")["serverC.example.com"]["ansible_host"],
        "10.0.1.6"
    );
    assert_eq!(
        hosts(&doc, "db_servers")["serverB.example.com"]["ansible_host"],
        "10.0.1.20"
    );
    assert_eq!(
        hosts(&doc, "monitoring_servers")["serverD.example.com"]["ansible_host"],
        "10.0.1.30"
    );

    let playbook = fs::read_to_string(temp.path().join("install_nginx.yml")).unwrap();
    assert!(playbook.contains("hosts: web_servers"));

    let log = fs::read_to_string(temp.path().join("inventory.log")).unwrap();
    assert!(log.contains(" - WARN - No input file provided"));
    assert!(log.contains("Inventory file 'inventory.yaml' created successfully!"));
    assert!(log.contains("All operations completed successfully."));
}

#[test]
fn no_playbook_skips_playbook_file() {
    let temp = TempDir::new().unwrap();
    invgen(temp.path())
        .arg("--no-playbook")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));

    assert!(temp.path().join("inventory.yaml").exists());
    assert!(!temp.path().join("install_nginx.yml").exists());
}

#[test]
fn csv_input_with_custom_output() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("servers.csv"),
        "ip,hostname,group\n192.168.0.10,app1,app\n192.168.0.11,app2,app\n192.168.0.20,cache,redis\n",
    )
    .unwrap();

    invgen(temp.path())
        .args(["--input", "servers.csv", "--output", "hosts.yaml", "--no-playbook"])
        .assert()
        .success();

    let doc = yaml(&temp.path().join("hosts.yaml"));
    assert_eq!(hosts(&doc, "app")["app2"]["ansible_host"], "192.168.0.11");
    assert_eq!(hosts(&doc, "redis")["cache"]["ansible_host"], "192.168.0.20");
    assert!(!temp.path().join("inventory.yaml").exists());
}

#[test]
fn missing_input_file_exits_3() {
    let temp = TempDir::new().unwrap();
    invgen(temp.path())
        .args(["--input", "absent.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("absent.json"))
        .stderr(predicate::str::contains("not found"));

    assert!(!temp.path().join("inventory.yaml").exists());
}

#[test]
fn unsupported_extension_exits_2() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("servers.txt"), "ip,hostname,group\n").unwrap();

    invgen(temp.path())
        .args(["--input", "servers.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn record_without_hostname_writes_nothing() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("servers.json"),
        r#"[{"ip": "10.0.0.1", "group": "web"}]"#,
    )
    .unwrap();

    invgen(temp.path())
        .args(["--input", "servers.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing required field 'hostname'"));

    assert!(!temp.path().join("inventory.yaml").exists());
    assert!(!temp.path().join("install_nginx.yml").exists());

    let log = fs::read_to_string(temp.path().join("inventory.log")).unwrap();
    assert!(log.contains("Process terminated due to errors."));
}

#[test]
fn invalid_json_exits_2() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("servers.json"), "[{").unwrap();

    invgen(temp.path())
        .args(["--input", "servers.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse JSON input"));
}

#[test]
fn unwritable_output_exits_1() {
    let temp = TempDir::new().unwrap();
    invgen(temp.path())
        .args(["--output", "no/such/dir/inventory.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write"));
}

#[test]
fn json_output_format_prints_report() {
    let temp = TempDir::new().unwrap();
    let assert = invgen(temp.path())
        .args(["--output-format", "json", "--no-playbook"])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["records"], 4);
    assert_eq!(report["groups"], 3);
    assert_eq!(report["hosts"], 4);
    assert_eq!(report["source"]["kind"], "builtin");
    assert!(report["playbook_path"].is_null());
}

#[test]
fn quiet_flag_silences_stdout() {
    let temp = TempDir::new().unwrap();
    invgen(temp.path())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn config_file_sets_default_output() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("invgen.toml"),
        "[output]\ninventory = \"from-config.yaml\"\n\n[logging]\nenabled = false\n",
    )
    .unwrap();

    invgen(temp.path())
        .args(["--config", "invgen.toml", "--no-playbook"])
        .assert()
        .success();

    assert!(temp.path().join("from-config.yaml").exists());
    assert!(!temp.path().join("inventory.log").exists());
}

#[test]
fn missing_config_file_exits_4() {
    let temp = TempDir::new().unwrap();
    invgen(temp.path())
        .args(["--config", "nope.toml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn log_file_flag_redirects_log() {
    let temp = TempDir::new().unwrap();
    invgen(temp.path())
        .args(["--log-file", "logs/run.log", "--no-playbook"])
        .assert()
        .success();

    assert!(temp.path().join("logs/run.log").exists());
    assert!(!temp.path().join("inventory.log").exists());
}
