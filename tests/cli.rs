use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::tempdir;

fn bin(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("workbench-starter").unwrap();
    cmd.env("WORKBENCH_STARTER_CONFIG_DIR", config_dir);
    // Keep the host's proxy settings out of the expected output
    for name in [
        "http_proxy",
        "HTTP_PROXY",
        "https_proxy",
        "HTTPS_PROXY",
        "no_proxy",
        "NO_PROXY",
    ] {
        cmd.env_remove(name);
    }
    cmd
}

fn guide(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("guide json")
}

#[test]
fn python_cpu_only_guide() {
    let dir = tempdir().unwrap();
    let output = bin(dir.path())
        .args(["build", "--os", "linux", "--single-line", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let guide = guide(&output);
    assert_eq!(
        guide["start_command"],
        "openvino-workbench --image openvino/workbench:2022.3.0"
    );
    assert_eq!(
        guide["install_command"],
        "python3 -m pip install -U openvino-workbench"
    );
    assert!(guide["pull_command"].is_null());
    assert!(guide["hddl_daemon_command"].is_null());
}

#[test]
fn python_guide_with_gpu_and_myriad() {
    let dir = tempdir().unwrap();
    let output = bin(dir.path())
        .args([
            "build",
            "--os",
            "linux",
            "--enable-gpu",
            "--enable-myriad",
            "--single-line",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        guide(&output)["start_command"],
        "openvino-workbench --image openvino/workbench:2022.3.0 --gpu --myriad"
    );
}

#[test]
fn https_proxy_flag_appends_after_devices() {
    let dir = tempdir().unwrap();
    let output = bin(dir.path())
        .args([
            "build",
            "--os",
            "linux",
            "--enable-gpu",
            "--enable-myriad",
            "--https-proxy",
            "proxy.example.com:8080",
            "--single-line",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        guide(&output)["start_command"],
        "openvino-workbench --image openvino/workbench:2022.3.0 --gpu --myriad \
         --https-proxy proxy.example.com:8080"
    );
}

#[test]
fn docker_cpu_only_guide() {
    let dir = tempdir().unwrap();
    let output = bin(dir.path())
        .args([
            "build",
            "--os",
            "linux",
            "--start-with",
            "docker",
            "--single-line",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let guide = guide(&output);
    assert_eq!(
        guide["start_command"],
        "docker run -p 0.0.0.0:5665:5665 --name workbench -it openvino/workbench:2022.3.0"
    );
    assert_eq!(guide["pull_command"], "docker pull openvino/workbench:2022.3.0");
    assert!(guide["install_command"].is_null());
}

#[test]
fn hddl_selection_surfaces_daemon_command() {
    let dir = tempdir().unwrap();
    let output = bin(dir.path())
        .args([
            "build",
            "--os",
            "linux",
            "--start-with",
            "docker",
            "--enable-hddl",
            "--single-line",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        guide(&output)["hddl_daemon_command"],
        "$HDDL_INSTALL_DIR/bin/hddldaemon"
    );

    let output = bin(dir.path())
        .args([
            "build",
            "--os",
            "linux",
            "--start-with",
            "docker",
            "--single-line",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(guide(&output)["hddl_daemon_command"].is_null());
}

#[test]
fn myriad_and_hddl_flags_conflict() {
    let dir = tempdir().unwrap();
    bin(dir.path())
        .args(["build", "--enable-myriad", "--enable-hddl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn proxy_defaults_from_environment() {
    let dir = tempdir().unwrap();
    let output = bin(dir.path())
        .env("https_proxy", "proxy.example.com:8080")
        .args(["build", "--os", "linux", "--single-line", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        guide(&output)["start_command"],
        "openvino-workbench --image openvino/workbench:2022.3.0 \
         --https-proxy proxy.example.com:8080"
    );
}

#[test]
fn multi_line_layout_follows_operating_system() {
    let dir = tempdir().unwrap();
    let output = bin(dir.path())
        .args(["build", "--os", "windows", "--start-with", "docker", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let start_command = guide(&output)["start_command"].as_str().unwrap().to_string();
    assert!(start_command.contains(" ^\n\t"));

    let output = bin(dir.path())
        .args(["build", "--os", "linux", "--start-with", "docker", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let start_command = guide(&output)["start_command"].as_str().unwrap().to_string();
    assert!(start_command.contains(" \\\n\t"));
}

#[test]
fn unknown_operating_system_is_rejected() {
    let dir = tempdir().unwrap();
    bin(dir.path())
        .args(["build", "--os", "beos"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown operating system"));
}

#[test]
fn config_set_persists_and_flows_into_commands() {
    let dir = tempdir().unwrap();

    bin(dir.path())
        .args(["config", "set", "image", "openvino/workbench:2022.1"])
        .assert()
        .success();

    bin(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("openvino/workbench:2022.1"));

    let output = bin(dir.path())
        .args(["build", "--os", "linux", "--single-line", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(
        guide(&output)["start_command"],
        "openvino-workbench --image openvino/workbench:2022.1"
    );
}

#[test]
fn config_set_rejects_unknown_keys() {
    let dir = tempdir().unwrap();
    bin(dir.path())
        .args(["config", "set", "color", "blue"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn config_path_points_into_the_override_directory() {
    let dir = tempdir().unwrap();
    bin(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}

#[test]
fn per_invocation_overrides_beat_config_defaults() {
    let dir = tempdir().unwrap();
    let output = bin(dir.path())
        .args([
            "build",
            "--os",
            "linux",
            "--start-with",
            "docker",
            "--ip",
            "127.0.0.1",
            "--port",
            "8080",
            "--container-name",
            "wb",
            "--single-line",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        guide(&output)["start_command"],
        "docker run -p 127.0.0.1:8080:5665 --name wb -it openvino/workbench:2022.3.0"
    );
}
