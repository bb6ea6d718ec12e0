//! Binary-level tests for the CLI surface. No network calls: every case
//! fails before any client is constructed.

use assert_cmd::Command;
use predicates::prelude::*;

fn tinker() -> Command {
    let mut cmd = Command::cargo_bin("tinker").expect("binary built");
    // Keep ambient developer configuration out of the tests.
    let dir = std::env::temp_dir();
    cmd.current_dir(dir);
    for var in [
        "TINKER_SECRET",
        "TINKER_DOMAIN",
        "TINKER_PROVIDER_ENDPOINT",
        "TINKER_ADMIN_ENDPOINT",
        "TINKER_POLL_INTERVAL_SECS",
        "TINKER_MAX_WAIT_SECS",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn configured() -> Command {
    let mut cmd = tinker();
    cmd.env("TINKER_SECRET", "s3cret");
    cmd.env("TINKER_DOMAIN", "example.com");
    cmd
}

#[test]
fn no_arguments_shows_usage() {
    tinker()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_lists_commands() {
    tinker()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-project"))
        .stdout(predicate::str::contains("destroy-project"))
        .stdout(predicate::str::contains("deploy-shared-infra"));
}

#[test]
fn missing_secret_is_reported() {
    tinker()
        .args(["destroy-project", "demo1", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TINKER_SECRET"));
}

#[test]
fn missing_domain_is_reported() {
    let mut cmd = tinker();
    cmd.env("TINKER_SECRET", "s3cret");
    cmd.args(["destroy-project", "demo1", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TINKER_DOMAIN"));
}

#[test]
fn invalid_project_name_is_rejected() {
    configured()
        .args(["create-project", "--name", "bad_name", "--region", "us-east-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid project name"));
}

#[test]
fn unknown_region_is_rejected() {
    configured()
        .args(["create-project", "--name", "demo1", "--region", "mars-north-1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown region"));
}

#[test]
fn destroy_validates_the_name_before_any_network_call() {
    configured()
        .args(["destroy-project", "x", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid project name"));
}

#[test]
fn deploy_rejects_a_malformed_domain_flag() {
    configured()
        .args([
            "deploy-shared-infra",
            "--region",
            "us-east-1",
            "--domain",
            "nodots",
            "--hosted-zone-id",
            "Z0449667",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid domain"));
}

#[test]
fn malformed_base_domain_is_reported() {
    let mut cmd = tinker();
    cmd.env("TINKER_SECRET", "s3cret");
    cmd.env("TINKER_DOMAIN", "not a domain");
    cmd.args(["destroy-project", "demo1", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TINKER_DOMAIN"));
}
