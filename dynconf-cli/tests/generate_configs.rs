//! Black-box tests for `dynconf generate`.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dynconf() -> Command {
    Command::cargo_bin("dynconf").expect("binary built")
}

fn write_settings(dir: &Path) -> std::path::PathBuf {
    let settings = dir.join("dynconf.yaml");
    fs::write(
        &settings,
        format!("conf_dir: {}\nlisten_port: 8080\n", dir.display()),
    )
    .unwrap();
    settings
}

fn current_username() -> String {
    let uid = uzers::get_current_uid();
    uzers::get_user_by_uid(uid)
        .expect("user entry")
        .name()
        .to_string_lossy()
        .into_owned()
}

#[test]
fn generates_config_then_reports_no_change() {
    let dir = TempDir::new().unwrap();
    let settings = write_settings(dir.path());
    fs::write(
        dir.path().join("dynamic_configs.conf"),
        "app.conf=app.conf.tmpl\n",
    )
    .unwrap();
    fs::write(dir.path().join("app.conf.tmpl"), "user={{ username }}\n").unwrap();

    dynconf()
        .arg("generate")
        .arg("--settings")
        .arg(&settings)
        .env("VIRTUAL_ENV", "/venvs/app")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded definition file:"))
        .stdout(predicate::str::contains("Loaded template:"))
        .stdout(predicate::str::contains("Updated:"));

    let content = fs::read_to_string(dir.path().join("app.conf")).unwrap();
    assert_eq!(content, format!("user={}\n", current_username()));

    dynconf()
        .arg("generate")
        .arg("--settings")
        .arg(&settings)
        .env("VIRTUAL_ENV", "/venvs/app")
        .assert()
        .success()
        .stdout(predicate::str::contains("No change:"));
}

#[test]
fn settings_path_can_come_from_the_environment() {
    let dir = TempDir::new().unwrap();
    let settings = write_settings(dir.path());
    fs::write(
        dir.path().join("dynamic_configs.conf"),
        "env.conf=env.conf.tmpl\n",
    )
    .unwrap();
    fs::write(dir.path().join("env.conf.tmpl"), "venv={{ venv }}\n").unwrap();

    dynconf()
        .arg("generate")
        .env("DYNCONF_SETTINGS", &settings)
        .env("VIRTUAL_ENV", "/venvs/env-test")
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("env.conf")).unwrap();
    assert_eq!(content, "venv=/venvs/env-test\n");
}

#[test]
fn empty_definitions_warn_but_succeed() {
    let dir = TempDir::new().unwrap();
    let settings = write_settings(dir.path());
    fs::write(
        dir.path().join("dynamic_configs.conf"),
        "# nothing defined yet\n",
    )
    .unwrap();

    dynconf()
        .arg("generate")
        .arg("--settings")
        .arg(&settings)
        .env("VIRTUAL_ENV", "/venvs/app")
        .assert()
        .success()
        .stderr(predicate::str::contains("No dynamic configs defined"));
}

#[test]
fn missing_virtual_env_aborts_before_any_write() {
    let dir = TempDir::new().unwrap();
    let settings = write_settings(dir.path());
    fs::write(
        dir.path().join("dynamic_configs.conf"),
        "app.conf=app.conf.tmpl\n",
    )
    .unwrap();
    fs::write(dir.path().join("app.conf.tmpl"), "user={{ username }}\n").unwrap();

    dynconf()
        .arg("generate")
        .arg("--settings")
        .arg(&settings)
        .env_remove("VIRTUAL_ENV")
        .assert()
        .failure()
        .stderr(predicate::str::contains("VIRTUAL_ENV"));

    assert!(
        !dir.path().join("app.conf").exists(),
        "no file may be written when the context cannot be built"
    );
}

#[test]
fn dry_run_reports_would_update_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let settings = write_settings(dir.path());
    fs::write(
        dir.path().join("dynamic_configs.conf"),
        "app.conf=app.conf.tmpl\n",
    )
    .unwrap();
    fs::write(dir.path().join("app.conf.tmpl"), "port={{ settings.listen_port }}\n").unwrap();

    dynconf()
        .arg("generate")
        .arg("--settings")
        .arg(&settings)
        .arg("--dry-run")
        .env("VIRTUAL_ENV", "/venvs/app")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update:"));

    assert!(!dir.path().join("app.conf").exists());
}

#[test]
fn missing_settings_file_fails_with_path_in_message() {
    dynconf()
        .arg("generate")
        .arg("--settings")
        .arg("/nonexistent/dynconf.yaml")
        .env("VIRTUAL_ENV", "/venvs/app")
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/dynconf.yaml"));
}
