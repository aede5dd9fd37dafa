//! Integration tests for the launchpad binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DATA_FILES: &[&str] = &[
    "Database.csv",
    "train_multi_output.csv",
    "test_multi_output.csv",
];

fn project_with_data() -> TempDir {
    let temp = TempDir::new().unwrap();
    for file in DATA_FILES {
        fs::write(temp.path().join(file), "timestamp,solar,wind\n").unwrap();
    }
    temp
}

fn launchpad(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("launchpad"));
    cmd.current_dir(dir);
    cmd.env_remove("LAUNCHPAD_PYTHON");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("launchpad"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Preflight checks and launcher"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("launchpad"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn missing_data_files_are_listed() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("Database.csv"), "x\n")?;

    launchpad(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("   - train_multi_output.csv"))
        .stdout(predicate::str::contains("   - test_multi_output.csv"))
        .stdout(predicate::str::contains("   - Database.csv").not())
        .stdout(predicate::str::contains(
            "Please ensure all data files are in the current directory.",
        ))
        .stdout(predicate::str::contains("Checking Python packages").not())
        .stderr(predicate::str::contains("Missing required data files:"));
    Ok(())
}

#[test]
fn quiet_flag_keeps_only_status_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    launchpad(temp.path())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking data files").not())
        .stdout(predicate::str::contains("Please ensure").not())
        .stdout(predicate::str::contains("Setup").not())
        .stderr(predicate::str::contains(
            "Missing required data files: Database.csv, train_multi_output.csv, test_multi_output.csv",
        ));

    launchpad(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking data files"));
    Ok(())
}

#[test]
fn default_run_does_not_log_warnings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    launchpad(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("WARN").not());
    Ok(())
}

#[test]
fn propagate_exit_code_reports_failure()-> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    launchpad(temp.path())
        .args(["run", "--propagate-exit-code"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn project_flag_sets_root() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = TempDir::new()?;
    let project = TempDir::new()?;
    fs::create_dir_all(project.path().join(".launchpad"))?;
    fs::write(
        project.path().join(".launchpad/config.yml"),
        "app_name: Grid Forecast\ndata_files: [grid.csv]\n",
    )?;

    launchpad(cwd.path())
        .arg("--project")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Grid Forecast Setup"))
        .stdout(predicate::str::contains("   - grid.csv"));
    Ok(())
}

#[test]
fn explicit_missing_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    launchpad(temp.path())
        .args(["--config", "nope.yml", "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join(".launchpad"))?;
    fs::write(temp.path().join(".launchpad/config.yml"), "app:\n  script: \"\"\n")?;

    launchpad(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn check_json_reports_missing_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    let output = launchpad(temp.path()).args(["check", "--json"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["missing_files"].as_array().map(Vec::len), Some(3));
    assert!(report.get("missing_packages").is_none());
    Ok(())
}

#[test]
fn completions_generate_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    launchpad(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("launchpad"));
    Ok(())
}

#[cfg(unix)]
mod with_stub_python {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Writes an interpreter stand-in that logs each invocation and fails
    /// the given `-c` probes.
    fn stub_python(dir: &Path, failing_imports: &[&str], pip_exit: i32) -> PathBuf {
        let mut cases = String::new();
        for module in failing_imports {
            cases.push_str(&format!("  \"-c import {}\") exit 1 ;;\n", module));
        }
        let script = format!(
            "#!/bin/sh\necho \"$*\" >> \"{log}\"\ncase \"$*\" in\n{cases}  \"-m pip \"*) exit {pip} ;;\nesac\nexit 0\n",
            log = dir.join("calls.log").display(),
            cases = cases,
            pip = pip_exit,
        );
        let path = dir.join("fake-python");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn calls(dir: &Path) -> Vec<String> {
        fs::read_to_string(dir.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn installs_once_then_launches() -> Result<(), Box<dyn std::error::Error>> {
        let project = project_with_data();
        let bin = TempDir::new()?;
        let python = stub_python(bin.path(), &["xgboost"], 0);

        launchpad(project.path())
            .env("LAUNCHPAD_PYTHON", &python)
            .assert()
            .success()
            .stdout(predicate::str::contains("All data files found!"))
            .stdout(predicate::str::contains("All packages installed successfully!"))
            .stdout(predicate::str::contains("http://localhost:8501"))
            .stderr(predicate::str::contains("Missing packages: xgboost"));

        let log = calls(bin.path());
        assert_eq!(log.iter().filter(|l| l.starts_with("-c import")).count(), 9);
        assert!(log.contains(&"-c import sklearn".to_string()));
        assert_eq!(
            log.iter().filter(|l| l.starts_with("-m pip install")).count(),
            1
        );
        assert_eq!(
            log.last().map(String::as_str),
            Some("-m streamlit run streamlit_app_complete.py")
        );
        Ok(())
    }

    #[test]
    fn nothing_missing_never_installs() -> Result<(), Box<dyn std::error::Error>> {
        let project = project_with_data();
        let bin = TempDir::new()?;
        let python = stub_python(bin.path(), &[], 0);

        launchpad(project.path())
            .env("LAUNCHPAD_PYTHON", &python)
            .assert()
            .success()
            .stdout(predicate::str::contains("All required packages are installed!"));

        let log = calls(bin.path());
        assert!(!log.iter().any(|l| l.starts_with("-m pip")));
        assert!(log.iter().any(|l| l.starts_with("-m streamlit run")));
        Ok(())
    }

    #[test]
    fn failed_install_skips_launch() -> Result<(), Box<dyn std::error::Error>> {
        let project = project_with_data();
        let bin = TempDir::new()?;
        let python = stub_python(bin.path(), &["tensorflow"], 1);

        launchpad(project.path())
            .env("LAUNCHPAD_PYTHON", &python)
            .assert()
            .success()
            .stderr(predicate::str::contains("Error installing packages:"));

        let log = calls(bin.path());
        assert!(!log.iter().any(|l| l.starts_with("-m streamlit")));
        Ok(())
    }

    #[test]
    fn dry_run_does_not_install_or_launch() -> Result<(), Box<dyn std::error::Error>> {
        let project = project_with_data();
        let bin = TempDir::new()?;
        let python = stub_python(bin.path(), &["plotly"], 0);

        launchpad(project.path())
            .env("LAUNCHPAD_PYTHON", &python)
            .args(["run", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Would run:"));

        let log = calls(bin.path());
        assert!(log.iter().all(|l| l.starts_with("-c import")));
        Ok(())
    }

    #[test]
    fn check_json_lists_missing_packages() -> Result<(), Box<dyn std::error::Error>> {
        let project = project_with_data();
        let bin = TempDir::new()?;
        let python = stub_python(bin.path(), &["seaborn"], 0);

        let output = launchpad(project.path())
            .env("LAUNCHPAD_PYTHON", &python)
            .args(["check", "--json"])
            .output()?;

        assert_eq!(output.status.code(), Some(1));
        let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(report["missing_packages"], serde_json::json!(["seaborn"]));
        assert!(calls(bin.path()).iter().all(|l| l.starts_with("-c import")));
        Ok(())
    }

    #[test]
    fn port_from_config_is_passed_to_streamlit() -> Result<(), Box<dyn std::error::Error>> {
        let project = project_with_data();
        fs::create_dir_all(project.path().join(".launchpad"))?;
        fs::write(
            project.path().join(".launchpad/config.yml"),
            "app:\n  port: 8610\n",
        )?;
        let bin = TempDir::new()?;
        let python = stub_python(bin.path(), &[], 0);

        launchpad(project.path())
            .env("LAUNCHPAD_PYTHON", &python)
            .assert()
            .success()
            .stdout(predicate::str::contains("http://localhost:8610"));

        assert_eq!(
            calls(bin.path()).last().map(String::as_str),
            Some("-m streamlit run streamlit_app_complete.py --server.port 8610")
        );
        Ok(())
    }
}
