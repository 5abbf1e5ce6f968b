use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cntkn(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cntkn").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_count_inline_text() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .args(["count", "hello world"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_count_dash_reads_stdin() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .args(["count", "-"])
        .write_stdin("hello world")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_count_implicit_stdin() {
    let tmp = TempDir::new().unwrap();
    let out = stdout_of(cntkn(&tmp).arg("count").write_stdin("stdin input"));
    assert!(out.trim().parse::<usize>().is_ok(), "got {:?}", out);
}

#[test]
fn test_default_fallback_to_count() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp).arg("hello").assert().success().stdout("1\n");
}

#[test]
fn test_multiple_text_inputs() {
    let tmp = TempDir::new().unwrap();
    let out = stdout_of(cntkn(&tmp).args(["count", "hello", "world"]));
    let counts: Vec<usize> = out.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(counts.len(), 2);
    assert!(counts.iter().sum::<usize>() >= 2);
}

#[test]
fn test_multiple_files_in_flag_order() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("file1.txt"), "hello world").unwrap();
    fs::write(tmp.path().join("file2.txt"), "foo").unwrap();

    cntkn(&tmp)
        .args(["count", "-f", "file1.txt", "--file", "file2.txt"])
        .assert()
        .success()
        .stdout("2\n1\n");
}

#[test]
fn test_missing_file_fails_without_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("present.txt"), "foo").unwrap();

    cntkn(&tmp)
        .args(["count", "-f", "present.txt", "-f", "missing.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_invalid_model_error() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .args(["count", "foo", "--model", "invalid-model"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not a supported model"));
}

#[test]
fn test_prefixed_model_accepted() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .args(["count", "hello world", "-m", "gpt-4o-2024-08-06"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_error_on_empty_input() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .arg("count")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: no input provided"));
}

#[test]
fn test_no_arguments_at_all() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: no input provided"));
}

#[test]
fn test_quiet_flag() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .args(["count", "foo", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_quiet_still_reports_errors() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .args(["count", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input provided"));
}

#[test]
fn test_help_messages() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp).arg("-h").assert().success();
    cntkn(&tmp).arg("--help").assert().success();
    cntkn(&tmp)
        .args(["count", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "cntkn {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_color_flags() {
    let tmp = TempDir::new().unwrap();
    for flag in ["--color", "--no-color"] {
        cntkn(&tmp)
            .args(["count", "foo", flag])
            .assert()
            .success()
            .stdout("1\n");
    }
}

#[test]
fn test_no_color_when_piped() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .args(["count", "foo", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_models_command() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exact models:"))
        .stdout(predicate::str::contains("  - gpt-4o\n"))
        .stdout(predicate::str::contains("Model name prefixes (allowed):"))
        .stdout(predicate::str::contains("  - gpt-4o-*\n"));
}

#[test]
fn test_project_config_sets_default_model() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("pyproject.toml"),
        "[tool.cntkn]\ndefault_model = \"foo-bar\"\n",
    )
    .unwrap();
    let nested = tmp.path().join("sub");
    fs::create_dir(&nested).unwrap();

    Command::cargo_bin("cntkn")
        .unwrap()
        .current_dir(&nested)
        .args(["count", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'foo-bar' is not a supported model"));
}

#[test]
fn test_local_config_overrides_project() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("pyproject.toml"),
        "[tool.cntkn]\ndefault_model = \"foo-bar\"\n",
    )
    .unwrap();
    fs::write(tmp.path().join(".cntkn.toml"), "default_model = \"gpt-4\"\n").unwrap();

    cntkn(&tmp)
        .args(["count", "hello world"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_model_flag_overrides_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".cntkn.toml"), "default_model = \"foo-bar\"\n").unwrap();

    cntkn(&tmp)
        .args(["count", "hello world", "-m", "gpt-4o"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_config_color_on_and_flag_override() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".cntkn.toml"), "color = \"on\"\n").unwrap();

    cntkn(&tmp)
        .args(["count", "foo", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));

    cntkn(&tmp)
        .args(["count", "foo", "--verbose", "--no-color"])
        .assert()
        .success()
        .stdout("foo → 1 tokens\n");
}

#[test]
fn test_malformed_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".cntkn.toml"), "default_model = [unclosed\n").unwrap();

    cntkn(&tmp)
        .args(["count", "foo"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn test_debug_logs_go_to_stderr() {
    let tmp = TempDir::new().unwrap();
    cntkn(&tmp)
        .args(["--debug", "foo"])
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("resolved inputs"));
}
