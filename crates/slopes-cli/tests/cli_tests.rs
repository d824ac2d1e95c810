//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn slopes() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("slopes").unwrap();
    cmd.env_remove("SLOPES_SEED");
    cmd
}

#[test]
fn check_correct_answer() {
    slopes()
        .args(["check", "--slope", "2", "--intercept", "-5", "--answer", "y= 2x + -5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("correct"));
}

#[test]
fn check_swapped_form_with_extra_whitespace() {
    slopes()
        .args(["check", "--slope", "2", "--intercept", "-5", "--answer", "  y=   -5 +  2x "])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("correct"));
}

#[test]
fn check_rejects_subtraction_form() {
    slopes()
        .args(["check", "--slope", "2", "--intercept", "-5", "--answer", "y= 2x - 5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("incorrect"));
}

#[test]
fn check_show_forms() {
    slopes()
        .args([
            "check",
            "--slope",
            "0",
            "--intercept",
            "7",
            "--answer",
            "y=7",
            "--show-forms",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("incorrect"))
        .stdout(predicate::str::contains("\"y= 7\""));
}

#[test]
fn check_zero_x_is_an_error() {
    slopes()
        .args(["check", "--slope", "1", "--intercept", "1", "--x", "0", "--answer", "y= 1x + 1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("non-zero"));
}

#[test]
fn plot_writes_svg() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("line.svg");

    slopes()
        .current_dir(dir.path())
        .args(["plot", "--slope", "1", "--intercept", "0", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Plot written to"));

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg width=\"800\" height=\"500\""));
    assert!(svg.contains("<polyline"));
}

#[test]
fn plot_writes_html_with_default_name() {
    let dir = TempDir::new().unwrap();

    slopes()
        .current_dir(dir.path())
        .args(["plot", "--slope", "-3", "--intercept", "4", "--x", "2", "--format", "html"])
        .assert()
        .success();

    let html = std::fs::read_to_string(dir.path().join("slopes-plot.html")).unwrap();
    assert!(html.contains("(2, -2)"));
    assert!(html.contains("<svg"));
}

#[test]
fn plot_writes_json_commands() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plot.json");

    slopes()
        .current_dir(dir.path())
        .args(["plot", "--slope", "2", "--intercept", "1", "--format", "json", "--output"])
        .arg(&path)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["canvas"]["width"], 800);
    assert_eq!(json["commands"][0]["kind"], "clear");
}

#[test]
fn plot_honors_config_canvas() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[canvas]\nwidth = 200\nheight = 100\nunit_pixels = 10\n").unwrap();
    let path = dir.path().join("small.svg");

    slopes()
        .current_dir(dir.path())
        .args(["plot", "--slope", "1", "--intercept", "1", "--config"])
        .arg(&config)
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg width=\"200\" height=\"100\""));
}

#[test]
fn plot_discovers_local_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("slopes.toml"),
        "[canvas]\nwidth = 300\nheight = 200\nunit_pixels = 10\n",
    )
    .unwrap();

    slopes()
        .current_dir(dir.path())
        .args(["plot", "--slope", "1", "--intercept", "1"])
        .assert()
        .success();

    let svg = std::fs::read_to_string(dir.path().join("slopes-plot.svg")).unwrap();
    assert!(svg.starts_with("<svg width=\"300\" height=\"200\""));
}

#[test]
fn plot_rejects_zero_unit_in_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("slopes.toml"), "[canvas]\nunit_pixels = 0\n").unwrap();

    slopes()
        .current_dir(dir.path())
        .args(["plot", "--slope", "1", "--intercept", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unit_pixels must be positive"));
}

#[test]
fn plot_ignores_invalid_env_seed() {
    let dir = TempDir::new().unwrap();
    slopes()
        .current_dir(dir.path())
        .env("SLOPES_SEED", "abc")
        .args(["plot", "--slope", "1", "--intercept", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plot written to"));
    assert!(dir.path().join("slopes-plot.svg").exists());
}

#[test]
fn plot_unknown_format() {
    let dir = TempDir::new().unwrap();
    slopes()
        .current_dir(dir.path())
        .args(["plot", "--slope", "1", "--intercept", "1", "--format", "png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    slopes()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created slopes.toml"));

    assert!(dir.path().join("slopes.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    slopes().current_dir(dir.path()).arg("init").assert().success();

    slopes()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn missing_config_file() {
    slopes()
        .args(["plot", "--slope", "1", "--intercept", "1", "--config", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
