use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

#[test]
fn help_prints_about_text() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Command-based freehand sketchpad with undo/redo and scalable export",
        ));
}

#[test]
fn no_flags_prints_usage() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--script"))
        .stdout(predicate::str::contains("pointer-down"));
}

#[test]
fn replays_a_script_and_exports_svg() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("drag.json");
    let output_path = temp.path().join("out.svg");
    std::fs::write(
        &script_path,
        r#"[
            {"event": "pointer-down", "x": 10, "y": 10},
            {"event": "pointer-move", "x": 10, "y": 50},
            {"event": "pointer-move", "x": 50, "y": 50},
            {"event": "pointer-up", "x": 50, "y": 50}
        ]"#,
    )
    .unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .args(["--output", output_path.to_str().unwrap()])
        .args(["--scale", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let svg = std::fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("<polyline points=\"40,40 40,200 200,200\""));
    assert!(svg.contains("width=\"1024\""));
}

#[test]
fn undo_in_script_removes_the_stroke_from_the_export() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("undone.json");
    let output_path = temp.path().join("out.svg");
    std::fs::write(
        &script_path,
        r#"[
            {"event": "pointer-down", "x": 10, "y": 10},
            {"event": "pointer-move", "x": 50, "y": 50},
            {"event": "pointer-up", "x": 50, "y": 50},
            {"event": "undo"}
        ]"#,
    )
    .unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .success();

    let svg = std::fs::read_to_string(&output_path).unwrap();
    assert!(!svg.contains("<polyline"));
}

#[test]
fn malformed_script_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("broken.json");
    std::fs::write(&script_path, "{not json").unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

#[test]
fn rejects_non_positive_scale() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("empty.json");
    std::fs::write(&script_path, "[]").unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .args(["--scale", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scale factor must be positive"));
}

#[test]
fn init_config_writes_once_then_refuses() {
    let temp = TempDir::new().unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));

    let config_path = temp.path().join("sketchpad").join("config.toml");
    assert!(config_path.exists());

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn configured_canvas_size_drives_export_dimensions() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("sketchpad");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[canvas]\nwidth = 100\nheight = 50\nexport_scale = 2.0\n",
    )
    .unwrap();

    let script_path = temp.path().join("empty.json");
    let output_path = temp.path().join("out.svg");
    std::fs::write(&script_path, "[]").unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .success();

    let svg = std::fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("width=\"200\""));
    assert!(svg.contains("height=\"100\""));
}
