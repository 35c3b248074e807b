//! End-to-end tests for `button-studio layout` commands.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Runs the binary with an isolated config directory.
fn run(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_button-studio"))
        .env("BUTTON_STUDIO_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn current_layout(config_dir: &Path) -> Value {
    let output = run(config_dir, &["layout", "show", "--json"]);
    assert_success(&output);
    serde_json::from_str(&stdout(&output)).expect("Should parse JSON output")
}

// ============================================================================
// Show
// ============================================================================

#[test]
fn test_show_default_layout() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["layout", "show"]);

    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("Default Layout (default)"));
    assert!(text.contains("RIGHT (11)"));
    assert!(text.contains("text-shadow"));
}

#[test]
fn test_show_json() {
    let dir = TempDir::new().unwrap();
    let layout = current_layout(dir.path());

    assert_eq!(layout["id"], "default");
    assert_eq!(layout["columnWidths"]["center"], 40);
    assert_eq!(layout["columns"]["left"][0]["type"], "saved-designs");
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_move_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["layout", "move", "text-shadow", "left", "0"]);

    assert_success(&output);
    assert!(stdout(&output).contains("Moved text-shadow to left[0]"));

    let layout = current_layout(dir.path());
    assert_eq!(layout["columns"]["left"][0]["id"], "text-shadow");
    assert_eq!(layout["columns"]["left"][0]["column"], "left");
    assert_eq!(layout["columns"]["right"].as_array().unwrap().len(), 10);
    assert_eq!(layout["columns"]["right"][5]["id"], "dimensions");
    assert_eq!(layout["columns"]["right"][5]["order"], 5);
}

#[test]
fn test_move_unknown_widget_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["layout", "move", "ghost", "left", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("widget not found: ghost"));
}

#[test]
fn test_move_to_unknown_column_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["layout", "move", "spacing", "sidebar", "0"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_add_existing_type_relocates() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["layout", "add", "box-shadow", "center", "1"]);

    assert_success(&output);
    assert!(stdout(&output).contains("already placed"));

    let layout = current_layout(dir.path());
    assert_eq!(layout["columns"]["center"][1]["type"], "box-shadow");
    assert_eq!(layout["columns"]["center"].as_array().unwrap().len(), 3);
}

#[test]
fn test_add_unknown_type_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["layout", "add", "sparkles", "left"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("sparkles"));
}

#[test]
fn test_toggle_and_collapse() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["layout", "toggle", "css-output"]);
    assert_success(&output);
    assert!(stdout(&output).contains("css-output is now disabled"));

    let output = run(dir.path(), &["layout", "collapse", "spacing"]);
    assert_success(&output);
    assert!(stdout(&output).contains("spacing is now collapsed"));

    let layout = current_layout(dir.path());
    assert_eq!(layout["columns"]["center"][1]["enabled"], false);
    assert_eq!(layout["columns"]["right"][7]["collapsed"], true);
}

// ============================================================================
// Column Widths
// ============================================================================

#[test]
fn test_widths() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["layout", "widths", "20", "50", "30"]);

    assert_success(&output);
    let layout = current_layout(dir.path());
    assert_eq!(layout["columnWidths"]["left"], 20);
    assert_eq!(layout["columnWidths"]["center"], 50);
}

#[test]
fn test_widths_over_budget_needs_force() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["layout", "widths", "40", "40", "40"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(current_layout(dir.path())["columnWidths"]["left"], 30);

    let output = run(dir.path(), &["layout", "widths", "40", "40", "40", "--force"]);
    assert_success(&output);
    assert_eq!(current_layout(dir.path())["columnWidths"]["left"], 40);
}

// ============================================================================
// Saved Layouts
// ============================================================================

#[test]
fn test_save_list_load_delete() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["layout", "save", "Compact", "-d", "small screens"]);
    assert_success(&output);

    let output = run(dir.path(), &["layout", "list", "--json"]);
    assert_success(&output);
    let rows: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Compact");
    assert_eq!(rows[0]["description"], "small screens");
    assert_eq!(rows[0]["widgetCount"], 16);
    let id = rows[0]["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("layout-"));

    assert_success(&run(dir.path(), &["layout", "widths", "10", "80", "10"]));
    assert_success(&run(dir.path(), &["layout", "load", &id]));
    let layout = current_layout(dir.path());
    assert_eq!(layout["name"], "Compact");
    assert_eq!(layout["columnWidths"]["center"], 40);

    assert_success(&run(dir.path(), &["layout", "delete", &id]));
    let output = run(dir.path(), &["layout", "list"]);
    assert_success(&output);
    assert!(stdout(&output).contains("No saved layouts."));
}

#[test]
fn test_save_blank_name_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["layout", "save", "  "]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_load_missing_fails() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["layout", "load", "layout-1"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("saved layout not found"));
}

// ============================================================================
// Reset and Render
// ============================================================================

#[test]
fn test_reset() {
    let dir = TempDir::new().unwrap();
    assert_success(&run(dir.path(), &["layout", "move", "live-preview", "left", "0"]));

    let output = run(dir.path(), &["layout", "reset"]);
    assert_success(&output);
    assert!(stdout(&output).contains("Layout reset to default."));

    let layout = current_layout(dir.path());
    assert_eq!(layout["columns"]["center"][0]["id"], "live-preview");
}

#[test]
fn test_render() {
    let dir = TempDir::new().unwrap();
    assert_success(&run(dir.path(), &["layout", "toggle", "design-history"]));

    let output = run(dir.path(), &["layout", "render"]);
    assert_success(&output);

    let plan: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(plan["columns"][0]["column"], "left");
    assert_eq!(plan["columns"][0]["panels"].as_array().unwrap().len(), 2);
    assert_eq!(plan["columns"][1]["panels"][0]["body"]["block"], "preview-canvas");
}

#[test]
fn test_corrupt_store_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let storage = dir.path().join("storage");
    std::fs::create_dir_all(&storage).unwrap();
    std::fs::write(storage.join("widget-layout.current.json"), "{ nope").unwrap();

    let layout = current_layout(dir.path());
    assert_eq!(layout["id"], "default");
}

#[test]
fn test_unwritable_data_dir_exits_with_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a regular file").unwrap();
    let data_dir = blocker.join("storage");

    let output = run(
        dir.path(),
        &["config", "set", "--data-dir", data_dir.to_str().unwrap()],
    );
    assert_success(&output);

    let output = run(dir.path(), &["layout", "toggle", "css-output"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(!stdout(&output).contains("is now"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not saved"));
}
