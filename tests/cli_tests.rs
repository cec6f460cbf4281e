//! Tests for the command-line driver: snapshot in, triggers, snapshot out.

use clap::Parser;
use tab_shuttle::cli::{Cli, run};
use tab_shuttle::platform::HostSnapshot;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "focusedWindow": 1,
    "windows": [
        { "id": 1, "tabs": [{ "id": 10 }, { "id": 11, "active": true }] },
        { "id": 2, "tabs": [{ "id": 20 }] }
    ]
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("tab-shuttle").chain(args.iter().copied())).unwrap()
}

fn layout(output: &str) -> Vec<(u64, Vec<u64>)> {
    let snapshot: HostSnapshot = serde_json::from_str(output).unwrap();
    snapshot
        .windows
        .iter()
        .map(|w| (w.id, w.tabs.iter().map(|t| t.id).collect()))
        .collect()
}

#[tokio::test]
async fn triggers_run_in_order_against_one_memory() {
    let dir = TempDir::new().unwrap();
    let snapshot = write(&dir, "host.json", SNAPSHOT);
    let settings_path = dir.path().join("settings.yaml");
    let settings = settings_path.to_string_lossy();

    let output = run(parse(&[
        "--snapshot",
        &snapshot,
        "--settings",
        &settings,
        "--tab",
        "10",
        "e_moveTabNextWindow",
        "d_moveTabPrevWindow",
    ]))
    .await
    .unwrap();

    // Moving back restores the slot remembered by the first move
    assert_eq!(layout(&output), vec![(1, vec![10, 11]), (2, vec![20])]);
    // A missing settings file is seeded with defaults
    assert!(settings_path.exists());
}

#[tokio::test]
async fn settings_file_controls_window_jumping() {
    let dir = TempDir::new().unwrap();
    let snapshot = write(&dir, "host.json", SNAPSHOT);
    let settings = write(&dir, "settings.yaml", "jumpWindows: false\n");

    let output = run(parse(&[
        "--snapshot",
        &snapshot,
        "--settings",
        &settings,
        "ab_focusNextTab",
    ]))
    .await
    .unwrap();

    let host: HostSnapshot = serde_json::from_str(&output).unwrap();
    assert_eq!(host.focused_window, Some(1));
    assert!(host.windows[0].tabs[0].active);
    assert!(!host.settings.jump_windows);
}

#[tokio::test]
async fn icon_trigger_pops_out_the_current_tab() {
    let dir = TempDir::new().unwrap();
    let snapshot = write(&dir, "host.json", SNAPSHOT);
    let settings = dir.path().join("settings.yaml");

    let output = run(parse(&[
        "--snapshot",
        &snapshot,
        "--settings",
        &settings.to_string_lossy(),
        "icon",
    ]))
    .await
    .unwrap();

    assert_eq!(
        layout(&output),
        vec![(1, vec![10]), (2, vec![20]), (3, vec![11])]
    );
}

#[tokio::test]
async fn unknown_trigger_fails() {
    let dir = TempDir::new().unwrap();
    let snapshot = write(&dir, "host.json", SNAPSHOT);
    let settings = dir.path().join("settings.yaml");

    let err = run(parse(&[
        "--snapshot",
        &snapshot,
        "--settings",
        &settings.to_string_lossy(),
        "f_closeTab",
    ]))
    .await
    .unwrap_err();

    assert!(err.to_string().contains("f_closeTab"));
}

#[tokio::test]
async fn unknown_tab_id_fails() {
    let dir = TempDir::new().unwrap();
    let snapshot = write(&dir, "host.json", SNAPSHOT);
    let settings = dir.path().join("settings.yaml");

    let result = run(parse(&[
        "--snapshot",
        &snapshot,
        "--settings",
        &settings.to_string_lossy(),
        "--tab",
        "99",
        "icon",
    ]))
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn list_commands_needs_no_snapshot() {
    let output = run(parse(&["--list-commands"])).await.unwrap();
    assert!(output.contains("a_toggleTabInPopup"));
    assert_eq!(output.lines().count(), 8);
    assert!(output.contains("Toggle tab in Popup"));
}
