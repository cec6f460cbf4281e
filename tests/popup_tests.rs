//! Tests for toggling tabs in and out of popup windows.

mod common;

use common::{FlakyPlatform, geometry, host};
use tab_shuttle::PositionMemory;
use tab_shuttle::platform::{WindowSnapshot, WindowType};
use tab_shuttle::popup::toggle_tab_in_popup;

#[tokio::test]
async fn popup_round_trip_returns_tab_to_its_slot() {
    let origin_geometry = geometry(10, 20, 800, 600);
    let platform = host(vec![
        WindowSnapshot::normal(1, &[10, 11, 12]).with_geometry(origin_geometry),
        WindowSnapshot::normal(2, &[20]),
    ]);
    let memory = PositionMemory::new();

    toggle_tab_in_popup(&platform, &memory.toggles, Some(11))
        .await
        .unwrap();

    assert_eq!(
        platform.layout(),
        vec![(1, vec![10, 12]), (2, vec![20]), (3, vec![11])]
    );
    let popup = platform.window_now(3).unwrap();
    assert_eq!(popup.window_type, WindowType::Popup);
    assert_eq!(popup.geometry, origin_geometry);
    assert_eq!(platform.focused_window(), Some(3));
    assert!(memory.toggles.lock().contains(11));

    toggle_tab_in_popup(&platform, &memory.toggles, Some(11))
        .await
        .unwrap();

    assert_eq!(platform.layout(), vec![(1, vec![10, 11, 12]), (2, vec![20])]);
    assert_eq!(platform.focused_window(), Some(1));
    assert_eq!(platform.active_tab_of(1), Some(11));
    assert!(memory.toggles.lock().is_empty());
}

#[tokio::test]
async fn closed_origin_is_recreated_at_stored_geometry() {
    let origin_geometry = geometry(0, 0, 1024, 768);
    let platform = host(vec![
        WindowSnapshot::normal(1, &[10]).with_geometry(origin_geometry),
        WindowSnapshot::normal(2, &[20]),
    ]);
    let memory = PositionMemory::new();

    // Popping the only tab out closes window 1
    toggle_tab_in_popup(&platform, &memory.toggles, Some(10))
        .await
        .unwrap();
    assert_eq!(platform.layout(), vec![(2, vec![20]), (3, vec![10])]);

    toggle_tab_in_popup(&platform, &memory.toggles, Some(10))
        .await
        .unwrap();

    assert_eq!(platform.layout(), vec![(2, vec![20]), (4, vec![10])]);
    let restored = platform.window_now(4).unwrap();
    assert_eq!(restored.window_type, WindowType::Normal);
    assert_eq!(restored.geometry, origin_geometry);
    assert_eq!(platform.focused_window(), Some(4));
    assert!(memory.toggles.lock().is_empty());
}

#[tokio::test]
async fn externally_detached_tab_is_docked_into_a_normal_window() {
    let popup_geometry = geometry(50, 60, 400, 300);
    let platform = host(vec![
        WindowSnapshot::normal(1, &[10]),
        WindowSnapshot::normal(2, &[20])
            .with_type(WindowType::Popup)
            .with_geometry(popup_geometry),
    ]);
    let memory = PositionMemory::new();

    toggle_tab_in_popup(&platform, &memory.toggles, Some(20))
        .await
        .unwrap();

    assert_eq!(platform.layout(), vec![(1, vec![10]), (3, vec![20])]);
    let docked = platform.window_now(3).unwrap();
    assert_eq!(docked.window_type, WindowType::Normal);
    assert_eq!(docked.geometry, popup_geometry);
    assert!(memory.toggles.lock().is_empty());
}

#[tokio::test]
async fn app_windows_count_as_detached() {
    let platform = host(vec![
        WindowSnapshot::normal(1, &[10]),
        WindowSnapshot::normal(2, &[20]).with_type(WindowType::App),
    ]);
    let memory = PositionMemory::new();

    toggle_tab_in_popup(&platform, &memory.toggles, Some(20))
        .await
        .unwrap();

    assert_eq!(
        platform.window_now(3).unwrap().window_type,
        WindowType::Normal
    );
}

#[tokio::test]
async fn missing_tab_id_uses_the_current_tab() {
    let platform = host(vec![
        WindowSnapshot::normal(1, &[10, 11]).with_active(11),
        WindowSnapshot::normal(2, &[20]),
    ]);
    let memory = PositionMemory::new();

    toggle_tab_in_popup(&platform, &memory.toggles, None)
        .await
        .unwrap();

    assert_eq!(
        platform.layout(),
        vec![(1, vec![10]), (2, vec![20]), (3, vec![11])]
    );
    assert!(memory.toggles.lock().contains(11));
}

#[tokio::test]
async fn incognito_tab_gets_an_incognito_popup() {
    let platform = host(vec![WindowSnapshot::normal(1, &[10, 11]).incognito()]);
    let memory = PositionMemory::new();

    toggle_tab_in_popup(&platform, &memory.toggles, Some(10))
        .await
        .unwrap();

    let popup = platform.window_now(2).unwrap();
    assert!(popup.incognito);
    assert_eq!(popup.window_type, WindowType::Popup);
}

#[tokio::test]
async fn unknown_tab_is_an_error() {
    let platform = host(vec![WindowSnapshot::normal(1, &[10])]);
    let memory = PositionMemory::new();

    let err = toggle_tab_in_popup(&platform, &memory.toggles, Some(99))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(memory.toggles.lock().is_empty());
}

#[tokio::test]
async fn failed_pop_out_records_nothing() {
    let platform = FlakyPlatform::new(host(vec![WindowSnapshot::normal(1, &[10, 11])]));
    platform.set_fail_create(true);
    let memory = PositionMemory::new();

    let result = toggle_tab_in_popup(&platform, &memory.toggles, Some(10)).await;

    assert!(result.is_err());
    assert!(memory.toggles.lock().is_empty());
    assert_eq!(platform.inner.layout(), vec![(1, vec![10, 11])]);
}

#[tokio::test]
async fn failed_restore_keeps_the_entry_for_a_retry() {
    let platform = FlakyPlatform::new(host(vec![WindowSnapshot::normal(1, &[10, 11])]));
    let memory = PositionMemory::new();

    toggle_tab_in_popup(&platform, &memory.toggles, Some(11))
        .await
        .unwrap();
    assert_eq!(platform.inner.layout(), vec![(1, vec![10]), (2, vec![11])]);

    platform.set_fail_focus(true);
    let result = toggle_tab_in_popup(&platform, &memory.toggles, Some(11)).await;
    assert!(result.is_err());
    assert!(memory.toggles.lock().contains(11));
    assert_eq!(platform.inner.layout(), vec![(1, vec![10]), (2, vec![11])]);

    platform.set_fail_focus(false);
    toggle_tab_in_popup(&platform, &memory.toggles, Some(11))
        .await
        .unwrap();
    assert_eq!(platform.inner.layout(), vec![(1, vec![10, 11])]);
    assert!(memory.toggles.lock().is_empty());
}
