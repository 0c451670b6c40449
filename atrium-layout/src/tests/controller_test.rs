use crate::controller::SidebarController;
use crate::state::Viewport;
use crate::store::{MemoryPrefStore, PrefStore, StoreError, COLLAPSED_KEY};

/// Store double that fails every access, as when storage is disabled.
struct FailingStore;

impl PrefStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::NoConfigDir)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::NoConfigDir)
    }
}

fn store_with(value: &str) -> MemoryPrefStore {
    let mut store = MemoryPrefStore::new();
    store.set(COLLAPSED_KEY, value).unwrap();
    store
}

#[test]
fn test_apply_stored_preference_collapses_only_on_literal_true() {
    let mut controller = SidebarController::new(store_with("true"));
    assert!(controller.apply_stored_preference().collapsed);

    let mut controller = SidebarController::new(store_with("false"));
    assert!(!controller.apply_stored_preference().collapsed);

    // Anything but the literal "true" leaves the sidebar expanded.
    let mut controller = SidebarController::new(store_with("TRUE"));
    assert!(!controller.apply_stored_preference().collapsed);

    let mut controller = SidebarController::new(MemoryPrefStore::new());
    assert!(!controller.apply_stored_preference().collapsed);
}

#[test]
fn test_apply_stored_preference_clears_stale_collapse() {
    let mut controller = SidebarController::new(store_with("false"));
    controller.handle_toggle_activation(Viewport::Wide);
    assert!(controller.state().collapsed);

    // The store said "false" when last written by someone else; re-reading
    // must win over the in-memory flag.
    let mut controller = SidebarController::new(store_with("false"));
    controller.open_mobile_panel();
    assert!(!controller.apply_stored_preference().collapsed);
}

#[test]
fn test_wide_toggle_round_trip_restores_state_and_store() {
    let mut controller = SidebarController::new(MemoryPrefStore::new());
    let original = controller.state();

    controller.handle_toggle_activation(Viewport::Wide);
    assert!(controller.state().collapsed);
    assert_eq!(
        controller.store().get(COLLAPSED_KEY).unwrap().as_deref(),
        Some("true")
    );

    controller.handle_toggle_activation(Viewport::Wide);
    assert_eq!(controller.state(), original);
    assert_eq!(
        controller.store().get(COLLAPSED_KEY).unwrap().as_deref(),
        Some("false")
    );
}

#[test]
fn test_narrow_toggle_opens_then_closes_without_persisting() {
    let mut controller = SidebarController::new(MemoryPrefStore::new());

    let opened = controller.handle_toggle_activation(Viewport::Narrow);
    assert!(opened.mobile_open);
    let control = opened.toggle_control(Viewport::Narrow);
    assert!(control.expanded);
    assert!(control.pressed);

    let closed = controller.handle_toggle_activation(Viewport::Narrow);
    assert!(!closed.mobile_open);

    // Overlay state is transient; nothing reaches the store.
    assert_eq!(controller.store().get(COLLAPSED_KEY).unwrap(), None);
}

#[test]
fn test_viewport_widening_closes_panel_then_applies_preference() {
    let mut controller = SidebarController::new(store_with("true"));
    controller.apply_stored_preference();

    // User narrowed the window and opened the overlay.
    controller.handle_toggle_activation(Viewport::Narrow);
    assert!(controller.state().mobile_open);

    let state = controller.handle_viewport_change(Viewport::Wide);
    assert!(!state.mobile_open);
    assert!(state.collapsed);
}

#[test]
fn test_viewport_narrowing_changes_nothing() {
    let mut controller = SidebarController::new(store_with("true"));
    controller.apply_stored_preference();
    let before = controller.state();

    let after = controller.handle_viewport_change(Viewport::Narrow);
    assert_eq!(after, before);
}

#[test]
fn test_storage_failure_degrades_to_expanded() {
    let mut controller = SidebarController::new(FailingStore);

    // Read failure: state untouched, no panic, no error surfaced.
    let state = controller.apply_stored_preference();
    assert!(!state.collapsed);

    // Write failure: the in-memory flag still flips for this session.
    let state = controller.handle_toggle_activation(Viewport::Wide);
    assert!(state.collapsed);

    // The overlay panel keeps working regardless of storage.
    let state = controller.handle_toggle_activation(Viewport::Narrow);
    assert!(state.mobile_open);
}

#[test]
fn test_dismiss_while_wide_leaves_layout_untouched() {
    // Escape or an outside click while wide must not disturb the sidebar,
    // whether it is collapsed or expanded.
    let mut controller = SidebarController::new(store_with("true"));
    controller.apply_stored_preference();
    let before = controller.state();
    assert_eq!(controller.handle_dismiss(Viewport::Wide), before);
    assert!(controller.state().collapsed);

    let mut controller = SidebarController::new(MemoryPrefStore::new());
    let before = controller.state();
    assert_eq!(controller.handle_dismiss(Viewport::Wide), before);
}

#[test]
fn test_dismiss_while_narrow_closes_open_panel() {
    let mut controller = SidebarController::new(MemoryPrefStore::new());
    controller.handle_toggle_activation(Viewport::Narrow);
    assert!(controller.state().mobile_open);

    let state = controller.handle_dismiss(Viewport::Narrow);
    assert!(!state.mobile_open);

    // A second dismissal with the panel already closed changes nothing.
    assert_eq!(controller.handle_dismiss(Viewport::Narrow), state);
}

#[test]
fn test_close_mobile_panel_is_a_no_op_when_closed() {
    let mut controller = SidebarController::new(MemoryPrefStore::new());
    let before = controller.state();
    assert_eq!(controller.close_mobile_panel(), before);
}
