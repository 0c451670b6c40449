use crate::state::{LayoutState, Viewport, NARROW_BREAKPOINT};

#[test]
fn test_classify_at_breakpoint_is_narrow() {
    assert!(Viewport::classify(NARROW_BREAKPOINT).is_narrow());
    assert!(Viewport::classify(320.0).is_narrow());
}

#[test]
fn test_classify_above_breakpoint_is_wide() {
    assert_eq!(Viewport::classify(NARROW_BREAKPOINT + 1.0), Viewport::Wide);
    assert_eq!(Viewport::classify(1400.0), Viewport::Wide);
}

#[test]
fn test_narrow_toggle_flips_mobile_open_only() {
    let state = LayoutState::default();

    let opened = state.toggle_activation(Viewport::Narrow);
    assert!(opened.mobile_open);
    assert!(!opened.collapsed);

    let closed = opened.toggle_activation(Viewport::Narrow);
    assert!(!closed.mobile_open);
    assert_eq!(closed, state);
}

#[test]
fn test_wide_toggle_flips_collapsed_only() {
    let state = LayoutState::default();

    let collapsed = state.toggle_activation(Viewport::Wide);
    assert!(collapsed.collapsed);
    assert!(!collapsed.mobile_open);

    let expanded = collapsed.toggle_activation(Viewport::Wide);
    assert_eq!(expanded, state);
}

#[test]
fn test_close_mobile_panel_is_idempotent() {
    let state = LayoutState::default().open_mobile_panel();

    let closed = state.close_mobile_panel();
    assert!(!closed.mobile_open);
    assert_eq!(closed.close_mobile_panel(), closed);
}

#[test]
fn test_toggle_control_mirrors_overlay_while_narrow() {
    let open = LayoutState::default().open_mobile_panel();
    let control = open.toggle_control(Viewport::Narrow);
    assert!(control.expanded);
    assert!(control.pressed);
    assert!(control.active);

    let closed = open.close_mobile_panel();
    let control = closed.toggle_control(Viewport::Narrow);
    assert!(!control.expanded);
    assert!(!control.pressed);
    assert!(!control.active);
}

#[test]
fn test_toggle_control_mirrors_collapse_while_wide() {
    let expanded = LayoutState::default();
    assert!(expanded.toggle_control(Viewport::Wide).expanded);

    let collapsed = expanded.with_collapsed(true);
    let control = collapsed.toggle_control(Viewport::Wide);
    assert!(!control.expanded);
    assert!(!control.pressed);
    assert!(!control.active);
}

#[test]
fn test_collapsed_preference_survives_narrow_interactions() {
    // The overlay interaction model never touches the persisted flag.
    let state = LayoutState::default().with_collapsed(true);

    let opened = state.toggle_activation(Viewport::Narrow);
    assert!(opened.collapsed);

    let closed = opened.close_mobile_panel();
    assert!(closed.collapsed);
}
