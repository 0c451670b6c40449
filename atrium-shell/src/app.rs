//! Atrium Studio - Main application shell
//!
//! This file contains the main App struct and the window-level UI.
//! Organized into sections:
//! - UI Definitions (live_design! macro)
//! - App struct and registration
//! - Event Handling (AppMain impl)
//! - Helper Methods (organized by responsibility)
//!
//! The shell is a thin adapter: every sidebar interaction is classified
//! against the live window width and forwarded to the
//! [`atrium_layout::SidebarController`], and the resulting state is applied
//! back to the widget tree.

use atrium_layout::{JsonPrefStore, SidebarController, Viewport};
use atrium_shell::widgets::dashboard::DashboardWidgetRefExt;
use atrium_shell::widgets::sidebar::{NavSection, SidebarRef, SidebarWidgetRefExt};
use makepad_widgets::*;

/// Width (logical px) of the sidebar panel in both interaction models.
const SIDEBAR_WIDTH: f64 = 250.0;

// ============================================================================
// UI DEFINITIONS
// ============================================================================

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use atrium_widgets::theme::APP_BG;
    use atrium_widgets::theme::SLATE_50;
    use atrium_widgets::theme::DIVIDER;
    use atrium_widgets::theme::SCRIM;

    use atrium_shell::widgets::sidebar::Sidebar;
    use atrium_shell::widgets::dashboard::Dashboard;

    App = {{App}} {
        ui: <Window> {
            window: { title: "Atrium Studio", inner_size: vec2(1400, 900) }
            pass: { clear_color: (APP_BG) }
            flow: Overlay

            body = <View> {
                width: Fill, height: Fill
                dashboard_wrapper = <Dashboard> {}
            }

            // Wide viewport: pinned below the header, squeezes the content
            // area through its margin. Hidden while collapsed or narrow.
            pinned_sidebar = <View> {
                width: 250, height: Fill
                abs_pos: vec2(0.0, 62.0)
                visible: false
                show_bg: true
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 0.0);
                        sdf.fill((SLATE_50));
                        // Right border
                        sdf.rect(self.rect_size.x - 1.0, 0., 1.0, self.rect_size.y);
                        sdf.fill((DIVIDER));
                        return sdf.result;
                    }
                }

                pinned_sidebar_content = <Sidebar> {}
            }

            // Narrow viewport: translucent backdrop behind the overlay panel.
            // Clicking it dismisses the panel.
            overlay_scrim = <View> {
                width: Fill, height: Fill
                visible: false
                cursor: Hand
                show_bg: true
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        return (SCRIM);
                    }
                }
            }

            // Narrow viewport: the sidebar as a transient overlay panel,
            // slid in from the left edge.
            mobile_sidebar = <View> {
                width: 250, height: Fill
                abs_pos: vec2(-250.0, 62.0)
                visible: false
                show_bg: true
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 0.0);
                        sdf.fill((SLATE_50));
                        sdf.rect(self.rect_size.x - 1.0, 0., 1.0, self.rect_size.y);
                        sdf.fill((DIVIDER));
                        return sdf.result;
                    }
                }

                mobile_sidebar_content = <Sidebar> {}
            }
        }
    }
}

// ============================================================================
// APP STRUCT
// ============================================================================

#[derive(Live)]
pub struct App {
    #[live]
    ui: WidgetRef,

    /// Layout state and preference persistence; the shell never mutates the
    /// two sidebar booleans directly.
    #[rust]
    controller: SidebarController<JsonPrefStore>,

    #[rust]
    active_section: NavSection,

    #[rust]
    last_window_size: DVec2,

    /// Set on the first draw, once widget areas exist.
    #[rust]
    layout_initialized: bool,

    // Overlay panel slide animation
    #[rust]
    overlay_animating: bool,
    #[rust]
    overlay_anim_start: f64,
    #[rust]
    overlay_slide_in: bool,

    // Pinned panel squeeze animation
    #[rust]
    pin_animating: bool,
    #[rust]
    pin_anim_start: f64,
    #[rust]
    pin_expanding: bool,
}

impl LiveHook for App {
    fn after_new_from_doc(&mut self, _cx: &mut Cx) {
        // Restore the persisted collapse preference. A missing or unreadable
        // preference file leaves the sidebar expanded.
        self.controller.apply_stored_preference();
        ::log::debug!("shell: initial layout {:?}", self.controller.state());
    }
}

// ============================================================================
// WIDGET REGISTRATION
// ============================================================================

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        // Core widget libraries
        makepad_widgets::live_design(cx);
        atrium_widgets::live_design(cx);

        // Shell widgets (sidebar before dashboard; dashboard before the
        // window DSL above resolves)
        atrium_shell::widgets::sidebar::live_design(cx);
        atrium_shell::widgets::dashboard::live_design(cx);
    }
}

// ============================================================================
// EVENT HANDLING
// ============================================================================

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        self.ui.handle_event(cx, event, &mut Scope::empty());

        // First draw: widget areas exist now, apply the restored layout
        if !self.layout_initialized {
            if let Event::Draw(_) = event {
                self.layout_initialized = true;
                self.last_window_size = self.ui.area().rect(cx).size;
                self.sidebars(|sidebar| sidebar.set_selection(cx, NavSection::Dashboard));
                self.apply_layout(cx);
            }
        }

        self.handle_window_resize(cx, event);

        if self.overlay_animating {
            self.update_overlay_animation(cx);
        }
        if self.pin_animating {
            self.update_pin_animation(cx);
        }

        self.handle_toggle_control(cx, event);
        self.handle_dismiss_events(cx, event);

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => &[],
        };
        self.handle_nav_clicks(cx, actions);
    }
}

// ============================================================================
// VIEWPORT & RESIZE METHODS
// ============================================================================

impl App {
    /// Current window width. Queried live at each interaction, never cached,
    /// so a resize between two interactions is always honored.
    fn window_width(&self, cx: &mut Cx) -> f64 {
        let rect = self.ui.area().rect(cx);
        if rect.size.x > 0.0 {
            rect.size.x
        } else {
            self.last_window_size.x
        }
    }

    fn current_viewport(&self, cx: &mut Cx) -> Viewport {
        Viewport::classify(self.window_width(cx))
    }

    /// Track window size and handle narrow/wide transitions.
    fn handle_window_resize(&mut self, cx: &mut Cx, event: &Event) {
        let new_size = match event {
            Event::WindowGeomChange(wg) => wg.new_geom.inner_size,
            Event::Draw(_) => {
                let rect = self.ui.area().rect(cx);
                if rect.size.x <= 0.0 {
                    return;
                }
                rect.size
            }
            _ => return,
        };

        if !self.layout_initialized || new_size == self.last_window_size {
            return;
        }

        let old_viewport = Viewport::classify(self.last_window_size.x);
        let new_viewport = Viewport::classify(new_size.x);
        self.last_window_size = new_size;

        if old_viewport != new_viewport {
            ::log::debug!("shell: viewport {old_viewport:?} -> {new_viewport:?}");
            // Widening closes the overlay panel and re-applies the stored
            // preference; narrowing leaves the state as-is.
            self.controller.handle_viewport_change(new_viewport);
            self.overlay_animating = false;
            self.pin_animating = false;
            self.apply_layout(cx);
        }
    }
}

// ============================================================================
// TOGGLE CONTROL METHODS
// ============================================================================

impl App {
    fn toggle_view(&self) -> ViewRef {
        self.ui
            .view(id!(body.dashboard_wrapper.header.sidebar_toggle))
    }

    /// Hover, click and Enter/Space handling for the header toggle control.
    fn handle_toggle_control(&mut self, cx: &mut Cx, event: &Event) {
        let toggle = self.toggle_view();
        match event.hits(cx, toggle.area()) {
            Hit::FingerHoverIn(_) => {
                toggle.apply_over(cx, live! { draw_bg: { hover: 1.0 } });
                self.ui.redraw(cx);
            }
            Hit::FingerHoverOut(_) => {
                toggle.apply_over(cx, live! { draw_bg: { hover: 0.0 } });
                self.ui.redraw(cx);
            }
            Hit::FingerDown(_) => {
                cx.set_key_focus(toggle.area());
            }
            Hit::FingerUp(_) => {
                self.activate_toggle(cx);
            }
            Hit::KeyDown(ke) => {
                if matches!(ke.key_code, KeyCode::ReturnKey | KeyCode::Space) {
                    self.activate_toggle(cx);
                }
            }
            _ => {}
        }
    }

    /// One activation of the toggle control, from pointer or keyboard.
    fn activate_toggle(&mut self, cx: &mut Cx) {
        let viewport = self.current_viewport(cx);
        let state = self.controller.handle_toggle_activation(viewport);

        if viewport.is_narrow() {
            if state.mobile_open {
                self.start_overlay_slide_in(cx);
            } else {
                self.start_overlay_slide_out(cx);
            }
        } else {
            self.start_pin_animation(cx, !state.collapsed);
        }

        self.apply_toggle_control(cx, viewport);
    }

    /// Mirror the controller's toggle state onto the control's visuals.
    fn apply_toggle_control(&mut self, cx: &mut Cx, viewport: Viewport) {
        let control = self.controller.state().toggle_control(viewport);
        let active = if control.active { 1.0 } else { 0.0 };
        self.toggle_view()
            .apply_over(cx, live! { draw_bg: { active: (active) } });
        self.ui.redraw(cx);
    }
}

// ============================================================================
// DISMISS & NAVIGATION METHODS
// ============================================================================

impl App {
    /// Scrim click, Escape and outside click all dismiss the overlay panel.
    fn handle_dismiss_events(&mut self, cx: &mut Cx, event: &Event) {
        let scrim = self.ui.view(id!(overlay_scrim));
        if let Hit::FingerUp(_) = event.hits(cx, scrim.area()) {
            self.dismiss(cx);
        }

        if let Event::KeyDown(ke) = event {
            if ke.key_code == KeyCode::Escape {
                self.dismiss(cx);
            }
        }

        // Outside click: anywhere that is not the panel or the toggle while
        // the overlay is open.
        if let Event::MouseDown(md) = event {
            if self.controller.state().mobile_open {
                let panel_rect = self.ui.view(id!(mobile_sidebar)).area().rect(cx);
                let toggle_rect = self.toggle_view().area().rect(cx);
                if !panel_rect.contains(md.abs) && !toggle_rect.contains(md.abs) {
                    self.dismiss(cx);
                }
            }
        }
    }

    /// Forward a dismissal request; the controller ignores it while wide.
    /// Safe to call when the panel is already closed.
    fn dismiss(&mut self, cx: &mut Cx) {
        let viewport = self.current_viewport(cx);
        let was_open = self.controller.state().mobile_open;
        let state = self.controller.handle_dismiss(viewport);
        if was_open && !state.mobile_open {
            self.start_overlay_slide_out(cx);
        }
        self.apply_toggle_control(cx, viewport);
    }

    /// Run a closure over both sidebar instances.
    fn sidebars(&mut self, mut f: impl FnMut(&SidebarRef)) {
        let pinned = self
            .ui
            .sidebar(id!(pinned_sidebar.pinned_sidebar_content));
        let mobile = self
            .ui
            .sidebar(id!(mobile_sidebar.mobile_sidebar_content));
        f(&pinned);
        f(&mobile);
    }

    fn handle_nav_clicks(&mut self, cx: &mut Cx, actions: &[Action]) {
        if actions.is_empty() {
            return;
        }
        let clicked = self
            .ui
            .sidebar(id!(pinned_sidebar.pinned_sidebar_content))
            .nav_clicked(actions)
            .or_else(|| {
                self.ui
                    .sidebar(id!(mobile_sidebar.mobile_sidebar_content))
                    .nav_clicked(actions)
            });

        if let Some(section) = clicked {
            self.select_section(cx, section);
        }
    }

    fn select_section(&mut self, cx: &mut Cx, section: NavSection) {
        ::log::debug!("shell: navigate to {section:?}");
        self.active_section = section;
        self.sidebars(|sidebar| sidebar.set_selection(cx, section));
        self.ui
            .dashboard(id!(body.dashboard_wrapper))
            .show_section(cx, section);

        // Selecting from the overlay dismisses it.
        self.dismiss(cx);
        self.ui.redraw(cx);
    }
}

// ============================================================================
// LAYOUT APPLICATION & ANIMATION METHODS
// ============================================================================

impl App {
    fn header_bottom(&self, cx: &mut Cx) -> f64 {
        let rect = self
            .ui
            .view(id!(body.dashboard_wrapper.header))
            .area()
            .rect(cx);
        rect.pos.y + rect.size.y
    }

    /// Position the pinned panel and squeeze the content area to match.
    fn set_pinned_width(&mut self, cx: &mut Cx, width: f64) {
        let header_bottom = self.header_bottom(cx);
        self.ui.view(id!(pinned_sidebar)).apply_over(
            cx,
            live! {
                width: (width)
                abs_pos: (dvec2(0.0, header_bottom))
            },
        );
        self.ui
            .view(id!(body.dashboard_wrapper.content_area))
            .apply_over(
                cx,
                live! {
                    margin: { left: (width) }
                },
            );
    }

    /// Snap the widget tree to the controller's state. Used at startup and
    /// on viewport transitions; user toggles go through the animations.
    fn apply_layout(&mut self, cx: &mut Cx) {
        let viewport = self.current_viewport(cx);
        let state = self.controller.state();

        match viewport {
            Viewport::Wide => {
                self.ui.view(id!(overlay_scrim)).set_visible(cx, false);
                self.ui.view(id!(mobile_sidebar)).set_visible(cx, false);
                self.ui
                    .view(id!(pinned_sidebar))
                    .set_visible(cx, !state.collapsed);
                let width = if state.collapsed { 0.0 } else { SIDEBAR_WIDTH };
                self.set_pinned_width(cx, width);
            }
            Viewport::Narrow => {
                self.ui.view(id!(pinned_sidebar)).set_visible(cx, false);
                self.set_pinned_width(cx, 0.0);
                self.ui
                    .view(id!(overlay_scrim))
                    .set_visible(cx, state.mobile_open);
                self.ui
                    .view(id!(mobile_sidebar))
                    .set_visible(cx, state.mobile_open);
                if state.mobile_open {
                    let header_bottom = self.header_bottom(cx);
                    self.ui.view(id!(mobile_sidebar)).apply_over(
                        cx,
                        live! {
                            abs_pos: (dvec2(0.0, header_bottom))
                        },
                    );
                }
            }
        }

        self.apply_toggle_control(cx, viewport);
        self.ui.redraw(cx);
    }

    /// Start sliding the overlay panel in from the left edge.
    fn start_overlay_slide_in(&mut self, cx: &mut Cx) {
        self.overlay_animating = true;
        self.overlay_anim_start = Cx::time_now();
        self.overlay_slide_in = true;

        let header_bottom = self.header_bottom(cx);
        self.ui.view(id!(mobile_sidebar)).apply_over(
            cx,
            live! {
                abs_pos: (dvec2(-SIDEBAR_WIDTH, header_bottom))
            },
        );
        self.ui.view(id!(overlay_scrim)).set_visible(cx, true);
        self.ui.view(id!(mobile_sidebar)).set_visible(cx, true);
        self.ui
            .sidebar(id!(mobile_sidebar.mobile_sidebar_content))
            .restore_selection_state(cx);
        self.ui.redraw(cx);
    }

    /// Start sliding the overlay panel out.
    fn start_overlay_slide_out(&mut self, cx: &mut Cx) {
        self.overlay_animating = true;
        self.overlay_anim_start = Cx::time_now();
        self.overlay_slide_in = false;
        self.ui.redraw(cx);
    }

    fn update_overlay_animation(&mut self, cx: &mut Cx) {
        const ANIMATION_DURATION: f64 = 0.2;

        let elapsed = Cx::time_now() - self.overlay_anim_start;
        let progress = (elapsed / ANIMATION_DURATION).min(1.0);
        let eased = 1.0 - (1.0 - progress).powi(3);

        let x = if self.overlay_slide_in {
            -SIDEBAR_WIDTH * (1.0 - eased)
        } else {
            -SIDEBAR_WIDTH * eased
        };

        let header_bottom = self.header_bottom(cx);
        self.ui.view(id!(mobile_sidebar)).apply_over(
            cx,
            live! {
                abs_pos: (dvec2(x, header_bottom))
            },
        );

        if progress >= 1.0 {
            self.overlay_animating = false;
            if !self.overlay_slide_in {
                self.ui.view(id!(mobile_sidebar)).set_visible(cx, false);
                self.ui.view(id!(overlay_scrim)).set_visible(cx, false);
            }
        }

        self.ui.redraw(cx);
    }

    /// Start the pinned panel squeeze animation.
    fn start_pin_animation(&mut self, cx: &mut Cx, expanding: bool) {
        self.pin_animating = true;
        self.pin_anim_start = Cx::time_now();
        self.pin_expanding = expanding;

        self.ui.view(id!(pinned_sidebar)).set_visible(cx, true);
        if expanding {
            self.ui
                .sidebar(id!(pinned_sidebar.pinned_sidebar_content))
                .restore_selection_state(cx);
        }
        self.ui.redraw(cx);
    }

    fn update_pin_animation(&mut self, cx: &mut Cx) {
        const ANIMATION_DURATION: f64 = 0.25;

        let elapsed = Cx::time_now() - self.pin_anim_start;
        let progress = (elapsed / ANIMATION_DURATION).min(1.0);
        let eased = 1.0 - (1.0 - progress).powi(3); // Cubic ease-out

        let width = if self.pin_expanding {
            SIDEBAR_WIDTH * eased
        } else {
            SIDEBAR_WIDTH * (1.0 - eased)
        };
        self.set_pinned_width(cx, width);

        if progress >= 1.0 {
            self.pin_animating = false;
            if !self.pin_expanding {
                self.ui.view(id!(pinned_sidebar)).set_visible(cx, false);
            }
        }

        self.ui.redraw(cx);
    }
}

app_main!(App);
