//! Sidebar controller: owns the layout state and the preference store.
//!
//! Storage failures never escape this module. A disabled or unreadable
//! preference file degrades to "always expanded, overlay panel still works";
//! the in-memory state stays the source of truth for the session.

use crate::state::{LayoutState, Viewport};
use crate::store::{PrefStore, COLLAPSED_KEY};

pub struct SidebarController<S> {
    state: LayoutState,
    store: S,
}

impl<S> SidebarController<S> {
    pub fn new(store: S) -> Self {
        Self {
            state: LayoutState::default(),
            store,
        }
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: Default> Default for SidebarController<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: PrefStore> SidebarController<S> {
    /// Re-apply the persisted collapse preference.
    ///
    /// Called at initialization and whenever the viewport widens. Collapsed
    /// is set iff the stored value is the literal string `"true"`; a read
    /// failure leaves the current state untouched.
    pub fn apply_stored_preference(&mut self) -> LayoutState {
        match self.store.get(COLLAPSED_KEY) {
            Ok(stored) => {
                self.state = self.state.with_collapsed(stored.as_deref() == Some("true"));
                log::debug!("sidebar: applied stored preference {:?}", stored);
            }
            Err(e) => {
                log::warn!("sidebar: preference unavailable, keeping current layout: {e}");
            }
        }
        self.state
    }

    /// Activation of the toggle control (click, touch, Enter/Space).
    ///
    /// The viewport is classified by the caller at the moment of the event.
    /// Narrow flips the transient overlay state; wide flips and persists the
    /// collapse preference.
    pub fn handle_toggle_activation(&mut self, viewport: Viewport) -> LayoutState {
        self.state = self.state.toggle_activation(viewport);
        if !viewport.is_narrow() {
            self.persist_collapsed();
        }
        log::debug!(
            "sidebar: toggle ({viewport:?}) -> collapsed={} mobile_open={}",
            self.state.collapsed,
            self.state.mobile_open
        );
        self.state
    }

    /// Open the overlay panel. Only meaningful while narrow; reached through
    /// [`Self::handle_toggle_activation`].
    pub fn open_mobile_panel(&mut self) -> LayoutState {
        self.state = self.state.open_mobile_panel();
        self.state
    }

    /// Close the overlay panel (scrim click, outside click, Escape, or
    /// viewport widening). Idempotent.
    pub fn close_mobile_panel(&mut self) -> LayoutState {
        self.state = self.state.close_mobile_panel();
        self.state
    }

    /// Dismissal request (Escape, scrim click, outside click).
    ///
    /// Only the narrow-viewport overlay is dismissable; while wide the
    /// request leaves the layout untouched.
    pub fn handle_dismiss(&mut self, viewport: Viewport) -> LayoutState {
        if viewport.is_narrow() {
            self.state = self.state.close_mobile_panel();
        }
        self.state
    }

    /// React to the viewport classification changing between events.
    ///
    /// Widening resets the transient overlay state and re-applies the stored
    /// preference; narrowing changes nothing, the overlay starts closed.
    pub fn handle_viewport_change(&mut self, viewport: Viewport) -> LayoutState {
        if !viewport.is_narrow() {
            self.state = self.state.close_mobile_panel();
            self.apply_stored_preference();
        }
        self.state
    }

    fn persist_collapsed(&mut self) {
        let value = if self.state.collapsed { "true" } else { "false" };
        if let Err(e) = self.store.set(COLLAPSED_KEY, value) {
            log::warn!("sidebar: failed to persist preference: {e}");
        }
    }
}
