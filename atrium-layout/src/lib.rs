//! # Atrium Layout
//!
//! Framework-free sidebar layout model for the Atrium Studio shell.
//!
//! The shell presents its navigation sidebar in one of two interaction
//! models, decided by a live window-width classification:
//!
//! - **Wide viewport**: the sidebar is pinned next to the content and the
//!   user can collapse it. The collapsed flag is persisted across runs.
//! - **Narrow viewport**: the sidebar is a transient overlay panel. Its
//!   open flag lives only for the current session.
//!
//! This crate holds the state, the update rules, and the preference store.
//! It has no UI dependency so every rule is unit-testable headless; the
//! shell crate is a thin adapter that feeds events in and applies the
//! resulting [`LayoutState`] to the widget tree.
//!
//! ## Modules
//!
//! - [`state`] - [`LayoutState`], [`Viewport`] classification, pure update functions
//! - [`store`] - [`PrefStore`] trait with JSON-file and in-memory backends
//! - [`controller`] - [`SidebarController`] tying state to a store

pub mod controller;
pub mod state;
pub mod store;

pub use controller::SidebarController;
pub use state::{LayoutState, ToggleControl, Viewport, NARROW_BREAKPOINT};
pub use store::{JsonPrefStore, MemoryPrefStore, PrefStore, StoreError, COLLAPSED_KEY};

#[cfg(test)]
mod tests {
    mod controller_test;
    mod state_test;
    mod store_test;
}
