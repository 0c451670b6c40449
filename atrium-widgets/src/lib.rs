//! # Atrium Widgets
//!
//! Shared reusable UI components for the Atrium Studio shell, built on the
//! [Makepad](https://github.com/makepad/makepad) UI framework.
//!
//! ## Modules
//!
//! - [`theme`] - Color palette and font styles
//! - [`page_card`] - Rounded content card used by shell pages

pub mod page_card;
pub mod theme;

use makepad_widgets::Cx;

/// Register all shared widgets with Makepad.
///
/// Must be called during app initialization, typically in
/// `LiveRegister::live_register`. Theme is registered first as the other
/// widgets depend on its color and font definitions.
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
    page_card::live_design(cx);
}
