//! Sidebar layout state and pure update functions.
//!
//! Nothing in this module touches storage or the widget tree. The shell
//! calls these functions with a freshly classified [`Viewport`] and applies
//! the returned state.

/// Width threshold (logical px) separating the narrow and wide layouts.
///
/// Matches the stylesheet breakpoint of the shell: a window of exactly this
/// width still counts as narrow.
pub const NARROW_BREAKPOINT: f64 = 991.0;

/// Live classification of the window width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    /// Classify a window width against [`NARROW_BREAKPOINT`].
    ///
    /// Callers classify at the moment of each interaction rather than cache
    /// the result, so a resize between two interactions is always honored.
    pub fn classify(width: f64) -> Self {
        if width <= NARROW_BREAKPOINT {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, Viewport::Narrow)
    }
}

/// The two sidebar booleans.
///
/// `collapsed` is the persisted wide-viewport preference; `mobile_open` is
/// the transient narrow-viewport overlay state. They are never both
/// meaningful at once: the live viewport decides which one an interaction
/// targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutState {
    /// Wide viewport: sidebar hidden, content takes the full width.
    pub collapsed: bool,
    /// Narrow viewport: overlay panel currently shown.
    pub mobile_open: bool,
}

impl LayoutState {
    /// Flip whichever flag the current viewport makes meaningful.
    pub fn toggle_activation(self, viewport: Viewport) -> Self {
        if viewport.is_narrow() {
            if self.mobile_open {
                self.close_mobile_panel()
            } else {
                self.open_mobile_panel()
            }
        } else {
            Self {
                collapsed: !self.collapsed,
                ..self
            }
        }
    }

    pub fn open_mobile_panel(self) -> Self {
        Self {
            mobile_open: true,
            ..self
        }
    }

    /// Idempotent: closing an already-closed panel returns the same state.
    pub fn close_mobile_panel(self) -> Self {
        Self {
            mobile_open: false,
            ..self
        }
    }

    pub fn with_collapsed(self, collapsed: bool) -> Self {
        Self { collapsed, ..self }
    }

    /// State the toggle control mirrors for assistive tech and visuals.
    ///
    /// Narrow viewport: the control reflects the overlay panel. Wide
    /// viewport: it reflects the sidebar being shown, i.e. not collapsed.
    pub fn toggle_control(self, viewport: Viewport) -> ToggleControl {
        let shown = if viewport.is_narrow() {
            self.mobile_open
        } else {
            !self.collapsed
        };
        ToggleControl {
            expanded: shown,
            pressed: shown,
            active: shown,
        }
    }
}

/// Accessibility mirror of the sidebar toggle control.
///
/// `expanded` and `pressed` are exposed as the control's accessibility
/// attributes; `active` drives its highlighted visual. All three track the
/// sidebar being visible under the current interaction model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleControl {
    pub expanded: bool,
    pub pressed: bool,
    pub active: bool,
}
