//! Color palette and font styles shared across Atrium Studio widgets.
//!
//! Single source of truth: widgets import these constants inside their own
//! `live_design!` blocks instead of hard-coding colors.

use makepad_widgets::*;

live_design! {
    use link::theme::*;

    // Slate ramp used for chrome and text
    pub SLATE_50 = #F8FAFC
    pub SLATE_200 = #E2E8F0
    pub SLATE_400 = #94A3B8
    pub SLATE_500 = #64748B
    pub SLATE_600 = #475569
    pub SLATE_700 = #334155
    pub SLATE_800 = #1E293B
    pub SLATE_900 = #0F172A

    // Accents
    pub BLUE_100 = #DBEAFE
    pub INDIGO_500 = #6366F1

    // Semantic roles
    pub APP_BG = #EEF2F6
    pub PANEL_BG = #FFFFFF
    pub TEXT_PRIMARY = #0F172A
    pub TEXT_SECONDARY = #64748B
    pub DIVIDER = #E2E8F0
    pub BORDER = #CBD5E1
    pub HOVER_BG = #E2E8F0
    pub TRANSPARENT = #00000000

    // Translucent backdrop behind the narrow-viewport sidebar panel
    pub SCRIM = #0F172A66

    // Fonts
    pub FONT_REGULAR = <THEME_FONT_REGULAR> {}
    pub FONT_BOLD = <THEME_FONT_BOLD> {}
}
