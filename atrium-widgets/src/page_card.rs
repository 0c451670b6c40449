//! Rounded content card used by the shell's placeholder pages.

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::PANEL_BG;

    pub PageCard = <RoundedView> {
        width: 420, height: Fit
        padding: 32
        flow: Down
        spacing: 10
        show_bg: true
        draw_bg: {
            border_radius: 12.0
            fn get_color(self) -> vec4 {
                return (PANEL_BG);
            }
        }
    }
}
