//! Navigation sidebar widget.
//!
//! Instanced twice by the shell: once as the wide-viewport pinned panel and
//! once as the narrow-viewport overlay panel. Selection highlighting lives
//! here; the shell decides when each instance is visible.

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use atrium_widgets::theme::FONT_REGULAR;
    use atrium_widgets::theme::SLATE_50;
    use atrium_widgets::theme::SLATE_200;
    use atrium_widgets::theme::SLATE_600;
    use atrium_widgets::theme::BLUE_100;
    use atrium_widgets::theme::DIVIDER;

    pub SidebarNavButton = <Button> {
        width: Fill, height: Fit
        padding: {top: 12, bottom: 12, left: 12, right: 12}
        margin: 0
        align: {x: 0.0, y: 0.5}

        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance selected: 0.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let color = mix(
                    mix((SLATE_50), (SLATE_200), self.hover),
                    (BLUE_100),
                    self.selected
                );
                sdf.box(2.0, 2.0, self.rect_size.x - 4.0, self.rect_size.y - 4.0, 6.0);
                sdf.fill(color);
                return sdf.result;
            }
        }

        draw_text: {
            text_style: <FONT_REGULAR>{ font_size: 12.0 }

            fn get_color(self) -> vec4 {
                return (SLATE_600);
            }
        }
    }

    pub Sidebar = {{Sidebar}} {
        width: Fill, height: Fill
        flow: Down
        spacing: 4.0
        padding: {top: 15, bottom: 15, left: 10, right: 10}
        margin: 0

        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 4.0);
                sdf.fill((SLATE_50));
                return sdf.result;
            }
        }

        nav = <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 4.0

            dashboard_tab = <SidebarNavButton> { text: "Dashboard" }
            accounts_tab = <SidebarNavButton> { text: "Accounts" }
            billing_tab = <SidebarNavButton> { text: "Billing" }
            commissions_tab = <SidebarNavButton> { text: "Commissions" }
            sales_tab = <SidebarNavButton> { text: "Sales" }
        }

        filler = <View> {
            width: Fill, height: Fill
        }

        settings_divider = <View> {
            width: Fill, height: 1
            margin: {top: 8, bottom: 8}
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    return (DIVIDER);
                }
            }
        }

        settings_tab = <SidebarNavButton> { text: "Settings" }
    }
}

/// Navigation sections exposed by the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavSection {
    #[default]
    Dashboard,
    Accounts,
    Billing,
    Commissions,
    Sales,
    Settings,
}

impl NavSection {
    pub const ALL: [NavSection; 6] = [
        NavSection::Dashboard,
        NavSection::Accounts,
        NavSection::Billing,
        NavSection::Commissions,
        NavSection::Sales,
        NavSection::Settings,
    ];
}

#[derive(Live, LiveHook, Widget)]
pub struct Sidebar {
    #[deref]
    view: View,

    #[rust]
    selection: Option<NavSection>,
}

impl Widget for Sidebar {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl Sidebar {
    fn nav_button(&self, section: NavSection) -> ButtonRef {
        match section {
            NavSection::Dashboard => self.view.button(id!(nav.dashboard_tab)),
            NavSection::Accounts => self.view.button(id!(nav.accounts_tab)),
            NavSection::Billing => self.view.button(id!(nav.billing_tab)),
            NavSection::Commissions => self.view.button(id!(nav.commissions_tab)),
            NavSection::Sales => self.view.button(id!(nav.sales_tab)),
            NavSection::Settings => self.view.button(id!(settings_tab)),
        }
    }

    fn apply_selection(&mut self, cx: &mut Cx) {
        for section in NavSection::ALL {
            let selected = if self.selection == Some(section) { 1.0 } else { 0.0 };
            self.nav_button(section)
                .apply_over(cx, live! { draw_bg: { selected: (selected) } });
        }
        self.view.redraw(cx);
    }
}

impl SidebarRef {
    /// Which nav button, if any, was clicked in this action batch.
    pub fn nav_clicked(&self, actions: &[Action]) -> Option<NavSection> {
        let inner = self.borrow()?;
        NavSection::ALL
            .into_iter()
            .find(|section| inner.nav_button(*section).clicked(actions))
    }

    /// Highlight a section. Driven by the shell so both sidebar instances
    /// stay in sync.
    pub fn set_selection(&self, cx: &mut Cx, section: NavSection) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.selection = Some(section);
            inner.apply_selection(cx);
        }
    }

    /// Re-apply the selection visuals (call when an instance becomes visible).
    pub fn restore_selection_state(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_selection(cx);
        }
    }
}
