//! Dashboard widget - header and content area.
//!
//! The header carries the sidebar toggle control; the content area holds one
//! placeholder page per navigation section, switched by the shell.

use crate::widgets::sidebar::NavSection;
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use atrium_widgets::theme::FONT_REGULAR;
    use atrium_widgets::theme::FONT_BOLD;
    use atrium_widgets::theme::APP_BG;
    use atrium_widgets::theme::PANEL_BG;
    use atrium_widgets::theme::TEXT_PRIMARY;
    use atrium_widgets::theme::TEXT_SECONDARY;
    use atrium_widgets::theme::HOVER_BG;
    use atrium_widgets::theme::TRANSPARENT;
    use atrium_widgets::theme::SLATE_500;
    use atrium_widgets::theme::INDIGO_500;
    use atrium_widgets::page_card::PageCard;

    SectionPage = <View> {
        width: Fill, height: Fill
        visible: false
        align: {x: 0.5, y: 0.4}
    }

    PageTitle = <Label> {
        draw_text: {
            color: (TEXT_PRIMARY)
            text_style: <FONT_BOLD>{ font_size: 20.0 }
        }
    }

    PageBody = <Label> {
        draw_text: {
            color: (TEXT_SECONDARY)
            text_style: <FONT_REGULAR>{ font_size: 12.0 }
        }
    }

    pub Dashboard = {{Dashboard}} <View> {
        width: Fill, height: Fill
        flow: Down
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                return (APP_BG);
            }
        }

        header = <View> {
            width: Fill, height: Fit
            flow: Right
            spacing: 12
            align: {y: 0.5}
            padding: {left: 15, right: 20, top: 13, bottom: 13}
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    return (PANEL_BG);
                }
            }

            // Sidebar toggle control (hamburger). `active` mirrors the
            // pressed/expanded accessibility state.
            sidebar_toggle = <View> {
                width: 36, height: 36
                cursor: Hand
                show_bg: true
                draw_bg: {
                    instance hover: 0.0
                    instance active: 0.0

                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        let cx = self.rect_size.x * 0.5;
                        let cy = self.rect_size.y * 0.5;
                        sdf.circle(cx, cy, 16.0);
                        sdf.fill(mix((TRANSPARENT), (HOVER_BG), self.hover));
                        let line = mix((SLATE_500), (INDIGO_500), self.active);
                        sdf.move_to(cx - 6.0, cy - 4.5);
                        sdf.line_to(cx + 6.0, cy - 4.5);
                        sdf.stroke(line, 1.5);
                        sdf.move_to(cx - 6.0, cy);
                        sdf.line_to(cx + 6.0, cy);
                        sdf.stroke(line, 1.5);
                        sdf.move_to(cx - 6.0, cy + 4.5);
                        sdf.line_to(cx + 6.0, cy + 4.5);
                        sdf.stroke(line, 1.5);
                        return sdf.result;
                    }
                }
            }

            title = <Label> {
                text: "Atrium Studio"
                draw_text: {
                    color: (TEXT_PRIMARY)
                    text_style: <FONT_BOLD>{ font_size: 20.0 }
                }
            }

            <View> { width: Fill, height: 1 }
        }

        content_area = <View> {
            width: Fill, height: Fill
            flow: Overlay
            padding: 24

            dashboard_page = <SectionPage> {
                visible: true
                <PageCard> {
                    <PageTitle> { text: "Dashboard" }
                    <PageBody> { text: "Team activity and key figures at a glance." }
                }
            }

            accounts_page = <SectionPage> {
                <PageCard> {
                    <PageTitle> { text: "Accounts" }
                    <PageBody> { text: "Customer accounts, contacts and ownership." }
                }
            }

            billing_page = <SectionPage> {
                <PageCard> {
                    <PageTitle> { text: "Billing" }
                    <PageBody> { text: "Invoices, payments and statements." }
                }
            }

            commissions_page = <SectionPage> {
                <PageCard> {
                    <PageTitle> { text: "Commissions" }
                    <PageBody> { text: "Commission plans and payout runs." }
                }
            }

            sales_page = <SectionPage> {
                <PageCard> {
                    <PageTitle> { text: "Sales" }
                    <PageBody> { text: "Opportunities, quotes and pipeline." }
                }
            }

            settings_page = <SectionPage> {
                <PageCard> {
                    <PageTitle> { text: "Settings" }
                    <PageBody> { text: "Workspace preferences and integrations." }
                }
            }
        }
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct Dashboard {
    #[deref]
    view: View,
}

impl Widget for Dashboard {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl Dashboard {
    fn page(&self, section: NavSection) -> ViewRef {
        match section {
            NavSection::Dashboard => self.view.view(id!(content_area.dashboard_page)),
            NavSection::Accounts => self.view.view(id!(content_area.accounts_page)),
            NavSection::Billing => self.view.view(id!(content_area.billing_page)),
            NavSection::Commissions => self.view.view(id!(content_area.commissions_page)),
            NavSection::Sales => self.view.view(id!(content_area.sales_page)),
            NavSection::Settings => self.view.view(id!(content_area.settings_page)),
        }
    }
}

impl DashboardRef {
    /// Show one section page, hiding the others.
    pub fn show_section(&self, cx: &mut Cx, section: NavSection) {
        if let Some(mut inner) = self.borrow_mut() {
            for candidate in NavSection::ALL {
                inner.page(candidate).set_visible(cx, candidate == section);
            }
            inner.view.redraw(cx);
        }
    }
}
