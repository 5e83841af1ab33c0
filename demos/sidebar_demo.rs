//! ERP Sidebar Demo
//!
//! Demonstrates the navigation global driving a sidebar, a solution picker
//! and a breadcrumb bar. The window starts as if the user hard-reloaded a
//! deep page, so its submenu opens on its own; clicks afterwards behave like
//! in-app navigation.

#![allow(clippy::needless_pass_by_ref_mut)]

use gpui::prelude::*;
use gpui::{
    div, px, rgb, size, App, AppContext, Application, Bounds, Div, FontWeight, MouseButton,
    SharedString, TitlebarOptions, Window, WindowBounds, WindowOptions,
};
use gpui_menu_navigator::{
    init_navigation, is_route_active, resolve_location, select_solution, set_sidebar_mode,
    sync_path, toggle_submenu, GlobalNavigation, MenuItem, MenuTree, RefreshSignal, SidebarMode,
    Solution, UseNavigation,
};

// ============================================================================
// Menu
// ============================================================================

fn erp_menu() -> MenuTree {
    let solutions = vec![
        Solution::new("sales", "Sales")
            .icon("S")
            .child(
                MenuItem::group("Orders")
                    .to("/sales/orders/list")
                    .child(MenuItem::leaf("Order list", "/sales/orders/list"))
                    .child(MenuItem::leaf("Order detail", "/sales/orders/list/detail")),
            )
            .child(
                MenuItem::group("Customers")
                    .child(MenuItem::leaf("Register", "/sales/customers/register"))
                    .child(MenuItem::leaf("Grades", "/sales/customers/grades")),
            )
            .child(MenuItem::leaf("Quotes", "/sales/quotes")),
        Solution::new("production", "Production")
            .icon("P")
            .child(MenuItem::leaf("Machines", "/production/machines"))
            .child(
                MenuItem::group("Work orders")
                    .child(MenuItem::leaf("List", "/production/work-orders/list"))
                    .child(MenuItem::leaf("Plan", "/production/work-orders/plan")),
            ),
        Solution::new("purchase", "Purchase")
            .icon("U")
            .child(MenuItem::leaf("Vendors", "/purchase/vendors"))
            .child(
                MenuItem::group("Requests")
                    .child(MenuItem::leaf("Request list", "/purchase/requests/list")),
            ),
    ];

    MenuTree::new(solutions).expect("demo menu is valid")
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    env_logger::init();

    Application::new().run(|cx: &mut App| {
        init_navigation(
            cx,
            erp_menu(),
            "/sales/customers/grades/17",
            RefreshSignal::reload(),
        );

        let bounds = Bounds::centered(None, size(px(1000.), px(680.)), cx);
        cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some("Menu Navigator Demo".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            },
            |_, cx| cx.new(|_| SidebarDemo),
        )
        .unwrap();

        cx.activate(true);
    });
}

// ============================================================================
// Views
// ============================================================================

struct SidebarDemo;

impl Render for SidebarDemo {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        let navigation = cx.navigation().clone();
        let mode = navigation.state().sidebar_mode();

        let sidebar = match mode {
            SidebarMode::Accordion => self.accordion(cx, &navigation),
            SidebarMode::IconRail => self.icon_rail(cx, &navigation),
        };

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(rgb(0x1e_1e_1e))
            .child(self.header(cx, &navigation))
            .child(
                div()
                    .flex()
                    .flex_1()
                    .child(sidebar)
                    .child(content(&navigation)),
            )
    }
}

impl SidebarDemo {
    fn header(
        &self,
        cx: &mut Context<'_, Self>,
        navigation: &GlobalNavigation,
    ) -> impl IntoElement {
        let selected = navigation.state().selected_solution_id().to_string();
        let next_mode = match navigation.state().sidebar_mode() {
            SidebarMode::Accordion => SidebarMode::IconRail,
            SidebarMode::IconRail => SidebarMode::Accordion,
        };

        let mut pickers = div().flex().gap_2();
        for solution in navigation.engine().tree() {
            let id = solution.id.clone();
            let is_selected = id == selected;
            pickers = pickers.child(
                div()
                    .id(SharedString::from(format!("solution-{id}")))
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .text_sm()
                    .cursor_pointer()
                    .when(is_selected, |this| {
                        this.bg(rgb(0x09_47_71)).text_color(rgb(0xff_ff_ff))
                    })
                    .when(!is_selected, |this| {
                        this.text_color(rgb(0xcc_cc_cc))
                            .hover(|this| this.bg(rgb(0x2a_2d_2e)))
                    })
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |_view, _event, _window, cx| {
                            if let Some(route) = select_solution(cx, &id) {
                                sync_path(cx, route);
                            }
                            cx.notify();
                        }),
                    )
                    .child(solution.label.clone()),
            );
        }

        div()
            .flex()
            .items_center()
            .justify_between()
            .p_4()
            .bg(rgb(0x2d_2d_2d))
            .border_b_1()
            .border_color(rgb(0x3e_3e_3e))
            .child(breadcrumb_bar(navigation.trail()))
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(pickers)
                    .child(
                        div()
                            .id("layout-toggle")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .text_sm()
                            .cursor_pointer()
                            .text_color(rgb(0x4e_c9_b0))
                            .hover(|this| this.bg(rgb(0x2a_2d_2e)))
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(move |_view, _event, _window, cx| {
                                    set_sidebar_mode(cx, next_mode);
                                    cx.notify();
                                }),
                            )
                            .child(format!("Layout {}", next_mode.index())),
                    ),
            )
    }

    fn accordion(
        &self,
        cx: &mut Context<'_, Self>,
        navigation: &GlobalNavigation,
    ) -> Div {
        let solution = navigation.engine().selected_solution();
        let mut column = sidebar_frame().w_64();

        for item in &solution.children {
            if item.is_group() {
                let expanded = navigation.state().is_expanded(&item.name);
                column = column.child(self.group_header(cx, item, expanded));
                if expanded {
                    for leaf in item.leaves() {
                        let link = self.nav_link(cx, leaf, navigation.current_path(), 1);
                        column = column.child(link);
                    }
                }
            } else {
                column = column.child(self.nav_link(cx, item, navigation.current_path(), 0));
            }
        }

        column
    }

    fn icon_rail(
        &self,
        cx: &mut Context<'_, Self>,
        navigation: &GlobalNavigation,
    ) -> Div {
        let selected = navigation.state().selected_solution_id().to_string();
        let mut rail = sidebar_frame().w(px(56.)).items_center();

        for solution in navigation.engine().tree() {
            let id = solution.id.clone();
            let is_selected = id == selected;
            rail = rail.child(
                div()
                    .id(SharedString::from(format!("rail-{id}")))
                    .size(px(36.))
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_md()
                    .cursor_pointer()
                    .text_color(rgb(0xff_ff_ff))
                    .when(is_selected, |this| this.bg(rgb(0x09_47_71)))
                    .when(!is_selected, |this| this.bg(rgb(0x33_33_33)))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |_view, _event, _window, cx| {
                            if let Some(route) = select_solution(cx, &id) {
                                sync_path(cx, route);
                            }
                            cx.notify();
                        }),
                    )
                    .child(solution.icon.clone().unwrap_or_else(|| "?".to_string())),
            );
        }

        // Slide-out panel: only submenus expanded for the selected solution.
        let solution = navigation.engine().selected_solution();
        let mut panel = sidebar_frame().w(px(224.));
        for id in navigation.engine().rendered_submenus() {
            if let Some(group) = solution.find_child(id) {
                panel = panel.child(self.group_header(cx, group, true));
                for leaf in group.leaves() {
                    panel = panel.child(self.nav_link(cx, leaf, navigation.current_path(), 1));
                }
            }
        }

        div().flex().child(rail).child(panel)
    }

    fn group_header(
        &self,
        cx: &mut Context<'_, Self>,
        group: &MenuItem,
        expanded: bool,
    ) -> impl IntoElement {
        let id = group.name.clone();
        let marker = if expanded { "▾" } else { "▸" };

        div()
            .id(SharedString::from(format!("group-{id}")))
            .px_3()
            .py_2()
            .text_sm()
            .font_weight(FontWeight::BOLD)
            .text_color(rgb(0xcc_cc_cc))
            .cursor_pointer()
            .hover(|this| this.bg(rgb(0x2a_2d_2e)))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |_view, _event, _window, cx| {
                    toggle_submenu(cx, &id);
                    cx.notify();
                }),
            )
            .child(format!("{marker} {}", group.name))
    }

    fn nav_link(
        &self,
        cx: &mut Context<'_, Self>,
        item: &MenuItem,
        current_path: &str,
        indent: u8,
    ) -> impl IntoElement {
        let route = item.route().unwrap_or_default().to_string();
        let is_active = is_route_active(current_path, &route);
        let label = item.name.clone();

        div()
            .id(SharedString::from(format!("nav-{label}")))
            .pl(px(12. + f32::from(indent) * 16.))
            .pr_3()
            .py_2()
            .rounded_md()
            .text_sm()
            .cursor_pointer()
            .when(is_active, |this| {
                this.bg(rgb(0x09_47_71)).text_color(rgb(0xff_ff_ff))
            })
            .when(!is_active, |this| {
                this.text_color(rgb(0xcc_cc_cc))
                    .hover(|this| this.bg(rgb(0x2a_2d_2e)))
            })
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |_view, _event, _window, cx| {
                    sync_path(cx, route.clone());
                    cx.notify();
                }),
            )
            .child(label)
    }
}

fn sidebar_frame() -> Div {
    div()
        .flex()
        .flex_col()
        .bg(rgb(0x25_25_26))
        .border_r_1()
        .border_color(rgb(0x3e_3e_3e))
        .p_2()
        .gap_1()
}

fn breadcrumb_bar(trail: &[String]) -> impl IntoElement {
    div()
        .text_sm()
        .text_color(rgb(0xcc_cc_cc))
        .child(trail.join(" › "))
}

fn content(navigation: &GlobalNavigation) -> impl IntoElement {
    let path = navigation.current_path();
    let location = resolve_location(path, navigation.engine().tree());

    div()
        .flex()
        .flex_col()
        .flex_1()
        .p_8()
        .gap_3()
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0xff_ff_ff))
                .child(path.to_string()),
        )
        .child(stat_row(
            "Solution",
            location.solution.map_or("(none)", |solution| solution.id.as_str()),
        ))
        .child(stat_row("Submenu", location.submenu.unwrap_or("(none)")))
        .child(stat_row(
            "Item",
            location.item.map_or("(none)", |item| item.name.as_str()),
        ))
}

fn stat_row(label: &str, value: &str) -> impl IntoElement {
    div()
        .flex()
        .gap_4()
        .text_sm()
        .child(div().w_24().text_color(rgb(0x88_88_88)).child(label.to_string()))
        .child(div().text_color(rgb(0x4e_c9_b0)).child(value.to_string()))
}
