//! GPUI global integration tests
//!
//! Drives the navigation global the way a sidebar view would: mount, follow
//! router changes, toggle submenus, switch solutions.

mod common;

use common::{erp_tree, init_logging};
use gpui::TestAppContext;
use gpui_menu_navigator::*;

#[gpui::test]
fn test_mount_after_reload(cx: &mut TestAppContext) {
    init_logging();
    cx.update(|cx| {
        init_navigation(cx, erp_tree(), "/sales/customers/grades/17", RefreshSignal::reload());
    });

    assert_eq!(cx.read(selected_solution_id), "sales");
    assert!(cx.read(|cx| is_expanded(cx, "Customers")));
    assert_eq!(
        cx.read(breadcrumb_trail),
        vec!["Sales".to_string(), "Customers".to_string(), "Grades".to_string()]
    );
}

#[gpui::test]
fn test_router_changes_update_selection_and_trail(cx: &mut TestAppContext) {
    cx.update(|cx| init_navigation(cx, erp_tree(), "/", RefreshSignal::in_app()));
    assert_eq!(cx.read(breadcrumb_trail), vec!["Home".to_string()]);
    assert_eq!(cx.read(selected_solution_id), "sales");

    cx.update(|cx| sync_path(cx, "/purchase/vendors/8"));
    assert_eq!(cx.read(selected_solution_id), "purchase");
    assert_eq!(
        cx.read(breadcrumb_trail),
        vec!["Purchase".to_string(), "Vendors".to_string(), "Edit".to_string()]
    );

    // Unowned path keeps the selection but still updates the trail.
    cx.update(|cx| sync_path(cx, "/help/shortcuts"));
    assert_eq!(cx.read(selected_solution_id), "purchase");
    assert_eq!(
        cx.read(breadcrumb_trail),
        vec!["Help".to_string(), "Shortcuts".to_string()]
    );
}

#[gpui::test]
fn test_manual_collapse_survives_navigation(cx: &mut TestAppContext) {
    cx.update(|cx| {
        init_navigation(cx, erp_tree(), "/sales/orders/list/detail", RefreshSignal::reload());
    });
    assert!(cx.read(|cx| is_expanded(cx, "Orders")));

    let expanded = cx.update(|cx| toggle_submenu(cx, "Orders"));
    assert!(!expanded);

    cx.update(|cx| sync_path(cx, "/sales/orders/list"));
    cx.update(|cx| sync_path(cx, "/sales/orders/list/detail"));
    assert!(!cx.read(|cx| is_expanded(cx, "Orders")));
}

#[gpui::test]
fn test_solution_switch_and_layout(cx: &mut TestAppContext) {
    cx.update(|cx| {
        init_navigation(cx, erp_tree(), "/production/machines", RefreshSignal::reload());
    });
    assert_eq!(cx.read(selected_solution_id), "production");

    let route = cx.update(|cx| select_solution(cx, "sales"));
    assert_eq!(route.as_deref(), Some("/sales/orders/list"));
    cx.update(|cx| sync_path(cx, route.unwrap_or_default()));
    assert_eq!(
        cx.read(breadcrumb_trail),
        vec!["Sales".to_string(), "Orders".to_string()]
    );

    cx.update(|cx| set_sidebar_mode(cx, SidebarMode::IconRail));
    let mode = cx.read(|cx| cx.navigation().state().sidebar_mode());
    assert_eq!(mode, SidebarMode::IconRail);
}

#[gpui::test]
fn test_update_navigation_with_custom_labels(cx: &mut TestAppContext) {
    cx.update(|cx| init_navigation(cx, erp_tree(), "/sales/quotes", RefreshSignal::in_app()));
    cx.update(|cx| {
        cx.update_navigation(|navigation, _cx| {
            let labels = TranslatedLabels::new(|key: &str| format!("[{key}]"));
            *navigation = navigation.clone().with_labels(labels);
        });
    });

    assert_eq!(
        cx.read(breadcrumb_trail),
        vec!["[Sales]".to_string(), "[Quotes]".to_string()]
    );
}
