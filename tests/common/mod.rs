//! Test utilities for navigation tests
//!
//! Provides a sample ERP menu tree, logging setup and trail assertions.

#![allow(dead_code)]

use gpui_menu_navigator::*;

/// Route logs to the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Three solutions, two and three levels deep, with one group per solution
/// that has no route of its own.
///
/// ```text
/// sales        Orders (/sales/orders/list)  → Order list, Detail
///              Customers                    → Register, Grades
///              Quotes (/sales/quotes)
/// production   Work orders                  → List, Plan
///              Machines (/production/machines)
/// purchase     Requests                     → Request list
///              Vendors (/purchase/vendors)
/// ```
pub fn erp_tree() -> MenuTree {
    MenuTree::new(vec![
        Solution::new("sales", "Sales")
            .icon("cart")
            .child(
                MenuItem::group("Orders")
                    .to("/sales/orders/list")
                    .child(MenuItem::leaf("Order list", "/sales/orders/list"))
                    .child(MenuItem::leaf("Detail", "/sales/orders/list/detail")),
            )
            .child(
                MenuItem::group("Customers")
                    .child(MenuItem::leaf("Register", "/sales/customers/register"))
                    .child(MenuItem::leaf("Grades", "/sales/customers/grades")),
            )
            .child(MenuItem::leaf("Quotes", "/sales/quotes")),
        Solution::new("production", "Production")
            .icon("factory")
            .child(
                MenuItem::group("Work orders")
                    .child(MenuItem::leaf("List", "/production/work-orders/list"))
                    .child(MenuItem::leaf("Plan", "/production/work-orders/plan")),
            )
            .child(MenuItem::leaf("Machines", "/production/machines")),
        Solution::new("purchase", "Purchase")
            .child(
                MenuItem::group("Requests")
                    .child(MenuItem::leaf("Request list", "purchase/requests/list")),
            )
            .child(MenuItem::leaf("Vendors", "/purchase/vendors")),
    ])
    .expect("sample tree is valid")
}

/// Assert the default-label trail for `path`.
pub fn assert_trail(tree: &MenuTree, path: &str, expected: &[&str]) {
    let trail = build_trail(path, tree);
    assert_eq!(trail, expected, "Unexpected breadcrumb trail for '{}'", path);
}

/// Expanded ids as a sorted vector of `&str`.
pub fn expanded(state: &NavigationState) -> Vec<&str> {
    state
        .expanded_submenu_ids()
        .iter()
        .map(String::as_str)
        .collect()
}
