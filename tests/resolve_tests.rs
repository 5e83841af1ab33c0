//! Integration tests for path resolution
//!
//! Solution ownership, submenu activation, active item and default routes
//! against the sample ERP tree.

mod common;

use common::{erp_tree, init_logging};
use gpui_menu_navigator::*;

// ---- resolve_solution ----

#[test]
fn test_deep_path_resolves_owning_solution() {
    init_logging();
    let tree = erp_tree();

    let solution = resolve_solution("/sales/orders/list/42", &tree);
    assert_eq!(solution.map(|s| s.id.as_str()), Some("sales"));

    let solution = resolve_solution("/production/machines/7/history", &tree);
    assert_eq!(solution.map(|s| s.id.as_str()), Some("production"));
}

#[test]
fn test_segment_boundary_is_respected() {
    let tree = erp_tree();
    assert!(resolve_solution("/salesman", &tree).is_none());
    assert!(resolve_solution("/sale", &tree).is_none());
    assert!(resolve_solution("/sales-report/2024", &tree).is_none());
}

#[test]
fn test_root_and_empty_paths_resolve_nothing() {
    let tree = erp_tree();
    assert!(resolve_solution("/", &tree).is_none());
    assert!(resolve_solution("", &tree).is_none());
    assert!(resolve_solution("///", &tree).is_none());
    assert!(resolve_solution("?tab=1", &tree).is_none());
}

#[test]
fn test_resolution_is_case_and_slash_insensitive() {
    let tree = erp_tree();
    for path in [
        "/SALES/orders",
        "sales/orders",
        "//sales//orders/",
        "/Sales/Orders?page=2",
        "/sales#top",
    ] {
        let solution = resolve_solution(path, &tree);
        assert_eq!(
            solution.map(|s| s.id.as_str()),
            Some("sales"),
            "path '{}' should belong to sales",
            path
        );
    }
}

#[test]
fn test_route_without_leading_slash_claims_solution() {
    let tree = erp_tree();
    let solution = resolve_solution("/purchase/requests/list", &tree);
    assert_eq!(solution.map(|s| s.id.as_str()), Some("purchase"));
}

#[test]
fn test_first_solution_in_tree_order_wins() {
    let tree = MenuTree::new(vec![
        Solution::new("finance", "Finance").child(MenuItem::leaf("Ledger", "/shared/ledger")),
        Solution::new("accounting", "Accounting")
            .child(MenuItem::leaf("Ledger", "/shared/ledger")),
    ])
    .unwrap();

    let solution = resolve_solution("/shared/ledger", &tree);
    assert_eq!(solution.map(|s| s.id.as_str()), Some("finance"));
}

#[test]
fn test_resolution_is_deterministic() {
    let tree = erp_tree();
    let paths = [
        "/",
        "/sales/orders/list/42",
        "/sales/customers/grades",
        "/production/work-orders/plan",
        "/purchase/vendors/3",
        "/nowhere",
    ];

    for path in paths {
        let first = resolve_solution(path, &tree);
        let second = resolve_solution(path, &tree);
        assert_eq!(first, second);

        assert_eq!(
            resolve_active_submenu(path, first),
            resolve_active_submenu(path, second)
        );
    }
}

// ---- resolve_active_submenu ----

#[test]
fn test_group_activates_through_nested_leaf() {
    let tree = erp_tree();
    let sales = tree.solution("sales");

    assert_eq!(
        resolve_active_submenu("/sales/orders/list/detail", sales),
        Some("Orders")
    );
    assert_eq!(
        resolve_active_submenu("/sales/customers/grades/5", sales),
        Some("Customers")
    );
}

#[test]
fn test_leaf_child_activates_on_own_route() {
    let tree = erp_tree();
    assert_eq!(
        resolve_active_submenu("/sales/quotes/9", tree.solution("sales")),
        Some("Quotes")
    );
}

#[test]
fn test_group_route_is_ignored_for_submenu() {
    let tree = MenuTree::new(vec![Solution::new("sales", "Sales").child(
        MenuItem::group("Reports")
            .to("/sales/reports")
            .child(MenuItem::leaf("Monthly", "/sales/reports/monthly")),
    )])
    .unwrap();

    let sales = tree.solution("sales");
    assert_eq!(resolve_active_submenu("/sales/reports", sales), None);
    assert_eq!(
        resolve_active_submenu("/sales/reports/monthly", sales),
        Some("Reports")
    );
}

#[test]
fn test_nested_group_route_activates_top_submenu() {
    let tree = MenuTree::new(vec![Solution::new("stock", "Stock").child(
        MenuItem::group("Warehouses").child(
            MenuItem::group("Locations")
                .to("/stock/warehouses/locations")
                .child(MenuItem::leaf("Bins", "/stock/warehouses/locations/bins"))
                .child(MenuItem::leaf("Racks", "/stock/warehouses/locations/racks")),
        ),
    )])
    .unwrap();

    let stock = tree.solution("stock");
    assert_eq!(
        resolve_active_submenu("/stock/warehouses/locations/12", stock),
        Some("Warehouses")
    );
    assert_eq!(
        resolve_active_submenu("/stock/warehouses/locations/bins", stock),
        Some("Warehouses")
    );
    assert_eq!(resolve_active_submenu("/stock/warehouses", stock), None);
}

#[test]
fn test_first_matching_group_wins() {
    let tree = MenuTree::new(vec![Solution::new("stock", "Stock")
        .child(MenuItem::group("Inbound").child(MenuItem::leaf("Receipts", "/stock/moves")))
        .child(MenuItem::group("Outbound").child(MenuItem::leaf("Shipments", "/stock/moves")))])
    .unwrap();

    assert_eq!(
        resolve_active_submenu("/stock/moves/1", tree.solution("stock")),
        Some("Inbound")
    );
}

#[test]
fn test_no_submenu_for_unknown_page() {
    let tree = erp_tree();
    assert_eq!(
        resolve_active_submenu("/sales/returns", tree.solution("sales")),
        None
    );
    assert_eq!(resolve_active_submenu("/sales/orders", None), None);
}

// ---- resolve_active_item / is_route_active ----

#[test]
fn test_active_item_prefers_longest_route() {
    let tree = erp_tree();
    let sales = tree.solution("sales").unwrap();

    let item = resolve_active_item("/sales/orders/list/detail/3", sales);
    assert_eq!(item.map(|i| i.name.as_str()), Some("Detail"));

    // Group and first leaf share a route: the leaf is more specific.
    let item = resolve_active_item("/sales/orders/list", sales);
    assert_eq!(item.map(|i| i.name.as_str()), Some("Order list"));

    assert!(resolve_active_item("/sales/returns", sales).is_none());
}

#[test]
fn test_is_route_active() {
    assert!(is_route_active("/Sales/Orders/List?x=1", "sales/orders/list"));
    assert!(is_route_active("/sales/orders/list/42", "/sales/orders/list"));
    assert!(!is_route_active("/sales/orders/listing", "/sales/orders/list"));
    assert!(!is_route_active("/sales", "/sales/orders/list"));
    assert!(!is_route_active("/sales", "/"));
}

#[test]
fn test_resolve_location() {
    let tree = erp_tree();

    let location = resolve_location("/production/work-orders/plan", &tree);
    assert_eq!(location.solution.map(|s| s.id.as_str()), Some("production"));
    assert_eq!(location.submenu, Some("Work orders"));
    assert_eq!(location.item.map(|i| i.name.as_str()), Some("Plan"));

    let location = resolve_location("/", &tree);
    assert!(location.solution.is_none());
    assert!(location.submenu.is_none());
    assert!(location.item.is_none());
}

// ---- first_route_of ----

#[test]
fn test_first_route_of_solutions() {
    let tree = erp_tree();

    let sales = tree.solution("sales").unwrap();
    assert_eq!(first_route_of(sales).as_deref(), Some("/sales/orders/list"));

    // First child is a group without its own route.
    let purchase = tree.solution("purchase").unwrap();
    assert_eq!(first_route_of(purchase), None);
}

#[test]
fn test_first_route_of_keeps_case_and_adds_slash() {
    let solution =
        Solution::new("hr", "HR").child(MenuItem::leaf("People", "HR/People/Directory"));
    assert_eq!(
        first_route_of(&solution).as_deref(),
        Some("/HR/People/Directory")
    );
}
