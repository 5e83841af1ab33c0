//! Loading menu trees from JSON (requires the `serde` feature)

#![cfg(feature = "serde")]

mod common;

use gpui_menu_navigator::*;

const ERP_MENU: &str = r#"[
    {
        "id": "sales",
        "label": "menu.sales",
        "icon": "cart",
        "children": [
            {
                "name": "Orders",
                "to": "/sales/orders/list",
                "children": [
                    { "name": "Order list", "to": "/sales/orders/list" },
                    { "name": "Detail", "to": "/sales/orders/list/detail" }
                ]
            },
            { "name": "Quotes", "to": "sales/quotes", "icon": "file" }
        ]
    },
    {
        "id": "production",
        "label": "menu.production",
        "children": [
            { "name": "Machines", "to": "/production/machines" }
        ]
    }
]"#;

#[test]
fn test_load_and_navigate() {
    common::init_logging();
    let tree = MenuTree::from_json(ERP_MENU).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.first().icon.as_deref(), Some("cart"));

    let mut engine = NavigationEngine::new(tree);
    engine.mount("/sales/orders/list/detail", RefreshSignal::reload());
    assert!(engine.state().is_expanded("Orders"));
    assert_eq!(
        engine.breadcrumb("/sales/orders/list/detail"),
        vec!["menu.sales", "Orders", "Detail"]
    );
}

#[test]
fn test_missing_optional_fields() {
    let tree = MenuTree::from_json(r#"[{ "id": "empty", "label": "Empty" }]"#).unwrap();
    assert!(tree.first().children.is_empty());
    assert_eq!(first_route_of(tree.first()), None);
}

#[test]
fn test_round_trip_through_serde_json() {
    let tree = MenuTree::from_json(ERP_MENU).unwrap();
    let json = serde_json::to_string(tree.solutions()).unwrap();
    let reloaded = MenuTree::from_json(&json).unwrap();
    assert_eq!(reloaded, tree);
}

#[test]
fn test_invalid_trees_are_rejected() {
    let err = MenuTree::from_json("[]").unwrap_err();
    assert!(err.is_empty_tree());

    let err = MenuTree::from_json("{ not json").unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().starts_with("Failed to parse menu tree"));

    let duplicate = r#"[
        { "id": "sales", "label": "Sales" },
        { "id": "sales", "label": "Sales again" }
    ]"#;
    assert_eq!(
        MenuTree::from_json(duplicate).unwrap_err(),
        MenuTreeError::DuplicateSolution {
            id: "sales".to_string()
        }
    );
}
