//! # GPUI Menu Navigator
//!
//! Menu-tree navigation state for GPUI applications. Given a static tree of
//! *solutions* (top-level business areas) with nested menu items, and the
//! router's current path, it derives:
//!
//! - which solution owns the path ([`resolve_solution`])
//! - which submenu should be expanded ([`resolve_active_submenu`])
//! - which menu entry is highlighted ([`resolve_active_item`])
//! - the breadcrumb trail ([`build_trail`])
//!
//! and keeps the sidebar's transient state ([`NavigationState`]): selected
//! solution, expanded submenus, the one-shot expansion after a hard refresh,
//! and the layout mode.
//!
//! ## Quick start
//!
//! ```
//! use gpui_menu_navigator::{MenuItem, MenuTree, NavigationEngine, RefreshSignal, Solution};
//!
//! let tree = MenuTree::new(vec![
//!     Solution::new("sales", "Sales").child(
//!         MenuItem::group("Orders")
//!             .child(MenuItem::leaf("Order list", "/sales/orders/list"))
//!             .child(MenuItem::leaf("Detail", "/sales/orders/list/detail")),
//!     ),
//!     Solution::new("production", "Production")
//!         .child(MenuItem::leaf("Work orders", "/production/work-orders")),
//! ])
//! .unwrap();
//!
//! let mut engine = NavigationEngine::new(tree);
//! engine.mount("/sales/orders/list/detail", RefreshSignal::reload());
//!
//! assert_eq!(engine.selected_solution().id, "sales");
//! assert!(engine.state().is_expanded("Orders"));
//! assert_eq!(
//!     engine.breadcrumb("/sales/orders/list/detail"),
//!     vec!["Sales", "Orders", "Detail"]
//! );
//! ```
//!
//! ## GPUI
//!
//! Inside a GPUI app, install the state as a global with
//! [`init_navigation`] and forward router path changes with [`sync_path`]:
//!
//! ```ignore
//! use gpui_menu_navigator::{init_navigation, sync_path, RefreshSignal};
//!
//! init_navigation(cx, tree, current_path, RefreshSignal::reload());
//! // later, whenever the router moves:
//! sync_path(cx, "/production/work-orders");
//! ```
//!
//! ## Features
//!
//! - `log` (default) - logging through the `log` crate
//! - `tracing` - logging through `tracing` instead of `log`
//! - `cache` (default) - LRU memoization of solution and submenu lookups
//! - `serde` - load menu trees from JSON

#![cfg_attr(docsrs, feature(doc_cfg))]

// Logging abstraction
pub mod logging;

pub mod breadcrumb;
#[cfg(feature = "cache")]
pub mod cache;
pub mod context;
pub mod error;
pub mod matching;
pub mod menu;
pub mod refresh;
pub mod resolve;
pub mod state;

// Re-exports
pub use breadcrumb::{
    build_trail, build_trail_with, BreadcrumbLabels, DefaultLabels, TranslatedLabels,
};
#[cfg(feature = "cache")]
pub use cache::{CacheStats, ResolutionCache};
pub use context::{
    breadcrumb_trail, init_navigation, is_expanded, select_solution, selected_solution_id,
    set_sidebar_mode, sync_path, toggle_submenu, GlobalNavigation, UseNavigation,
};
pub use error::MenuTreeError;
pub use menu::{MenuItem, MenuTree, Solution};
pub use refresh::{NavigationType, RefreshSignal, UnknownNavigationType};
pub use resolve::{
    first_route_of, is_route_active, resolve_active_item, resolve_active_submenu,
    resolve_location, resolve_solution, Location,
};
pub use state::{NavigationEngine, NavigationState, SidebarMode, SolutionChange};
