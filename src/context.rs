//! Navigation state integration for GPUI.
//!
//! This module stores a [`NavigationEngine`] in a GPUI `Global` so every
//! navigation surface (sidebar, solution dropdown, breadcrumb bar) reads the
//! same state:
//!
//! - [`GlobalNavigation`]: the global: engine, current path and the
//!   breadcrumb trail for that path.
//! - [`UseNavigation`]: `cx.navigation()` / `cx.update_navigation(..)` on
//!   [`App`].
//! - Free functions ([`sync_path`], [`toggle_submenu`], [`select_solution`],
//!   ...) for the common calls.
//!
//! The router stays outside: the host calls [`sync_path`] whenever its
//! current path changes, and navigates itself to whatever route
//! [`select_solution`] returns.
//!
//! # Initialization
//!
//! ```ignore
//! use gpui_menu_navigator::{init_navigation, MenuTree, RefreshSignal};
//!
//! init_navigation(cx, menu_tree, "/sales/orders/list", RefreshSignal::reload());
//! ```

use crate::breadcrumb::BreadcrumbLabels;
use crate::menu::MenuTree;
use crate::refresh::RefreshSignal;
use crate::state::{NavigationEngine, NavigationState, SidebarMode};
use crate::{debug_log, trace_log};
use gpui::{App, BorrowAppContext, Global};
use std::sync::Arc;

/// Translation hook applied to breadcrumb labels.
type SharedLabels = Arc<dyn BreadcrumbLabels + Send + Sync>;

// ============================================================================
// GlobalNavigation
// ============================================================================

/// Navigation state accessible from any component.
#[derive(Clone)]
pub struct GlobalNavigation {
    engine: NavigationEngine,
    current_path: String,
    /// Trail for `current_path`, rebuilt on every path change.
    trail: Vec<String>,
    labels: Option<SharedLabels>,
}

impl GlobalNavigation {
    /// Create the global and run the mount sequence for `path`.
    pub fn new(tree: MenuTree, path: impl Into<String>, signal: RefreshSignal) -> Self {
        let current_path = path.into();
        let mut engine = NavigationEngine::new(tree);
        engine.mount(&current_path, signal);
        let trail = engine.breadcrumb(&current_path);
        Self {
            engine,
            current_path,
            trail,
            labels: None,
        }
    }

    /// Use a custom label provider for breadcrumbs.
    pub fn with_labels(mut self, labels: impl BreadcrumbLabels + Send + Sync + 'static) -> Self {
        self.labels = Some(Arc::new(labels));
        self.rebuild_trail();
        self
    }

    /// The engine.
    pub fn engine(&self) -> &NavigationEngine {
        &self.engine
    }

    /// The sidebar state.
    pub fn state(&self) -> &NavigationState {
        self.engine.state()
    }

    /// Path last passed to [`set_path`](Self::set_path).
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Breadcrumb trail for the current path.
    pub fn trail(&self) -> &[String] {
        &self.trail
    }

    /// Record a router path change: re-derive the selection and the trail.
    ///
    /// Returns `true` if the selected solution changed.
    pub fn set_path(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path == self.current_path {
            trace_log!("Path '{}' unchanged", path);
            return false;
        }
        debug_log!("Navigation path: '{}' → '{}'", self.current_path, path);

        self.current_path = path;
        let changed = self.engine.on_path_change(&self.current_path).is_some();
        self.rebuild_trail();
        changed
    }

    /// Flip one submenu's expansion.
    pub fn toggle_submenu(&mut self, id: &str) -> bool {
        self.engine.toggle_submenu(id)
    }

    /// Select a solution; returns the route the host should navigate to.
    pub fn select_solution(&mut self, id: &str) -> Option<String> {
        self.engine.select_solution(id)
    }

    /// Switch sidebar layout.
    pub fn set_sidebar_mode(&mut self, mode: SidebarMode) {
        self.engine.set_sidebar_mode(mode);
    }

    fn rebuild_trail(&mut self) {
        self.trail = match &self.labels {
            Some(labels) => self.engine.breadcrumb_with(&self.current_path, labels.as_ref()),
            None => self.engine.breadcrumb(&self.current_path),
        };
    }
}

impl std::fmt::Debug for GlobalNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalNavigation")
            .field("current_path", &self.current_path)
            .field("state", self.engine.state())
            .field("trail", &self.trail)
            .finish_non_exhaustive()
    }
}

impl Global for GlobalNavigation {}

// ============================================================================
// UseNavigation trait
// ============================================================================

/// Trait for accessing the navigation global from context.
pub trait UseNavigation {
    /// Get reference to the navigation global.
    fn navigation(&self) -> &GlobalNavigation;

    /// Update the navigation global.
    fn update_navigation<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigation, &mut App) -> R;
}

impl UseNavigation for App {
    fn navigation(&self) -> &GlobalNavigation {
        self.global::<GlobalNavigation>()
    }

    fn update_navigation<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigation, &mut App) -> R,
    {
        self.update_global(f)
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Install the navigation global and run the mount sequence.
///
/// Calling it again replaces the global, which counts as a fresh mount.
pub fn init_navigation(
    cx: &mut App,
    tree: MenuTree,
    path: impl Into<String>,
    signal: RefreshSignal,
) {
    cx.set_global(GlobalNavigation::new(tree, path, signal));
}

/// Tell the navigation state that the router moved to `path`, then refresh
/// all windows.
///
/// Syncing the current path again is a no-op and does not refresh.
pub fn sync_path(cx: &mut App, path: impl Into<String>) {
    let path = path.into();
    if cx.navigation().current_path() == path {
        trace_log!("Path '{}' unchanged; skipping refresh", path);
        return;
    }

    let changed = cx.update_navigation(|navigation, _cx| navigation.set_path(path));
    if changed {
        trace_log!("Selected solution changed; refreshing windows");
    }
    cx.refresh_windows();
}

/// Flip one submenu's expansion.
pub fn toggle_submenu(cx: &mut App, id: &str) -> bool {
    let expanded = cx.update_navigation(|navigation, _cx| navigation.toggle_submenu(id));
    cx.refresh_windows();
    expanded
}

/// Select a solution. Returns the route the host router should navigate to.
pub fn select_solution(cx: &mut App, id: &str) -> Option<String> {
    let route = cx.update_navigation(|navigation, _cx| navigation.select_solution(id));
    cx.refresh_windows();
    route
}

/// Switch sidebar layout.
pub fn set_sidebar_mode(cx: &mut App, mode: SidebarMode) {
    cx.update_navigation(|navigation, _cx| navigation.set_sidebar_mode(mode));
    cx.refresh_windows();
}

/// Breadcrumb trail for the current path.
pub fn breadcrumb_trail(cx: &App) -> Vec<String> {
    cx.navigation().trail().to_vec()
}

/// Id of the selected solution.
pub fn selected_solution_id(cx: &App) -> String {
    cx.navigation().state().selected_solution_id().to_string()
}

/// Check if a submenu is expanded.
pub fn is_expanded(cx: &App, id: &str) -> bool {
    cx.navigation().state().is_expanded(id)
}
