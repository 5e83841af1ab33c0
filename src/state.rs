//! Navigation state management
//!
//! [`NavigationState`] is the sidebar's transient state: which solution is
//! selected, which submenus are expanded, and whether the one-shot refresh
//! expansion already ran. Every transition is a plain method taking the tree
//! and the path as arguments, so any UI binding (the GPUI global in
//! [`context`](crate::context), a test, a demo) can drive it.
//!
//! [`NavigationEngine`] bundles a [`MenuTree`] with its state and, with the
//! `cache` feature, a [`ResolutionCache`](crate::cache::ResolutionCache).
//!
//! # Lifecycle
//!
//! ```text
//! mount(path, signal)   → apply_path_change + initialize (once)
//! path change           → apply_path_change
//! submenu header click  → toggle_submenu
//! solution picker       → select_solution → caller navigates to the route
//! ```

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, ResolutionCache};
use crate::breadcrumb::{build_trail_with, BreadcrumbLabels, DefaultLabels};
#[cfg(feature = "cache")]
use crate::matching::normalize_route;
use crate::menu::{MenuTree, Solution};
use crate::refresh::RefreshSignal;
use crate::resolve::{first_route_of, resolve_active_submenu, resolve_solution};
use crate::{debug_log, info_log, trace_log, warn_log};
use std::collections::BTreeSet;

/// Sidebar layout.
///
/// Both layouts share one [`NavigationState`]; switching between them keeps
/// the expanded set untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SidebarMode {
    /// Full-width tree with collapsible submenus (layout 1)
    #[default]
    Accordion,
    /// Icon rail with a slide-out submenu panel (layout 2)
    IconRail,
}

impl SidebarMode {
    /// Map the host's numeric layout setting. Anything but `2` is the accordion.
    pub fn from_index(index: u8) -> Self {
        if index == 2 {
            Self::IconRail
        } else {
            Self::Accordion
        }
    }

    /// Numeric layout setting for this mode.
    pub fn index(self) -> u8 {
        match self {
            Self::Accordion => 1,
            Self::IconRail => 2,
        }
    }
}

/// Emitted when the selected solution changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionChange {
    /// Previously selected solution id
    pub from: String,
    /// Newly selected solution id
    pub to: String,
}

/// Sidebar navigation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// Selected solution id
    selected: String,
    /// Ids of expanded submenus
    expanded: BTreeSet<String>,
    /// One-shot latch for the refresh expansion
    initialized: bool,
    /// Current layout
    mode: SidebarMode,
}

impl NavigationState {
    /// Initial state: first solution selected, nothing expanded.
    pub fn new(tree: &MenuTree) -> Self {
        Self {
            selected: tree.first().id.clone(),
            expanded: BTreeSet::new(),
            initialized: false,
            mode: SidebarMode::default(),
        }
    }

    /// Selected solution id.
    pub fn selected_solution_id(&self) -> &str {
        &self.selected
    }

    /// Selected solution, falling back to the first one if the id is not
    /// in `tree`.
    pub fn selected_solution<'a>(&self, tree: &'a MenuTree) -> &'a Solution {
        tree.solution(&self.selected).unwrap_or_else(|| tree.first())
    }

    /// Expanded submenu ids, sorted.
    pub fn expanded_submenu_ids(&self) -> &BTreeSet<String> {
        &self.expanded
    }

    /// Check if a submenu is expanded. Unknown ids are simply not expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Whether the one-shot refresh expansion has run.
    pub fn has_initialized(&self) -> bool {
        self.initialized
    }

    /// Current layout.
    pub fn sidebar_mode(&self) -> SidebarMode {
        self.mode
    }

    /// Re-derive the selected solution from `path`.
    ///
    /// When no solution owns the path the selection is kept, so the sidebar
    /// never ends up with nothing selected.
    pub fn apply_path_change(&mut self, tree: &MenuTree, path: &str) -> Option<SolutionChange> {
        let resolved = resolve_solution(path, tree)?;
        self.select(resolved)
    }

    fn select(&mut self, solution: &Solution) -> Option<SolutionChange> {
        if solution.id == self.selected {
            return None;
        }

        let change = SolutionChange {
            from: std::mem::replace(&mut self.selected, solution.id.clone()),
            to: solution.id.clone(),
        };
        debug_log!("Solution changed: '{}' → '{}'", change.from, change.to);
        Some(change)
    }

    /// One-shot expansion on mount.
    ///
    /// On a hard refresh the submenu holding `path` becomes the only
    /// expanded one (or none, if no submenu holds it). Otherwise the
    /// expanded set is left alone. Runs at most once; returns whether it
    /// ran this time.
    pub fn initialize(&mut self, tree: &MenuTree, path: &str, signal: RefreshSignal) -> bool {
        if self.initialized {
            trace_log!("Navigation state already initialized; ignoring");
            return false;
        }

        if signal.is_refresh() {
            let solution = self.selected_solution(tree);
            self.expanded = resolve_active_submenu(path, Some(solution))
                .map(|id| BTreeSet::from([id.to_string()]))
                .unwrap_or_default();
            debug_log!(
                "Refresh detected for '{}'; expanded submenus: {:?}",
                path,
                self.expanded
            );
        }

        self.initialized = true;
        true
    }

    /// Flip one submenu's expansion. Other submenus are untouched.
    ///
    /// Returns the new expansion of `id`.
    pub fn toggle_submenu(&mut self, id: &str) -> bool {
        let expanded = if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        };
        debug_log!("Submenu '{}' expanded: {}", id, expanded);
        expanded
    }

    /// Select a solution explicitly (dropdown or icon rail).
    ///
    /// Returns the route the caller should navigate to, if the solution has
    /// one. Unknown ids are ignored.
    pub fn select_solution(&mut self, tree: &MenuTree, id: &str) -> Option<String> {
        let Some(solution) = tree.solution(id) else {
            warn_log!("Ignoring selection of unknown solution '{}'", id);
            return None;
        };
        self.select(solution);
        first_route_of(solution)
    }

    /// Switch layout. The expanded set is carried over as-is.
    pub fn set_sidebar_mode(&mut self, mode: SidebarMode) {
        if self.mode != mode {
            debug_log!("Sidebar mode: {:?} → {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Expanded ids that name a group of the selected solution, in tree
    /// order. Stale or foreign ids are skipped.
    pub fn rendered_submenus<'a>(&self, tree: &'a MenuTree) -> Vec<&'a str> {
        self.selected_solution(tree)
            .children
            .iter()
            .filter(|child| child.is_group() && self.expanded.contains(&child.name))
            .map(|child| child.name.as_str())
            .collect()
    }
}

// ============================================================================
// NavigationEngine
// ============================================================================

/// A menu tree together with its navigation state.
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    tree: MenuTree,
    state: NavigationState,
    #[cfg(feature = "cache")]
    cache: ResolutionCache,
}

impl NavigationEngine {
    /// Create an engine with the first solution selected.
    pub fn new(tree: MenuTree) -> Self {
        let state = NavigationState::new(&tree);
        Self {
            tree,
            state,
            #[cfg(feature = "cache")]
            cache: ResolutionCache::new(),
        }
    }

    /// Create an engine with a custom resolution cache capacity.
    #[cfg(feature = "cache")]
    pub fn with_cache_capacity(tree: MenuTree, capacity: usize) -> Self {
        let mut engine = Self::new(tree);
        engine.cache = ResolutionCache::with_capacity(capacity);
        engine
    }

    /// The menu tree.
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// The current state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Selected solution.
    pub fn selected_solution(&self) -> &Solution {
        self.state.selected_solution(&self.tree)
    }

    /// Mount sequence: sync the selection with `path`, then run the one-shot
    /// refresh expansion.
    pub fn mount(&mut self, path: &str, signal: RefreshSignal) {
        info_log!(
            "Mounting navigation at '{}' (refresh: {})",
            path,
            signal.is_refresh()
        );
        self.on_path_change(path);
        self.state.initialize(&self.tree, path, signal);
    }

    /// React to a router path change.
    pub fn on_path_change(&mut self, path: &str) -> Option<SolutionChange> {
        let index = self.solution_index(path)?;
        let solution = &self.tree.solutions()[index];
        self.state.select(solution)
    }

    /// Flip one submenu's expansion.
    pub fn toggle_submenu(&mut self, id: &str) -> bool {
        self.state.toggle_submenu(id)
    }

    /// Select a solution; returns the route to navigate to.
    pub fn select_solution(&mut self, id: &str) -> Option<String> {
        self.state.select_solution(&self.tree, id)
    }

    /// Switch sidebar layout.
    pub fn set_sidebar_mode(&mut self, mode: SidebarMode) {
        self.state.set_sidebar_mode(mode);
    }

    /// Submenu of the selected solution that holds `path`.
    pub fn active_submenu(&mut self, path: &str) -> Option<String> {
        #[cfg(feature = "cache")]
        {
            let key = normalize_route(path);
            let solution_id = self.state.selected_solution_id().to_string();
            if let Some(cached) = self.cache.get_submenu(&solution_id, &key) {
                return cached;
            }
            let resolved = resolve_active_submenu(path, Some(self.selected_solution()))
                .map(str::to_string);
            self.cache.set_submenu(solution_id, key, resolved.clone());
            resolved
        }
        #[cfg(not(feature = "cache"))]
        {
            resolve_active_submenu(path, Some(self.selected_solution())).map(str::to_string)
        }
    }

    /// Breadcrumb trail for `path` with default labels.
    pub fn breadcrumb(&self, path: &str) -> Vec<String> {
        build_trail_with(path, &self.tree, &DefaultLabels)
    }

    /// Breadcrumb trail for `path` with custom labels.
    pub fn breadcrumb_with<L>(&self, path: &str, labels: &L) -> Vec<String>
    where
        L: BreadcrumbLabels + ?Sized,
    {
        build_trail_with(path, &self.tree, labels)
    }

    /// Expanded ids rendered by the current layout.
    pub fn rendered_submenus(&self) -> Vec<&str> {
        self.state.rendered_submenus(&self.tree)
    }

    /// Resolution cache statistics.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }

    fn solution_index(&mut self, path: &str) -> Option<usize> {
        #[cfg(feature = "cache")]
        {
            let key = normalize_route(path);
            if let Some(cached) = self.cache.get_solution(&key) {
                return cached;
            }
            let index = self.lookup_solution_index(path);
            self.cache.set_solution(key, index);
            index
        }
        #[cfg(not(feature = "cache"))]
        {
            self.lookup_solution_index(path)
        }
    }

    fn lookup_solution_index(&self, path: &str) -> Option<usize> {
        let solution = resolve_solution(path, &self.tree)?;
        self.tree
            .iter()
            .position(|candidate| candidate.id == solution.id)
    }
}
