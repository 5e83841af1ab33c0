//! Menu tree data model.
//!
//! A [`MenuTree`] is an immutable forest of [`Solution`]s. Each solution is
//! a business domain ("Sales", "Production") holding [`MenuItem`]s, which
//! are either leaves carrying a route or groups carrying further items.
//!
//! ```text
//! Solution "Sales"
//!   MenuItem "Orders"        to: /sales/orders/list   (group)
//!     MenuItem "Order list"  to: /sales/orders/list   (leaf)
//!     MenuItem "Detail"      to: /sales/orders/list/detail
//!   MenuItem "Quotes"        to: /sales/quotes        (leaf)
//! ```
//!
//! Groups may carry their own `to` (usually their first child's route).
//! It is ignored when deciding which submenu contains the current page, but
//! it is the group's *effective route* when claiming a solution, building
//! breadcrumbs, and picking the default destination of a solution.
//!
//! # Examples
//!
//! ```
//! use gpui_menu_navigator::{MenuItem, MenuTree, Solution};
//!
//! let tree = MenuTree::new(vec![Solution::new("sales", "Sales")
//!     .child(
//!         MenuItem::group("Orders")
//!             .to("/sales/orders/list")
//!             .child(MenuItem::leaf("Detail", "/sales/orders/list/detail")),
//!     )
//!     .child(MenuItem::leaf("Quotes", "/sales/quotes"))])
//! .unwrap();
//!
//! assert_eq!(tree.len(), 1);
//! assert!(tree.first().children[0].is_group());
//! ```

use crate::error::MenuTreeError;
use crate::matching::canonical_segments;
use crate::{info_log, warn_log};
use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// MenuItem
// ============================================================================

/// A node of the menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MenuItem {
    /// Item id and label key. Also the key used for submenu expansion.
    pub name: String,
    /// Route path, if any
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub to: Option<String>,
    /// Icon name, resolved by the presentation layer
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<String>,
    /// Nested items. Empty for leaves.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Create a leaf item pointing at `to`.
    pub fn leaf(name: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            to: Some(to.into()),
            icon: None,
            children: Vec::new(),
        }
    }

    /// Create a group without a route. Add items with [`child`](Self::child).
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            to: None,
            icon: None,
            children: Vec::new(),
        }
    }

    /// Set the route.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Append a nested item.
    pub fn child(mut self, child: MenuItem) -> Self {
        self.children.push(child);
        self
    }

    /// Replace all nested items.
    pub fn children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Item id (the name).
    pub fn id(&self) -> &str {
        &self.name
    }

    /// `true` when the item has nested items.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// `true` when the item has no nested items.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The item's own route, if it has a non-empty one.
    pub fn route(&self) -> Option<&str> {
        self.to
            .as_deref()
            .filter(|to| to.split('/').any(|segment| !segment.is_empty()))
    }

    /// Canonical segments of the item's own route (empty if none).
    pub fn route_segments(&self) -> Vec<String> {
        self.route().map(canonical_segments).unwrap_or_default()
    }

    /// The item's own route, or the first route found among its
    /// descendants in tree order.
    pub fn effective_route(&self) -> Option<&str> {
        self.route()
            .or_else(|| self.children.iter().find_map(MenuItem::effective_route))
    }

    /// Canonical segments of [`effective_route`](Self::effective_route).
    pub fn effective_segments(&self) -> Vec<String> {
        self.effective_route()
            .map(canonical_segments)
            .unwrap_or_default()
    }

    /// Iterate over the routed leaves below this item, depth-first.
    ///
    /// A leaf item yields itself.
    pub fn leaves(&self) -> Box<dyn Iterator<Item = &MenuItem> + '_> {
        if self.is_leaf() {
            Box::new(std::iter::once(self).filter(|item| item.route().is_some()))
        } else {
            Box::new(self.children.iter().flat_map(MenuItem::leaves))
        }
    }
}

// ============================================================================
// Solution
// ============================================================================

/// Top-level grouping of the menu tree (a business domain).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Stable id used to track the selection
    pub id: String,
    /// Display label (or label key)
    pub label: String,
    /// Icon name
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<String>,
    /// Direct menu items
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<MenuItem>,
}

impl Solution {
    /// Create a solution with no items.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    /// Set the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Append a menu item.
    pub fn child(mut self, child: MenuItem) -> Self {
        self.children.push(child);
        self
    }

    /// Replace all menu items.
    pub fn children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    /// Find a direct child by id.
    pub fn find_child(&self, id: &str) -> Option<&MenuItem> {
        self.children.iter().find(|child| child.name == id)
    }

    /// `true` when `id` names a direct child that is a group, i.e. something
    /// the sidebar can expand.
    pub fn has_submenu(&self, id: &str) -> bool {
        self.find_child(id).is_some_and(MenuItem::is_group)
    }
}

// ============================================================================
// MenuTree
// ============================================================================

/// Immutable forest of solutions.
///
/// Cloning is cheap: the solutions are shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    solutions: Arc<[Solution]>,
}

impl MenuTree {
    /// Build a tree from its solutions.
    ///
    /// Fails when the forest is empty or two solutions share an id.
    /// Duplicate item names inside one solution are accepted (first one wins
    /// during resolution) but logged.
    pub fn new(solutions: Vec<Solution>) -> Result<Self, MenuTreeError> {
        if solutions.is_empty() {
            return Err(MenuTreeError::Empty);
        }

        let mut ids = HashSet::new();
        for solution in &solutions {
            if !ids.insert(solution.id.as_str()) {
                return Err(MenuTreeError::DuplicateSolution {
                    id: solution.id.clone(),
                });
            }

            let mut names = HashSet::new();
            for child in &solution.children {
                if !names.insert(child.name.as_str()) {
                    warn_log!(
                        "Solution '{}' has more than one item named '{}'; the first one wins",
                        solution.id,
                        child.name
                    );
                }
            }
        }

        info_log!("Registered menu tree with {} solutions", solutions.len());

        Ok(Self {
            solutions: solutions.into(),
        })
    }

    /// Parse a tree from a JSON array of solutions.
    ///
    /// ```
    /// use gpui_menu_navigator::MenuTree;
    ///
    /// let tree = MenuTree::from_json(
    ///     r#"[{ "id": "sales", "label": "Sales",
    ///           "children": [{ "name": "Quotes", "to": "/sales/quotes" }] }]"#,
    /// )
    /// .unwrap();
    /// assert_eq!(tree.first().children[0].name, "Quotes");
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, MenuTreeError> {
        let solutions: Vec<Solution> = serde_json::from_str(json).map_err(|err| {
            crate::error_log!("Failed to parse menu tree: {}", err);
            MenuTreeError::from(err)
        })?;
        Self::new(solutions)
    }

    /// All solutions in tree order.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// The first solution, the default selection.
    pub fn first(&self) -> &Solution {
        // Non-empty by construction.
        &self.solutions[0]
    }

    /// Look up a solution by id.
    pub fn solution(&self, id: &str) -> Option<&Solution> {
        self.solutions.iter().find(|solution| solution.id == id)
    }

    /// Iterate over the solutions.
    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    /// Number of solutions (never zero).
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Always `false`; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

impl<'a> IntoIterator for &'a MenuTree {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
