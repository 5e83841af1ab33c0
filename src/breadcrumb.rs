//! Breadcrumb trail construction.
//!
//! [`build_trail`] walks the menu tree with the same ownership rule as
//! [`resolve_solution`] and turns the current path into display labels:
//!
//! ```text
//! /sales/orders/list/detail  →  Sales › Orders › Detail
//! /sales/orders/list/42      →  Sales › Orders › Edit
//! /sales/unknown             →  Sales › Unknown
//! /nowhere/at-all            →  Nowhere › At-all
//! /                          →  Home
//! ```
//!
//! The trail is recomputed from scratch on every path change.
//!
//! Labels go through a [`BreadcrumbLabels`] provider. [`DefaultLabels`]
//! uses the tree's labels verbatim; [`TranslatedLabels`] passes every key
//! through a translation closure so the host's i18n catalogue stays
//! outside this crate.

use crate::matching::{
    canonical_segments, is_numeric_segment, is_prefix_match, leading_segments_equal, split_path,
};
use crate::menu::{MenuItem, MenuTree, Solution};
use crate::resolve::resolve_solution;
use crate::trace_log;

/// Translation key for the root crumb.
pub const HOME_KEY: &str = "breadcrumb.home";

/// Translation key for the crumb shown on record edit pages.
pub const EDIT_KEY: &str = "breadcrumb.edit";

/// Supplies the display strings of a trail.
pub trait BreadcrumbLabels {
    /// Label of the root path.
    fn home(&self) -> String {
        "Home".to_string()
    }

    /// Label for a numeric segment with no matching menu entry.
    fn edit(&self) -> String {
        "Edit".to_string()
    }

    /// Label of a solution.
    fn solution(&self, solution: &Solution) -> String {
        solution.label.clone()
    }

    /// Label of a menu item.
    fn item(&self, item: &MenuItem) -> String {
        item.name.clone()
    }

    /// Label for a raw path segment the tree knows nothing about.
    fn fallback(&self, segment: &str) -> String {
        capitalize(segment)
    }
}

/// Tree labels as-is, English "Home" and "Edit".
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl BreadcrumbLabels for DefaultLabels {}

/// Labels looked up through a translation function.
///
/// Solution labels and item names are treated as translation keys; the root
/// and edit crumbs use [`HOME_KEY`] and [`EDIT_KEY`].
///
/// # Examples
///
/// ```
/// use gpui_menu_navigator::{build_trail_with, BreadcrumbLabels, MenuTree, Solution};
/// use gpui_menu_navigator::breadcrumb::{TranslatedLabels, HOME_KEY};
///
/// let labels = TranslatedLabels::new(|key: &str| match key {
///     HOME_KEY => "Start".to_string(),
///     other => other.to_uppercase(),
/// });
/// let tree = MenuTree::new(vec![Solution::new("sales", "menu.sales")]).unwrap();
///
/// assert_eq!(build_trail_with("/", &tree, &labels), vec!["Start"]);
/// assert_eq!(labels.edit(), "BREADCRUMB.EDIT");
/// ```
pub struct TranslatedLabels<F> {
    translate: F,
}

impl<F> TranslatedLabels<F>
where
    F: Fn(&str) -> String,
{
    /// Wrap a translation function.
    pub fn new(translate: F) -> Self {
        Self { translate }
    }
}

impl<F> BreadcrumbLabels for TranslatedLabels<F>
where
    F: Fn(&str) -> String,
{
    fn home(&self) -> String {
        (self.translate)(HOME_KEY)
    }

    fn edit(&self) -> String {
        (self.translate)(EDIT_KEY)
    }

    fn solution(&self, solution: &Solution) -> String {
        (self.translate)(&solution.label)
    }

    fn item(&self, item: &MenuItem) -> String {
        (self.translate)(&item.name)
    }
}

impl<F> std::fmt::Debug for TranslatedLabels<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatedLabels").finish_non_exhaustive()
    }
}

/// Build the breadcrumb trail for `path` with [`DefaultLabels`].
///
/// Never fails: the root path yields `["Home"]`, any other path at least
/// one label.
///
/// # Examples
///
/// ```
/// use gpui_menu_navigator::{build_trail, MenuItem, MenuTree, Solution};
///
/// let tree = MenuTree::new(vec![Solution::new("sales", "Sales").child(
///     MenuItem::group("Orders")
///         .to("/sales/orders/list")
///         .child(MenuItem::leaf("Detail", "/sales/orders/list/detail")),
/// )])
/// .unwrap();
///
/// assert_eq!(build_trail("/", &tree), vec!["Home"]);
/// assert_eq!(
///     build_trail("/sales/orders/list/detail", &tree),
///     vec!["Sales", "Orders", "Detail"]
/// );
/// assert_eq!(build_trail("/sales/orders/list/42", &tree), vec!["Sales", "Orders", "Edit"]);
/// ```
pub fn build_trail(path: &str, tree: &MenuTree) -> Vec<String> {
    build_trail_with(path, tree, &DefaultLabels)
}

/// Build the breadcrumb trail for `path` with a custom label provider.
pub fn build_trail_with<L>(path: &str, tree: &MenuTree, labels: &L) -> Vec<String>
where
    L: BreadcrumbLabels + ?Sized,
{
    let raw = split_path(path);
    if raw.is_empty() {
        return vec![labels.home()];
    }

    let segments = canonical_segments(path);
    let mut trail = Vec::with_capacity(3);

    if let Some(solution) = resolve_solution(path, tree) {
        trail.push(labels.solution(solution));
        push_item_crumbs(&raw, &segments, solution, labels, &mut trail);
    }

    if trail.is_empty() {
        trail.extend(raw.iter().map(|segment| labels.fallback(segment)));
    }

    trace_log!("Breadcrumb for '{}': {:?}", path, trail);
    trail
}

/// Second and third crumbs: the solution's child sharing the path's first
/// two segments, then the most specific entry below it owning the path.
fn push_item_crumbs<L>(
    raw: &[String],
    segments: &[String],
    solution: &Solution,
    labels: &L,
    trail: &mut Vec<String>,
) where
    L: BreadcrumbLabels + ?Sized,
{
    let child = solution
        .children
        .iter()
        .find(|child| leading_segments_equal(&child.effective_segments(), segments, 2));

    let Some(child) = child else {
        if let Some(second) = raw.get(1) {
            trail.push(labels.fallback(second));
        }
        return;
    };
    trail.push(labels.item(child));

    if segments.len() < 3 {
        return;
    }

    if let Some(nested) = deepest_nested(child, segments) {
        trail.push(labels.item(nested));
        return;
    }

    // First segment the tree does not account for.
    let child_route = child.effective_segments();
    let unexplained = if is_prefix_match(segments, &child_route) {
        raw.get(child_route.len())
    } else {
        raw.get(2)
    };

    if let Some(segment) = unexplained {
        if is_numeric_segment(segment) {
            trail.push(labels.edit());
        } else {
            trail.push(labels.fallback(segment));
        }
    }
}

/// The entry below `child` with the longest route owning the path; the
/// first one wins on equal length. An entry repeating the route the child
/// was matched through adds nothing to the trail.
fn deepest_nested<'a>(child: &'a MenuItem, segments: &[String]) -> Option<&'a MenuItem> {
    let own_route = child.effective_segments();
    let mut deepest: Option<(&MenuItem, usize)> = None;

    for nested in &child.children {
        let route = nested.effective_segments();
        if route.len() < 3 || route == own_route || !is_prefix_match(segments, &route) {
            continue;
        }
        let longer = match deepest {
            Some((_, len)) => route.len() > len,
            None => true,
        };
        if longer {
            deepest = Some((nested, route.len()));
        }
    }

    deepest.map(|(nested, _)| nested)
}

/// Uppercase the first character of a segment.
///
/// ```
/// use gpui_menu_navigator::breadcrumb::capitalize;
///
/// assert_eq!(capitalize("orders"), "Orders");
/// assert_eq!(capitalize("work-orders"), "Work-orders");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
