//! Path resolution against the menu tree.
//!
//! Pure functions mapping a URL path to a location in a [`MenuTree`]:
//!
//! - [`resolve_solution`]: which solution owns the path
//! - [`resolve_active_submenu`]: which direct child of that solution should
//!   be expanded in the sidebar
//! - [`resolve_active_item`]: the most specific routed node containing the path
//! - [`first_route_of`]: where to go when the user switches solutions
//! - [`is_route_active`]: per-link highlight rule
//!
//! # Ownership rule
//!
//! Routes are namespaced by their first segment, one namespace per business
//! domain. A solution owns `/sales/orders/42` as soon as one of its direct
//! children has an effective route whose first segment is `sales`.
//! Solutions are scanned in tree order and the first claim wins.
//!
//! ```text
//! path  /sales/orders/list/42
//!        ^^^^^ first segment
//!
//! Sales       → Orders (/sales/orders/list)   ✓ claims
//! Production  → ...                           (not scanned)
//! ```

use crate::matching::{canonical_segments, is_prefix_match, with_leading_slash};
use crate::menu::{MenuItem, MenuTree, Solution};
use crate::trace_log;

/// Maximum nesting depth walked by [`resolve_active_item`].
const MAX_DEPTH: usize = 16;

/// Find the solution owning `path`.
///
/// Returns `None` for the root path or when no solution claims the first
/// segment; callers keep their current selection in that case.
///
/// # Examples
///
/// ```
/// use gpui_menu_navigator::{resolve_solution, MenuItem, MenuTree, Solution};
///
/// let tree = MenuTree::new(vec![
///     Solution::new("sales", "Sales").child(MenuItem::leaf("Orders", "/sales/orders/list")),
/// ])
/// .unwrap();
///
/// assert_eq!(resolve_solution("/sales/orders/list/42", &tree).unwrap().id, "sales");
/// assert!(resolve_solution("/salesman", &tree).is_none());
/// assert!(resolve_solution("/", &tree).is_none());
/// ```
pub fn resolve_solution<'a>(path: &str, tree: &'a MenuTree) -> Option<&'a Solution> {
    let segments = canonical_segments(path);
    let first = segments.first()?;

    let resolved = tree
        .iter()
        .find(|solution| solution.children.iter().any(|child| claims(child, first)));

    if let Some(solution) = resolved {
        trace_log!("Path '{}' belongs to solution '{}'", path, solution.id);
    } else {
        trace_log!("No solution claims first segment '{}'", first);
    }

    resolved
}

/// A direct child claims a first segment when its effective route starts
/// with that segment.
fn claims(child: &MenuItem, first_segment: &str) -> bool {
    child
        .effective_segments()
        .first()
        .is_some_and(|segment| segment == first_segment)
}

/// Find the direct child of `solution` whose submenu contains `path`.
///
/// Groups match when any node below them owns the path through its own
/// route, nested groups included (the direct child's own `to` is ignored);
/// leaves match on their own route. The first matching
/// child in tree order wins, even if a later sibling would also match.
///
/// Returns the child's id, which is the sidebar's expansion key.
pub fn resolve_active_submenu<'a>(path: &str, solution: Option<&'a Solution>) -> Option<&'a str> {
    let solution = solution?;
    let segments = canonical_segments(path);

    let active = solution.children.iter().find(|child| {
        if child.is_group() {
            child
                .children
                .iter()
                .any(|nested| subtree_owns(nested, &segments, 1))
        } else {
            is_prefix_match(&segments, &child.route_segments())
        }
    });

    let id = active.map(MenuItem::id);
    trace_log!(
        "Active submenu for '{}' in '{}': {:?}",
        path,
        solution.id,
        id
    );
    id
}

/// `true` when `item` or anything below it has its own route owning `path`.
fn subtree_owns(item: &MenuItem, path: &[String], depth: usize) -> bool {
    if depth >= MAX_DEPTH {
        return false;
    }
    is_prefix_match(path, &item.route_segments())
        || item
            .children
            .iter()
            .any(|nested| subtree_owns(nested, path, depth + 1))
}

/// Find the node of `solution` with the most specific route owning `path`.
///
/// The longest matching route wins. On equal length the deeper node wins
/// (a group and its first leaf often share a route), then tree order.
pub fn resolve_active_item<'a>(path: &str, solution: &'a Solution) -> Option<&'a MenuItem> {
    let segments = canonical_segments(path);
    let mut best = None;
    best_match(&solution.children, &segments, 0, &mut best);
    best.map(|(item, _, _)| item)
}

fn best_match<'a>(
    items: &'a [MenuItem],
    path: &[String],
    depth: usize,
    best: &mut Option<(&'a MenuItem, usize, usize)>,
) {
    if depth >= MAX_DEPTH {
        crate::warn_log!(
            "Menu nesting deeper than {} levels; ignoring the rest",
            MAX_DEPTH
        );
        return;
    }

    for item in items {
        let route = item.route_segments();
        if is_prefix_match(path, &route) {
            let better = match *best {
                Some((_, len, best_depth)) => {
                    route.len() > len || (route.len() == len && depth > best_depth)
                }
                None => true,
            };
            if better {
                *best = Some((item, route.len(), depth));
            }
        }
        best_match(&item.children, path, depth + 1, best);
    }
}

/// Default destination when the user switches to `solution`: the first
/// child's route, with a leading slash.
///
/// # Examples
///
/// ```
/// use gpui_menu_navigator::{first_route_of, MenuItem, Solution};
///
/// let sales = Solution::new("sales", "Sales").child(MenuItem::leaf("Orders", "sales/orders"));
/// assert_eq!(first_route_of(&sales).as_deref(), Some("/sales/orders"));
/// assert_eq!(first_route_of(&Solution::new("empty", "Empty")), None);
/// ```
pub fn first_route_of(solution: &Solution) -> Option<String> {
    let first = solution.children.first()?;
    first.route().map(|to| with_leading_slash(to).into_owned())
}

/// Check whether a link to `route` should be highlighted for `path`.
///
/// True when the path is the route itself or lies below it.
pub fn is_route_active(path: &str, route: &str) -> bool {
    is_prefix_match(&canonical_segments(path), &canonical_segments(route))
}

/// Resolve solution, submenu and item for one path.
pub fn resolve_location<'a>(path: &str, tree: &'a MenuTree) -> Location<'a> {
    let solution = resolve_solution(path, tree);
    Location {
        solution,
        submenu: resolve_active_submenu(path, solution),
        item: solution.and_then(|solution| resolve_active_item(path, solution)),
    }
}

/// Where a path lands in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location<'a> {
    /// Owning solution
    pub solution: Option<&'a Solution>,
    /// Direct child of the solution containing the path
    pub submenu: Option<&'a str>,
    /// Most specific routed node containing the path
    pub item: Option<&'a MenuItem>,
}
