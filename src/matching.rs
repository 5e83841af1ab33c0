//! Segment-based path comparison shared by every consumer.
//!
//! The sidebar, the solution dropdown and the breadcrumb bar all need to
//! answer the same question: "does this route own that path?". All of them
//! go through the helpers in this module so the rules cannot drift apart.
//!
//! # Rules
//!
//! - Anything after `?` or `#` is ignored
//! - Paths are split on `/` and empty segments are dropped, so leading,
//!   trailing and doubled slashes do not matter
//! - Segments are compared case-insensitively (canonical form is lowercase)
//! - Prefix matching respects segment boundaries: `sales` owns
//!   `/sales/orders` but not `/salesman`

use std::borrow::Cow;

/// Strip the query string and fragment from a path.
fn strip_query(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |pos| &path[..pos])
}

/// Split a path into segments, filtering empty segments
///
/// Case is preserved; use [`canonical_segments`] for comparisons.
///
/// # Examples
///
/// ```
/// use gpui_menu_navigator::matching::split_path;
///
/// assert_eq!(split_path("/Sales/orders/"), vec!["Sales", "orders"]);
/// assert_eq!(split_path("/sales?tab=2"), vec!["sales"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<String> {
    strip_query(path)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Split a path into lowercase segments for comparison.
pub fn canonical_segments(path: &str) -> Vec<String> {
    strip_query(path)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Canonical form of a route: no leading slash, lowercase.
///
/// # Examples
///
/// ```
/// use gpui_menu_navigator::matching::normalize_route;
///
/// assert_eq!(normalize_route("/Sales/Orders/List"), "sales/orders/list");
/// assert_eq!(normalize_route("sales//orders/"), "sales/orders");
/// assert_eq!(normalize_route("/"), "");
/// ```
pub fn normalize_route(route: &str) -> String {
    canonical_segments(route).join("/")
}

/// Ensure a route starts with `/`, preserving its case.
///
/// Returns `Cow<str>` to avoid allocation when the route already has one.
#[must_use]
pub fn with_leading_slash(route: &'_ str) -> Cow<'_, str> {
    if route.starts_with('/') {
        Cow::Borrowed(route)
    } else {
        Cow::Owned(format!("/{route}"))
    }
}

/// Check whether `route` owns `path`: the route's segments are a prefix of
/// the path's segments.
///
/// An empty route owns nothing.
pub fn is_prefix_match(path: &[String], route: &[String]) -> bool {
    !route.is_empty() && route.len() <= path.len() && path.iter().zip(route).all(|(p, r)| p == r)
}

/// Check whether the first `count` segments of both sides exist and agree.
pub fn leading_segments_equal(a: &[String], b: &[String], count: usize) -> bool {
    a.len() >= count && b.len() >= count && a[..count] == b[..count]
}

/// Check whether a segment consists only of ASCII digits.
pub fn is_numeric_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
