//! Resolution caching.
//!
//! This module provides [`ResolutionCache`], LRU memoization of the two
//! lookups the sidebar repeats on every render. It is gated behind the
//! `cache` feature flag and uses the [`lru`] crate internally.
//!
//! Two independent LRU caches are maintained:
//!
//! - **Solution cache**: maps a canonical path to the index of the owning
//!   solution in the tree (or to "no owner").
//! - **Submenu cache**: maps a `(solution id, canonical path)` pair to the
//!   id of the submenu that should be expanded.
//!
//! The menu tree is immutable, so entries never go stale while the engine
//! holds the same tree. [`CacheStats`] tracks hits, misses and
//! invalidations.
//!
//! Breadcrumbs are not cached.
//!
//! # Examples
//!
//! ```
//! use gpui_menu_navigator::cache::ResolutionCache;
//!
//! let mut cache = ResolutionCache::new();
//! cache.set_solution("sales/orders".to_string(), Some(0));
//!
//! assert_eq!(cache.get_solution("sales/orders"), Some(Some(0)));
//! assert_eq!(cache.stats().solution_hits, 1);
//! ```

use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Cache key for submenu resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SubmenuCacheKey {
    solution_id: String,
    path: String,
}

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of solution-cache hits.
    pub solution_hits: usize,
    /// Number of solution-cache misses.
    pub solution_misses: usize,
    /// Number of submenu-cache hits.
    pub submenu_hits: usize,
    /// Number of submenu-cache misses.
    pub submenu_misses: usize,
    /// Number of full cache invalidations (via [`ResolutionCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the solution-cache hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no solution lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn solution_hit_rate(&self) -> f64 {
        ratio(self.solution_hits, self.solution_misses)
    }

    /// Return the submenu-cache hit rate as a value in `0.0..=1.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn submenu_hit_rate(&self) -> f64 {
        ratio(self.submenu_hits, self.submenu_misses)
    }

    /// Return the combined hit rate as a value in `0.0..=1.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn overall_hit_rate(&self) -> f64 {
        ratio(
            self.solution_hits + self.submenu_hits,
            self.solution_misses + self.submenu_misses,
        )
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(hits: usize, misses: usize) -> f64 {
    let total = hits + misses;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// LRU cache for solution and submenu resolution results.
///
/// Default capacity is 256 entries per sub-cache.
#[derive(Debug)]
pub struct ResolutionCache {
    solution_cache: LruCache<String, Option<usize>>,
    submenu_cache: LruCache<SubmenuCacheKey, Option<String>>,
    stats: CacheStats,
}

impl ResolutionCache {
    /// Entries per sub-cache used by [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache with a custom per-sub-cache capacity.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            solution_cache: LruCache::new(cap),
            submenu_cache: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Clear both sub-caches and increment the invalidation counter.
    pub fn clear(&mut self) {
        let solution_len = self.solution_cache.len();
        let submenu_len = self.submenu_cache.len();
        self.solution_cache.clear();
        self.submenu_cache.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Resolution cache cleared: {} solution + {} submenu entries ({} invalidations)",
            solution_len,
            submenu_len,
            self.stats.invalidations
        );
    }

    /// Look up the cached solution index for a canonical path.
    ///
    /// The outer `Option` is the cache hit; the inner one is the cached
    /// answer, `None` meaning "no solution owns this path".
    pub fn get_solution(&mut self, path: &str) -> Option<Option<usize>> {
        if let Some(index) = self.solution_cache.get(path) {
            self.stats.solution_hits += 1;
            trace_log!("Solution cache hit for '{}'", path);
            Some(*index)
        } else {
            self.stats.solution_misses += 1;
            trace_log!("Solution cache miss for '{}'", path);
            None
        }
    }

    /// Store the solution index resolved for a canonical path.
    pub fn set_solution(&mut self, path: String, index: Option<usize>) {
        self.solution_cache.push(path, index);
    }

    /// Look up the cached active submenu for a solution and canonical path.
    pub fn get_submenu(&mut self, solution_id: &str, path: &str) -> Option<Option<String>> {
        let key = SubmenuCacheKey {
            solution_id: solution_id.to_string(),
            path: path.to_string(),
        };
        if let Some(id) = self.submenu_cache.get(&key) {
            self.stats.submenu_hits += 1;
            trace_log!("Submenu cache hit for '{}' in '{}'", path, solution_id);
            Some(id.clone())
        } else {
            self.stats.submenu_misses += 1;
            None
        }
    }

    /// Store the active submenu resolved for a solution and canonical path.
    pub fn set_submenu(&mut self, solution_id: String, path: String, submenu: Option<String>) {
        self.submenu_cache
            .push(SubmenuCacheKey { solution_id, path }, submenu);
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of entries in the solution cache.
    pub fn solution_cache_size(&self) -> usize {
        self.solution_cache.len()
    }

    /// Number of entries in the submenu cache.
    pub fn submenu_cache_size(&self) -> usize {
        self.submenu_cache.len()
    }

    /// Total number of entries across both sub-caches.
    pub fn total_size(&self) -> usize {
        self.solution_cache_size() + self.submenu_cache_size()
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ResolutionCache {
    /// Clones start empty with the same capacity; statistics are carried over.
    fn clone(&self) -> Self {
        Self {
            solution_cache: LruCache::new(self.solution_cache.cap()),
            submenu_cache: LruCache::new(self.submenu_cache.cap()),
            stats: self.stats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_creation() {
        let cache = ResolutionCache::new();
        assert_eq!(cache.total_size(), 0);
        assert_eq!(cache.stats().solution_hits, 0);
    }

    #[test]
    fn test_solution_miss_then_hit() {
        let mut cache = ResolutionCache::new();
        assert_eq!(cache.get_solution("sales"), None);
        assert_eq!(cache.stats().solution_misses, 1);

        cache.set_solution("sales".to_string(), Some(2));
        assert_eq!(cache.get_solution("sales"), Some(Some(2)));
        assert_eq!(cache.stats().solution_hits, 1);
    }

    #[test]
    fn test_negative_result_is_cached() {
        let mut cache = ResolutionCache::new();
        cache.set_solution("nowhere".to_string(), None);
        assert_eq!(cache.get_solution("nowhere"), Some(None));
    }

    #[test]
    fn test_submenu_keyed_by_solution() {
        let mut cache = ResolutionCache::new();
        cache.set_submenu(
            "sales".to_string(),
            "sales/orders".to_string(),
            Some("Orders".to_string()),
        );
        assert_eq!(
            cache.get_submenu("sales", "sales/orders"),
            Some(Some("Orders".to_string()))
        );
        assert_eq!(cache.get_submenu("production", "sales/orders"), None);
        assert_eq!(cache.stats().submenu_hits, 1);
        assert_eq!(cache.stats().submenu_misses, 1);
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = ResolutionCache::with_capacity(2);
        cache.set_solution("a".to_string(), Some(0));
        cache.set_solution("b".to_string(), Some(0));
        cache.set_solution("c".to_string(), Some(1));
        assert_eq!(cache.solution_cache_size(), 2);
        assert_eq!(cache.get_solution("a"), None);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut cache = ResolutionCache::with_capacity(0);
        cache.set_solution("a".to_string(), Some(0));
        assert_eq!(cache.solution_cache_size(), 1);
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = ResolutionCache::new();
        cache.set_solution("sales".to_string(), Some(0));
        cache.set_submenu("sales".to_string(), "sales".to_string(), None);
        assert_eq!(cache.total_size(), 2);

        cache.clear();
        assert_eq!(cache.total_size(), 0);
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_hit_rate_calculation() {
        let mut cache = ResolutionCache::new();
        cache.get_solution("/a");
        cache.get_solution("/b");
        cache.get_solution("/c");

        cache.set_solution("/a".to_string(), Some(0));
        cache.set_solution("/b".to_string(), None);

        cache.get_solution("/a");
        cache.get_solution("/b");

        assert_eq!(cache.stats().solution_hits, 2);
        assert_eq!(cache.stats().solution_misses, 3);
        assert!((cache.stats().solution_hit_rate() - 0.4).abs() < 0.001);
        assert!((cache.stats().overall_hit_rate() - 0.4).abs() < 0.001);
    }
}
