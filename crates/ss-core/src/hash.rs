//! Fast hash map and hash set type aliases.
//!
//! This module provides type aliases for [`FxHashMap`] and [`FxHashSet`] from
//! the `rustc-hash` crate. The Fx hash algorithm is roughly 2x faster than the
//! standard library default for the string keys this codebase hashes almost
//! exclusively: structural-type names, slugs, and relative file paths.
//!
//! Denial-of-service resistance is not required here (all input is local,
//! trusted corpus content), so the non-randomized hasher is the right trade.
//!
//! # Examples
//!
//! ```
//! use ss_core::{FxHashMap, FxHashSet, fx_hash_map, fx_hash_set};
//!
//! let mut map: FxHashMap<String, u32> = fx_hash_map();
//! map.insert("heading".to_owned(), 1);
//!
//! let set: FxHashSet<&str> = fx_hash_set();
//! assert!(set.is_empty());
//! ```

/// A [`HashMap`](std::collections::HashMap) using the Fx hash algorithm.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A [`HashSet`](std::collections::HashSet) using the Fx hash algorithm.
pub type FxHashSet<V> = rustc_hash::FxHashSet<V>;

/// The hasher used by [`FxHashMap`] and [`FxHashSet`].
pub type FxBuildHasher = rustc_hash::FxBuildHasher;

/// Creates a new empty [`FxHashMap`].
///
/// Equivalent to `FxHashMap::default()` but often more ergonomic for type
/// inference.
#[inline]
#[must_use]
pub fn fx_hash_map<K, V>() -> FxHashMap<K, V> {
    FxHashMap::default()
}

/// Creates a new empty [`FxHashSet`].
#[inline]
#[must_use]
pub fn fx_hash_set<V>() -> FxHashSet<V> {
    FxHashSet::default()
}

/// Creates a new [`FxHashMap`] with at least the given capacity.
#[inline]
#[must_use]
pub fn fx_hash_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}

/// Creates a new [`FxHashSet`] with at least the given capacity.
#[inline]
#[must_use]
pub fn fx_hash_set_with_capacity<V>(capacity: usize) -> FxHashSet<V> {
    FxHashSet::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fx_hash_map_operations() {
        let mut map: FxHashMap<&str, u32> = fx_hash_map();
        map.insert("heading", 1);
        map.insert("paragraph", 2);
        assert_eq!(map.get("heading"), Some(&1));
        assert_eq!(map.get("table"), None);
    }

    #[test]
    fn test_fx_hash_set_operations() {
        let mut set: FxHashSet<&str> = fx_hash_set();
        set.insert("getting-started");
        assert!(set.contains("getting-started"));
        assert!(!set.contains("intro"));
    }

    #[test]
    fn test_with_capacity_constructors() {
        let map: FxHashMap<String, u32> = fx_hash_map_with_capacity(64);
        assert!(map.capacity() >= 64);
        let set: FxHashSet<String> = fx_hash_set_with_capacity(64);
        assert!(set.capacity() >= 64);
    }
}
