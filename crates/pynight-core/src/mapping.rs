//! A mapping that never misses
//!
//! [`DefaultingMap`] wraps a `HashMap` and answers lookups for absent keys
//! with a configured default instead of failing.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

/// Capability: key-value store with defaulting reads
pub trait MappingLike<K, V> {
    /// Value for `key`, or the configured default
    fn lookup<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Value for `key`, else `fallback`, else the configured default
    fn get_or<'a, Q>(&'a self, key: &Q, fallback: Option<&'a V>) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Insert or replace, returning the previous value
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Remove, returning the stored value if there was one
    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;
}

/// `HashMap` plus a default value for missing keys
#[derive(Debug, Clone)]
pub struct DefaultingMap<K, V> {
    entries: HashMap<K, V>,
    default: V,
}

impl<K: Hash + Eq, V> DefaultingMap<K, V> {
    /// Empty map answering `default` for every key
    #[must_use]
    pub fn new(default: V) -> Self {
        Self {
            entries: HashMap::new(),
            default,
        }
    }

    /// The configured default
    #[inline]
    #[must_use]
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Whether `key` has a stored value
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Number of stored entries; the default does not count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No stored entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries, in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> MappingLike<K, V> for DefaultingMap<K, V> {
    fn lookup<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).unwrap_or(&self.default)
    }

    fn get_or<'a, Q>(&'a self, key: &Q, fallback: Option<&'a V>) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .get(key)
            .or(fallback)
            .unwrap_or(&self.default)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }
}

impl<K, Q, V> Index<&Q> for DefaultingMap<K, V>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.lookup(key)
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for DefaultingMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DefaultingMap<String, String> {
        DefaultingMap::new("DEFAULT".to_string())
    }

    #[test]
    fn unset_key_gives_default() {
        let map = sample();
        assert_eq!(map.lookup("b"), "DEFAULT");
        assert_eq!(&map["b"], "DEFAULT");
        assert!(map.is_empty());
    }

    #[test]
    fn set_key_gives_value() {
        let mut map: DefaultingMap<&str, i32> = DefaultingMap::new(0);
        map.insert("a", 5);
        assert_eq!(*map.lookup("a"), 5);
        assert_eq!(map["a"], 5);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get_or_prefers_value_then_fallback_then_default() {
        let mut map = sample();
        map.insert("a".to_string(), "five".to_string());
        let fallback = "FALLBACK".to_string();

        assert_eq!(map.get_or("a", Some(&fallback)), "five");
        assert_eq!(map.get_or("b", Some(&fallback)), "FALLBACK");
        assert_eq!(map.get_or("b", None), "DEFAULT");
    }

    #[test]
    fn remove_restores_default() {
        let mut map = sample();
        map.insert("k".to_string(), "v".to_string());
        assert_eq!(map.remove("k"), Some("v".to_string()));
        assert!(!map.contains_key("k"));
        assert_eq!(map.lookup("k"), map.default_value());
    }

    #[test]
    fn insert_replaces() {
        let mut map: DefaultingMap<char, u8> = DefaultingMap::new(0);
        assert_eq!(map.insert('x', 1), None);
        assert_eq!(map.insert('x', 2), Some(1));
        assert_eq!(map[&'x'], 2);
    }

    #[test]
    fn extend_from_pairs() {
        let mut map: DefaultingMap<u8, &str> = DefaultingMap::new("none");
        map.extend([(1, "one"), (2, "two")]);
        assert_eq!(map.iter().count(), 2);
        assert_eq!(map[&3u8], "none");
    }
}
