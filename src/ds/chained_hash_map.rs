//! Fixed-size hash table with separate chaining.
//!
//! Keys are strings, values are any `V` (defaulting to `i64`). The bucket
//! count is chosen at construction and never changes: there is no rehashing,
//! so the load factor grows without bound as entries are added and chains
//! get longer. [`load_factor`](ChainedHashMap::load_factor) reports it for
//! diagnostics only.
//!
//! ## Architecture
//!
//! ```text
//!   buckets: Vec<Option<Box<Entry>>>        (bucket_count = 16)
//!
//!   [0]  ─► ·
//!   [1]  ─► ("a": 1) ─► ("q": 2) ─► ·       "a" and "q" collide; chain order
//!   [2]  ─► ("b": 7) ─► ·                   is insertion order
//!   ...
//!   [15] ─► ·
//!
//!   Entry { key: String, value: V, next: Option<Box<Entry>> }
//! ```
//!
//! ## Hash
//!
//! Polynomial rolling hash, reduced at every step:
//!
//! ```text
//!   h = 0
//!   for ch in key.chars():
//!       h = (h * 31 + ch as u32) mod bucket_count
//! ```
//!
//! ## Operations
//!
//! | Operation  | Description                                    | Complexity     |
//! |------------|------------------------------------------------|----------------|
//! | `put`      | Overwrite in place, or append at chain tail    | O(chain)       |
//! | `get`      | Scan the key's chain                           | O(chain)       |
//! | `delete`   | Unlink head or from predecessor                | O(chain)       |
//! | `keys`     | Bucket order, then chain order                 | O(buckets + n) |
//! | `clear`    | Drop every chain                               | O(buckets + n) |
//!
//! ## Example Usage
//!
//! ```
//! use dsakit::ds::ChainedHashMap;
//!
//! let mut map: ChainedHashMap = ChainedHashMap::new(16);
//! map.put("a", 1);
//! map.put("q", 2);
//! map.put("a", 10);
//!
//! assert_eq!(map.get("a"), Some(&10));
//! assert_eq!(map.count(), 2);
//! assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "q"]);
//! assert!(map.delete("q"));
//! assert!(!map.contains("q"));
//! ```
//!
//! ## Notes
//! - Chains are dropped iteratively, so a degenerate table with one very
//!   long chain does not overflow the stack on drop or `clear`.
//! - `check_invariants()` verifies chain placement, key uniqueness and the
//!   entry count.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::InvariantError;
use crate::traits::Container;

/// Bucket count used when a zero bucket count is requested.
pub const DEFAULT_BUCKET_COUNT: usize = 16;

/// Multiplier of the polynomial rolling hash.
pub const HASH_MULTIPLIER: u128 = 31;

type Link<V> = Option<Box<Entry<V>>>;

struct Entry<V> {
    key: String,
    value: V,
    next: Link<V>,
}

/// Computes the bucket index of `key` for a table of `bucket_count` buckets.
///
/// `bucket_count` must be non-zero.
pub fn polynomial_hash(key: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    let modulus = bucket_count as u128;
    key.chars()
        .fold(0u128, |hash, ch| {
            (hash * HASH_MULTIPLIER + u128::from(u32::from(ch))) % modulus
        }) as usize
}

fn drop_chain<V>(mut link: Link<V>) {
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}

/// Hash table with string keys, a fixed bucket count and per-bucket chains.
pub struct ChainedHashMap<V = i64> {
    buckets: Vec<Link<V>>,
    len: usize,
}

impl<V> ChainedHashMap<V> {
    /// Creates an empty table; a zero `bucket_count` becomes
    /// [`DEFAULT_BUCKET_COUNT`].
    pub fn new(bucket_count: usize) -> Self {
        let bucket_count = if bucket_count == 0 {
            DEFAULT_BUCKET_COUNT
        } else {
            bucket_count
        };
        tracing::debug!(bucket_count, "chained hash map created");
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, || None);
        Self { buckets, len: 0 }
    }

    /// Returns the fixed number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the bucket `key` maps to.
    #[inline]
    pub fn bucket_index(&self, key: &str) -> usize {
        polynomial_hash(key, self.buckets.len())
    }

    /// Inserts or updates `key`.
    ///
    /// An existing entry is updated in place and its previous value
    /// returned; a new entry is appended to the tail of its chain.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let idx = self.bucket_index(&key);

        let mut cursor = &mut self.buckets[idx];
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(std::mem::replace(&mut entry.value, value));
            }
            cursor = &mut entry.next;
        }
        *cursor = Some(Box::new(Entry {
            key,
            value,
            next: None,
        }));

        self.len += 1;
        if self.len == self.buckets.len() + 1 {
            tracing::debug!(
                entries = self.len,
                bucket_count = self.buckets.len(),
                "load factor exceeded 1.0; chains will grow (no rehashing)"
            );
        }
        None
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut cursor = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.bucket_index(key);
        let mut cursor = &mut self.buckets[idx];
        loop {
            let found = match cursor.as_deref() {
                None => return None,
                Some(entry) => entry.key == key,
            };
            if found {
                let mut removed = cursor.take()?;
                *cursor = removed.next.take();
                self.len -= 1;
                let Entry { value, .. } = *removed;
                return Some(value);
            }
            cursor = &mut cursor.as_mut()?.next;
        }
    }

    /// Removes `key`; returns `true` if an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove(key).is_some()
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn count(&self) -> usize {
        self.len
    }

    /// Alias of [`count`](Self::count).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries per bucket. Informational only; never triggers a resize.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Number of entries chained in bucket `index` (0 if out of range).
    pub fn chain_len(&self, index: usize) -> usize {
        let mut cursor = self.buckets.get(index).and_then(|link| link.as_deref());
        let mut n = 0;
        while let Some(entry) = cursor {
            n += 1;
            cursor = entry.next.as_deref();
        }
        n
    }

    /// Length of the longest chain.
    pub fn longest_chain(&self) -> usize {
        (0..self.buckets.len())
            .map(|idx| self.chain_len(idx))
            .max()
            .unwrap_or(0)
    }

    /// Removes every entry; the bucket count is unchanged.
    pub fn clear(&mut self) {
        tracing::debug!(entries = self.len, "chained hash map cleared");
        for bucket in &mut self.buckets {
            drop_chain(bucket.take());
        }
        self.len = 0;
    }

    /// Iterates over `(key, value)` pairs in bucket order, then chain order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.len,
        }
    }

    /// Keys in iteration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Values in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Validates chain placement, per-chain key uniqueness and the count.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut total = 0;
        for (idx, bucket) in self.buckets.iter().enumerate() {
            let mut seen: rustc_hash::FxHashSet<&str> = rustc_hash::FxHashSet::default();
            let mut cursor = bucket.as_deref();
            while let Some(entry) = cursor {
                let expected = self.bucket_index(&entry.key);
                if expected != idx {
                    return Err(InvariantError::new(format!(
                        "key {:?} chained in bucket {idx}, hashes to {expected}",
                        entry.key
                    )));
                }
                if !seen.insert(entry.key.as_str()) {
                    return Err(InvariantError::new(format!(
                        "duplicate key {:?} in bucket {idx}",
                        entry.key
                    )));
                }
                total += 1;
                cursor = entry.next.as_deref();
            }
        }
        if total != self.len {
            return Err(InvariantError::new(format!(
                "entry count {} does not match chained entries {total}",
                self.len
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{err}");
        }
    }
}

impl<V> Default for ChainedHashMap<V> {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_COUNT)
    }
}

impl<V> Drop for ChainedHashMap<V> {
    fn drop(&mut self) {
        for bucket in &mut self.buckets {
            drop_chain(bucket.take());
        }
    }
}

impl<V: Clone> Clone for ChainedHashMap<V> {
    fn clone(&self) -> Self {
        let mut cloned = Self::new(self.buckets.len());
        for (key, value) in self.iter() {
            cloned.put(key, value.clone());
        }
        cloned
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainedHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Container for ChainedHashMap<V> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        ChainedHashMap::clear(self)
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for ChainedHashMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for ChainedHashMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<'a, V> IntoIterator for &'a ChainedHashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Display> fmt::Display for ChainedHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("HashTable: {}");
        }
        f.write_str("HashTable: {\n")?;
        for (idx, bucket) in self.buckets.iter().enumerate() {
            let mut cursor = bucket.as_deref();
            if cursor.is_none() {
                continue;
            }
            write!(f, "  [{idx}]: ")?;
            while let Some(entry) = cursor {
                write!(f, "({}: {})", entry.key, entry.value)?;
                cursor = entry.next.as_deref();
                if cursor.is_some() {
                    f.write_str(" -> ")?;
                }
            }
            f.write_str("\n")?;
        }
        f.write_str("}")
    }
}

/// Borrowing iterator over a [`ChainedHashMap`].
pub struct Iter<'a, V> {
    buckets: std::slice::Iter<'a, Link<V>>,
    current: Option<&'a Entry<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                self.remaining -= 1;
                return Some((entry.key.as_str(), &entry.value));
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_polynomial_definition() {
        assert_eq!(polynomial_hash("", 16), 0);
        assert_eq!(polynomial_hash("a", 16), 97 % 16);
        assert_eq!(polynomial_hash("q", 16), 113 % 16);
        // "ab": ((0*31 + 97) % 16 = 1) -> (1*31 + 98) % 16 = 129 % 16 = 1
        assert_eq!(polynomial_hash("ab", 16), 1);
        // non-ASCII keys hash by code point
        assert_eq!(polynomial_hash("é", 7), 0xE9 % 7);
    }

    #[test]
    fn zero_bucket_count_defaults_to_sixteen() {
        let map: ChainedHashMap = ChainedHashMap::new(0);
        assert_eq!(map.bucket_count(), 16);
        assert!(map.is_empty());
    }

    #[test]
    fn put_then_get() {
        let mut map = ChainedHashMap::new(8);
        assert_eq!(map.put("one", 1), None);
        assert_eq!(map.put("two", 2), None);
        assert_eq!(map.get("one"), Some(&1));
        assert_eq!(map.get("two"), Some(&2));
        assert_eq!(map.get("three"), None);
        assert_eq!(map.count(), 2);
        map.debug_validate_invariants();
    }

    #[test]
    fn put_existing_key_overwrites_in_place() {
        let mut map = ChainedHashMap::new(4);
        map.put("k", 1);
        assert_eq!(map.put("k", 2), Some(1));
        assert_eq!(map.get("k"), Some(&2));
        assert_eq!(map.count(), 1);
    }

    #[test]
    fn colliding_keys_keep_insertion_order() {
        let mut map = ChainedHashMap::new(16);
        assert_eq!(map.bucket_index("a"), map.bucket_index("q"));

        map.put("a", 1);
        map.put("q", 2);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("q"), Some(&2));
        assert_eq!(map.chain_len(1), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "q"]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn delete_head_middle_and_tail_of_chain() {
        // bucket_count 1 forces a single chain
        let mut map = ChainedHashMap::new(1);
        for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
            map.put(key, i as i64);
        }

        assert!(map.delete("a"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "c", "d"]);
        assert!(map.delete("c"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "d"]);
        assert!(map.delete("d"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(map.count(), 1);
        map.debug_validate_invariants();
    }

    #[test]
    fn delete_absent_key_is_noop() {
        let mut map = ChainedHashMap::new(4);
        assert!(!map.delete("missing"));
        map.put("x", 1);
        assert!(!map.delete("y"));
        assert_eq!(map.count(), 1);
        assert!(map.delete("x"));
        assert_eq!(map.get("x"), None);
        assert_eq!(map.count(), 0);
    }

    #[test]
    fn remove_returns_value() {
        let mut map = ChainedHashMap::new(2);
        map.put("k", String::from("v"));
        assert_eq!(map.remove("k"), Some(String::from("v")));
        assert_eq!(map.remove("k"), None);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut map = ChainedHashMap::new(3);
        map.put("counter", 1);
        if let Some(v) = map.get_mut("counter") {
            *v += 41;
        }
        assert_eq!(map.get("counter"), Some(&42));
        assert!(map.get_mut("absent").is_none());
    }

    #[test]
    fn clear_resets_and_table_is_reusable() {
        let mut map = ChainedHashMap::new(4);
        for i in 0..20 {
            map.put(format!("k{i}"), i);
        }
        map.clear();
        assert_eq!(map.count(), 0);
        assert!(map.is_empty());
        assert_eq!(map.keys().count(), 0);
        assert_eq!(map.bucket_count(), 4);

        map.put("fresh", 1);
        assert_eq!(map.get("fresh"), Some(&1));
        assert_eq!(map.count(), 1);
    }

    #[test]
    fn load_factor_is_informational() {
        let mut map = ChainedHashMap::new(4);
        assert_eq!(map.load_factor(), 0.0);
        for i in 0..10 {
            map.put(i.to_string(), i);
        }
        assert_eq!(map.bucket_count(), 4);
        assert!((map.load_factor() - 2.5).abs() < f64::EPSILON);
        assert!(map.longest_chain() >= 3);
    }

    #[test]
    fn keys_follow_bucket_then_chain_order() {
        let mut map = ChainedHashMap::new(16);
        // "b" -> 2, "a" -> 1, "q" -> 1
        map.put("b", 3);
        map.put("a", 1);
        map.put("q", 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "q", "b"]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(map.iter().len(), 3);
    }

    #[test]
    fn display_lists_non_empty_buckets() {
        let mut map = ChainedHashMap::new(16);
        assert_eq!(map.to_string(), "HashTable: {}");
        map.put("a", 1);
        map.put("q", 2);
        map.put("b", 3);
        assert_eq!(
            map.to_string(),
            "HashTable: {\n  [1]: (a: 1) -> (q: 2)\n  [2]: (b: 3)\n}"
        );
    }

    #[test]
    fn long_single_chain_drops_without_overflow() {
        // Built by hand: 200k puts into one chain would be quadratic.
        let mut map: ChainedHashMap = ChainedHashMap::new(1);
        for i in 0..200_000i64 {
            let next = map.buckets[0].take();
            map.buckets[0] = Some(Box::new(Entry {
                key: i.to_string(),
                value: i,
                next,
            }));
            map.len += 1;
        }
        assert_eq!(map.chain_len(0), 200_000);
        drop(map);
    }

    #[test]
    fn clone_and_collect() {
        let map: ChainedHashMap<i64> = [("x", 1), ("y", 2)].into_iter().collect();
        let cloned = map.clone();
        assert_eq!(cloned.keys().collect::<Vec<_>>(), map.keys().collect::<Vec<_>>());
        assert_eq!(cloned.get("y"), Some(&2));
        assert_eq!(format!("{map:?}"), format!("{cloned:?}"));
    }
}

#[cfg(test)]
mod property_tests {
    use std::collections::HashMap;

    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Put(String, i64),
        Delete(String),
        Get(String),
        Clear,
    }

    fn key_strategy() -> impl Strategy<Value = String> {
        "[a-z]{0,3}"
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            5 => (key_strategy(), any::<i64>()).prop_map(|(k, v)| Op::Put(k, v)),
            3 => key_strategy().prop_map(Op::Delete),
            3 => key_strategy().prop_map(Op::Get),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        /// Property: the table agrees with a std HashMap model
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_hash_map_model(
            bucket_count in 1usize..20,
            ops in prop::collection::vec(op_strategy(), 0..200)
        ) {
            let mut map = ChainedHashMap::new(bucket_count);
            let mut model: HashMap<String, i64> = HashMap::new();

            for op in ops {
                match op {
                    Op::Put(k, v) => {
                        let before = map.count();
                        let existed = model.insert(k.clone(), v).is_some();
                        map.put(k.clone(), v);
                        prop_assert_eq!(map.get(&k), Some(&v));
                        prop_assert_eq!(map.count(), if existed { before } else { before + 1 });
                    }
                    Op::Delete(k) => {
                        let before = map.count();
                        let expected = model.remove(&k).is_some();
                        prop_assert_eq!(map.delete(&k), expected);
                        prop_assert_eq!(map.count(), if expected { before - 1 } else { before });
                        prop_assert!(!map.contains(&k));
                    }
                    Op::Get(k) => {
                        prop_assert_eq!(map.get(&k), model.get(&k));
                    }
                    Op::Clear => {
                        map.clear();
                        model.clear();
                        prop_assert!(map.is_empty());
                    }
                }
                prop_assert_eq!(map.count(), model.len());
                prop_assert_eq!(map.keys().count(), map.count());
                prop_assert_eq!(map.bucket_count(), bucket_count);
                map.debug_validate_invariants();
            }
        }

        /// Property: keys that share a bucket iterate in insertion order
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_chain_preserves_insertion_order(
            keys in prop::collection::hash_set("[a-z]{1,4}", 1..30)
        ) {
            let keys: Vec<String> = keys.into_iter().collect();
            let mut map = ChainedHashMap::new(1);
            for (i, k) in keys.iter().enumerate() {
                map.put(k.clone(), i as i64);
            }
            let listed: Vec<&str> = map.keys().collect();
            let expected: Vec<&str> = keys.iter().map(String::as_str).collect();
            prop_assert_eq!(listed, expected);
        }
    }
}
