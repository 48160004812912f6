//! Growable contiguous array with explicit capacity management.
//!
//! Elements live in a single owned buffer. The array tracks its own logical
//! capacity instead of relying on the allocator's, so the resize thresholds
//! are exact and observable through [`DynamicArray::capacity`].
//!
//! ## Architecture
//!
//! ```text
//!   DynamicArray<T>  (capacity = 8, len = 5)
//!
//!   index:   0     1     2     3     4     5     6     7
//!          ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//!   data:  │ 10  │ 20  │ 25  │ 30  │ 40  │  ·  │  ·  │  ·  │
//!          └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!           ◄──────── live [0, len) ─────►◄─ spare [len, cap) ─►
//! ```
//!
//! ## Resize Policy (default [`GrowthPolicy`])
//!
//! ```text
//!   append / insert when len == capacity   → capacity *= 2
//!   delete leaving 0 < len < capacity / 4
//!          and capacity > 16               → capacity = max(8, capacity / 2)
//! ```
//!
//! Shrinking only below 25% utilization (not 50%) gives hysteresis: a
//! sequence that oscillates around a resize boundary does not reallocate on
//! every step.
//!
//! ## Operations
//!
//! | Operation   | Description                         | Complexity      |
//! |-------------|-------------------------------------|-----------------|
//! | [`append`]  | Push at the end, growing if full    | Amortized O(1)  |
//! | [`get`]     | Read by index                       | O(1)            |
//! | [`set`]     | Overwrite by index                  | O(1)            |
//! | [`insert`]  | Shift `[index, len)` right          | O(len - index)  |
//! | [`delete`]  | Shift `(index, len)` left, maybe shrink | O(len)      |
//! | [`to_vec`]  | Owned copy of live elements         | O(len)          |
//!
//! [`append`]: DynamicArray::append
//! [`get`]: DynamicArray::get
//! [`set`]: DynamicArray::set
//! [`insert`]: DynamicArray::insert
//! [`delete`]: DynamicArray::delete
//! [`to_vec`]: DynamicArray::to_vec
//!
//! ## Example Usage
//!
//! ```
//! use dsakit::ds::DynamicArray;
//!
//! let mut array = DynamicArray::new(5);
//! for i in 1..=5 {
//!     array.append(i * 10);
//! }
//! array.insert(2, 25).unwrap();
//!
//! assert_eq!(array.get(2), Ok(&25));
//! assert_eq!(array.capacity(), 10);
//! assert_eq!(
//!     array.to_string(),
//!     "DynamicArray{size: 6, capacity: 10, data: [10, 20, 25, 30, 40, 50]}"
//! );
//! ```
//!
//! ## Thread Safety
//!
//! `DynamicArray` is not synchronized. Wrap it in a mutex for shared
//! mutation.

use std::fmt;

use crate::builder::GrowthPolicy;
use crate::error::{DsError, InvariantError, Result};
use crate::traits::Container;

/// Contiguous growable array with exact, policy-driven resizing.
///
/// Failed bounds-checked operations leave the array untouched.
#[derive(Debug)]
pub struct DynamicArray<T> {
    data: Vec<T>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array; a zero `capacity` becomes 10.
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, GrowthPolicy::default())
    }

    /// Creates an empty array with a custom resize policy.
    pub fn with_policy(capacity: usize, policy: GrowthPolicy) -> Self {
        let capacity = policy.initial_capacity(capacity);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the logical capacity (allocated slot count).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the active resize policy.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Appends `value` at the end, doubling capacity first when full.
    pub fn append(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.push(value);
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.data
            .get(index)
            .ok_or_else(|| DsError::out_of_range(index, self.data.len()))
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or_else(|| DsError::out_of_range(index, len))
    }

    /// Overwrites the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.data.len() {
            return Err(DsError::out_of_range(index, self.data.len()));
        }
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left. May shrink capacity afterwards.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        if index >= self.data.len() {
            return Err(DsError::out_of_range(index, self.data.len()));
        }
        let removed = self.data.remove(index);
        if let Some(new_capacity) = self.policy.shrunk(self.data.len(), self.capacity) {
            self.shrink(new_capacity);
        }
        Ok(removed)
    }

    /// Removes every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the live elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns an owned copy of the live elements in index order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    fn grow(&mut self) {
        let new_capacity = self.policy.grown(self.capacity);
        tracing::trace!(
            from = self.capacity,
            to = new_capacity,
            len = self.data.len(),
            "dynamic array grow"
        );
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
    }

    fn shrink(&mut self, new_capacity: usize) {
        tracing::trace!(
            from = self.capacity,
            to = new_capacity,
            len = self.data.len(),
            "dynamic array shrink"
        );
        self.data.shrink_to(new_capacity);
        self.capacity = new_capacity;
    }

    /// Verifies `len <= capacity` and that the buffer holds at least
    /// `capacity` slots.
    pub fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        if self.data.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.data.len(),
                self.capacity
            )));
        }
        if self.data.capacity() < self.capacity {
            return Err(InvariantError::new(format!(
                "buffer holds {} slots, logical capacity is {}",
                self.data.capacity(),
                self.capacity
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

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    /// Arrays are equal when their live elements are equal; capacity is
    /// ignored.
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Container for DynamicArray<T> {
    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn clear(&mut self) {
        DynamicArray::clear(self)
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::default();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DynamicArray{{size: {}, capacity: {}, data: [",
            self.data.len(),
            self.capacity
        )?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]}")
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Append(i64),
        Insert(usize, i64),
        Delete(usize),
        Set(usize, i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => any::<i64>().prop_map(Op::Append),
            2 => (0usize..64, any::<i64>()).prop_map(|(i, v)| Op::Insert(i, v)),
            3 => (0usize..64).prop_map(Op::Delete),
            1 => (0usize..64, any::<i64>()).prop_map(|(i, v)| Op::Set(i, v)),
        ]
    }

    proptest! {
        /// Property: the array behaves like a Vec model, and a failing
        /// operation leaves it unchanged
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..300)) {
            let mut array = DynamicArray::new(0);
            let mut model: Vec<i64> = Vec::new();

            for op in ops {
                let before = array.capacity();
                match op {
                    Op::Append(v) => {
                        array.append(v);
                        model.push(v);
                    }
                    Op::Insert(i, v) => {
                        let result = array.insert(i, v);
                        if i <= model.len() {
                            prop_assert!(result.is_ok());
                            model.insert(i, v);
                        } else {
                            prop_assert!(result.unwrap_err().is_index_out_of_range());
                            prop_assert_eq!(array.capacity(), before);
                        }
                    }
                    Op::Delete(i) => {
                        let result = array.delete(i);
                        if i < model.len() {
                            prop_assert_eq!(result.ok(), Some(model.remove(i)));
                        } else {
                            prop_assert!(result.is_err());
                            prop_assert_eq!(array.capacity(), before);
                        }
                    }
                    Op::Set(i, v) => {
                        let result = array.set(i, v);
                        if i < model.len() {
                            prop_assert!(result.is_ok());
                            model[i] = v;
                        } else {
                            prop_assert!(result.is_err());
                        }
                        prop_assert_eq!(array.capacity(), before);
                    }
                }
                prop_assert_eq!(array.len(), model.len());
                prop_assert_eq!(array.to_vec().len(), array.len());
                prop_assert_eq!(array.as_slice(), model.as_slice());
                array.debug_validate_invariants();
            }
        }

        /// Property: capacity never drops below 8 and never shrinks while <= 16
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_capacity_bounds(
            initial in 1usize..40,
            appends in 0usize..200,
            deletes in prop::collection::vec(0usize..200, 0..200)
        ) {
            let mut array = DynamicArray::new(initial);
            for i in 0..appends {
                array.append(i);
            }
            for d in deletes {
                if array.is_empty() {
                    break;
                }
                let before = array.capacity();
                array.delete(d % array.len()).unwrap();
                let after = array.capacity();
                if after < before {
                    prop_assert!(before > 16);
                    prop_assert!(after >= 8);
                }
            }
        }

        /// Property: after n appends, capacity is the smallest c * 2^k >= n
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_doubling_capacity(initial in 1usize..32, n in 0usize..500) {
            let mut array = DynamicArray::new(initial);
            for i in 0..n {
                array.append(i);
            }
            let mut expected = initial;
            while expected < n {
                expected *= 2;
            }
            prop_assert_eq!(array.capacity(), expected);
        }

        /// Property: insert then get returns the value and shifts the tail
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_insert_shifts_tail(
            values in prop::collection::vec(any::<i32>(), 0..50),
            index_seed in any::<usize>(),
            value in any::<i32>()
        ) {
            let mut array: DynamicArray<i32> = values.iter().copied().collect();
            let index = index_seed % (values.len() + 1);
            array.insert(index, value).unwrap();

            prop_assert_eq!(array.get(index), Ok(&value));
            prop_assert_eq!(&array.as_slice()[..index], &values[..index]);
            prop_assert_eq!(&array.as_slice()[index + 1..], &values[index..]);
        }
    }
}
