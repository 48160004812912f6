//! Configuration and builders for the core containers.
//!
//! [`GrowthPolicy`] holds the resize thresholds of
//! [`DynamicArray`](crate::ds::DynamicArray). Its [`Default`] is the classic
//! policy: default capacity 10, double when full, halve when fewer than a
//! quarter of the slots are used and the capacity exceeds 16, never below 8.
//!
//! [`ArrayBuilder`] and [`HashMapBuilder`] construct containers from
//! validated parameters. The plain constructors (`DynamicArray::new`,
//! `ChainedHashMap::new`) normalize a zero size to the default; the builders'
//! `try_build` rejects it instead.
//!
//! ## Example
//!
//! ```rust
//! use dsakit::builder::{ArrayBuilder, GrowthPolicy, HashMapBuilder};
//!
//! let policy = GrowthPolicy::try_new(4, 3, 9, 27, 4).unwrap();
//! let mut array = ArrayBuilder::new(4).growth_policy(policy).build::<i64>();
//! for i in 0..5 {
//!     array.append(i);
//! }
//! assert_eq!(array.capacity(), 12);
//!
//! let map = HashMapBuilder::new(32).try_build::<i64>().unwrap();
//! assert_eq!(map.bucket_count(), 32);
//! ```

use crate::ds::chained_hash_map::{ChainedHashMap, DEFAULT_BUCKET_COUNT};
use crate::ds::dynamic_array::DynamicArray;
use crate::error::ConfigError;

/// Capacity used when a zero initial capacity is requested.
pub const DEFAULT_ARRAY_CAPACITY: usize = 10;
/// Multiplier applied on growth; divisor applied on shrink.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;
/// Shrink happens when `len < capacity / DEFAULT_SHRINK_DIVISOR`.
pub const DEFAULT_SHRINK_DIVISOR: usize = 4;
/// Capacities at or below this value never shrink.
pub const DEFAULT_SHRINK_FLOOR: usize = 16;
/// Lower bound on capacity after a shrink.
pub const DEFAULT_MIN_CAPACITY: usize = 8;

/// Resize thresholds for [`DynamicArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    default_capacity: usize,
    growth_factor: usize,
    shrink_divisor: usize,
    shrink_floor: usize,
    min_capacity: usize,
}

impl GrowthPolicy {
    /// Creates a validated policy.
    ///
    /// Requirements:
    /// - `default_capacity > 0`
    /// - `growth_factor >= 2`
    /// - `shrink_divisor > growth_factor` (hysteresis between grow and shrink)
    /// - `min_capacity > 0`
    /// - `shrink_floor >= min_capacity`
    pub fn try_new(
        default_capacity: usize,
        growth_factor: usize,
        shrink_divisor: usize,
        shrink_floor: usize,
        min_capacity: usize,
    ) -> Result<Self, ConfigError> {
        if default_capacity == 0 {
            return Err(ConfigError::new("default capacity must be > 0"));
        }
        if growth_factor < 2 {
            return Err(ConfigError::new(format!(
                "growth factor must be >= 2, got {growth_factor}"
            )));
        }
        if shrink_divisor <= growth_factor {
            return Err(ConfigError::new(format!(
                "shrink divisor ({shrink_divisor}) must exceed growth factor ({growth_factor})"
            )));
        }
        if min_capacity == 0 {
            return Err(ConfigError::new("min capacity must be > 0"));
        }
        if shrink_floor < min_capacity {
            return Err(ConfigError::new(format!(
                "shrink floor ({shrink_floor}) must be >= min capacity ({min_capacity})"
            )));
        }
        Ok(Self {
            default_capacity,
            growth_factor,
            shrink_divisor,
            shrink_floor,
            min_capacity,
        })
    }

    pub fn default_capacity(&self) -> usize {
        self.default_capacity
    }

    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    pub fn shrink_divisor(&self) -> usize {
        self.shrink_divisor
    }

    pub fn shrink_floor(&self) -> usize {
        self.shrink_floor
    }

    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Capacity to use for a requested initial capacity (0 means default).
    #[inline]
    pub fn initial_capacity(&self, requested: usize) -> usize {
        if requested == 0 {
            self.default_capacity
        } else {
            requested
        }
    }

    /// Capacity after growing from `capacity`.
    #[inline]
    pub fn grown(&self, capacity: usize) -> usize {
        capacity.saturating_mul(self.growth_factor).max(1)
    }

    /// Returns the new capacity if an array of `len` elements in `capacity`
    /// slots should shrink, otherwise `None`.
    #[inline]
    pub fn shrunk(&self, len: usize, capacity: usize) -> Option<usize> {
        if len > 0 && len < capacity / self.shrink_divisor && capacity > self.shrink_floor {
            Some((capacity / self.growth_factor).max(self.min_capacity))
        } else {
            None
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_ARRAY_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            shrink_divisor: DEFAULT_SHRINK_DIVISOR,
            shrink_floor: DEFAULT_SHRINK_FLOOR,
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}

/// Builder for [`DynamicArray`] instances.
#[derive(Debug, Clone)]
pub struct ArrayBuilder {
    capacity: usize,
    policy: GrowthPolicy,
}

impl ArrayBuilder {
    /// Create a builder with the requested initial capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: GrowthPolicy::default(),
        }
    }

    /// Replace the growth policy.
    pub fn growth_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build an array; a zero capacity falls back to the policy default.
    pub fn build<T>(self) -> DynamicArray<T> {
        DynamicArray::with_policy(self.capacity, self.policy)
    }

    /// Build an array, rejecting a zero capacity.
    pub fn try_build<T>(self) -> Result<DynamicArray<T>, ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(self.build())
    }
}

/// Builder for [`ChainedHashMap`] instances.
#[derive(Debug, Clone)]
pub struct HashMapBuilder {
    bucket_count: usize,
}

impl HashMapBuilder {
    /// Create a builder with a fixed bucket count.
    pub fn new(bucket_count: usize) -> Self {
        Self { bucket_count }
    }

    /// Build a map; a zero bucket count falls back to [`DEFAULT_BUCKET_COUNT`].
    pub fn build<V>(self) -> ChainedHashMap<V> {
        ChainedHashMap::new(self.bucket_count)
    }

    /// Build a map, rejecting a zero bucket count.
    pub fn try_build<V>(self) -> Result<ChainedHashMap<V>, ConfigError> {
        if self.bucket_count == 0 {
            return Err(ConfigError::new(format!(
                "bucket count must be > 0 (default is {DEFAULT_BUCKET_COUNT})"
            )));
        }
        Ok(self.build())
    }
}
