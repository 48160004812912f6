//! Error types for the dsakit library.
//!
//! ## Key Components
//!
//! - [`DsError`]: Returned by fallible container and algorithm operations
//!   (bounds checks, empty/full containers, malformed integer input, I/O).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (debug-only `check_invariants` methods).
//! - [`ConfigError`]: Returned when container configuration parameters are
//!   invalid (e.g. a growth factor below 2, a shrink floor below the minimum
//!   capacity).
//!
//! Absence of a key in [`ChainedHashMap`](crate::ds::ChainedHashMap) is not
//! an error: lookups return `Option` and deletions return `bool`.
//!
//! ## Example Usage
//!
//! ```
//! use dsakit::ds::DynamicArray;
//! use dsakit::error::DsError;
//!
//! let mut array: DynamicArray<i64> = DynamicArray::new(4);
//! array.append(7);
//!
//! assert_eq!(array.get(0), Ok(&7));
//! assert_eq!(
//!     array.get(3),
//!     Err(DsError::IndexOutOfRange { index: 3, len: 1 })
//! );
//! ```

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DsError>;

// ---------------------------------------------------------------------------
// DsError
// ---------------------------------------------------------------------------

/// Main error type for dsakit operations.
#[derive(Debug, Error)]
pub enum DsError {
    /// Index outside the currently valid range of a sequence.
    #[error("index out of range: index {index}, len {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the sequence when the index was rejected.
        len: usize,
    },

    /// Removal or inspection attempted on an empty container.
    #[error("{container} is empty")]
    Empty {
        /// Human-readable container name ("stack", "queue", ...).
        container: &'static str,
    },

    /// Insertion attempted on a fixed-capacity container that is full.
    #[error("queue is full (capacity {capacity})")]
    Full {
        /// Fixed capacity of the container.
        capacity: usize,
    },

    /// Counting sort received a negative value.
    #[error("counting sort works only with non-negative integers, got {value}")]
    NegativeValue {
        /// The offending value.
        value: i64,
    },

    /// Counting sort received a value above its counter limit.
    #[error("counting sort supports values up to {limit}, got {value}")]
    ValueTooLarge {
        /// The offending value.
        value: i64,
        /// Largest accepted value.
        limit: i64,
    },

    /// A token could not be parsed as a base-10 signed integer.
    #[error("invalid integer: {token:?}")]
    InvalidInteger {
        /// The rejected token.
        token: String,
    },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration parameter.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl PartialEq for DsError {
    fn eq(&self, other: &Self) -> bool {
        use DsError::*;
        match (self, other) {
            (
                IndexOutOfRange { index: a, len: b },
                IndexOutOfRange { index: c, len: d },
            ) => a == c && b == d,
            (Empty { container: a }, Empty { container: b }) => a == b,
            (Full { capacity: a }, Full { capacity: b }) => a == b,
            (NegativeValue { value: a }, NegativeValue { value: b }) => a == b,
            (
                ValueTooLarge { value: a, limit: b },
                ValueTooLarge { value: c, limit: d },
            ) => a == c && b == d,
            (InvalidInteger { token: a }, InvalidInteger { token: b }) => a == b,
            (Io(a), Io(b)) => a.kind() == b.kind(),
            (Config(a), Config(b)) => a == b,
            _ => false,
        }
    }
}

impl DsError {
    /// Shorthand for [`DsError::IndexOutOfRange`].
    #[inline]
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Returns `true` for [`DsError::IndexOutOfRange`].
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal container invariants are violated.
///
/// Produced by `check_invariants` methods on container types
/// (e.g. [`ChainedHashMap::check_invariants`](crate::ds::ChainedHashMap::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when container configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`GrowthPolicy::try_new`](crate::builder::GrowthPolicy::try_new) and the
/// builders' `try_build()` methods.
///
/// # Example
///
/// ```
/// use dsakit::builder::GrowthPolicy;
///
/// let err = GrowthPolicy::try_new(10, 1, 4, 16, 8).unwrap_err();
/// assert!(err.to_string().contains("growth factor"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
