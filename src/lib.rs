//! dsakit: classic data structures and algorithms.
//!
//! The core pair is [`DynamicArray`], a growable array with explicit
//! capacity management, and [`ChainedHashMap`], a string-keyed hash map with
//! separate chaining. Around them sit a singly linked list, stacks, queues,
//! a binary search tree, sorting and searching routines, and small I/O
//! helpers.
//!
//! ```
//! use dsakit::prelude::*;
//!
//! let mut array = DynamicArray::new(0);
//! for v in 0..11 {
//!     array.append(v);
//! }
//! assert_eq!(array.capacity(), 20);
//!
//! let mut map = ChainedHashMap::new(16);
//! map.put("a", 1);
//! map.put("q", 2);
//! assert_eq!(map.to_string(), "HashTable: {\n  [1]: (a: 1) -> (q: 2)\n}");
//! ```

pub mod algorithms;
pub mod builder;
pub mod ds;
pub mod error;
pub mod io;
pub mod prelude;
pub mod traits;

pub use crate::ds::{
    ArrayQueue, ArrayStack, BinarySearchTree, ChainedHashMap, CircularQueue, DynamicArray,
    LinkedList, LinkedStack,
};
pub use crate::error::{DsError, Result};
