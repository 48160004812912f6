pub use crate::builder::{ArrayBuilder, GrowthPolicy, HashMapBuilder};
pub use crate::ds::{
    ArrayQueue, ArrayStack, BinarySearchTree, ChainedHashMap, CircularQueue, DynamicArray,
    LinkedList, LinkedStack,
};
pub use crate::error::{ConfigError, DsError, InvariantError};
pub use crate::traits::{Container, Fifo, Lifo};
