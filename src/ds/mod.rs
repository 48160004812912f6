pub mod binary_tree;
pub mod chained_hash_map;
pub mod circular_queue;
pub mod dynamic_array;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use binary_tree::BinarySearchTree;
pub use chained_hash_map::{ChainedHashMap, DEFAULT_BUCKET_COUNT, polynomial_hash};
pub use circular_queue::CircularQueue;
pub use dynamic_array::DynamicArray;
pub use linked_list::LinkedList;
pub use queue::ArrayQueue;
pub use stack::{ArrayStack, LinkedStack};
