//! # Container Trait Hierarchy
//!
//! Shared interfaces for the containers in [`crate::ds`]. Every container is
//! a [`Container`]; the stacks add [`Lifo`] and the queues add [`Fifo`].
//!
//! ## Architecture
//!
//! ```text
//!                      ┌──────────────────────────────┐
//!                      │          Container           │
//!                      │                              │
//!                      │  len(&) → usize              │
//!                      │  is_empty(&) → bool          │
//!                      │  clear(&mut)                 │
//!                      └──────────────┬───────────────┘
//!                                     │
//!               ┌─────────────────────┴─────────────────────┐
//!               ▼                                           ▼
//!   ┌──────────────────────────┐              ┌──────────────────────────────┐
//!   │         Lifo<T>          │              │           Fifo<T>            │
//!   │                          │              │                              │
//!   │  push(&mut, T)           │              │  enqueue(&mut, T) → Result   │
//!   │  pop(&mut) → Result<T>   │              │  dequeue(&mut) → Result<T>   │
//!   │  peek(&) → Result<&T>    │              │  front(&) → Result<&T>       │
//!   └──────────────────────────┘              └──────────────────────────────┘
//!      ArrayStack, LinkedStack                   ArrayQueue, CircularQueue
//! ```
//!
//! `Fifo::enqueue` is fallible because [`CircularQueue`](crate::ds::CircularQueue)
//! has a fixed capacity; the unbounded [`ArrayQueue`](crate::ds::ArrayQueue)
//! always returns `Ok`.
//!
//! ## Thread Safety
//!
//! None of the implementations are synchronized. Wrap them in a mutex for
//! shared access.

use crate::error::Result;

/// Operations every container supports.
///
/// # Example
///
/// ```
/// use dsakit::ds::{ArrayStack, DynamicArray};
/// use dsakit::traits::Container;
///
/// fn reset<C: Container>(c: &mut C) -> usize {
///     let n = c.len();
///     c.clear();
///     n
/// }
///
/// let mut array: DynamicArray<u32> = (0..4).collect();
/// let mut stack = ArrayStack::new();
/// stack.push(1);
///
/// assert_eq!(reset(&mut array), 4);
/// assert_eq!(reset(&mut stack), 1);
/// assert!(stack.is_empty());
/// ```
pub trait Container {
    /// Returns the number of stored elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);
}

/// Last-in, first-out access.
///
/// # Example
///
/// ```
/// use dsakit::ds::{ArrayStack, LinkedStack};
/// use dsakit::traits::Lifo;
///
/// fn reverse_with<S: Lifo<i32>>(mut stack: S, input: &[i32]) -> Vec<i32> {
///     for &v in input {
///         stack.push(v);
///     }
///     let mut out = Vec::new();
///     while let Ok(v) = stack.pop() {
///         out.push(v);
///     }
///     out
/// }
///
/// assert_eq!(reverse_with(ArrayStack::new(), &[1, 2, 3]), vec![3, 2, 1]);
/// assert_eq!(reverse_with(LinkedStack::new(), &[1, 2, 3]), vec![3, 2, 1]);
/// ```
pub trait Lifo<T>: Container {
    /// Pushes `value` on top.
    fn push(&mut self, value: T);

    /// Removes and returns the top element; `DsError::Empty` when empty.
    fn pop(&mut self) -> Result<T>;

    /// Returns the top element without removing it.
    fn peek(&self) -> Result<&T>;
}

/// First-in, first-out access.
///
/// # Example
///
/// ```
/// use dsakit::ds::CircularQueue;
/// use dsakit::traits::Fifo;
///
/// let mut queue = CircularQueue::new(2);
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// assert!(queue.enqueue(3).is_err());
///
/// assert_eq!(queue.dequeue().unwrap(), 1);
/// assert_eq!(*queue.front().unwrap(), 2);
/// ```
pub trait Fifo<T>: Container {
    /// Adds `value` at the rear.
    fn enqueue(&mut self, value: T) -> Result<()>;

    /// Removes and returns the front element; `DsError::Empty` when empty.
    fn dequeue(&mut self) -> Result<T>;

    /// Returns the front element without removing it.
    fn front(&self) -> Result<&T>;
}
