//! Fixed-capacity ring buffer queue.
//!
//! Slots are preallocated once; `enqueue` writes at the rear and `dequeue`
//! reads from the front, both wrapping around the end of the buffer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                      CircularQueue (capacity 4) Layout                      │
//! │                                                                             │
//! │   slots: Vec<Option<T>>        head: index of the front element             │
//! │   len: occupied slots          rear = (head + len) % capacity               │
//! │                                                                             │
//! │   After enqueue 1, 2, 3, 4, dequeue, dequeue, enqueue 5:                    │
//! │                                                                             │
//! │   Index:     0     1     2     3                                            │
//! │            ┌─────┬─────┬─────┬─────┐                                        │
//! │   slots:   │  5  │  -  │  3  │  4  │                                        │
//! │            └─────┴─────┴─────┴─────┘                                        │
//! │              ▲           ▲                                                  │
//! │              │           │                                                  │
//! │          last write    head = 2, len = 3                                    │
//! │                                                                             │
//! │   Logical order: front -> [3, 4, 5] <- rear                                 │
//! │                                                                             │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation     | Description                              | Complexity |
//! |---------------|------------------------------------------|------------|
//! | [`enqueue`]   | Write at rear; `DsError::Full` when full | O(1)       |
//! | [`dequeue`]   | Take front; `DsError::Empty` when empty  | O(1)       |
//! | [`front`]     | Borrow front element                     | O(1)       |
//! | [`rear`]      | Borrow rear element                      | O(1)       |
//! | [`iter`]      | Front to rear                            | O(n)       |
//!
//! [`enqueue`]: CircularQueue::enqueue
//! [`dequeue`]: CircularQueue::dequeue
//! [`front`]: CircularQueue::front
//! [`rear`]: CircularQueue::rear
//! [`iter`]: CircularQueue::iter
//!
//! ## Example Usage
//!
//! ```
//! use dsakit::ds::CircularQueue;
//!
//! let mut queue = CircularQueue::new(3);
//! for v in [1, 2, 3] {
//!     queue.enqueue(v).unwrap();
//! }
//! assert!(queue.is_full());
//! assert!(queue.enqueue(4).is_err());
//!
//! assert_eq!(queue.dequeue().unwrap(), 1);
//! queue.enqueue(4).unwrap();
//! assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
//! ```
//!
//! A queue built with capacity 0 is permanently full.

use std::fmt;

use crate::error::{DsError, InvariantError, Result};
use crate::traits::{Container, Fifo};

const QUEUE: &str = "queue";

#[derive(Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    #[inline]
    fn physical(&self, offset: usize) -> usize {
        (self.head + offset) % self.slots.len()
    }

    /// Writes `value` at the rear.
    ///
    /// Returns [`DsError::Full`] and drops nothing when the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(DsError::Full {
                capacity: self.capacity(),
            });
        }
        let rear = self.physical(self.len);
        self.slots[rear] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Takes the front element.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(DsError::Empty { container: QUEUE });
        }
        let value = self.slots[self.head]
            .take()
            .ok_or(DsError::Empty { container: QUEUE })?;
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Ok(value)
    }

    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(DsError::Empty { container: QUEUE });
        }
        self.slots[self.head]
            .as_ref()
            .ok_or(DsError::Empty { container: QUEUE })
    }

    pub fn rear(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(DsError::Empty { container: QUEUE });
        }
        self.slots[self.physical(self.len - 1)]
            .as_ref()
            .ok_or(DsError::Empty { container: QUEUE })
    }

    /// Drops every element; capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Iterates front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Checks that exactly the logical range `head..head + len` is occupied.
    pub fn check_invariants(&self) -> std::result::Result<(), InvariantError> {
        let cap = self.slots.len();
        if self.len > cap {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.len, cap
            )));
        }
        if cap == 0 {
            return Ok(());
        }
        if self.head >= cap {
            return Err(InvariantError::new(format!(
                "head {} out of bounds for capacity {}",
                self.head, cap
            )));
        }
        for offset in 0..cap {
            let occupied = self.slots[self.physical(offset)].is_some();
            if occupied != (offset < self.len) {
                return Err(InvariantError::new(format!(
                    "slot at logical offset {offset} has occupied={occupied} with len {}",
                    self.len
                )));
            }
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

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("capacity", &self.capacity())
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Queue: []");
        }
        f.write_str("Queue: front -> [")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("] <- rear")
    }
}

impl<T> Container for CircularQueue<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        CircularQueue::clear(self);
    }
}

impl<T> Fifo<T> for CircularQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<()> {
        CircularQueue::enqueue(self, value)
    }

    fn dequeue(&mut self) -> Result<T> {
        CircularQueue::dequeue(self)
    }

    fn front(&self) -> Result<&T> {
        CircularQueue::front(self)
    }
}

/// Front-to-rear iterator over a [`CircularQueue`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    queue: &'a CircularQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.queue.len {
            let slot = &self.queue.slots[self.queue.physical(self.offset)];
            self.offset += 1;
            if let Some(value) = slot.as_ref() {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_then_rejects() {
        let mut queue = CircularQueue::new(3);
        assert_eq!(queue.capacity(), 3);
        for v in 1..=3 {
            queue.enqueue(v).unwrap();
        }
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(4), Err(DsError::Full { capacity: 3 }));
        assert_eq!(queue.len(), 3);
        queue.debug_validate_invariants();
    }

    #[test]
    fn wraps_around_the_buffer() {
        let mut queue = CircularQueue::new(4);
        for v in 1..=4 {
            queue.enqueue(v).unwrap();
        }
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        queue.enqueue(5).unwrap();
        queue.enqueue(6).unwrap();

        assert_eq!(queue.to_vec(), vec![3, 4, 5, 6]);
        assert_eq!(queue.front(), Ok(&3));
        assert_eq!(queue.rear(), Ok(&6));
        assert_eq!(queue.to_string(), "Queue: front -> [3, 4, 5, 6] <- rear");
        queue.debug_validate_invariants();
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue: CircularQueue<i32> = CircularQueue::new(2);
        assert_eq!(queue.dequeue(), Err(DsError::Empty { container: "queue" }));
        assert!(queue.front().is_err());
        assert!(queue.rear().is_err());
        assert_eq!(queue.to_string(), "Queue: []");
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let mut queue = CircularQueue::new(0);
        assert!(queue.is_full());
        assert!(queue.is_empty());
        assert_eq!(queue.enqueue('x'), Err(DsError::Full { capacity: 0 }));
        assert_eq!(queue.iter().count(), 0);
        queue.debug_validate_invariants();
    }

    #[test]
    fn clear_resets_positions() {
        let mut queue = CircularQueue::new(2);
        queue.enqueue("a").unwrap();
        queue.enqueue("b").unwrap();
        queue.dequeue().unwrap();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 2);
        queue.enqueue("c").unwrap();
        assert_eq!(queue.front(), Ok(&"c"));
        queue.debug_validate_invariants();
    }

    #[test]
    fn iter_is_exact_size() {
        let mut queue = CircularQueue::new(3);
        queue.enqueue(10).unwrap();
        queue.enqueue(20).unwrap();
        let iter = queue.iter();
        assert_eq!(iter.len(), 2);
        let collected: Vec<_> = (&queue).into_iter().copied().collect();
        assert_eq!(collected, vec![10, 20]);
    }
}
