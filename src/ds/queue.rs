//! Unbounded FIFO queue.
//!
//! `ArrayQueue` keeps its elements in a `VecDeque`, so `enqueue` and
//! `dequeue` are amortized O(1). For a fixed-capacity ring see
//! [`CircularQueue`](crate::ds::CircularQueue).

use std::collections::VecDeque;
use std::fmt;

use crate::error::{DsError, Result};
use crate::traits::{Container, Fifo};

const QUEUE: &str = "queue";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayQueue<T> {
    items: VecDeque<T>,
}

impl<T> ArrayQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds `value` at the rear.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes the front element.
    pub fn dequeue(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or(DsError::Empty { container: QUEUE })
    }

    pub fn front(&self) -> Result<&T> {
        self.items.front().ok_or(DsError::Empty { container: QUEUE })
    }

    pub fn rear(&self) -> Result<&T> {
        self.items.back().ok_or(DsError::Empty { container: QUEUE })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Iterates front to rear.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("Queue: []");
        }
        f.write_str("Queue: front -> [")?;
        for (i, value) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("] <- rear")
    }
}

impl<T> Container for ArrayQueue<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Fifo<T> for ArrayQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<()> {
        ArrayQueue::enqueue(self, value);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        ArrayQueue::dequeue(self)
    }

    fn front(&self) -> Result<&T> {
        ArrayQueue::front(self)
    }
}

impl<T> FromIterator<T> for ArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
