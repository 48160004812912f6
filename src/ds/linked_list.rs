//! Singly linked list with owned `Box` links.
//!
//! Each node owns its successor; the list owns the head. There is no tail
//! pointer, so [`append`](LinkedList::append) walks the list.
//!
//! ```text
//!   head ─► [10] ─► [20] ─► [30] ─► ·
//! ```
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `prepend`        | O(1)       |
//! | `append`         | O(n)       |
//! | `insert_at`      | O(index)   |
//! | `delete_at`      | O(index)   |
//! | `delete_value`   | O(n)       |
//! | `find` / `get`   | O(n)       |
//! | `reverse`        | O(n)       |
//! | `merge_sorted`   | O(n + m)   |
//!
//! Drop is iterative, so long lists do not overflow the stack.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{DsError, Result};
use crate::traits::Container;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `value` at the front.
    pub fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Adds `value` at the back.
    pub fn append(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index` (`index <= len`).
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(DsError::out_of_range(index, self.len));
        }
        let link = Self::link_at(&mut self.head, index);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn delete_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(DsError::out_of_range(index, self.len));
        }
        let link = Self::link_at(&mut self.head, index);
        match link.take() {
            Some(mut node) => {
                *link = node.next.take();
                self.len -= 1;
                Ok(node.value)
            },
            None => Err(DsError::out_of_range(index, self.len)),
        }
    }

    /// Removes the first element equal to `value`; returns `true` if found.
    pub fn delete_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = &mut self.head;
        loop {
            let found = match cursor.as_deref() {
                None => return false,
                Some(node) => node.value == *value,
            };
            if found {
                if let Some(mut node) = cursor.take() {
                    *cursor = node.next.take();
                    self.len -= 1;
                }
                return true;
            }
            cursor = match cursor {
                Some(node) => &mut node.next,
                None => return false,
            };
        }
    }

    /// Index of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.iter()
            .nth(index)
            .ok_or_else(|| DsError::out_of_range(index, self.len))
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.value
        })
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Merges two ascending lists into one ascending list by relinking their
    /// nodes. Equal elements from `left` come first.
    pub fn merge_sorted(mut left: Self, mut right: Self) -> Self
    where
        T: Ord,
    {
        let len = left.len + right.len;
        let mut a = left.head.take();
        let mut b = right.head.take();

        let mut merged: Link<T> = None;
        let mut tail = &mut merged;
        loop {
            let take_a = match (&a, &b) {
                (Some(x), Some(y)) => x.value <= y.value,
                _ => break,
            };
            let source = if take_a { &mut a } else { &mut b };
            if let Some(mut node) = source.take() {
                *source = node.next.take();
                tail = &mut tail.insert(node).next;
            }
        }
        *tail = a.or(b);

        Self { head: merged, len }
    }

    // Walks `index` links from `head`; stops early at the end of the list.
    fn link_at(head: &mut Link<T>, index: usize) -> &mut Link<T> {
        let mut cursor = head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> Container for LinkedList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut len = 0;
        let mut tail = &mut list.head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
            len += 1;
        }
        list.len = len;
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedList`].
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
