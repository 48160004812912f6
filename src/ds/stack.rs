//! LIFO stacks.
//!
//! - [`ArrayStack`]: `Vec`-backed; the top is the last slot.
//! - [`LinkedStack`]: built on [`LinkedList`]; the top is the head node.
//!
//! Both report [`DsError::Empty`] from `pop`/`peek` on an empty stack and
//! implement [`Lifo`].

use std::fmt;

use crate::ds::linked_list::LinkedList;
use crate::error::{DsError, Result};
use crate::traits::{Container, Lifo};

const STACK: &str = "stack";

fn write_stack<'a, T, I>(f: &mut fmt::Formatter<'_>, bottom_to_top: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: ExactSizeIterator<Item = &'a T>,
{
    if bottom_to_top.len() == 0 {
        return f.write_str("Stack: []");
    }
    f.write_str("Stack: [")?;
    for (i, value) in bottom_to_top.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("] <- top")
}

/// `Vec`-backed stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(DsError::Empty { container: STACK })
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(DsError::Empty { container: STACK })
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

    /// Copy of the elements, bottom to top.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stack(f, self.items.iter())
    }
}

impl<T> Container for ArrayStack<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Lifo<T> for ArrayStack<T> {
    fn push(&mut self, value: T) {
        ArrayStack::push(self, value)
    }

    fn pop(&mut self) -> Result<T> {
        ArrayStack::pop(self)
    }

    fn peek(&self) -> Result<&T> {
        ArrayStack::peek(self)
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Stack built on a singly linked list; push and pop work at the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedStack<T> {
    list: LinkedList<T>,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.list.prepend(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.list
            .pop_front()
            .ok_or(DsError::Empty { container: STACK })
    }

    pub fn peek(&self) -> Result<&T> {
        self.list
            .peek_front()
            .ok_or(DsError::Empty { container: STACK })
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.find(value).is_some()
    }

    /// Iterates top to bottom.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.list.iter()
    }

    /// Copy of the elements, bottom to top.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut items = self.list.to_vec();
        items.reverse();
        items
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bottom_to_top: Vec<&T> = self.list.iter().collect();
        bottom_to_top.reverse();
        write_stack(f, bottom_to_top.into_iter())
    }
}

impl<T> Container for LinkedStack<T> {
    fn len(&self) -> usize {
        self.list.len()
    }

    fn clear(&mut self) {
        self.list.clear();
    }
}

impl<T> Lifo<T> for LinkedStack<T> {
    fn push(&mut self, value: T) {
        LinkedStack::push(self, value)
    }

    fn pop(&mut self) -> Result<T> {
        LinkedStack::pop(self)
    }

    fn peek(&self) -> Result<&T> {
        LinkedStack::peek(self)
    }
}
