//! Unbalanced binary search tree.
//!
//! Values smaller than a node go left, larger go right; duplicates are
//! ignored. Nothing rebalances the tree, so sorted input degrades it into a
//! chain of height `n - 1`. Traversals, `Drop` and `Display` walk the tree
//! with explicit stacks so a degenerate tree cannot overflow the call stack.
//!
//! ## Operations
//!
//! | Operation                  | Description                              | Complexity |
//! |----------------------------|------------------------------------------|------------|
//! | [`insert`]                 | Add value; `false` if already present    | O(h)       |
//! | [`contains`]               | Membership test                          | O(h)       |
//! | [`delete`]                 | Remove value (in-order successor splice) | O(h)       |
//! | [`min`] / [`max`]          | Leftmost / rightmost value               | O(h)       |
//! | [`height`]                 | Edges on the longest root-to-leaf path   | O(n)       |
//! | [`inorder`] / [`preorder`] / [`postorder`] | Traversal into a `Vec`   | O(n)       |
//!
//! [`insert`]: BinarySearchTree::insert
//! [`contains`]: BinarySearchTree::contains
//! [`delete`]: BinarySearchTree::delete
//! [`min`]: BinarySearchTree::min
//! [`max`]: BinarySearchTree::max
//! [`height`]: BinarySearchTree::height
//! [`inorder`]: BinarySearchTree::inorder
//! [`preorder`]: BinarySearchTree::preorder
//! [`postorder`]: BinarySearchTree::postorder
//!
//! ## Example Usage
//!
//! ```
//! use dsakit::ds::BinarySearchTree;
//!
//! let tree: BinarySearchTree<i32> = [5, 3, 7, 1].into_iter().collect();
//! assert_eq!(tree.inorder(), vec![1, 3, 5, 7]);
//! assert_eq!(tree.preorder(), vec![5, 3, 1, 7]);
//! assert_eq!(tree.height(), Some(2));
//!
//! let expected = "Binary Tree:\n└── 5\n    ├── 3\n    │   ├── 1\n    └── 7\n";
//! assert_eq!(tree.to_string(), expected);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use crate::error::InvariantError;
use crate::traits::Container;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height in edges: `None` for an empty tree, `Some(0)` for a lone root.
    pub fn height(&self) -> Option<usize> {
        let root = self.root.as_deref()?;
        let mut level: VecDeque<&Node<T>> = VecDeque::from([root]);
        let mut height = 0;
        loop {
            for _ in 0..level.len() {
                if let Some(node) = level.pop_front() {
                    level.extend(node.left.as_deref());
                    level.extend(node.right.as_deref());
                }
            }
            if level.is_empty() {
                return Some(height);
            }
            height += 1;
        }
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Sorted iteration (in-order).
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Left subtree, node, right subtree.
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Node, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.value.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Left subtree, right subtree, node.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        // Node-right-left preorder, reversed.
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.value.clone());
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }

    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value`; returns `false` and leaves the tree unchanged if it
    /// is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            match value.cmp(&node.value) {
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *cursor = Some(Node::leaf(value));
        self.len += 1;
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes `value`, returning whether it was present.
    ///
    /// A node with two children takes the value of its in-order successor,
    /// which is then unlinked from the right subtree.
    pub fn delete(&mut self, value: &T) -> bool {
        let mut cursor = &mut self.root;
        loop {
            let ordering = match cursor.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return false,
            };
            match ordering {
                Ordering::Equal => break,
                Ordering::Less => {
                    if let Some(node) = cursor {
                        cursor = &mut node.left;
                    }
                },
                Ordering::Greater => {
                    if let Some(node) = cursor {
                        cursor = &mut node.right;
                    }
                },
            }
        }

        let Some(mut node) = cursor.take() else {
            return false;
        };
        *cursor = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                node.right = Some(right);
                if let Some(successor) = Self::take_min(&mut node.right) {
                    node.value = successor;
                }
                node.left = Some(left);
                Some(node)
            },
        };
        self.len -= 1;
        true
    }

    /// Unlinks the leftmost node under `link`, splicing its right child into
    /// its place. Returns `None` only when `link` is empty.
    fn take_min(link: &mut Link<T>) -> Option<T> {
        let mut cursor = link;
        loop {
            let descend = match cursor.as_deref() {
                Some(node) => node.left.is_some(),
                None => return None,
            };
            if !descend {
                break;
            }
            if let Some(node) = cursor {
                cursor = &mut node.left;
            }
        }
        let node = cursor.take()?;
        let Node { value, right, .. } = *node;
        *cursor = right;
        Some(value)
    }

    /// Verifies the ordering property and the cached length.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut count = 0usize;
        let mut previous: Option<&T> = None;
        for value in self.iter() {
            if let Some(prev) = previous
                && prev >= value
            {
                return Err(InvariantError::new(format!(
                    "in-order traversal not strictly increasing at position {count}"
                )));
            }
            previous = Some(value);
            count += 1;
        }
        if count != self.len {
            return Err(InvariantError::new(format!(
                "len is {} but tree holds {count} nodes",
                self.len
            )));
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

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Container for BinarySearchTree<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        BinarySearchTree::clear(self);
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the tree sideways, one node per line:
///
/// ```text
/// Binary Tree:
/// └── 5
///     ├── 3
///     └── 7
/// ```
///
/// A left child always gets `├──`, even when it has no right sibling.
impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root.as_deref() else {
            return f.write_str("Empty tree");
        };
        f.write_str("Binary Tree:\n")?;

        let mut stack: Vec<(&Node<T>, String, bool)> = vec![(root, String::new(), true)];
        while let Some((node, prefix, is_last)) = stack.pop() {
            let branch = if is_last { "└── " } else { "├── " };
            writeln!(f, "{prefix}{branch}{}", node.value)?;

            let extension = if is_last { "    " } else { "│   " };
            let child_prefix = format!("{prefix}{extension}");
            if let Some(right) = node.right.as_deref() {
                stack.push((right, child_prefix.clone(), true));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, child_prefix, false));
            }
        }
        Ok(())
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// In-order iterator over a [`BinarySearchTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinarySearchTree<i32> {
        [5, 3, 7, 1, 9].into_iter().collect()
    }

    #[test]
    fn traversals_on_sample() {
        let tree = sample();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.inorder(), vec![1, 3, 5, 7, 9]);
        assert_eq!(tree.preorder(), vec![5, 3, 1, 7, 9]);
        assert_eq!(tree.postorder(), vec![1, 3, 9, 7, 5]);
        assert_eq!(tree.height(), Some(2));
        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&9));
        tree.debug_validate_invariants();
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut tree = sample();
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 5);
        assert!(tree.insert(4));
        assert_eq!(tree.inorder(), vec![1, 3, 4, 5, 7, 9]);
    }

    #[test]
    fn contains_reports_membership() {
        let tree = sample();
        assert!(tree.contains(&7));
        assert!(tree.contains(&1));
        assert!(!tree.contains(&6));
        assert!(!BinarySearchTree::<i32>::new().contains(&0));
    }

    #[test]
    fn delete_leaf_single_child_and_two_children() {
        let mut tree: BinarySearchTree<i32> =
            [50, 30, 70, 20, 40, 60, 80, 65].into_iter().collect();

        assert!(tree.delete(&20));
        assert_eq!(tree.inorder(), vec![30, 40, 50, 60, 65, 70, 80]);

        assert!(tree.delete(&60));
        assert_eq!(tree.inorder(), vec![30, 40, 50, 65, 70, 80]);

        assert!(tree.delete(&50));
        assert_eq!(tree.preorder()[0], 65);
        assert_eq!(tree.inorder(), vec![30, 40, 65, 70, 80]);

        assert!(!tree.delete(&50));
        assert_eq!(tree.len(), 5);
        tree.debug_validate_invariants();
    }

    #[test]
    fn delete_down_to_empty() {
        let mut tree = sample();
        for v in [5, 1, 9, 3, 7] {
            assert!(tree.delete(&v));
            tree.debug_validate_invariants();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), None);
        assert_eq!(tree.min(), None);
    }

    #[test]
    fn empty_tree_display() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(tree.to_string(), "Empty tree");
        assert_eq!(tree.height(), None);
        assert!(tree.inorder().is_empty());
    }

    #[test]
    fn single_node_display_and_height() {
        let tree: BinarySearchTree<i32> = std::iter::once(42).collect();
        assert_eq!(tree.height(), Some(0));
        assert_eq!(tree.to_string(), "Binary Tree:\n└── 42\n");
    }

    #[test]
    fn display_uses_branch_prefixes() {
        let tree: BinarySearchTree<i32> = [5, 3, 8, 2, 4, 9].into_iter().collect();
        let expected = "Binary Tree:\n\
                        └── 5\n    \
                        ├── 3\n    \
                        │   ├── 2\n    \
                        │   └── 4\n    \
                        └── 8\n        \
                        └── 9\n";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn degenerate_tree_is_handled_without_recursion() {
        let mut tree = BinarySearchTree::new();
        for v in 0..5_000u32 {
            tree.insert(v);
        }
        assert_eq!(tree.height(), Some(4_999));
        assert_eq!(tree.iter().len(), 5_000);
        assert_eq!(tree.postorder().first(), Some(&4_999));
        drop(tree);
    }

    #[test]
    fn delete_finds_successor_at_bottom_of_long_left_spine() {
        // root 1 with left child 0; the right subtree is a left spine
        // 10_000 -> 9_999 -> ... -> 2, so the successor of 1 is 2.
        let mut tree = BinarySearchTree::new();
        tree.insert(1u32);
        tree.insert(0);
        for v in (2..=10_000u32).rev() {
            tree.insert(v);
        }
        assert_eq!(tree.height(), Some(9_999));

        assert!(tree.delete(&1));
        assert_eq!(tree.len(), 10_000);
        assert_eq!(tree.preorder().first(), Some(&2));
        assert!(!tree.contains(&1));
        assert_eq!(tree.min(), Some(&0));
        assert_eq!(tree.max(), Some(&10_000));
        tree.debug_validate_invariants();
    }
}
