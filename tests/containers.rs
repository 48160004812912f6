// ==============================================
// CROSS-CONTAINER TRAIT TESTS (integration)
// ==============================================
//
// Behavior shared through the Container / Lifo / Fifo traits, checked once
// for every implementation.

use dsakit::ds::{
    ArrayQueue, ArrayStack, BinarySearchTree, ChainedHashMap, CircularQueue, DynamicArray,
    LinkedList, LinkedStack,
};
use dsakit::error::DsError;
use dsakit::traits::{Container, Fifo, Lifo};

// ==============================================
// Lifo
// ==============================================

fn drain_lifo<S: Lifo<u32>>(stack: &mut S) -> Vec<u32> {
    std::iter::from_fn(|| stack.pop().ok()).collect()
}

fn check_lifo<S: Lifo<u32>>(mut stack: S) {
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(DsError::Empty { container: "stack" }));

    for v in 1..=4 {
        stack.push(v);
    }
    assert_eq!(stack.len(), 4);
    assert_eq!(stack.peek(), Ok(&4));
    assert_eq!(drain_lifo(&mut stack), vec![4, 3, 2, 1]);

    stack.push(9);
    stack.clear();
    assert!(stack.peek().is_err());
}

#[test]
fn array_stack_is_lifo() {
    check_lifo(ArrayStack::new());
}

#[test]
fn linked_stack_is_lifo() {
    check_lifo(LinkedStack::new());
}

// ==============================================
// Fifo
// ==============================================

fn check_fifo<Q: Fifo<u32>>(mut queue: Q) {
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), Err(DsError::Empty { container: "queue" }));

    for v in 1..=3 {
        queue.enqueue(v).unwrap();
    }
    assert_eq!(queue.front(), Ok(&1));
    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(4).unwrap();

    let drained: Vec<u32> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert_eq!(drained, vec![2, 3, 4]);
}

#[test]
fn array_queue_is_fifo() {
    check_fifo(ArrayQueue::new());
}

#[test]
fn circular_queue_is_fifo() {
    check_fifo(CircularQueue::new(3));
}

#[test]
fn circular_queue_reports_full_through_trait() {
    let mut queue = CircularQueue::new(1);
    Fifo::enqueue(&mut queue, 'a').unwrap();
    assert_eq!(Fifo::enqueue(&mut queue, 'b'), Err(DsError::Full { capacity: 1 }));
}

// ==============================================
// Container
// ==============================================

fn len_then_clear<C: Container>(container: &mut C) -> usize {
    let len = container.len();
    container.clear();
    assert!(container.is_empty());
    assert_eq!(container.len(), 0);
    len
}

#[test]
fn every_container_clears() {
    let mut array: DynamicArray<i32> = (0..7).collect();
    let mut list: LinkedList<i32> = (0..6).collect();
    let mut tree: BinarySearchTree<i32> = [3, 1, 4, 1, 5].into_iter().collect();
    let mut map: ChainedHashMap<i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let mut stack: ArrayStack<i32> = (0..3).collect();
    let mut queue: ArrayQueue<i32> = (0..2).collect();

    assert_eq!(len_then_clear(&mut array), 7);
    assert_eq!(len_then_clear(&mut list), 6);
    assert_eq!(len_then_clear(&mut tree), 4);
    assert_eq!(len_then_clear(&mut map), 2);
    assert_eq!(len_then_clear(&mut stack), 3);
    assert_eq!(len_then_clear(&mut queue), 2);
}

// ==============================================
// Linked list and tree scenarios
// ==============================================

#[test]
fn merge_two_sorted_lists() {
    let left: LinkedList<i32> = [1, 2, 4].into_iter().collect();
    let right: LinkedList<i32> = [1, 3, 4].into_iter().collect();
    let merged = LinkedList::merge_sorted(left, right);
    assert_eq!(merged.to_string(), "[1 -> 1 -> 2 -> 3 -> 4 -> 4]");
}

#[test]
fn tree_sort_via_inorder() {
    let values = [38, 27, 43, 3, 9, 82, 10];
    let tree: BinarySearchTree<i32> = values.into_iter().collect();
    let mut expected = values.to_vec();
    expected.sort();
    assert_eq!(tree.inorder(), expected);
}
