//! Example demonstrating the linked list, stacks, queues and the binary
//! search tree.
//!
//! Run with: cargo run --example basic_containers

use dsakit::ds::{ArrayQueue, ArrayStack, BinarySearchTree, CircularQueue, LinkedList};

fn main() {
    println!("=== LinkedList ===\n");
    let mut list: LinkedList<i32> = (1..=5).map(|i| i * 5).collect();
    println!("After adding elements: {list}");
    list.prepend(0);
    println!("After prepending 0: {list}");
    println!("Index of element 15: {:?}", list.find(&15));
    list.reverse();
    println!("After reversing: {list}");

    println!("\n=== ArrayStack ===\n");
    let mut stack = ArrayStack::new();
    for i in 1..=3 {
        stack.push(i);
        println!("Pushed {i}: {stack}");
    }
    while let Ok(v) = stack.pop() {
        println!("Popped {v}: {stack}");
    }

    println!("\n=== ArrayQueue ===\n");
    let mut queue = ArrayQueue::new();
    for i in 1..=3 {
        queue.enqueue(i * 2);
        println!("Enqueued {}: {queue}", i * 2);
    }
    while let Ok(v) = queue.dequeue() {
        println!("Dequeued {v}: {queue}");
    }

    println!("\n=== CircularQueue ===\n");
    let mut ring = CircularQueue::new(2);
    for i in 1..=3 {
        match ring.enqueue(i) {
            Ok(()) => println!("Enqueued {i}: {ring}"),
            Err(err) => println!("Enqueue {i} rejected: {err}"),
        }
    }

    println!("\n=== BinarySearchTree ===\n");
    let mut tree: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    print!("{tree}");
    println!("Inorder: {:?}", tree.inorder());
    println!("Height: {:?}", tree.height());
    tree.delete(&30);
    println!("After deleting 30:");
    print!("{tree}");
}
