//! Example demonstrating DynamicArray growth and shrinking.
//!
//! The array doubles when an append finds it full and halves once fewer
//! than a quarter of its slots are in use (only above 16 slots, never below
//! 8).
//!
//! Run with: cargo run --example basic_array

use dsakit::builder::{ArrayBuilder, GrowthPolicy};
use dsakit::ds::DynamicArray;

fn main() {
    println!("=== DynamicArray Example ===\n");

    let mut array = DynamicArray::new(5);
    for i in 1..=5 {
        array.append(i * 10);
    }
    println!("After adding elements: {array}");

    array.append(60);
    println!("One more append doubles: {array}");

    array.insert(2, 25).expect("index 2 is within bounds");
    println!("After inserting 25 at index 2: {array}");

    match array.get(10) {
        Ok(v) => println!("Element at index 10: {v}"),
        Err(err) => println!("get(10) failed: {err}"),
    }

    println!("\n=== Shrinking ===\n");

    let mut big = DynamicArray::new(10);
    for i in 0..40 {
        big.append(i);
    }
    println!("40 elements: size={}, capacity={}", big.len(), big.capacity());
    while big.len() > 2 {
        let before = big.capacity();
        big.delete(0).expect("array is non-empty");
        if big.capacity() != before {
            println!(
                "  size {} -> capacity {} (was {})",
                big.len(),
                big.capacity(),
                before
            );
        }
    }

    println!("\n=== Custom Growth Policy ===\n");

    let policy = GrowthPolicy::try_new(4, 3, 9, 27, 4).expect("valid policy");
    let mut tripled = ArrayBuilder::new(4).growth_policy(policy).build();
    for i in 0..13 {
        tripled.append(i);
    }
    println!("Growth factor 3 after 13 appends: {tripled}");
}
