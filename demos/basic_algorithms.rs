//! Example demonstrating the sorting and searching routines.
//!
//! Run with: cargo run --example basic_algorithms

use dsakit::algorithms::{searching, sorting};
use dsakit::io::{format_slice, random_sorted_vec, random_vec, time_it};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn main() {
    let mut rng = SmallRng::seed_from_u64(2024);

    println!("=== Sorting ===\n");
    let values = random_vec(12, 1, 99, &mut rng).expect("valid range");
    println!("{}", format_slice("Original", &values));
    println!("{}", format_slice("Bubble", &sorting::bubble_sort(&values)));
    println!("{}", format_slice("Merge", &sorting::merge_sort(&values)));
    println!("{}", format_slice("Quick", &sorting::quick_sort(&values)));
    println!("{}", format_slice("Heap", &sorting::heap_sort(&values)));
    match sorting::counting_sort(&[3, -1, 2]) {
        Ok(sorted) => println!("{}", format_slice("Counting", &sorted)),
        Err(err) => println!("Counting sort on [3, -1, 2]: {err}"),
    }

    let large = random_vec(20_000, 0, 1_000_000, &mut rng).expect("valid range");
    let insertion = time_it("insertion_sort 20k", || {
        sorting::insertion_sort(&large);
    });
    let merge = time_it("merge_sort 20k", || {
        sorting::merge_sort(&large);
    });
    println!("insertion {insertion:?} vs merge {merge:?}");

    println!("\n=== Searching ===\n");
    let sorted = random_sorted_vec(20, 1, 100, false, &mut rng).expect("range holds 20 values");
    println!("{}", format_slice("Sorted", &sorted));
    let target = sorted[sorted.len() / 2];
    println!("Target {target}:");
    println!("  binary        {:?}", searching::binary_search(&sorted, &target));
    println!("  interpolation {:?}", searching::interpolation_search(&sorted, target));
    println!("  jump          {:?}", searching::jump_search(&sorted, &target));
    println!("  ternary       {:?}", searching::ternary_search(&sorted, &target));

    let dupes = [1, 2, 2, 2, 3];
    println!(
        "First/last 2 in {dupes:?}: {:?}/{:?}",
        searching::find_first(&dupes, &2),
        searching::find_last(&dupes, &2)
    );
}
