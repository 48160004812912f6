//! Example demonstrating ChainedHashMap collisions and chain order.
//!
//! Keys hash with `h = (h * 31 + c) mod buckets` per character, so with 16
//! buckets "a" (97) and "q" (113) both land in bucket 1.
//!
//! Run with: cargo run --example basic_hash_map

use dsakit::builder::HashMapBuilder;
use dsakit::ds::{ChainedHashMap, polynomial_hash};

fn main() {
    println!("=== ChainedHashMap Example ===\n");

    let mut map = ChainedHashMap::new(16);
    for (key, value) in [("a", 1), ("q", 2), ("b", 3)] {
        map.put(key, value);
        println!(
            "put({key:?}, {value}) -> bucket {}",
            polynomial_hash(key, map.bucket_count())
        );
    }
    println!("\n{map}\n");

    println!("Chain order in bucket 1: {:?}", map.keys().collect::<Vec<_>>());

    let old = map.put("a", 10);
    println!("Overwrite a: previous value {old:?}, count still {}", map.count());

    println!("delete(\"q\") -> {}", map.delete("q"));
    println!("delete(\"zz\") -> {}", map.delete("zz"));
    println!("{map}");

    println!("\n=== Load Factor ===\n");

    let mut small = HashMapBuilder::new(4).build();
    for i in 0..12 {
        small.put(format!("key{i}"), i);
    }
    println!(
        "12 keys in {} buckets: load factor {:.2}, longest chain {}",
        small.bucket_count(),
        small.load_factor(),
        small.longest_chain()
    );
}
