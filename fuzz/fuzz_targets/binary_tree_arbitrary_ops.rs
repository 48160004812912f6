#![no_main]

use dsakit::ds::BinarySearchTree;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;

// Fuzz insert/delete/contains on BinarySearchTree against a BTreeSet.
fuzz_target!(|data: &[u8]| {
    let mut tree = BinarySearchTree::new();
    let mut model = BTreeSet::new();

    for pair in data.chunks_exact(2) {
        let value = pair[1] % 64;
        match pair[0] % 3 {
            0 => assert_eq!(tree.insert(value), model.insert(value)),
            1 => assert_eq!(tree.delete(&value), model.remove(&value)),
            _ => assert_eq!(tree.contains(&value), model.contains(&value)),
        }
        assert!(tree.check_invariants().is_ok());
    }

    assert_eq!(tree.len(), model.len());
    assert_eq!(tree.min(), model.first());
    assert_eq!(tree.max(), model.last());
    assert!(tree.iter().eq(model.iter()));
    if let Some(height) = tree.height() {
        assert!(height < tree.len());
    }
});
