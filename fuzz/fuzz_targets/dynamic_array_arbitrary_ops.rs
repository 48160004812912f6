#![no_main]

use dsakit::ds::DynamicArray;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary append/insert/delete/set sequences on DynamicArray
//
// Mirrors every operation on a Vec and checks contents, bounds errors and
// the capacity invariants after each step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let initial_capacity = usize::from(data[0] % 40);
    let mut array = DynamicArray::new(initial_capacity);
    let mut model: Vec<u8> = Vec::new();

    for pair in data[1..].chunks_exact(2) {
        let op = pair[0] % 6;
        let arg = pair[1];
        let index = usize::from(arg) % (model.len() + 2);

        match op {
            0 | 1 => {
                array.append(arg);
                model.push(arg);
            },
            2 => {
                let result = array.insert(index, arg);
                if index <= model.len() {
                    assert!(result.is_ok());
                    model.insert(index, arg);
                } else {
                    assert!(result.is_err());
                }
            },
            3 => {
                let result = array.delete(index);
                if index < model.len() {
                    assert_eq!(result.ok(), Some(model.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            },
            4 => {
                let result = array.set(index, arg);
                if index < model.len() {
                    let old = std::mem::replace(&mut model[index], arg);
                    assert_eq!(result.ok(), Some(old));
                } else {
                    assert!(result.is_err());
                }
            },
            5 => {
                assert_eq!(array.get(index).ok(), model.get(index));
            },
            _ => unreachable!(),
        }

        assert_eq!(array.len(), model.len());
        assert!(array.capacity() >= array.len());
        assert!(array.check_invariants().is_ok());
    }

    assert_eq!(array.as_slice(), model.as_slice());
});
