#![no_main]

use dsakit::ds::CircularQueue;
use libfuzzer_sys::fuzz_target;
use std::collections::VecDeque;

// Fuzz enqueue/dequeue/clear sequences on CircularQueue against a bounded
// VecDeque.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = usize::from(data[0] % 16);
    let mut queue = CircularQueue::new(capacity);
    let mut model = VecDeque::new();

    for &byte in &data[1..] {
        match byte % 8 {
            0..=3 => {
                let accepted = queue.enqueue(byte).is_ok();
                assert_eq!(accepted, model.len() < capacity);
                if accepted {
                    model.push_back(byte);
                }
            },
            4..=5 => {
                assert_eq!(queue.dequeue().ok(), model.pop_front());
            },
            6 => {
                assert_eq!(queue.front().ok(), model.front());
                assert_eq!(queue.rear().ok(), model.back());
            },
            _ => {
                queue.clear();
                model.clear();
            },
        }

        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.is_full(), model.len() == capacity);
        assert!(queue.check_invariants().is_ok());
    }

    assert!(queue.iter().eq(model.iter()));
});
