#![no_main]

use dsakit::ds::ChainedHashMap;
use libfuzzer_sys::fuzz_target;
use std::collections::HashMap;

// Fuzz arbitrary put/get/delete sequences on ChainedHashMap
//
// Keys come from a small alphabet so chains collide often; every step is
// checked against std's HashMap.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let bucket_count = usize::from(data[0] % 8) + 1;
    let mut map = ChainedHashMap::new(bucket_count);
    let mut model: HashMap<String, u8> = HashMap::new();

    for chunk in data[1..].chunks_exact(3) {
        let op = chunk[0] % 4;
        let key_len = usize::from(chunk[1] % 3) + 1;
        let key: String = std::iter::repeat_n(char::from(b'a' + chunk[1] % 5), key_len).collect();
        let value = chunk[2];

        match op {
            0 => {
                assert_eq!(map.put(key.clone(), value), model.insert(key, value));
            },
            1 => {
                assert_eq!(map.get(&key), model.get(&key));
            },
            2 => {
                assert_eq!(map.delete(&key), model.remove(&key).is_some());
            },
            3 => {
                assert_eq!(map.contains(&key), model.contains_key(&key));
            },
            _ => unreachable!(),
        }

        assert_eq!(map.count(), model.len());
        assert!(map.check_invariants().is_ok());
    }

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.bucket_count(), bucket_count);
});
