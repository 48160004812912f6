#![no_main]

use dsakit::io::parse_ints;
use libfuzzer_sys::fuzz_target;

// Any UTF-8 line either parses completely or fails; a successful parse
// round-trips through its space-separated rendering.
fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(values) = parse_ints(line) {
        assert_eq!(values.len(), line.split_whitespace().count());
        let rendered = values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(parse_ints(&rendered).ok(), Some(values));
    }
});
