#![no_main]
use bytepair::{compress, expand};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let mut compressed = Vec::new();
    compress(Cursor::new(data), &mut compressed).expect("compress is infallible on well-formed input");

    let mut restored = Vec::new();
    expand(Cursor::new(compressed), &mut restored).expect("round-tripping our own output must not fail");

    assert_eq!(restored, data);
});
