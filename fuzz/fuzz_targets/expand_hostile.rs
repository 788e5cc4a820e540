#![no_main]
use bytepair::expand;
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

// Arbitrary bytes fed straight to the expander: no panics, no unbounded
// work, whatever comes out must either be a clean stream or a CodecError.
fuzz_target!(|data: &[u8]| {
    let mut out = Vec::new();
    let _ = expand(Cursor::new(data), &mut out);
});
