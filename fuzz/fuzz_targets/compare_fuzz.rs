#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use resdiff::compare::{BoolLens, compare_streams};
use resdiff::format::{BinaryDecoder, PackedIntDecoder, Profile};

fuzz_target!(|data: &[u8]| {
    // Run the full comparator over two arbitrary halves; any outcome but a
    // panic is acceptable.
    if data.len() < 2 {
        return;
    }
    let (a, b) = data.split_at(data.len() / 2);

    if let (Ok(mut left), Ok(mut right)) = (
        BinaryDecoder::new(Cursor::new(a), "fuzz-a", Profile::Index),
        PackedIntDecoder::new(Cursor::new(b), "fuzz-b", Profile::Index),
    ) {
        let _ = compare_streams(&mut left, &mut right);
    }

    if let (Ok(left), Ok(right)) = (
        BinaryDecoder::new(Cursor::new(a), "fuzz-a", Profile::Index),
        BinaryDecoder::new(Cursor::new(b), "fuzz-b", Profile::Index),
    ) {
        let mut left = BoolLens::new(left);
        let mut right = BoolLens::new(right);
        let _ = compare_streams(&mut left, &mut right);
    }
});
