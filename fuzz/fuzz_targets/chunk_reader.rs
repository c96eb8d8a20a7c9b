#![no_main]

use libfuzzer_sys::fuzz_target;
use rabincdc::{Chunker, ChunkerConfig};

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (data, split) = input;
    // Delivery granularity derived from fuzz input, at least 1 byte
    let piece_size = usize::from(split.max(1));

    let config = ChunkerConfig::new(32, 256, 1024, 4096).unwrap();

    // One-shot scan
    let one_shot = Chunker::new(config).unwrap().chunk_bytes(data.clone());

    // Streamed scan in arbitrary pieces must match exactly
    let mut streamed = Chunker::new(config).unwrap();
    for piece in data.chunks(piece_size) {
        streamed.push(piece);
    }
    let streamed = streamed.finish();

    assert_eq!(one_shot, streamed);

    // Reader-driven scan must match as well
    let from_reader = Chunker::new(config)
        .unwrap()
        .chunk(std::io::Cursor::new(data))
        .into_chunks()
        .unwrap();
    assert_eq!(one_shot, from_reader);
});
