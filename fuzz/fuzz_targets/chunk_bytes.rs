#![no_main]

use libfuzzer_sys::fuzz_target;
use rabincdc::{Chunker, ChunkerConfig};

fuzz_target!(|data: Vec<u8>| {
    // Test with various chunk configurations
    let configs = vec![
        // Small chunks
        ChunkerConfig::new(17, 64, 256, 1024).unwrap(),
        // Medium chunks
        ChunkerConfig::new(32, 256, 1024, 4096).unwrap(),
        // Wide window
        ChunkerConfig::new(63, 1024, 4096, 16384).unwrap(),
        // Default config
        ChunkerConfig::default(),
    ];

    for config in configs {
        let chunker = Chunker::new(config).unwrap();
        let chunks = chunker.chunk_bytes(data.clone());

        // Verify: chunks tile the input with no gaps or overlaps
        let mut expected_offset = 0u64;
        for chunk in &chunks {
            assert_eq!(chunk.start_offset, expected_offset);
            assert!(chunk.length > 0);
            expected_offset = chunk.end_offset();
        }
        assert_eq!(expected_offset, data.len() as u64);

        // Verify: size bounds (min applies to all but the last chunk)
        for (i, chunk) in chunks.iter().enumerate() {
            assert!(chunk.length as usize <= config.max_block_size());
            if i < chunks.len() - 1 {
                assert!(chunk.length as usize >= config.min_block_size());
            }
        }

        // Verify: determinism - same input produces same chunks
        let chunker2 = Chunker::new(config).unwrap();
        let chunks2 = chunker2.chunk_bytes(data.clone());
        assert_eq!(chunks, chunks2);
    }
});
