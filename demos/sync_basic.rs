//! Basic synchronous chunking example with the streaming API.
//!
//! Run with:
//!     cargo run --example sync_basic

use rabincdc::{Chunker, ChunkerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Deterministic sample data
    let data: Vec<u8> = (0..1024 * 1024u32)
        .map(|i| (i.wrapping_mul(2654435761) >> 16) as u8)
        .collect();

    let mut chunker = Chunker::new(ChunkerConfig::default())?;

    println!("Chunking {} bytes of data...\n", data.len());

    // Simulate streaming data in batches
    let batch_size = 8 * 1024; // 8 KB batches
    for batch in data.chunks(batch_size) {
        chunker.push(batch);
    }

    // Finalize the stream
    let chunks = chunker.finish();

    for (i, chunk) in chunks.iter().enumerate() {
        println!(
            "Chunk {}: offset={}, len={}, fingerprint={:016x}",
            i + 1,
            chunk.start_offset,
            chunk.length,
            chunk.fingerprint
        );
    }

    println!("\nTotal: {} chunks, {} bytes", chunks.len(), chunks.total_bytes());
    if !chunks.is_empty() {
        println!(
            "Average chunk size: {} bytes",
            chunks.total_bytes() / chunks.len() as u64
        );
    }

    Ok(())
}
