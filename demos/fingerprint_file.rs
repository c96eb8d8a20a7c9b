//! File fingerprinting example: chunk a file and write the chunk list.
//!
//! Run with:
//!     cargo run --example fingerprint_file -- /path/to/file [out.bin]
//!
//! With an output path the chunk list is written as fixed-size binary
//! records; without one it is printed as text, one chunk per line.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use rabincdc::{Chunker, ChunkerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());
    let out_path = env::args().nth(2);

    eprintln!("Chunking file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    eprintln!("File size: {} bytes\n", metadata.len());

    // Custom config for larger chunks
    let config = ChunkerConfig::new(
        48,         // window: 48 bytes
        8 * 1024,   // min: 8 KiB
        32 * 1024,  // avg: 32 KiB
        128 * 1024, // max: 128 KiB
    )?;

    let chunks = Chunker::new(config)?.chunk(file).into_chunks()?;

    match out_path {
        Some(out_path) => {
            let mut out = BufWriter::new(File::create(&out_path)?);
            chunks.write_binary(&mut out)?;
            out.flush()?;
            eprintln!("Wrote {} binary records to {}", chunks.len(), out_path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            chunks.write_text(&mut stdout)?;
        }
    }

    eprintln!("\nTotal: {} chunks, {} bytes", chunks.len(), chunks.total_bytes());
    if !chunks.is_empty() {
        eprintln!(
            "Average chunk size: {} bytes",
            chunks.total_bytes() / chunks.len() as u64
        );
    }

    Ok(())
}
