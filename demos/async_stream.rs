//! Async chunking example with the runtime-agnostic stream adapter.
//!
//! Run with:
//!     cargo run --example async_stream --features async-io -- /path/to/file

use std::env;

use futures_util::StreamExt;
use rabincdc::{ChunkerConfig, chunk_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Chunking file: {}\n", path);

    let file = tokio::fs::File::open(&path).await?;
    let mut stream = chunk_async(file.compat(), ChunkerConfig::default())?;

    let mut total_chunks = 0u64;
    let mut total_bytes = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        total_chunks += 1;
        total_bytes += u64::from(chunk.length);
        println!("{}", chunk);
    }

    println!("\nTotal: {} chunks, {} bytes", total_chunks, total_bytes);

    Ok(())
}
