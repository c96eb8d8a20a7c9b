//! rabincdc
//!
//! Streaming Content-Defined Chunking (CDC) for Rust, using a Rabin rolling
//! polynomial fingerprint.
//!
//! `rabincdc` scans a byte stream and partitions it into variable-length
//! chunks whose boundaries are decided by the content inside a small sliding
//! window, not by fixed offsets. Boundaries therefore stay put when bytes are
//! inserted or deleted elsewhere in the stream, which makes the output a
//! useful primitive for:
//!
//! - delta synchronization
//! - deduplication
//! - backup systems
//! - content-addressable storage
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT manage concurrency
//! - does NOT persist or deduplicate chunk data
//! - does NOT compute storage keys (strong hashes)
//!
//! It only does one thing: **Read bytes → yield chunk descriptors**
//!
//! Each [`ChunkDescriptor`] records a chunk's start offset, length, and the
//! rolling fingerprint at the cut. Descriptors tile the input exactly: no
//! gaps, no overlaps, and the same input always produces the same cuts,
//! however the bytes were delivered.
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use rabincdc::{Chunker, ChunkerConfig, ChunkError};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let file = File::open("data.bin")?;
//!     let chunker = Chunker::new(ChunkerConfig::default())?;
//!
//!     for chunk in chunker.chunk(file) {
//!         let chunk = chunk?;
//!         println!("chunk @{} len {}", chunk.start_offset, chunk.length);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use rabincdc::{chunk_async, ChunkerConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), rabincdc::ChunkError> {
//!     let mut stream = chunk_async(reader, ChunkerConfig::default())?;
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("chunk @{}", chunk.start_offset);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boundary;
mod chunk;
mod chunker;
mod config;
mod error;

mod rabin; // internal rabin fingerprint impl

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use boundary::BoundaryPolicy;
pub use chunk::{ChunkDescriptor, ChunkList};
pub use chunker::{ChunkIter, Chunker};
pub use config::{ChunkerConfig, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE};
pub use error::ChunkError;
pub use rabin::{PolyTable, RollingHash};

#[cfg(feature = "async-io")]
pub use async_stream::{ChunkStream, chunk_async};
