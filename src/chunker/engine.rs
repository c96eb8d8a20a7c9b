//! Core chunking engine - Chunker with streaming API.
//!
//! This module implements the orchestrator that drives the Rabin rolling
//! hash over an input and materializes the chunk list:
//!
//! - [`Chunker`] - stateful engine that processes streaming bytes
//! - `push()` - feed data in any size (1 byte, 8KB, 1MB, etc.)
//! - `finish()` - flush the trailing chunk when the stream ends
//!
//! # Example
//!
//! ```
//! use rabincdc::{Chunker, ChunkerConfig};
//!
//! let mut chunker = Chunker::new(ChunkerConfig::default())?;
//!
//! // Feed data in any size
//! chunker.push(b"first");
//! chunker.push(b"second");
//!
//! // When the stream ends, flush and take the frozen list
//! let chunks = chunker.finish();
//! assert_eq!(chunks.total_bytes(), 11);
//! # Ok::<(), rabincdc::ChunkError>(())
//! ```

use std::io::Read;
use std::sync::Arc;

use bytes::Bytes;

use crate::boundary::BoundaryPolicy;
use crate::chunk::{ChunkDescriptor, ChunkList};
use crate::chunker::ChunkIter;
use crate::config::ChunkerConfig;
use crate::error::ChunkError;
use crate::rabin::{PolyTable, RollingHash};

/// A chunker that scans streaming bytes into content-defined chunks.
///
/// `Chunker` feeds every input byte through a [`RollingHash`] and asks a
/// [`BoundaryPolicy`] whether a cut falls there, appending a
/// [`ChunkDescriptor`] to its [`ChunkList`] on every boundary. The scan
/// passes through three phases:
///
/// 1. **Filling** - the window has seen fewer than `window_size` bytes;
///    the fingerprint does not yet cover a full window and no boundary
///    decisions are made. An input shorter than the window never leaves
///    this phase and becomes a single chunk at [`Chunker::finish`].
/// 2. **Scanning** - the window is full; every byte is a boundary
///    candidate. On a cut the run length resets but the window keeps
///    rolling, so later boundaries depend only on content.
/// 3. **Done** - [`Chunker::finish`] flushes whatever run is open (even
///    one shorter than `min_block_size`; there is no more data to extend
///    it) and freezes the list.
///
/// # Determinism
///
/// Identical byte streams produce identical descriptors regardless of how
/// the bytes are split across `push()` calls: the scan is byte-at-a-time,
/// so delivery granularity cannot influence boundaries.
///
/// # Minimum size and the window
///
/// While the window is filling no cut can happen, so the first chunk is
/// always at least `window_size` bytes even if `min_block_size` is
/// smaller. Later chunks honor `min_block_size` exactly, because the
/// window persists across cuts.
///
/// # Example
///
/// ```
/// use rabincdc::{Chunker, ChunkerConfig};
///
/// let mut chunker = Chunker::new(ChunkerConfig::default())?;
///
/// for batch in [&b"first part"[..], b" second part", b" final part"] {
///     chunker.push(batch);
/// }
///
/// let chunks = chunker.finish();
/// assert_eq!(chunks.total_bytes(), 33);
/// # Ok::<(), rabincdc::ChunkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Chunker {
    hasher: RollingHash,
    policy: BoundaryPolicy,
    config: ChunkerConfig,
    list: ChunkList,

    /// Bytes accumulated in the chunk currently being scanned.
    run_length: usize,

    /// Offset where the current chunk began.
    chunk_start: u64,

    /// Total bytes consumed from the stream.
    consumed: u64,

    /// Fingerprint after the most recent byte, recorded into the final
    /// descriptor when the stream ends mid-chunk.
    fingerprint: u64,
}

impl Chunker {
    /// Creates a new chunker, validating the configuration.
    ///
    /// Validation happens here, once, before any byte is processed; the
    /// scan itself cannot fail.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if any constraint on
    /// [`ChunkerConfig`] is violated.
    pub fn new(config: ChunkerConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self::from_parts(
            config,
            RollingHash::new(config.window_size()),
        ))
    }

    /// Creates a chunker that shares an already built [`PolyTable`].
    ///
    /// Useful when chunking many independent inputs with the same window
    /// size: the table is immutable and safe to share.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if the configuration is
    /// invalid or the table was built for a different window size.
    pub fn with_table(config: ChunkerConfig, table: Arc<PolyTable>) -> Result<Self, ChunkError> {
        config.validate()?;
        if table.window_size() != config.window_size() {
            return Err(ChunkError::InvalidConfig {
                message: "polynomial table window size does not match config",
            });
        }
        Ok(Self::from_parts(config, RollingHash::with_table(table)))
    }

    fn from_parts(config: ChunkerConfig, hasher: RollingHash) -> Self {
        Self {
            hasher,
            policy: BoundaryPolicy::new(&config),
            config,
            list: ChunkList::new(),
            run_length: 0,
            chunk_start: 0,
            consumed: 0,
            fingerprint: 0,
        }
    }

    /// Feeds bytes into the chunker.
    ///
    /// Boundaries found while scanning `data` are appended to the internal
    /// list, visible through [`Chunker::chunks`]. Any buffer size works and
    /// the resulting boundaries are identical to feeding the same bytes in
    /// one call.
    pub fn push(&mut self, data: &[u8]) {
        for &byte in data {
            let fingerprint = self.hasher.push(byte);
            self.fingerprint = fingerprint;
            self.run_length += 1;
            self.consumed += 1;

            if self.hasher.primed() && self.policy.is_boundary(fingerprint, self.run_length) {
                self.cut();
            }
        }
    }

    /// Closes the current run as a chunk and starts the next one.
    fn cut(&mut self) {
        self.list.push(ChunkDescriptor::new(
            self.chunk_start,
            self.run_length as u32,
            self.fingerprint,
        ));
        self.chunk_start = self.consumed;
        self.run_length = 0;
    }

    /// Ends the stream: flushes the trailing partial chunk (if any) and
    /// returns the frozen [`ChunkList`].
    ///
    /// The trailing chunk is emitted even when shorter than
    /// `min_block_size`; end-of-input always closes the final chunk. An
    /// empty input yields an empty list.
    pub fn finish(mut self) -> ChunkList {
        if self.run_length > 0 {
            self.cut();
        }
        self.list
    }

    /// One-shot convenience: scans an in-memory buffer and returns the
    /// complete list.
    ///
    /// # Example
    ///
    /// ```
    /// use rabincdc::{Chunker, ChunkerConfig};
    ///
    /// let chunker = Chunker::new(ChunkerConfig::default())?;
    /// let chunks = chunker.chunk_bytes(&b"hello world"[..]);
    /// assert_eq!(chunks.total_bytes(), 11);
    /// # Ok::<(), rabincdc::ChunkError>(())
    /// ```
    pub fn chunk_bytes(mut self, data: impl Into<Bytes>) -> ChunkList {
        let data = data.into();
        self.push(&data);
        self.finish()
    }

    /// Creates a chunking iterator that drives a reader.
    ///
    /// The returned [`ChunkIter`] reads incrementally and yields
    /// descriptors as boundaries are found.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use rabincdc::{Chunker, ChunkerConfig};
    ///
    /// let chunker = Chunker::new(ChunkerConfig::default())?;
    /// let chunks: Vec<_> = chunker
    ///     .chunk(Cursor::new(b"some data to chunk"))
    ///     .collect::<Result<_, _>>()?;
    /// assert!(!chunks.is_empty());
    /// # Ok::<(), rabincdc::ChunkError>(())
    /// ```
    pub fn chunk<R: Read>(self, reader: R) -> ChunkIter<R> {
        ChunkIter::new(reader, self)
    }

    /// The chunks found so far.
    ///
    /// Valid mid-stream, but not final until [`Chunker::finish`]: the
    /// trailing run has not been flushed yet.
    pub fn chunks(&self) -> &ChunkList {
        &self.list
    }

    /// Bytes accumulated in the not-yet-closed chunk.
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Total bytes consumed from the stream so far.
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// The configuration used by this chunker.
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
        let chunks = chunker.finish();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_before_processing() {
        let config = ChunkerConfig::default().with_min_block_size(0);
        assert!(Chunker::new(config).is_err());
    }

    #[test]
    fn test_short_input_single_chunk() {
        // Shorter than the window: never leaves the filling phase
        let config = ChunkerConfig::new(17, 64, 256, 1024).unwrap();
        let chunker = Chunker::new(config).unwrap();
        let chunks = chunker.chunk_bytes(&b"hello"[..]);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start_offset, 0);
        assert_eq!(chunks[0].length, 5);
    }

    #[test]
    fn test_tiling() {
        let config = ChunkerConfig::new(32, 64, 256, 1024).unwrap();
        let chunker = Chunker::new(config).unwrap();
        let data: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect();
        let chunks = chunker.chunk_bytes(data.clone());

        let mut expected_offset = 0u64;
        for chunk in &chunks {
            assert_eq!(chunk.start_offset, expected_offset);
            expected_offset = chunk.end_offset();
        }
        assert_eq!(expected_offset, data.len() as u64);
    }

    #[test]
    fn test_mid_stream_inspection() {
        let config = ChunkerConfig::new(32, 64, 128, 256).unwrap();
        let mut chunker = Chunker::new(config).unwrap();

        let data = vec![0xA5u8; 1000];
        chunker.push(&data);

        // Forced boundaries guarantee progress on 1000 bytes with max 256
        assert!(!chunker.chunks().is_empty());
        assert_eq!(
            chunker.bytes_consumed(),
            chunker.chunks().total_bytes() + chunker.run_length() as u64
        );
    }

    #[test]
    fn test_shared_table() {
        let config = ChunkerConfig::new(20, 64, 256, 1024).unwrap();
        let table = Arc::new(PolyTable::build(20));
        let data: Vec<u8> = (0..5_000u32).map(|i| (i * 131 % 256) as u8).collect();

        let a = Chunker::with_table(config, table.clone())
            .unwrap()
            .chunk_bytes(data.clone());
        let b = Chunker::new(config).unwrap().chunk_bytes(data);
        assert_eq!(a, b);
    }

    #[test]
    fn test_table_window_mismatch() {
        let config = ChunkerConfig::new(20, 64, 256, 1024).unwrap();
        let table = Arc::new(PolyTable::build(21));
        assert!(Chunker::with_table(config, table).is_err());
    }
}
