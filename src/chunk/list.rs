//! The ChunkList type - the ordered result of a chunking pass.

use std::io::{self, Write};
use std::ops::Index;
use std::slice;

use super::ChunkDescriptor;

/// The ordered sequence of chunk descriptors covering one input.
///
/// A `ChunkList` is built append-only by a [`crate::Chunker`] while it
/// scans, and handed to the caller frozen once the stream has been
/// flushed: descriptors appear in ascending offset order, the first starts
/// at offset 0, each starts where the previous ended, and the last ends at
/// the total input length. There is no mutating public API.
///
/// # Example
///
/// ```
/// use rabincdc::{Chunker, ChunkerConfig};
///
/// let chunker = Chunker::new(ChunkerConfig::default())?;
/// let chunks = chunker.chunk_bytes(&b"hello world"[..]);
///
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks.total_bytes(), 11);
/// # Ok::<(), rabincdc::ChunkError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkList {
    chunks: Vec<ChunkDescriptor>,
}

impl ChunkList {
    /// Creates an empty list.
    pub(crate) fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Appends the next descriptor. Only the chunker may grow a list.
    pub(crate) fn push(&mut self, chunk: ChunkDescriptor) {
        debug_assert_eq!(
            chunk.start_offset,
            self.chunks.last().map(|c| c.end_offset()).unwrap_or(0),
            "descriptors must tile the input"
        );
        self.chunks.push(chunk);
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True if the list holds no chunks (empty input).
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The descriptor at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&ChunkDescriptor> {
        self.chunks.get(index)
    }

    /// The first descriptor, if any.
    pub fn first(&self) -> Option<&ChunkDescriptor> {
        self.chunks.first()
    }

    /// The last descriptor, if any.
    pub fn last(&self) -> Option<&ChunkDescriptor> {
        self.chunks.last()
    }

    /// Iterates the descriptors in offset order.
    pub fn iter(&self) -> slice::Iter<'_, ChunkDescriptor> {
        self.chunks.iter()
    }

    /// The descriptors as a slice.
    pub fn as_slice(&self) -> &[ChunkDescriptor] {
        &self.chunks
    }

    /// Total input bytes covered by the list.
    ///
    /// Equal to the last chunk's end offset, since the list tiles the
    /// input from offset 0.
    pub fn total_bytes(&self) -> u64 {
        self.chunks.last().map(|c| c.end_offset()).unwrap_or(0)
    }

    /// Writes every chunk as a fixed-size binary record in offset order.
    ///
    /// See [`ChunkDescriptor::to_bytes`] for the record layout.
    pub fn write_binary<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in &self.chunks {
            chunk.write_binary(writer)?;
        }
        Ok(())
    }

    /// Writes every chunk as one text line in offset order.
    ///
    /// Each line is the descriptor's [`std::fmt::Display`] form.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in &self.chunks {
            writeln!(writer, "{}", chunk)?;
        }
        Ok(())
    }
}

impl Index<usize> for ChunkList {
    type Output = ChunkDescriptor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chunks[index]
    }
}

impl<'a> IntoIterator for &'a ChunkList {
    type Item = &'a ChunkDescriptor;
    type IntoIter = slice::Iter<'a, ChunkDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

impl IntoIterator for ChunkList {
    type Item = ChunkDescriptor;
    type IntoIter = std::vec::IntoIter<ChunkDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
