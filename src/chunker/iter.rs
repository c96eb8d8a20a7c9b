//! Iterator adapter that drives a [`std::io::Read`] source.

use std::io::Read;

use crate::chunk::{ChunkDescriptor, ChunkList};
use crate::chunker::Chunker;
use crate::error::ChunkError;

/// Read size per pull from the underlying reader.
const READ_BUF_SIZE: usize = 8 * 1024;

/// An iterator that yields chunk descriptors from a reader.
///
/// `ChunkIter` pulls data from a [`std::io::Read`] source in 8 KiB reads
/// and yields a [`ChunkDescriptor`] whenever the scan finds a boundary. At
/// end of stream the trailing partial chunk is flushed and yielded last.
/// An I/O error is yielded once, after which the iterator is fused.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use rabincdc::{Chunker, ChunkerConfig};
///
/// let file = File::open("data.bin")?;
/// let chunker = Chunker::new(ChunkerConfig::default())?;
///
/// for chunk in chunker.chunk(file) {
///     let chunk = chunk?;
///     println!("chunk @{} len {}", chunk.start_offset, chunk.length);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ChunkIter<R> {
    reader: R,

    /// Live engine while the stream is still being read.
    chunker: Option<Chunker>,

    /// Frozen result once the stream has been flushed.
    finished: Option<ChunkList>,

    /// Index of the next descriptor to yield.
    cursor: usize,

    /// Reusable read scratch.
    buf: Vec<u8>,

    /// Set after an I/O error has been yielded.
    errored: bool,
}

impl<R: Read> ChunkIter<R> {
    pub(crate) fn new(reader: R, chunker: Chunker) -> Self {
        Self {
            reader,
            chunker: Some(chunker),
            finished: None,
            cursor: 0,
            buf: vec![0u8; READ_BUF_SIZE],
            errored: false,
        }
    }

    /// The descriptor waiting at the cursor, if one has been found.
    fn pending(&self) -> Option<ChunkDescriptor> {
        let list = match (&self.finished, &self.chunker) {
            (Some(list), _) => list,
            (None, Some(chunker)) => chunker.chunks(),
            (None, None) => return None,
        };
        list.get(self.cursor).copied()
    }

    /// Drives the reader to exhaustion and returns the complete frozen
    /// list, including descriptors already yielded.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error encountered while draining.
    pub fn into_chunks(mut self) -> Result<ChunkList, ChunkError> {
        for result in self.by_ref() {
            result?;
        }
        Ok(self.finished.take().unwrap_or_default())
    }
}

impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<ChunkDescriptor, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.errored {
            return None;
        }

        loop {
            if let Some(chunk) = self.pending() {
                self.cursor += 1;
                return Some(Ok(chunk));
            }

            // Nothing buffered and the stream is already flushed
            if self.finished.is_some() {
                return None;
            }

            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    // End of stream: flush the trailing chunk
                    let chunker = self.chunker.take()?;
                    self.finished = Some(chunker.finish());
                }
                Ok(n) => {
                    if let Some(chunker) = self.chunker.as_mut() {
                        chunker.push(&self.buf[..n]);
                    }
                }
                Err(e) => {
                    self.errored = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
