//! Async stream adapter for chunking.
//!
//! This module provides asynchronous chunking using the `futures-io`
//! `AsyncRead` trait, making it runtime-agnostic and compatible with tokio,
//! async-std, smol, and other async runtimes.
//!
//! # Example
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
//!         println!("chunk @{} len {}", chunk.start_offset, chunk.length);
//!     }
//!     Ok(())
//! }
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::chunk::{ChunkDescriptor, ChunkList};
use crate::chunker::Chunker;
use crate::config::ChunkerConfig;
use crate::error::ChunkError;

/// Read size per poll from the underlying reader.
const READ_BUF_SIZE: usize = 8 * 1024;

pin_project! {
    /// A stream that yields chunk descriptors from an async reader.
    ///
    /// This uses `futures_io::AsyncRead`, which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible
    /// runtime. The stream mirrors [`crate::ChunkIter`]: descriptors as
    /// boundaries are found, the trailing flush at end of stream, fused
    /// after the first I/O error.
    pub struct ChunkStream<R> {
        #[pin]
        reader: R,
        chunker: Option<Chunker>,
        finished: Option<ChunkList>,
        cursor: usize,
        buf: Vec<u8>,
        errored: bool,
    }
}

impl<R> ChunkStream<R> {
    fn new(reader: R, chunker: Chunker) -> Self {
        Self {
            reader,
            chunker: Some(chunker),
            finished: None,
            cursor: 0,
            buf: vec![0u8; READ_BUF_SIZE],
            errored: false,
        }
    }
}

/// The descriptor waiting at the cursor, if one has been found.
fn pending(
    finished: &Option<ChunkList>,
    chunker: &Option<Chunker>,
    cursor: usize,
) -> Option<ChunkDescriptor> {
    let list = match (finished, chunker) {
        (Some(list), _) => list,
        (None, Some(chunker)) => chunker.chunks(),
        (None, None) => return None,
    };
    list.get(cursor).copied()
}

impl<R: AsyncRead> Stream for ChunkStream<R> {
    type Item = Result<ChunkDescriptor, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.errored {
            return Poll::Ready(None);
        }

        loop {
            if let Some(chunk) = pending(this.finished, this.chunker, *this.cursor) {
                *this.cursor += 1;
                return Poll::Ready(Some(Ok(chunk)));
            }

            // Nothing buffered and the stream is already flushed
            if this.finished.is_some() {
                return Poll::Ready(None);
            }

            match this.reader.as_mut().poll_read(cx, this.buf.as_mut_slice()) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Ok(0)) => {
                    // End of stream: flush the trailing chunk
                    match this.chunker.take() {
                        Some(chunker) => *this.finished = Some(chunker.finish()),
                        None => return Poll::Ready(None),
                    }
                }
                Poll::Ready(Ok(n)) => {
                    if let Some(chunker) = this.chunker.as_mut() {
                        chunker.push(&this.buf[..n]);
                    }
                }
                Poll::Ready(Err(e)) => {
                    *this.errored = true;
                    return Poll::Ready(Some(Err(e.into())));
                }
            }
        }
    }
}

/// Creates a chunk descriptor stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, `tokio_util::compat` converts `tokio::io::AsyncRead`
/// to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use rabincdc::{chunk_async, ChunkerConfig};
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let stream = chunk_async(tokio_reader.compat(), ChunkerConfig::default())?;
/// ```
///
/// # Errors
///
/// Returns [`ChunkError::InvalidConfig`] if the configuration is invalid;
/// validation happens here, before any byte is read.
pub fn chunk_async<R: AsyncRead>(
    reader: R,
    config: ChunkerConfig,
) -> Result<ChunkStream<R>, ChunkError> {
    Ok(ChunkStream::new(reader, Chunker::new(config)?))
}
