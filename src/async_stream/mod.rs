//! Async stream support for chunking (feature = "async-io").
//!
//! - [`chunk_async`] - chunk any `futures_io::AsyncRead` as a `Stream`

mod stream;

pub use stream::{ChunkStream, chunk_async};
