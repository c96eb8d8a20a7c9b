//! Chunk result types.
//!
//! - [`ChunkDescriptor`] - one chunk's start offset, length, and fingerprint
//! - [`ChunkList`] - the frozen ordered sequence covering an entire input

mod descriptor;
mod list;

pub use descriptor::ChunkDescriptor;
pub use list::ChunkList;
