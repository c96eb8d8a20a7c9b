//! Rabin rolling fingerprint implementation.
//!
//! This module contains the incremental polynomial arithmetic behind
//! boundary detection:
//!
//! - [`PolyTable`] - precomputed enter/leave lookup tables for one window size
//! - [`RollingHash`] - sliding window state with O(1) per-byte updates

mod table;
mod window;

pub use table::PolyTable;
pub use window::RollingHash;
