//! Configuration for chunking behavior.
//!
//! This module provides [`ChunkerConfig`], the validated value object that
//! fully determines chunking behavior for a given input:
//!
//! - `window_size` - trailing bytes covered by the rolling fingerprint
//! - `min_block_size` / `avg_block_size` / `max_block_size` - chunk length bounds
//!
//! # Example
//!
//! ```
//! use rabincdc::ChunkerConfig;
//!
//! // Custom chunk sizes
//! let config = ChunkerConfig::new(32, 4096, 16384, 65536)?;
//!
//! # Ok::<(), rabincdc::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Smallest allowed sliding window size in bytes.
pub const MIN_WINDOW_SIZE: usize = 17;

/// Largest allowed sliding window size in bytes.
pub const MAX_WINDOW_SIZE: usize = 63;

/// Default sliding window size (32 bytes).
pub const DEFAULT_WINDOW_SIZE: usize = 32;

/// Default minimum block size (4 KiB).
pub const DEFAULT_MIN_BLOCK_SIZE: usize = 4 * 1024;

/// Default average/target block size (16 KiB).
pub const DEFAULT_AVG_BLOCK_SIZE: usize = 16 * 1024;

/// Default maximum block size (64 KiB).
pub const DEFAULT_MAX_BLOCK_SIZE: usize = 64 * 1024;

/// Configuration for content-defined chunking behavior.
///
/// `ChunkerConfig` controls the sliding window width and the chunk length
/// bounds. Boundary detection cuts a chunk when the low bits of the rolling
/// fingerprint selected by [`ChunkerConfig::boundary_mask`] are all zero,
/// which yields chunk lengths geometrically distributed around
/// `avg_block_size`; the min/max bounds clamp the distribution's tails.
///
/// # Constraints
///
/// - `window_size` in `17..=63`
/// - all block sizes non-zero, `max_block_size` representable as `u32`
/// - `min_block_size < max_block_size`
/// - `min_block_size <= avg_block_size <= max_block_size`
/// - `avg_block_size` a power of 2 (the boundary mask is `avg - 1`)
/// - `max_block_size >= window_size`
///
/// # Example
///
/// ```
/// use rabincdc::ChunkerConfig;
///
/// // Use default configuration
/// let config = ChunkerConfig::default();
///
/// // Custom configuration
/// let config = ChunkerConfig::new(48, 2048, 8192, 32768)?;
///
/// // Builder pattern (validated by Chunker::new)
/// let config = ChunkerConfig::default()
///     .with_min_block_size(8192)
///     .with_avg_block_size(32768)
///     .with_max_block_size(131072);
/// # Ok::<(), rabincdc::ChunkError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkerConfig {
    /// Sliding window size in bytes.
    window_size: usize,

    /// Minimum block size in bytes.
    min_block_size: usize,

    /// Average/target block size in bytes.
    avg_block_size: usize,

    /// Maximum block size in bytes.
    max_block_size: usize,
}

impl ChunkerConfig {
    /// Creates a new configuration with the specified window and size bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if any constraint listed on
    /// [`ChunkerConfig`] is violated.
    ///
    /// # Example
    ///
    /// ```
    /// use rabincdc::ChunkerConfig;
    ///
    /// let config = ChunkerConfig::new(32, 4096, 16384, 65536)?;
    /// assert_eq!(config.min_block_size(), 4096);
    /// # Ok::<(), rabincdc::ChunkError>(())
    /// ```
    pub fn new(
        window_size: usize,
        min_block_size: usize,
        avg_block_size: usize,
        max_block_size: usize,
    ) -> Result<Self, ChunkError> {
        let config = Self {
            window_size,
            min_block_size,
            avg_block_size,
            max_block_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the sliding window size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ChunkerConfig::validate`] to check if the configuration is valid.
    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Sets the minimum block size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ChunkerConfig::validate`] to check if the configuration is valid.
    pub fn with_min_block_size(mut self, size: usize) -> Self {
        self.min_block_size = size;
        self
    }

    /// Sets the average/target block size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ChunkerConfig::validate`] to check if the configuration is valid.
    pub fn with_avg_block_size(mut self, size: usize) -> Self {
        self.avg_block_size = size;
        self
    }

    /// Sets the maximum block size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ChunkerConfig::validate`] to check if the configuration is valid.
    pub fn with_max_block_size(mut self, size: usize) -> Self {
        self.max_block_size = size;
        self
    }

    /// Returns the sliding window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the minimum block size.
    pub fn min_block_size(&self) -> usize {
        self.min_block_size
    }

    /// Returns the average/target block size.
    pub fn avg_block_size(&self) -> usize {
        self.avg_block_size
    }

    /// Returns the maximum block size.
    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    /// Returns the boundary mask derived from the average block size.
    ///
    /// A chunk boundary fires when `fingerprint & boundary_mask == 0`
    /// (once past the minimum size). A larger average selects more low
    /// bits, making the condition rarer.
    pub fn boundary_mask(&self) -> u64 {
        (self.avg_block_size as u64) - 1
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use rabincdc::ChunkerConfig;
    ///
    /// let config = ChunkerConfig::default().with_min_block_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.window_size < MIN_WINDOW_SIZE || self.window_size > MAX_WINDOW_SIZE {
            return Err(ChunkError::InvalidConfig {
                message: "window size must be between 17 and 63",
            });
        }

        if self.min_block_size == 0 || self.avg_block_size == 0 || self.max_block_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "block sizes must be non-zero",
            });
        }

        if self.min_block_size >= self.max_block_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_block_size must be less than max_block_size",
            });
        }

        if self.avg_block_size < self.min_block_size || self.avg_block_size > self.max_block_size {
            return Err(ChunkError::InvalidConfig {
                message: "avg_block_size must be between min and max block size",
            });
        }

        // The boundary mask is avg_block_size - 1, so the average must be a
        // power of 2 for the mask to select a contiguous run of low bits.
        if !self.avg_block_size.is_power_of_two() {
            return Err(ChunkError::InvalidConfig {
                message: "avg_block_size must be a power of 2",
            });
        }

        // No boundary decisions happen while the window is filling, so the
        // maximum bound can only hold if a full window fits in one chunk.
        if self.max_block_size < self.window_size {
            return Err(ChunkError::InvalidConfig {
                message: "max_block_size must be at least window_size",
            });
        }

        // Descriptor lengths are u32.
        if self.max_block_size > u32::MAX as usize {
            return Err(ChunkError::InvalidConfig {
                message: "max_block_size must fit in 32 bits",
            });
        }

        Ok(())
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
            avg_block_size: DEFAULT_AVG_BLOCK_SIZE,
            max_block_size: DEFAULT_MAX_BLOCK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChunkerConfig::default();
        assert_eq!(config.window_size(), DEFAULT_WINDOW_SIZE);
        assert_eq!(config.min_block_size(), DEFAULT_MIN_BLOCK_SIZE);
        assert_eq!(config.avg_block_size(), DEFAULT_AVG_BLOCK_SIZE);
        assert_eq!(config.max_block_size(), DEFAULT_MAX_BLOCK_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ChunkerConfig::default()
            .with_window_size(48)
            .with_min_block_size(8192)
            .with_avg_block_size(32768)
            .with_max_block_size(131072);

        assert_eq!(config.window_size(), 48);
        assert_eq!(config.min_block_size(), 8192);
        assert_eq!(config.avg_block_size(), 32768);
        assert_eq!(config.max_block_size(), 131072);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_boundary_mask() {
        let config = ChunkerConfig::new(32, 1024, 4096, 16384).unwrap();
        assert_eq!(config.boundary_mask(), 0xFFF);
    }

    #[test]
    fn test_invalid_window_size() {
        assert!(ChunkerConfig::new(16, 4096, 16384, 65536).is_err());
        assert!(ChunkerConfig::new(64, 4096, 16384, 65536).is_err());
        assert!(ChunkerConfig::new(17, 4096, 16384, 65536).is_ok());
        assert!(ChunkerConfig::new(63, 4096, 16384, 65536).is_ok());
    }

    #[test]
    fn test_invalid_config_zero_size() {
        let result = ChunkerConfig::new(32, 0, 16384, 65536);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_min_not_below_max() {
        assert!(ChunkerConfig::new(32, 65536, 65536, 65536).is_err());
        assert!(ChunkerConfig::new(32, 65536, 16384, 4096).is_err());
    }

    #[test]
    fn test_invalid_config_avg_out_of_range() {
        // avg below min
        assert!(ChunkerConfig::new(32, 8192, 4096, 65536).is_err());
        // avg above max
        assert!(ChunkerConfig::new(32, 4096, 131072, 65536).is_err());
    }

    #[test]
    fn test_invalid_config_avg_not_power_of_two() {
        let result = ChunkerConfig::new(32, 4096, 10000, 65536);
        assert!(result.is_err());
    }
}
