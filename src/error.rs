use alloc::string::String;

/// Errors from BMP encoding.
///
/// Every variant describes bad caller input: the encoder performs no I/O,
/// so nothing here is transient or worth retrying.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("invalid dimensions: {width}x{height} (both must be non-zero)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

impl BitmapError {
    /// Whether this error was caused by the caller's pixel buffer, dimensions
    /// or limits.
    ///
    /// Currently true for every variant.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. }
                | Self::BufferTooSmall { .. }
                | Self::DimensionsTooLarge { .. }
                | Self::LimitExceeded(_)
        )
    }
}
