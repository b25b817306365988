use thiserror::Error;

/// Error type for enhancement operations
///
/// Every failure inside the enhancement pipeline is reported through this
/// type. The public [`ImageEnhancer`](crate::ImageEnhancer) operations never
/// return it; they log it and hand the caller's image back instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnhanceError {
    /// The image has a zero width or height
    ///
    /// None of the filters are defined on an empty buffer, so they refuse
    /// it up front instead of producing a degenerate result.
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// A blend factor is NaN or infinite
    ///
    /// Finite factors of any sign are accepted and the result is clamped;
    /// non-finite factors would poison every channel they touch.
    #[error("Invalid {name} factor: {value}")]
    InvalidFactor { name: &'static str, value: f32 },

    /// The Gaussian radius of the unsharp mask is not a positive finite value
    #[error("Unsharp mask radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    /// Failed to create an image buffer from processed pixels
    #[error("Failed to create image buffer from processed pixels")]
    BufferCreationFailed,
}

/// Result alias used by the enhancement primitives
pub type EnhanceResult<T> = Result<T, EnhanceError>;
