//! Error types for the graph-derivative pipeline
//!
//! This module defines the common errors encountered when loading images or
//! assembling coordinate curves, along with a convenient `Result` alias.
//!
//! Degenerate arithmetic (coincident x values, zero median absolute deviation)
//! deliberately does *not* produce an error: it propagates as NaN/infinity in
//! the numeric output, matching the behavior documented in [`crate::statistics`]
//! and [`crate::derivative`].

/// Errors that can occur while extracting a curve from an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input image could not be read or decoded.
    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    /// A pixel buffer does not match its declared dimensions.
    #[error("Pixel buffer of length {len} does not match {width}x{height}")]
    BadDimensions {
        /// Declared image width
        width: u32,
        /// Declared image height
        height: u32,
        /// Actual buffer length
        len: usize,
    },

    /// The x and y coordinate sequences of a curve differ in length.
    #[error("Coordinate sequences must have equal length ({x} != {y})")]
    LengthMismatch {
        /// Number of x coordinates
        x: usize,
        /// Number of y coordinates
        y: usize,
    },

    /// A numeric value could not be cast to the target type. This is usually a custom type much smaller than f64/f32
    #[error("Failed to cast value to target type")]
    CastFailed,

    /// Rendering the figure failed.
    #[cfg(feature = "plotting")]
    #[error("Failed to render figure: {0}")]
    Plotting(#[from] crate::plotting::PlottingError),
}

/// Result type for the graph-derivative pipeline
pub type Result<T> = std::result::Result<T, Error>;
