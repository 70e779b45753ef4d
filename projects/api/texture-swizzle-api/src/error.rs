//! Error types for swizzle operations.

use crate::allocate::AllocateError;
use thiserror::Error;

/// Errors that can occur during swizzle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwizzleError {
    /// One or more extents of the box is zero.
    #[error("Invalid dimensions: {width}x{height}x{depth}. Every extent must be at least 1.")]
    InvalidDimensions {
        /// Width in texels
        width: u32,
        /// Height in texels
        height: u32,
        /// Depth in texels
        depth: u32,
    },

    /// The texel size is zero.
    #[error("Invalid bytes per pixel: must be at least 1.")]
    InvalidBytesPerPixel,

    /// A row of the linear buffer does not fit in the given row pitch.
    #[error("Row pitch too small: {row_pitch} bytes, but a row needs {needed} bytes.")]
    RowPitchTooSmall {
        /// The provided row pitch in bytes
        row_pitch: usize,
        /// The minimum row pitch in bytes
        needed: usize,
    },

    /// A slice of the linear buffer does not fit in the given slice pitch.
    #[error("Slice pitch too small: {slice_pitch} bytes, but a slice needs {needed} bytes.")]
    SlicePitchTooSmall {
        /// The provided slice pitch in bytes
        slice_pitch: usize,
        /// The minimum slice pitch in bytes
        needed: usize,
    },

    /// The box is too large for its Morton index to fit in 32 bits.
    #[error("Box of {width}x{height}x{depth} texels needs a Morton index wider than 32 bits.")]
    IndexOverflow {
        /// Width in texels
        width: u32,
        /// Height in texels
        height: u32,
        /// Depth in texels
        depth: u32,
    },

    /// A buffer size computed from the geometry does not fit in a `usize`.
    #[error("Buffer size for the given geometry overflows usize.")]
    SizeOverflow,

    /// The input buffer is too small for the operation.
    #[error("Input buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    InputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The output buffer is too small for the operation.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// Memory allocation failed.
    #[error("Memory allocation failed: {0}")]
    AllocationFailed(#[from] AllocateError),
}
