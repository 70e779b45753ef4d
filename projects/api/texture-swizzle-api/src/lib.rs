#![doc = include_str!("../README.MD")]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # Examples
//!
//! Note: Using `vec` here is not recommended for large textures, as it zeroes the buffer. The
//! allocating functions return uninitialized, 64-byte aligned memory where possible instead.
//!
//! ## Swizzle a 2D texture with row padding
//!
//! ```
//! use texture_swizzle_api::{swizzle_rect_slice, unswizzle_rect_slice, SwizzleGeometry};
//!
//! // 30x20 RGBA8 texture, rows padded to 128 bytes.
//! let geometry = SwizzleGeometry::new_rect(30, 20, 128, 4);
//! let linear = vec![0u8; geometry.linear_size()?];
//! let mut swizzled = vec![0u8; geometry.swizzled_size()?];
//!
//! swizzle_rect_slice(&linear, 30, 20, &mut swizzled, 128, 4)?;
//!
//! let mut restored = vec![0u8; linear.len()];
//! unswizzle_rect_slice(&swizzled, 30, 20, &mut restored, 128, 4)?;
//! # Ok::<(), texture_swizzle_api::SwizzleError>(())
//! ```
//!
//! ## Reuse a layout
//!
//! ```
//! use texture_swizzle_api::{SwizzleGeometry, SwizzleLayout};
//!
//! let layout = SwizzleLayout::new(SwizzleGeometry::packed(64, 64, 1, 4))?;
//! let mut swizzled = vec![0u8; layout.swizzled_size()];
//!
//! for frame in [vec![1u8; layout.linear_size()], vec![2u8; layout.linear_size()]] {
//!     layout.swizzle(&frame, &mut swizzled)?;
//! }
//! # Ok::<(), texture_swizzle_api::SwizzleError>(())
//! ```

#[cfg(test)]
pub(crate) mod test_prelude;

pub mod allocate;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod swizzle;

pub use error::SwizzleError;
pub use geometry::SwizzleGeometry;
pub use layout::SwizzleLayout;
pub use swizzle::{
    process_box_slice, swizzle_box_allocating, swizzle_box_slice, swizzle_rect_slice,
    unswizzle_box_allocating, unswizzle_box_slice, unswizzle_rect_slice, SwizzleDirection,
};
pub use texture_swizzle::SwizzleMasks;
