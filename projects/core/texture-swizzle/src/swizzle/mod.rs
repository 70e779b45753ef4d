//! # Box Swizzling
//!
//! Converts boxes of texels between a linear (row-major) buffer and a packed, Morton-ordered
//! ("swizzled") buffer.
//!
//! ## Linear Buffer
//!
//! Texel (x, y, z) lives at byte offset `z * slice_pitch + y * row_pitch + x * bytes_per_pixel`.
//! Pitches may include padding, which is never read or written.
//!
//! ## Swizzled Buffer
//!
//! Texel (x, y, z) lives at byte offset `bytes_per_pixel * index`, where `index` interleaves the
//! bits of x, y and z as described by [`SwizzleMasks`]. For power-of-two extents the buffer is
//! exactly `width * height * depth * bytes_per_pixel` bytes. For other extents some indices inside
//! the buffer are never used, and the buffer must span up to the index of the far corner texel,
//! `(width - 1, height - 1, depth - 1)`.
//!
//! ## Implementations
//!
//! - `bmi2`: Uses `PDEP` to build each index. Selected automatically when supported.
//! - `portable32`: Software bit deposit, works everywhere.
//!
//! Both produce byte identical output.

pub(crate) mod generic;
mod portable32;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod bmi2;

#[cfg(feature = "bench")]
pub mod bench;

use crate::expand::{AxisExpanders, BitExpander};
use crate::masks::SwizzleMasks;
use generic::BoxDims;

/// Swizzles a box of texels from a linear buffer into a packed Morton-ordered buffer, using the
/// best known implementation for the current CPU.
///
/// # Parameters
///
/// - `src`: Linear texel data.
/// - `width`, `height`, `depth`: Extents of the box, in texels.
/// - `dst`: Packed swizzled output.
/// - `row_pitch`: Bytes between the starts of consecutive rows in `src`.
/// - `slice_pitch`: Bytes between the starts of consecutive depth slices in `src`.
/// - `bytes_per_pixel`: Size of a single texel.
///
/// # Safety
///
/// - `src` must be valid for reads of `(depth - 1) * slice_pitch + (height - 1) * row_pitch + width * bytes_per_pixel` bytes
/// - `dst` must be valid for writes up to the swizzled offset of the far corner texel (see [module docs](self))
/// - `src` and `dst` must not overlap
/// - The Morton index for the extents must fit in 32 bits (see [`SwizzleMasks::try_new`])
///
/// # Panics
///
/// If the Morton index for the extents does not fit in 32 bits.
#[inline]
#[allow(clippy::too_many_arguments)]
pub unsafe fn swizzle_box(
    src: *const u8,
    width: u32,
    height: u32,
    depth: u32,
    dst: *mut u8,
    row_pitch: usize,
    slice_pitch: usize,
    bytes_per_pixel: usize,
) {
    let masks = SwizzleMasks::new(width, height, depth);
    swizzle_box_with_masks(
        &masks,
        src,
        width,
        height,
        depth,
        dst,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    );
}

/// Unswizzles a box of texels from a packed Morton-ordered buffer into a linear buffer, using the
/// best known implementation for the current CPU.
///
/// This is the exact inverse of [`swizzle_box`]. Padding in the linear buffer is left untouched.
///
/// # Parameters
///
/// - `src`: Packed swizzled texel data.
/// - `width`, `height`, `depth`: Extents of the box, in texels.
/// - `dst`: Linear output.
/// - `row_pitch`: Bytes between the starts of consecutive rows in `dst`.
/// - `slice_pitch`: Bytes between the starts of consecutive depth slices in `dst`.
/// - `bytes_per_pixel`: Size of a single texel.
///
/// # Safety
///
/// - `src` must be valid for reads up to the swizzled offset of the far corner texel (see [module docs](self))
/// - `dst` must be valid for writes of `(depth - 1) * slice_pitch + (height - 1) * row_pitch + width * bytes_per_pixel` bytes
/// - `src` and `dst` must not overlap
/// - The Morton index for the extents must fit in 32 bits (see [`SwizzleMasks::try_new`])
///
/// # Panics
///
/// If the Morton index for the extents does not fit in 32 bits.
#[inline]
#[allow(clippy::too_many_arguments)]
pub unsafe fn unswizzle_box(
    src: *const u8,
    width: u32,
    height: u32,
    depth: u32,
    dst: *mut u8,
    row_pitch: usize,
    slice_pitch: usize,
    bytes_per_pixel: usize,
) {
    let masks = SwizzleMasks::new(width, height, depth);
    unswizzle_box_with_masks(
        &masks,
        src,
        width,
        height,
        depth,
        dst,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    );
}

/// Swizzles a 2D rectangle. Same as [`swizzle_box`] with a depth of 1.
///
/// # Safety
///
/// See [`swizzle_box`], with `depth = 1`.
#[inline]
pub unsafe fn swizzle_rect(
    src: *const u8,
    width: u32,
    height: u32,
    dst: *mut u8,
    pitch: usize,
    bytes_per_pixel: usize,
) {
    swizzle_box(src, width, height, 1, dst, pitch, 0, bytes_per_pixel);
}

/// Unswizzles a 2D rectangle. Same as [`unswizzle_box`] with a depth of 1.
///
/// # Safety
///
/// See [`unswizzle_box`], with `depth = 1`.
#[inline]
pub unsafe fn unswizzle_rect(
    src: *const u8,
    width: u32,
    height: u32,
    dst: *mut u8,
    pitch: usize,
    bytes_per_pixel: usize,
) {
    unswizzle_box(src, width, height, 1, dst, pitch, 0, bytes_per_pixel);
}

/// Same as [`swizzle_box`], but with masks generated ahead of time.
///
/// Useful when the same extents are swizzled many times.
///
/// # Safety
///
/// See [`swizzle_box`]. In addition, `masks` must equal `SwizzleMasks::new(width, height, depth)`.
#[inline]
#[allow(clippy::too_many_arguments)]
pub unsafe fn swizzle_box_with_masks(
    masks: &SwizzleMasks,
    src: *const u8,
    width: u32,
    height: u32,
    depth: u32,
    dst: *mut u8,
    row_pitch: usize,
    slice_pitch: usize,
    bytes_per_pixel: usize,
) {
    debug_assert_eq!(*masks, SwizzleMasks::new(width, height, depth));
    let dims = BoxDims {
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    };

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        swizzle_box_x86(masks, src, dst, &dims)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable32::swizzle_box(masks, src, dst, &dims)
    }
}

/// Same as [`unswizzle_box`], but with masks generated ahead of time.
///
/// # Safety
///
/// See [`unswizzle_box`]. In addition, `masks` must equal `SwizzleMasks::new(width, height, depth)`.
#[inline]
#[allow(clippy::too_many_arguments)]
pub unsafe fn unswizzle_box_with_masks(
    masks: &SwizzleMasks,
    src: *const u8,
    width: u32,
    height: u32,
    depth: u32,
    dst: *mut u8,
    row_pitch: usize,
    slice_pitch: usize,
    bytes_per_pixel: usize,
) {
    debug_assert_eq!(*masks, SwizzleMasks::new(width, height, depth));
    let dims = BoxDims {
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    };

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        unswizzle_box_x86(masks, src, dst, &dims)
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        portable32::unswizzle_box(masks, src, dst, &dims)
    }
}

/// Swizzles a box with caller supplied expanders, e.g. ones cached between calls.
///
/// Prefer [`swizzle_box_with_masks`] unless the expanders are already at hand; it picks the
/// fastest expander for the current CPU.
///
/// # Safety
///
/// See [`swizzle_box`]. In addition, `expanders` must be built from
/// `SwizzleMasks::new(width, height, depth)`.
#[inline]
#[allow(clippy::too_many_arguments)]
pub unsafe fn swizzle_box_with_expanders<E: BitExpander>(
    expanders: &AxisExpanders<E>,
    src: *const u8,
    width: u32,
    height: u32,
    depth: u32,
    dst: *mut u8,
    row_pitch: usize,
    slice_pitch: usize,
    bytes_per_pixel: usize,
) {
    let dims = BoxDims {
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    };
    generic::swizzle_box_with(expanders, src, dst, &dims);
}

/// Unswizzles a box with caller supplied expanders, e.g. ones cached between calls.
///
/// # Safety
///
/// See [`unswizzle_box`]. In addition, `expanders` must be built from
/// `SwizzleMasks::new(width, height, depth)`.
#[inline]
#[allow(clippy::too_many_arguments)]
pub unsafe fn unswizzle_box_with_expanders<E: BitExpander>(
    expanders: &AxisExpanders<E>,
    src: *const u8,
    width: u32,
    height: u32,
    depth: u32,
    dst: *mut u8,
    row_pitch: usize,
    slice_pitch: usize,
    bytes_per_pixel: usize,
) {
    let dims = BoxDims {
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    };
    generic::unswizzle_box_with(expanders, src, dst, &dims);
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn swizzle_box_x86(masks: &SwizzleMasks, src: *const u8, dst: *mut u8, dims: &BoxDims) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use crate::cpu_detect::*;

        // Runtime feature detection
        if has_bmi2() {
            bmi2::swizzle_box(masks, src, dst, dims);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "bmi2") {
            bmi2::swizzle_box(masks, src, dst, dims);
            return;
        }
    }

    // Fallback to portable implementation
    portable32::swizzle_box(masks, src, dst, dims)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn unswizzle_box_x86(masks: &SwizzleMasks, src: *const u8, dst: *mut u8, dims: &BoxDims) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        use crate::cpu_detect::*;

        if has_bmi2() {
            bmi2::unswizzle_box(masks, src, dst, dims);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "bmi2") {
            bmi2::unswizzle_box(masks, src, dst, dims);
            return;
        }
    }

    // Fallback to portable implementation
    portable32::unswizzle_box(masks, src, dst, dims)
}
