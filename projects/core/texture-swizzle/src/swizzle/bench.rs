//! Public entry points into each swizzle implementation, for benchmarking.
//!
//! Parameters and safety requirements match [`swizzle_box`](super::swizzle_box) and
//! [`unswizzle_box`](super::unswizzle_box).

#![allow(missing_docs)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::missing_safety_doc)]

use super::generic::BoxDims;
use crate::masks::SwizzleMasks;

#[inline(always)]
fn dims(
    width: u32,
    height: u32,
    depth: u32,
    row_pitch: usize,
    slice_pitch: usize,
    bytes_per_pixel: usize,
) -> BoxDims {
    BoxDims {
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    }
}

pub unsafe fn portable32_swizzle_box(
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
    let dims = dims(
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    );
    super::portable32::swizzle_box(&masks, src, dst, &dims);
}

pub unsafe fn portable32_unswizzle_box(
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
    let dims = dims(
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    );
    super::portable32::unswizzle_box(&masks, src, dst, &dims);
}

/// # Safety
///
/// The CPU must support BMI2.
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub unsafe fn bmi2_swizzle_box(
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
    let dims = dims(
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    );
    super::bmi2::swizzle_box(&masks, src, dst, &dims);
}

/// # Safety
///
/// The CPU must support BMI2.
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub unsafe fn bmi2_unswizzle_box(
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
    let dims = dims(
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    );
    super::bmi2::unswizzle_box(&masks, src, dst, &dims);
}
