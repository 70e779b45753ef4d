//! Texel walk shared by every swizzle strategy and both directions.
//!
//! The walk only produces (linear, swizzled) byte offset pairs; the caller decides which side is
//! read and which is written.

use core::ptr::copy_nonoverlapping;

use crate::expand::{AxisExpanders, BitExpander};

/// Geometry of one box, as passed to the raw swizzle functions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BoxDims {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub row_pitch: usize,
    pub slice_pitch: usize,
    pub bytes_per_pixel: usize,
}

/// Calls `visit(linear_offset, swizzled_offset)` for every texel, in Z, Y, X order.
///
/// The slice offset is carried as a cursor so no per texel multiply by Z is needed; Y and Z bits
/// are expanded once per row.
#[inline(always)]
pub(crate) fn for_each_texel<E: BitExpander>(
    expanders: &AxisExpanders<E>,
    dims: &BoxDims,
    mut visit: impl FnMut(usize, usize),
) {
    let bytes_per_pixel = dims.bytes_per_pixel;
    let mut slice_offset = 0usize;

    for z in 0..dims.depth {
        let z_bits = expanders.z.expand(z);
        let mut row_offset = slice_offset;

        for y in 0..dims.height {
            let yz_bits = z_bits | expanders.y.expand(y);
            let mut linear_offset = row_offset;

            for x in 0..dims.width {
                let index = yz_bits | expanders.x.expand(x);
                visit(linear_offset, index as usize * bytes_per_pixel);
                linear_offset += bytes_per_pixel;
            }

            row_offset += dims.row_pitch;
        }

        slice_offset += dims.slice_pitch;
    }
}

/// Copies a box from a linear buffer into a packed swizzled buffer.
///
/// # Safety
///
/// - `src` must be valid for reads over the linear extent of `dims`
/// - `dst` must be valid for writes over the swizzled extent of `dims`
/// - `src` and `dst` must not overlap
#[inline(always)]
pub(crate) unsafe fn swizzle_box_with<E: BitExpander>(
    expanders: &AxisExpanders<E>,
    src: *const u8,
    dst: *mut u8,
    dims: &BoxDims,
) {
    // Fixed sizes let the copy compile down to a single load/store.
    match dims.bytes_per_pixel {
        1 => swizzle_texels::<E, 1>(expanders, src, dst, dims),
        2 => swizzle_texels::<E, 2>(expanders, src, dst, dims),
        4 => swizzle_texels::<E, 4>(expanders, src, dst, dims),
        8 => swizzle_texels::<E, 8>(expanders, src, dst, dims),
        16 => swizzle_texels::<E, 16>(expanders, src, dst, dims),
        _ => swizzle_texels::<E, 0>(expanders, src, dst, dims),
    }
}

/// Copies a box from a packed swizzled buffer into a linear buffer.
///
/// # Safety
///
/// - `src` must be valid for reads over the swizzled extent of `dims`
/// - `dst` must be valid for writes over the linear extent of `dims`
/// - `src` and `dst` must not overlap
#[inline(always)]
pub(crate) unsafe fn unswizzle_box_with<E: BitExpander>(
    expanders: &AxisExpanders<E>,
    src: *const u8,
    dst: *mut u8,
    dims: &BoxDims,
) {
    match dims.bytes_per_pixel {
        1 => unswizzle_texels::<E, 1>(expanders, src, dst, dims),
        2 => unswizzle_texels::<E, 2>(expanders, src, dst, dims),
        4 => unswizzle_texels::<E, 4>(expanders, src, dst, dims),
        8 => unswizzle_texels::<E, 8>(expanders, src, dst, dims),
        16 => unswizzle_texels::<E, 16>(expanders, src, dst, dims),
        _ => unswizzle_texels::<E, 0>(expanders, src, dst, dims),
    }
}

/// `BPP == 0` means 'use `dims.bytes_per_pixel`'.
#[inline(always)]
unsafe fn swizzle_texels<E: BitExpander, const BPP: usize>(
    expanders: &AxisExpanders<E>,
    src: *const u8,
    dst: *mut u8,
    dims: &BoxDims,
) {
    let texel_size = if BPP == 0 { dims.bytes_per_pixel } else { BPP };
    for_each_texel(expanders, dims, |linear, swizzled| {
        copy_nonoverlapping(src.add(linear), dst.add(swizzled), texel_size);
    });
}

#[inline(always)]
unsafe fn unswizzle_texels<E: BitExpander, const BPP: usize>(
    expanders: &AxisExpanders<E>,
    src: *const u8,
    dst: *mut u8,
    dims: &BoxDims,
) {
    let texel_size = if BPP == 0 { dims.bytes_per_pixel } else { BPP };
    for_each_texel(expanders, dims, |linear, swizzled| {
        copy_nonoverlapping(src.add(swizzled), dst.add(linear), texel_size);
    });
}
