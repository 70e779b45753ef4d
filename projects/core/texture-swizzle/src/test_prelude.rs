//! Common test imports and utilities for swizzle tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::expand::{AxisExpanders, BitExpander, PortableExpandMask};
pub use crate::masks::SwizzleMasks;
pub(crate) use crate::swizzle::generic::BoxDims;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub use crate::cpu_detect::{bmi2_enabled, has_bmi2};
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub use crate::expand::Bmi2ExpandMask;

// Standard library imports commonly used in tests
pub use std::vec;
pub use std::vec::Vec;

/// Signature shared by every strategy's box routine.
pub(crate) type BoxFn = unsafe fn(&SwizzleMasks, *const u8, *mut u8, &BoxDims);

/// Extents that cover powers of two, their neighbours and the 16 bit limit.
pub(crate) const SAMPLE_EXTENTS: &[u32] = &[
    1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33, 63, 64, 100, 255, 256, 257, 1000, 1024, 4097,
    65535, 65536,
];

/// Number of bits needed to address `extent` texels along one axis.
pub(crate) fn bits_for_extent(extent: u32) -> u32 {
    u32::BITS - extent.saturating_sub(1).leading_zeros()
}

/// Slow, obviously correct bit deposit.
pub(crate) fn reference_expand(value: u32, mask: u32) -> u32 {
    let mut result = 0;
    let mut source_bit = 0;
    for target_bit in 0..32 {
        if mask & (1 << target_bit) != 0 {
            if value & (1 << source_bit) != 0 {
                result |= 1 << target_bit;
            }
            source_bit += 1;
        }
    }
    result
}

/// Values worth expanding into `mask`: all of them for small masks, the edges and a spread of
/// values in between for larger ones.
pub(crate) fn sample_values(mask: u32) -> Vec<u32> {
    let bits = mask.count_ones();
    if bits <= 10 {
        return (0..(1u32 << bits)).collect();
    }

    let max = (1u64 << bits) - 1;
    let mut values: Vec<u32> = (0..256).collect();
    values.extend((0..256u64).map(|i| (max - i) as u32));
    values.extend((0..1024u64).map(|i| (i.wrapping_mul(0x9E37_79B9) & max) as u32));
    values
}

/// Spreads the lower 10 bits into every third bit position.
pub(crate) fn spread_bits_3d(x: u32) -> u32 {
    let mut x = x & 0x0000_03FF;
    x = (x | (x << 16)) & 0xFF00_00FF;
    x = (x | (x << 8)) & 0x0300_F00F;
    x = (x | (x << 4)) & 0x030C_30C3;
    x = (x | (x << 2)) & 0x0924_9249;
    x
}

/// Spreads the lower 16 bits into even bit positions.
pub(crate) fn spread_bits_2d(x: u32) -> u32 {
    let mut x = x & 0x0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333;
    x = (x | (x << 1)) & 0x5555_5555;
    x
}

/// Textbook 3D Morton code, X in the lowest bit.
pub(crate) fn morton_encode_3d(x: u32, y: u32, z: u32) -> u32 {
    spread_bits_3d(x) | (spread_bits_3d(y) << 1) | (spread_bits_3d(z) << 2)
}

/// Textbook 2D Morton code, X in the lowest bit.
pub(crate) fn morton_encode_2d(x: u32, y: u32) -> u32 {
    spread_bits_2d(x) | (spread_bits_2d(y) << 1)
}

/// Size of the swizzled buffer for the given box: up to and including the far corner texel.
pub(crate) fn swizzled_len(width: u32, height: u32, depth: u32, bytes_per_pixel: usize) -> usize {
    let masks = SwizzleMasks::new(width, height, depth);
    let last = AxisExpanders::portable(&masks).swizzled_index(width - 1, height - 1, depth - 1);
    (last as usize + 1) * bytes_per_pixel
}

/// Geometry with no padding between rows or slices.
pub(crate) fn packed_dims(width: u32, height: u32, depth: u32, bytes_per_pixel: usize) -> BoxDims {
    let row_pitch = width as usize * bytes_per_pixel;
    BoxDims {
        width,
        height,
        depth,
        row_pitch,
        slice_pitch: row_pitch * height as usize,
        bytes_per_pixel,
    }
}

// Helper to generate test data of specified size (in bytes)
pub(crate) fn generate_linear_data(len: usize) -> Vec<u8> {
    // Skip multiples of 256 so neighbouring texels never share a byte pattern.
    (0..len).map(|i| (i % 251) as u8 + 1).collect()
}

/// Helper to assert implementation results match reference implementation
pub(crate) fn assert_implementation_matches_reference(
    output_expected: &[u8],
    output_test: &[u8],
    impl_name: &str,
    dims: &BoxDims,
) {
    assert_eq!(
        output_expected, output_test,
        "{impl_name} implementation produced different results than reference for {}x{}x{} box with {} bytes per pixel.",
        dims.width, dims.height, dims.depth, dims.bytes_per_pixel
    );
}

/// Swizzles a box stored with padded pitches, unswizzles it again and checks every texel
/// survived while padding stayed untouched.
pub(crate) fn run_box_roundtrip_test(
    swizzle_fn: BoxFn,
    unswizzle_fn: BoxFn,
    width: u32,
    height: u32,
    depth: u32,
    bytes_per_pixel: usize,
) {
    let row_pitch = width as usize * bytes_per_pixel + 3;
    let slice_pitch = row_pitch * height as usize + 7;
    let dims = BoxDims {
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    };

    // Texel bytes carry data, padding stays zero.
    let mut linear = vec![0u8; slice_pitch * depth as usize];
    let mut value = 1u8;
    for z in 0..depth as usize {
        for y in 0..height as usize {
            let row_start = z * slice_pitch + y * row_pitch;
            for byte in &mut linear[row_start..row_start + width as usize * bytes_per_pixel] {
                *byte = value;
                value = value.wrapping_add(1).max(1);
            }
        }
    }

    let masks = SwizzleMasks::new(width, height, depth);
    let mut swizzled = vec![0u8; swizzled_len(width, height, depth, bytes_per_pixel)];
    let mut restored = vec![0u8; linear.len()];

    unsafe {
        swizzle_fn(&masks, linear.as_ptr(), swizzled.as_mut_ptr(), &dims);
        unswizzle_fn(&masks, swizzled.as_ptr(), restored.as_mut_ptr(), &dims);
    }

    assert_eq!(
        linear, restored,
        "roundtrip failed for {width}x{height}x{depth} box with {bytes_per_pixel} bytes per pixel"
    );
}

#[test]
fn validate_reference_expand() {
    assert_eq!(reference_expand(0b1011, 0b1001_1010), 0b1000_1010);
    assert_eq!(reference_expand(0b11, 0b1000_0001), 0b1000_0001);
    assert_eq!(reference_expand(0xFF, 0), 0);
}

#[test]
fn validate_morton_encode_3d() {
    assert_eq!(morton_encode_3d(1, 0, 0), 0b001);
    assert_eq!(morton_encode_3d(0, 1, 0), 0b010);
    assert_eq!(morton_encode_3d(0, 0, 1), 0b100);
    assert_eq!(morton_encode_3d(3, 3, 3), 0b111_111);
    assert_eq!(morton_encode_3d(2, 0, 1), 0b001_100);
}
