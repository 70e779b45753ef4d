//! Test prelude for swizzle API tests.
//!
//! Common imports and helpers shared by the test modules of this crate.

pub use rstest::rstest;

pub use crate::allocate::AllocateError;
pub use crate::error::SwizzleError;
pub use crate::geometry::SwizzleGeometry;
pub use crate::layout::SwizzleLayout;
pub use crate::swizzle::*;
pub use texture_swizzle::SwizzleMasks;

pub use std::vec;
pub use std::vec::Vec;

/// Linear test data of `len` bytes, with no zero bytes and a period of 251.
pub(crate) fn generate_linear_data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8 + 1).collect()
}

/// 3D Morton code built one bit at a time, X in the lowest bit.
pub(crate) fn morton_encode_3d(x: u32, y: u32, z: u32) -> u32 {
    let mut result = 0;
    for bit in 0..10 {
        result |= ((x >> bit) & 1) << (3 * bit);
        result |= ((y >> bit) & 1) << (3 * bit + 1);
        result |= ((z >> bit) & 1) << (3 * bit + 2);
    }
    result
}
