use multiversion::multiversion;

use super::generic::{self, BoxDims};
use crate::expand::AxisExpanders;
use crate::masks::SwizzleMasks;

/// # Safety
///
/// - src must be valid for reads over the linear extent of `dims`
/// - dst must be valid for writes over the swizzled extent of `dims`
/// - `masks` must have been generated for the extents in `dims`
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub(crate) unsafe fn swizzle_box(
    masks: &SwizzleMasks,
    src: *const u8,
    dst: *mut u8,
    dims: &BoxDims,
) {
    let expanders = AxisExpanders::portable(masks);
    unsafe {
        generic::swizzle_box_with(&expanders, src, dst, dims);
    }
}

/// # Safety
///
/// - src must be valid for reads over the swizzled extent of `dims`
/// - dst must be valid for writes over the linear extent of `dims`
/// - `masks` must have been generated for the extents in `dims`
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
pub(crate) unsafe fn unswizzle_box(
    masks: &SwizzleMasks,
    src: *const u8,
    dst: *mut u8,
    dims: &BoxDims,
) {
    let expanders = AxisExpanders::portable(masks);
    unsafe {
        generic::unswizzle_box_with(&expanders, src, dst, dims);
    }
}
