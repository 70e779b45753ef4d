use super::generic::{self, BoxDims};
use crate::expand::AxisExpanders;
use crate::masks::SwizzleMasks;

/// # Safety
///
/// - src must be valid for reads over the linear extent of `dims`
/// - dst must be valid for writes over the swizzled extent of `dims`
/// - `masks` must have been generated for the extents in `dims`
/// - the CPU must support BMI2
#[target_feature(enable = "bmi2")]
pub(crate) unsafe fn swizzle_box(
    masks: &SwizzleMasks,
    src: *const u8,
    dst: *mut u8,
    dims: &BoxDims,
) {
    let expanders = AxisExpanders::bmi2(masks);
    generic::swizzle_box_with(&expanders, src, dst, dims);
}

/// # Safety
///
/// - src must be valid for reads over the swizzled extent of `dims`
/// - dst must be valid for writes over the linear extent of `dims`
/// - `masks` must have been generated for the extents in `dims`
/// - the CPU must support BMI2
#[target_feature(enable = "bmi2")]
pub(crate) unsafe fn unswizzle_box(
    masks: &SwizzleMasks,
    src: *const u8,
    dst: *mut u8,
    dims: &BoxDims,
) {
    let expanders = AxisExpanders::bmi2(masks);
    generic::unswizzle_box_with(&expanders, src, dst, dims);
}
