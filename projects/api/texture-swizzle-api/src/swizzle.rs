//! Swizzle and unswizzle operations over slices.

use crate::allocate::allocate_align_64;
use crate::error::SwizzleError;
use crate::geometry::SwizzleGeometry;
use crate::layout::SwizzleLayout;
use derive_enum_all_values::AllValues;
use safe_allocator_api::RawAlloc;

/// Direction of a conversion between linear and swizzled layouts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum SwizzleDirection {
    /// Linear (row-major) to swizzled (Morton order).
    Swizzle,
    /// Swizzled (Morton order) to linear (row-major).
    Unswizzle,
}

impl SwizzleDirection {
    /// The direction which undoes this one.
    pub const fn inverse(self) -> Self {
        match self {
            SwizzleDirection::Swizzle => SwizzleDirection::Unswizzle,
            SwizzleDirection::Unswizzle => SwizzleDirection::Swizzle,
        }
    }
}

/// Swizzle a box of linear texels into `output`.
///
/// # Parameters
///
/// - `input`: Linear texel data laid out as described by `geometry`
/// - `output`: Buffer to write the swizzled texels to
/// - `geometry`: Extents of the box and the layout of `input`
///
/// # Returns
///
/// [`Ok`] on success, or an error if validation fails.
///
/// # Errors
///
/// - Any error from [`SwizzleGeometry::validate`]
/// - [`SwizzleError::InputBufferTooSmall`] if `input` is shorter than [`SwizzleGeometry::linear_size`]
/// - [`SwizzleError::OutputBufferTooSmall`] if `output` is shorter than [`SwizzleGeometry::swizzled_size`]
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use texture_swizzle_api::{swizzle_box_slice, SwizzleGeometry};
/// let geometry = SwizzleGeometry::packed(16, 16, 4, 4); // 16x16x4 RGBA8
/// let linear = vec![0u8; geometry.linear_size()?];
/// let mut swizzled = vec![0u8; geometry.swizzled_size()?];
///
/// swizzle_box_slice(&linear, &mut swizzled, &geometry)?;
/// # Ok(())
/// # }
/// ```
pub fn swizzle_box_slice(
    input: &[u8],
    output: &mut [u8],
    geometry: &SwizzleGeometry,
) -> Result<(), SwizzleError> {
    SwizzleLayout::new(*geometry)?.swizzle(input, output)
}

/// Unswizzle a box of swizzled texels into the linear buffer `output`.
///
/// Padding between rows and slices of `output` is left untouched.
///
/// # Parameters
///
/// - `input`: Swizzled texel data
/// - `output`: Buffer to write the linear texels to, laid out as described by `geometry`
/// - `geometry`: Extents of the box and the layout of `output`
///
/// # Returns
///
/// [`Ok`] on success, or an error if validation fails.
///
/// # Errors
///
/// - Any error from [`SwizzleGeometry::validate`]
/// - [`SwizzleError::InputBufferTooSmall`] if `input` is shorter than [`SwizzleGeometry::swizzled_size`]
/// - [`SwizzleError::OutputBufferTooSmall`] if `output` is shorter than [`SwizzleGeometry::linear_size`]
pub fn unswizzle_box_slice(
    input: &[u8],
    output: &mut [u8],
    geometry: &SwizzleGeometry,
) -> Result<(), SwizzleError> {
    SwizzleLayout::new(*geometry)?.unswizzle(input, output)
}

/// Swizzle or unswizzle a box, depending on `direction`.
///
/// See [`swizzle_box_slice`] and [`unswizzle_box_slice`].
pub fn process_box_slice(
    direction: SwizzleDirection,
    input: &[u8],
    output: &mut [u8],
    geometry: &SwizzleGeometry,
) -> Result<(), SwizzleError> {
    match direction {
        SwizzleDirection::Swizzle => swizzle_box_slice(input, output, geometry),
        SwizzleDirection::Unswizzle => unswizzle_box_slice(input, output, geometry),
    }
}

/// Swizzle a 2D rectangle. Same as [`swizzle_box_slice`] with a depth of 1.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use texture_swizzle_api::swizzle_rect_slice;
/// let linear = [0u8, 1, 2, 3, 4, 5, 6, 7]; // 4x2, 1 byte per texel
/// let mut swizzled = [0u8; 8];
///
/// swizzle_rect_slice(&linear, 4, 2, &mut swizzled, 4, 1)?;
/// assert_eq!(swizzled, [0, 1, 4, 5, 2, 3, 6, 7]);
/// # Ok(())
/// # }
/// ```
pub fn swizzle_rect_slice(
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
    pitch: usize,
    bytes_per_pixel: usize,
) -> Result<(), SwizzleError> {
    let geometry = SwizzleGeometry::new_rect(width, height, pitch, bytes_per_pixel);
    swizzle_box_slice(input, output, &geometry)
}

/// Unswizzle a 2D rectangle. Same as [`unswizzle_box_slice`] with a depth of 1.
pub fn unswizzle_rect_slice(
    input: &[u8],
    width: u32,
    height: u32,
    output: &mut [u8],
    pitch: usize,
    bytes_per_pixel: usize,
) -> Result<(), SwizzleError> {
    let geometry = SwizzleGeometry::new_rect(width, height, pitch, bytes_per_pixel);
    unswizzle_box_slice(input, output, &geometry)
}

/// Swizzle a box of linear texels and return a new allocated buffer.
///
/// The buffer is 64-byte aligned and [`SwizzleGeometry::swizzled_size`] bytes long. Indices not
/// used by any texel (only present for non power-of-two extents) are zeroed.
///
/// # Errors
///
/// - Any error from [`SwizzleGeometry::validate`]
/// - [`SwizzleError::InputBufferTooSmall`] if `input` is shorter than [`SwizzleGeometry::linear_size`]
/// - [`SwizzleError::AllocationFailed`] if memory allocation fails
pub fn swizzle_box_allocating(
    input: &[u8],
    geometry: &SwizzleGeometry,
) -> Result<RawAlloc, SwizzleError> {
    let layout = SwizzleLayout::new(*geometry)?;
    let mut output = allocate_align_64(layout.swizzled_size())?;
    if layout.swizzled_size() != layout.texel_bytes() {
        output.as_mut_slice().fill(0);
    }

    layout.swizzle(input, output.as_mut_slice())?;
    Ok(output)
}

/// Unswizzle a box of swizzled texels and return a new allocated linear buffer.
///
/// The buffer is 64-byte aligned and [`SwizzleGeometry::linear_size`] bytes long. Row and slice
/// padding is zeroed.
///
/// # Errors
///
/// - Any error from [`SwizzleGeometry::validate`]
/// - [`SwizzleError::InputBufferTooSmall`] if `input` is shorter than [`SwizzleGeometry::swizzled_size`]
/// - [`SwizzleError::AllocationFailed`] if memory allocation fails
pub fn unswizzle_box_allocating(
    input: &[u8],
    geometry: &SwizzleGeometry,
) -> Result<RawAlloc, SwizzleError> {
    let layout = SwizzleLayout::new(*geometry)?;
    let mut output = allocate_align_64(layout.linear_size())?;
    if layout.linear_size() != layout.texel_bytes() {
        output.as_mut_slice().fill(0);
    }

    layout.unswizzle(input, output.as_mut_slice())?;
    Ok(output)
}
