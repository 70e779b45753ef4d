//! Validated, reusable swizzle layout for a single box geometry.
//!
//! Building a [`SwizzleLayout`] validates the geometry once and generates the axis masks, so
//! textures which share extents (e.g. every frame of an animation, or every layer of an array
//! texture) can be swizzled without repeating that work.

use crate::error::SwizzleError;
use crate::geometry::SwizzleGeometry;
use log::trace;
use texture_swizzle::{AxisExpanders, PortableExpandMask, SwizzleMasks};

/// A validated [`SwizzleGeometry`] with its axis masks and buffer sizes precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwizzleLayout {
    geometry: SwizzleGeometry,
    masks: SwizzleMasks,
    expanders: AxisExpanders<PortableExpandMask>,
    linear_size: usize,
    swizzled_size: usize,
}

impl SwizzleLayout {
    /// Validates `geometry` and precomputes everything needed to swizzle it.
    ///
    /// # Errors
    ///
    /// Any error from [`SwizzleGeometry::validate`].
    pub fn new(geometry: SwizzleGeometry) -> Result<Self, SwizzleError> {
        geometry.validate()?;
        let masks = geometry.masks()?;
        let layout = Self {
            geometry,
            masks,
            expanders: AxisExpanders::portable(&masks),
            linear_size: geometry.linear_size_unchecked()?,
            swizzled_size: geometry.swizzled_size_unchecked()?,
        };

        trace!(
            "Built swizzle layout for {}x{}x{} box: masks {:#x}/{:#x}/{:#x}, linear {} bytes, swizzled {} bytes",
            geometry.width,
            geometry.height,
            geometry.depth,
            masks.x,
            masks.y,
            masks.z,
            layout.linear_size,
            layout.swizzled_size
        );

        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        trace!(
            "Swizzle strategy: {}",
            if texture_swizzle::cpu_detect::bmi2_enabled() {
                "bmi2"
            } else {
                "portable32"
            }
        );

        Ok(layout)
    }

    /// The geometry this layout was built from.
    #[inline]
    pub fn geometry(&self) -> &SwizzleGeometry {
        &self.geometry
    }

    /// The axis masks of the box.
    #[inline]
    pub fn masks(&self) -> &SwizzleMasks {
        &self.masks
    }

    /// Number of bytes the linear buffer must hold.
    #[inline]
    pub fn linear_size(&self) -> usize {
        self.linear_size
    }

    /// Number of bytes the swizzled buffer must hold.
    #[inline]
    pub fn swizzled_size(&self) -> usize {
        self.swizzled_size
    }

    /// Byte offset of texel (`x`, `y`, `z`) within the swizzled buffer.
    ///
    /// Returns [`None`] if the texel lies outside the box.
    #[inline]
    pub fn swizzled_offset(&self, x: u32, y: u32, z: u32) -> Option<usize> {
        if !self.contains(x, y, z) {
            return None;
        }

        let index = self.expanders.swizzled_index(x, y, z) as usize;
        Some(index * self.geometry.bytes_per_pixel)
    }

    /// Byte offset of texel (`x`, `y`, `z`) within the linear buffer.
    ///
    /// Returns [`None`] if the texel lies outside the box.
    #[inline]
    pub fn linear_offset(&self, x: u32, y: u32, z: u32) -> Option<usize> {
        if !self.contains(x, y, z) {
            return None;
        }

        // Bounded by `linear_size`, which was checked for overflow.
        let geometry = &self.geometry;
        Some(
            z as usize * geometry.slice_pitch
                + y as usize * geometry.row_pitch
                + x as usize * geometry.bytes_per_pixel,
        )
    }

    /// Swizzles the linear texels in `src` into `dst`.
    ///
    /// # Errors
    ///
    /// - [`SwizzleError::InputBufferTooSmall`] if `src` is shorter than [`Self::linear_size`]
    /// - [`SwizzleError::OutputBufferTooSmall`] if `dst` is shorter than [`Self::swizzled_size`]
    pub fn swizzle(&self, src: &[u8], dst: &mut [u8]) -> Result<(), SwizzleError> {
        check_buffers(src.len(), self.linear_size, dst.len(), self.swizzled_size)?;

        let geometry = &self.geometry;
        // Safety: Geometry was validated and both buffer sizes were checked above.
        unsafe {
            texture_swizzle::swizzle_box_with_masks(
                &self.masks,
                src.as_ptr(),
                geometry.width,
                geometry.height,
                geometry.depth,
                dst.as_mut_ptr(),
                geometry.row_pitch,
                geometry.slice_pitch,
                geometry.bytes_per_pixel,
            );
        }

        Ok(())
    }

    /// Unswizzles the packed texels in `src` into the linear buffer `dst`.
    ///
    /// Padding between rows and slices of `dst` is left untouched.
    ///
    /// # Errors
    ///
    /// - [`SwizzleError::InputBufferTooSmall`] if `src` is shorter than [`Self::swizzled_size`]
    /// - [`SwizzleError::OutputBufferTooSmall`] if `dst` is shorter than [`Self::linear_size`]
    pub fn unswizzle(&self, src: &[u8], dst: &mut [u8]) -> Result<(), SwizzleError> {
        check_buffers(src.len(), self.swizzled_size, dst.len(), self.linear_size)?;

        let geometry = &self.geometry;
        // Safety: Geometry was validated and both buffer sizes were checked above.
        unsafe {
            texture_swizzle::unswizzle_box_with_masks(
                &self.masks,
                src.as_ptr(),
                geometry.width,
                geometry.height,
                geometry.depth,
                dst.as_mut_ptr(),
                geometry.row_pitch,
                geometry.slice_pitch,
                geometry.bytes_per_pixel,
            );
        }

        Ok(())
    }

    /// Number of bytes actually occupied by texels, in either buffer.
    #[inline]
    pub(crate) fn texel_bytes(&self) -> usize {
        // Cannot overflow, the swizzled buffer holds at least this many bytes.
        self.geometry.width as usize
            * self.geometry.height as usize
            * self.geometry.depth as usize
            * self.geometry.bytes_per_pixel
    }

    #[inline]
    fn contains(&self, x: u32, y: u32, z: u32) -> bool {
        x < self.geometry.width && y < self.geometry.height && z < self.geometry.depth
    }
}

#[inline]
fn check_buffers(
    src_len: usize,
    src_needed: usize,
    dst_len: usize,
    dst_needed: usize,
) -> Result<(), SwizzleError> {
    if src_len < src_needed {
        return Err(SwizzleError::InputBufferTooSmall {
            needed: src_needed,
            actual: src_len,
        });
    }

    if dst_len < dst_needed {
        return Err(SwizzleError::OutputBufferTooSmall {
            needed: dst_needed,
            actual: dst_len,
        });
    }

    Ok(())
}
