//! Description of a box of texels and the linear buffer it is stored in.

use crate::error::SwizzleError;
use log::debug;
use texture_swizzle::{AxisExpanders, SwizzleMasks};

/// Extents of a box of texels, and the layout of the linear buffer holding it.
///
/// Texel (x, y, z) of the linear buffer lives at byte offset
/// `z * slice_pitch + y * row_pitch + x * bytes_per_pixel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwizzleGeometry {
    /// Width of the box in texels.
    pub width: u32,
    /// Height of the box in texels.
    pub height: u32,
    /// Depth of the box in texels. 1 for 2D textures.
    pub depth: u32,
    /// Bytes between the starts of consecutive rows in the linear buffer.
    /// Ignored when `height` is 1.
    pub row_pitch: usize,
    /// Bytes between the starts of consecutive depth slices in the linear buffer.
    /// Ignored when `depth` is 1.
    pub slice_pitch: usize,
    /// Size of a single texel in bytes.
    pub bytes_per_pixel: usize,
}

impl SwizzleGeometry {
    /// Describes a 3D box stored with the given pitches.
    pub const fn new_box(
        width: u32,
        height: u32,
        depth: u32,
        row_pitch: usize,
        slice_pitch: usize,
        bytes_per_pixel: usize,
    ) -> Self {
        Self {
            width,
            height,
            depth,
            row_pitch,
            slice_pitch,
            bytes_per_pixel,
        }
    }

    /// Describes a 2D rectangle stored with the given row pitch.
    pub const fn new_rect(width: u32, height: u32, pitch: usize, bytes_per_pixel: usize) -> Self {
        Self::new_box(width, height, 1, pitch, 0, bytes_per_pixel)
    }

    /// Describes a box whose rows and slices are tightly packed, with no padding.
    ///
    /// Pitches that would overflow are saturated, and rejected by [`Self::validate`].
    pub const fn packed(width: u32, height: u32, depth: u32, bytes_per_pixel: usize) -> Self {
        let row_pitch = (width as usize).saturating_mul(bytes_per_pixel);
        let slice_pitch = row_pitch.saturating_mul(height as usize);
        Self::new_box(
            width,
            height,
            depth,
            row_pitch,
            slice_pitch,
            bytes_per_pixel,
        )
    }

    /// Generates the axis masks for this box.
    ///
    /// # Errors
    ///
    /// - [`SwizzleError::InvalidDimensions`] if any extent is zero
    /// - [`SwizzleError::IndexOverflow`] if the Morton index needs more than 32 bits
    pub fn masks(&self) -> Result<SwizzleMasks, SwizzleError> {
        self.check_extents()?;
        SwizzleMasks::try_new(self.width, self.height, self.depth).ok_or(
            SwizzleError::IndexOverflow {
                width: self.width,
                height: self.height,
                depth: self.depth,
            },
        )
    }

    /// Checks that this geometry describes a box which can be swizzled.
    ///
    /// # Errors
    ///
    /// - [`SwizzleError::InvalidDimensions`] if any extent is zero
    /// - [`SwizzleError::InvalidBytesPerPixel`] if `bytes_per_pixel` is zero
    /// - [`SwizzleError::IndexOverflow`] if the Morton index needs more than 32 bits
    /// - [`SwizzleError::RowPitchTooSmall`] if `height > 1` and a row does not fit in `row_pitch`
    /// - [`SwizzleError::SlicePitchTooSmall`] if `depth > 1` and a slice does not fit in `slice_pitch`
    /// - [`SwizzleError::SizeOverflow`] if either buffer size overflows `usize`
    pub fn validate(&self) -> Result<(), SwizzleError> {
        let result = self.validate_inner();
        if let Err(error) = &result {
            debug!("Rejected swizzle geometry {self:?}: {error}");
        }
        result
    }

    fn validate_inner(&self) -> Result<(), SwizzleError> {
        self.check_extents()?;
        if self.bytes_per_pixel == 0 {
            return Err(SwizzleError::InvalidBytesPerPixel);
        }
        self.masks()?;

        let row_size = (self.width as usize)
            .checked_mul(self.bytes_per_pixel)
            .ok_or(SwizzleError::SizeOverflow)?;
        if self.height > 1 && self.row_pitch < row_size {
            return Err(SwizzleError::RowPitchTooSmall {
                row_pitch: self.row_pitch,
                needed: row_size,
            });
        }

        if self.depth > 1 {
            // Last row of a slice only needs its texels, not the full pitch.
            let slice_size = (self.height as usize - 1)
                .checked_mul(self.row_pitch)
                .and_then(|rows| rows.checked_add(row_size))
                .ok_or(SwizzleError::SizeOverflow)?;
            if self.slice_pitch < slice_size {
                return Err(SwizzleError::SlicePitchTooSmall {
                    slice_pitch: self.slice_pitch,
                    needed: slice_size,
                });
            }
        }

        self.linear_size_unchecked()?;
        self.swizzled_size_unchecked()?;
        Ok(())
    }

    /// Number of bytes the linear buffer must hold.
    ///
    /// Equals `(depth - 1) * slice_pitch + (height - 1) * row_pitch + width * bytes_per_pixel`.
    /// Trailing padding after the last row and slice is not required.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::validate`].
    pub fn linear_size(&self) -> Result<usize, SwizzleError> {
        self.validate()?;
        self.linear_size_unchecked()
    }

    /// Number of bytes the swizzled buffer must hold.
    ///
    /// This spans up to and including the far corner texel. For power-of-two extents it equals
    /// `width * height * depth * bytes_per_pixel`; other extents may need more.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::validate`].
    pub fn swizzled_size(&self) -> Result<usize, SwizzleError> {
        self.validate()?;
        self.swizzled_size_unchecked()
    }

    fn check_extents(&self) -> Result<(), SwizzleError> {
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(SwizzleError::InvalidDimensions {
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        Ok(())
    }

    // Only meaningful for non-zero extents.
    pub(crate) fn linear_size_unchecked(&self) -> Result<usize, SwizzleError> {
        let slices = if self.depth > 1 {
            (self.depth as usize - 1).checked_mul(self.slice_pitch)
        } else {
            Some(0)
        };
        let rows = (self.height as usize - 1).checked_mul(self.row_pitch);
        let row = (self.width as usize).checked_mul(self.bytes_per_pixel);

        slices
            .zip(rows)
            .zip(row)
            .and_then(|((slices, rows), row)| {
                slices.checked_add(rows)?.checked_add(row)
            })
            .ok_or(SwizzleError::SizeOverflow)
    }

    pub(crate) fn swizzled_size_unchecked(&self) -> Result<usize, SwizzleError> {
        let masks = self.masks()?;
        let last_index = AxisExpanders::portable(&masks).swizzled_index(
            self.width - 1,
            self.height - 1,
            self.depth - 1,
        );

        (last_index as usize)
            .checked_add(1)
            .and_then(|texels| texels.checked_mul(self.bytes_per_pixel))
            .ok_or(SwizzleError::SizeOverflow)
    }
}
