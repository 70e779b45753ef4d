//! # Swizzle Mask Generation
//!
//! Derives, from the extents of a 3D box, the three bit masks that partition a Morton index
//! between the X, Y and Z axes.
//!
//! Bits are handed out round-robin in the fixed order X, Y, Z. An axis only receives a bit while
//! its extent still needs one, so once an axis runs out of bits the remaining axes pack into the
//! freed positions:
//!
//! ```text
//! 4x4x4 => ..zyxzyx       (classic Morton interleave)
//! 8x2x1 => xxyx           (y only needs a single bit)
//! 2x8x4 => yzyzyx         (x drops out after the first round)
//! ```
//!
//! The masks always cover a contiguous run of low bits, `mask_x ^ mask_y ^ mask_z == 2^n - 1`.

/// The per-axis bit masks for a Morton index.
///
/// Each set bit in [`SwizzleMasks::x`] marks a position in the swizzled index that holds one bit
/// of the X coordinate, and likewise for Y and Z. The three masks never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SwizzleMasks {
    /// Bits of the Morton index owned by the X coordinate.
    pub x: u32,
    /// Bits of the Morton index owned by the Y coordinate.
    pub y: u32,
    /// Bits of the Morton index owned by the Z coordinate.
    pub z: u32,
}

impl SwizzleMasks {
    /// Generates the axis masks for a box of `width` x `height` x `depth` texels.
    ///
    /// # Panics
    ///
    /// If the Morton index for the given extents needs more than 32 bits.
    /// Use [`SwizzleMasks::try_new`] when the extents are not known to be in range.
    #[inline]
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        match Self::try_new(width, height, depth) {
            Some(masks) => masks,
            None => panic!("Morton index for the given extents does not fit in 32 bits."),
        }
    }

    /// Generates the axis masks for a box of `width` x `height` x `depth` texels.
    ///
    /// An extent of `1` (or `0`) contributes no bits; its mask is `0`.
    ///
    /// # Returns
    ///
    /// [`None`] if the Morton index for the given extents needs more than 32 bits.
    pub const fn try_new(width: u32, height: u32, depth: u32) -> Option<Self> {
        let width = width as u64;
        let height = height as u64;
        let depth = depth as u64;

        let mut x = 0u64;
        let mut y = 0u64;
        let mut z = 0u64;
        let mut bit = 1u64;
        let mut mask_bit = 1u64;

        loop {
            let mut done = true;
            if bit < width {
                if mask_bit > u32::MAX as u64 {
                    return None;
                }
                x |= mask_bit;
                mask_bit <<= 1;
                done = false;
            }
            if bit < height {
                if mask_bit > u32::MAX as u64 {
                    return None;
                }
                y |= mask_bit;
                mask_bit <<= 1;
                done = false;
            }
            if bit < depth {
                if mask_bit > u32::MAX as u64 {
                    return None;
                }
                z |= mask_bit;
                mask_bit <<= 1;
                done = false;
            }
            bit <<= 1;

            if done {
                break;
            }
        }

        // A gap or overlap here is a bug in the generator itself.
        assert!(
            (x ^ y ^ z) == mask_bit - 1,
            "Swizzle masks do not partition the index bits."
        );

        Some(Self {
            x: x as u32,
            y: y as u32,
            z: z as u32,
        })
    }

    /// Union of all three axis masks, i.e. every bit a Morton index for this box can use.
    #[inline]
    pub const fn index_mask(&self) -> u32 {
        self.x | self.y | self.z
    }

    /// Number of bits in a Morton index for this box.
    #[inline]
    pub const fn total_bits(&self) -> u32 {
        self.index_mask().count_ones()
    }
}
