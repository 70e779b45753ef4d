//! Software bit deposit, for CPUs without a native `PDEP`.
//!
//! Based on the "expand" routine from Hacker's Delight (chapter 7). The mask is split into
//! 5 'move' submasks, one per power of two shift (1, 2, 4, 8, 16). Applying the moves from
//! the largest shift down to the smallest walks every bit of the value to its final position:
//!
//! ```text
//! expand(0000abcd, 10011010) = a00bc0d0
//! ```
//!
//! The moves only depend on the mask, so they are computed once and reused for every coordinate
//! in a box.

use super::BitExpander;

/// A mask with precomputed moves for the software bit deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PortableExpandMask {
    mask: u32,
    moves: [u32; 5],
}

impl PortableExpandMask {
    /// Builds the move submasks for `mask`.
    #[inline]
    pub const fn new(mask: u32) -> Self {
        let mut moves = [0u32; 5];
        let mut remaining = mask;

        // Count the 0s to the right of each bit.
        let mut zeros_right = !mask << 1;
        let mut i = 0;
        while i < 5 {
            // Parallel suffix.
            let mut prefix = zeros_right ^ (zeros_right << 1);
            prefix ^= prefix << 2;
            prefix ^= prefix << 4;
            prefix ^= prefix << 8;
            prefix ^= prefix << 16;

            let mv = prefix & remaining;
            moves[i] = mv;
            remaining = (remaining ^ mv) | (mv >> (1 << i));
            zeros_right &= !prefix;
            i += 1;
        }

        Self { mask, moves }
    }

    /// The move submasks, indexed by log2 of their shift amount.
    #[inline]
    pub const fn moves(&self) -> &[u32; 5] {
        &self.moves
    }
}

impl BitExpander for PortableExpandMask {
    #[inline(always)]
    fn mask(&self) -> u32 {
        self.mask
    }

    #[inline(always)]
    fn expand(&self, value: u32) -> u32 {
        let mut x = value;
        let mut i = 5;
        while i > 0 {
            i -= 1;
            let mv = self.moves[i];
            let shifted = x << (1 << i);
            x = (x & !mv) | (shifted & mv);
        }

        // Clear anything that was shifted past the mask.
        x & self.mask
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[rstest]
    #[case(0b1011, 0b1001_1010, 0b1000_1010)]
    #[case(0b1111, 0b1001_1010, 0b1001_1010)]
    #[case(0b0001, 0b1001_1010, 0b0000_0010)]
    #[case(0b111, 0b0100_1001, 0b0100_1001)]
    #[case(0b101, 0b0100_1001, 0b0100_0001)]
    #[case(0xFFFF, 0x5555_5555, 0x5555_5555)]
    #[case(0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF)]
    #[case(0x1234, 0, 0)]
    fn expands_into_mask(#[case] value: u32, #[case] mask: u32, #[case] expected: u32) {
        let expander = PortableExpandMask::new(mask);
        assert_eq!(
            expander.expand(value),
            expected,
            "mask {mask:#b}, value {value:#b}"
        );
    }

    #[test]
    fn matches_reference_for_generated_masks() {
        for &width in SAMPLE_EXTENTS {
            for &height in &SAMPLE_EXTENTS[..12] {
                let Some(masks) = SwizzleMasks::try_new(width, height, 3) else {
                    continue;
                };

                for mask in [masks.x, masks.y, masks.z] {
                    let expander = PortableExpandMask::new(mask);
                    for value in sample_values(mask) {
                        assert_eq!(
                            expander.expand(value),
                            reference_expand(value, mask),
                            "mask {mask:#034b}, value {value:#x}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn matches_reference_for_sparse_masks() {
        // Masks the generator never produces, but the algorithm should still handle.
        for mask in [0x8000_0001, 0xF0F0_F0F0, 0x0123_4567, 0xFFFF_0000, 0x8421_8421] {
            let expander = PortableExpandMask::new(mask);
            for value in sample_values(mask) {
                assert_eq!(expander.expand(value), reference_expand(value, mask));
            }
        }
    }

    #[test]
    fn empty_mask_has_no_moves() {
        let expander = PortableExpandMask::new(0);
        assert_eq!(expander.mask(), 0);
        assert_eq!(expander.moves(), &[0; 5]);
        assert_eq!(expander.expand(u32::MAX), 0);
    }

    #[test]
    fn moves_shift_each_bit_into_place() {
        // Value bit 0 moves 1 to bit 1, bits 1-2 move 2 to bits 3-4, bit 3 moves 4 to bit 7.
        let expander = PortableExpandMask::new(0b1001_1010);
        assert_eq!(expander.moves(), &[0b10, 0b1_1000, 0b1000_0000, 0, 0]);
    }

    #[test]
    fn contiguous_mask_needs_no_moves() {
        let expander = PortableExpandMask::new(0x0000_FFFF);
        assert_eq!(expander.moves(), &[0; 5]);
        assert_eq!(expander.expand(0xABCD_1234), 0x1234);
    }
}
