//! # Bit Expansion
//!
//! Scatters the low bits of a coordinate into the positions marked by an axis mask, keeping
//! their order. This is the 'deposit' half of a Morton encode:
//!
//! ```text
//! value:  0000abcd
//! mask:   10011010
//! result: a00bc0d0
//! ```
//!
//! Two implementations of [`BitExpander`] exist, and always produce identical results:
//!
//! - [`PortableExpandMask`]: Pure integer arithmetic, works on any CPU.
//! - [`Bmi2ExpandMask`]: A single `PDEP` instruction, x86 CPUs with BMI2 only.

mod portable32;
pub use portable32::PortableExpandMask;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod bmi2;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub use bmi2::Bmi2ExpandMask;

use crate::masks::SwizzleMasks;

/// Deposits the low bits of a value into the set bits of a mask.
pub trait BitExpander {
    /// The mask bits are deposited into.
    fn mask(&self) -> u32;

    /// Scatters the low bits of `value` into the set bits of [`BitExpander::mask`], least
    /// significant first. Bits of `value` beyond `mask.count_ones()` are discarded.
    fn expand(&self, value: u32) -> u32;
}

/// The expanders for all three axes of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisExpanders<E> {
    /// Expander for the X coordinate.
    pub x: E,
    /// Expander for the Y coordinate.
    pub y: E,
    /// Expander for the Z coordinate.
    pub z: E,
}

impl<E: BitExpander> AxisExpanders<E> {
    /// Computes the Morton index of the texel at (`x`, `y`, `z`).
    #[inline(always)]
    pub fn swizzled_index(&self, x: u32, y: u32, z: u32) -> u32 {
        self.x.expand(x) | self.y.expand(y) | self.z.expand(z)
    }
}

impl AxisExpanders<PortableExpandMask> {
    /// Builds software expanders for the given masks.
    #[inline]
    pub const fn portable(masks: &SwizzleMasks) -> Self {
        Self {
            x: PortableExpandMask::new(masks.x),
            y: PortableExpandMask::new(masks.y),
            z: PortableExpandMask::new(masks.z),
        }
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
impl AxisExpanders<Bmi2ExpandMask> {
    /// Builds `PDEP` based expanders for the given masks.
    ///
    /// # Safety
    ///
    /// The CPU must support BMI2.
    #[inline(always)]
    pub const unsafe fn bmi2(masks: &SwizzleMasks) -> Self {
        Self {
            x: Bmi2ExpandMask::new_unchecked(masks.x),
            y: Bmi2ExpandMask::new_unchecked(masks.y),
            z: Bmi2ExpandMask::new_unchecked(masks.z),
        }
    }
}
