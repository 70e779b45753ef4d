#[cfg(target_arch = "x86")]
use core::arch::x86::_pdep_u32;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::_pdep_u32;

use super::BitExpander;

/// A mask for the hardware bit deposit (`PDEP`, part of BMI2).
///
/// `PDEP` needs no precomputation, so this is just the mask. It can only be created once the
/// caller knows the CPU supports BMI2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bmi2ExpandMask {
    mask: u32,
}

impl Bmi2ExpandMask {
    /// Creates the expander if the CPU supports BMI2.
    #[inline]
    pub fn new(mask: u32) -> Option<Self> {
        if crate::cpu_detect::bmi2_enabled() {
            // SAFETY: BMI2 support was just checked.
            Some(unsafe { Self::new_unchecked(mask) })
        } else {
            None
        }
    }

    /// Creates the expander without checking for BMI2 support.
    ///
    /// # Safety
    ///
    /// The CPU must support BMI2.
    #[inline(always)]
    pub const unsafe fn new_unchecked(mask: u32) -> Self {
        Self { mask }
    }
}

impl BitExpander for Bmi2ExpandMask {
    #[inline(always)]
    fn mask(&self) -> u32 {
        self.mask
    }

    #[inline(always)]
    fn expand(&self, value: u32) -> u32 {
        // SAFETY: Instances only exist when BMI2 is available, see constructors.
        unsafe { _pdep_u32(value, self.mask) }
    }
}
