#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(test)]
pub(crate) mod test_prelude;

pub mod cpu_detect;
pub mod expand;
pub mod masks;
pub mod swizzle;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub use expand::Bmi2ExpandMask;
pub use expand::{AxisExpanders, BitExpander, PortableExpandMask};
pub use masks::SwizzleMasks;
pub use swizzle::{
    swizzle_box, swizzle_box_with_expanders, swizzle_box_with_masks, swizzle_rect, unswizzle_box,
    unswizzle_box_with_expanders, unswizzle_box_with_masks, unswizzle_rect,
};
