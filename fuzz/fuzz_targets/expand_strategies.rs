#![no_main]

// Checks every bit expansion strategy against a bit by bit deposit, for masks produced by the
// mask generator.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_swizzle::{BitExpander, PortableExpandMask, SwizzleMasks};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct ExpandInput {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub value: u32,
}

fn reference_expand(value: u32, mask: u32) -> u32 {
    let mut result = 0;
    let mut remaining = mask;
    let mut source = value;
    while remaining != 0 {
        let lowest = remaining & remaining.wrapping_neg();
        if source & 1 != 0 {
            result |= lowest;
        }
        source >>= 1;
        remaining &= remaining - 1;
    }
    result
}

fuzz_target!(|input: ExpandInput| {
    let (width, height, depth) = (input.width.max(1), input.height.max(1), input.depth.max(1));
    let Some(masks) = SwizzleMasks::try_new(width, height, depth) else {
        return;
    };

    for mask in [masks.x, masks.y, masks.z] {
        let expected = reference_expand(input.value, mask);
        assert_eq!(PortableExpandMask::new(mask).expand(input.value), expected);

        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        if let Some(bmi2) = texture_swizzle::Bmi2ExpandMask::new(mask) {
            assert_eq!(bmi2.expand(input.value), expected);
        }
    }
});
