#![no_main]

// Compares the swizzled output against a naive per-texel reference that assigns index bits to
// axes one at a time.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_swizzle_api::{swizzle_box_slice, SwizzleGeometry};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct BoxInput {
    pub width: u16,
    pub height: u16,
    pub depth: u8,
    pub bytes_per_pixel: u8,
}

/// Morton index of (x, y, z), dealing out bits round-robin to each axis that still needs one.
fn reference_index(coords: [u32; 3], extents: [u32; 3]) -> u64 {
    let mut index = 0u64;
    let mut out_bit = 0;
    let mut in_bit = 0;
    loop {
        let mut assigned = false;
        for axis in 0..3 {
            if (1u64 << in_bit) < extents[axis] as u64 {
                index |= (((coords[axis] >> in_bit) & 1) as u64) << out_bit;
                out_bit += 1;
                assigned = true;
            }
        }
        if !assigned {
            return index;
        }
        in_bit += 1;
    }
}

fuzz_target!(|input: BoxInput| {
    let width = (input.width % 300) as u32 + 1;
    let height = (input.height % 300) as u32 + 1;
    let depth = (input.depth % 4) as u32 + 1;
    let bytes_per_pixel = (input.bytes_per_pixel % 4) as usize + 1;
    let geometry = SwizzleGeometry::packed(width, height, depth, bytes_per_pixel);

    let linear: Vec<u8> = (0..geometry.linear_size().unwrap())
        .map(|i| (i % 253) as u8)
        .collect();
    let mut swizzled = vec![0u8; geometry.swizzled_size().unwrap()];
    swizzle_box_slice(&linear, &mut swizzled, &geometry).unwrap();

    let extents = [width, height, depth];
    for z in 0..depth {
        for y in 0..height {
            for x in 0..width {
                let linear_ofs = ((z * height + y) * width + x) as usize * bytes_per_pixel;
                let swizzled_ofs =
                    reference_index([x, y, z], extents) as usize * bytes_per_pixel;
                assert_eq!(
                    swizzled[swizzled_ofs..swizzled_ofs + bytes_per_pixel],
                    linear[linear_ofs..linear_ofs + bytes_per_pixel],
                    "Texel ({x}, {y}, {z}) misplaced for {width}x{height}x{depth}"
                );
            }
        }
    }
});
