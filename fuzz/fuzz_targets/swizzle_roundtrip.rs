#![no_main]

// Swizzles arbitrary boxes stored with arbitrary padding, and checks that unswizzling restores
// every texel without touching the padding.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texture_swizzle_api::{swizzle_box_slice, unswizzle_box_slice, SwizzleGeometry};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct BoxInput {
    pub width: u8,
    pub height: u8,
    pub depth: u8,
    pub row_padding: u8,
    pub slice_padding: u8,
    pub bytes_per_pixel: u8,
    pub seed: u8,
}

fuzz_target!(|input: BoxInput| {
    // Keep boxes small enough for the fuzzer to stay fast.
    let width = (input.width % 48) as u32 + 1;
    let height = (input.height % 48) as u32 + 1;
    let depth = (input.depth % 8) as u32 + 1;
    let bytes_per_pixel = (input.bytes_per_pixel % 16) as usize + 1;

    let row_pitch = width as usize * bytes_per_pixel + (input.row_padding % 32) as usize;
    let slice_pitch = row_pitch * height as usize + input.slice_padding as usize;
    let geometry = SwizzleGeometry::new_box(
        width,
        height,
        depth,
        row_pitch,
        slice_pitch,
        bytes_per_pixel,
    );

    let linear_size = geometry.linear_size().expect("small boxes are always valid");
    let linear: Vec<u8> = (0..linear_size)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(input.seed))
        .collect();

    let mut swizzled = vec![0u8; geometry.swizzled_size().unwrap()];
    swizzle_box_slice(&linear, &mut swizzled, &geometry).unwrap();

    let mut restored = vec![!input.seed; linear_size];
    unswizzle_box_slice(&swizzled, &mut restored, &geometry).unwrap();

    for z in 0..depth as usize {
        for y in 0..height as usize {
            let start = z * slice_pitch + y * row_pitch;
            let end = start + width as usize * bytes_per_pixel;
            assert_eq!(
                restored[start..end],
                linear[start..end],
                "Row {y} of slice {z} differs after roundtrip for {geometry:?}"
            );

            let padding_end = (start + row_pitch).min(linear_size);
            assert!(
                restored[end..padding_end].iter().all(|&b| b == !input.seed),
                "Padding after row {y} of slice {z} was written for {geometry:?}"
            );
        }
    }
});
