use core::alloc::Layout;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use safe_allocator_api::RawAlloc;
use texture_swizzle::swizzle::bench::*;
use texture_swizzle::{swizzle_box, unswizzle_box};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
use texture_swizzle::cpu_detect::has_bmi2;

type BoxFn = unsafe fn(*const u8, u32, u32, u32, *mut u8, usize, usize, usize);

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

struct BoxCase {
    name: &'static str,
    width: u32,
    height: u32,
    depth: u32,
    bytes_per_pixel: usize,
}

const CASES: &[BoxCase] = &[
    BoxCase {
        name: "rect_256x256_rgba",
        width: 256,
        height: 256,
        depth: 1,
        bytes_per_pixel: 4,
    },
    BoxCase {
        name: "rect_1000x600_rgba",
        width: 1000,
        height: 600,
        depth: 1,
        bytes_per_pixel: 4,
    },
    BoxCase {
        name: "box_64x64x64_r8",
        width: 64,
        height: 64,
        depth: 64,
        bytes_per_pixel: 1,
    },
    BoxCase {
        name: "box_128x32x16_rgba16f",
        width: 128,
        height: 32,
        depth: 16,
        bytes_per_pixel: 8,
    },
];

fn implementations() -> Vec<(&'static str, BoxFn, BoxFn)> {
    let mut result: Vec<(&'static str, BoxFn, BoxFn)> = vec![
        ("dispatch", swizzle_box, unswizzle_box),
        (
            "portable32",
            portable32_swizzle_box,
            portable32_unswizzle_box,
        ),
    ];

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    if has_bmi2() {
        result.push(("bmi2", bmi2_swizzle_box, bmi2_unswizzle_box));
    }

    result
}

fn criterion_benchmark(c: &mut Criterion) {
    for case in CASES {
        let row_pitch = case.width as usize * case.bytes_per_pixel;
        let slice_pitch = row_pitch * case.height as usize;
        let linear_len = slice_pitch * case.depth as usize;

        // Non power of two extents leave gaps, so size for the worst case.
        let swizzled_len = case.width.next_power_of_two() as usize
            * case.height.next_power_of_two() as usize
            * case.depth.next_power_of_two() as usize
            * case.bytes_per_pixel;

        let mut linear = allocate_align_64(linear_len);
        let mut swizzled = allocate_align_64(swizzled_len);

        // Fill the input with a simple pattern
        unsafe {
            let ptr = linear.as_mut_ptr();
            for i in 0..linear_len {
                *ptr.add(i) = (i % 255) as u8;
            }
        }

        let mut group = c.benchmark_group(format!("Swizzle Box ({})", case.name));
        group.throughput(Throughput::Bytes(linear_len as u64));

        for (name, swizzle_fn, unswizzle_fn) in implementations() {
            group.bench_function(BenchmarkId::new("swizzle", name), |b| {
                b.iter(|| unsafe {
                    swizzle_fn(
                        linear.as_ptr(),
                        case.width,
                        case.height,
                        case.depth,
                        swizzled.as_mut_ptr(),
                        row_pitch,
                        slice_pitch,
                        case.bytes_per_pixel,
                    )
                })
            });

            group.bench_function(BenchmarkId::new("unswizzle", name), |b| {
                b.iter(|| unsafe {
                    unswizzle_fn(
                        swizzled.as_ptr(),
                        case.width,
                        case.height,
                        case.depth,
                        linear.as_mut_ptr(),
                        row_pitch,
                        slice_pitch,
                        case.bytes_per_pixel,
                    )
                })
            });
        }

        group.finish();
    }
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
