//! Helpers for CPU feature detection without using std.
//!
//! This module provides CPU feature detection using the `cpufeatures` crate. These functions
//! decide whether the `PDEP` based swizzle routines can be safely executed on the current CPU.
//!
//! The functions are minimal overhead, they have an init that's called once, and every subsequent
//! call simply loads and compares a bool.

/// Checks if the CPU supports BMI2 (Bit Manipulation Instruction Set 2) instructions.
///
/// BMI2 provides `PDEP`, which deposits the bits of a coordinate into an axis mask in a single
/// instruction.
///
/// # Returns
/// `true` if the CPU supports BMI2 instructions, `false` otherwise.
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn has_bmi2() -> bool {
    cpufeatures::new!(cpuid_bmi2, "bmi2");
    cpuid_bmi2::get()
}

/// Checks if the `PDEP` based routines should be used.
///
/// With the `no-runtime-cpu-detection` feature this only reflects the target features the crate
/// was compiled with (e.g. `-C target-cpu=native`), otherwise it queries the CPU via [`has_bmi2`].
#[inline]
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub fn bmi2_enabled() -> bool {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        has_bmi2()
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        cfg!(target_feature = "bmi2")
    }
}
