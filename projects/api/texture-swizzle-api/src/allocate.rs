//! Aligned allocation of output buffers.
//!
//! [`allocate_align_64`] hands out uninitialized memory aligned to 64 bytes, which is the cache
//! line size of mainstream x86 and ARM64 processors. The memory is freed when the returned
//! [`RawAlloc`] is dropped.

use core::alloc::{Layout, LayoutError};
use safe_allocator_api::prelude::*;
use safe_allocator_api::RawAlloc;
use thiserror::Error;

/// Allocates data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated, uninitialized data
pub fn allocate_align_64(num_bytes: usize) -> Result<RawAlloc, AllocateError> {
    let layout = Layout::from_size_align(num_bytes, 64)?;
    Ok(RawAlloc::new(layout)?)
}

/// An error that happened in memory allocation within the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocateError {
    /// An error that occurred while creating a layout for allocation.
    #[error("Invalid layout provided. Likely due to `num_bytes` in `allocate_align_64` being larger than isize::MAX. {0}")]
    LayoutError(#[from] LayoutError),

    /// An error that occurred while allocating memory.
    #[error(transparent)]
    AllocationFailed(#[from] AllocError),
}
