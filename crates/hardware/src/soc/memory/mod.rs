//! Word-Addressed System Memory.
//!
//! This module implements the storage behind both memories. It provides:
//! 1. **Buffer:** A fixed-capacity `u32` array addressed by word index.
//! 2. **Checked access:** Reads and writes that report out-of-range indices instead of panicking.
//! 3. **Loading:** Bulk population from a loader image with capacity checking.

/// Fixed-capacity word buffer.
pub mod buffer;

pub use self::buffer::WordMemory;
