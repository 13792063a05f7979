//! Grow-only scratch buffer for composed pixel runs
//!
//! The animation loop composes each dirty patch into one contiguous byte
//! run before handing it to the display driver. Patch sizes vary slightly
//! as the clamp trims edge patches, so the buffer only ever grows: after
//! the first few frames it reaches the worst-case size and no further
//! allocation happens.

use alloc::vec::Vec;

/// Reusable byte buffer that never shrinks
pub struct ScratchBuffer {
    buf: Vec<u8>,
}

impl ScratchBuffer {
    /// Create an empty buffer; no allocation until the first use
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Grow the buffer to hold at least `n` bytes
    ///
    /// Smaller requests leave the buffer alone. New bytes are zeroed.
    pub fn ensure_capacity(&mut self, n: usize) {
        if self.buf.len() < n {
            self.buf.resize(n, 0);
        }
    }

    /// Usable size in bytes
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The first `n` bytes, for composing into
    ///
    /// Call [`ensure_capacity`](Self::ensure_capacity) with `n` first.
    pub fn slice_mut(&mut self, n: usize) -> &mut [u8] {
        &mut self.buf[..n]
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let scratch = ScratchBuffer::new();
        assert_eq!(scratch.capacity(), 0);
    }

    #[test]
    fn test_grows_to_request() {
        let mut scratch = ScratchBuffer::new();
        scratch.ensure_capacity(128);
        assert_eq!(scratch.capacity(), 128);
        assert_eq!(scratch.slice_mut(128).len(), 128);
    }

    #[test]
    fn test_never_shrinks() {
        let mut scratch = ScratchBuffer::new();
        scratch.ensure_capacity(4096);
        scratch.ensure_capacity(64);
        assert_eq!(scratch.capacity(), 4096);
    }

    #[test]
    fn test_reuse_keeps_contents_intact() {
        let mut scratch = ScratchBuffer::new();
        scratch.ensure_capacity(8);
        scratch.slice_mut(8).copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);

        // A smaller request neither clears nor shrinks
        scratch.ensure_capacity(4);
        assert_eq!(scratch.slice_mut(4), &[1, 2, 3, 4]);

        // Growth zeroes only the new tail
        scratch.ensure_capacity(10);
        assert_eq!(scratch.slice_mut(10), &[1, 2, 3, 4, 5, 6, 7, 8, 0, 0]);
    }
}
