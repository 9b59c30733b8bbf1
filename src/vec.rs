use alloc::vec;
use alloc::vec::Vec;

use crate::{RingBuffer, Storage};

impl crate::sealed::StorageBase for Vec<u8> {}

impl Storage for Vec<u8> {
    fn len(&self) -> usize {
        self.len()
    }

    fn as_slice(&self) -> &[u8] {
        self.as_slice()
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }

    fn split_at(&self, offset: usize) -> (&[u8], &[u8]) {
        self.as_slice().split_at(offset)
    }

    fn split_at_mut(&mut self, offset: usize) -> (&mut [u8], &mut [u8]) {
        self.as_mut_slice().split_at_mut(offset)
    }
}

/// A ring buffer backed by a heap-allocated `Vec<u8>`.
///
/// The allocation happens once at construction; the engine itself never
/// allocates afterwards. Requires the `alloc` feature (enabled by default).
pub type HeapBuffer = RingBuffer<Vec<u8>>;

impl HeapBuffer {
    /// Creates a new, empty buffer with the specified capacity.
    ///
    /// This allocates a `Vec` of `capacity` bytes filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use byte_ring::HeapBuffer;
    ///
    /// let buf = HeapBuffer::new(1024);
    /// assert_eq!(buf.capacity(), 1024);
    /// ```
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0);
        Self::with_storage(vec![0u8; capacity])
    }
}

impl From<Vec<u8>> for HeapBuffer {
    /// Reuses an existing `Vec<u8>` as backing storage.
    ///
    /// The vector's length (not its spare capacity) becomes the buffer
    /// capacity; its existing contents are treated as free space.
    fn from(value: Vec<u8>) -> Self {
        assert!(!value.is_empty());
        Self::with_storage(value)
    }
}
