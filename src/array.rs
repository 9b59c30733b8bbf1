use crate::{RingBuffer, Storage};

impl<const N: usize> crate::sealed::StorageBase for [u8; N] {}

impl<const N: usize> Storage for [u8; N] {
    fn len(&self) -> usize {
        N
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

/// A ring buffer backed by an owned array `[u8; N]`.
///
/// Useful when the buffer should carry its own region rather than borrow
/// one, e.g. inside a larger struct placed on the stack or in static memory.
/// This implementation is used when the `hybrid-array` feature is
/// **disabled**.
pub type StackBuffer<const N: usize> = RingBuffer<[u8; N]>;

impl<const N: usize> StackBuffer<N> {
    /// Creates a new, empty buffer with capacity `N`.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use byte_ring::StackBuffer;
    ///
    /// let buf: StackBuffer<128> = StackBuffer::new();
    /// assert_eq!(buf.capacity(), 128);
    /// assert_eq!(buf.remaining_mut(), 128);
    /// ```
    pub fn new() -> Self {
        assert!(N > 0);
        Self::with_storage([0u8; N])
    }
}
