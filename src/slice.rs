use crate::{InvalidRegionError, RingBuffer, Storage};

impl crate::sealed::StorageBase for &mut [u8] {}

impl Storage for &mut [u8] {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn as_slice(&self) -> &[u8] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }

    fn split_at(&self, offset: usize) -> (&[u8], &[u8]) {
        (**self).split_at(offset)
    }

    fn split_at_mut(&mut self, offset: usize) -> (&mut [u8], &mut [u8]) {
        (**self).split_at_mut(offset)
    }
}

/// A ring buffer adapting a borrowed, caller-supplied `&mut [u8]` region.
///
/// This is the primary form of the buffer: the caller decides where the
/// memory lives (static, stack, pool) and the adapter never allocates. The
/// borrow ties the buffer's validity to the region's, so the region cannot be
/// reused or freed while the buffer is live.
pub type SliceBuffer<'a> = RingBuffer<&'a mut [u8]>;

impl<'a> SliceBuffer<'a> {
    /// Adapts `region` into an empty ring buffer.
    ///
    /// # Panics
    ///
    /// Panics if `region` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use byte_ring::SliceBuffer;
    ///
    /// let mut region = [0u8; 64];
    /// let buf = SliceBuffer::new(&mut region);
    /// assert_eq!(buf.capacity(), 64);
    /// assert!(buf.is_empty());
    /// ```
    pub fn new(region: &'a mut [u8]) -> Self {
        assert!(!region.is_empty());
        Self::with_storage(region)
    }

    /// Fallible variant of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRegionError`] if `region` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use byte_ring::SliceBuffer;
    ///
    /// assert!(SliceBuffer::try_new(&mut []).is_err());
    /// ```
    pub fn try_new(region: &'a mut [u8]) -> Result<Self, InvalidRegionError> {
        if region.is_empty() {
            return Err(InvalidRegionError::new());
        }
        Ok(Self::with_storage(region))
    }
}
