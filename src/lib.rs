#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]
//! # byte-ring
//!
//! Fixed-capacity ring buffers over caller-supplied byte regions.
//!
//! A simple, predictable ring buffer (circular buffer) adapter: it borrows a
//! contiguous byte region from the caller and treats it as a FIFO byte
//! channel. The engine itself never allocates, blocks, or spins, which makes
//! it suitable for embedded, real-time, and latency-sensitive code where the
//! caller controls memory layout (static, stack, or pool-allocated).
//!
//! ## Quick Start
//!
//! Choose your storage strategy:
//!
//! - **[`SliceBuffer`]**: Adapts a borrowed `&mut [u8]` region. The primary
//!   form; the borrow ties the buffer's validity to the region's validity.
//! - **[`StackBuffer`]**: Backed by an owned array. Best for fixed, small
//!   sizes where the buffer should be self-contained.
//! - **[`HeapBuffer`]**: Backed by a `Vec<u8>`, allocated once at
//!   construction. Requires the `alloc` feature.
//!
//! ```rust
//! use byte_ring::SliceBuffer;
//!
//! // Adapt a caller-owned region into a ring buffer.
//! let mut region = [0u8; 1024];
//! let mut ring = SliceBuffer::new(&mut region);
//!
//! assert_eq!(ring.write(b"foo"), 3);
//!
//! let mut out = [0u8; 3];
//! assert_eq!(ring.read(&mut out), 3);
//! assert_eq!(&out, b"foo");
//! ```
//!
//! Every data-moving operation returns the number of bytes actually
//! transferred, which may be less than requested when the buffer runs out of
//! room or content. Short transfers are the normal backpressure signal, not
//! an error; call again once more room or data is known to be available.
//!
//! The buffer is single-threaded by contract: it holds no locks and performs
//! no synchronization. Serializing access is the embedding system's
//! responsibility.
//!
//! ## Feature Flags
//!
//! - **`alloc`** *(default)*: Enables [`HeapBuffer`] and `Vec` support.
//! - **`buf-trait`**: Implements [`bytes::Buf`] and [`bytes::BufMut`] traits.
//! - **`zeroize`**: Clears memory on drop via the [`zeroize`] crate.
//! - **`hybrid-array`**: Enables `hybrid-array` support for [`StackBuffer`],
//!   allowing sizes to be defined via types (e.g., `U1024`).

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod error;
mod slice;
pub use error::InvalidRegionError;
pub use slice::SliceBuffer;

#[cfg(not(feature = "hybrid-array"))]
mod array;
#[cfg(not(feature = "hybrid-array"))]
pub use array::StackBuffer;

#[cfg(feature = "hybrid-array")]
mod hybrid_array;
#[cfg(feature = "hybrid-array")]
pub use hybrid_array::ArraySize;
#[cfg(feature = "hybrid-array")]
pub use hybrid_array::StackBuffer;

#[cfg(feature = "alloc")]
mod vec;
#[cfg(feature = "alloc")]
pub use vec::HeapBuffer;

use core::fmt;

#[cfg(feature = "buf-trait")]
use bytes::buf::UninitSlice;
#[cfg(feature = "buf-trait")]
use bytes::{Buf, BufMut};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

#[doc(hidden)]
mod sealed {
    pub trait StorageBase: Send {}
}

#[doc(hidden)]
/// Abstract storage backend for the ring buffer.
///
/// This trait is sealed and cannot be implemented by downstream crates.
pub trait Storage: sealed::StorageBase {
    fn len(&self) -> usize;
    fn as_slice(&self) -> &[u8];
    fn as_mut_slice(&mut self) -> &mut [u8];
    fn split_at(&self, offset: usize) -> (&[u8], &[u8]);
    fn split_at_mut(&mut self, offset: usize) -> (&mut [u8], &mut [u8]);
}

/// The core ring buffer engine, generic over storage `S`.
///
/// Users should instantiate this via [`SliceBuffer`], [`StackBuffer`] or
/// [`HeapBuffer`].
///
/// Two cursors index the region: `read` marks the next byte to hand out,
/// `write` the next byte to fill. Since equal cursors cannot by themselves
/// distinguish an empty buffer from a full one, the two degenerate states get
/// reserved sentinel encodings and the cursors are otherwise never allowed to
/// coincide:
///
/// - empty: `read == capacity` (and `write == 0`)
/// - full: `write == capacity` (`read` anywhere in `0..capacity`)
/// - partial: `read != write`, both in `0..capacity`
pub struct RingBuffer<S: Storage> {
    bytes: S,
    read: usize,
    write: usize,
}

impl<S: Storage> RingBuffer<S> {
    fn with_storage(bytes: S) -> Self {
        let capacity = bytes.len();
        let buf = Self {
            bytes,
            read: capacity,
            write: 0,
        };
        buf.debug_validate();
        buf
    }

    /// Checks the cursor invariants. Debug/test builds only.
    #[inline]
    fn debug_validate(&self) {
        let capacity = self.bytes.len();
        debug_assert!(capacity > 0, "zero-capacity region");
        debug_assert!(
            self.read < capacity || (self.read == capacity && self.write == 0),
            "read cursor out of bounds"
        );
        debug_assert!(self.write <= capacity, "write cursor out of bounds");
        debug_assert!(
            self.read != self.write,
            "cursors may only coincide through the empty encoding"
        );
    }

    /// Returns the total capacity of the buffer.
    ///
    /// This is the maximum number of bytes the buffer can hold at once.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer contains no readable bytes.
    pub fn is_empty(&self) -> bool {
        self.read == self.bytes.len()
    }

    /// Returns `true` if the buffer has no space for writing.
    pub fn is_full(&self) -> bool {
        self.write == self.bytes.len()
    }

    /// Returns the number of bytes currently available to read.
    ///
    /// `remaining() + remaining_mut()` always equals
    /// [`capacity`](Self::capacity).
    pub fn remaining(&self) -> usize {
        self.debug_validate();
        let capacity = self.bytes.len();
        if self.is_full() {
            capacity
        } else if self.read > self.write {
            // Wrapped. Reordered so the sum never exceeds `capacity`.
            capacity - self.read + self.write
        } else {
            self.write - self.read
        }
    }

    /// Returns the number of bytes available for writing.
    pub fn remaining_mut(&self) -> usize {
        self.debug_validate();
        let capacity = self.bytes.len();
        if self.is_full() {
            0
        } else if self.read < self.write {
            capacity - self.write + self.read
        } else {
            self.read - self.write
        }
    }

    /// Copies bytes from `src` into the buffer, advancing the write cursor.
    ///
    /// At most [`remaining_mut()`](Self::remaining_mut) bytes are copied.
    /// Returns the number of bytes actually written; a short count means the
    /// buffer filled up.
    ///
    /// # Examples
    ///
    /// ```
    /// use byte_ring::SliceBuffer;
    ///
    /// let mut region = [0u8; 4];
    /// let mut ring = SliceBuffer::new(&mut region);
    ///
    /// assert_eq!(ring.write(b"abcdef"), 4);
    /// assert!(ring.is_full());
    /// assert_eq!(ring.write(b"g"), 0);
    /// ```
    pub fn write(&mut self, src: &[u8]) -> usize {
        self.fill(Some(src), src.len())
    }

    /// Copies bytes out of the buffer into `dst`, advancing the read cursor.
    ///
    /// At most [`remaining()`](Self::remaining) bytes are copied. Returns the
    /// number of bytes actually read; bytes of `dst` past that count are left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use byte_ring::SliceBuffer;
    ///
    /// let mut region = [0u8; 8];
    /// let mut ring = SliceBuffer::new(&mut region);
    /// ring.write(b"hi");
    ///
    /// let mut out = [0u8; 8];
    /// assert_eq!(ring.read(&mut out), 2);
    /// assert_eq!(&out[..2], b"hi");
    /// assert!(ring.is_empty());
    /// ```
    pub fn read(&mut self, dst: &mut [u8]) -> usize {
        self.debug_validate();
        let count = dst.len();
        let (mut read, mut write) = (self.read, self.write);
        let n = Self::drain(self.bytes.as_slice(), &mut read, &mut write, Some(dst), count);
        self.read = read;
        self.write = write;
        self.debug_validate();
        n
    }

    /// Drops up to `count` bytes from the front of the buffer.
    ///
    /// Identical to [`read`](Self::read) except that the bytes are skipped
    /// rather than copied out. Returns the number of bytes discarded.
    pub fn discard(&mut self, count: usize) -> usize {
        self.debug_validate();
        let (mut read, mut write) = (self.read, self.write);
        let n = Self::drain(self.bytes.as_slice(), &mut read, &mut write, None, count);
        self.read = read;
        self.write = write;
        self.debug_validate();
        n
    }

    /// Copies bytes into `dst` without consuming them.
    ///
    /// Runs the read traversal against snapshots of the cursors, so the
    /// buffer state is left untouched.
    pub fn peek(&self, dst: &mut [u8]) -> usize {
        self.debug_validate();
        let count = dst.len();
        let (mut read, mut write) = (self.read, self.write);
        Self::drain(self.bytes.as_slice(), &mut read, &mut write, Some(dst), count)
    }

    /// Copies bytes into `dst` without consuming them, starting `offset`
    /// bytes past the current read position.
    ///
    /// The offset is relative to the front of the buffered data, not an
    /// absolute region index. If fewer than `offset` bytes are buffered the
    /// call peeks nothing and returns 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use byte_ring::SliceBuffer;
    ///
    /// let mut region = [0u8; 8];
    /// let mut ring = SliceBuffer::new(&mut region);
    /// ring.write(b"abcdef");
    ///
    /// let mut out = [0u8; 2];
    /// assert_eq!(ring.peek_at(&mut out, 4), 2);
    /// assert_eq!(&out, b"ef");
    /// assert_eq!(ring.remaining(), 6);
    ///
    /// // Unsatisfiable offsets yield nothing.
    /// assert_eq!(ring.peek_at(&mut out, 7), 0);
    /// ```
    pub fn peek_at(&self, dst: &mut [u8], offset: usize) -> usize {
        self.debug_validate();
        let (mut read, mut write) = (self.read, self.write);
        let region = self.bytes.as_slice();
        if Self::drain(region, &mut read, &mut write, None, offset) != offset {
            return 0;
        }
        let count = dst.len();
        Self::drain(region, &mut read, &mut write, Some(dst), count)
    }

    /// Resets the buffer to an empty state in O(1), discarding all buffered
    /// content.
    ///
    /// This only resets the cursors. It does not zero out the underlying
    /// memory unless the `zeroize` feature is enabled and `zeroize()` is
    /// called explicitly.
    pub fn clear(&mut self) {
        self.read = self.bytes.len();
        self.write = 0;
    }

    /// Shared traversal behind `read`, `discard`, `peek` and `peek_at`.
    ///
    /// Transfers up to `count` bytes starting at `*read`, copying into `dst`
    /// when one is given and skipping otherwise, so the consuming and
    /// discarding paths can never diverge in their index arithmetic. The
    /// cursors are passed by reference: the mutating operations hand in their
    /// own fields, the peeking ones hand in snapshots.
    fn drain(
        bytes: &[u8],
        read: &mut usize,
        write: &mut usize,
        mut dst: Option<&mut [u8]>,
        mut count: usize,
    ) -> usize {
        let capacity = bytes.len();
        debug_assert!(
            *read < capacity || (*read == capacity && *write == 0),
            "read cursor out of bounds"
        );
        debug_assert!(*write <= capacity, "write cursor out of bounds");

        if count == 0 || *read == capacity {
            return 0;
        }
        let requested = count;

        if *read > *write || *write == capacity {
            if *write == capacity {
                // Full. Reading frees space; the next write starts exactly
                // where this read begins.
                *write = *read;
            }

            // Transfer up to the end of the region.
            let n = count.min(capacity - *read);
            if let Some(out) = dst.take() {
                let (head, tail) = out.split_at_mut(n);
                head.copy_from_slice(&bytes[*read..*read + n]);
                dst = Some(tail);
            }
            count -= n;
            *read += n;

            // Wrap around unless the buffer just became empty.
            if *read == capacity && *write > 0 {
                *read = 0;
            }
        }

        if *read < *write {
            // Transfer up to the write cursor.
            let n = count.min(*write - *read);
            if let Some(out) = dst {
                out[..n].copy_from_slice(&bytes[*read..*read + n]);
            }
            count -= n;
            *read += n;

            if *read == *write {
                // Drained the last byte; restore the canonical empty encoding.
                *read = capacity;
                *write = 0;
            }
        }

        requested - count
    }

    /// Write-side counterpart of `drain`: advances the write cursor by up to
    /// `count` bytes, copying from `src` when one is given.
    fn fill(&mut self, mut src: Option<&[u8]>, mut count: usize) -> usize {
        self.debug_validate();
        let capacity = self.bytes.len();
        if count == 0 || self.write == capacity {
            return 0;
        }
        let requested = count;
        let mut read = self.read;
        let mut write = self.write;
        let region = self.bytes.as_mut_slice();

        if read < write {
            // Fill up to the end of the region.
            let n = count.min(capacity - write);
            if let Some(data) = src.take() {
                region[write..write + n].copy_from_slice(&data[..n]);
                src = Some(&data[n..]);
            }
            count -= n;
            write += n;

            // Wrap around unless the buffer just became full.
            if write == capacity && read > 0 {
                write = 0;
            }
        }

        if read > write {
            // Fill up to the read cursor.
            let n = count.min(read - write);
            if let Some(data) = src {
                region[write..write + n].copy_from_slice(&data[..n]);
            }
            count -= n;
            write += n;

            if write == read {
                // Buffer full.
                write = capacity;
            }
            if read == capacity {
                // Buffer was empty; the bytes just written start at the
                // beginning of the region, so the next read must too.
                read = 0;
            }
        }

        self.read = read;
        self.write = write;
        self.debug_validate();
        requested - count
    }

    /// Returns a pair of slices covering the readable data.
    ///
    /// Because the data lives in a ring, it may wrap around the end of the
    /// underlying region:
    ///
    /// - If the data is contiguous, the second slice is empty.
    /// - If the data wraps, the first slice runs to the end of the region and
    ///   the second continues from its start.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        self.debug_validate();
        if self.is_empty() {
            return (&[], &[]);
        }

        // When full, the readable span ends where it begins.
        let end = if self.is_full() { self.read } else { self.write };

        if self.read < end {
            (&self.bytes.as_slice()[self.read..end], &[][..])
        } else {
            let (back, front) = self.bytes.split_at(self.read);
            (front, &back[..end])
        }
    }

    /// Returns a pair of mutable slices covering the writable space.
    ///
    /// Like [`as_slices`](Self::as_slices), the free space may be split in
    /// two when it wraps around the end of the region.
    pub fn as_mut_slices(&mut self) -> (&mut [u8], &mut [u8]) {
        self.debug_validate();
        if self.is_full() {
            return (&mut [][..], &mut [][..]);
        }
        if self.is_empty() {
            // Writes into an empty buffer start at the region's beginning.
            return (self.bytes.as_mut_slice(), &mut [][..]);
        }

        if self.read < self.write {
            // Free space runs to the end of the region, then wraps.
            let read = self.read;
            let (back, front) = self.bytes.split_at_mut(self.write);
            (front, &mut back[..read])
        } else {
            let (read, write) = (self.read, self.write);
            (&mut self.bytes.as_mut_slice()[write..read], &mut [][..])
        }
    }

    /// Rotates the buffer contents so the readable data is contiguous.
    ///
    /// Returns a single slice containing all readable data.
    ///
    /// # Performance
    ///
    /// If the data is already contiguous, this is a no-op. Otherwise it
    /// performs a memory rotation (O(N)).
    pub fn make_contiguous(&mut self) -> &[u8] {
        self.debug_validate();
        if self.is_empty() {
            return &[];
        }
        let len = self.remaining();

        if !self.is_full() && self.read < self.write {
            // Already contiguous; nothing to do.
            return &self.bytes.as_slice()[self.read..self.write];
        }

        if self.read > 0 {
            let read = self.read;
            self.bytes.as_mut_slice().rotate_left(read);
            self.read = 0;
        }
        // `len == capacity` restores the full sentinel.
        self.write = len;
        self.debug_validate();
        &self.bytes.as_slice()[..len]
    }
}

impl<S: Storage> fmt::Debug for RingBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("readable", &self.remaining())
            .field("writable", &self.remaining_mut())
            .finish()
    }
}

#[cfg(feature = "zeroize")]
impl<S: Storage> ZeroizeOnDrop for RingBuffer<S> {}

#[cfg(feature = "zeroize")]
impl<S: Storage> Drop for RingBuffer<S> {
    fn drop(&mut self) {
        self.bytes.as_mut_slice().zeroize()
    }
}

#[cfg(feature = "zeroize")]
impl<S: Storage> Zeroize for RingBuffer<S> {
    /// Zeroes out the underlying region and resets the cursors.
    fn zeroize(&mut self) {
        self.bytes.as_mut_slice().zeroize();
        self.clear();
    }
}

#[cfg(feature = "buf-trait")]
impl<S: Storage> Buf for RingBuffer<S> {
    fn remaining(&self) -> usize {
        self.remaining()
    }

    fn chunk(&self) -> &[u8] {
        let (first, second) = self.as_slices();
        if !first.is_empty() { first } else { second }
    }

    fn advance(&mut self, cnt: usize) {
        assert!(
            cnt <= self.remaining(),
            "attempt to advance beyond available data"
        );
        self.discard(cnt);
    }
}

#[cfg(feature = "buf-trait")]
unsafe impl<S: Storage> BufMut for RingBuffer<S> {
    fn remaining_mut(&self) -> usize {
        self.remaining_mut()
    }

    unsafe fn advance_mut(&mut self, cnt: usize) {
        assert!(
            cnt <= self.remaining_mut(),
            "attempt to advance beyond available space"
        );
        // Same cursor arithmetic as `write`, with no source to copy from.
        self.fill(None, cnt);
    }

    fn chunk_mut(&mut self) -> &mut UninitSlice {
        let (first, second) = self.as_mut_slices();
        let slice = if !first.is_empty() { first } else { second };

        UninitSlice::new(slice)
    }
}
