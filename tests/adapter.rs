//! Conformance tests driving a `SliceBuffer` over a caller-owned region,
//! sweeping every write/read split around the capacity boundary.

use byte_ring::SliceBuffer;

const CAPACITY: usize = 100;
const EXTRA: usize = 3;

fn check_state(ring: &SliceBuffer<'_>, empty: bool, full: bool, readable: usize) {
    assert_eq!(ring.is_empty(), empty);
    assert_eq!(ring.is_full(), full);
    assert_eq!(ring.remaining(), readable);
    assert_eq!(ring.remaining_mut(), CAPACITY - readable);
}

/// `len` consecutive byte values starting at `first`, wrapping mod 256.
fn pattern(len: usize, first: u8) -> Vec<u8> {
    (0..len).map(|i| first.wrapping_add(i as u8)).collect()
}

#[test]
fn starts_empty() {
    let mut region = [0u8; CAPACITY];
    let ring = SliceBuffer::new(&mut region);
    check_state(&ring, true, false, 0);
}

#[test]
fn reads_from_empty_return_zero() {
    let mut region = [0u8; CAPACITY];
    let mut ring = SliceBuffer::new(&mut region);

    for i in 0..=CAPACITY + EXTRA {
        let mut dst = vec![0xffu8; i];
        assert_eq!(ring.read(&mut dst), 0);
        assert!(dst.iter().all(|&b| b == 0xff));
        check_state(&ring, true, false, 0);
    }
}

#[test]
fn write_read_clear_grid() {
    let mut region = [0u8; CAPACITY];
    let mut ring = SliceBuffer::new(&mut region);

    for i in 0..CAPACITY + EXTRA {
        for j in 0..CAPACITY + EXTRA {
            let expected_write = i.min(CAPACITY);
            assert_eq!(ring.write(&pattern(i, 0)), expected_write);
            check_state(
                &ring,
                expected_write == 0,
                expected_write == CAPACITY,
                expected_write,
            );

            let expected_read = j.min(expected_write);
            let mut dst = vec![0xffu8; j];
            assert_eq!(ring.read(&mut dst), expected_read);
            assert_eq!(&dst[..expected_read], &pattern(expected_read, 0)[..]);
            assert!(dst[expected_read..].iter().all(|&b| b == 0xff));

            let left = expected_write - expected_read;
            check_state(&ring, left == 0, left == CAPACITY, left);

            ring.clear();
            check_state(&ring, true, false, 0);
        }
    }
}

#[test]
fn discard_grid() {
    let mut region = [0u8; CAPACITY];
    let mut ring = SliceBuffer::new(&mut region);

    for i in 0..CAPACITY + EXTRA {
        for j in 0..CAPACITY + EXTRA {
            let expected_write = i.min(CAPACITY);
            assert_eq!(ring.write(&pattern(i, 0)), expected_write);

            let expected_discard = j.min(expected_write);
            assert_eq!(ring.discard(j), expected_discard);

            let left = expected_write - expected_discard;
            check_state(&ring, left == 0, left == CAPACITY, left);

            ring.clear();
            check_state(&ring, true, false, 0);
        }
    }
}

#[test]
fn peek_grid() {
    let mut region = [0u8; CAPACITY];
    let mut ring = SliceBuffer::new(&mut region);

    for i in 0..CAPACITY + EXTRA {
        for j in 0..CAPACITY + EXTRA {
            let expected_write = i.min(CAPACITY);
            assert_eq!(ring.write(&pattern(i, 0)), expected_write);

            // Peeking never mutates the state.
            let expected_peek = j.min(expected_write);
            let mut dst = vec![0xffu8; j];
            assert_eq!(ring.peek(&mut dst), expected_peek);
            assert_eq!(&dst[..expected_peek], &pattern(expected_peek, 0)[..]);
            assert!(dst[expected_peek..].iter().all(|&b| b == 0xff));
            check_state(
                &ring,
                expected_write == 0,
                expected_write == CAPACITY,
                expected_write,
            );

            // A peek at offset 0 is a plain peek.
            let mut dst = vec![0xffu8; j];
            assert_eq!(ring.peek_at(&mut dst, 0), expected_peek);
            assert_eq!(&dst[..expected_peek], &pattern(expected_peek, 0)[..]);

            // Peek the tail of the buffered data.
            let offset = if j < expected_write {
                expected_write - j
            } else {
                0
            };
            let mut dst = vec![0xffu8; j];
            assert_eq!(ring.peek_at(&mut dst, offset), expected_peek);
            assert_eq!(
                &dst[..expected_peek],
                &pattern(expected_peek, offset as u8)[..]
            );
            assert!(dst[expected_peek..].iter().all(|&b| b == 0xff));
            check_state(
                &ring,
                expected_write == 0,
                expected_write == CAPACITY,
                expected_write,
            );

            ring.clear();
            check_state(&ring, true, false, 0);
        }
    }
}

#[test]
fn peek_at_requires_full_offset() {
    let mut region = [0u8; CAPACITY];
    let mut ring = SliceBuffer::new(&mut region);
    ring.write(&pattern(10, 0));

    let mut dst = [0xffu8; 4];
    // Offset beyond the buffered data peeks nothing at all.
    assert_eq!(ring.peek_at(&mut dst, 11), 0);
    assert_eq!(dst, [0xff; 4]);
    // Offset of exactly the buffered count lands on an empty snapshot.
    assert_eq!(ring.peek_at(&mut dst, 10), 0);
    check_state(&ring, false, false, 10);
}

#[test]
fn interleaved_transfers_preserve_order() {
    let mut region = [0u8; CAPACITY];
    let mut ring = SliceBuffer::new(&mut region);

    // 4 writes, 1 read, 3 writes, 2 reads, 2 writes, 3 reads, 1 write,
    // 4 reads: ten chunks in, ten chunks out, with at most six resident at
    // any time. Chunk sizes up to CAPACITY / 6 keep the buffer from
    // saturating while the cursors sweep and wrap repeatedly.
    let schedule: &[(usize, usize)] = &[(4, 1), (3, 2), (2, 3), (1, 4)];

    for chunk in 0..=CAPACITY / 6 {
        let mut produced: u8 = 0;
        let mut consumed: u8 = 0;
        let mut resident = 0usize;

        for &(writes, reads) in schedule {
            for _ in 0..writes {
                assert_eq!(ring.write(&pattern(chunk, produced)), chunk);
                produced = produced.wrapping_add(chunk as u8);
                resident += chunk;
                check_state(&ring, resident == 0, false, resident);
            }
            for _ in 0..reads {
                let mut dst = vec![0u8; chunk];
                assert_eq!(ring.read(&mut dst), chunk);
                assert_eq!(dst, pattern(chunk, consumed));
                consumed = consumed.wrapping_add(chunk as u8);
                resident -= chunk;
                check_state(&ring, resident == 0, false, resident);
            }
        }
        assert!(ring.is_empty());
    }
}

#[test]
fn fill_drain_wrap_cycle() {
    let mut region = [0u8; CAPACITY];
    let mut ring = SliceBuffer::new(&mut region);

    assert_eq!(ring.write(&pattern(100, 0)), 100);
    assert!(ring.is_full());
    assert_eq!(ring.remaining_mut(), 0);

    let mut dst = [0u8; 30];
    assert_eq!(ring.read(&mut dst), 30);
    assert_eq!(&dst[..], &pattern(30, 0)[..]);
    assert_eq!(ring.remaining(), 70);
    assert_eq!(ring.remaining_mut(), 30);

    // This write wraps around the end of the region.
    assert_eq!(ring.write(&pattern(30, 100)), 30);
    assert!(ring.is_full());

    // Everything comes back out in logical order.
    let mut dst = [0u8; 100];
    assert_eq!(ring.read(&mut dst), 100);
    assert_eq!(&dst[..70], &pattern(70, 30)[..]);
    assert_eq!(&dst[70..], &pattern(30, 100)[..]);
    check_state(&ring, true, false, 0);
}

#[test]
fn zero_byte_write_is_a_no_op() {
    let mut region = [0u8; 10];
    let mut ring = SliceBuffer::new(&mut region);
    assert_eq!(ring.write(&[]), 0);
    assert!(ring.is_empty());
    assert_eq!(ring.remaining_mut(), 10);
}

#[test]
fn discard_more_than_available() {
    let mut region = [0u8; 5];
    let mut ring = SliceBuffer::new(&mut region);
    assert_eq!(ring.write(b"abc"), 3);
    assert_eq!(ring.discard(5), 3);
    assert!(ring.is_empty());
    assert_eq!(ring.remaining_mut(), 5);
}
