use byte_ring::HeapBuffer;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const CHUNK: usize = 4096;

fn bench_transfers(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfers");
    group.throughput(Throughput::Bytes(CHUNK as u64));

    group.bench_function("write_read_4k", |b| {
        let mut ring = HeapBuffer::new(64 * 1024);
        let src = [0x5au8; CHUNK];
        let mut dst = [0u8; CHUNK];
        b.iter(|| {
            ring.write(black_box(&src));
            black_box(ring.read(&mut dst));
        })
    });

    group.bench_function("write_read_4k_wrapped", |b| {
        let mut ring = HeapBuffer::new(64 * 1024);
        // One resident byte keeps the buffer from ever resetting to the
        // region start, so the cursors sweep and wrap continuously.
        ring.write(&[0]);
        let src = [0x5au8; CHUNK];
        let mut dst = [0u8; CHUNK];
        b.iter(|| {
            ring.write(black_box(&src));
            black_box(ring.read(&mut dst));
        })
    });

    group.bench_function("peek_discard_4k", |b| {
        let mut ring = HeapBuffer::new(64 * 1024);
        let src = [0x5au8; CHUNK];
        let mut dst = [0u8; CHUNK];
        b.iter(|| {
            ring.write(black_box(&src));
            black_box(ring.peek(&mut dst));
            ring.discard(CHUNK);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_transfers);
criterion_main!(benches);
