use algebra::{BufferMatrix, FermatRing, NttDriver, Radix2, UniformRingSampler};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::thread_rng;
use rand_distr::Distribution;

pub fn criterion_benchmark(c: &mut Criterion) {
    let fermat = FermatRing::<u32>::new(4);
    let ring = fermat.as_ring();
    let n = 256;
    let row_len = 1024;

    let w = ring.get_nth_root(n as u32);
    let driver = Radix2::new(ring, n, w).unwrap();

    let sampler = UniformRingSampler::new(ring);
    let mut rng = thread_rng();
    let mut input = BufferMatrix::new(n, row_len);
    for i in 0..n {
        let row: Vec<u32> = sampler.sample_iter(&mut rng).take(row_len).collect();
        input.copy(i, &row);
    }
    let mut output = BufferMatrix::new(n, row_len);

    c.bench_function(&format!("fft {n}x{row_len}"), |b| {
        b.iter(|| driver.fft(&mut output, &input))
    });

    c.bench_function(&format!("ifft {n}x{row_len}"), |b| {
        b.iter(|| driver.ifft(&mut output, &input))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
