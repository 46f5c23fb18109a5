use algebra::{Ring, UniformRingSampler};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::thread_rng;
use rand_distr::Distribution;

pub fn criterion_benchmark(c: &mut Criterion) {
    let ring = Ring::new(0x7fff_ffffu32);
    let len = 4096;

    let sampler = UniformRingSampler::new(&ring);
    let mut rng = thread_rng();
    let src: Vec<u32> = sampler.sample_iter(&mut rng).take(len).collect();
    let mut p: Vec<u32> = sampler.sample_iter(&mut rng).take(len).collect();
    let mut q: Vec<u32> = sampler.sample_iter(&mut rng).take(len).collect();
    let mut dst = vec![0u32; len];

    c.bench_function(&format!("mul_coef_to_buf {len}"), |b| {
        b.iter(|| ring.mul_coef_to_buf(0x1234_5678, &src, &mut dst))
    });

    c.bench_function(&format!("add_two_bufs {len}"), |b| {
        b.iter(|| ring.add_two_bufs(&src, &mut dst))
    });

    c.bench_function(&format!("butterfly_ct {len}"), |b| {
        b.iter(|| ring.butterfly_ct(0x1234_5678, &mut p, &mut q))
    });

    c.bench_function(&format!("butterfly_gs {len}"), |b| {
        b.iter(|| ring.butterfly_gs(0x1234_5678, &mut p, &mut q))
    });

    c.bench_function(&format!("hadamard_mul {len}"), |b| {
        b.iter(|| ring.hadamard_mul(&mut p, &src))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
