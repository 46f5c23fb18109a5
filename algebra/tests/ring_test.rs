use algebra::{sample_nonzero, Ring, UniformRingSampler};
use rand::{thread_rng, Rng};
use rand_distr::Distribution;

type T = u32;
type W = u64;

const P: T = 1_000_000_007;

#[test]
fn ring_axioms_under_random_operands() {
    let ring = Ring::new(P);
    let sampler = UniformRingSampler::new(&ring);
    let mut rng = thread_rng();

    for _ in 0..200 {
        let a = sampler.sample(&mut rng);
        let b = sampler.sample(&mut rng);

        // add / neg
        assert_eq!(ring.add(a, b), ((a as W + b as W) % P as W) as T);
        assert_eq!(ring.add(a, ring.neg(a)), 0);
        assert_eq!(ring.add(a, 0), a);

        // sub(a, b) = add(a, neg(b))
        assert_eq!(ring.sub(a, b), ring.add(a, ring.neg(b)));

        // mul against the double-width reference
        assert_eq!(ring.mul(a, b), ((a as W * b as W) % P as W) as T);

        // inv
        let c = sample_nonzero(&ring, &mut rng);
        assert_eq!(ring.mul(c, ring.inv(c)), 1);
        assert_eq!(ring.div(ring.mul(a, c), c), a);
    }
}

#[test]
fn exp_properties_random() {
    let ring = Ring::new(P);
    let mut rng = thread_rng();

    for _ in 0..50 {
        let a = sample_nonzero(&ring, &mut rng);
        assert_eq!(ring.exp(a, 0), 1);
        assert_eq!(ring.exp(a, 1), a);
        // Fermat: a^(q-1) = 1 for prime q.
        assert_eq!(ring.exp(a, P - 1), 1);

        let e = rng.gen_range(0..2000u32);
        assert_eq!(ring.exp(a, e), ring.exp_naive(a, e));
    }
}

#[test]
fn primitive_root_is_smallest_generator() {
    // Sequential search lands on the classical smallest generators.
    assert_eq!(Ring::new(97u32).primitive_root(), 5);
    assert_eq!(Ring::new(257u32).primitive_root(), 3);
    assert_eq!(Ring::new(65537u32).primitive_root(), 3);
    assert_eq!(Ring::new(P).primitive_root(), 5);
}

#[test]
fn primitive_root_properties() {
    let ring = Ring::new(257u32);
    let g = ring.primitive_root();
    assert!(ring.is_primitive_root(g));
    assert_eq!(ring.get_order(g), 256);

    // 256 = 2^8
    let (primes, exponents) = ring.factorization();
    assert_eq!((primes, exponents), (&[2u32][..], &[8u32][..]));
    assert_eq!(ring.prime_factors(), &[2; 8]);

    for n in [2u32, 4, 8, 16, 256] {
        let w = ring.get_nth_root(n);
        assert_eq!(ring.exp(w, n), 1);
        assert_eq!(ring.get_order(w), n);
    }
}

#[test]
fn goldilocks_order_descent() {
    // q - 1 = 2^32 * 3 * 5 * 17 * 257 * 65537 keeps the factorization
    // working-set busy through several descents.
    let q: u64 = 0xffff_ffff_0000_0001;
    let ring = Ring::new(q);
    assert_eq!(ring.primitive_root(), 7);
    assert_eq!(ring.get_order(7), q - 1);

    let w = ring.get_nth_root(1 << 20);
    assert_eq!(ring.get_order(w), 1 << 20);
}

#[test]
fn omegas_of_257_enumerate_the_group() {
    let ring = Ring::new(257u32);
    let mut omegas = vec![0u32; 256];
    ring.compute_omegas(&mut omegas, ring.primitive_root());

    let mut seen = [false; 257];
    for &w in &omegas {
        assert!(w >= 1 && w < 257);
        assert!(!seen[w as usize], "duplicate power {w}");
        seen[w as usize] = true;
    }
}

#[test]
fn discrete_log_in_257() {
    let ring = Ring::new(257u32);
    // 3^55 = 5, and 55 is the least such exponent.
    assert_eq!(ring.log(3, 5).unwrap(), 55);
    assert_eq!(ring.exp(3, 55), 5);

    let g = ring.primitive_root();
    let mut rng = thread_rng();
    for _ in 0..20 {
        let e = rng.gen_range(1..=256u32);
        assert_eq!(ring.log(g, ring.exp(g, e)).unwrap(), e);
    }
}

#[test]
fn element_widths_agree() {
    let r32 = Ring::new(257u32);
    let r64 = Ring::new(257u64);
    let r128 = Ring::new(257u128);

    assert_eq!(r32.primitive_root() as u128, r128.primitive_root());
    for a in [0u32, 1, 100, 255, 256] {
        for b in [1u32, 3, 128, 256] {
            let m32 = r32.mul(a, b);
            assert_eq!(m32 as u64, r64.mul(a as u64, b as u64));
            assert_eq!(m32 as u128, r128.mul(a as u128, b as u128));
        }
        if a != 0 {
            assert_eq!(r32.inv(a) as u128, r128.inv(a as u128));
        }
    }
}
