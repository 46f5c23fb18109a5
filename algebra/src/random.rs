//! Uniform sampling of ring elements.

use rand::distributions::Distribution;
use rand::Rng;

use crate::primitive::{Primitive, WideningMul, WrappingOps};
use crate::ring::Ring;

/// Uniform sampler over `[0, q)` for a ring's element type.
///
/// Uses widening-multiply rejection instead of `%`, so the distribution
/// is exactly uniform and the hot path is division-free.
#[derive(Debug, Clone, Copy)]
pub struct UniformRingSampler<T> {
    range: T,
    thresh: T,
}

impl<T: Primitive> UniformRingSampler<T> {
    /// A sampler for the elements of `ring`.
    pub fn new(ring: &Ring<T>) -> Self {
        let range = ring.cardinality();
        UniformRingSampler {
            range,
            thresh: range.wrapping_neg() % range,
        }
    }
}

impl<T: Primitive> Distribution<T> for UniformRingSampler<T>
where
    rand::distributions::Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        loop {
            let (lo, hi) = rng.gen::<T>().widening_mul(self.range);
            if lo >= self.thresh {
                return hi;
            }
        }
    }
}

/// A uniform element of the multiplicative group `[1, q)`, by rejection.
pub fn sample_nonzero<T, R>(ring: &Ring<T>, rng: &mut R) -> T
where
    T: Primitive,
    R: Rng + ?Sized,
    rand::distributions::Standard: Distribution<T>,
{
    let sampler = UniformRingSampler::new(ring);
    loop {
        let value = sampler.sample(rng);
        if value != T::ZERO {
            return value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn samples_are_canonical() {
        let ring = Ring::new(97u32);
        let sampler = UniformRingSampler::new(&ring);
        let mut rng = thread_rng();
        for _ in 0..1000 {
            assert!(ring.check(sampler.sample(&mut rng)));
        }
        for _ in 0..100 {
            assert_ne!(sample_nonzero(&ring, &mut rng), 0);
        }
    }

    #[test]
    fn wide_elements_sample() {
        let ring = Ring::new(65537u128);
        let sampler = UniformRingSampler::new(&ring);
        let mut rng = thread_rng();
        for _ in 0..100 {
            assert!(ring.check(sampler.sample(&mut rng)));
        }
    }
}
