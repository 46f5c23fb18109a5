//! Rings over Fermat primes `q = 2^(2^k) + 1`.
//!
//! `q - 1` is a power of two, so every power-of-two transform length is
//! admissible, and reduction after a product needs no division: with
//! `p = lo + hi * 2^m`, `2^m = -1 (mod q)` gives `p = lo - hi (mod q)`.

use std::ops::Deref;

use super::Ring;
use crate::primitive::Primitive;

/// A [`Ring`] specialized for a Fermat prime cardinality.
///
/// Everything but the multiplication (and exponentiation built on it) is
/// inherited unchanged; the behavioral contract is the base ring's.
#[derive(Debug, Clone)]
pub struct FermatRing<T: Primitive> {
    base: Ring<T>,
    shift: u32,
}

impl<T: Primitive> FermatRing<T> {
    /// Builds the ring for `q = 2^(2^k) + 1`.
    ///
    /// # Panics
    ///
    /// Panics when `k > 4` (no larger Fermat prime is known) or when `q`
    /// does not fit the element type.
    pub fn new(k: u32) -> Self {
        assert!(k <= 4, "2^(2^{k}) + 1 is not a known Fermat prime");
        let shift = 1u32 << k;
        assert!(shift < T::BITS, "Fermat cardinality overflows element type");

        let cardinality = (T::ONE << shift) + T::ONE;
        FermatRing {
            base: Ring::new(cardinality),
            shift,
        }
    }

    /// `(a * b) mod q` by split-and-subtract; no division.
    #[inline]
    pub fn mul(&self, a: T, b: T) -> T {
        debug_assert!(self.base.check(a) && self.base.check(b));

        let minus_one = self.base.cardinality_minus_one();
        // 2^m = -1, so a factor of q-1 is a plain negation.
        if a == minus_one {
            return self.base.neg(b);
        }
        if b == minus_one {
            return self.base.neg(a);
        }

        // Both factors are at most 2^m - 1, so the product fits the
        // element type whenever 2m <= BITS, which new() guarantees.
        let product = a * b;
        let hi = product >> self.shift;
        let lo = product - (hi << self.shift);
        self.base.sub(lo, hi)
    }

    /// `a^e mod q` by square-and-multiply over the fast multiply.
    pub fn exp(&self, base: T, exponent: T) -> T {
        debug_assert!(self.base.check(base));
        let two = T::as_from(2u32);

        let mut result = T::ONE;
        let mut base = base;
        let mut exponent = exponent;
        while exponent != T::ZERO {
            if exponent % two == T::ONE {
                result = self.mul(result, base);
            }
            exponent = exponent >> 1;
            if exponent != T::ZERO {
                base = self.mul(base, base);
            }
        }
        result
    }

    /// The inherited generic ring.
    #[inline]
    pub fn as_ring(&self) -> &Ring<T> {
        &self.base
    }
}

impl<T: Primitive> Deref for FermatRing<T> {
    type Target = Ring<T>;

    #[inline]
    fn deref(&self) -> &Ring<T> {
        &self.base
    }
}
