//! Rings of integers modulo `q` and their specializations.
//!
//! [`Ring`] is the workhorse: scalar modular arithmetic, discovery of
//! primitive roots, and the buffer-level kernels the NTT drivers run on.
//! [`FermatRing`] specializes moduli of the form `2^(2^k) + 1`;
//! [`Nf4`] packs four such sub-elements into one machine word.

mod fermat;
mod nf4;
mod ops;
mod shoup;
mod simd;

pub use fermat::FermatRing;
pub use nf4::{GroupedValues, Nf4};
pub use shoup::ShoupFactor;
pub use simd::SimdDispatch;

use crate::arith;
use crate::cache::OmegaStore;
use crate::error::AlgebraError;
use crate::primitive::{DoubleWide, Primitive, SignedDoubleWide};

use num_traits::Zero;

/// A ring of integers modulo `q`.
///
/// Immutable once constructed: [`Ring::new`] factors `q - 1`, derives the
/// proper-divisor set and finds a primitive root before the value escapes,
/// so shared references are safe across threads.
///
/// Every scalar operation assumes its element arguments already lie in
/// `[0, q)`; this is a caller invariant, checked with debug assertions.
#[derive(Debug, Clone)]
pub struct Ring<T: Primitive> {
    cardinality: T,
    root: T,
    primes: Vec<T>,
    exponents: Vec<u32>,
    all_prime_factors: Vec<T>,
    proper_divisors: Vec<T>,
    shoup_ready: bool,
}

impl<T: Primitive> Ring<T> {
    /// Builds the ring for cardinality `q`, fully initialized.
    ///
    /// # Panics
    ///
    /// Panics when `q < 2` or when no primitive root exists to be found
    /// (a non-cyclic multiplicative group, i.e. `q` neither prime nor an
    /// admissible prime power). Both are programming errors.
    pub fn new(cardinality: T) -> Self {
        assert!(
            cardinality >= T::as_from(2u32),
            "ring cardinality must be at least 2"
        );

        let order = cardinality - T::ONE;
        let (primes, exponents) = arith::factor_prime(order);
        let all_prime_factors = arith::get_prime_factors(&primes, &exponents);
        let proper_divisors = arith::get_proper_divisors(order, &primes);
        // Shoup's trick needs a spare top bit for its lazy [0, 2q) range.
        let shoup_ready = cardinality >> (T::BITS - 1) == T::ZERO;

        let mut ring = Ring {
            cardinality,
            root: T::ZERO,
            primes,
            exponents,
            all_prime_factors,
            proper_divisors,
            shoup_ready,
        };
        ring.root = ring.find_primitive_root();
        ring
    }

    /// The cardinality `q`.
    #[inline]
    pub fn cardinality(&self) -> T {
        self.cardinality
    }

    /// The multiplicative group order `q - 1`.
    #[inline]
    pub fn cardinality_minus_one(&self) -> T {
        self.cardinality - T::ONE
    }

    /// The cached primitive root of the multiplicative group.
    #[inline]
    pub fn primitive_root(&self) -> T {
        self.root
    }

    /// The prime factorization of `q - 1` as parallel lists.
    #[inline]
    pub fn factorization(&self) -> (&[T], &[u32]) {
        (&self.primes, &self.exponents)
    }

    /// The prime factors of `q - 1`, each repeated by its multiplicity.
    #[inline]
    pub fn prime_factors(&self) -> &[T] {
        &self.all_prime_factors
    }

    pub(crate) fn shoup_ready(&self) -> bool {
        self.shoup_ready
    }

    /// Whether `a` is a canonical ring element.
    #[inline]
    pub fn check(&self, a: T) -> bool {
        a < self.cardinality
    }

    /// `(q - a) mod q`.
    #[inline]
    pub fn neg(&self, a: T) -> T {
        self.sub(T::ZERO, a)
    }

    /// `(a + b) mod q` with a single conditional subtraction.
    #[inline]
    pub fn add(&self, a: T, b: T) -> T {
        debug_assert!(self.check(a) && self.check(b));
        let c = a + b;
        if c >= self.cardinality {
            c - self.cardinality
        } else {
            c
        }
    }

    /// `(a - b) mod q` by branching on `a >= b`.
    #[inline]
    pub fn sub(&self, a: T, b: T) -> T {
        debug_assert!(self.check(a) && self.check(b));
        if a >= b {
            a - b
        } else {
            self.cardinality - (b - a)
        }
    }

    /// `(a * b) mod q` through the double-width accumulator.
    #[inline]
    pub fn mul(&self, a: T, b: T) -> T {
        debug_assert!(self.check(a) && self.check(b));
        a.mul_rem(b, self.cardinality)
    }

    /// The multiplicative inverse of `a`, via the extended GCD in the
    /// signed double-width companion. The result lies in `[0, q)`.
    pub fn inv(&self, a: T) -> T {
        debug_assert!(self.check(a));
        let (_, bezout, _) =
            arith::extended_gcd(a.to_signed(), self.cardinality.to_signed());
        let bezout = if bezout < <T as SignedDoubleWide>::Signed::zero() {
            bezout + self.cardinality.to_signed()
        } else {
            bezout
        };
        T::from_signed(bezout)
    }

    /// `a * inv(b)`.
    #[inline]
    pub fn div(&self, a: T, b: T) -> T {
        self.mul(a, self.inv(b))
    }

    /// `a^e mod q` by square-and-multiply. `exp(a, 0) = 1`.
    pub fn exp(&self, base: T, exponent: T) -> T {
        debug_assert!(self.check(base));
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

    /// `a^e` by repeated multiplication. Reference implementation for
    /// [`Ring::exp`]; linear in `e`.
    pub fn exp_naive(&self, base: T, exponent: T) -> T {
        if exponent == T::ZERO {
            return T::ONE;
        }
        let mut result = base;
        let mut i = T::ONE;
        while i < exponent {
            result = self.mul(result, base);
            i = i + T::ONE;
        }
        result
    }

    /// The discrete logarithm: the smallest `r` in `[1, q)` with
    /// `a^r = b`.
    ///
    /// Brute force; linear in the group order.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoSolution`] when no such `r` exists.
    pub fn log(&self, base: T, value: T) -> Result<T, AlgebraError> {
        debug_assert!(self.check(base));

        let mut power = base;
        let mut r = T::ONE;
        while r < self.cardinality {
            if power == value {
                return Ok(r);
            }
            power = self.mul(power, base);
            r = r + T::ONE;
        }
        Err(AlgebraError::NoSolution)
    }

    /// Whether some `x` satisfies `x^2 = a`.
    ///
    /// Linear scan over the ring; only meaningful for tiny `q` and never
    /// for hot paths.
    pub fn is_quadratic_residue(&self, a: T) -> bool {
        let mut x = T::ZERO;
        while x < self.cardinality {
            if self.mul(x, x) == a {
                return true;
            }
            x = x + T::ONE;
        }
        false
    }

    /// Whether `x` generates the whole multiplicative group.
    ///
    /// `x` is primitive iff `x^d != 1` for every `d` in the cached
    /// proper-divisor set `{(q-1)/p_i}`: an element of order a proper
    /// divisor of `q - 1` would pass `x^((q-1)/p) = 1` for some prime `p`.
    pub fn is_primitive_root(&self, x: T) -> bool {
        self.proper_divisors
            .iter()
            .all(|&d| self.exp(x, d) != T::ONE)
    }

    fn find_primitive_root(&self) -> T {
        let order = self.cardinality_minus_one();
        if order == T::ONE {
            return T::ONE;
        }

        let mut candidate = T::as_from(2u32);
        while candidate <= order {
            if self.is_primitive_root(candidate) {
                return candidate;
            }
            candidate = candidate + T::ONE;
        }
        // The multiplicative group of a finite field is cyclic, so the
        // search can only fall through for an inadmissible cardinality.
        panic!("no primitive root modulo {}", self.cardinality);
    }

    /// The multiplicative order of `x`: the smallest `d >= 1` with
    /// `x^d = 1`.
    pub fn get_order(&self, x: T) -> T {
        if x == T::ZERO || x == T::ONE {
            return T::ONE;
        }

        let mut h = self.cardinality_minus_one();
        let mut primes = self.primes.clone();
        let mut exponents = self.exponents.clone();

        // Strip prime factors from h while x^(h/p) stays 1; drop a prime
        // for good the first time the power misses 1.
        'descend: loop {
            while let Some(p) = primes.pop() {
                let r = exponents.pop().unwrap();
                let y = h / p;
                if self.exp(x, y) != T::ONE {
                    continue;
                }
                if r > 1 {
                    primes.push(p);
                    exponents.push(r - 1);
                }
                h = y;
                continue 'descend;
            }
            break;
        }

        if h == T::ONE {
            self.cardinality_minus_one()
        } else {
            h
        }
    }

    /// An `n`-th root of unity: `g^((q-1)/d)` for `d = gcd(n, q-1)`,
    /// an element of order dividing `n`.
    pub fn get_nth_root(&self, n: T) -> T {
        let order = self.cardinality_minus_one();
        let d = arith::gcd(n, order);
        self.exp(self.root, order / d)
    }

    /// The smallest admissible transform length at least `n`: the
    /// smallest divisor of `q - 1` that is `>= n`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoCodeLength`] when `n` exceeds `q - 1`.
    pub fn get_code_len(&self, n: T) -> Result<T, AlgebraError> {
        arith::get_code_len(self.cardinality_minus_one(), n)
    }

    /// Like [`Ring::get_code_len`] but restricted to highly composite
    /// lengths: products of the prime factors of `q - 1`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoCodeLength`] when no admissible length exists.
    pub fn get_code_len_high_compo(&self, n: T) -> Result<T, AlgebraError> {
        arith::get_code_len_high_compo(&self.all_prime_factors, n)
    }

    /// Writes `omegas[i] = w^i` for the full length of `omegas`.
    pub fn compute_omegas(&self, omegas: &mut [T], w: T) {
        debug_assert!(self.check(w));
        let mut power = T::ONE;
        for slot in omegas.iter_mut() {
            *slot = power;
            power = self.mul(power, w);
        }
    }

    /// Like [`Ring::compute_omegas`], backed by `store`.
    ///
    /// A present cache entry is read and validated; a missing one is
    /// computed and written back. Single producer only: concurrent
    /// writers to the same store must be serialized by the caller.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and cache corruption.
    pub fn compute_omegas_cached<S: OmegaStore<T>>(
        &self,
        store: &S,
        omegas: &mut [T],
        w: T,
    ) -> Result<(), AlgebraError> {
        if let Some(cached) = store.load(w, omegas.len())? {
            omegas.copy_from_slice(&cached);
            return Ok(());
        }
        self.compute_omegas(omegas, w);
        store.save(w, omegas)
    }
}
