//! Pure integer helpers: GCDs, trial-division factorization and the code
//! length searches built on top of a factorization.

use num_traits::{One, Zero};

use crate::error::AlgebraError;
use crate::primitive::{Primitive, SignedWide};

/// The greatest common divisor of `a` and `b` by Euclid's algorithm.
pub fn gcd<T: Primitive>(mut a: T, mut b: T) -> T {
    while b != T::ZERO {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// The extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `g = gcd(a, b)` and `s*a + t*b = g`. Runs in
/// the signed double-width companion type so the intermediate products
/// cannot overflow.
pub fn extended_gcd<S: SignedWide>(a: S, b: S) -> (S, S, S) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (S::one(), S::zero());
    let (mut old_t, mut t) = (S::zero(), S::one());

    while !r.is_zero() {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    (old_r, old_s, old_t)
}

/// Prime factorization of `n >= 1` by trial division up to `sqrt(n)`.
///
/// Returns parallel lists of primes (strictly increasing) and exponents;
/// both are empty for `n = 1`.
pub fn factor_prime<T: Primitive>(mut n: T) -> (Vec<T>, Vec<u32>) {
    assert!(n >= T::ONE, "cannot factor zero");

    let mut primes = Vec::new();
    let mut exponents = Vec::new();
    let two = T::as_from(2u32);

    let mut push = |p: T, e: u32| {
        if e > 0 {
            primes.push(p);
            exponents.push(e);
        }
    };

    let mut e = 0;
    while n % two == T::ZERO {
        n = n / two;
        e += 1;
    }
    push(two, e);

    let mut p = T::as_from(3u32);
    while n > T::ONE && p <= n / p {
        let mut e = 0;
        while n % p == T::ZERO {
            n = n / p;
            e += 1;
        }
        push(p, e);
        p = p + two;
    }
    // Whatever survives trial division is prime.
    push(n, (n > T::ONE) as u32);

    (primes, exponents)
}

/// Flattens a factorization: each prime repeated by its exponent,
/// preserving order.
pub fn get_prime_factors<T: Primitive>(primes: &[T], exponents: &[u32]) -> Vec<T> {
    debug_assert_eq!(primes.len(), exponents.len());
    primes
        .iter()
        .zip(exponents)
        .flat_map(|(&p, &e)| std::iter::repeat(p).take(e as usize))
        .collect()
}

/// The proper divisors `n / p` for each distinct prime divisor `p` of `n`.
pub fn get_proper_divisors<T: Primitive>(n: T, primes: &[T]) -> Vec<T> {
    primes
        .iter()
        .filter(|&&p| p != T::ZERO)
        .map(|&p| {
            debug_assert!(n % p == T::ZERO);
            n / p
        })
        .collect()
}

/// The smallest divisor of `order` that is at least `n_min`.
///
/// Divisors come in pairs `(d, order / d)`, so scanning `d` up to
/// `sqrt(order)` sees every candidate.
pub fn get_code_len<T: Primitive>(order: T, n_min: T) -> Result<T, AlgebraError> {
    if n_min > order {
        return Err(no_code_len(n_min));
    }
    if n_min <= T::ONE {
        return Ok(T::ONE);
    }

    let mut best = order;
    let mut d = T::ONE;
    while d <= order / d {
        if order % d == T::ZERO {
            let hi = order / d;
            if d >= n_min && d < best {
                best = d;
            }
            if hi >= n_min && hi < best {
                best = hi;
            }
        }
        d = d + T::ONE;
    }
    Ok(best)
}

/// The smallest product of elements of `factors` (with multiplicity) that
/// is at least `n_min`: the smallest highly composite admissible length.
pub fn get_code_len_high_compo<T: Primitive>(factors: &[T], n_min: T) -> Result<T, AlgebraError> {
    if n_min <= T::ONE {
        return Ok(T::ONE);
    }

    // Compress the flat list back into (prime, count) pairs.
    let mut counted: Vec<(T, u32)> = Vec::new();
    for &f in factors {
        match counted.iter_mut().find(|(p, _)| *p == f) {
            Some((_, c)) => *c += 1,
            None => counted.push((f, 1)),
        }
    }

    let mut best: Option<T> = None;
    search_products(&counted, 0, T::ONE, n_min, &mut best);
    best.ok_or_else(|| no_code_len(n_min))
}

fn search_products<T: Primitive>(
    counted: &[(T, u32)],
    index: usize,
    product: T,
    n_min: T,
    best: &mut Option<T>,
) {
    if product >= n_min {
        if best.map_or(true, |b| product < b) {
            *best = Some(product);
        }
        // Larger products cannot improve on this candidate.
        return;
    }
    if index == counted.len() {
        return;
    }

    let (p, count) = counted[index];
    let mut value = product;
    for used in 0..=count {
        search_products(counted, index + 1, value, n_min, best);
        if used < count {
            if value > T::MAX / p {
                break;
            }
            value = value * p;
        }
    }
}

fn no_code_len<T: Primitive>(min: T) -> AlgebraError {
    AlgebraError::NoCodeLength {
        min: min.as_into(),
    }
}
