//! Iterative radix-2 transform over buffer rows.
//!
//! The forward pass is a Gentleman-Sande decimation: natural row order
//! in, bit-reversed row order out. The inverse pass is the mirrored
//! Cooley-Tukey decimation consuming that order, so no explicit
//! permutation is ever performed.
//!
//! ```plain
//! natural order:       0  1  2  3  4  5  6  7
//! bit-reversed order:  0  4  2  6  1  5  3  7
//! ```

use super::NttDriver;
use crate::buffer::BufferMatrix;
use crate::error::AlgebraError;
use crate::primitive::Primitive;
use crate::ring::Ring;

/// A radix-2 driver for power-of-two lengths dividing `q - 1`.
#[derive(Debug)]
pub struct Radix2<'r, T: Primitive> {
    ring: &'r Ring<T>,
    n: usize,
    inv_n: T,
    omegas: Vec<T>,
    inv_omegas: Vec<T>,
}

impl<'r, T: Primitive> Radix2<'r, T> {
    /// Builds a driver of length `n` with `w` as the `n`-th root.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidArgument`] when `n` is not a power of two
    /// or `w` is not an `n`-th root of unity of full order.
    pub fn new(ring: &'r Ring<T>, n: usize, w: T) -> Result<Self, AlgebraError> {
        if n < 2 || !n.is_power_of_two() {
            return Err(AlgebraError::InvalidArgument(format!(
                "transform length {n} is not a power of two"
            )));
        }
        if ring.get_order(w) != T::as_from(n) {
            return Err(AlgebraError::InvalidArgument(format!(
                "omega is not a primitive {n}-th root of unity"
            )));
        }

        let mut omegas = vec![T::ZERO; n];
        ring.compute_omegas(&mut omegas, w);
        let mut inv_omegas = vec![T::ZERO; n];
        ring.compute_omegas(&mut inv_omegas, ring.inv(w));

        Ok(Radix2 {
            ring,
            n,
            inv_n: ring.inv(T::as_from(n)),
            omegas,
            inv_omegas,
        })
    }

    fn copy_rows(output: &mut BufferMatrix<T>, input: &BufferMatrix<T>, n: usize) {
        assert_eq!(input.n(), n, "input row count");
        assert_eq!(output.n(), n, "output row count");
        assert_eq!(input.row_len(), output.row_len(), "row length");
        for i in 0..n {
            output.copy(i, input.get(i).as_slice());
        }
    }

    /// Gentleman-Sande stages: natural in, bit-reversed out.
    fn decimate_forward(&self, rows: &mut BufferMatrix<T>) {
        let n = self.n;
        let mut len = n;
        while len >= 2 {
            let half = len / 2;
            let stride = n / len;
            let mut start = 0;
            while start < n {
                for j in 0..half {
                    let coef = self.omegas[j * stride];
                    let (p, q) = rows.pair_mut(start + j, start + j + half);
                    self.ring.butterfly_gs(coef, p.as_mut_slice(), q.as_mut_slice());
                }
                start += len;
            }
            len = half;
        }
    }

    /// Cooley-Tukey stages with inverse twiddles: bit-reversed in,
    /// natural out.
    fn decimate_inverse(&self, rows: &mut BufferMatrix<T>) {
        let n = self.n;
        let mut len = 2;
        while len <= n {
            let half = len / 2;
            let stride = n / len;
            let mut start = 0;
            while start < n {
                for j in 0..half {
                    let coef = self.inv_omegas[j * stride];
                    let (p, q) = rows.pair_mut(start + j, start + j + half);
                    self.ring.butterfly_ct(coef, p.as_mut_slice(), q.as_mut_slice());
                }
                start += len;
            }
            len *= 2;
        }
    }
}

impl<T: Primitive> NttDriver<T> for Radix2<'_, T> {
    #[inline]
    fn ring(&self) -> &Ring<T> {
        self.ring
    }

    #[inline]
    fn size(&self) -> usize {
        self.n
    }

    #[inline]
    fn inv_size(&self) -> T {
        self.inv_n
    }

    fn fft(&self, output: &mut BufferMatrix<T>, input: &BufferMatrix<T>) {
        Self::copy_rows(output, input, self.n);
        self.decimate_forward(output);
    }

    fn fft_inv(&self, output: &mut BufferMatrix<T>, input: &BufferMatrix<T>) {
        Self::copy_rows(output, input, self.n);
        self.decimate_inverse(output);
    }

    fn ifft(&self, output: &mut BufferMatrix<T>, input: &BufferMatrix<T>) {
        self.fft_inv(output, input);
        for i in 0..self.n {
            self.ring.scale_buf(self.inv_n, output.get_mut(i).as_mut_slice());
        }
    }
}
