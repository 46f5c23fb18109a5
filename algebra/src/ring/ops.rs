//! Buffer-level ring primitives: the hot path the NTT drivers run on.
//!
//! Every operation is defined by its scalar loop; the [`SimdDispatch`]
//! hooks may take over a call, but the result is bit-identical to the
//! scalar semantics.
//!
//! [`SimdDispatch`]: super::SimdDispatch

use super::shoup::ShoupFactor;
use super::Ring;
use crate::buffer::BufferMatrix;
use crate::primitive::Primitive;

impl<T: Primitive> Ring<T> {
    /// `dst[i] = coef * src[i] mod q`.
    pub fn mul_coef_to_buf(&self, coef: T, src: &[T], dst: &mut [T]) {
        assert_eq!(src.len(), dst.len());
        debug_assert!(self.check(coef));

        if self.shoup_ready() {
            let factor = ShoupFactor::new(coef, self.cardinality());
            if T::accel_mul_coef(factor, self.cardinality(), src, dst) {
                return;
            }
        }
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.mul(coef, s);
        }
    }

    /// In-place variant: `buf[i] = coef * buf[i] mod q`.
    pub fn scale_buf(&self, coef: T, buf: &mut [T]) {
        debug_assert!(self.check(coef));
        for x in buf.iter_mut() {
            *x = self.mul(coef, *x);
        }
    }

    /// `dst[i] = (dst[i] + src[i]) mod q`.
    pub fn add_two_bufs(&self, src: &[T], dst: &mut [T]) {
        assert_eq!(src.len(), dst.len());
        if T::accel_add(self.cardinality(), src, dst) {
            return;
        }
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.add(s, *d);
        }
    }

    /// `res[i] = (a[i] - b[i]) mod q`.
    pub fn sub_two_bufs(&self, a: &[T], b: &[T], res: &mut [T]) {
        assert_eq!(a.len(), b.len());
        assert_eq!(a.len(), res.len());
        if T::accel_sub(self.cardinality(), a, b, res) {
            return;
        }
        for ((r, &x), &y) in res.iter_mut().zip(a).zip(b) {
            *r = self.sub(x, y);
        }
    }

    /// In-place element-wise negation.
    pub fn neg_buf(&self, x: &mut [T]) {
        if T::accel_neg(self.cardinality(), x) {
            return;
        }
        for v in x.iter_mut() {
            *v = self.neg(*v);
        }
    }

    /// Hadamard product: `x[i] = x[i] * y[i] mod q`.
    pub fn hadamard_mul(&self, x: &mut [T], y: &[T]) {
        assert_eq!(x.len(), y.len());
        for (a, &b) in x.iter_mut().zip(y) {
            *a = self.mul(*a, b);
        }
    }

    /// Applies `y` to both halves of `x` independently:
    /// `x[i] *= y[i]` and `x[i + n/2] *= y[i]` for `i < n/2`.
    pub fn hadamard_mul_doubled(&self, x: &mut [T], y: &[T]) {
        let half = x.len() / 2;
        assert_eq!(x.len(), half * 2);
        assert_eq!(y.len(), half);

        let (lo, hi) = x.split_at_mut(half);
        self.hadamard_mul(lo, y);
        self.hadamard_mul(hi, y);
    }

    /// Adds `y` to both halves of `x` independently.
    pub fn add_doubled(&self, x: &mut [T], y: &[T]) {
        let half = x.len() / 2;
        assert_eq!(x.len(), half * 2);
        assert_eq!(y.len(), half);

        let (lo, hi) = x.split_at_mut(half);
        self.add_two_bufs(y, lo);
        self.add_two_bufs(y, hi);
    }

    /// Cooley-Tukey butterfly over paired buffers:
    ///
    /// `P[i], Q[i] = P[i] + c*Q[i], P[i] - c*Q[i]`, all mod q.
    pub fn butterfly_ct(&self, coef: T, p: &mut [T], q: &mut [T]) {
        assert_eq!(p.len(), q.len());
        debug_assert!(self.check(coef));

        if self.shoup_ready() {
            let factor = ShoupFactor::new(coef, self.cardinality());
            if T::accel_butterfly_ct(factor, self.cardinality(), p, q) {
                return;
            }
        }
        for (x, y) in p.iter_mut().zip(q.iter_mut()) {
            let a = *x;
            let b = self.mul(coef, *y);
            *x = self.add(a, b);
            *y = self.sub(a, b);
        }
    }

    /// Gentleman-Sande butterfly over paired buffers:
    ///
    /// `P[i], Q[i] = P[i] + Q[i], c*(P[i] - Q[i])`, all mod q.
    pub fn butterfly_gs(&self, coef: T, p: &mut [T], q: &mut [T]) {
        assert_eq!(p.len(), q.len());
        debug_assert!(self.check(coef));

        if self.shoup_ready() {
            let factor = ShoupFactor::new(coef, self.cardinality());
            if T::accel_butterfly_gs(factor, self.cardinality(), p, q) {
                return;
            }
        }
        for (x, y) in p.iter_mut().zip(q.iter_mut()) {
            let a = *x;
            let b = *y;
            *x = self.add(a, b);
            *y = self.mul(coef, self.sub(a, b));
        }
    }
}

impl<T: Primitive> Ring<T> {
    /// Per-row coefficient multiply: `dst[i] = u[i] * src[i]` row-wise,
    /// with fast paths for the coefficients 0, 1 and q-1.
    pub fn mul_vec_to_vecp(&self, u: &[T], src: &BufferMatrix<T>, dst: &mut BufferMatrix<T>) {
        assert_eq!(u.len(), src.n());
        assert_eq!(src.n(), dst.n());
        assert_eq!(src.row_len(), dst.row_len());

        let h = self.cardinality_minus_one();
        for (i, &coef) in u.iter().enumerate() {
            if coef == T::ZERO {
                dst.fill(i, T::ZERO);
            } else if coef == T::ONE {
                dst.copy(i, src.get(i).as_slice());
            } else if coef == h {
                dst.copy(i, src.get(i).as_slice());
                self.neg_buf(dst.get_mut(i).as_mut_slice());
            } else {
                self.mul_coef_to_buf(coef, src.get(i).as_slice(), dst.get_mut(i).as_mut_slice());
            }
        }
    }

    /// Row-wise [`Ring::add_two_bufs`] over whole matrices.
    pub fn add_vecp_to_vecp(&self, src: &BufferMatrix<T>, dst: &mut BufferMatrix<T>) {
        assert_eq!(src.n(), dst.n());
        assert_eq!(src.row_len(), dst.row_len());
        for i in 0..src.n() {
            self.add_two_bufs(src.get(i).as_slice(), dst.get_mut(i).as_mut_slice());
        }
    }

    /// Row-wise [`Ring::sub_two_bufs`] over whole matrices.
    pub fn sub_vecp_to_vecp(
        &self,
        a: &BufferMatrix<T>,
        b: &BufferMatrix<T>,
        res: &mut BufferMatrix<T>,
    ) {
        assert_eq!(a.n(), b.n());
        assert_eq!(a.n(), res.n());
        for i in 0..a.n() {
            self.sub_two_bufs(
                a.get(i).as_slice(),
                b.get(i).as_slice(),
                res.get_mut(i).as_mut_slice(),
            );
        }
    }

    /// Negates every element of every row.
    pub fn neg_vecp(&self, buf: &mut BufferMatrix<T>) {
        for i in 0..buf.n() {
            self.neg_buf(buf.get_mut(i).as_mut_slice());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Ring<u32> {
        Ring::new(97)
    }

    #[test]
    fn coef_times_buffer() {
        let r = ring();
        let src = [0u32, 1, 2, 50, 96];
        let mut dst = [0u32; 5];
        r.mul_coef_to_buf(3, &src, &mut dst);
        assert_eq!(dst, [0, 3, 6, 53, 94]);
    }

    #[test]
    fn add_sub_buffers_inverse() {
        let r = ring();
        let a = [10u32, 96, 0, 42];
        let b = [90u32, 96, 1, 42];
        let mut diff = [0u32; 4];
        r.sub_two_bufs(&a, &b, &mut diff);
        let mut back = diff;
        r.add_two_bufs(&b, &mut back);
        assert_eq!(back, a);
    }

    #[test]
    fn butterflies_invert_each_other() {
        let r = ring();
        let coef = 64;
        let inv2 = r.inv(2);

        let mut p = [3u32, 17, 80];
        let mut q = [5u32, 96, 41];
        let (p0, q0) = (p, q);

        r.butterfly_gs(coef, &mut p, &mut q);
        r.butterfly_ct(r.inv(coef), &mut p, &mut q);
        // GS then CT with the inverse twiddle doubles both rows.
        r.scale_buf(inv2, &mut p);
        r.scale_buf(inv2, &mut q);
        assert_eq!(p, p0);
        assert_eq!(q, q0);
    }

    #[test]
    fn butterfly_ct_matches_scalar_formula() {
        let r = ring();
        let mut p = [7u32];
        let mut q = [9u32];
        r.butterfly_ct(5, &mut p, &mut q);
        // a=7, b=5*9=45: (52, 7-45 mod 97 = 59)
        assert_eq!((p[0], q[0]), (52, 59));
    }

    #[test]
    fn doubled_variants() {
        let r = ring();
        let mut x = [1u32, 2, 3, 4];
        r.add_doubled(&mut x, &[10, 20]);
        assert_eq!(x, [11, 22, 13, 24]);
        let mut y = [1u32, 2, 3, 4];
        r.hadamard_mul_doubled(&mut y, &[10, 20]);
        assert_eq!(y, [10, 40, 30, 80]);
    }

    #[test]
    fn matrix_coef_fast_paths() {
        let r = ring();
        let mut src = BufferMatrix::<u32>::new(4, 3);
        for i in 0..4 {
            src.copy(i, &[1, 2, 3]);
        }
        let mut dst = BufferMatrix::<u32>::new(4, 3);
        r.mul_vec_to_vecp(&[0, 1, 96, 5], &src, &mut dst);
        assert_eq!(dst.get(0).as_slice(), &[0, 0, 0]);
        assert_eq!(dst.get(1).as_slice(), &[1, 2, 3]);
        assert_eq!(dst.get(2).as_slice(), &[96, 95, 94]);
        assert_eq!(dst.get(3).as_slice(), &[5, 10, 15]);
    }

    #[test]
    fn matrix_add_sub_neg() {
        let r = ring();
        let mut a = BufferMatrix::<u32>::new(2, 2);
        a.copy(0, &[1, 96]);
        a.copy(1, &[0, 50]);
        let mut b = BufferMatrix::<u32>::new(2, 2);
        b.copy(0, &[96, 96]);
        b.copy(1, &[1, 50]);

        let mut res = BufferMatrix::<u32>::new(2, 2);
        r.sub_vecp_to_vecp(&a, &b, &mut res);
        assert_eq!(res.get(0).as_slice(), &[2, 0]);
        assert_eq!(res.get(1).as_slice(), &[96, 0]);

        r.add_vecp_to_vecp(&b, &mut res);
        assert_eq!(res.get(0).as_slice(), &[1, 96]);

        r.neg_vecp(&mut res);
        assert_eq!(res.get(0).as_slice(), &[96, 1]);
    }
}
