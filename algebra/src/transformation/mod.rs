//! The transform boundary between the ring kernels and the erasure-code
//! layers above.
//!
//! A driver is constructed for one ring, one length `n` and one `n`-th
//! root of unity; its inner loops reduce to the ring's buffer-level
//! butterflies. Drivers never own the data they transform.

mod radix2;

pub use radix2::Radix2;

use crate::buffer::BufferMatrix;
use crate::primitive::Primitive;
use crate::ring::Ring;

/// A forward/inverse transform of length `n` over a ring.
///
/// Inputs and outputs are matrices of `n` rows ("n streams of size L"):
/// the transform runs down the row dimension and element-wise along each
/// row. `ifft` composed with `fft` is the identity.
pub trait NttDriver<T: Primitive> {
    /// The ring the transform runs over.
    fn ring(&self) -> &Ring<T>;

    /// The transform length `n`.
    fn size(&self) -> usize;

    /// The precomputed scalar `n^-1 mod q`.
    fn inv_size(&self) -> T;

    /// The forward transform.
    fn fft(&self, output: &mut BufferMatrix<T>, input: &BufferMatrix<T>);

    /// The unscaled inverse transform: the forward transform taken at
    /// the inverse root.
    fn fft_inv(&self, output: &mut BufferMatrix<T>, input: &BufferMatrix<T>);

    /// The inverse transform: [`NttDriver::fft_inv`] scaled by
    /// `n^-1 mod q`, so that `ifft(fft(x)) = x`.
    fn ifft(&self, output: &mut BufferMatrix<T>, input: &BufferMatrix<T>);
}
