#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Finite-field arithmetic and the NTT buffer kernels underneath an
//! erasure-coding engine.
//!
//! The entry point is [`Ring`]: instantiate it for a modulus, ask it for
//! an `n`-th root of unity, put the data in [`AlignedBuffer`] rows of a
//! [`BufferMatrix`] and hand everything to an [`NttDriver`]. The driver
//! inner loops come back here, to the ring's butterfly primitives.

pub mod arith;
mod buffer;
mod cache;
mod error;
pub mod primitive;
pub mod ring;
pub mod transformation;

mod random;

pub use buffer::{AlignedBuffer, BufferMatrix, SIMD_ALIGNMENT};
pub use cache::{FileOmegaStore, OmegaStore};
pub use error::AlgebraError;
pub use primitive::Primitive;
pub use random::{sample_nonzero, UniformRingSampler};
pub use ring::{FermatRing, GroupedValues, Nf4, Ring, ShoupFactor};
pub use transformation::{NttDriver, Radix2};
