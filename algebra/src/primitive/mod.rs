//! Machine-integer plumbing shared by the whole kernel: bit-level helper
//! traits, `as` casts, wrapping and widening arithmetic, and the
//! double-width accumulator ladder used for overflow-free `a * b mod q`.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Rem, Shl, Shr, Sub};
use std::str::FromStr;

use bytemuck::Zeroable;
use num_traits::{ConstOne, ConstZero};

mod bits;
mod bounded;
mod cast;
mod double;
mod wide;
mod widening;
mod wrapping;

pub use bits::Bits;
pub use bounded::ConstBounded;
pub use cast::{AsFrom, AsInto};
pub use double::{DoubleWide, SignedDoubleWide, SignedWide};
pub use wide::{I256, U256};
pub use widening::{BorrowingSub, CarryingAdd, CarryingMul, Widening, WideningMul};
pub use wrapping::WrappingOps;

use crate::ring::SimdDispatch;

/// The element value types a ring can be instantiated over.
///
/// Bundles every capability the generic ring code relies on: ordering and
/// formatting, the constants `0`/`1`, bit access, wrapping and widening
/// arithmetic, and the double-width ladder of [`DoubleWide`] /
/// [`SignedDoubleWide`]. `FromStr`/`Display` are required by the on-disk
/// omega cache, which stores one decimal element per line.
pub trait Primitive:
    Sized
    + Copy
    + Send
    + Sync
    + Debug
    + Display
    + Default
    + Hash
    + Eq
    + Ord
    + FromStr
    + ConstZero
    + ConstOne
    + Bits
    + ConstBounded
    + Zeroable
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + WrappingOps
    + Widening
    + DoubleWide
    + SignedDoubleWide
    + SimdDispatch
    + AsFrom<u32>
    + AsFrom<usize>
    + AsInto<u128>
{
}

impl Primitive for u32 {}
impl Primitive for u64 {}
impl Primitive for u128 {}
