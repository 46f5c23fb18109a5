//! NF4: four GF(65537) sub-elements packed into one `u128` word.
//!
//! Each sub-element occupies a 32-bit lane, wide enough that lane-wise
//! addition cannot spill into a neighbor. The value `65536 = q - 1`
//! does not fit a 16-bit data symbol, so transport in and out of symbol
//! streams goes through [`GroupedValues`]: a flagged lane stores 0 while
//! logically holding `q - 1`.

use super::FermatRing;

const LANES: u32 = 4;
const LANE_BITS: u32 = 32;
const LANE_MASK: u128 = 0xffff_ffff;
const F4: u32 = 65537;

/// A group of sub-values stored as one word, plus per-value flags.
///
/// Bit `i` of `flag` set means sub-value `i` logically equals the field
/// sentinel `q - 1` and the stored sub-value is a placeholder 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedValues<T> {
    /// The packed sub-values.
    pub values: T,
    /// Per-sub-value sentinel flags.
    pub flag: u32,
}

/// The packed composite ring over GF(65537).
#[derive(Debug, Clone)]
pub struct Nf4 {
    lane: FermatRing<u32>,
}

impl Nf4 {
    /// Builds the packed ring; the lane field is GF(65537).
    pub fn new() -> Self {
        Nf4 {
            lane: FermatRing::new(4),
        }
    }

    /// Cardinality of each sub-field.
    #[inline]
    pub fn sub_cardinality(&self) -> u32 {
        F4
    }

    /// The lane field itself.
    #[inline]
    pub fn lane_ring(&self) -> &FermatRing<u32> {
        &self.lane
    }

    #[inline]
    fn lane(packed: u128, i: u32) -> u32 {
        ((packed >> (i * LANE_BITS)) & LANE_MASK) as u32
    }

    fn map_lanes(packed: u128, mut f: impl FnMut(u32) -> u32) -> u128 {
        let mut out = 0u128;
        for i in 0..LANES {
            out |= (f(Self::lane(packed, i)) as u128) << (i * LANE_BITS);
        }
        out
    }

    /// Broadcasts a scalar sub-element across every lane.
    #[inline]
    pub fn replicate(&self, a: u32) -> u128 {
        debug_assert!(a < F4);
        let mut out = 0u128;
        for i in 0..LANES {
            out |= (a as u128) << (i * LANE_BITS);
        }
        out
    }

    /// Whether every lane holds a canonical sub-element.
    pub fn check(&self, a: u128) -> bool {
        (0..LANES).all(|i| Self::lane(a, i) < F4)
    }

    /// Lane-wise addition.
    pub fn add(&self, a: u128, b: u128) -> u128 {
        self.zip_lanes(a, b, |x, y| self.lane.add(x, y))
    }

    /// Lane-wise subtraction.
    pub fn sub(&self, a: u128, b: u128) -> u128 {
        self.zip_lanes(a, b, |x, y| self.lane.sub(x, y))
    }

    /// Lane-wise negation.
    pub fn neg(&self, a: u128) -> u128 {
        Self::map_lanes(a, |x| self.lane.neg(x))
    }

    /// Lane-wise multiplication through the Fermat fast path.
    pub fn mul(&self, a: u128, b: u128) -> u128 {
        self.zip_lanes(a, b, |x, y| self.lane.mul(x, y))
    }

    /// Lane-wise exponentiation.
    pub fn exp(&self, a: u128, exponent: u32) -> u128 {
        Self::map_lanes(a, |x| self.lane.exp(x, exponent))
    }

    /// Lane-wise inverse.
    pub fn inv(&self, a: u128) -> u128 {
        Self::map_lanes(a, |x| self.lane.inv(x))
    }

    fn zip_lanes(&self, a: u128, b: u128, mut f: impl FnMut(u32, u32) -> u32) -> u128 {
        let mut out = 0u128;
        for i in 0..LANES {
            out |= (f(Self::lane(a, i), Self::lane(b, i)) as u128) << (i * LANE_BITS);
        }
        out
    }

    /// A replicated `n`-th root of unity of the lane field.
    pub fn get_nth_root(&self, n: u32) -> u128 {
        self.replicate(self.lane.get_nth_root(n))
    }

    /// Widens four 16-bit data symbols into packed lanes.
    pub fn pack(&self, symbols: u64) -> u128 {
        let mut out = 0u128;
        for i in 0..LANES {
            let sym = (symbols >> (i * 16)) & 0xffff;
            out |= (sym as u128) << (i * LANE_BITS);
        }
        out
    }

    /// Narrows packed lanes back to 16-bit symbols, flagging sentinel
    /// lanes that hold `q - 1` and cannot be represented in 16 bits.
    pub fn unpack(&self, packed: u128) -> GroupedValues<u64> {
        debug_assert!(self.check(packed));
        let mut values = 0u64;
        let mut flag = 0u32;
        for i in 0..LANES {
            let lane = Self::lane(packed, i);
            if lane == F4 - 1 {
                flag |= 1 << i;
            } else {
                values |= (lane as u64) << (i * 16);
            }
        }
        GroupedValues { values, flag }
    }

    /// Rebuilds packed lanes from flagged symbols; the inverse of
    /// [`Nf4::unpack`].
    pub fn repack(&self, grouped: GroupedValues<u64>) -> u128 {
        let mut out = 0u128;
        for i in 0..LANES {
            let lane = if grouped.flag >> i & 1 == 1 {
                F4 - 1
            } else {
                ((grouped.values >> (i * 16)) & 0xffff) as u32
            };
            out |= (lane as u128) << (i * LANE_BITS);
        }
        out
    }

    /// `dst[i] = coef * src[i]`, lane-wise.
    pub fn mul_coef_to_buf(&self, coef: u128, src: &[u128], dst: &mut [u128]) {
        assert_eq!(src.len(), dst.len());
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.mul(coef, s);
        }
    }

    /// `dst[i] = dst[i] + src[i]`, lane-wise.
    pub fn add_two_bufs(&self, src: &[u128], dst: &mut [u128]) {
        assert_eq!(src.len(), dst.len());
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.add(s, *d);
        }
    }

    /// `res[i] = a[i] - b[i]`, lane-wise.
    pub fn sub_two_bufs(&self, a: &[u128], b: &[u128], res: &mut [u128]) {
        assert_eq!(a.len(), b.len());
        assert_eq!(a.len(), res.len());
        for ((r, &x), &y) in res.iter_mut().zip(a).zip(b) {
            *r = self.sub(x, y);
        }
    }

    /// Hadamard product, lane-wise.
    pub fn hadamard_mul(&self, x: &mut [u128], y: &[u128]) {
        assert_eq!(x.len(), y.len());
        for (a, &b) in x.iter_mut().zip(y) {
            *a = self.mul(*a, b);
        }
    }

    /// The Cooley-Tukey butterfly over packed buffers.
    pub fn butterfly_ct(&self, coef: u128, p: &mut [u128], q: &mut [u128]) {
        assert_eq!(p.len(), q.len());
        for (x, y) in p.iter_mut().zip(q.iter_mut()) {
            let a = *x;
            let b = self.mul(coef, *y);
            *x = self.add(a, b);
            *y = self.sub(a, b);
        }
    }

    /// The Gentleman-Sande butterfly over packed buffers.
    pub fn butterfly_gs(&self, coef: u128, p: &mut [u128], q: &mut [u128]) {
        assert_eq!(p.len(), q.len());
        for (x, y) in p.iter_mut().zip(q.iter_mut()) {
            let a = *x;
            let b = *y;
            *x = self.add(a, b);
            *y = self.mul(coef, self.sub(a, b));
        }
    }
}

impl Default for Nf4 {
    fn default() -> Self {
        Self::new()
    }
}
