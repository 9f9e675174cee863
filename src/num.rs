//! Binary floating point number with arbitrary precision.

use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use core::cmp::Ordering;
use num_bigint::BigUint;
use num_traits::One;
use num_traits::ToPrimitive;
use num_traits::Zero;

#[derive(Debug, Clone)]
pub(crate) enum Flavor {
    Zero,

    /// Mantissa `m` has exactly `p` significant bits, and the value is `0.m * 2^e`.
    Value {
        m: BigUint,
        e: Exponent,
    },

    Inf,
}

/// A floating point number with a binary mantissa of fixed precision.
///
/// A number is either a signed zero, a signed infinity, or a normalized finite value.
/// There is no NaN: operations which have no numeric result return `Error::InvalidArgument`.
#[derive(Debug, Clone)]
pub struct Float {
    pub(crate) s: Sign,
    pub(crate) p: usize,
    pub(crate) f: Flavor,
}

// Finite operand borrowed from a number: `m * 2^l`, where `l` is the weight of the least significant bit.
struct Parts<'a> {
    s: Sign,
    m: &'a BigUint,
    e: i64,
    l: i64,
}

impl Float {
    pub(crate) fn check_p(p: usize) -> Result<(), Error> {
        if p == 0 {
            Err(Error::InvalidArgument)
        } else {
            Ok(())
        }
    }

    /// Returns a new positive zero with precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn new(p: usize) -> Result<Self, Error> {
        Self::new2(p, Sign::Pos)
    }

    /// Returns a new zero with sign `s` and precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn new2(p: usize, s: Sign) -> Result<Self, Error> {
        Self::check_p(p)?;
        Ok(Float {
            s,
            p,
            f: Flavor::Zero,
        })
    }

    /// Returns infinity with sign `s` and precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn inf(p: usize, s: Sign) -> Result<Self, Error> {
        Self::check_p(p)?;
        Ok(Float { s, p, f: Flavor::Inf })
    }

    /// Rounds `m * 2^e2` to precision `p`.
    /// `sticky` tells that the exact value has nonzero bits below the least significant bit of `m`.
    pub(crate) fn from_parts(
        s: Sign,
        m: BigUint,
        e2: i64,
        sticky: bool,
        p: usize,
        rm: RoundingMode,
    ) -> Result<Self, Error> {
        Self::check_p(p)?;

        if m.is_zero() {
            return Self::new2(p, s);
        }

        let bits = m.bits() as usize;

        let (m, e2) = if bits > p {
            let shift = bits - p;
            let half = m.bit(shift as u64 - 1);
            let low = sticky || m.trailing_zeros().map_or(false, |tz| (tz as usize) < shift - 1);
            let mut q = m >> shift;
            let mut e2 = e2 + shift as i64;

            if rm.round_up(s, q.bit(0), half, low) {
                q += 1u32;
                if q.bits() as usize > p {
                    q >>= 1usize;
                    e2 += 1;
                }
            }

            (q, e2)
        } else if sticky {
            // make room for the rounding bits
            let shift = p + 2 - bits;
            return Self::from_parts(s, m << shift, e2 - shift as i64, true, p, rm);
        } else {
            let shift = p - bits;
            (m << shift, e2 - shift as i64)
        };

        let e = e2 + p as i64;

        if e > EXPONENT_MAX as i64 {
            Err(Error::ExponentOverflow(s))
        } else if e < EXPONENT_MIN as i64 {
            Self::new2(p, s)
        } else {
            Ok(Float {
                s,
                p,
                f: Flavor::Value { m, e: e as Exponent },
            })
        }
    }

    fn parts(&self) -> Option<Parts> {
        match &self.f {
            Flavor::Value { m, e } => Some(Parts {
                s: self.s,
                m,
                e: *e as i64,
                l: *e as i64 - self.p as i64,
            }),
            _ => None,
        }
    }

    /// Returns the precision of `self` in bits.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the sign of `self`.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns the exponent `e` of `self = 0.m * 2^e`, or 0 for zero and infinity.
    pub fn exponent(&self) -> Exponent {
        match &self.f {
            Flavor::Value { e, .. } => *e,
            _ => 0,
        }
    }

    /// Returns true if `self` is positive or negative zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.f, Flavor::Zero)
    }

    /// Returns true if `self` is infinite.
    pub fn is_inf(&self) -> bool {
        matches!(self.f, Flavor::Inf)
    }

    /// Returns true if `self` is positive infinity.
    pub fn is_inf_pos(&self) -> bool {
        self.is_inf() && self.s.is_positive()
    }

    /// Returns true if `self` is negative infinity.
    pub fn is_inf_neg(&self) -> bool {
        self.is_inf() && self.s.is_negative()
    }

    /// Returns true if the sign of `self` is positive. Zero has a sign as well.
    pub fn is_positive(&self) -> bool {
        self.s.is_positive()
    }

    /// Returns true if the sign of `self` is negative. Zero has a sign as well.
    pub fn is_negative(&self) -> bool {
        self.s.is_negative()
    }

    /// Changes the sign of `self` to the opposite.
    pub fn inv_sign(&mut self) {
        self.s = self.s.invert();
    }

    /// Sets the sign of `self`.
    pub fn set_sign(&mut self, s: Sign) {
        self.s = s;
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        let mut ret = self.clone();
        ret.inv_sign();
        ret
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        let mut ret = self.clone();
        ret.s = Sign::Pos;
        ret
    }

    /// Sets the precision of `self` to `p` bits, rounding the mantissa with `rm` if it shrinks.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - ExponentOverflow: rounding made the exponent exceed the maximum value.
    pub fn set_precision(&mut self, p: usize, rm: RoundingMode) -> Result<(), Error> {
        Self::check_p(p)?;

        if let Flavor::Value { m, e } = &mut self.f {
            if p >= self.p {
                *m <<= p - self.p;
            } else {
                let l = *e as i64 - self.p as i64;
                *self = Self::from_parts(self.s, m.clone(), l, false, p, rm)?;
            }
        }

        self.p = p;

        Ok(())
    }

    /// Decomposes `self` into a mantissa in the range `[0.5, 1)` with the sign of `self`, and an exponent.
    /// Zero and infinity are returned as they are with zero exponent.
    pub fn mant_exp(&self) -> (Self, Exponent) {
        let mut m = self.clone();
        let e = self.exponent();
        m.set_exponent(0);
        (m, e)
    }

    /// Sets the exponent of a finite nonzero number. Zero and infinity are not changed.
    pub fn set_exponent(&mut self, e: Exponent) {
        if let Flavor::Value { e: se, .. } = &mut self.f {
            *se = e;
        }
    }

    /// Returns `self * 2^n`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large to be represented.
    pub fn mul_pow2(&self, n: i64) -> Result<Self, Error> {
        let mut ret = self.clone();
        if let Flavor::Value { e, .. } = &mut ret.f {
            let ne = *e as i64 + n;
            if ne > EXPONENT_MAX as i64 {
                return Err(Error::ExponentOverflow(self.s));
            } else if ne < EXPONENT_MIN as i64 {
                return Self::new2(self.p, self.s);
            }
            *e = ne as Exponent;
        }
        Ok(ret)
    }

    /// Adds `d2` to `self` and returns the result of the operation rounded to precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    ///  - InvalidArgument: the precision is zero, or the operands are infinities of opposite sign.
    pub fn add(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        self.add_sub(d2, d2.s, p, rm)
    }

    /// Subtracts `d2` from `self` and returns the result of the operation rounded to precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    ///  - InvalidArgument: the precision is zero, or the operands are infinities of the same sign.
    pub fn sub(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        self.add_sub(d2, d2.s.invert(), p, rm)
    }

    fn add_sub(&self, d2: &Self, s2: Sign, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        Self::check_p(p)?;

        match (&self.f, &d2.f) {
            (Flavor::Inf, Flavor::Inf) => {
                if self.s == s2 {
                    Self::inf(p, self.s)
                } else {
                    Err(Error::InvalidArgument)
                }
            }
            (Flavor::Inf, _) => Self::inf(p, self.s),
            (_, Flavor::Inf) => Self::inf(p, s2),
            (Flavor::Zero, Flavor::Zero) => {
                let s = if self.s == s2 { self.s } else { Self::zero_sum_sign(rm) };
                Self::new2(p, s)
            }
            (Flavor::Zero, Flavor::Value { m, e }) => {
                Self::from_parts(s2, m.clone(), *e as i64 - d2.p as i64, false, p, rm)
            }
            (Flavor::Value { m, e }, Flavor::Zero) => {
                Self::from_parts(self.s, m.clone(), *e as i64 - self.p as i64, false, p, rm)
            }
            (Flavor::Value { .. }, Flavor::Value { .. }) => {
                let mut a = self.parts().ok_or(Error::InvalidArgument)?;
                let mut b = d2.parts().ok_or(Error::InvalidArgument)?;
                b.s = s2;

                if a.e < b.e {
                    core::mem::swap(&mut a, &mut b);
                }

                Self::add_parts(&a, &b, p, rm)
            }
        }
    }

    // Sign of an exact zero sum.
    fn zero_sum_sign(rm: RoundingMode) -> Sign {
        if rm == RoundingMode::Down {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    // `a` has the larger or equal exponent.
    fn add_parts(a: &Parts, b: &Parts, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        // An operand below every rounding boundary of the result only affects rounding by its sign,
        // so it is replaced with a small stand-in to keep the shifts bounded.
        let g = a.l.min(a.e - p as i64 - 2);
        let stand_in;
        let (mb, lb) = if b.e <= g - 1 {
            stand_in = BigUint::one();
            (&stand_in, g - 2)
        } else {
            (b.m, b.l)
        };

        let l = a.l.min(lb);
        let xa = a.m << (a.l - l) as usize;
        let xb = mb << (lb - l) as usize;

        if a.s == b.s {
            Self::from_parts(a.s, xa + xb, l, false, p, rm)
        } else {
            match xa.cmp(&xb) {
                Ordering::Greater => Self::from_parts(a.s, xa - xb, l, false, p, rm),
                Ordering::Less => Self::from_parts(b.s, xb - xa, l, false, p, rm),
                Ordering::Equal => Self::new2(p, Self::zero_sum_sign(rm)),
            }
        }
    }

    /// Multiplies `self` by `d2` and returns the result of the operation rounded to precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    ///  - InvalidArgument: the precision is zero, or zero is multiplied by infinity.
    pub fn mul(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        Self::check_p(p)?;

        let s = self.s.mul(d2.s);

        match (&self.f, &d2.f) {
            (Flavor::Inf, Flavor::Zero) | (Flavor::Zero, Flavor::Inf) => Err(Error::InvalidArgument),
            (Flavor::Inf, _) | (_, Flavor::Inf) => Self::inf(p, s),
            (Flavor::Zero, _) | (_, Flavor::Zero) => Self::new2(p, s),
            (Flavor::Value { m: m1, e: e1 }, Flavor::Value { m: m2, e: e2 }) => {
                let l = (*e1 as i64 - self.p as i64) + (*e2 as i64 - d2.p as i64);
                Self::from_parts(s, m1 * m2, l, false, p, rm)
            }
        }
    }

    /// Divides `self` by `d2` and returns the result of the operation rounded to precision `p` using rounding mode `rm`.
    /// Division of a finite nonzero number by zero gives a signed infinity.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    ///  - InvalidArgument: the precision is zero, or both operands are zero, or both operands are infinite.
    pub fn div(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        Self::check_p(p)?;

        let s = self.s.mul(d2.s);

        match (&self.f, &d2.f) {
            (Flavor::Inf, Flavor::Inf) | (Flavor::Zero, Flavor::Zero) => Err(Error::InvalidArgument),
            (Flavor::Inf, _) => Self::inf(p, s),
            (Flavor::Zero, _) | (_, Flavor::Inf) => Self::new2(p, s),
            (Flavor::Value { .. }, Flavor::Zero) => Self::inf(p, s),
            (Flavor::Value { m: m1, e: e1 }, Flavor::Value { m: m2, e: e2 }) => {
                // quotient must have at least p + 2 bits
                let k = (p + 2 + d2.p).saturating_sub(self.p);
                let n = m1 << k;
                let q = &n / m2;
                let r = &n % m2;
                let l = (*e1 as i64 - self.p as i64 - k as i64) - (*e2 as i64 - d2.p as i64);
                Self::from_parts(s, q, l, !r.is_zero(), p, rm)
            }
        }
    }

    /// Returns the integer part of `self` (truncation toward zero).
    pub fn int(&self) -> Self {
        match self.parts() {
            Some(pt) if pt.l < 0 => {
                if pt.e <= 0 {
                    Float {
                        s: self.s,
                        p: self.p,
                        f: Flavor::Zero,
                    }
                } else {
                    let shift = (-pt.l) as usize;
                    let m = (pt.m >> shift) << shift;
                    Float {
                        s: self.s,
                        p: self.p,
                        f: Flavor::Value { m, e: pt.e as Exponent },
                    }
                }
            }
            _ => self.clone(),
        }
    }

    /// Returns true if `self` is a finite integer number.
    pub fn is_int(&self) -> bool {
        match &self.f {
            Flavor::Zero => true,
            Flavor::Inf => false,
            Flavor::Value { m, e } => {
                let e = *e as i64;
                if e >= self.p as i64 {
                    true
                } else if e <= 0 {
                    false
                } else {
                    m.trailing_zeros().map_or(true, |tz| tz as i64 >= self.p as i64 - e)
                }
            }
        }
    }

    /// Returns true if `self` is an odd integer number.
    pub fn is_odd_int(&self) -> bool {
        match &self.f {
            Flavor::Value { m, e } => {
                let e = *e as i64;
                e >= 1 && e <= self.p as i64 && self.is_int() && m.bit((self.p as i64 - e) as u64)
            }
            _ => false,
        }
    }

    /// Returns the absolute value of an integer `self` if it fits into `u64`.
    pub(crate) fn int_magnitude(&self) -> Option<u64> {
        if !self.is_int() {
            return None;
        }

        match self.parts() {
            None => Some(0),
            Some(pt) => {
                if pt.e > 64 {
                    None
                } else if pt.l >= 0 {
                    (pt.m << pt.l as usize).to_u64()
                } else {
                    (pt.m >> (-pt.l) as usize).to_u64()
                }
            }
        }
    }

    // Compares absolute values.
    fn cmp_abs(&self, d2: &Self) -> Ordering {
        match (&self.f, &d2.f) {
            (Flavor::Zero, Flavor::Zero) | (Flavor::Inf, Flavor::Inf) => Ordering::Equal,
            (Flavor::Zero, _) | (_, Flavor::Inf) => Ordering::Less,
            (_, Flavor::Zero) | (Flavor::Inf, _) => Ordering::Greater,
            (Flavor::Value { m: m1, e: e1 }, Flavor::Value { m: m2, e: e2 }) => {
                e1.cmp(e2).then_with(|| {
                    if self.p >= d2.p {
                        m1.cmp(&(m2 << (self.p - d2.p)))
                    } else {
                        (m1 << (d2.p - self.p)).cmp(m2)
                    }
                })
            }
        }
    }
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        let s1 = if self.is_zero() { 0 } else { self.s.to_int() };
        let s2 = if other.is_zero() { 0 } else { other.s.to_int() };

        s1.cmp(&s2).then_with(|| {
            if s1 > 0 {
                self.cmp_abs(other)
            } else {
                other.cmp_abs(self)
            }
        })
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Float {}

#[cfg(feature = "random")]
impl Float {
    /// Returns a random normalized number with precision `p` and the exponent in the range from `exp_from` to `exp_to` inclusive.
    /// The sign is chosen randomly.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero, or `exp_from` is greater than `exp_to`.
    pub fn random_normal(p: usize, exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        use rand::Rng;

        Self::check_p(p)?;

        if exp_from > exp_to {
            return Err(Error::InvalidArgument);
        }

        let mut rng = rand::thread_rng();

        let n = (p + 31) / 32;
        let digits: Vec<u32> = (0..n).map(|_| rng.gen()).collect();
        let mut m = BigUint::new(digits) >> (n * 32 - p);
        m.set_bit(p as u64 - 1, true);

        let e = rng.gen_range(exp_from..=exp_to);
        let s = if rng.gen::<bool>() { Sign::Pos } else { Sign::Neg };

        Ok(Float {
            s,
            p,
            f: Flavor::Value { m, e },
        })
    }
}
