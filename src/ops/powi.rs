//! Integer power.

use crate::common::util::bit_len;
use crate::defs::{Error, RoundingMode, Sign, EXPONENT_MAX, EXPONENT_MIN, GUARD_BITS};
use crate::num::Float;

impl Float {
    /// Computes `self` to the power of a nonnegative integer `n`.
    /// The result has the precision of `self` and is rounded using the rounding mode `rm`.
    /// `x^0` is 1 for any `x`, including zero and infinity.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn powi(&self, n: u64, rm: RoundingMode) -> Result<Self, Error> {
        let p = self.precision();

        if n == 0 {
            return Self::from_word(1, p);
        }

        if n == 1 {
            return Ok(self.clone());
        }

        let s = if self.is_negative() && n & 1 == 1 { Sign::Neg } else { Sign::Pos };

        if self.is_zero() {
            return Self::new2(p, s);
        }

        if self.is_inf() {
            return Self::inf(p, s);
        }

        let mut ret = self.powi_wrk(n, p + GUARD_BITS + bit_len(n))?;
        ret.set_precision(p, rm)?;

        Ok(ret)
    }

    /// Computes `self` to the power of a signed integer `n`. Negative powers are computed as the reciprocal
    /// of the positive power at extended precision. Zero to a negative power gives a signed infinity.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn powsi(&self, n: i64, rm: RoundingMode) -> Result<Self, Error> {
        if n >= 0 {
            return self.powi(n as u64, rm);
        }

        let p = self.precision();
        let n = n.unsigned_abs();
        let s = if self.is_negative() && n & 1 == 1 { Sign::Neg } else { Sign::Pos };

        if self.is_zero() {
            return Self::inf(p, s);
        }

        if self.is_inf() {
            return Self::new2(p, s);
        }

        let p_wrk = p + GUARD_BITS + bit_len(n);
        let x = match self.powi_wrk(n, p_wrk) {
            // the reciprocal of an underflowed value overflows
            Ok(x) if x.is_zero() => return Err(Error::ExponentOverflow(s)),
            Ok(x) => x,
            // the reciprocal of a huge value underflows
            Err(Error::ExponentOverflow(_)) => return Self::new2(p, s),
            Err(e) => return Err(e),
        };

        let mut ret = Float::from_word(1, p_wrk)?.div(&x, p_wrk, RoundingMode::ToEven)?;
        ret.set_precision(p, rm)?;

        Ok(ret)
    }

    /// Binary exponentiation of the mantissa with the exponents accumulated separately, so that
    /// intermediate values neither overflow nor underflow. Result has precision `p`.
    pub(crate) fn powi_wrk(&self, n: u64, p: usize) -> Result<Self, Error> {
        let rm = RoundingMode::ToEven;
        let (m, e) = self.mant_exp();

        if m.is_zero() || m.is_inf() {
            return Err(Error::InvalidArgument);
        }

        let mut acc = Float::from_word(1, p)?;
        let mut acc_e: i128 = 0;

        // m^(2^j) = b * 2^b_e
        let mut b = m;
        let mut b_e: i128 = 0;

        let mut k = n;
        while k > 0 {
            if k & 1 == 1 {
                acc = acc.mul(&b, p, rm)?;
                let (am, ae) = acc.mant_exp();
                acc = am;
                acc_e += ae as i128 + b_e;
            }

            k >>= 1;

            if k > 0 {
                b = b.mul(&b, p, rm)?;
                let (bm, be) = b.mant_exp();
                b = bm;
                b_e = 2 * b_e + be as i128;
            }
        }

        let e_res = e as i128 * n as i128 + acc_e;

        if e_res > EXPONENT_MAX as i128 {
            Err(Error::ExponentOverflow(acc.sign()))
        } else if e_res < EXPONENT_MIN as i128 {
            Self::new2(p, acc.sign())
        } else {
            acc.set_exponent(e_res as i32);
            Ok(acc)
        }
    }
}
