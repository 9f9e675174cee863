//! Logarithm.

use crate::common::consts::FOUR;
use crate::common::consts::ONE;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::GUARD_BITS;
use crate::num::Float;
use crate::ops::consts::PiSource;

impl Float {
    /// Computes the natural logarithm of a number. The result has the precision of `self` and is rounded using the rounding mode `rm`.
    /// This function requires a source of pi `cc` for computing the result.
    /// `ln(0)` is negative infinity, `ln(+inf)` is positive infinity, `ln(1)` is exactly zero.
    ///
    /// ## Errors
    ///
    ///  - NegativeArgument: the argument is negative.
    pub fn ln<C: PiSource + ?Sized>(&self, rm: RoundingMode, cc: &mut C) -> Result<Self, Error> {
        let p = self.precision();

        if self.is_zero() {
            return Self::inf(p, Sign::Neg);
        }

        if self.is_negative() {
            return Err(Error::NegativeArgument);
        }

        if self.is_inf() {
            return Self::inf(p, Sign::Pos);
        }

        if self == &*ONE {
            return Self::new(p);
        }

        // cancellation when x is near 1
        let d = self.sub(&ONE, p + 2, RoundingMode::ToEven)?;
        let additional_prec = if d.exponent() < 0 { d.exponent().unsigned_abs() as usize } else { 0 };

        let p_wrk = p + GUARD_BITS + additional_prec;

        let mut ret = self.ln_wrk(p_wrk, cc)?;
        ret.set_precision(p, rm)?;

        Ok(ret)
    }

    /// Logarithm of a positive finite number computed with precision `p_wrk`.
    pub(crate) fn ln_wrk<C: PiSource + ?Sized>(&self, p_wrk: usize, cc: &mut C) -> Result<Self, Error> {
        let rm = RoundingMode::ToEven;

        let mut x = self.clone();
        x.set_precision(p_wrk, rm)?;

        if x == *ONE {
            return Self::new(p_wrk);
        }

        // ln(x) = -ln(1/x)
        let inverse = x < *ONE;
        if inverse {
            x = ONE.div(&x, p_wrk, rm)?;
        }

        // ln(x) = ln(x^(2^k)) / 2^k, where x^(2^k) >= 2^(p_wrk/2)
        let threshold = (p_wrk / 2) as i64;
        let mut k = 0;
        while (x.exponent() as i64) <= threshold {
            x = x.mul(&x, p_wrk, rm)?;
            k += 1;
        }

        // ln(x) = pi / (2 * agm(1, 4/x))
        let b = FOUR.div(&x, p_wrk, rm)?;
        let a = Float::from_word(1, p_wrk)?;
        let m = a.agm(&b)?;

        let pi = cc.pi(p_wrk, rm)?;
        let mut ret = pi.div(&m.mul_pow2(1)?, p_wrk, rm)?.mul_pow2(-k)?;

        if inverse {
            ret.inv_sign();
        }

        Ok(ret)
    }
}
