//! Exponentiation.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::GUARD_BITS;
use crate::num::Float;
use crate::ops::consts::PiSource;
use crate::ops::newton::newton;

// Arguments with larger exponent overflow or underflow the result.
const EXP_EXPONENT_LIMIT: i32 = 31;

impl Float {
    /// Computes `e` to the power of `self`. The result has the precision of `self` and is rounded using the rounding mode `rm`.
    /// This function requires a source of pi `cc` for computing the result.
    /// `exp(0)` is exactly 1, `exp(+inf)` is positive infinity, `exp(-inf)` is zero.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn exp<C: PiSource + ?Sized>(&self, rm: RoundingMode, cc: &mut C) -> Result<Self, Error> {
        let p = self.precision();

        if self.is_zero() {
            return Self::from_word(1, p);
        }

        if self.is_inf() {
            return if self.is_positive() { Self::inf(p, Sign::Pos) } else { Self::new(p) };
        }

        if self.exponent() > EXP_EXPONENT_LIMIT {
            return if self.is_positive() { Err(Error::ExponentOverflow(Sign::Pos)) } else { Self::new(p) };
        }

        if (self.exponent() as i64) < -(p as i64) - 2 {
            // exp(x) = 1 + x + x^2/2 + ...; x^2 does not change the rounding
            return ONE.add(self, p, rm);
        }

        let mut ret = self.exp_wrk(p + GUARD_BITS, cc)?;
        ret.set_precision(p, rm)?;

        Ok(ret)
    }

    /// Exponent of a finite number with a moderate exponent computed with precision `p_wrk`.
    pub(crate) fn exp_wrk<C: PiSource + ?Sized>(&self, p_wrk: usize, cc: &mut C) -> Result<Self, Error> {
        let rm = RoundingMode::ToEven;

        // exp(z) = exp(z/2^k)^(2^k) while the native estimate is out of range
        let mut z = self.clone();
        let mut k = 0;
        let mut estimate = z.to_f64().exp();
        while !estimate.is_normal() {
            z = z.mul_pow2(-1)?;
            k += 1;
            estimate = z.to_f64().exp();
        }

        // absolute error of ln(x) becomes relative error of x; squaring doubles it
        let p_x = p_wrk + k + z.exponent().max(0) as usize;
        z.set_precision(p_x, rm)?;

        let x0 = Float::from_f64(estimate, 53)?;

        // ln(x) - z = 0, ratio = x * (ln(x) - z)
        let mut x = newton(
            |x| {
                let p = x.precision();
                let l = x.ln_wrk(p, cc)?;
                let d = l.sub(&z, p, rm)?;
                d.mul(x, p, rm)
            },
            &x0,
            32,
            p_x,
        )?;

        for _ in 0..k {
            x = x.mul(&x, p_x, rm)?;
        }

        Ok(x)
    }
}
