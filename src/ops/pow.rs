//! Exponentiation.

use crate::common::consts::ONE;
use crate::common::util::bit_len;
use crate::defs::{Error, RoundingMode, Sign, GUARD_BITS};
use crate::num::Float;
use crate::ops::consts::PiSource;

impl Float {
    /// Compute the power of `self` to the `w`. The result has the precision of `self` and is rounded using the rounding mode `rm`.
    /// This function requires a source of pi `cc` for computing the result.
    ///
    /// Integer exponents are computed by binary exponentiation. Other exponents use `exp(w * ln(self))`.
    /// Special values follow IEEE 754: `x^0` and `1^w` are 1, zero and infinite bases give zero or infinity depending on the sign of `w`
    /// with the sign of the base kept for odd integer `w`, and an infinite `w` gives zero or infinity depending on `|self|`.
    ///
    /// ## Errors
    ///
    ///  - NegativeBase: `self` is negative, and `w` is not an integer.
    ///  - ExponentOverflow: the result is too large.
    pub fn pow<C: PiSource + ?Sized>(&self, w: &Self, rm: RoundingMode, cc: &mut C) -> Result<Self, Error> {
        let p = self.precision();

        if w.is_zero() || self == &*ONE {
            return Self::from_word(1, p);
        }

        if w == &*ONE {
            return Ok(self.clone());
        }

        if w.is_inf() {
            return self.pow_inf(w);
        }

        let odd = w.is_odd_int();
        let s = if self.is_negative() && odd { Sign::Neg } else { Sign::Pos };

        if self.is_inf() {
            return if w.is_positive() { Self::inf(p, s) } else { Self::new2(p, s) };
        }

        if self.is_zero() {
            return if w.is_positive() { Self::new2(p, s) } else { Self::inf(p, s) };
        }

        if self.is_negative() && !w.is_int() {
            return Err(Error::NegativeBase);
        }

        let mut ret = match self.abs().pow_wrk(w, p, cc) {
            Ok(v) => v,
            Err(Error::ExponentOverflow(_)) => return Err(Error::ExponentOverflow(s)),
            Err(e) => return Err(e),
        };

        ret.set_sign(s);
        ret.set_precision(p, rm)?;

        Ok(ret)
    }

    // Infinite exponent.
    fn pow_inf(&self, w: &Self) -> Result<Self, Error> {
        let p = self.precision();

        if self.is_inf() {
            return if w.is_positive() { Self::inf(p, Sign::Pos) } else { Self::new(p) };
        }

        let a = self.abs();
        if a == *ONE {
            Self::from_word(1, p)
        } else if (a > *ONE) == w.is_positive() {
            Self::inf(p, Sign::Pos)
        } else {
            Self::new(p)
        }
    }

    // `self` is positive, finite, and not 1; `w` is finite and nonzero. Returns an unrounded result for precision `p`.
    fn pow_wrk<C: PiSource + ?Sized>(&self, w: &Self, p: usize, cc: &mut C) -> Result<Self, Error> {
        let rm = RoundingMode::ToEven;

        if let Some(n) = w.int_magnitude() {
            let p_wrk = p + GUARD_BITS + bit_len(n);

            if w.is_positive() {
                return self.powi_wrk(n, p_wrk);
            }

            return match self.powi_wrk(n, p_wrk) {
                // the reciprocal of an underflowed value overflows
                Ok(x) if x.is_zero() => Err(Error::ExponentOverflow(Sign::Pos)),
                Ok(x) => ONE.div(&x, p_wrk, rm),
                Err(Error::ExponentOverflow(_)) => Self::new(p_wrk),
                Err(e) => Err(e),
            };
        }

        if w.is_negative() {
            // 1 / self^(-w) at extended precision
            let z_ext = self.extended(0)?;
            let p_ext = z_ext.precision();

            return match z_ext.pow_wrk(&w.neg(), p_ext, cc) {
                Ok(x) if x.is_zero() => Err(Error::ExponentOverflow(Sign::Pos)),
                Ok(x) => ONE.div(&x, p_ext, rm),
                Err(Error::ExponentOverflow(_)) => Self::new(p_ext),
                Err(e) => Err(e),
            };
        }

        // w * ln(self) must be accurate in absolute terms
        let ln_bits = bit_len(self.exponent().unsigned_abs() as u64) as i64 + 1;
        let extra = (w.exponent() as i64 + ln_bits).max(0) as usize;
        let p_wrk = p + GUARD_BITS + extra;

        let l = self.ln_wrk(p_wrk, cc)?;
        let t = w.mul(&l, p_wrk, rm)?;

        t.exp(rm, cc)
    }
}
