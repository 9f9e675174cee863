//! Square root.

use crate::common::consts::THREE;
use crate::common::util::log2_ceil;
use crate::defs::{Error, RoundingMode, GUARD_BITS};
use crate::num::Float;
use crate::ops::newton::newton;

// Below this precision Newton's iteration with division is used, otherwise the divisionless inverse iteration.
const SQRT_INVERSE_THRESHOLD: usize = 1024;

impl Float {
    /// Computes the square root of a number. The result has the precision of `self` and is rounded using the rounding mode `rm`.
    /// The square root of negative zero is negative zero.
    ///
    /// ## Errors
    ///
    ///  - NegativeArgument: `self` is negative.
    ///  - ExponentOverflow: the result is too large.
    pub fn sqrt(&self, rm: RoundingMode) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(self.clone());
        }

        if self.is_negative() {
            return Err(Error::NegativeArgument);
        }

        if self.is_inf() {
            return Ok(self.clone());
        }

        let p = self.precision();
        let p_wrk = p + GUARD_BITS;

        // self = m * 2^e, m in [0.5, 2), e is even
        let (mut m, mut e) = self.mant_exp();
        if e & 1 != 0 {
            m.set_exponent(1);
            e -= 1;
        }
        m.set_precision(p_wrk, RoundingMode::ToEven)?;

        let mut ret = if p_wrk < SQRT_INVERSE_THRESHOLD {
            Self::sqrt_newton(&m, p_wrk)?
        } else {
            Self::sqrt_inverse(&m, p_wrk)?
        };

        ret.set_exponent(ret.exponent() + e / 2);

        // an exact root can be off by a few guard bits in either direction
        let mut r = ret.clone();
        r.set_precision(p, RoundingMode::ToEven)?;
        if r.mul(&r, 2 * p, RoundingMode::ToEven)? == *self {
            return Ok(r);
        }

        ret.set_precision(p, rm)?;

        Ok(ret)
    }

    // x^2 - m = 0
    fn sqrt_newton(m: &Self, p: usize) -> Result<Self, Error> {
        let rm = RoundingMode::ToEven;
        let x0 = Float::from_f64(m.to_f64().sqrt(), 53)?;

        newton(
            |x| {
                let p = x.precision();
                let d = x.mul(x, p, rm)?.sub(m, p, rm)?;
                d.div(&x.mul_pow2(1)?, p, rm)
            },
            &x0,
            50,
            p,
        )
    }

    // 1/x^2 - m = 0 solved with x <- x(3 - m x^2)/2, then sqrt(m) = m x
    fn sqrt_inverse(m: &Self, p: usize) -> Result<Self, Error> {
        let rm = RoundingMode::ToEven;

        let mut x = Float::from_f64(1.0 / m.to_f64().sqrt(), 53)?;
        x.set_precision(p, rm)?;

        for _ in 0..log2_ceil(p) {
            let t = x.mul(&x, p, rm)?;
            let t = t.mul(m, p, rm)?;
            let t = THREE.sub(&t, p, rm)?.mul_pow2(-1)?;
            x = x.mul(&t, p, rm)?;
        }

        m.mul(&x, p, rm)
    }
}
