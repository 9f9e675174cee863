//! Arithmetic-geometric mean.

use crate::common::util::log2_ceil;
use crate::defs::{Error, RoundingMode, GUARD_BITS};
use crate::num::Float;

impl Float {
    /// Computes the arithmetic-geometric mean of `self` and `b`.
    /// The result has the precision of the arguments.
    ///
    /// ## Errors
    ///
    ///  - PrecisionMismatch: `self` and `b` have different precision.
    ///  - InvalidArgument: an argument is zero, negative, or infinite.
    pub fn agm(&self, b: &Self) -> Result<Self, Error> {
        let p = self.precision();

        if b.precision() != p {
            return Err(Error::PrecisionMismatch);
        }

        if self.is_zero() || b.is_zero() || self.is_negative() || b.is_negative() || self.is_inf() || b.is_inf() {
            return Err(Error::InvalidArgument);
        }

        let p_wrk = p + GUARD_BITS;
        let rm = RoundingMode::ToEven;

        let mut a = self.clone();
        a.set_precision(p_wrk, rm)?;
        let mut g = b.clone();
        g.set_precision(p_wrk, rm)?;

        // convergence is quadratic once the sequences are close; the cap covers arguments of very different magnitude
        let max_iter = 2 * log2_ceil(p_wrk) + 8 + (self.exponent() as i64 - b.exponent() as i64).unsigned_abs() as usize;

        for _ in 0..max_iter {
            let mut ar = a.clone();
            ar.set_precision(p, rm)?;
            let mut gr = g.clone();
            gr.set_precision(p, rm)?;

            if ar == gr {
                break;
            }

            let an = a.add(&g, p_wrk, rm)?.mul_pow2(-1)?;
            g = a.mul(&g, p_wrk, rm)?.sqrt(rm)?;
            a = an;
        }

        a.set_precision(p, rm)?;

        Ok(a)
    }
}
