//! Tangent.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::Float;
use crate::ops::consts::PiSource;

impl Float {
    /// Computes the tangent of a number. The result has the precision of `self` and is rounded using the rounding mode `rm`.
    /// This function requires a source of pi `cc` for computing the result.
    ///
    /// The tangent is computed as `sin(x)/cos(x)` with extended precision.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is infinite.
    pub fn tan<C: PiSource + ?Sized>(&self, rm: RoundingMode, cc: &mut C) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(self.clone());
        }

        if self.is_inf() {
            return Err(Error::InvalidArgument);
        }

        let p = self.precision();

        if 2 * (self.exponent() as i64) < -(p as i64) - 2 {
            // tan(x) = x + x^3/3 + ...
            return self.add_tiny(self.sign(), rm);
        }

        let x = self.extended(0)?;
        let s = x.sin(RoundingMode::ToEven, cc)?;
        let c = x.cos(RoundingMode::ToEven, cc)?;

        s.div(&c, p, rm)
    }
}
