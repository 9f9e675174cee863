//! Arctangent.

use crate::common::consts::ONE;
use crate::common::util::sqrt_int;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::GUARD_BITS;
use crate::num::Float;
use crate::ops::consts::PiSource;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;

// Polynomial coefficient generator: -1/3, 1/5, -1/7, ...
struct AtanPolycoeffGen {
    n: u64,
    f: Float,
    sign: Sign,
    p: usize,
}

impl AtanPolycoeffGen {
    fn new(p: usize) -> Result<Self, Error> {
        Ok(AtanPolycoeffGen {
            n: 1,
            f: Float::from_word(1, p)?,
            sign: Sign::Pos,
            p,
        })
    }
}

impl PolycoeffGen for AtanPolycoeffGen {
    fn next(&mut self, rm: RoundingMode) -> Result<&Float, Error> {
        self.n += 2;

        self.f = ONE.div(&Float::from_word(self.n, 64)?, self.p, rm)?;
        self.sign = self.sign.invert();
        self.f.set_sign(self.sign);

        Ok(&self.f)
    }
}

impl Float {
    /// Computes the arctangent of a number. The result has the precision of `self` and is rounded using the rounding mode `rm`.
    /// This function requires a source of pi `cc` for computing the result.
    /// `atan(+inf)` is pi/2, and `atan(-inf)` is -pi/2.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the precision is so high that pi can not be represented.
    pub fn atan<C: PiSource + ?Sized>(&self, rm: RoundingMode, cc: &mut C) -> Result<Self, Error> {
        let p = self.precision();

        if self.is_zero() {
            return Ok(self.clone());
        }

        if self.is_inf() {
            let mut ret = cc.pi(p + GUARD_BITS, RoundingMode::ToEven)?;
            ret.set_exponent(1);
            ret.set_sign(self.sign());
            ret.set_precision(p, rm)?;
            return Ok(ret);
        }

        if 2 * (self.exponent() as i64) < -(p as i64) - 2 {
            // atan(x) = x - x^3/3 + ...
            return self.add_tiny(self.sign().invert(), rm);
        }

        let rmw = RoundingMode::ToEven;
        let p_wrk = p + GUARD_BITS;
        let target = -(2u32.max(sqrt_int(p_wrk as u32) / 2) as i32);

        let mut x = self.abs();

        // atan(x) = pi/2 - atan(1/x)
        let reflect = x > *ONE;
        if reflect {
            x = ONE.div(&x, p_wrk, rmw)?;
        }

        // each step at least halves the argument
        let reduction_max = (x.exponent() as i64 - target as i64 + 1).max(0) as usize;
        let p_x = p_wrk + reduction_max;
        x.set_precision(p_x, rmw)?;

        let mut ret = x.atan_series(target)?;

        if reflect {
            let mut half_pi = cc.pi(p_x, rmw)?;
            half_pi.set_exponent(1);
            ret = half_pi.sub(&ret, p_x, rmw)?;
        }

        ret.set_sign(self.sign());
        ret.set_precision(p, rm)?;

        Ok(ret)
    }

    /// Arctangent of `|self| <= 1` using series after reducing the argument below `2^target`.
    fn atan_series(mut self, target: i32) -> Result<Self, Error> {
        // atan:  x - x^3/3 + x^5/5 - x^7/7 + ...
        let rm = RoundingMode::ToEven;
        let p = self.precision();

        // atan(x) = 2 * atan(x / (1 + sqrt(1 + x*x)))
        let mut reduction_times = 0;
        while self.exponent() > target {
            let xx = self.mul(&self, p, rm)?;
            let n0 = xx.add(&ONE, p, rm)?;
            let n1 = n0.sqrt(rm)?;
            let n2 = n1.add(&ONE, p, rm)?;
            self = self.div(&n2, p, rm)?;
            reduction_times += 1;
        }

        let mut polycoeff_gen = AtanPolycoeffGen::new(p)?;
        let x_step = self.mul(&self, p, rm)?; // x^2
        let x_first = self.mul(&x_step, p, rm)?; // x^3

        let ret = series_run(self, x_first, x_step, &mut polycoeff_gen, rm)?;

        ret.mul_pow2(reduction_times)
    }
}
