//! Sine.

use crate::common::consts::FOUR;
use crate::common::consts::THREE;
use crate::common::util::sqrt_int;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::num::Float;
use crate::ops::consts::PiSource;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;

// Polynomial coefficient generator: -1/3!, 1/5!, -1/7!, ...
struct SinPolycoeffGen {
    i: u64,
    fct: Float,
    sign: Sign,
}

impl SinPolycoeffGen {
    fn new(p: usize) -> Result<Self, Error> {
        Ok(SinPolycoeffGen {
            i: 1,
            fct: Float::from_word(1, p)?,
            sign: Sign::Pos,
        })
    }
}

impl PolycoeffGen for SinPolycoeffGen {
    fn next(&mut self, rm: RoundingMode) -> Result<&Float, Error> {
        let p = self.fct.precision();

        // denominator *= (i + 1)(i + 2)
        let d = Float::from_word((self.i + 1) * (self.i + 2), 128)?;
        self.i += 2;

        self.fct = self.fct.div(&d, p, rm)?;
        self.sign = self.sign.invert();
        self.fct.set_sign(self.sign);

        Ok(&self.fct)
    }
}

impl Float {
    /// Computes the sine of a number. The result has the precision of `self` and is rounded using the rounding mode `rm`.
    /// This function requires a source of pi `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is infinite.
    pub fn sin<C: PiSource + ?Sized>(&self, rm: RoundingMode, cc: &mut C) -> Result<Self, Error> {
        if self.is_zero() {
            return Ok(self.clone());
        }

        if self.is_inf() {
            return Err(Error::InvalidArgument);
        }

        let p = self.precision();

        if 2 * (self.exponent() as i64) < -(p as i64) - 2 {
            // sin(x) = x - x^3/3! + ...; only the direction of x^3 matters for rounding
            return self.add_tiny(self.sign().invert(), rm);
        }

        self.trig_eval(rm, cc, |x| x.sin_series())
    }

    /// Sine of a reduced argument using series. The result has the precision of the argument or larger.
    pub(super) fn sin_series(mut self) -> Result<Self, Error> {
        // sin:  x - x^3/3! + x^5/5! - x^7/7! + ...
        let rm = RoundingMode::ToEven;

        if self.is_zero() {
            return Ok(self);
        }

        let p = self.precision();

        // sin(3*x) = 3*sin(x) - 4*sin(x)^3; each division by 3 lowers the exponent by more than 1
        let target = -(2u32.max(sqrt_int(p as u32) / 2) as i32);
        let reduction_max = (self.exponent() as i64 - target as i64).max(0) as usize;
        let p_arg = p + reduction_max * 3;
        self.set_precision(p_arg, rm)?;

        let mut reduction_times = 0;
        while self.exponent() > target {
            self = self.div(&THREE, p_arg, rm)?;
            reduction_times += 1;
        }

        let mut polycoeff_gen = SinPolycoeffGen::new(p_arg)?;
        let x_step = self.mul(&self, p_arg, rm)?; // x^2
        let x_first = self.mul(&x_step, p_arg, rm)?; // x^3

        let mut ret = series_run(self, x_first, x_step, &mut polycoeff_gen, rm)?;

        for _ in 0..reduction_times {
            let sin2 = ret.mul(&ret, p_arg, rm)?;
            let t = THREE.sub(&sin2.mul(&FOUR, p_arg, rm)?, p_arg, rm)?;
            ret = ret.mul(&t, p_arg, rm)?;
        }

        Ok(ret)
    }
}
