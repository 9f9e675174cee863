//! Cosine.

use crate::common::consts::ONE;
use crate::common::util::sqrt_int;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::num::Float;
use crate::ops::consts::PiSource;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;

// Polynomial coefficient generator: -1/2!, 1/4!, -1/6!, ...
struct CosPolycoeffGen {
    i: u64,
    fct: Float,
    sign: Sign,
}

impl CosPolycoeffGen {
    fn new(p: usize) -> Result<Self, Error> {
        Ok(CosPolycoeffGen {
            i: 0,
            fct: Float::from_word(1, p)?,
            sign: Sign::Pos,
        })
    }
}

impl PolycoeffGen for CosPolycoeffGen {
    fn next(&mut self, rm: RoundingMode) -> Result<&Float, Error> {
        let p = self.fct.precision();

        let d = Float::from_word((self.i + 1) * (self.i + 2), 128)?;
        self.i += 2;

        self.fct = self.fct.div(&d, p, rm)?;
        self.sign = self.sign.invert();
        self.fct.set_sign(self.sign);

        Ok(&self.fct)
    }
}

impl Float {
    /// Computes the cosine of a number. The result has the precision of `self` and is rounded using the rounding mode `rm`.
    /// This function requires a source of pi `cc` for computing the result.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the argument is infinite.
    pub fn cos<C: PiSource + ?Sized>(&self, rm: RoundingMode, cc: &mut C) -> Result<Self, Error> {
        if self.is_zero() {
            return Self::from_word(1, self.precision());
        }

        if self.is_inf() {
            return Err(Error::InvalidArgument);
        }

        let p = self.precision();

        if 2 * (self.exponent() as i64) < -(p as i64) - 2 {
            // cos(x) = 1 - x^2/2 + ...
            return Self::from_word(1, p)?.add_tiny(Sign::Neg, rm);
        }

        self.trig_eval(rm, cc, |x| x.cos_series())
    }

    /// Cosine of a reduced argument using series. The result has the precision of the argument or larger.
    pub(super) fn cos_series(mut self) -> Result<Self, Error> {
        // cos:  1 - x^2/2! + x^4/4! - x^6/6! + ...
        let rm = RoundingMode::ToEven;
        let p = self.precision();

        if self.is_zero() {
            return Self::from_word(1, p);
        }

        // cos(2*x) = 2*cos(x)^2 - 1
        let target = -(2u32.max(sqrt_int(p as u32) / 2) as i32);
        let reduction_times = (self.exponent() as i64 - target as i64).max(0) as usize;
        let p_arg = p + reduction_times * 3;
        self.set_precision(p_arg, rm)?;

        let arg = self.mul_pow2(-(reduction_times as i64))?;

        let mut polycoeff_gen = CosPolycoeffGen::new(p_arg)?;
        let acc = Float::from_word(1, p_arg)?; // 1
        let x_step = arg.mul(&arg, p_arg, rm)?; // x^2
        let x_first = x_step.clone(); // x^2

        let mut ret = series_run(acc, x_first, x_step, &mut polycoeff_gen, rm)?;

        for _ in 0..reduction_times {
            let cos2 = ret.mul(&ret, p_arg, rm)?.mul_pow2(1)?;
            ret = cos2.sub(&ONE, p_arg, rm)?;
        }

        Ok(ret)
    }
}
