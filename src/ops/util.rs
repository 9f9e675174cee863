//! Auxiliary items.

use crate::defs::{Error, RoundingMode, Sign, GUARD_BITS};
use crate::num::Float;
use crate::ops::consts::PiSource;

impl Float {
    /// Returns a copy of `self` extended with guard bits plus `add` more bits.
    /// The extension is exact: a mantissa never shrinks here.
    pub(crate) fn extended(&self, add: usize) -> Result<Self, Error> {
        let mut x = self.clone();
        x.set_precision(self.precision() + GUARD_BITS + add, RoundingMode::ToEven)?;
        Ok(x)
    }

    /// Returns `self` plus a term of sign `s` too small to change `self` other than through rounding with `rm`.
    /// The term is scaled together with `self`, so it never underflows.
    pub(crate) fn add_tiny(&self, s: Sign, rm: RoundingMode) -> Result<Self, Error> {
        let p = self.precision();
        let (m, e) = self.mant_exp();
        let mut t = m.mul_pow2(-(p as i64) - 2)?;
        t.set_sign(s);
        m.add(&t, p, rm)?.mul_pow2(e as i64)
    }

    /// Evaluates a periodic function `f` of the argument reduced by `reduce_trig_arg`, and rounds the result to
    /// the precision of `self`. When the result turns out to be much smaller than the argument, the leading bits
    /// cancelled, and the computation is repeated with that many more bits.
    pub(crate) fn trig_eval<C, F>(&self, rm: RoundingMode, cc: &mut C, f: F) -> Result<Self, Error>
    where
        C: PiSource + ?Sized,
        F: Fn(Self) -> Result<Self, Error>,
    {
        let p = self.precision();
        let mut add_p = 0;

        loop {
            let x = self.extended(add_p)?.reduce_trig_arg(cc)?;
            let mut ret = f(x)?;

            if ret.is_zero() {
                add_p += p;
                continue;
            }

            let e = ret.exponent();
            let loss = (self.exponent().min(2).max(e) as i64 - e as i64) as usize;
            if loss > add_p + 8 {
                add_p = loss;
                continue;
            }

            ret.set_precision(p, rm)?;

            break Ok(ret);
        }
    }

    /// Reduce `self` to interval (-pi; pi) keeping its precision.
    pub(crate) fn reduce_trig_arg<C: PiSource + ?Sized>(&self, cc: &mut C) -> Result<Self, Error> {
        if self.exponent() > 2 {
            let p = self.precision();
            let p_ext = p + self.exponent() as usize;

            let mut two_pi = cc.pi(p_ext + GUARD_BITS, RoundingMode::ToEven)?;
            two_pi.set_exponent(two_pi.exponent() + 1);

            // nearest integer number of periods
            let q = self.div(&two_pi, p_ext, RoundingMode::ToEven)?;
            let mut half = Float::from_word(1, 1)?.mul_pow2(-1)?;
            half.set_sign(q.sign());
            let n = q.add(&half, p_ext, RoundingMode::ToZero)?.int();

            let np = n.mul(&two_pi, p_ext + two_pi.precision(), RoundingMode::ToEven)?;
            self.sub(&np, p, RoundingMode::ToEven)
        } else {
            Ok(self.clone())
        }
    }
}
