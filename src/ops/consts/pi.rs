//! π number

use crate::common::util::log2_ceil;
use crate::defs::{Error, RoundingMode, GUARD_BITS};
use crate::num::Float;

/// Holds the most precise value of pi computed so far.
/// The value carries guard bits, so a lookup rounds only once.
#[derive(Debug, Clone, Default)]
pub struct PiCache {
    p: usize,
    val: Option<Float>,
}

impl PiCache {
    pub fn new() -> Self {
        PiCache { p: 0, val: None }
    }

    /// Precision the cache can serve without recomputing.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns pi with precision `p` if the cache holds at least that precision.
    pub(crate) fn lookup(&self, p: usize, rm: RoundingMode) -> Result<Option<Float>, Error> {
        match &self.val {
            Some(v) if p <= self.p => {
                let mut ret = v.clone();
                ret.set_precision(p, rm)?;
                Ok(Some(ret))
            }
            _ => Ok(None),
        }
    }

    /// Replaces the cached value if `p` is higher than the cached precision.
    pub(crate) fn store(&mut self, p: usize, val: Float) {
        if p > self.p {
            self.p = p;
            self.val = Some(val);
        }
    }

    /// Computes pi for precision `p` with guard bits, using the Gauss-Legendre iteration.
    pub(crate) fn compute(p: usize) -> Result<Float, Error> {
        Float::check_p(p)?;

        let pe = p + GUARD_BITS;
        let rm = RoundingMode::ToEven;

        // a = 1, b = 1/sqrt(2), t = 1/4, q = 1
        let mut a = Float::from_word(1, pe)?;
        let mut b = Float::from_word(1, pe)?.mul_pow2(-1)?.sqrt(rm)?;
        let mut t = Float::from_word(1, pe)?.mul_pow2(-2)?;
        let mut q = Float::from_word(1, pe)?;

        for _ in 0..log2_ceil(pe) {
            let an = a.add(&b, pe, rm)?.mul_pow2(-1)?;
            b = a.mul(&b, pe, rm)?.sqrt(rm)?;

            let d = a.sub(&an, pe, rm)?;
            let d2 = d.mul(&d, pe, rm)?;
            t = t.sub(&q.mul(&d2, pe, rm)?, pe, rm)?;
            q = q.mul_pow2(1)?;

            a = an;
        }

        // (a + b)^2 / (4t)
        let s = a.add(&b, pe, rm)?;
        let s2 = s.mul(&s, pe, rm)?;
        s2.div(&t.mul_pow2(2)?, pe, rm)
    }

    /// Return value of PI with precision `p`.
    pub(crate) fn for_prec(&mut self, p: usize, rm: RoundingMode) -> Result<Float, Error> {
        Float::check_p(p)?;

        if let Some(v) = self.lookup(p, rm)? {
            return Ok(v);
        }

        let val = Self::compute(p)?;
        self.store(p, val);

        self.lookup(p, rm)?.ok_or(Error::InvalidArgument)
    }
}

/// Computes the pi number with precision `p` using rounding mode `rm` without caching.
///
/// ## Errors
///
///  - InvalidArgument: the precision is zero.
pub fn pi(p: usize, rm: RoundingMode) -> Result<Float, Error> {
    let mut ret = PiCache::compute(p)?;
    ret.set_precision(p, rm)?;
    Ok(ret)
}
