//! Conversion utilities.

use crate::common::util::ldexp;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::num::Flavor;
use crate::num::Float;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

impl Float {
    /// Constructs a number with precision `p` from a word.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn from_word(w: u64, p: usize) -> Result<Self, Error> {
        Self::from_parts(Sign::Pos, BigUint::from(w), 0, false, p, RoundingMode::ToEven)
    }

    /// Constructs a number with precision `p` from a signed integer.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn from_i64(i: i64, p: usize) -> Result<Self, Error> {
        let s = if i < 0 { Sign::Neg } else { Sign::Pos };
        Self::from_parts(s, BigUint::from(i.unsigned_abs()), 0, false, p, RoundingMode::ToEven)
    }

    /// Constructs a number with precision `p` from f64 value.
    /// The value is rounded to the nearest, ties to even, if `p` is less than 53.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero, or `f` is NaN.
    pub fn from_f64(f: f64, p: usize) -> Result<Self, Error> {
        Self::check_p(p)?;

        if f.is_nan() {
            return Err(Error::InvalidArgument);
        }

        let s = if f.is_sign_negative() { Sign::Neg } else { Sign::Pos };

        if f.is_infinite() {
            return Self::inf(p, s);
        }

        if f == 0.0 {
            return Self::new2(p, s);
        }

        let bits = f.to_bits();
        let exp = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & ((1u64 << 52) - 1);

        let (m, e2) = if exp == 0 {
            (frac, -1074)
        } else {
            (frac | (1u64 << 52), exp - 1075)
        };

        Self::from_parts(s, BigUint::from(m), e2, false, p, RoundingMode::ToEven)
    }

    /// Converts `self` to f64 rounding to the nearest, ties to even.
    /// Values outside of the range of f64 become infinity or zero.
    pub fn to_f64(&self) -> f64 {
        let sign = if self.is_negative() { -1.0 } else { 1.0 };

        match &self.f {
            Flavor::Zero => sign * 0.0,
            Flavor::Inf => sign * f64::INFINITY,
            Flavor::Value { .. } => {
                let mut x = self.clone();
                if x.p > 53 && x.set_precision(53, RoundingMode::ToEven).is_err() {
                    return sign * f64::INFINITY;
                }

                match &x.f {
                    Flavor::Value { m, e } => {
                        let m = m.to_u64().map_or(f64::INFINITY, |v| v as f64);
                        sign * ldexp(m, *e as i64 - x.p as i64)
                    }
                    _ => sign * 0.0,
                }
            }
        }
    }
}
