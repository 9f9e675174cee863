//! Formatting of numbers as decimal strings.

use crate::num::Flavor;
use crate::num::Float;
use core::fmt::Display;
use core::fmt::Formatter;
use num_bigint::BigUint;

const LOG10_2: f64 = 0.30102999566398119521;

impl Float {
    /// Returns the decimal digits of `m * 2^l` rounded to `n` significant digits, and the decimal exponent of the first digit.
    /// `e` is the binary exponent of the value.
    fn decimal_digits(m: &BigUint, l: i64, n: usize, e: i64) -> (String, i64) {
        let ten = BigUint::from(10u32);
        let mut d = ((e - 1) as f64 * LOG10_2).floor() as i64;

        // the estimate can be off by one, and a carry of the rounding moves the exponent up once
        loop {
            let t = n as i64 - 1 - d;

            let mut num = m.clone();
            let mut den = BigUint::from(1u32);

            if l >= 0 {
                num <<= l as usize;
            } else {
                den <<= (-l) as usize;
            }

            if t >= 0 {
                num *= ten.pow(t as u32);
            } else {
                den *= ten.pow((-t) as u32);
            }

            // round half up
            let q = ((num << 1usize) + &den) / (den << 1usize);
            let digits = q.to_str_radix(10);

            if digits.len() > n {
                d += 1;
            } else if digits.len() < n {
                d -= 1;
            } else {
                return (digits, d);
            }
        }
    }
}

impl Display for Float {
    /// Formats the number in the scientific notation with enough digits to represent the binary precision,
    /// e.g. `-1.25e+2`.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };

        match &self.f {
            Flavor::Zero => write!(f, "{}0.0", sign),
            Flavor::Inf => write!(f, "{}Inf", sign),
            Flavor::Value { m, e } => {
                let n = (self.p as f64 * LOG10_2).ceil() as usize + 1;
                let (digits, d) = Self::decimal_digits(m, *e as i64 - self.p as i64, n, *e as i64);

                let (int, frac) = digits.split_at(1);
                let frac = frac.trim_end_matches('0');
                let frac = if frac.is_empty() { "0" } else { frac };
                let esign = if d < 0 { '-' } else { '+' };

                write!(f, "{}{}.{}e{}{}", sign, int, frac, esign, d.unsigned_abs())
            }
        }
    }
}
