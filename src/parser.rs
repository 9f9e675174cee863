//! Decimal string parsing.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use crate::num::Float;
use core::str::FromStr;
use num_bigint::BigUint;
use num_traits::Zero;

// Decimal orders of magnitude beyond this value cannot be represented with a binary exponent of 32 bits.
const DECIMAL_MAGNITUDE_MAX: i64 = 646_456_994;

// Parsed representation: sign, decimal digits, decimal exponent applied to the digits as an integer.
struct Decimal {
    s: Sign,
    digits: Vec<u8>,
    exp: i64,
    inf: bool,
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (Sign::Neg, &s[1..]),
        Some(b'+') => (Sign::Pos, &s[1..]),
        _ => (Sign::Pos, s),
    };

    if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
        return Some(Decimal {
            s: sign,
            digits: Vec::new(),
            exp: 0,
            inf: true,
        });
    }

    let (mant, exp) = match rest.find(|c| c == 'e' || c == 'E') {
        Some(i) => (&rest[..i], rest[i + 1..].parse::<i64>().ok()?),
        None => (rest, 0),
    };

    let mut digits = Vec::with_capacity(mant.len());
    let mut frac_len = 0i64;
    let mut dot = false;

    for c in mant.bytes() {
        match c {
            b'0'..=b'9' => {
                digits.push(c);
                if dot {
                    frac_len += 1;
                }
            }
            b'.' if !dot => dot = true,
            _ => return None,
        }
    }

    if digits.is_empty() {
        return None;
    }

    Some(Decimal {
        s: sign,
        digits,
        exp: exp.checked_sub(frac_len)?,
        inf: false,
    })
}

impl Float {
    /// Parses a decimal number from the string `s`, and returns it rounded to precision `p` using rounding mode `rm`.
    /// Accepted forms are `[+-]digits[.digits][(e|E)[+-]digits]`, and `[+-]inf`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero, or the string is not a number.
    ///  - ExponentOverflow: the value is too large to be represented.
    pub fn parse(s: &str, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        Self::check_p(p)?;

        let dec = parse_decimal(s).ok_or(Error::InvalidArgument)?;

        if dec.inf {
            return Self::inf(p, dec.s);
        }

        let n = BigUint::parse_bytes(&dec.digits, 10).ok_or(Error::InvalidArgument)?;

        if n.is_zero() {
            return Self::new2(p, dec.s);
        }

        let magnitude = dec.exp + dec.digits.len() as i64;
        if magnitude > DECIMAL_MAGNITUDE_MAX {
            return Err(Error::ExponentOverflow(dec.s));
        } else if magnitude < -DECIMAL_MAGNITUDE_MAX {
            return Self::new2(p, dec.s);
        }

        let ten = BigUint::from(10u32);

        if dec.exp >= 0 {
            let m = n * ten.pow(dec.exp as u32);
            Self::from_parts(dec.s, m, 0, false, p, rm)
        } else {
            // exact quotient with at least p + 2 bits and a sticky remainder
            let den = ten.pow((-dec.exp) as u32);
            let k = (p as u64 + 2 + den.bits()).saturating_sub(n.bits()) as usize;
            let num = n << k;
            let q = &num / &den;
            let r = &num % &den;
            Self::from_parts(dec.s, q, -(k as i64), !r.is_zero(), p, rm)
        }
    }
}

impl FromStr for Float {
    type Err = Error;

    /// Parses a number with the default precision and rounding mode.
    fn from_str(src: &str) -> Result<Float, Self::Err> {
        Float::parse(src, DEFAULT_P, DEFAULT_RM)
    }
}
