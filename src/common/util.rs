//! Auxiliary functions.

/// integer logarithm base 2 of a number.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// square root integer approximation.
pub fn sqrt_int(a: u32) -> u32 {
    let a = a as u64;
    let mut x = a;
    for _ in 0..20 {
        if x == 0 {
            break;
        }
        x = (a / x + x) >> 1;
    }
    x as u32
}

/// Number of significant bits in `n`.
pub fn bit_len(n: u64) -> usize {
    (u64::BITS - n.leading_zeros()) as usize
}

/// Returns `f * 2^n` without intermediate overflow of the power of two.
pub fn ldexp(mut f: f64, mut n: i64) -> f64 {
    const STEP: i64 = 1000;

    while n > STEP && f.is_finite() {
        f *= 2f64.powi(STEP as i32);
        n -= STEP;
    }

    while n < -STEP && f != 0.0 {
        f *= 2f64.powi(-STEP as i32);
        n += STEP;
    }

    if n > STEP || n < -STEP {
        f
    } else {
        f * 2f64.powi(n as i32)
    }
}
