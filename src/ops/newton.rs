//! Newton's method with precision doubling.

use crate::defs::{Error, RoundingMode, GUARD_BITS};
use crate::num::Float;

/// Solves `f(x) = 0` starting from `guess`, which must have at least `p_start` correct bits
/// and lie in the basin of convergence. `ratio(x)` returns `f(x) / f'(x)` computed with the precision of `x`.
///
/// Each step `x <- x - ratio(x)` doubles the number of correct bits, so the working precision is doubled along with it,
/// until it reaches twice the target precision `p`. The result has precision `p`.
/// Convergence is not verified: the loop count depends only on the precision schedule.
pub(crate) fn newton<F>(mut ratio: F, guess: &Float, p_start: usize, p: usize) -> Result<Float, Error>
where
    F: FnMut(&Float) -> Result<Float, Error>,
{
    let mut p_cur = p_start.max(1);

    let mut x = guess.clone();
    x.set_precision(p_cur + GUARD_BITS, RoundingMode::ToEven)?;

    while p_cur < 2 * p {
        let r = ratio(&x)?;
        x = x.sub(&r, x.precision(), RoundingMode::ToEven)?;

        p_cur *= 2;
        x.set_precision(p_cur.min(2 * p) + GUARD_BITS, RoundingMode::ToEven)?;
    }

    x.set_precision(p, RoundingMode::ToEven)?;

    Ok(x)
}
