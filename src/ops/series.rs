//! Power series computation appliance.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::Float;

/// Generator of polynomial coefficients.
pub(crate) trait PolycoeffGen {
    /// Returns the next polynomial coefficient value.
    fn next(&mut self, rm: RoundingMode) -> Result<&Float, Error>;
}

/// Sums `acc + c1*x_first + c2*x_first*x_step + c3*x_first*x_step^2 + ...`, where `ci` are produced by `polycoeff_gen`.
/// The summation stops when adding a term no longer changes the accumulator at its precision.
/// The terms must decrease in magnitude, i.e. `x_step` must be small enough for the coefficients generated.
pub(crate) fn series_run<T: PolycoeffGen>(
    mut acc: Float,
    x_first: Float,
    x_step: Float,
    polycoeff_gen: &mut T,
    rm: RoundingMode,
) -> Result<Float, Error> {
    let p = acc.precision();
    let mut x_pow = x_first;

    loop {
        let coeff = polycoeff_gen.next(rm)?;
        let part = x_pow.mul(coeff, p, rm)?;

        if part.is_zero() {
            break;
        }

        let next = acc.add(&part, p, rm)?;
        if next == acc {
            break;
        }

        acc = next;
        x_pow = x_pow.mul(&x_step, p, rm)?;
    }

    Ok(acc)
}
