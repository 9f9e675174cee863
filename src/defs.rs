//! Definitions.

use core::fmt::Display;

/// An exponent.
pub type Exponent = i32;

/// Maximum exponent value.
pub const EXPONENT_MAX: Exponent = Exponent::MAX;

/// Minimum exponent value.
pub const EXPONENT_MIN: Exponent = Exponent::MIN;

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Default precision.
pub const DEFAULT_P: usize = 128;

/// Number of extra bits carried by intermediate values of the elementary functions.
pub const GUARD_BITS: usize = 64;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    /// Sign of a product or a quotient of numbers with signs `self` and `s2`.
    pub(crate) fn mul(&self, s2: Sign) -> Sign {
        if *self == s2 {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// The exponent value becomes greater than the upper limit of the range of exponent values.
    ExponentOverflow(Sign),

    /// Invalid argument: zero precision, an operation without a numeric result (e.g. `inf - inf`), or a malformed string.
    InvalidArgument,

    /// Square root or logarithm of a negative number.
    NegativeArgument,

    /// Negative base raised to a non-integer power.
    NegativeBase,

    /// Operands are required to have the same precision.
    PrecisionMismatch,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::ExponentOverflow(s) => {
                if s.is_positive() {
                    "positive overflow"
                } else {
                    "negative overflow"
                }
            }
            Error::InvalidArgument => "invalid argument",
            Error::NegativeArgument => "argument must not be negative",
            Error::NegativeBase => "negative base requires an integer exponent",
            Error::PrecisionMismatch => "operands must have the same precision",
        };
        f.write_str(repr)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ExponentOverflow(l0), Self::ExponentOverflow(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Rounding modes.
///
/// `ToEven` and `ToOdd` round to the nearest representable value and differ only in how ties are resolved.
/// The other modes are directed.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum RoundingMode {
    /// Round toward positive infinity.
    Up = 2,

    /// Round toward negative infinity.
    Down = 4,

    /// Round toward zero.
    ToZero = 8,

    /// Round away from zero.
    FromZero = 16,

    /// Round to nearest, half to even.
    ToEven = 32,

    /// Round to nearest, half to odd.
    ToOdd = 64,
}

impl RoundingMode {
    /// Decides whether a truncated magnitude must be incremented by one unit in the last place.
    /// `odd` is the last retained bit, `half` is the first discarded bit, `low` tells if any discarded bit after it is set.
    pub(crate) fn round_up(&self, s: Sign, odd: bool, half: bool, low: bool) -> bool {
        let inexact = half || low;
        match self {
            RoundingMode::Up => inexact && s.is_positive(),
            RoundingMode::Down => inexact && s.is_negative(),
            RoundingMode::ToZero => false,
            RoundingMode::FromZero => inexact,
            RoundingMode::ToEven => half && (low || odd),
            RoundingMode::ToOdd => half && (low || !odd),
        }
    }
}
