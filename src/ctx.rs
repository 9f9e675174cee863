//! Context bundles the precision, the rounding mode, and the constants cache used by operations.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use crate::num::Float;
use crate::ops::consts::Consts;
use crate::ops::consts::PiSource;

/// Context contains default parameters for operations: the precision of results,
/// the rounding mode, and the constants cache.
///
/// Arguments are first rounded to the precision of the context, so results always have the precision of the context.
#[derive(Debug, Clone)]
pub struct Context {
    cc: Consts,
    p: usize,
    rm: RoundingMode,
}

impl Context {
    /// Create a new context with precision `p`, rounding mode `rm`, and constants cache `cc`.
    pub fn new(p: usize, rm: RoundingMode, cc: Consts) -> Self {
        Context { cc, p, rm }
    }

    /// Decomposes `self` into raw parts: the constants cache, the precision, and the rounding mode.
    pub fn to_raw_parts(self) -> (Consts, usize, RoundingMode) {
        let Context { cc, p, rm } = self;
        (cc, p, rm)
    }

    /// Sets the precision of the context.
    pub fn set_precision(&mut self, p: usize) -> &mut Self {
        self.p = p;
        self
    }

    /// Sets the rounding mode of the context.
    pub fn set_rounding_mode(&mut self, rm: RoundingMode) -> &mut Self {
        self.rm = rm;
        self
    }

    /// Sets the constants cache of the context.
    pub fn set_consts(&mut self, cc: Consts) -> &mut Self {
        self.cc = cc;
        self
    }

    /// Returns the precision of the context.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the rounding mode of the context.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Returns a mutable reference to the constants cache of the context.
    pub fn consts(&mut self) -> &mut Consts {
        &mut self.cc
    }

    /// Returns the value of the pi number with the precision of the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision of the context is zero.
    pub fn const_pi(&mut self) -> Result<Float, Error> {
        self.cc.pi(self.p, self.rm)
    }

    /// Constructs a number with the precision of the context from f64 value.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision of the context is zero, or `f` is NaN.
    pub fn from_f64(&self, f: f64) -> Result<Float, Error> {
        let mut ret = Float::from_f64(f, self.p.max(53))?;
        ret.set_precision(self.p, self.rm)?;
        Ok(ret)
    }

    /// Parses a decimal number with the precision and the rounding mode of the context.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the string is not a number, or the precision of the context is zero.
    ///  - ExponentOverflow: the number is too large.
    pub fn parse(&self, s: &str) -> Result<Float, Error> {
        Float::parse(s, self.p, self.rm)
    }

    // Argument rounded to the precision of the context.
    fn arg(&self, x: &Float) -> Result<Float, Error> {
        let mut x = x.clone();
        x.set_precision(self.p, self.rm)?;
        Ok(x)
    }

    /// Returns `x` to the power of an integer `n`.
    ///
    /// ## Errors
    ///
    ///  - ExponentOverflow: the result is too large.
    pub fn powsi(&self, x: &Float, n: i64) -> Result<Float, Error> {
        self.arg(x)?.powsi(n, self.rm)
    }

    /// Returns the arithmetic-geometric mean of `a` and `b`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: either argument is not positive, or not finite.
    pub fn agm(&self, a: &Float, b: &Float) -> Result<Float, Error> {
        self.arg(a)?.agm(&self.arg(b)?)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new(DEFAULT_P, DEFAULT_RM, Consts::new())
    }
}

impl PiSource for Context {
    fn pi(&mut self, p: usize, rm: RoundingMode) -> Result<Float, Error> {
        self.cc.pi(p, rm)
    }
}

macro_rules! impl_fun_rm {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        ///
        /// ## Errors
        ///
        /// See the function with the same name defined for `Float`.
        pub fn $fname(&self, x: &Float) -> Result<Float, Error> {
            self.arg(x)?.$fname(self.rm)
        }
    };
}

macro_rules! impl_fun_rm_cc {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        ///
        /// ## Errors
        ///
        /// See the function with the same name defined for `Float`.
        pub fn $fname(&mut self, x: &Float) -> Result<Float, Error> {
            self.arg(x)?.$fname(self.rm, &mut self.cc)
        }
    };
}

macro_rules! impl_fun_arg_rm_cc {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        ///
        /// ## Errors
        ///
        /// See the function with the same name defined for `Float`.
        pub fn $fname(&mut self, x: &Float, arg: &Float) -> Result<Float, Error> {
            self.arg(x)?.$fname(arg, self.rm, &mut self.cc)
        }
    };
}

impl Context {
    impl_fun_rm!("Returns the square root of a number.", sqrt);
    impl_fun_rm_cc!("Returns the natural logarithm of a number.", ln);
    impl_fun_rm_cc!("Returns the exponent of a number.", exp);
    impl_fun_arg_rm_cc!("Returns the power of a number.", pow);

    impl_fun_rm_cc!("Returns the sine of a number.", sin);
    impl_fun_rm_cc!("Returns the cosine of a number.", cos);
    impl_fun_rm_cc!("Returns the tangent of a number.", tan);
    impl_fun_rm_cc!("Returns the arctangent of a number.", atan);
}
