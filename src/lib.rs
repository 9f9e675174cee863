//! Arbitrary precision binary floating point numbers with elementary functions implemented purely in Rust.
//!
//! Functions provided: square root, natural logarithm, exponent, power, sine, cosine, tangent, arctangent,
//! the arithmetic-geometric mean, and the pi number. A result has the precision of the argument,
//! and it is rounded using the rounding mode passed to the function.
//!
//! Logarithm and pi are computed with the arithmetic-geometric mean, square root and exponent with Newton's method,
//! and trigonometric functions with power series. All intermediate computations are done with guard bits.
//!
//! ## Examples
//!
//! ```
//! use bigfloat_fn::{Consts, Float, RoundingMode};
//!
//! // Rounding of all operations.
//! let rm = RoundingMode::ToEven;
//!
//! // The cache of the pi number.
//! let mut cc = Consts::new();
//!
//! let x = Float::parse("2", 256, rm).unwrap();
//! let y = x.ln(rm, &mut cc).unwrap().exp(rm, &mut cc).unwrap();
//!
//! assert_eq!(x, y);
//! ```
//!
//! The same with a context:
//!
//! ```
//! use bigfloat_fn::{Context, RoundingMode};
//!
//! let mut ctx = Context::default();
//! ctx.set_precision(256).set_rounding_mode(RoundingMode::ToEven);
//!
//! let pi = ctx.const_pi().unwrap();
//! let c = ctx.cos(&pi).unwrap();
//!
//! assert_eq!(c, ctx.from_f64(-1.0).unwrap());
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

mod common;
mod conv;
pub mod ctx;
mod defs;
mod num;
mod ops;
mod parser;
mod strop;

pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::num::Float;
pub use crate::ops::consts::pi;
pub use crate::ops::consts::Consts;
pub use crate::ops::consts::PiSource;
pub use crate::ops::consts::SharedConsts;

pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::defs::GUARD_BITS;
