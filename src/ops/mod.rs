//! High-level operations on the numbers.

mod agm;
mod atan;
pub mod consts;
mod cos;
mod exp;
mod log;
mod newton;
mod pow;
mod powi;
mod series;
mod sin;
mod sqrt;
mod tan;
mod util;
