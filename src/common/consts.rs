//! Static constants.

use crate::{defs::DEFAULT_P, num::Float};
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: Float = Float::from_word(1, DEFAULT_P).expect("Constant ONE initialization.");

    /// 3
    pub(crate) static ref THREE: Float = Float::from_word(3, DEFAULT_P).expect("Constant THREE initialization.");

    /// 4
    pub(crate) static ref FOUR: Float = Float::from_word(4, DEFAULT_P).expect("Constant FOUR initialization.");
}
