//! Cache of mathematical constants.

mod pi;

pub use crate::ops::consts::pi::pi;

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::Float;
use crate::ops::consts::pi::PiCache;
use parking_lot::RwLock;

/// Source of the pi number for the functions which need it.
pub trait PiSource {
    /// Returns the value of the pi number with precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    fn pi(&mut self, p: usize, rm: RoundingMode) -> Result<Float, Error>;
}

/// Constants cache contains arbitrary-precision mathematical constants.
/// It is owned by the caller and passed to functions by mutable reference.
#[derive(Debug, Clone, Default)]
pub struct Consts {
    pi: PiCache,
}

/// In an ideal situation, the `Consts` structure is initialized with `Consts::new` only once,
/// and then used where needed.
impl Consts {
    /// Initializes an empty constants cache.
    pub fn new() -> Self {
        Consts { pi: PiCache::new() }
    }

    /// Returns the value of the pi number with precision `p` using rounding mode `rm`.
    /// The value is computed only if the cache does not hold pi with at least precision `p`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn pi(&mut self, p: usize, rm: RoundingMode) -> Result<Float, Error> {
        self.pi.for_prec(p, rm)
    }

    /// Returns the highest precision of pi computed so far, or 0 if pi was never computed.
    pub fn pi_precision(&self) -> usize {
        self.pi.precision()
    }
}

impl PiSource for Consts {
    fn pi(&mut self, p: usize, rm: RoundingMode) -> Result<Float, Error> {
        Consts::pi(self, p, rm)
    }
}

/// Constants cache which can be shared between threads.
///
/// Lookups take a read lock. When a higher precision is requested, the value is computed without holding the lock,
/// and then replaces the cached value if no other thread has stored a more precise one in the meantime.
#[derive(Debug, Default)]
pub struct SharedConsts {
    pi: RwLock<PiCache>,
}

impl SharedConsts {
    /// Initializes an empty shared constants cache.
    pub fn new() -> Self {
        SharedConsts {
            pi: RwLock::new(PiCache::new()),
        }
    }

    /// Returns the value of the pi number with precision `p` using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    pub fn pi(&self, p: usize, rm: RoundingMode) -> Result<Float, Error> {
        Float::check_p(p)?;

        if let Some(v) = self.pi.read().lookup(p, rm)? {
            return Ok(v);
        }

        let fresh = PiCache::compute(p)?;
        let mut ret = fresh.clone();
        ret.set_precision(p, rm)?;

        self.pi.write().store(p, fresh);

        Ok(ret)
    }

    /// Returns the highest precision of pi computed so far, or 0 if pi was never computed.
    pub fn pi_precision(&self) -> usize {
        self.pi.read().precision()
    }
}

impl PiSource for &SharedConsts {
    fn pi(&mut self, p: usize, rm: RoundingMode) -> Result<Float, Error> {
        SharedConsts::pi(self, p, rm)
    }
}
