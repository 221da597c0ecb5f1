//! Nonce generation for signed requests.
//!
//! The exchange rejects a signed request whose nonce is not strictly greater
//! than the last nonce it accepted for the same key. [`MonotonicNonce`] hands
//! out microsecond timestamps, bumped past the previous value whenever the
//! clock has not advanced (or went backwards).
//!
//! A source that has handed out `u64::MAX` is exhausted: strict increase can
//! no longer hold, so further draws fail instead of repeating a value.

use crate::error::{Error, Result};
use chrono::Utc;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A source of nonces for private calls.
///
/// Implementations must return strictly increasing values across all calls
/// on the same instance, including concurrent ones.
pub trait NonceSource: Send + Sync + fmt::Debug {
    /// Returns the next nonce, or an error once no greater value exists.
    fn next_nonce(&self) -> Result<u64>;
}

/// Lock-free, strictly increasing nonce generator.
///
/// Each call returns `max(now_in_microseconds, previous + 1)`. The previous
/// value lives in an [`AtomicU64`] updated by compare-and-swap, so two
/// concurrent callers can never observe the same value.
///
/// # Example
///
/// ```rust
/// use poloniex_core::nonce::{MonotonicNonce, NonceSource};
///
/// let nonces = MonotonicNonce::new();
/// let a = nonces.next_nonce()?;
/// let b = nonces.next_nonce()?;
/// assert!(b > a);
/// # Ok::<(), poloniex_core::error::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct MonotonicNonce {
    last: AtomicU64,
}

impl MonotonicNonce {
    /// Creates a generator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator whose first nonce will be greater than `floor`.
    ///
    /// Useful when a key was previously used by a process whose clock ran ahead.
    /// A floor of `u64::MAX` yields an already exhausted generator.
    pub fn starting_after(floor: u64) -> Self {
        Self {
            last: AtomicU64::new(floor),
        }
    }

    /// Returns the last nonce handed out (or the initial floor).
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Acquire)
    }
}

fn now_micros() -> u64 {
    u64::try_from(Utc::now().timestamp_micros()).unwrap_or(0)
}

impl NonceSource for MonotonicNonce {
    fn next_nonce(&self) -> Result<u64> {
        let mut current = self.last.load(Ordering::Acquire);
        loop {
            let successor = current
                .checked_add(1)
                .ok_or_else(|| Error::invalid_request("nonce source exhausted at u64::MAX"))?;
            let candidate = now_micros().max(successor);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Ok(candidate),
                Err(actual) => current = actual,
            }
        }
    }
}

/// Always returns the same nonce. Only meaningful for deterministic signing
/// tests; the exchange would reject a repeated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNonce(pub u64);

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> Result<u64> {
        Ok(self.0)
    }
}
