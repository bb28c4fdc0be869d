//! Counters for challenge/exchange sequences run by a [`CredentialCache`](super::CredentialCache).
//!
//! Cache hits and sticky replays are not counted; only sequences that started a fetch are.
//! A fetch cut short by `close` or by a caller's deadline still counts as a failure even
//! though it leaves the cache state untouched. The counters survive `reopen`, so they
//! describe the whole gateway lifetime rather than one epoch.

// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Lifetime totals of credential fetches shared across gateway epochs.
#[derive(Debug, Default)]
pub struct CredentialMetrics {
	attempts: AtomicU64,
	success: AtomicU64,
	failure: AtomicU64,
}
impl CredentialMetrics {
	/// Returns how many challenge/exchange sequences were started.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns how many sequences produced a token.
	pub fn successes(&self) -> u64 {
		self.success.load(Ordering::Relaxed)
	}

	/// Returns how many sequences failed, sticky or interrupted.
	pub fn failures(&self) -> u64 {
		self.failure.load(Ordering::Relaxed)
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_success(&self) {
		self.success.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failure.fetch_add(1, Ordering::Relaxed);
	}
}
