//! Fixed-window admission control.
//!
//! [`RateLimiter`] hands out at most `capacity` permits per window. Permits are consumed,
//! never returned; a background task owned by the limiter hard-resets the available count
//! to `capacity` at every window boundary. Because the reset is not additive, bursts that
//! straddle a boundary may admit up to twice the nominal rate within one window length.

// crates.io
use tokio::{
	sync::Semaphore,
	task::JoinHandle,
	time::{self, Instant, MissedTickBehavior},
};
// self
use crate::{_prelude::*, error::ConfigError, obs};

/// Shared fixed-window permit pool with a background reset task.
pub struct RateLimiter {
	semaphore: Arc<Semaphore>,
	capacity: u32,
	window: StdDuration,
	reset_task: Mutex<Option<JoinHandle<()>>>,
}
impl RateLimiter {
	/// Creates a full permit pool and schedules the periodic reset on the current runtime.
	pub fn start(capacity: u32, window: StdDuration) -> Result<Self, ConfigError> {
		if capacity == 0 {
			return Err(ConfigError::ZeroCapacity);
		}
		if window.is_zero() {
			return Err(ConfigError::ZeroWindow);
		}

		let runtime = tokio::runtime::Handle::try_current().map_err(|_| ConfigError::NoRuntime)?;
		let semaphore = Arc::new(Semaphore::new(capacity as usize));
		let first_reset = Instant::now() + window;
		let reset_task =
			runtime.spawn(reset_every(semaphore.clone(), capacity as usize, first_reset, window));

		Ok(Self { semaphore, capacity, window, reset_task: Mutex::new(Some(reset_task)) })
	}

	/// Waits until a permit is available and consumes it.
	///
	/// Waiters are not served in any promised order. Fails only with [`Error::Closed`] once
	/// the limiter has been shut down.
	pub async fn acquire(&self) -> Result<()> {
		let permit = self.semaphore.acquire().await.map_err(|_| Error::Closed)?;

		permit.forget();

		Ok(())
	}

	/// Returns the permits left in the current window.
	pub fn available(&self) -> u32 {
		self.semaphore.available_permits() as u32
	}

	/// Returns the configured permits per window.
	pub fn capacity(&self) -> u32 {
		self.capacity
	}

	/// Returns the window length.
	pub fn window(&self) -> StdDuration {
		self.window
	}

	/// Returns `true` once [`shutdown`](Self::shutdown) has run.
	pub fn is_shut_down(&self) -> bool {
		self.semaphore.is_closed()
	}

	/// Stops the reset task and wakes every waiter with [`Error::Closed`]. Idempotent.
	pub fn shutdown(&self) {
		self.semaphore.close();

		if let Some(task) = self.reset_task.lock().take() {
			task.abort();
			obs::debug_event!(capacity = self.capacity, "rate limiter shut down");
		}
	}
}
impl Drop for RateLimiter {
	fn drop(&mut self) {
		if let Some(task) = self.reset_task.get_mut().take() {
			task.abort();
		}
	}
}
impl Debug for RateLimiter {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RateLimiter")
			.field("capacity", &self.capacity)
			.field("available", &self.available())
			.field("window", &self.window)
			.field("shut_down", &self.is_shut_down())
			.finish()
	}
}

async fn reset_every(
	semaphore: Arc<Semaphore>,
	capacity: usize,
	first_reset: Instant,
	window: StdDuration,
) {
	let mut ticker = time::interval_at(first_reset, window);

	ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

	loop {
		ticker.tick().await;

		if semaphore.is_closed() {
			break;
		}

		// Only this task adds permits, so the pool can never exceed `capacity`.
		let refill = capacity.saturating_sub(semaphore.available_permits());

		if refill > 0 {
			semaphore.add_permits(refill);
			obs::debug_event!(refill, "rate window reset");
		}
	}
}
