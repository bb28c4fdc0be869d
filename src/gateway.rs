//! Gateway façade composing the rate limiter, credential cache, and executor.
//!
//! A [`Gateway`] owns one *epoch* at a time: a [`RateLimiter`] with its reset task plus an
//! empty [`CredentialCache`]. [`Gateway::close`] ends the epoch (waiters wake with
//! [`Error::Closed`]); [`Gateway::reopen`] starts a fresh one, clearing any sticky credential
//! failure. Share a gateway between tasks with `Arc<Gateway<_>>`; one gateway per target
//! service keeps the caller-side quota meaningful.

mod documents;
mod issuer;

// std
use std::sync::atomic::{AtomicU64, Ordering};
// crates.io
use tokio::time::{self, Instant};
// self
use crate::{
	_prelude::*,
	config::GatewayConfig,
	credential::{CredentialCache, CredentialMetrics, CredentialState, TokenSecret},
	executor::RequestExecutor,
	http::HttpTransport,
	limiter::RateLimiter,
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
	request::RequestDescriptor,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Gateway specialized for the crate's default reqwest transport.
pub type ReqwestGateway = Gateway<ReqwestTransport>;

/// Lifecycle state of a [`Gateway`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GatewayState {
	/// Reset task scheduled; `submit` is accepted.
	Ready,
	/// Closed; `submit` fails with [`Error::Closed`] until [`Gateway::reopen`].
	Closed,
}
impl GatewayState {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			GatewayState::Ready => "ready",
			GatewayState::Closed => "closed",
		}
	}
}
impl Display for GatewayState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

struct Epoch {
	id: u64,
	limiter: RateLimiter,
	credentials: CredentialCache,
}
impl Epoch {
	fn start(id: u64, config: &GatewayConfig, metrics: Arc<CredentialMetrics>) -> Result<Self> {
		let limiter = RateLimiter::start(config.capacity, config.window)?;
		let credentials = CredentialCache::new(config.token_lifetime, metrics);

		obs::debug_event!(epoch = id, capacity = config.capacity, "gateway epoch started");

		Ok(Self { id, limiter, credentials })
	}
}

/// Rate-limited, credential-caching client for one API deployment.
pub struct Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	config: Arc<GatewayConfig>,
	executor: RequestExecutor<T>,
	epoch: RwLock<Option<Arc<Epoch>>>,
	epoch_counter: AtomicU64,
	credential_metrics: Arc<CredentialMetrics>,
}
impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Validates `config`, then starts the first epoch on the current tokio runtime.
	///
	/// Fails with [`ConfigError`](crate::error::ConfigError) before any network activity.
	pub fn with_transport(config: GatewayConfig, transport: impl Into<Arc<T>>) -> Result<Self> {
		config.validate()?;

		let config = Arc::new(config);
		let credential_metrics = Arc::new(CredentialMetrics::default());
		let epoch = Epoch::start(1, &config, credential_metrics.clone())?;

		Ok(Self {
			executor: RequestExecutor::new(config.clone(), transport),
			config,
			epoch: RwLock::new(Some(Arc::new(epoch))),
			epoch_counter: AtomicU64::new(1),
			credential_metrics,
		})
	}

	/// Waits for a permit, attaches the bearer credential when required, and performs the
	/// exchange.
	///
	/// Returns the raw body, or the value under the descriptor's response key (`None` when
	/// the key is absent). Credential failures come back as [`Error::Auth`].
	pub async fn submit(&self, descriptor: &RequestDescriptor) -> Result<Option<String>> {
		self.run(descriptor, None).await
	}

	/// Same as [`submit`](Self::submit), but gives up with [`Error::Cancelled`] if no permit
	/// or credential is obtained within `timeout`. The exchange itself is not cut short.
	pub async fn submit_with_timeout(
		&self,
		descriptor: &RequestDescriptor,
		timeout: StdDuration,
	) -> Result<Option<String>> {
		self.run(descriptor, Some(Instant::now() + timeout)).await
	}

	/// Ends the current epoch: stops the reset task and rejects further submissions.
	/// Idempotent.
	pub fn close(&self) {
		if let Some(epoch) = self.epoch.write().take() {
			epoch.limiter.shutdown();
			obs::debug_event!(epoch = epoch.id, "gateway closed");
		}
	}

	/// Starts a fresh epoch: new reset schedule, empty credential cache. Closes the current
	/// epoch first when one is running.
	pub fn reopen(&self) -> Result<()> {
		let id = self.epoch_counter.fetch_add(1, Ordering::Relaxed) + 1;
		let epoch = Epoch::start(id, &self.config, self.credential_metrics.clone())?;

		if let Some(previous) = self.epoch.write().replace(Arc::new(epoch)) {
			previous.limiter.shutdown();
		}

		Ok(())
	}

	/// Returns the lifecycle state.
	pub fn state(&self) -> GatewayState {
		if self.epoch.read().is_some() { GatewayState::Ready } else { GatewayState::Closed }
	}

	/// Returns the running epoch number (starting at 1), if any.
	pub fn epoch(&self) -> Option<u64> {
		self.epoch.read().as_ref().map(|epoch| epoch.id)
	}

	/// Returns the permits left in the current window.
	pub fn available_permits(&self) -> Option<u32> {
		self.epoch.read().as_ref().map(|epoch| epoch.limiter.available())
	}

	/// Returns a snapshot of the current epoch's credential cache.
	pub fn credential_state(&self) -> Option<CredentialState> {
		self.epoch.read().as_ref().map(|epoch| epoch.credentials.state())
	}

	/// Returns credential fetch counters accumulated across epochs.
	pub fn credential_metrics(&self) -> &CredentialMetrics {
		&self.credential_metrics
	}

	/// Returns the validated configuration.
	pub fn config(&self) -> &GatewayConfig {
		&self.config
	}

	async fn run(
		&self,
		descriptor: &RequestDescriptor,
		deadline: Option<Instant>,
	) -> Result<Option<String>> {
		const KIND: OperationKind = OperationKind::Submit;

		let span = OperationSpan::new(KIND, "submit");

		obs::record_operation_outcome(KIND, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let epoch = self.current_epoch()?;
				let token = self.admit(&epoch, descriptor, deadline).await?;

				self.executor.send(descriptor, token.as_ref()).await
			})
			.await;

		obs::record_result(KIND, &result);

		result
	}

	async fn admit(
		&self,
		epoch: &Epoch,
		descriptor: &RequestDescriptor,
		deadline: Option<Instant>,
	) -> Result<Option<TokenSecret>> {
		let admitted = within(deadline, "a rate-limit permit", epoch.limiter.acquire()).await;

		obs::record_result(OperationKind::Admission, &admitted);
		admitted?;

		if !descriptor.requires_auth {
			return Ok(None);
		}

		let issuer = issuer::EpochIssuer::new(&self.executor, &epoch.limiter);
		let token = within(deadline, "the bearer credential", epoch.credentials.token(&issuer))
			.await?;

		Ok(Some(token))
	}

	fn current_epoch(&self) -> Result<Arc<Epoch>> {
		self.epoch.read().clone().ok_or(Error::Closed)
	}
}
#[cfg(feature = "reqwest")]
impl Gateway<ReqwestTransport> {
	/// Creates a gateway backed by a reqwest client honoring `config.request_timeout`.
	pub fn new(config: GatewayConfig) -> Result<Self> {
		config.validate()?;

		let transport = ReqwestTransport::with_timeout(config.request_timeout)?;

		Self::with_transport(config, transport)
	}
}
impl<T> Drop for Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	fn drop(&mut self) {
		self.close();
	}
}
impl<T> Debug for Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Gateway")
			.field("base_url", &self.config.base_url.as_str())
			.field("state", &self.state())
			.field("epoch", &self.epoch())
			.finish()
	}
}

async fn within<F, O>(deadline: Option<Instant>, stage: &'static str, fut: F) -> Result<O>
where
	F: Future<Output = Result<O>>,
{
	match deadline {
		Some(deadline) =>
			time::timeout_at(deadline, fut).await.map_err(|_| Error::Cancelled { stage })?,
		None => fut.await,
	}
}
