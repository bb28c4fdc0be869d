//! Single-flight, expiring bearer token cache with a sticky failure state.
//!
//! Readers take a short read lock and return a live token immediately. A miss serializes on
//! an async guard, re-checks the state, and only then runs the challenge/exchange sequence,
//! so racing callers share one fetch. A failed fetch parks the cache in
//! [`CredentialState::Failed`] and every later call returns that same [`AuthError`] without
//! touching the network.

// self
use crate::{
	_prelude::*,
	credential::{CredentialIssuer, CredentialMetrics, TokenSecret},
	error::{AuthError, AuthStage},
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
};

/// Snapshot of the cache contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialState {
	/// No token has been fetched yet.
	Empty,
	/// A token is cached until `expires_at`.
	Ready {
		/// Cached bearer token.
		token: TokenSecret,
		/// First instant at which the token is no longer reused.
		expires_at: OffsetDateTime,
	},
	/// Credential acquisition failed; permanent for this cache.
	Failed(AuthError),
}

enum FetchError {
	Sticky(AuthError),
	Interrupted(Error),
}

/// Lazily fetched, expiring bearer token shared by every caller of one gateway epoch.
pub struct CredentialCache {
	state: RwLock<CredentialState>,
	flight: AsyncMutex<()>,
	lifetime: Duration,
	metrics: Arc<CredentialMetrics>,
}
impl CredentialCache {
	/// Creates an empty cache issuing tokens valid for `lifetime`.
	pub fn new(lifetime: Duration, metrics: Arc<CredentialMetrics>) -> Self {
		Self {
			state: RwLock::new(CredentialState::Empty),
			flight: AsyncMutex::new(()),
			lifetime,
			metrics,
		}
	}

	/// Returns a clone of the current state.
	pub fn state(&self) -> CredentialState {
		self.state.read().clone()
	}

	/// Returns `true` once acquisition has failed.
	pub fn is_failed(&self) -> bool {
		matches!(*self.state.read(), CredentialState::Failed(_))
	}

	/// Returns a usable token, fetching one through `issuer` when needed.
	pub async fn token(&self, issuer: &dyn CredentialIssuer) -> Result<TokenSecret> {
		self.token_at(issuer, OffsetDateTime::now_utc()).await
	}

	/// Same as [`token`](Self::token) with an explicit notion of "now".
	pub async fn token_at(
		&self,
		issuer: &dyn CredentialIssuer,
		now: OffsetDateTime,
	) -> Result<TokenSecret> {
		if let Some(token) = self.cached(now)? {
			return Ok(token);
		}

		let _singleflight = self.flight.lock().await;

		if let Some(token) = self.cached(now)? {
			return Ok(token);
		}

		const KIND: OperationKind = OperationKind::Credential;

		let span = OperationSpan::new(KIND, "fetch_token");

		obs::record_operation_outcome(KIND, OperationOutcome::Attempt);
		self.metrics.record_attempt();

		let result = span.instrument(fetch(issuer)).await;

		obs::record_result(KIND, &result);

		match result {
			Ok(token) => {
				let expires_at = now + self.lifetime;

				*self.state.write() = CredentialState::Ready { token: token.clone(), expires_at };
				self.metrics.record_success();
				obs::debug_event!(%expires_at, "bearer token cached");

				Ok(token)
			},
			Err(FetchError::Sticky(err)) => {
				obs::warn_event!(
					stage = err.stage.as_str(),
					reason = %err.reason,
					"credential acquisition failed; failing closed for this epoch"
				);
				*self.state.write() = CredentialState::Failed(err.clone());
				self.metrics.record_failure();

				Err(err.into())
			},
			Err(FetchError::Interrupted(err)) => {
				self.metrics.record_failure();

				Err(err)
			},
		}
	}

	fn cached(&self, now: OffsetDateTime) -> Result<Option<TokenSecret>> {
		match &*self.state.read() {
			CredentialState::Failed(err) => Err(err.clone().into()),
			CredentialState::Ready { token, expires_at } if now < *expires_at =>
				Ok(Some(token.clone())),
			_ => Ok(None),
		}
	}
}
impl Debug for CredentialCache {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialCache")
			.field("state", &*self.state.read())
			.field("lifetime", &self.lifetime)
			.finish()
	}
}

async fn fetch(issuer: &dyn CredentialIssuer) -> Result<TokenSecret, FetchError> {
	let challenge =
		issuer.challenge().await.map_err(|err| classify_failure(AuthStage::Challenge, err))?;
	let token = issuer
		.exchange(&challenge)
		.await
		.map_err(|err| classify_failure(AuthStage::Exchange, err))?;

	match token {
		Some(token) if !token.trim().is_empty() => Ok(TokenSecret::new(token)),
		_ => Err(FetchError::Sticky(AuthError::new(
			AuthStage::Exchange,
			"response did not contain a token",
		))),
	}
}

// A closed gateway is not a credential failure; anything else poisons the epoch.
fn classify_failure(stage: AuthStage, err: Error) -> FetchError {
	match err {
		Error::Closed | Error::Cancelled { .. } => FetchError::Interrupted(err),
		Error::Auth(inner) => FetchError::Sticky(inner),
		other => FetchError::Sticky(AuthError::new(stage, other.to_string())),
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;
	use crate::credential::IssueFuture;

	#[derive(Default)]
	struct CountingIssuer {
		challenges: AtomicUsize,
		exchanges: AtomicUsize,
		token: Option<&'static str>,
		fail_challenge: bool,
	}
	impl CountingIssuer {
		fn issuing(token: &'static str) -> Self {
			Self { token: Some(token), ..Default::default() }
		}
	}
	impl CredentialIssuer for CountingIssuer {
		fn challenge(&self) -> IssueFuture<'_, String> {
			Box::pin(async move {
				self.challenges.fetch_add(1, Ordering::SeqCst);
				tokio::task::yield_now().await;

				if self.fail_challenge {
					return Err(Error::Api { status: 503, body: "down".into() });
				}

				Ok("{\"uuid\":\"u\",\"data\":\"d\"}".into())
			})
		}

		fn exchange<'a>(&'a self, challenge: &'a str) -> IssueFuture<'a, Option<String>> {
			Box::pin(async move {
				assert_eq!(challenge, "{\"uuid\":\"u\",\"data\":\"d\"}");
				self.exchanges.fetch_add(1, Ordering::SeqCst);
				tokio::task::yield_now().await;

				Ok(self.token.map(str::to_owned))
			})
		}
	}

	fn cache(lifetime: Duration) -> CredentialCache {
		CredentialCache::new(lifetime, Arc::new(CredentialMetrics::default()))
	}

	#[tokio::test]
	async fn concurrent_cold_callers_share_one_fetch() {
		let cache = cache(Duration::hours(10));
		let issuer = CountingIssuer::issuing("shared");
		let (a, b, c) =
			tokio::join!(cache.token(&issuer), cache.token(&issuer), cache.token(&issuer));

		for result in [a, b, c] {
			assert_eq!(result.expect("Every caller should get the token.").expose(), "shared");
		}

		assert_eq!(issuer.challenges.load(Ordering::SeqCst), 1);
		assert_eq!(issuer.exchanges.load(Ordering::SeqCst), 1);
		assert_eq!(cache.metrics.attempts(), 1);
		assert_eq!(cache.metrics.successes(), 1);
	}

	#[tokio::test]
	async fn expired_token_is_refetched() {
		let cache = cache(Duration::minutes(5));
		let issuer = CountingIssuer::issuing("rotating");
		let now = OffsetDateTime::now_utc();

		cache.token_at(&issuer, now).await.expect("First fetch should succeed.");
		cache
			.token_at(&issuer, now + Duration::minutes(4))
			.await
			.expect("Cached token should be reused.");

		assert_eq!(issuer.exchanges.load(Ordering::SeqCst), 1);

		cache
			.token_at(&issuer, now + Duration::minutes(5))
			.await
			.expect("Expired token should be refetched.");

		assert_eq!(issuer.exchanges.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn missing_token_fails_sticky() {
		let cache = cache(Duration::hours(10));
		let issuer = CountingIssuer::default();
		let (first, second) = tokio::join!(cache.token(&issuer), cache.token(&issuer));

		for result in [first, second] {
			let err = result.expect_err("Missing token should fail.");

			assert!(matches!(err, Error::Auth(AuthError { stage: AuthStage::Exchange, .. })));
		}

		assert!(cache.is_failed());

		let _ = cache.token(&issuer).await.expect_err("Failure must be sticky.");

		assert_eq!(issuer.challenges.load(Ordering::SeqCst), 1);
		assert_eq!(issuer.exchanges.load(Ordering::SeqCst), 1);
		assert_eq!(cache.metrics.failures(), 1);
	}

	#[tokio::test]
	async fn challenge_failure_is_classified_and_sticky() {
		let cache = cache(Duration::hours(10));
		let issuer = CountingIssuer { fail_challenge: true, ..CountingIssuer::issuing("never") };
		let err = cache.token(&issuer).await.expect_err("Challenge failure should surface.");

		match err {
			Error::Auth(AuthError { stage, reason }) => {
				assert_eq!(stage, AuthStage::Challenge);
				assert!(reason.contains("503"));
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}

		assert_eq!(issuer.exchanges.load(Ordering::SeqCst), 0);
		assert!(matches!(cache.state(), CredentialState::Failed(_)));
	}

	#[tokio::test]
	async fn blank_token_counts_as_missing() {
		let cache = cache(Duration::hours(10));
		let issuer = CountingIssuer::issuing("   ");

		assert!(matches!(cache.token(&issuer).await, Err(Error::Auth(_))));
		assert!(cache.is_failed());
	}

	#[test]
	fn closed_gateway_does_not_poison_the_cache() {
		assert!(matches!(
			classify_failure(AuthStage::Challenge, Error::Closed),
			FetchError::Interrupted(Error::Closed)
		));
		assert!(matches!(
			classify_failure(AuthStage::Exchange, Error::Api { status: 401, body: String::new() }),
			FetchError::Sticky(AuthError { stage: AuthStage::Exchange, .. })
		));
	}
}
