//! Challenge/exchange calls routed through the epoch's rate limiter.

// self
use crate::{
	credential::{CredentialIssuer, IssueFuture},
	executor::RequestExecutor,
	http::HttpTransport,
	limiter::RateLimiter,
	request::RequestDescriptor,
};

/// Path returning a fresh challenge (`{"uuid": …, "data": …}`).
pub const AUTH_CHALLENGE_PATH: &str = "/auth/cert/key";
/// Path exchanging a (signed) challenge for a bearer token.
pub const AUTH_EXCHANGE_PATH: &str = "/auth/cert/";
/// Response field carrying the bearer token.
pub const AUTH_TOKEN_KEY: &str = "token";

// Every credential call consumes a permit; the quota covers the whole API surface.
pub(super) struct EpochIssuer<'a, T>
where
	T: ?Sized + HttpTransport,
{
	executor: &'a RequestExecutor<T>,
	limiter: &'a RateLimiter,
}
impl<'a, T> EpochIssuer<'a, T>
where
	T: ?Sized + HttpTransport,
{
	pub(super) fn new(executor: &'a RequestExecutor<T>, limiter: &'a RateLimiter) -> Self {
		Self { executor, limiter }
	}
}
impl<T> CredentialIssuer for EpochIssuer<'_, T>
where
	T: ?Sized + HttpTransport,
{
	fn challenge(&self) -> IssueFuture<'_, String> {
		Box::pin(async move {
			let descriptor = RequestDescriptor::get(AUTH_CHALLENGE_PATH).with_auth(false);

			self.limiter.acquire().await?;

			// Without a response key the executor always yields the raw body.
			Ok(self.executor.send(&descriptor, None).await?.unwrap_or_default())
		})
	}

	fn exchange<'a>(&'a self, challenge: &'a str) -> IssueFuture<'a, Option<String>> {
		Box::pin(async move {
			let descriptor = RequestDescriptor::post(AUTH_EXCHANGE_PATH)
				.with_auth(false)
				.with_body(challenge)
				.with_response_key(AUTH_TOKEN_KEY);

			self.limiter.acquire().await?;
			self.executor.send(&descriptor, None).await
		})
	}
}
