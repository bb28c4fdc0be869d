//! Bearer credential handling: redacted secrets, the single-flight cache, and the issuer
//! seam that performs the challenge/exchange calls.

mod cache;
mod metrics;
mod secret;

pub use cache::*;
pub use metrics::*;
pub use secret::*;

// self
use crate::_prelude::*;

/// Boxed future returned by [`CredentialIssuer`] calls.
pub type IssueFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Performs the two unauthenticated calls that mint a bearer token.
///
/// The cache invokes [`challenge`](CredentialIssuer::challenge) and then
/// [`exchange`](CredentialIssuer::exchange) while holding its single-flight guard, so an
/// implementation is never called concurrently for the same cache.
pub trait CredentialIssuer
where
	Self: Send + Sync,
{
	/// Requests a fresh auth challenge (`GET /auth/cert/key`), returned verbatim.
	fn challenge(&self) -> IssueFuture<'_, String>;

	/// Exchanges a challenge for a token (`POST /auth/cert/`); `None` when the response
	/// carries no token field.
	fn exchange<'a>(&'a self, challenge: &'a str) -> IssueFuture<'a, Option<String>>;
}
