//! Transport primitives for API exchanges.
//!
//! [`HttpTransport`] is the gateway's only dependency on an HTTP stack. The executor builds
//! a fully resolved [`OutboundRequest`] (URL, method, headers, body) and the transport
//! returns the raw status + body; classification happens in the executor so custom
//! transports never need to know the error taxonomy beyond [`TransportError`].

// self
use crate::{_prelude::*, credential::TokenSecret, error::TransportError, request::Method};

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<InboundResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of performing one request/response exchange.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared by
/// every caller of the gateway. No retries may happen inside the transport.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Performs exactly one HTTP exchange.
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_>;
}

/// Fully resolved request handed to an [`HttpTransport`].
#[derive(Clone, Debug)]
pub struct OutboundRequest {
	/// HTTP method.
	pub method: Method,
	/// Target URL including the encoded query string.
	pub url: Url,
	/// JSON body; `None` sends an empty body without a content type.
	pub body: Option<Vec<u8>>,
	/// Bearer credential attached as `Authorization: Bearer <token>`.
	pub bearer: Option<TokenSecret>,
}
impl OutboundRequest {
	/// Content type attached whenever a body is present.
	pub const JSON_CONTENT_TYPE: &'static str = "application/json";
}

/// Raw response returned by an [`HttpTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl InboundResponse {
	/// Creates a response from a status and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The underlying client pools connections; each exchange is still independent.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client honoring the optional per-request timeout.
	pub fn with_timeout(timeout: Option<StdDuration>) -> Result<Self, crate::error::ConfigError> {
		let mut builder = ReqwestClient::builder();

		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}

		Ok(Self(builder.build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
			};
			let mut builder = client.request(method, request.url);

			if let Some(body) = request.body {
				builder = builder
					.header(reqwest::header::CONTENT_TYPE, OutboundRequest::JSON_CONTENT_TYPE)
					.body(body);
			}
			if let Some(token) = request.bearer.as_ref() {
				builder = builder.header(reqwest::header::AUTHORIZATION, token.bearer_header());
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(InboundResponse { status, body })
		})
	}
}
