//! Gateway-level error taxonomy shared by the limiter, credential cache, and executor.

// self
use crate::_prelude::*;

/// Gateway-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical gateway error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Construction-time configuration problem; never retried.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Credential acquisition failed; sticky for the rest of the epoch.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Transport failure (connect, TLS, timeout, malformed body).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Endpoint answered with a non-200 status.
	#[error("API responded with status {status}: {body}.")]
	Api {
		/// HTTP status code.
		status: u16,
		/// Raw response body kept for diagnostics.
		body: String,
	},
	/// The caller's deadline elapsed before the request could proceed.
	#[error("Deadline elapsed while waiting for {stage}.")]
	Cancelled {
		/// Wait point that was interrupted.
		stage: &'static str,
	},
	/// The gateway was closed; reopen it before submitting again.
	#[error("Gateway is closed.")]
	Closed,
	/// A request body could not be serialized.
	#[error("Request body could not be serialized.")]
	Serialization(#[source] serde_json::Error),
}
impl Error {
	/// Returns the HTTP status carried by an [`Error::Api`] or malformed-body failure.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. } => Some(*status),
			Self::Transport(TransportError::MalformedBody { status, .. }) => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before any network activity.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Request capacity per window must be positive.
	#[error("Request capacity must be positive.")]
	ZeroCapacity,
	/// Window duration must be positive.
	#[error("Rate window must be longer than zero.")]
	ZeroWindow,
	/// Credential lifetime must be positive.
	#[error("Token lifetime must be positive.")]
	NonPositiveTokenLifetime,
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than http or https.
	#[error("Base URL must use http or https, got `{scheme}`.")]
	UnsupportedScheme {
		/// Scheme that was supplied.
		scheme: String,
	},
	/// Base URL cannot carry a path (e.g. `mailto:`).
	#[error("Base URL cannot be used as a base.")]
	CannotBeABase,
	/// Descriptor path produced an unparsable URL.
	#[error("Request path `{path}` does not form a valid URL.")]
	InvalidRequestUrl {
		/// Offending descriptor path.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Gateway construction needs a running tokio runtime for its reset task.
	#[error("Gateway must be constructed inside a tokio runtime.")]
	NoRuntime,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Stage of credential acquisition that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStage {
	/// `GET /auth/cert/key`.
	Challenge,
	/// `POST /auth/cert/`.
	Exchange,
}
impl AuthStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthStage::Challenge => "challenge",
			AuthStage::Exchange => "exchange",
		}
	}
}
impl Display for AuthStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Credential acquisition failure shared verbatim with every waiting caller.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Failed to obtain a bearer token during the {stage} step: {reason}.")]
pub struct AuthError {
	/// Step that failed.
	pub stage: AuthStage,
	/// Human-readable cause.
	pub reason: String,
}
impl AuthError {
	/// Creates a new failure for the given stage.
	pub fn new(stage: AuthStage, reason: impl Into<String>) -> Self {
		Self { stage, reason: reason.into() }
	}
}

/// Transport-level failures (network, IO, undecodable payloads).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
	/// A 200 response did not contain a JSON object.
	#[error("API returned a malformed JSON object.")]
	MalformedBody {
		/// HTTP status of the response.
		status: u16,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Response body was not valid UTF-8.
	#[error("API returned a body that is not valid UTF-8.")]
	InvalidBody {
		/// HTTP status of the response.
		status: u16,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
