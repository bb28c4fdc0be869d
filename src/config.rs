//! Validated construction inputs for a [`Gateway`](crate::gateway::Gateway).
//!
//! Every value is checked before the gateway schedules its reset task or touches the
//! network, so a bad capacity or base URL fails fast as a [`ConfigError`].

// self
use crate::{_prelude::*, error::ConfigError};

/// Immutable gateway configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
	/// API root, e.g. `https://ismp.crpt.ru/api/v3`; request paths are appended verbatim.
	pub base_url: Url,
	/// Length of one rate window; the permit count is hard-reset at every boundary.
	pub window: StdDuration,
	/// Requests admitted per window.
	pub capacity: u32,
	/// How long an issued bearer token may be reused.
	pub token_lifetime: Duration,
	/// Optional per-request timeout applied by the default transport.
	pub request_timeout: Option<StdDuration>,
}
impl GatewayConfig {
	/// Window length used when none is configured.
	pub const DEFAULT_WINDOW: StdDuration = StdDuration::from_secs(1);
	/// Token lifetime documented by the remote service.
	pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::hours(10);

	/// Starts a builder for the provided base URL.
	pub fn builder(base_url: impl Into<String>) -> GatewayConfigBuilder {
		GatewayConfigBuilder::new(base_url)
	}

	/// Checks every invariant; deserialized configs must pass this before use.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.capacity == 0 {
			return Err(ConfigError::ZeroCapacity);
		}
		if self.window.is_zero() {
			return Err(ConfigError::ZeroWindow);
		}
		if !self.token_lifetime.is_positive() {
			return Err(ConfigError::NonPositiveTokenLifetime);
		}

		validate_base_url(&self.base_url)
	}

	/// Joins the base URL with a descriptor path without dropping base path segments.
	pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		let raw = format!("{}{path}", self.base_url.as_str().trim_end_matches('/'));

		Url::parse(&raw)
			.map_err(|source| ConfigError::InvalidRequestUrl { path: path.to_owned(), source })
	}
}

/// Builder for [`GatewayConfig`] values.
#[derive(Debug)]
pub struct GatewayConfigBuilder {
	base_url: String,
	window: StdDuration,
	capacity: u32,
	token_lifetime: Duration,
	request_timeout: Option<StdDuration>,
}
impl GatewayConfigBuilder {
	fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			window: GatewayConfig::DEFAULT_WINDOW,
			capacity: 1,
			token_lifetime: GatewayConfig::DEFAULT_TOKEN_LIFETIME,
			request_timeout: None,
		}
	}

	/// Sets the rate window length.
	pub fn window(mut self, window: StdDuration) -> Self {
		self.window = window;

		self
	}

	/// Sets how many requests are admitted per window.
	pub fn capacity(mut self, capacity: u32) -> Self {
		self.capacity = capacity;

		self
	}

	/// Overrides the bearer token lifetime (defaults to 10 hours).
	pub fn token_lifetime(mut self, lifetime: Duration) -> Self {
		self.token_lifetime = lifetime;

		self
	}

	/// Applies a per-request timeout to the default transport.
	pub fn request_timeout(mut self, timeout: StdDuration) -> Self {
		self.request_timeout = Some(timeout);

		self
	}

	/// Consumes the builder and validates the resulting config.
	pub fn build(self) -> Result<GatewayConfig, ConfigError> {
		let base_url =
			Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl { source })?;
		let config = GatewayConfig {
			base_url,
			window: self.window,
			capacity: self.capacity,
			token_lifetime: self.token_lifetime,
			request_timeout: self.request_timeout,
		};

		config.validate()?;

		Ok(config)
	}
}

fn validate_base_url(url: &Url) -> Result<(), ConfigError> {
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::UnsupportedScheme { scheme: url.scheme().to_owned() });
	}
	if url.cannot_be_a_base() {
		return Err(ConfigError::CannotBeABase);
	}

	Ok(())
}
