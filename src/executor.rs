//! Single-exchange request executor.
//!
//! [`RequestExecutor::send`] resolves a [`RequestDescriptor`] against the configured base
//! URL, performs exactly one exchange through the [`HttpTransport`], and classifies the
//! outcome. Retries are left to callers.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	config::GatewayConfig,
	credential::TokenSecret,
	error::TransportError,
	http::{HttpTransport, InboundResponse, OutboundRequest},
	request::RequestDescriptor,
};

/// Performs one HTTP exchange per call and classifies the response.
pub struct RequestExecutor<T>
where
	T: ?Sized + HttpTransport,
{
	config: Arc<GatewayConfig>,
	transport: Arc<T>,
}
impl<T> RequestExecutor<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates an executor bound to `config.base_url`.
	pub fn new(config: Arc<GatewayConfig>, transport: impl Into<Arc<T>>) -> Self {
		Self { config, transport: transport.into() }
	}

	/// Sends `descriptor`, attaching `token` when the descriptor requires auth.
	///
	/// Returns the raw body when no response key is set, otherwise the value stored under
	/// the key (`None` when the key is absent). Non-200 statuses become [`Error::Api`].
	pub async fn send(
		&self,
		descriptor: &RequestDescriptor,
		token: Option<&TokenSecret>,
	) -> Result<Option<String>> {
		let request = self.prepare(descriptor, token)?;
		let response = self.transport.execute(request).await?;

		classify(response, descriptor.response_key.as_deref())
	}

	fn prepare(
		&self,
		descriptor: &RequestDescriptor,
		token: Option<&TokenSecret>,
	) -> Result<OutboundRequest> {
		let mut url = self.config.endpoint(&descriptor.path)?;

		if !descriptor.query.is_empty() {
			let mut pairs = url.query_pairs_mut();

			for (key, value) in &descriptor.query {
				pairs.append_pair(key, value);
			}
		}

		let bearer = if descriptor.requires_auth { token.cloned() } else { None };

		Ok(OutboundRequest {
			method: descriptor.method,
			url,
			body: descriptor.body.clone(),
			bearer,
		})
	}
}
impl<T> Clone for RequestExecutor<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self { config: self.config.clone(), transport: self.transport.clone() }
	}
}
impl<T> Debug for RequestExecutor<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestExecutor").field("base_url", &self.config.base_url.as_str()).finish()
	}
}

fn classify(response: InboundResponse, response_key: Option<&str>) -> Result<Option<String>> {
	let InboundResponse { status, body } = response;

	if status != 200 {
		return Err(Error::Api { status, body: String::from_utf8_lossy(&body).into_owned() });
	}

	let Some(key) = response_key else {
		let text =
			String::from_utf8(body).map_err(|_| TransportError::InvalidBody { status })?;

		return Ok(Some(text));
	};
	let de = &mut serde_json::Deserializer::from_slice(&body);
	let mut object: BTreeMap<String, Value> = serde_path_to_error::deserialize(de)
		.map_err(|source| TransportError::MalformedBody { status, source })?;

	Ok(match object.remove(key) {
		Some(Value::String(value)) => Some(value),
		Some(Value::Null) | None => None,
		Some(other) => Some(other.to_string()),
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::request::Method;

	struct NoopTransport;
	impl HttpTransport for NoopTransport {
		fn execute(&self, _request: OutboundRequest) -> crate::http::TransportFuture<'_> {
			Box::pin(async { Ok(InboundResponse::new(200, "")) })
		}
	}

	fn executor() -> RequestExecutor<NoopTransport> {
		let config = GatewayConfig::builder("https://ismp.crpt.ru/api/v3")
			.capacity(1)
			.build()
			.expect("Config fixture should build.");

		RequestExecutor::new(Arc::new(config), NoopTransport)
	}

	#[test]
	fn response_key_extracts_string_field() {
		let response = InboundResponse::new(200, "{\"value\":\"abc\",\"other\":\"x\"}");

		assert_eq!(
			classify(response, Some("value")).expect("Extraction should succeed."),
			Some("abc".into())
		);
	}

	#[test]
	fn missing_key_is_absent_not_error() {
		let response = InboundResponse::new(200, "{\"other\":\"x\"}");

		assert_eq!(classify(response, Some("value")).expect("Missing key is not an error."), None);
	}

	#[test]
	fn raw_body_returned_without_key() {
		let response = InboundResponse::new(200, "{\"uuid\":\"1\",\"data\":\"ABC\"}");

		assert_eq!(
			classify(response, None).expect("Raw body should be returned."),
			Some("{\"uuid\":\"1\",\"data\":\"ABC\"}".into())
		);
	}

	#[test]
	fn non_200_is_api_failure_with_body() {
		let err = classify(InboundResponse::new(500, "{\"code\":\"ERR\"}"), Some("value"))
			.expect_err("Non-200 should fail.");

		assert!(
			matches!(err, Error::Api { status: 500, ref body } if body == "{\"code\":\"ERR\"}")
		);

		let err = classify(InboundResponse::new(201, "created"), None)
			.expect_err("Only 200 counts as success.");

		assert_eq!(err.status(), Some(201));
	}

	#[test]
	fn malformed_json_is_transport_failure() {
		let err = classify(InboundResponse::new(200, "<html>"), Some("value"))
			.expect_err("Malformed JSON should fail.");

		assert!(matches!(err, Error::Transport(TransportError::MalformedBody { status: 200, .. })));
	}

	#[test]
	fn non_string_values_are_rendered_as_json() {
		let response = InboundResponse::new(200, "{\"value\":42,\"gone\":null}");

		assert_eq!(
			classify(response.clone(), Some("value")).expect("Should extract."),
			Some("42".into())
		);
		assert_eq!(classify(response, Some("gone")).expect("Should extract."), None);
	}

	#[test]
	fn prepare_encodes_query_and_bearer() {
		let executor = executor();
		let token = TokenSecret::new("t0k3n");
		let descriptor = RequestDescriptor::post("/lk/documents/create")
			.with_query("pg", "milk")
			.with_query("note", "a b&c")
			.with_body("{}");
		let request =
			executor.prepare(&descriptor, Some(&token)).expect("Request should be prepared.");

		assert_eq!(request.method, Method::Post);
		assert_eq!(
			request.url.as_str(),
			"https://ismp.crpt.ru/api/v3/lk/documents/create?note=a+b%26c&pg=milk"
		);
		assert_eq!(request.bearer.as_ref().map(TokenSecret::expose), Some("t0k3n"));
	}

	#[test]
	fn prepare_skips_query_and_bearer_when_not_needed() {
		let executor = executor();
		let token = TokenSecret::new("unused");
		let descriptor = RequestDescriptor::get("/auth/cert/key").with_auth(false);
		let request =
			executor.prepare(&descriptor, Some(&token)).expect("Request should be prepared.");

		assert_eq!(request.url.as_str(), "https://ismp.crpt.ru/api/v3/auth/cert/key");
		assert!(request.url.query().is_none());
		assert!(request.bearer.is_none());
		assert!(request.body.is_none());
	}
}
