//! Opaque request descriptors consumed by the executor.

// self
use crate::_prelude::*;

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
}
impl Method {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Everything the executor needs to perform one exchange.
///
/// Collaborators shape the body; the gateway never inspects it. Query parameters are
/// kept sorted so the encoded URL is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
	/// Path appended to the base URL, e.g. `/lk/documents/create`.
	pub path: String,
	/// HTTP method.
	pub method: Method,
	/// Query parameters; encoded only when non-empty.
	pub query: BTreeMap<String, String>,
	/// Pre-serialized body.
	pub body: Option<Vec<u8>>,
	/// Attaches the cached bearer credential when true.
	pub requires_auth: bool,
	/// Field to extract from a JSON object response; `None` returns the raw body.
	pub response_key: Option<String>,
}
impl RequestDescriptor {
	/// Creates a descriptor for `method` + `path` that requires authentication.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			method,
			query: BTreeMap::new(),
			body: None,
			requires_auth: true,
			response_key: None,
		}
	}

	/// Shorthand for a `GET` descriptor.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::Get, path)
	}

	/// Shorthand for a `POST` descriptor.
	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::Post, path)
	}

	/// Adds or replaces a query parameter.
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.insert(key.into(), value.into());

		self
	}

	/// Sets the pre-serialized body.
	pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Overrides whether the bearer credential is attached.
	pub fn with_auth(mut self, requires_auth: bool) -> Self {
		self.requires_auth = requires_auth;

		self
	}

	/// Extracts `key` from the JSON object response instead of returning the raw body.
	pub fn with_response_key(mut self, key: impl Into<String>) -> Self {
		self.response_key = Some(key.into());

		self
	}
}
