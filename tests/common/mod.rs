//! Fixtures shared by the gateway integration tests.

#![allow(dead_code)]

// crates.io
use httpmock::{Mock, prelude::*};
// self
use crpt_gateway::{
	config::GatewayConfig,
	document::{CertificateDocument, Product, ProductDocument},
	gateway::ReqwestGateway,
};

/// API root mounted on the mock server.
pub const API_ROOT: &str = "/api/v3";
/// Challenge payload returned by the mock `GET /auth/cert/key`.
pub const CHALLENGE_BODY: &str = "{\"uuid\":\"7f1c2a90\",\"data\":\"SIGN-ME\"}";
/// Token minted by the mock `POST /auth/cert/`.
pub const TOKEN: &str = "mock-bearer-token";

pub fn api_path(path: &str) -> String {
	format!("{API_ROOT}{path}")
}

pub fn config(server: &MockServer, capacity: u32) -> GatewayConfig {
	GatewayConfig::builder(server.url(API_ROOT))
		.capacity(capacity)
		.build()
		.expect("Gateway config fixture should build.")
}

pub fn gateway(server: &MockServer, capacity: u32) -> ReqwestGateway {
	ReqwestGateway::new(config(server, capacity)).expect("Gateway fixture should start.")
}

/// Mounts the challenge and exchange endpoints; the exchange only answers when the challenge
/// body is forwarded verbatim.
pub async fn mock_credentials<'a>(server: &'a MockServer, token: &str) -> (Mock<'a>, Mock<'a>) {
	let challenge = server
		.mock_async(|when, then| {
			when.method(GET).path(api_path("/auth/cert/key"));
			then.status(200).header("content-type", "application/json").body(CHALLENGE_BODY);
		})
		.await;
	let exchange_body = format!("{{\"token\":\"{token}\"}}");
	let exchange = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(api_path("/auth/cert/"))
				.header("content-type", "application/json")
				.body(CHALLENGE_BODY);
			then.status(200).header("content-type", "application/json").body(&exchange_body);
		})
		.await;

	(challenge, exchange)
}

pub fn product_document() -> ProductDocument {
	ProductDocument::new("7700000000").with_product(Product {
		certificate_document: Some(CertificateDocument::ConformityDeclaration),
		certificate_document_date: "2024-03-01".into(),
		certificate_document_number: "RU-D-77.AB12.B.00001/24".into(),
		owner_inn: "7700000000".into(),
		producer_inn: "7700000000".into(),
		production_date: "2024-03-01".into(),
		tnved_code: "0401201100".into(),
		uit_code: "010460043993125621JgXJ5.T".into(),
		..Default::default()
	})
}
