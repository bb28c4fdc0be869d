mod common;

// crates.io
use httpmock::prelude::*;
// self
use common::*;
use crpt_gateway::{
	config::GatewayConfig,
	credential::CredentialState,
	document::{DocumentEnvelope, ProductGroup},
	error::{Error, TransportError},
	gateway::ReqwestGateway,
	request::RequestDescriptor,
};

#[tokio::test]
async fn create_document_returns_created_identifier() {
	let server = MockServer::start_async().await;
	let (challenge, exchange) = mock_credentials(&server, TOKEN).await;
	let document = product_document();
	let envelope = DocumentEnvelope::introduce_goods(&document, ProductGroup::Milk, "detached-sig")
		.expect("Envelope fixture should encode.");
	let expected_body = String::from_utf8(
		envelope
			.to_descriptor()
			.expect("Descriptor fixture should build.")
			.body
			.expect("Create request should carry a body."),
	)
	.expect("Create body should be UTF-8 JSON.");
	let create = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(api_path("/lk/documents/create"))
				.query_param("pg", "milk")
				.header("authorization", format!("Bearer {TOKEN}"))
				.header("content-type", "application/json")
				.body(&expected_body);
			then.status(200).body("{\"value\":\"doc-123\"}");
		})
		.await;
	let gateway = gateway(&server, 10);
	let id =
		gateway.create_document(&envelope).await.expect("Document submission should succeed.");

	assert_eq!(id.as_deref(), Some("doc-123"));

	challenge.assert_calls_async(1).await;
	exchange.assert_calls_async(1).await;
	create.assert_calls_async(1).await;
}

#[tokio::test]
async fn missing_value_is_absent_not_failure() {
	let server = MockServer::start_async().await;
	let _credentials = mock_credentials(&server, TOKEN).await;
	let _create = server
		.mock_async(|when, then| {
			when.method(POST).path(api_path("/lk/documents/create"));
			then.status(200).body("{\"other\":\"x\"}");
		})
		.await;
	let gateway = gateway(&server, 10);
	let id = gateway
		.introduce_goods(ProductGroup::Shoes, &product_document(), "sig")
		.await
		.expect("Missing field should not be an error.");

	assert_eq!(id, None);
}

#[tokio::test]
async fn api_failure_keeps_cached_credential() {
	let server = MockServer::start_async().await;
	let (_challenge, exchange) = mock_credentials(&server, TOKEN).await;
	let create = server
		.mock_async(|when, then| {
			when.method(POST).path(api_path("/lk/documents/create"));
			then.status(500).body("{\"code\":\"ERR\"}");
		})
		.await;
	let gateway = gateway(&server, 10);

	for _ in 0..2 {
		let err = gateway
			.introduce_goods(ProductGroup::Milk, &product_document(), "sig")
			.await
			.expect_err("Server error should surface.");

		assert!(
			matches!(err, Error::Api { status: 500, ref body } if body == "{\"code\":\"ERR\"}")
		);
	}

	assert!(matches!(gateway.credential_state(), Some(CredentialState::Ready { .. })));

	exchange.assert_calls_async(1).await;
	create.assert_calls_async(2).await;
}

#[tokio::test]
async fn malformed_success_body_is_transport_failure() {
	let server = MockServer::start_async().await;
	let _credentials = mock_credentials(&server, TOKEN).await;
	let _create = server
		.mock_async(|when, then| {
			when.method(POST).path(api_path("/lk/documents/create"));
			then.status(200).body("<html>maintenance</html>");
		})
		.await;
	let gateway = gateway(&server, 10);
	let err = gateway
		.introduce_goods(ProductGroup::Tires, &product_document(), "sig")
		.await
		.expect_err("Malformed body should fail.");

	assert!(matches!(err, Error::Transport(TransportError::MalformedBody { status: 200, .. })));
}

#[tokio::test]
async fn unauthenticated_descriptor_returns_raw_body() {
	let server = MockServer::start_async().await;
	let (challenge, _exchange) = mock_credentials(&server, TOKEN).await;
	let raw = gateway(&server, 10)
		.submit(&RequestDescriptor::get("/auth/cert/key").with_auth(false))
		.await
		.expect("Raw submission should succeed.");

	assert_eq!(raw.as_deref(), Some(CHALLENGE_BODY));

	challenge.assert_calls_async(1).await;
}

#[tokio::test]
async fn unreachable_host_is_network_failure() {
	let config = GatewayConfig::builder("http://127.0.0.1:1/api/v3")
		.capacity(10)
		.build()
		.expect("Gateway config fixture should build.");
	let gateway = ReqwestGateway::new(config).expect("Gateway fixture should start.");
	let err = gateway
		.submit(&RequestDescriptor::get("/lk/documents/list").with_auth(false))
		.await
		.expect_err("Connection refusal should fail.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}
