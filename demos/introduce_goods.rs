//! Demonstrates sharing one gateway between concurrent producers against a mock CRPT API.
//!
//! Five tasks submit twenty goods-introduction documents each. The gateway admits ten
//! requests per 200 ms window, fetches the bearer token once, and reuses it for every
//! submission. Run with `RUST_LOG=crpt_gateway=debug` to watch window resets.

// std
use std::{
	sync::Arc,
	time::{Duration, Instant},
};
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use tracing_subscriber::EnvFilter;
// self
use crpt_gateway::{
	config::GatewayConfig,
	document::{CertificateDocument, Product, ProductDocument, ProductGroup},
	gateway::ReqwestGateway,
};

const PRODUCERS: usize = 5;
const DOCUMENTS_PER_PRODUCER: usize = 20;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

	let server = MockServer::start_async().await;
	let challenge = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v3/auth/cert/key");
			then.status(200).body("{\"uuid\":\"demo-uuid\",\"data\":\"DEMO-CHALLENGE\"}");
		})
		.await;
	let exchange = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v3/auth/cert/");
			then.status(200).body("{\"token\":\"demo-token\"}");
		})
		.await;
	let create = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v3/lk/documents/create")
				.header("authorization", "Bearer demo-token");
			then.status(200).body("{\"value\":\"a1b2c3d4-demo\"}");
		})
		.await;
	let config = GatewayConfig::builder(server.url("/api/v3"))
		.capacity(10)
		.window(Duration::from_millis(200))
		.build()?;
	let gateway = Arc::new(ReqwestGateway::new(config)?);
	let started = Instant::now();
	let mut producers = Vec::with_capacity(PRODUCERS);

	for producer in 0..PRODUCERS {
		let gateway = gateway.clone();

		producers.push(tokio::spawn(async move {
			let mut created = 0;

			for n in 0..DOCUMENTS_PER_PRODUCER {
				let document = ProductDocument::new("7700000000").with_product(Product {
					certificate_document: Some(CertificateDocument::ConformityCertificate),
					tnved_code: "0401201100".into(),
					uit_code: format!("0104600439931256-{producer}-{n}"),
					..Default::default()
				});

				if gateway
					.introduce_goods(ProductGroup::Milk, &document, "demo-signature")
					.await?
					.is_some()
				{
					created += 1;
				}
			}

			Ok::<_, crpt_gateway::error::Error>(created)
		}));
	}

	let mut created = 0;

	for producer in producers {
		created += producer.await??;
	}

	println!(
		"Created {created} documents in {:?} with {} challenge and {} exchange call(s).",
		started.elapsed(),
		challenge.calls_async().await,
		exchange.calls_async().await,
	);
	println!("Document endpoint saw {} submissions.", create.calls_async().await);

	gateway.close();

	Ok(())
}
