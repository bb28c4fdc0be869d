//! Demonstrates plugging an in-process transport into the gateway.
//!
//! 1. Implement [`HttpTransport`] and return the raw status + body for each exchange.
//! 2. Pass the transport to [`Gateway::with_transport`].
//! 3. Observe how the gateway classifies non-200 statuses and sticky credential failures.

// std
use std::{
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};
// crates.io
use color_eyre::Result;
// self
use crpt_gateway::{
	config::GatewayConfig,
	error::{Error, TransportError},
	gateway::Gateway,
	http::{HttpTransport, InboundResponse, OutboundRequest, TransportFuture},
	request::{Method, RequestDescriptor},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = GatewayConfig::builder("https://ismp.crpt.ru/api/v3")
		.capacity(5)
		.window(Duration::from_millis(100))
		.build()?;
	let transport = Arc::new(InProcessTransport::default());
	let gateway = <Gateway<InProcessTransport>>::with_transport(config.clone(), transport.clone())?;
	let list = RequestDescriptor::get("/lk/documents/list").with_query("pg", "milk");

	for _ in 0..3 {
		let body = gateway.submit(&list).await?;

		println!("Document list: {}.", body.unwrap_or_default());
	}

	println!(
		"Credential fetched {} time(s) for {} exchange(s).",
		gateway.credential_metrics().attempts(),
		transport.exchanges.load(Ordering::Relaxed),
	);

	let missing = RequestDescriptor::get("/lk/documents/missing");

	match gateway.submit(&missing).await {
		Err(Error::Api { status, body }) =>
			println!("API rejected the call with {status}: {body}."),
		other => println!("Unexpected outcome: {other:?}."),
	}

	let offline = <Gateway<OfflineTransport>>::with_transport(config, OfflineTransport)?;

	for attempt in 1..=2 {
		match offline.submit(&list).await {
			Err(e) => println!("Offline attempt {attempt} failed: {e}"),
			Ok(_) => println!("Offline transport unexpectedly succeeded."),
		}
	}

	Ok(())
}

#[derive(Default)]
struct InProcessTransport {
	exchanges: AtomicUsize,
}
impl HttpTransport for InProcessTransport {
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			self.exchanges.fetch_add(1, Ordering::Relaxed);

			let response = match (request.method, request.url.path()) {
				(Method::Get, "/api/v3/auth/cert/key") =>
					InboundResponse::new(200, "{\"uuid\":\"local\",\"data\":\"LOCAL-CHALLENGE\"}"),
				(Method::Post, "/api/v3/auth/cert/") =>
					InboundResponse::new(200, "{\"token\":\"local-token\"}"),
				(Method::Get, "/api/v3/lk/documents/list") if request.bearer.is_some() =>
					InboundResponse::new(200, "[{\"number\":\"local-1\"}]"),
				_ => InboundResponse::new(404, "{\"error_message\":\"not found\"}"),
			};

			Ok(response)
		})
	}
}

struct OfflineTransport;
impl HttpTransport for OfflineTransport {
	fn execute(&self, _request: OutboundRequest) -> TransportFuture<'_> {
		Box::pin(async {
			Err(TransportError::Io(std::io::Error::new(
				std::io::ErrorKind::ConnectionRefused,
				"offline",
			)))
		})
	}
}
