//! Document submission helpers on top of [`Gateway::submit`].

// self
use crate::{
	_prelude::*,
	document::{DocumentEnvelope, ProductDocument, ProductGroup},
	gateway::Gateway,
	http::HttpTransport,
};

impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Submits a prepared envelope to `POST /lk/documents/create?pg=<group>`.
	///
	/// Returns the identifier under `value`, or `None` when the response lacks it.
	pub async fn create_document(&self, envelope: &DocumentEnvelope) -> Result<Option<String>> {
		let descriptor = envelope.to_descriptor()?;

		self.submit(&descriptor).await
	}

	/// Encodes `document` as a manual `LP_INTRODUCE_GOODS` envelope and submits it.
	pub async fn introduce_goods(
		&self,
		product_group: ProductGroup,
		document: &ProductDocument,
		signature: impl Into<String>,
	) -> Result<Option<String>> {
		let envelope = DocumentEnvelope::introduce_goods(document, product_group, signature)?;

		self.create_document(&envelope).await
	}
}
