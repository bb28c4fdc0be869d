//! Document shaping for `POST /lk/documents/create`.
//!
//! These types only produce an opaque [`RequestDescriptor`]; the gateway core never looks
//! inside the body. The envelope carries the product document as
//! `Base64(JSON(ProductDocument))`, as the API requires.

mod kinds;

pub use kinds::*;

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, request::RequestDescriptor};

/// Path of the unified document creation endpoint.
pub const CREATE_DOCUMENT_PATH: &str = "/lk/documents/create";
/// Response field holding the created document identifier.
pub const CREATE_DOCUMENT_RESPONSE_KEY: &str = "value";

/// One product line of a goods introduction document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
	/// Kind of mandatory certification document.
	pub certificate_document: Option<CertificateDocument>,
	/// Certificate issue date (`YYYY-MM-DD`).
	pub certificate_document_date: String,
	/// Certificate number.
	pub certificate_document_number: String,
	/// Owner INN.
	pub owner_inn: String,
	/// Producer INN.
	pub producer_inn: String,
	/// Production date (`YYYY-MM-DD`).
	pub production_date: String,
	/// TN VED commodity code.
	pub tnved_code: String,
	/// Unit identification code.
	pub uit_code: String,
	/// Transport package identification code.
	pub uitu_code: String,
}

/// `description` block of a [`ProductDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescription {
	/// Participant INN repeated in the description.
	#[serde(rename = "participantInn")]
	pub participant_inn: String,
}

/// Goods introduction document embedded (Base64) in a [`DocumentEnvelope`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDocument {
	/// Description block.
	pub description: DocumentDescription,
	/// Document identifier.
	pub doc_id: String,
	/// Document status.
	pub doc_status: String,
	/// Document type label.
	pub doc_type: String,
	/// Whether the goods are imported; sent as the string `"true"`/`"false"`.
	#[serde(rename = "importRequest", with = "bool_as_string")]
	pub import_request: bool,
	/// Owner INN.
	pub owner_inn: String,
	/// Participant INN.
	pub participant_inn: String,
	/// Producer INN.
	pub producer_inn: String,
	/// Production date (`YYYY-MM-DD`).
	pub production_date: String,
	/// Production type.
	pub production_type: String,
	/// Product lines.
	pub products: Vec<Product>,
	/// Registration date.
	pub reg_date: String,
	/// Registration number.
	pub reg_number: String,
}
impl ProductDocument {
	/// Creates a document for `participant_inn`, mirroring it into the description block.
	pub fn new(participant_inn: impl Into<String>) -> Self {
		let participant_inn = participant_inn.into();

		Self {
			description: DocumentDescription { participant_inn: participant_inn.clone() },
			participant_inn,
			..Default::default()
		}
	}

	/// Appends a product line.
	pub fn with_product(mut self, product: Product) -> Self {
		self.products.push(product);

		self
	}
}

/// Request body for the unified document creation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEnvelope {
	/// Encoding of the embedded document.
	pub document_format: DocumentFormat,
	/// `Base64(JSON(document))`.
	pub product_document: String,
	/// Product group; also sent as the `pg` query parameter.
	pub product_group: ProductGroup,
	/// Detached signature over the document.
	pub signature: String,
	/// Document type.
	#[serde(rename = "type")]
	pub document_type: DocumentType,
}
impl DocumentEnvelope {
	/// Encodes `document` and wraps it with its routing metadata.
	pub fn new(
		document_format: DocumentFormat,
		document: &ProductDocument,
		product_group: ProductGroup,
		signature: impl Into<String>,
		document_type: DocumentType,
	) -> Result<Self> {
		let json = serde_json::to_vec(document).map_err(Error::Serialization)?;

		Ok(Self {
			document_format,
			product_document: STANDARD.encode(json),
			product_group,
			signature: signature.into(),
			document_type,
		})
	}

	/// Builds a manual `LP_INTRODUCE_GOODS` envelope for goods produced in the RF.
	pub fn introduce_goods(
		document: &ProductDocument,
		product_group: ProductGroup,
		signature: impl Into<String>,
	) -> Result<Self> {
		Self::new(
			DocumentFormat::Manual,
			document,
			product_group,
			signature,
			DocumentType::LpIntroduceGoods,
		)
	}

	/// Shapes the authenticated create-document request.
	pub fn to_descriptor(&self) -> Result<RequestDescriptor> {
		let body = serde_json::to_vec(self).map_err(Error::Serialization)?;

		Ok(RequestDescriptor::post(CREATE_DOCUMENT_PATH)
			.with_query("pg", self.product_group.as_str())
			.with_body(body)
			.with_response_key(CREATE_DOCUMENT_RESPONSE_KEY))
	}
}

mod bool_as_string {
	// crates.io
	use serde::{Deserializer, Serializer, de::Error as _};
	// self
	use crate::_prelude::*;

	pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(if *value { "true" } else { "false" })
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
	where
		D: Deserializer<'de>,
	{
		match String::deserialize(deserializer)?.as_str() {
			"true" => Ok(true),
			"false" => Ok(false),
			other =>
				Err(D::Error::custom(format!("expected \"true\" or \"false\", got {other:?}"))),
		}
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::{Value, json};
	// self
	use super::*;

	fn document() -> ProductDocument {
		ProductDocument::new("7700000000").with_product(Product {
			certificate_document: Some(CertificateDocument::ConformityCertificate),
			certificate_document_date: "2019-04-12".into(),
			tnved_code: "6401000000".into(),
			..Default::default()
		})
	}

	#[test]
	fn product_document_uses_wire_field_names() {
		let value = serde_json::to_value(document()).expect("Document should serialize.");

		assert_eq!(value["description"], json!({ "participantInn": "7700000000" }));
		assert_eq!(value["importRequest"], json!("false"));
		assert_eq!(value["participant_inn"], json!("7700000000"));
		assert_eq!(value["products"][0]["certificate_document"], json!("CONFORMITY_CERTIFICATE"));
		assert_eq!(value["products"][0]["tnved_code"], json!("6401000000"));
	}

	#[test]
	fn envelope_embeds_base64_json_document() {
		let envelope = DocumentEnvelope::introduce_goods(&document(), ProductGroup::Milk, "sig")
			.expect("Envelope should encode.");
		let decoded =
			STANDARD.decode(&envelope.product_document).expect("Payload should be Base64.");
		let embedded: ProductDocument =
			serde_json::from_slice(&decoded).expect("Payload should be the document JSON.");

		assert_eq!(embedded, document());

		let body = serde_json::to_value(&envelope).expect("Envelope should serialize.");

		assert_eq!(body["document_format"], json!("MANUAL"));
		assert_eq!(body["product_group"], json!("milk"));
		assert_eq!(body["type"], json!("LP_INTRODUCE_GOODS"));
		assert_eq!(body["signature"], json!("sig"));
	}

	#[test]
	fn descriptor_targets_create_endpoint() {
		let envelope = DocumentEnvelope::introduce_goods(&document(), ProductGroup::Shoes, "sig")
			.expect("Envelope should encode.");
		let descriptor = envelope.to_descriptor().expect("Descriptor should build.");

		assert_eq!(descriptor.path, CREATE_DOCUMENT_PATH);
		assert_eq!(descriptor.query.get("pg").map(String::as_str), Some("shoes"));
		assert_eq!(descriptor.response_key.as_deref(), Some("value"));
		assert!(descriptor.requires_auth);

		let body: Value = serde_json::from_slice(
			descriptor.body.as_deref().expect("Descriptor should carry a body."),
		)
		.expect("Body should be JSON.");

		assert_eq!(body["product_group"], json!("shoes"));
	}

	#[test]
	fn import_request_rejects_non_boolean_strings() {
		let mut value = serde_json::to_value(document()).expect("Document should serialize.");

		value["importRequest"] = json!("yes");

		assert!(serde_json::from_value::<ProductDocument>(value).is_err());
	}
}
