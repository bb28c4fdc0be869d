//! Enumerated wire constants used by document envelopes.

// self
use crate::_prelude::*;

/// Product group (`pg`); lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductGroup {
	/// `clothes`.
	Clothes,
	/// `shoes`.
	Shoes,
	/// `tobacco`.
	Tobacco,
	/// `perfumery`.
	Perfumery,
	/// `tires`.
	Tires,
	/// `electronics`.
	Electronics,
	/// `pharma`.
	Pharma,
	/// `milk`.
	Milk,
	/// `bicycle`.
	Bicycle,
	/// `wheelchairs`.
	Wheelchairs,
}
impl ProductGroup {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProductGroup::Clothes => "clothes",
			ProductGroup::Shoes => "shoes",
			ProductGroup::Tobacco => "tobacco",
			ProductGroup::Perfumery => "perfumery",
			ProductGroup::Tires => "tires",
			ProductGroup::Electronics => "electronics",
			ProductGroup::Pharma => "pharma",
			ProductGroup::Milk => "milk",
			ProductGroup::Bicycle => "bicycle",
			ProductGroup::Wheelchairs => "wheelchairs",
		}
	}
}
impl Display for ProductGroup {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Encoding of the embedded document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentFormat {
	/// JSON document entered manually.
	Manual,
	/// XML document.
	Xml,
	/// CSV document.
	Csv,
}

/// Kind of mandatory certification document attached to a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateDocument {
	/// Certificate of conformity.
	ConformityCertificate,
	/// Declaration of conformity.
	ConformityDeclaration,
}

/// Document types accepted by the creation endpoint.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
	AggregationDocument,
	AggregationDocumentCsv,
	AggregationDocumentXml,
	DisaggregationDocument,
	DisaggregationDocumentCsv,
	DisaggregationDocumentXml,
	ReaggregationDocument,
	ReaggregationDocumentCsv,
	ReaggregationDocumentXml,
	LpIntroduceGoods,
	LpShipGoods,
	LpShipGoodsCsv,
	LpShipGoodsXml,
	LpIntroduceGoodsCsv,
	LpIntroduceGoodsXml,
	LpAcceptGoods,
	LpAcceptGoodsXml,
	LkRemark,
	LkRemarkCsv,
	LkRemarkXml,
	LkReceipt,
	LkReceiptXml,
	LkReceiptCsv,
	LpGoodsImport,
	LpGoodsImportCsv,
	LpGoodsImportXml,
	LpCancelShipment,
	LpCancelShipmentCsv,
	LpCancelShipmentXml,
	LkKmCancellation,
	LkKmCancellationCsv,
	LkKmCancellationXml,
	LkAppliedKmCancellation,
	LkAppliedKmCancellationCsv,
	LkAppliedKmCancellationXml,
	LkContractCommissioning,
	LkContractCommissioningCsv,
	LkContractCommissioningXml,
	LkIndiCommissioning,
	LkIndiCommissioningCsv,
	LkIndiCommissioningXml,
	LpShipReceipt,
	LpShipReceiptCsv,
	LpShipReceiptXml,
	OstDescription,
	OstDescriptionCsv,
	OstDescriptionXml,
	Crossborder,
	CrossborderCsv,
	CrossborderXml,
	LpIntroduceOst,
	LpIntroduceOstCsv,
	LpIntroduceOstXml,
	LpReturn,
	LpReturnCsv,
	LpReturnXml,
	LpShipGoodsCrossborder,
	LpShipGoodsCrossborderCsv,
	LpShipGoodsCrossborderXml,
	LpCancelShipmentCrossborder,
}
impl DocumentType {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			DocumentType::AggregationDocument => "AGGREGATION_DOCUMENT",
			DocumentType::AggregationDocumentCsv => "AGGREGATION_DOCUMENT_CSV",
			DocumentType::AggregationDocumentXml => "AGGREGATION_DOCUMENT_XML",
			DocumentType::DisaggregationDocument => "DISAGGREGATION_DOCUMENT",
			DocumentType::DisaggregationDocumentCsv => "DISAGGREGATION_DOCUMENT_CSV",
			DocumentType::DisaggregationDocumentXml => "DISAGGREGATION_DOCUMENT_XML",
			DocumentType::ReaggregationDocument => "REAGGREGATION_DOCUMENT",
			DocumentType::ReaggregationDocumentCsv => "REAGGREGATION_DOCUMENT_CSV",
			DocumentType::ReaggregationDocumentXml => "REAGGREGATION_DOCUMENT_XML",
			DocumentType::LpIntroduceGoods => "LP_INTRODUCE_GOODS",
			DocumentType::LpShipGoods => "LP_SHIP_GOODS",
			DocumentType::LpShipGoodsCsv => "LP_SHIP_GOODS_CSV",
			DocumentType::LpShipGoodsXml => "LP_SHIP_GOODS_XML",
			DocumentType::LpIntroduceGoodsCsv => "LP_INTRODUCE_GOODS_CSV",
			DocumentType::LpIntroduceGoodsXml => "LP_INTRODUCE_GOODS_XML",
			DocumentType::LpAcceptGoods => "LP_ACCEPT_GOODS",
			DocumentType::LpAcceptGoodsXml => "LP_ACCEPT_GOODS_XML",
			DocumentType::LkRemark => "LK_REMARK",
			DocumentType::LkRemarkCsv => "LK_REMARK_CSV",
			DocumentType::LkRemarkXml => "LK_REMARK_XML",
			DocumentType::LkReceipt => "LK_RECEIPT",
			DocumentType::LkReceiptXml => "LK_RECEIPT_XML",
			DocumentType::LkReceiptCsv => "LK_RECEIPT_CSV",
			DocumentType::LpGoodsImport => "LP_GOODS_IMPORT",
			DocumentType::LpGoodsImportCsv => "LP_GOODS_IMPORT_CSV",
			DocumentType::LpGoodsImportXml => "LP_GOODS_IMPORT_XML",
			DocumentType::LpCancelShipment => "LP_CANCEL_SHIPMENT",
			DocumentType::LpCancelShipmentCsv => "LP_CANCEL_SHIPMENT_CSV",
			DocumentType::LpCancelShipmentXml => "LP_CANCEL_SHIPMENT_XML",
			DocumentType::LkKmCancellation => "LK_KM_CANCELLATION",
			DocumentType::LkKmCancellationCsv => "LK_KM_CANCELLATION_CSV",
			DocumentType::LkKmCancellationXml => "LK_KM_CANCELLATION_XML",
			DocumentType::LkAppliedKmCancellation => "LK_APPLIED_KM_CANCELLATION",
			DocumentType::LkAppliedKmCancellationCsv => "LK_APPLIED_KM_CANCELLATION_CSV",
			DocumentType::LkAppliedKmCancellationXml => "LK_APPLIED_KM_CANCELLATION_XML",
			DocumentType::LkContractCommissioning => "LK_CONTRACT_COMMISSIONING",
			DocumentType::LkContractCommissioningCsv => "LK_CONTRACT_COMMISSIONING_CSV",
			DocumentType::LkContractCommissioningXml => "LK_CONTRACT_COMMISSIONING_XML",
			DocumentType::LkIndiCommissioning => "LK_INDI_COMMISSIONING",
			DocumentType::LkIndiCommissioningCsv => "LK_INDI_COMMISSIONING_CSV",
			DocumentType::LkIndiCommissioningXml => "LK_INDI_COMMISSIONING_XML",
			DocumentType::LpShipReceipt => "LP_SHIP_RECEIPT",
			DocumentType::LpShipReceiptCsv => "LP_SHIP_RECEIPT_CSV",
			DocumentType::LpShipReceiptXml => "LP_SHIP_RECEIPT_XML",
			DocumentType::OstDescription => "OST_DESCRIPTION",
			DocumentType::OstDescriptionCsv => "OST_DESCRIPTION_CSV",
			DocumentType::OstDescriptionXml => "OST_DESCRIPTION_XML",
			DocumentType::Crossborder => "CROSSBORDER",
			DocumentType::CrossborderCsv => "CROSSBORDER_CSV",
			DocumentType::CrossborderXml => "CROSSBORDER_XML",
			DocumentType::LpIntroduceOst => "LP_INTRODUCE_OST",
			DocumentType::LpIntroduceOstCsv => "LP_INTRODUCE_OST_CSV",
			DocumentType::LpIntroduceOstXml => "LP_INTRODUCE_OST_XML",
			DocumentType::LpReturn => "LP_RETURN",
			DocumentType::LpReturnCsv => "LP_RETURN_CSV",
			DocumentType::LpReturnXml => "LP_RETURN_XML",
			DocumentType::LpShipGoodsCrossborder => "LP_SHIP_GOODS_CROSSBORDER",
			DocumentType::LpShipGoodsCrossborderCsv => "LP_SHIP_GOODS_CROSSBORDER_CSV",
			DocumentType::LpShipGoodsCrossborderXml => "LP_SHIP_GOODS_CROSSBORDER_XML",
			DocumentType::LpCancelShipmentCrossborder => "LP_CANCEL_SHIPMENT_CROSSBORDER",
		}
	}
}
impl Display for DocumentType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
