use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatePaymentCommand {
	pub correlation_id: String,
	pub amount: Decimal,
}

/// Already-resolved millisecond bounds. `None` on either side means the
/// caller's range was missing or unparsable and the summary must come
/// back as all zeros.
#[derive(Debug, Clone, Copy)]
pub struct SummaryRange {
	pub from_ms: i64,
	pub to_ms: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PaymentSummaryResult {
	#[serde(rename = "totalRequests")]
	pub total_requests: u64,
	#[serde(rename = "totalAmount")]
	pub total_amount: Decimal,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PaymentsSummaryResponse {
	pub default: PaymentSummaryResult,
	pub fallback: PaymentSummaryResult,
}
