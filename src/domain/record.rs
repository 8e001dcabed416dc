use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::payment::ProcessorKind;

/// A row in the Ledger: exists iff a downstream processor returned a
/// terminal response (2xx or 422) for exactly this
/// (correlation_id, amount, requested_at_ms).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentRecord {
	pub correlation_id: String,
	pub amount: Decimal,
	pub requested_at_ms: i64,
	pub processor_used: ProcessorKind,
}

impl PaymentRecord {
	pub fn new(
		correlation_id: String,
		amount: Decimal,
		requested_at_ms: i64,
		processor_used: ProcessorKind,
	) -> Self {
		Self { correlation_id, amount, requested_at_ms, processor_used }
	}
}
