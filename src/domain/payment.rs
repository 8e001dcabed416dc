use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which processor produced a terminal response for a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ProcessorKind {
	Default,
	Fallback,
}

impl ProcessorKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ProcessorKind::Default => "default",
			ProcessorKind::Fallback => "fallback",
		}
	}
}

/// A payment on its way from intake to a downstream processor.
///
/// `requested_at_ms` is deliberately absent until the Dispatcher is about
/// to send it: the timestamp that matters is the one observed by the
/// downstream processor, not the one the caller hit the gateway with.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentRequest {
	pub correlation_id: String,
	pub amount: Decimal,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub requested_at_ms: Option<i64>,
}

impl PaymentRequest {
	pub fn new(correlation_id: String, amount: Decimal) -> Self {
		Self { correlation_id, amount, requested_at_ms: None }
	}

	pub fn is_valid(&self) -> bool {
		!self.correlation_id.trim().is_empty()
			&& self.amount > Decimal::ZERO
			&& self.amount.scale() <= 2
	}
}
