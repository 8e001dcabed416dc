use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentRequest {
	#[serde(rename = "correlationId")]
	pub correlation_id: String,
	pub amount: Decimal,
}

/// `from`/`to` are kept as raw strings at the query-extraction layer:
/// a field-level `Deserialize` that rejects a malformed timestamp would
/// fail the whole `web::Query` extraction before the handler ever runs,
/// turning an unparsable range into a 400 instead of the all-zeros
/// response this endpoint must always give. Parsing — and swallowing
/// parse errors into `None` — happens afterward, in `parsed_range`.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PaymentsSummaryFilter {
	#[serde(default)]
	pub from: Option<String>,
	#[serde(default)]
	pub to:   Option<String>,
}

impl PaymentsSummaryFilter {
	/// `None` if the param was absent, blank, or failed to parse as
	/// RFC 3339.
	fn parse_one(raw: &Option<String>) -> Option<OffsetDateTime> {
		let raw = raw.as_ref()?;
		if raw.trim().is_empty() {
			return None;
		}
		OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()
	}

	pub fn parsed_range(&self) -> (Option<OffsetDateTime>, Option<OffsetDateTime>) {
		(Self::parse_one(&self.from), Self::parse_one(&self.to))
	}

	pub fn to_ms(dt: OffsetDateTime) -> i64 {
		dt.unix_timestamp() * 1000 + i64::from(dt.millisecond())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_and_missing_params_parse_to_none() {
		let filter = PaymentsSummaryFilter { from: None, to: Some("   ".to_string()) };
		assert_eq!(filter.parsed_range(), (None, None));
	}

	#[test]
	fn malformed_params_parse_to_none_instead_of_erroring() {
		let filter = PaymentsSummaryFilter {
			from: Some("garbage".to_string()),
			to:   Some("also-garbage".to_string()),
		};
		assert_eq!(filter.parsed_range(), (None, None));
	}

	#[test]
	fn well_formed_params_parse_to_some() {
		let filter = PaymentsSummaryFilter {
			from: Some("1970-01-01T00:00:00.000Z".to_string()),
			to:   Some("2999-01-01T00:00:00.000Z".to_string()),
		};
		let (from, to) = filter.parsed_range();
		assert!(from.is_some());
		assert!(to.is_some());
	}
}
