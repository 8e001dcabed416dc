use std::time::Duration;

use chrono::{TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, GatewayResult};

#[derive(Debug, Serialize)]
struct OutboundPayment<'a> {
	#[serde(rename = "correlationId")]
	correlation_id: &'a str,
	amount: Decimal,
	#[serde(rename = "requestedAt")]
	requested_at: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthProbe {
	pub failing: bool,
	#[serde(rename = "minResponseTime")]
	pub min_response_time_ms: u64,
}

/// What a single send attempt resolved to. `TerminalReject` and
/// `Success` both mean "commit it"; only `Failure` means "try the next
/// processor, or requeue".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
	Success,
	TerminalReject,
	Failure,
}

/// Wraps the downstream processor's two endpoints with per-call
/// timeouts derived from its currently-known `min_latency_ms`, shared
/// between the Health Monitor and the Dispatcher for one processor.
#[derive(Clone)]
pub struct ProcessorClient {
	http_client: Client,
	base_url: String,
}

impl ProcessorClient {
	pub fn new(http_client: Client, base_url: String) -> Self {
		Self { http_client, base_url }
	}

	/// Formats `requestedAt` as `yyyy-MM-dd'T'HH:mm:ss.fff'Z'` and posts
	/// with a `min_latency_ms + 500ms` deadline.
	pub async fn send_payment(
		&self,
		correlation_id: &str,
		amount: Decimal,
		requested_at_ms: i64,
		min_latency_ms: u64,
	) -> SendOutcome {
		let requested_at = Utc
			.timestamp_millis_opt(requested_at_ms)
			.single()
			.unwrap_or_else(Utc::now)
			.format("%Y-%m-%dT%H:%M:%S%.3fZ")
			.to_string();

		let payload = OutboundPayment { correlation_id, amount, requested_at };
		let timeout = Duration::from_millis(min_latency_ms + 500);

		let response = self
			.http_client
			.post(format!("{}/payments", self.base_url))
			.timeout(timeout)
			.json(&payload)
			.send()
			.await;

		match response {
			Ok(resp) if resp.status().is_success() => SendOutcome::Success,
			Ok(resp) if resp.status().as_u16() == 422 => SendOutcome::TerminalReject,
			Ok(_) => SendOutcome::Failure,
			Err(_) => SendOutcome::Failure,
		}
	}

	/// Fixed 10s deadline, independent of the
	/// processor's own `min_latency_ms`.
	pub async fn probe_health(&self) -> GatewayResult<HealthProbe> {
		let response = self
			.http_client
			.get(format!("{}/payments/service-health", self.base_url))
			.timeout(Duration::from_secs(10))
			.send()
			.await?;

		if !response.status().is_success() {
			return Err(GatewayError::UpstreamUnavailable(format!(
				"health probe returned {}",
				response.status()
			)));
		}

		Ok(response.json::<HealthProbe>().await?)
	}
}
