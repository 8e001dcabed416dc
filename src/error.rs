use derive_more::{Display, Error};

/// Internal error kinds for the gateway's domain and infrastructure
/// layers.
///
/// `UpstreamTerminalReject` is not really a failure — the downstream
/// processor acknowledged the payment (HTTP 422) and it must still be
/// committed — but it is threaded through `Result` so call sites can
/// distinguish "processor said no and we move on" from "processor said
/// yes".
#[derive(Debug, Display, Error)]
pub enum GatewayError {
	#[display("payment failed validation")]
	Validation,
	#[display("upstream processor unavailable: {_0}")]
	UpstreamUnavailable(#[error(not(source))] String),
	#[display("upstream processor acknowledged the payment as invalid")]
	UpstreamTerminalReject,
	#[display("ledger storage error: {_0}")]
	Storage(#[error(not(source))] String),
	#[display("failed to parse: {_0}")]
	Parse(#[error(not(source))] String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<redis::RedisError> for GatewayError {
	fn from(e: redis::RedisError) -> Self {
		GatewayError::Storage(e.to_string())
	}
}

impl From<reqwest::Error> for GatewayError {
	fn from(e: reqwest::Error) -> Self {
		GatewayError::UpstreamUnavailable(e.to_string())
	}
}

impl From<serde_json::Error> for GatewayError {
	fn from(e: serde_json::Error) -> Self {
		GatewayError::Parse(e.to_string())
	}
}
