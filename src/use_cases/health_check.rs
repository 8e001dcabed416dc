use log::error;

use crate::domain::payment::ProcessorKind;
use crate::domain::registry::ProcessorRegistry;
use crate::infrastructure::http::processor_client::ProcessorClient;

/// Probes one processor's health endpoint and updates the shared
/// registry. Transport errors, non-2xx responses, and
/// parse errors are all folded into `healthy = false`, leaving
/// `min_latency_ms` untouched — only a successful probe may change it.
#[derive(Clone)]
pub struct HealthCheckUseCase<R: ProcessorRegistry> {
	registry: R,
}

impl<R: ProcessorRegistry> HealthCheckUseCase<R> {
	pub fn new(registry: R) -> Self {
		Self { registry }
	}

	pub async fn execute(&self, kind: ProcessorKind, client: &ProcessorClient) {
		match client.probe_health().await {
			Ok(probe) => {
				self.registry.set_health(
					kind,
					!probe.failing,
					probe.min_response_time_ms,
				);
			}
			Err(e) => {
				error!("health probe for {:?} failed: {e}", kind);
				let current = self.registry.snapshot(kind);
				self.registry.set_health(kind, false, current.min_latency_ms);
			}
		}
	}
}
