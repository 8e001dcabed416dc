use async_trait::async_trait;

use crate::domain::payment::ProcessorKind;
use crate::domain::processor::ProcessorState;

/// Holds the live `ProcessorState` for both processors. The Health
/// Monitor writes `set_health`; the Dispatcher reads `snapshot` and may
/// call `mark_unhealthy` on a failed send (a conservative negative
/// signal — only the Health Monitor may set `healthy` back to `true`).
#[async_trait]
pub trait ProcessorRegistry: Send + Sync + 'static {
	fn snapshot(&self, kind: ProcessorKind) -> ProcessorState;

	fn set_health(&self, kind: ProcessorKind, healthy: bool, min_latency_ms: u64);

	fn mark_unhealthy(&self, kind: ProcessorKind);

	/// Preference-ordered list of processors currently eligible for a
	/// send attempt: `[Default, Fallback]`, filtering out any processor
	/// whose last-known `healthy` is false.
	fn eligible_in_preference_order(&self) -> Vec<ProcessorState> {
		[ProcessorKind::Default, ProcessorKind::Fallback]
			.into_iter()
			.map(|kind| self.snapshot(kind))
			.filter(|state| state.healthy)
			.collect()
	}

	fn both_unhealthy(&self) -> bool {
		!self.snapshot(ProcessorKind::Default).healthy
			&& !self.snapshot(ProcessorKind::Fallback).healthy
	}
}
