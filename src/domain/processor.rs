use crate::domain::payment::ProcessorKind;

/// The live health hint for one downstream processor.
///
/// `healthy` and `min_latency_ms` are hints, not guarantees: the Health
/// Monitor is the only writer allowed to flip `healthy` back to `true`,
/// but the Dispatcher may flip it to `false` on a failed send as a cheap
/// negative signal. Last-writer-wins is acceptable — this is not a
/// consistency-critical field.
#[derive(Debug, Clone, Copy)]
pub struct ProcessorState {
	pub kind: ProcessorKind,
	pub healthy: bool,
	pub min_latency_ms: u64,
}

impl ProcessorState {
	pub fn new(kind: ProcessorKind) -> Self {
		Self { kind, healthy: true, min_latency_ms: 0 }
	}
}
