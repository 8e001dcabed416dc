use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::payment::ProcessorKind;
use crate::domain::processor::ProcessorState;
use crate::domain::registry::ProcessorRegistry;

/// `ProcessorState` behind a plain `RwLock` — last-writer-wins, no
/// transactional model, because the fields are hints rather than a
/// consistency-critical source of truth.
#[derive(Clone)]
pub struct InMemoryProcessorRegistry {
	states: Arc<RwLock<HashMap<ProcessorKind, ProcessorState>>>,
}

impl InMemoryProcessorRegistry {
	pub fn new() -> Self {
		let mut states = HashMap::new();
		states.insert(ProcessorKind::Default, ProcessorState::new(ProcessorKind::Default));
		states.insert(
			ProcessorKind::Fallback,
			ProcessorState::new(ProcessorKind::Fallback),
		);
		Self { states: Arc::new(RwLock::new(states)) }
	}
}

impl Default for InMemoryProcessorRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ProcessorRegistry for InMemoryProcessorRegistry {
	fn snapshot(&self, kind: ProcessorKind) -> ProcessorState {
		self.states
			.read()
			.unwrap()
			.get(&kind)
			.copied()
			.unwrap_or_else(|| ProcessorState::new(kind))
	}

	fn set_health(&self, kind: ProcessorKind, healthy: bool, min_latency_ms: u64) {
		self.states.write().unwrap().insert(
			kind,
			ProcessorState { kind, healthy, min_latency_ms },
		);
	}

	fn mark_unhealthy(&self, kind: ProcessorKind) {
		let mut states = self.states.write().unwrap();
		let entry = states.entry(kind).or_insert_with(|| ProcessorState::new(kind));
		entry.healthy = false;
	}
}
