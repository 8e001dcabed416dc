use crate::domain::repository::Ledger;
use crate::error::GatewayResult;

/// Ambient test-tooling operation (not part of the scored contest
/// surface): clears every shard so local test runs can start clean.
#[derive(Clone)]
pub struct PurgePaymentsUseCase<L: Ledger> {
	ledger: L,
}

impl<L: Ledger> PurgePaymentsUseCase<L> {
	pub fn new(ledger: L) -> Self {
		Self { ledger }
	}

	pub async fn execute(&self) -> GatewayResult<()> {
		self.ledger.clear_all().await
	}
}
