use crate::domain::payment::ProcessorKind;
use crate::domain::repository::Ledger;
use crate::domain::shard::ShardLayout;
use crate::use_cases::dto::{PaymentsSummaryResponse, SummaryRange};

/// Reads both shards in parallel and aggregates by processor. `range`
/// is `None` when the caller's `from`/`to` were missing or unparsable —
/// that case must come back all-zeros, so this never even touches the
/// Ledger.
#[derive(Clone)]
pub struct GetPaymentSummaryUseCase<L: Ledger> {
	ledger: L,
	shard_layout: ShardLayout,
}

impl<L: Ledger> GetPaymentSummaryUseCase<L> {
	pub fn new(ledger: L, shard_layout: ShardLayout) -> Self {
		Self { ledger, shard_layout }
	}

	pub async fn execute(
		&self,
		range: Option<SummaryRange>,
	) -> PaymentsSummaryResponse {
		let Some(range) = range else {
			return PaymentsSummaryResponse::default();
		};

		let scans = futures::future::join_all(
			self.shard_layout
				.readable_shards()
				.into_iter()
				.map(|shard| self.ledger.scan(shard, range.from_ms, range.to_ms)),
		)
		.await;

		let mut response = PaymentsSummaryResponse::default();

		for scan in scans {
			let rows = match scan {
				Ok(rows) => rows,
				Err(_) => continue, // one shard's read error shouldn't zero the other
			};
			for (processor, amount) in rows {
				let bucket = match processor {
					ProcessorKind::Default => &mut response.default,
					ProcessorKind::Fallback => &mut response.fallback,
				};
				bucket.total_requests += 1;
				bucket.total_amount += amount;
			}
		}

		response
	}
}
