use log::{error, warn};
use tokio::time::{Duration, sleep};

use crate::domain::payment::{PaymentRequest, ProcessorKind};
use crate::domain::processor::ProcessorState;
use crate::domain::record::PaymentRecord;
use crate::domain::repository::Ledger;
use crate::domain::shard::ShardId;
use crate::infrastructure::http::processor_client::{ProcessorClient, SendOutcome};

/// How many times to retry a ledger commit after the processor has
/// already terminally accepted the payment, before giving up and
/// dropping it. Re-posting to the processor at that point would
/// double-count, so a bounded number of retries is the best available
/// option.
const COMMIT_RETRIES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
	Committed,
	Failed,
}

/// One send-and-record attempt against a single processor.
#[derive(Clone)]
pub struct ProcessPaymentUseCase<L: Ledger> {
	ledger: L,
}

impl<L: Ledger> ProcessPaymentUseCase<L> {
	pub fn new(ledger: L) -> Self {
		Self { ledger }
	}

	pub async fn execute(
		&self,
		write_shard: ShardId,
		client: &ProcessorClient,
		processor: ProcessorState,
		payment: &mut PaymentRequest,
	) -> AttemptOutcome {
		if processor.min_latency_ms > 0 {
			sleep(Duration::from_millis(processor.min_latency_ms)).await;
		}

		let requested_at_ms = crate::infrastructure::time::now_utc_ms();
		payment.requested_at_ms = Some(requested_at_ms);

		let outcome = client
			.send_payment(
				&payment.correlation_id,
				payment.amount,
				requested_at_ms,
				processor.min_latency_ms,
			)
			.await;

		match outcome {
			SendOutcome::Success | SendOutcome::TerminalReject => {
				let record = PaymentRecord::new(
					payment.correlation_id.clone(),
					payment.amount,
					requested_at_ms,
					processor.kind,
				);
				self.commit_with_retry(write_shard, record).await;
				AttemptOutcome::Committed
			}
			SendOutcome::Failure => AttemptOutcome::Failed,
		}
	}

	async fn commit_with_retry(&self, shard: ShardId, record: PaymentRecord) {
		let correlation_id = record.correlation_id.clone();
		for attempt in 0..COMMIT_RETRIES {
			match self.ledger.insert(shard, record.clone()).await {
				Ok(()) => return,
				Err(e) => {
					warn!(
						"ledger commit for {correlation_id} failed (attempt \
						 {attempt}): {e}"
					);
				}
			}
		}
		error!(
			"dropping payment {correlation_id}: processor accepted it but the \
			 ledger commit kept failing"
		);
	}
}
