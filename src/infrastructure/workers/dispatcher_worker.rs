use log::error;
use tokio::time::{Duration, sleep};

use crate::domain::payment::{PaymentRequest, ProcessorKind};
use crate::domain::queue::{Message, Queue};
use crate::domain::registry::ProcessorRegistry;
use crate::domain::repository::Ledger;
use crate::domain::shard::ShardId;
use crate::infrastructure::http::processor_client::ProcessorClient;
use crate::use_cases::process_payment::{AttemptOutcome, ProcessPaymentUseCase};

const BOTH_DOWN_BACKOFF: Duration = Duration::from_millis(10);

fn client_for<'a>(
	kind: ProcessorKind,
	default_client: &'a ProcessorClient,
	fallback_client: &'a ProcessorClient,
) -> &'a ProcessorClient {
	match kind {
		ProcessorKind::Default => default_client,
		ProcessorKind::Fallback => fallback_client,
	}
}

/// The single consumer loop driving payments from the intake queue to a
/// downstream processor. Both replicas run one of these,
/// competing for the same Redis-backed queue.
pub async fn run<Q, R, L>(
	queue: Q,
	registry: R,
	process_use_case: ProcessPaymentUseCase<L>,
	write_shard: ShardId,
	default_client: ProcessorClient,
	fallback_client: ProcessorClient,
) where
	Q: Queue<PaymentRequest>,
	R: ProcessorRegistry,
	L: Ledger,
{
	loop {
		if registry.both_unhealthy() {
			sleep(BOTH_DOWN_BACKOFF).await;
			continue;
		}

		let popped = match queue.pop().await {
			Ok(popped) => popped,
			Err(e) => {
				error!("intake queue pop failed: {e}");
				sleep(BOTH_DOWN_BACKOFF).await;
				continue;
			}
		};

		let Some(Message { id, body: mut payment }) = popped else { continue };

		let mut committed = false;
		for processor in registry.eligible_in_preference_order() {
			let client = client_for(processor.kind, &default_client, &fallback_client);
			match process_use_case
				.execute(write_shard, client, processor, &mut payment)
				.await
			{
				AttemptOutcome::Committed => {
					committed = true;
					break;
				}
				AttemptOutcome::Failed => {
					registry.mark_unhealthy(processor.kind);
				}
			}
		}

		if !committed {
			payment.requested_at_ms = None;
			if let Err(e) = queue.push(Message::with(id, payment)).await {
				error!("failed to requeue payment after exhausting processors: {e}");
			}
		}
	}
}
