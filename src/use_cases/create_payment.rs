use uuid::Uuid;

use crate::domain::payment::PaymentRequest;
use crate::domain::queue::{Message, Queue};
use crate::error::{GatewayError, GatewayResult};
use crate::use_cases::dto::CreatePaymentCommand;

/// Validates and enqueues a payment. The only synchronous step on the
/// `POST /payments` path — must stay O(1) amortized.
#[derive(Clone)]
pub struct CreatePaymentUseCase<Q: Queue<PaymentRequest>> {
	intake_queue: Q,
}

impl<Q: Queue<PaymentRequest>> CreatePaymentUseCase<Q> {
	pub fn new(intake_queue: Q) -> Self {
		Self { intake_queue }
	}

	pub async fn execute(&self, command: CreatePaymentCommand) -> GatewayResult<()> {
		let payment = PaymentRequest::new(command.correlation_id, command.amount);

		if !payment.is_valid() {
			return Err(GatewayError::Validation);
		}

		self.intake_queue
			.push(Message::with(Uuid::new_v4(), payment))
			.await
			.map_err(|e| GatewayError::Storage(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use async_trait::async_trait;
	use rust_decimal_macros::dec;
	use tokio::sync::Mutex;

	use super::*;

	#[derive(Default)]
	struct RecordingQueue {
		pushed: Mutex<Vec<PaymentRequest>>,
	}

	#[async_trait]
	impl Queue<PaymentRequest> for RecordingQueue {
		async fn pop(
			&self,
		) -> Result<Option<Message<PaymentRequest>>, Box<dyn std::error::Error + Send>>
		{
			Ok(None)
		}

		async fn push(
			&self,
			message: Message<PaymentRequest>,
		) -> Result<(), Box<dyn std::error::Error + Send>> {
			self.pushed.lock().await.push(message.body);
			Ok(())
		}
	}

	#[tokio::test]
	async fn enqueues_a_valid_payment_without_a_timestamp() {
		let queue = RecordingQueue::default();
		let use_case = CreatePaymentUseCase::new(queue);

		use_case
			.execute(CreatePaymentCommand {
				correlation_id: "c1".to_string(),
				amount: dec!(100.00),
			})
			.await
			.unwrap();

		let pushed = use_case.intake_queue.pushed.lock().await;
		assert_eq!(pushed.len(), 1);
		assert_eq!(pushed[0].correlation_id, "c1");
		assert!(pushed[0].requested_at_ms.is_none());
	}

	#[tokio::test]
	async fn rejects_blank_correlation_id_without_enqueueing() {
		let queue = RecordingQueue::default();
		let use_case = CreatePaymentUseCase::new(queue);

		let result = use_case
			.execute(CreatePaymentCommand {
				correlation_id: "   ".to_string(),
				amount: dec!(1.00),
			})
			.await;

		assert!(matches!(result, Err(GatewayError::Validation)));
		assert!(use_case.intake_queue.pushed.lock().await.is_empty());
	}

	#[tokio::test]
	async fn rejects_non_positive_amount_without_enqueueing() {
		let queue = RecordingQueue::default();
		let use_case = CreatePaymentUseCase::new(queue);

		let result = use_case
			.execute(CreatePaymentCommand {
				correlation_id: "c1".to_string(),
				amount: dec!(0),
			})
			.await;

		assert!(matches!(result, Err(GatewayError::Validation)));
		assert!(use_case.intake_queue.pushed.lock().await.is_empty());
	}
}
