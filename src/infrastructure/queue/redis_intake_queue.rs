use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use crate::domain::payment::PaymentRequest;
use crate::domain::queue::{Message, Queue};

const INTAKE_QUEUE_KEY: &str = "intake_queue";

/// Unbounded FIFO realized over a shared Redis list: `LPUSH` to
/// enqueue, `BRPOP` to dequeue. Both replicas' HTTP handlers push to
/// the same key and both replicas' Dispatcher loops compete to pop
/// from it — a fan-out arrangement deliberately allowed rather than a
/// strict single-consumer model.
#[derive(Clone)]
pub struct RedisIntakeQueue {
	client: Client,
}

impl RedisIntakeQueue {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Queue<PaymentRequest> for RedisIntakeQueue {
	async fn pop(
		&self,
	) -> Result<Option<Message<PaymentRequest>>, Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let popped: Option<(String, String)> = con
			.brpop(INTAKE_QUEUE_KEY, 1.0)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let Some((_key, serialized)) = popped else { return Ok(None) };

		let message: Message<PaymentRequest> = serde_json::from_str(&serialized)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(Some(message))
	}

	async fn push(
		&self,
		message: Message<PaymentRequest>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let serialized = serde_json::to_string(&message)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let _: () = con
			.lpush(INTAKE_QUEUE_KEY, serialized)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;
		Ok(())
	}
}
