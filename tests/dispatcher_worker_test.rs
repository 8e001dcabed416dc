mod support;

use std::time::Duration;

use payment_gateway::domain::payment::{PaymentRequest, ProcessorKind};
use payment_gateway::domain::queue::{Message, Queue};
use payment_gateway::domain::repository::Ledger;
use payment_gateway::domain::shard::ShardId;
use payment_gateway::infrastructure::http::processor_client::ProcessorClient;
use payment_gateway::infrastructure::persistence::redis_ledger::RedisLedger;
use payment_gateway::infrastructure::queue::redis_intake_queue::RedisIntakeQueue;
use payment_gateway::infrastructure::routing::in_memory_processor_registry::InMemoryProcessorRegistry;
use payment_gateway::infrastructure::workers::dispatcher_worker;
use payment_gateway::use_cases::process_payment::ProcessPaymentUseCase;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::support::fake_processor::{FakeProcessor, SendMode};
use crate::support::redis_container::get_test_redis_client;

async fn wait_for_commit(ledger: &RedisLedger, shard: ShardId) -> Vec<(ProcessorKind, rust_decimal::Decimal)> {
	for _ in 0..50 {
		let rows = ledger.scan(shard, 0, i64::MAX).await.unwrap();
		if !rows.is_empty() {
			return rows;
		}
		tokio::time::sleep(Duration::from_millis(50)).await;
	}
	panic!("payment was never committed to the ledger");
}

#[tokio::test]
async fn a_payment_accepted_by_the_default_processor_is_committed_as_default() {
	let redis = get_test_redis_client().await;
	let default_processor = FakeProcessor::spawn();
	let fallback_processor = FakeProcessor::spawn();

	let queue = RedisIntakeQueue::new(redis.client.clone());
	let ledger = RedisLedger::new(redis.client.clone());
	let registry = InMemoryProcessorRegistry::new();
	let process_use_case = ProcessPaymentUseCase::new(ledger.clone());

	let default_client =
		ProcessorClient::new(reqwest::Client::new(), default_processor.base_url.clone());
	let fallback_client =
		ProcessorClient::new(reqwest::Client::new(), fallback_processor.base_url.clone());

	tokio::spawn(dispatcher_worker::run(
		queue.clone(),
		registry.clone(),
		process_use_case,
		ShardId::One,
		default_client,
		fallback_client,
	));

	queue
		.push(Message::with(
			Uuid::new_v4(),
			PaymentRequest::new("c1".to_string(), dec!(50.00)),
		))
		.await
		.unwrap();

	let rows = wait_for_commit(&ledger, ShardId::One).await;
	assert_eq!(rows, vec![(ProcessorKind::Default, dec!(50.00))]);
	assert_eq!(default_processor.received_count(), 1);
	assert_eq!(fallback_processor.received_count(), 0);
}

#[tokio::test]
async fn falls_over_to_the_fallback_when_the_default_processor_fails() {
	let redis = get_test_redis_client().await;
	let default_processor = FakeProcessor::spawn();
	default_processor.set_mode(SendMode::Failure);
	let fallback_processor = FakeProcessor::spawn();

	let queue = RedisIntakeQueue::new(redis.client.clone());
	let ledger = RedisLedger::new(redis.client.clone());
	let registry = InMemoryProcessorRegistry::new();
	let process_use_case = ProcessPaymentUseCase::new(ledger.clone());

	let default_client =
		ProcessorClient::new(reqwest::Client::new(), default_processor.base_url.clone());
	let fallback_client =
		ProcessorClient::new(reqwest::Client::new(), fallback_processor.base_url.clone());

	tokio::spawn(dispatcher_worker::run(
		queue.clone(),
		registry.clone(),
		process_use_case,
		ShardId::Two,
		default_client,
		fallback_client,
	));

	queue
		.push(Message::with(
			Uuid::new_v4(),
			PaymentRequest::new("c2".to_string(), dec!(12.34)),
		))
		.await
		.unwrap();

	let rows = wait_for_commit(&ledger, ShardId::Two).await;
	assert_eq!(rows, vec![(ProcessorKind::Fallback, dec!(12.34))]);
	assert!(!registry.snapshot(ProcessorKind::Default).healthy);
}

#[tokio::test]
async fn a_terminal_reject_is_still_committed() {
	let redis = get_test_redis_client().await;
	let default_processor = FakeProcessor::spawn();
	default_processor.set_mode(SendMode::TerminalReject);
	let fallback_processor = FakeProcessor::spawn();

	let queue = RedisIntakeQueue::new(redis.client.clone());
	let ledger = RedisLedger::new(redis.client.clone());
	let registry = InMemoryProcessorRegistry::new();
	let process_use_case = ProcessPaymentUseCase::new(ledger.clone());

	let default_client =
		ProcessorClient::new(reqwest::Client::new(), default_processor.base_url.clone());
	let fallback_client =
		ProcessorClient::new(reqwest::Client::new(), fallback_processor.base_url.clone());

	tokio::spawn(dispatcher_worker::run(
		queue.clone(),
		registry.clone(),
		process_use_case,
		ShardId::One,
		default_client,
		fallback_client,
	));

	queue
		.push(Message::with(
			Uuid::new_v4(),
			PaymentRequest::new("c3".to_string(), dec!(7.00)),
		))
		.await
		.unwrap();

	let rows = wait_for_commit(&ledger, ShardId::One).await;
	assert_eq!(rows, vec![(ProcessorKind::Default, dec!(7.00))]);
	assert_eq!(fallback_processor.received_count(), 0);
}

#[tokio::test]
async fn requeues_the_payment_when_both_processors_fail() {
	let redis = get_test_redis_client().await;
	let default_processor = FakeProcessor::spawn();
	default_processor.set_mode(SendMode::Failure);
	let fallback_processor = FakeProcessor::spawn();
	fallback_processor.set_mode(SendMode::Failure);

	let queue = RedisIntakeQueue::new(redis.client.clone());
	let ledger = RedisLedger::new(redis.client.clone());
	let registry = InMemoryProcessorRegistry::new();
	let process_use_case = ProcessPaymentUseCase::new(ledger.clone());

	let default_client =
		ProcessorClient::new(reqwest::Client::new(), default_processor.base_url.clone());
	let fallback_client =
		ProcessorClient::new(reqwest::Client::new(), fallback_processor.base_url.clone());

	tokio::spawn(dispatcher_worker::run(
		queue.clone(),
		registry.clone(),
		process_use_case,
		ShardId::One,
		default_client,
		fallback_client,
	));

	queue
		.push(Message::with(
			Uuid::new_v4(),
			PaymentRequest::new("c4".to_string(), dec!(3.00)),
		))
		.await
		.unwrap();

	// Both processors fail on every attempt, so the payment keeps
	// getting requeued and dispatched; it should never reach the
	// ledger, and the queue should still hold work for the dispatcher.
	tokio::time::sleep(Duration::from_secs(2)).await;

	assert!(ledger.scan(ShardId::One, 0, i64::MAX).await.unwrap().is_empty());
	assert!(default_processor.received_count() >= 1);
	assert!(fallback_processor.received_count() >= 1);
}
