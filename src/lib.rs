use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use redis::AsyncCommands;
use reqwest::Client;

pub mod adapters;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod use_cases;

use crate::adapters::web::payments_handler::payments;
use crate::adapters::web::payments_purge_handler::payments_purge;
use crate::adapters::web::payments_summary_handler::payments_summary;
use crate::domain::payment::ProcessorKind;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::http::processor_client::ProcessorClient;
use crate::infrastructure::persistence::redis_ledger::RedisLedger;
use crate::infrastructure::queue::redis_intake_queue::RedisIntakeQueue;
use crate::infrastructure::routing::in_memory_processor_registry::InMemoryProcessorRegistry;
use crate::infrastructure::workers::{dispatcher_worker, health_monitor_worker};
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::get_payment_summary::GetPaymentSummaryUseCase;
use crate::use_cases::health_check::HealthCheckUseCase;
use crate::use_cases::process_payment::ProcessPaymentUseCase;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;

/// Fails the process on a fatal startup condition: both shards are
/// reachable through the same Redis instance, so a single `PING`
/// stands in for a ledger create failure of both shards at once.
async fn verify_redis_reachable(client: &redis::Client) -> std::io::Result<()> {
	let mut con = client.get_multiplexed_async_connection().await.map_err(|e| {
		std::io::Error::other(format!("cannot reach Redis at startup: {e}"))
	})?;
	let _: String = con.ping().await.map_err(|e| {
		std::io::Error::other(format!("Redis PING failed at startup: {e}"))
	})?;
	Ok(())
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let redis_client =
		redis::Client::open(config.redis_url.clone()).expect("Invalid Redis URL");
	verify_redis_reachable(&redis_client).await?;

	let shard_layout = config.shard_layout();
	let http_client = Client::new();

	let default_client = ProcessorClient::new(
		http_client.clone(),
		config.default_payment_processor_url.clone(),
	);
	let fallback_client = ProcessorClient::new(
		http_client.clone(),
		config.fallback_payment_processor_url.clone(),
	);

	let registry = InMemoryProcessorRegistry::new();

	info!("starting processor health monitors...");
	let health_check_use_case = HealthCheckUseCase::new(registry.clone());
	tokio::spawn(health_monitor_worker::run(
		ProcessorKind::Default,
		default_client.clone(),
		health_check_use_case.clone(),
	));
	tokio::spawn(health_monitor_worker::run(
		ProcessorKind::Fallback,
		fallback_client.clone(),
		health_check_use_case.clone(),
	));

	info!("starting dispatcher...");
	let intake_queue = RedisIntakeQueue::new(redis_client.clone());
	let ledger = RedisLedger::new(redis_client.clone());
	let process_payment_use_case = ProcessPaymentUseCase::new(ledger.clone());

	tokio::spawn(dispatcher_worker::run(
		intake_queue.clone(),
		registry.clone(),
		process_payment_use_case,
		shard_layout.write_shard(),
		default_client,
		fallback_client,
	));

	info!("starting actix-web server on 0.0.0.0:9999...");

	let create_payment_use_case = CreatePaymentUseCase::new(intake_queue);
	let get_payment_summary_use_case =
		GetPaymentSummaryUseCase::new(ledger.clone(), shard_layout);
	let purge_payments_use_case = PurgePaymentsUseCase::new(ledger);

	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(create_payment_use_case.clone()))
			.app_data(web::Data::new(get_payment_summary_use_case.clone()))
			.app_data(web::Data::new(purge_payments_use_case.clone()))
			.service(payments)
			.service(payments_summary)
			.service(payments_purge)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", 9999))?
	.run()
	.await
}
