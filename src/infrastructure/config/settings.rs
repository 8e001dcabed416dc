use config::Environment;
use serde::Deserialize;

use crate::domain::shard::{ShardId, ShardLayout};

const APP_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub redis_url: String,
	pub default_payment_processor_url: String,
	pub fallback_payment_processor_url: String,
	pub server_keepalive: u64,
	#[serde(default)]
	pub backend_id: String,
}

impl Config {
	/// Loads `APP_`-prefixed settings with sensible defaults, then reads
	/// the one deliberately-unprefixed variable, `BACKEND_ID` — the
	/// single setting the two replica containers must disagree on, and
	/// the one rinha-style compose files set bare.
	pub fn load() -> Result<Self, config::ConfigError> {
		let backend_id = std::env::var("BACKEND_ID").unwrap_or_else(|_| "1".to_string());
		Self::load_from(Environment::with_prefix(APP_PREFIX), backend_id)
	}

	fn load_from(
		environment: Environment,
		backend_id: String,
	) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("redis_url", "redis://127.0.0.1:6379")?
			.set_default("default_payment_processor_url", "http://localhost:8001")?
			.set_default("fallback_payment_processor_url", "http://localhost:8002")?
			.set_default("server_keepalive", 75)?
			.add_source(environment)
			.build()?;

		let mut config: Config = config_builder.try_deserialize()?;
		config.backend_id = backend_id;
		Ok(config)
	}

	pub fn shard_layout(&self) -> ShardLayout {
		let write_shard = ShardId::from_backend_id(&self.backend_id).unwrap_or_else(|| {
			log::warn!(
				"BACKEND_ID={:?} is not \"1\" or \"2\"; defaulting to shard 1",
				self.backend_id
			);
			ShardId::One
		});
		ShardLayout::new(write_shard)
	}
}
