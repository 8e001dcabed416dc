use async_trait::async_trait;
use redis::{AsyncCommands, Client, Script};
use rust_decimal::Decimal;

use crate::domain::payment::ProcessorKind;
use crate::domain::record::PaymentRecord;
use crate::domain::repository::Ledger;
use crate::domain::shard::ShardId;
use crate::error::GatewayResult;

fn index_key(shard: ShardId) -> String {
	format!("ledger:{shard}:index")
}

fn record_key(shard: ShardId, correlation_id: &str) -> String {
	format!("ledger:{shard}:record:{correlation_id}")
}

/// Redis-backed Ledger. Every key is namespaced by shard, so one shared
/// Redis instance plays the role of a shared filesystem — both replicas
/// open the same `redis_url` and can read either shard's keys
/// regardless of which one they write.
#[derive(Clone)]
pub struct RedisLedger {
	client: Client,
}

impl RedisLedger {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	/// `HSETNX` on a sentinel field gates whether the rest of the
	/// record and the sorted-set index entry get written, making
	/// `insert` idempotent on `correlation_id` conflict.
	fn insert_script() -> Script {
		Script::new(
			r#"
            local record_key = KEYS[1]
            local index_key = KEYS[2]
            local correlation_id = ARGV[1]
            local amount = ARGV[2]
            local requested_at_ms = ARGV[3]
            local processor_used = ARGV[4]

            local created = redis.call("HSETNX", record_key, "amount", amount)
            if created == 1 then
                redis.call("HSET", record_key,
                    "requested_at_ms", requested_at_ms,
                    "processor_used", processor_used)
                redis.call("ZADD", index_key, requested_at_ms, correlation_id)
            end
            return created
        "#,
		)
	}

	fn scan_script() -> Script {
		Script::new(
			r#"
            local index_key = KEYS[1]
            local shard = ARGV[1]
            local from_ms = ARGV[2]
            local to_ms = ARGV[3]

            local ids = redis.call("ZRANGEBYSCORE", index_key, from_ms, to_ms)
            local out = {}
            for _, id in ipairs(ids) do
                local record_key = "ledger:" .. shard .. ":record:" .. id
                local amount = redis.call("HGET", record_key, "amount")
                local processor_used = redis.call("HGET", record_key, "processor_used")
                if amount and processor_used then
                    table.insert(out, processor_used)
                    table.insert(out, amount)
                end
            end
            return out
        "#,
		)
	}
}

#[async_trait]
impl Ledger for RedisLedger {
	async fn insert(&self, shard: ShardId, record: PaymentRecord) -> GatewayResult<()> {
		let mut con = self.client.get_multiplexed_async_connection().await?;

		Self::insert_script()
			.key(record_key(shard, &record.correlation_id))
			.key(index_key(shard))
			.arg(&record.correlation_id)
			.arg(record.amount.to_string())
			.arg(record.requested_at_ms)
			.arg(record.processor_used.as_str())
			.invoke_async::<i32>(&mut con)
			.await?;

		Ok(())
	}

	async fn scan(
		&self,
		shard: ShardId,
		from_ms: i64,
		to_ms: i64,
	) -> GatewayResult<Vec<(ProcessorKind, Decimal)>> {
		let mut con = self.client.get_multiplexed_async_connection().await?;

		let flat: Vec<String> = Self::scan_script()
			.key(index_key(shard))
			.arg(shard.to_string())
			.arg(from_ms)
			.arg(to_ms)
			.invoke_async(&mut con)
			.await?;

		let mut rows = Vec::with_capacity(flat.len() / 2);
		for pair in flat.chunks_exact(2) {
			let processor = match pair[0].as_str() {
				"default" => ProcessorKind::Default,
				"fallback" => ProcessorKind::Fallback,
				_ => continue,
			};
			let Ok(amount) = pair[1].parse::<Decimal>() else { continue };
			rows.push((processor, amount));
		}
		Ok(rows)
	}

	async fn clear_all(&self) -> GatewayResult<()> {
		let mut con = self.client.get_multiplexed_async_connection().await?;
		for shard in ShardId::ALL {
			let ids: Vec<String> = con.zrange(index_key(shard), 0, -1).await?;
			let mut keys: Vec<String> =
				ids.iter().map(|id| record_key(shard, id)).collect();
			keys.push(index_key(shard));
			if !keys.is_empty() {
				let _: () = con.del(keys).await?;
			}
		}
		Ok(())
	}
}
