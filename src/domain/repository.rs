use async_trait::async_trait;

use crate::domain::payment::ProcessorKind;
use crate::domain::record::PaymentRecord;
use crate::domain::shard::ShardId;
use crate::error::GatewayResult;

/// Append-only store of `PaymentRecord`s, partitioned by shard.
///
/// `insert` is idempotent on `correlation_id`: a conflicting insert is
/// treated as success, since the ledger commit may be retried
/// independently of the upstream POST that produced the record.
#[async_trait]
pub trait Ledger: Send + Sync + 'static {
	async fn insert(
		&self,
		shard: ShardId,
		record: PaymentRecord,
	) -> GatewayResult<()>;

	/// All `(processor_used, amount)` pairs in `shard` whose
	/// `requested_at_ms` lies in `[from_ms, to_ms]` inclusive.
	async fn scan(
		&self,
		shard: ShardId,
		from_ms: i64,
		to_ms: i64,
	) -> GatewayResult<Vec<(ProcessorKind, rust_decimal::Decimal)>>;

	/// Clears every shard. Ambient test-tooling operation, not part of
	/// the scored contest surface.
	async fn clear_all(&self) -> GatewayResult<()>;
}
