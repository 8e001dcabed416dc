pub mod redis_ledger;
