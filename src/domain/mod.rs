pub mod payment;
pub mod processor;
pub mod queue;
pub mod record;
pub mod registry;
pub mod repository;
pub mod shard;
