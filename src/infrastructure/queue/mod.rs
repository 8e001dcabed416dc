pub mod redis_intake_queue;
