#![allow(dead_code)]

pub mod fake_processor;
pub mod redis_container;
