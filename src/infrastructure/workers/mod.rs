pub mod dispatcher_worker;
pub mod health_monitor_worker;
