pub mod processor_client;
