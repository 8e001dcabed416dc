pub mod in_memory_processor_registry;
