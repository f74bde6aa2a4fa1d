mod memory_store;
