mod in_memory_turn_store;

pub use in_memory_turn_store::InMemoryTurnStore;
