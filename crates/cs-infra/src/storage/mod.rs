//! `StringListStorePort` implementations.

mod file_store;
mod memory_store;

pub use file_store::FileStringListStore;
pub use memory_store::InMemoryStringListStore;
