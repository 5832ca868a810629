//! Process-local item store.

pub mod store;

pub use store::MemoryItemStore;
