mod fs_kv_store;
mod memory_kv_store;

pub use fs_kv_store::FsKeyValueStore;
pub use memory_kv_store::InMemoryKeyValueStore;
