mod file;
mod in_memory;
mod store;

pub use file::FileSnapshotStore;
pub use in_memory::InMemorySnapshotStore;
pub use store::SnapshotStore;
