mod disk_storage;
mod error;

pub use disk_storage::DiskMediaStore;
pub use error::StorageError;
