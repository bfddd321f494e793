use async_trait::async_trait;
use tokio::io::AsyncWrite;

use crate::{application::error::ApplicationError, domain::models::media::MediaEntry};

/// An accepted upload: a unique stored name has been reserved and its
/// destination opened for writing. Dropping the sink closes the destination.
pub struct PendingUpload {
    pub stored_name: String,
    pub sink: Box<dyn AsyncWrite + Send + Unpin>,
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Reserves a unique stored name derived from `original_name` (its
    /// extension is preserved) and opens the destination for writing.
    async fn create_entry(&self, original_name: &str) -> Result<PendingUpload, ApplicationError>;

    /// Scans the store and returns every regular file carrying a recognized
    /// media extension. No ordering guarantee.
    async fn list_entries(&self) -> Result<Vec<MediaEntry>, ApplicationError>;
}
