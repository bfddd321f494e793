use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::File;
use uuid::Uuid;

use crate::{
    application::{
        error::ApplicationError,
        services::{MediaStore, PendingUpload},
    },
    domain::models::media::{kind_for_extension, MediaEntry},
    services::error::StorageError,
};

/// Local-disk media store. Every accepted upload lands directly in `root`
/// under a freshly generated unique name; the listing is a plain directory
/// scan, recomputed on every call.
pub struct DiskMediaStore {
    root: PathBuf,
}

impl DiskMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<uuid4 hex><original extension>`. The random token space makes a
    /// collision with an existing file negligible; no existence check is
    /// performed.
    fn unique_name(original_name: &str) -> String {
        format!("{}{}", Uuid::new_v4().simple(), extension_of(original_name))
    }
}

/// The final `.xyz` suffix of a filename, dot included. Empty for names
/// without one (a leading dot alone is not an extension).
fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx..],
        _ => "",
    }
}

#[async_trait]
impl MediaStore for DiskMediaStore {
    async fn create_entry(&self, original_name: &str) -> Result<PendingUpload, ApplicationError> {
        let stored_name = Self::unique_name(original_name);
        let dest_path = self.root.join(&stored_name);

        let file = File::create(&dest_path).await.map_err(StorageError::from)?;

        Ok(PendingUpload {
            stored_name,
            sink: Box::new(file),
        })
    }

    async fn list_entries(&self) -> Result<Vec<MediaEntry>, ApplicationError> {
        let mut entries = Vec::new();
        let mut dir = tokio::fs::read_dir(&self.root)
            .await
            .map_err(StorageError::from)?;

        while let Some(entry) = dir.next_entry().await.map_err(StorageError::from)? {
            let file_type = entry.file_type().await.map_err(StorageError::from)?;
            if !file_type.is_file() {
                continue;
            }

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                // Non-UTF-8 names cannot be represented in the JSON listing.
                Err(_) => continue,
            };

            let extension = extension_of(&name).trim_start_matches('.');
            let Some(kind) = kind_for_extension(extension) else {
                continue;
            };

            entries.push(MediaEntry { name, kind });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::domain::models::media::MediaKind;

    #[test]
    fn unique_name_preserves_extension() {
        let name = DiskMediaStore::unique_name("photo.jpg");
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.len(), 32 + ".jpg".len());
    }

    #[test]
    fn unique_names_never_repeat_for_same_original() {
        let a = DiskMediaStore::unique_name("photo.jpg");
        let b = DiskMediaStore::unique_name("photo.jpg");
        assert_ne!(a, b);
    }

    #[test]
    fn extension_edge_cases() {
        assert_eq!(extension_of("photo.jpg"), ".jpg");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("noext"), "");
        assert_eq!(extension_of(".hidden"), "");
    }

    #[tokio::test]
    async fn listing_skips_directories_and_unknown_extensions() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("clip.MP4"), b"v").unwrap();
        std::fs::write(dir.path().join("pic.png"), b"i").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"t").unwrap();
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let store = DiskMediaStore::new(dir.path().to_path_buf());
        let mut entries = store.list_entries().await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "clip.MP4");
        assert_eq!(entries[0].kind, MediaKind::Video);
        assert_eq!(entries[1].name, "pic.png");
        assert_eq!(entries[1].kind, MediaKind::Image);
    }

    #[tokio::test]
    async fn listing_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = DiskMediaStore::new(dir.path().join("gone"));
        assert!(store.list_entries().await.is_err());
    }
}
