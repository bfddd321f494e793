use serde::Serialize;

use crate::domain::models::media::{MediaEntry, MediaKind};

/// Manifest returned by the upload endpoint, one entry per stored file.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub files: Vec<SavedFile>,
}

#[derive(Debug, Serialize)]
pub struct SavedFile {
    pub filename: String,
    pub stored_name: String,
    pub url: String,
    pub content_type: String,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub items: Vec<MomentoItem>,
}

#[derive(Debug, Serialize)]
pub struct MomentoItem {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl From<MediaEntry> for MomentoItem {
    fn from(entry: MediaEntry) -> Self {
        Self {
            url: format!("/uploads/{}", entry.name),
            name: entry.name,
            kind: entry.kind,
        }
    }
}
