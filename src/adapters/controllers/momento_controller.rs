use axum::{
    extract::{Multipart, State},
    Json,
};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::momento_dto::{ListResponse, MomentoItem, SavedFile, UploadResponse},
        state::AppState,
    },
    application::{error::ApplicationError, services::PendingUpload},
    domain::models::media::is_allowed_media_type,
};

/// Write buffer size for streaming uploaded bytes to disk. Bounds memory use
/// regardless of file size.
const WRITE_BUFFER_SIZE: usize = 1024 * 1024;

pub struct MomentoController;

impl MomentoController {
    /// POST /momentos/upload
    ///
    /// Multipart form with one or more file parts. The first part whose
    /// declared content type is outside the allow-list fails the whole
    /// request with 415; parts already written stay on disk.
    pub async fn upload_momentos(
        State(app_state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Json<UploadResponse>, ApplicationError> {
        let mut saved_files = Vec::new();

        while let Some(mut field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart data: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })? {
            // Only file parts participate; plain form fields are ignored.
            let Some(filename) = field.file_name().map(|s| s.to_string()) else {
                continue;
            };

            let content_type = field.content_type().unwrap_or("").to_string();
            if !is_allowed_media_type(&content_type) {
                return Err(ApplicationError::UnsupportedMediaType(content_type));
            }

            let PendingUpload { stored_name, sink } =
                app_state.media_store.create_entry(&filename).await?;

            // Dropping the writer on any error path closes the destination
            // handle; partially written bytes are left in place.
            let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, sink);

            while let Some(chunk) = field.chunk().await.map_err(|e| {
                warn!("Cannot read upload chunk: {}", e);
                ApplicationError::BadRequest("Invalid file data".to_string())
            })? {
                writer.write_all(&chunk).await.map_err(|e| {
                    ApplicationError::InternalError(format!("Failed to write upload: {}", e))
                })?;
            }

            writer.shutdown().await.map_err(|e| {
                ApplicationError::InternalError(format!("Failed to finish upload: {}", e))
            })?;

            info!("Stored '{}' as '{}'", filename, stored_name);

            let url = format!("/uploads/{}", stored_name);
            saved_files.push(SavedFile {
                filename,
                stored_name,
                url,
                content_type,
            });
        }

        Ok(Json(UploadResponse { files: saved_files }))
    }

    /// GET /momentos/list
    pub async fn list_momentos(
        State(app_state): State<AppState>,
    ) -> Result<Json<ListResponse>, ApplicationError> {
        let entries = app_state.media_store.list_entries().await?;
        let items = entries.into_iter().map(MomentoItem::from).collect();
        Ok(Json(ListResponse { items }))
    }
}
