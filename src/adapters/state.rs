use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::services::MediaStore;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub media_store: Arc<dyn MediaStore>,
}
