mod adapters;
mod application;
mod domain;
mod services;

use std::sync::Arc;

use adapters::{controllers::momento_controller::MomentoController, state::AppState};
use application::services::MediaStore;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use domain::config::ServiceConfig;
use services::DiskMediaStore;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::from_env();

    tracing::info!(
        "Starting momentos-service, storage at {}",
        config.uploads_dir.display()
    );

    // Both directories are created up front so the static mounts never point
    // at a missing path.
    tokio::fs::create_dir_all(&config.uploads_dir)
        .await
        .expect("ERROR: Failed to create uploads directory");
    tokio::fs::create_dir_all(&config.static_dir)
        .await
        .expect("ERROR: Failed to create static directory");

    // Configure CORS
    let cors = if let Some(allowed_origins) = &config.allowed_origins {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .map(|s| s.parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins if not specified (only for development)
        CorsLayer::permissive()
    };

    let media_store =
        Arc::new(DiskMediaStore::new(config.uploads_dir.clone())) as Arc<dyn MediaStore>;
    let app_state = AppState { media_store };

    let router = Router::new()
        .route(
            "/momentos/upload",
            // Media files routinely exceed axum's default body limit.
            post(MomentoController::upload_momentos).layer(DefaultBodyLimit::disable()),
        )
        .route("/momentos/list", get(MomentoController::list_momentos))
        .nest_service("/uploads", ServeDir::new(&config.uploads_dir))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(app_state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
