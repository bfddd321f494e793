use std::path::PathBuf;

/// Runtime configuration, resolved once at startup and passed down to the
/// pieces that need it.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub uploads_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Origins allowed by CORS. `None` falls back to a permissive policy,
    /// intended for development only.
    pub allowed_origins: Option<Vec<String>>,
}

impl ServiceConfig {
    /// Reads configuration from the environment. `MOMENTOS_BASE_DIR` defaults
    /// to the current directory; `uploads/` and `static/` live directly under
    /// it and are created at startup if absent.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        let base_dir = std::env::var("MOMENTOS_BASE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        Self {
            port,
            uploads_dir: base_dir.join("uploads"),
            static_dir: base_dir.join("static"),
            allowed_origins,
        }
    }
}
