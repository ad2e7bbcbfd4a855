use std::env;
use std::path::PathBuf;

/// Server configuration, loaded from the environment (`.env` honored).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Root the external media collaborator serves photo binaries from;
    /// photo rows store paths relative to it.
    pub media_root: PathBuf,
    /// Debug switch: whether locally stored media is exposed by the
    /// serving layer at all.
    pub serve_media: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse().ok())
            .unwrap_or(5);
        let media_root = env::var("MEDIA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./media"));
        let serve_media = env::var("SERVE_MEDIA").unwrap_or_default() == "true";

        Self {
            database_url,
            host,
            port,
            max_connections,
            media_root,
            serve_media,
        }
    }
}
