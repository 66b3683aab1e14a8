//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Directory holding uploaded client photos, relative to the working directory.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Origins allowed to call the API from a browser.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:4200".to_string(),
        "http://localhost:8080".to_string(),
    ]
}
