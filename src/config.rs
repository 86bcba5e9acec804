use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/todos";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub seed_url: String,
    pub seed_timeout_secs: u64,
    pub frontend_dir: String,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let seed_timeout_secs = match std::env::var("SEED_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid SEED_TIMEOUT_SECS '{}': {}", raw, e))?,
            Err(_) => 10,
        };

        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(21547),
            seed_url: std::env::var("SEED_URL").unwrap_or_else(|_| DEFAULT_SEED_URL.into()),
            seed_timeout_secs,
            frontend_dir: std::env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "../frontend/dist".into()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:21548,http://127.0.0.1:21548".into()),
        })
    }

    pub fn seed_timeout(&self) -> Duration {
        Duration::from_secs(self.seed_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 21547,
            seed_url: DEFAULT_SEED_URL.into(),
            seed_timeout_secs: 10,
            frontend_dir: "../frontend/dist".into(),
            cors_origin: "http://localhost:21548,http://127.0.0.1:21548".into(),
        }
    }
}
