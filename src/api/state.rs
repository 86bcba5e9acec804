use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::Config;
use crate::services::{shared_board, SeedClient, SharedBoard};

#[derive(Clone, Debug)]
pub struct AppState {
    pub board: SharedBoard,
    pub events_tx: broadcast::Sender<String>,
    pub http_client: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        events_tx: broadcast::Sender<String>,
        http_client: reqwest::Client,
        config: Arc<Config>,
    ) -> Self {
        Self {
            board: shared_board(),
            events_tx,
            http_client,
            config,
        }
    }

    pub fn seed_client(&self) -> SeedClient {
        SeedClient::from_config(self.http_client.clone(), &self.config)
    }
}
