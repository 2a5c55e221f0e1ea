use anyhow::Result;
use log::{info, warn};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::history::{load_records, RatingHistory};
use crate::services::roster::RosterService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
    csv_path: Option<PathBuf>,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig, csv_path: Option<PathBuf>) -> Self {
        Self { port, config, csv_path }
    }

    pub async fn run(&self) -> Result<()> {
        let state = Arc::new(self.build_state()?);

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn build_state(&self) -> Result<AppState> {
        Ok(AppState {
            config: self.config.clone(),
            roster: RosterService::new(self.config.parser.clone())?,
            history: self.load_history()?,
        })
    }

    fn load_history(&self) -> Result<Option<RatingHistory>> {
        let path = self
            .csv_path
            .clone()
            .unwrap_or_else(|| self.config.history.csv_path.clone());

        if !path.exists() {
            warn!("Rating history {} not found, history endpoints disabled", path.display());
            return Ok(None);
        }

        load_records(&path).map(Some)
    }
}
