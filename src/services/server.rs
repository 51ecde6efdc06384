use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::AppConfig;
use crate::upstream::SnapshotProvider;

pub struct ServerService {
    port: u16,
    upstream: Option<String>,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, upstream: Option<String>, config: AppConfig) -> Self {
        Self {
            port,
            upstream,
            config,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let mut config = self.config.clone();
        config.upstream.apply_override(self.upstream.clone());
        info!("Upstream league backend: {}", config.upstream.base_url);

        let provider = SnapshotProvider::new(&config)?;
        let state = Arc::new(AppState { provider });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
