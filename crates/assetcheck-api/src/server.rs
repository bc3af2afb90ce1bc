//! Router assembly and server lifecycle.

use std::net::SocketAddr;

use assetcheck_report::ReportBuilder;
use assetcheck_storage::Store;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::routes;
use crate::state::AppState;
use crate::{Error, Result};

/// Builds the application router.
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(routes::assets::index))
        .route(
            "/detail/{asset_no}",
            get(routes::assets::detail).post(routes::assets::submit),
        )
        .route("/export", get(routes::export::export))
        .route("/dashboard", get(routes::dashboard::dashboard))
        .route("/api/owner", get(routes::dashboard::owner))
        .route("/photos/{file}", get(routes::photos::photo))
        .route("/healthz", get(routes::healthz))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// assetcheck HTTP server
pub struct Server {
    listener: TcpListener,
    router: Router,
    store: Store,
}

impl Server {
    /// Opens and initializes the store, prepares the output directories and
    /// binds the listen address.
    pub async fn bind(config: &AppConfig) -> Result<Self> {
        let store = Store::open(&config.store_config()).await?;
        let init = store.init(&config.roster_source()).await?;
        info!(
            database = %config.database.display(),
            seeded = init.seeded,
            "Store ready"
        );

        tokio::fs::create_dir_all(&config.results_dir)
            .await
            .map_err(|e| Error::io_with_path(e, &config.results_dir))?;

        let state = AppState::new(store.clone(), ReportBuilder::new(&config.results_dir));
        let router = build_router(state, config.max_upload_bytes);

        let listener = TcpListener::bind(config.bind)
            .await
            .map_err(|e| Error::config(format!("cannot bind {}: {e}", config.bind)))?;

        Ok(Self {
            listener,
            router,
            store,
        })
    }

    /// Address actually bound (useful with port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|e| Error::config(format!("listener has no address: {e}")))
    }

    /// Serves until Ctrl-C, then closes the database pool.
    pub async fn run(self) -> Result<()> {
        info!(addr = %self.local_addr()?, "Listening");
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| Error::config(format!("server error: {e}")))?;
        self.store.close().await;
        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
