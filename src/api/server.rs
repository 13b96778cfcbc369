use crate::api::handlers::SharedService;
use crate::api::routes::{build_router, cors_layer, API_BASE_PATH};
use crate::config::toml_config::ServerConfig;
use crate::domain::ports::ProfessorStore;
use crate::utils::error::Result;
use std::future::Future;
use tokio::net::TcpListener;

pub struct ApiServer<S: ProfessorStore> {
    service: SharedService<S>,
    config: ServerConfig,
}

impl<S: ProfessorStore + 'static> ApiServer<S> {
    pub fn new(service: SharedService<S>, config: ServerConfig) -> Self {
        Self { service, config }
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.bind_address();
        let listener = TcpListener::bind(&addr).await?;
        Ok(listener)
    }

    /// Serves until `shutdown` resolves, then drains in-flight requests.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.service, cors_layer(&self.config.cors.allowed_origin)?);
        let addr = listener.local_addr()?;

        tracing::info!("✅ Server listening on {}", addr);
        tracing::info!("📊 API: http://{}{}", addr, API_BASE_PATH);
        tracing::info!("💚 Health: http://{}/health", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("🔌 HTTP server closed");
        Ok(())
    }
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("⚠️ SIGINT received, shutting down"),
        _ = terminate => tracing::warn!("⚠️ SIGTERM received, shutting down"),
    }
}
