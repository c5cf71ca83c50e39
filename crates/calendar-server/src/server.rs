use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::sync::oneshot;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use calendar_core::{Clock, LocalClock};
use calendar_store::EventRepo;

use crate::config::ServerConfig;
use crate::handlers;

/// Shared application state passed to Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub events: EventRepo,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(events: EventRepo, clock: Arc<dyn Clock>) -> Self {
        Self { events, clock }
    }

    /// State whose "today" follows the server's local time.
    pub fn local(events: EventRepo) -> Self {
        Self::new(events, Arc::new(LocalClock))
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route(
            "/event",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route("/event/today", get(handlers::today_events))
        .route(
            "/event/{id}",
            get(handlers::get_event).delete(handlers::delete_event),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and start serving. Returns a handle to shut it down.
pub async fn start(config: ServerConfig, state: AppState) -> Result<ServerHandle, std::io::Error> {
    let router = build_router(state, &config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, "calendar server started");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        let result = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
        if let Err(e) = result {
            tracing::error!(error = %e, "server exited with error");
        }
    });

    Ok(ServerHandle {
        addr,
        shutdown_tx,
        server,
    })
}

/// Handle returned by `start()`.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    server: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        if let Err(e) = self.server.await {
            tracing::warn!(error = %e, "server task did not finish cleanly");
        }
        tracing::info!("calendar server stopped");
    }
}
