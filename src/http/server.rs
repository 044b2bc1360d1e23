//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the note handlers
//! - Wire up middleware (tracing, timeout, body limit, CORS, request ID, metrics)
//! - Bind server to listener and stop on shutdown

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::NotesConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, request_id_of, set_request_id_layer};
use crate::lifecycle::wait_for_shutdown;
use crate::notes::NoteStore;
use crate::observability::metrics;

/// Base path of the notes API.
pub const NOTES_PATH: &str = "/api/v1/notes";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NoteStore>,
}

/// HTTP server for the notes API.
pub struct HttpServer {
    router: Router,
    config: NotesConfig,
    store: Arc<NoteStore>,
}

impl HttpServer {
    /// Create a server with an empty store.
    pub fn new(config: NotesConfig) -> Self {
        Self::with_store(config, Arc::new(NoteStore::new()))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: NotesConfig, store: Arc<NoteStore>) -> Self {
        let state = AppState {
            store: store.clone(),
        };
        let router = build_router(&config, state);
        Self {
            router,
            config,
            store,
        }
    }

    /// Run the server until Ctrl+C or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            cors = self.config.security.cors_enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!(notes = self.store.len(), "HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// The store backing this server.
    pub fn store(&self) -> Arc<NoteStore> {
        self.store.clone()
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &NotesConfig, state: AppState) -> Router {
    let item_path = format!("{NOTES_PATH}/{{id}}");

    let mut router = Router::new()
        .route(NOTES_PATH, get(handlers::list_notes).post(handlers::create_note))
        .route(&format!("{NOTES_PATH}/"), get(handlers::list_notes).post(handlers::create_note))
        .route(
            &item_path,
            get(handlers::get_note)
                .put(handlers::replace_note)
                .delete(handlers::delete_note),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size));

    if config.security.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id_of(request),
            )
        }))
        .layer(set_request_id_layer())
        // Outermost: counts responses produced by every inner layer too.
        .layer(middleware::from_fn(metrics::track_requests))
}
