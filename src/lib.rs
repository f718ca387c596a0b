//! Backend for the sliding-window max-sum frontends.
//!
//! Two form UIs (one React, one Angular) collect a list of integers and a
//! window size, call `GET /api/sliding-window`, and render either `maxSum`
//! from the JSON response or the error `message`.
//!
//!
//!
//! # Endpoint
//!
//! `GET /api/sliding-window?numbers=...&windowSize=...`
//!
//! - 200 with `{ "maxSum": <int> }` on success
//! - 400 with `{ "message": ... }` for validation failures
//! - 500 with `{ "message": ... }` if a window sum overflows i64
//!
//!
//!
//! # Query encodings
//!
//! The two frontends disagree on how to encode the list:
//!
//! - React appends one `numbers` parameter per value
//! - Angular joins the values with commas into a single `numbers` parameter
//!
//! The adapter in [`query`] accepts both, and mixtures of the two. The
//! computation in [`window`] never sees the encoding.
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Run the server (port from `RUST_PORT`, default 1111).
//! ```sh
//! RUST_LOG=info cargo run
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod query;
pub mod routes;
pub mod window;

use config::Config;
use routes::sliding_window_handler;

/// Builds the application router. Split out of [`start_server`] so
/// integration tests can drive it in-process.
pub fn app() -> Router {
    // The frontends are served from another origin, so GET needs CORS.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/sliding-window", get(sliding_window_handler))
        .layer(cors)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
