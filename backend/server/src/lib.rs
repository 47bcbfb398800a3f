//! Backend of VlogSphere, a small video-sharing catalog.
//!
//!
//!
//! # Routes
//!
//! | Method | Path | Body | Response |
//! |---|---|---|---|
//! | GET | `/` | | health text |
//! | GET | `/api/vlogs` | | all vlogs, newest first |
//! | POST | `/api/vlogs` | `NewVlog` | `201` + stored vlog |
//! | POST | `/api/vlogs/{id}/like` | `{"active": bool}` | updated vlog |
//! | POST | `/api/vlogs/{id}/dislike` | `{"active": bool}` | updated vlog |
//!
//! Errors come back as `{"message": "..."}`: `400` for malformed bodies or missing fields,
//! `404` for an unknown vlog, `500` for anything the store throws.
//!
//!
//!
//! # Counters
//!
//! The client owns each user's like/dislike state and only tells us whether a reaction was
//! added (`active: true`, +1) or removed (`active: false`, -1). We apply that as one atomic
//! increment and trust it completely. There is no per-user record server side, so duplicate
//! or lost notifications drift the counters and nothing here reconciles them.
//!
//!
//!
//! # Setup
//!
//! Environment (a `.env` file is read too):
//! - `PORT`: listen port, default `5000`
//! - `REDIS_URL`: default `redis://127.0.0.1:6379`
//! - `MOCK_DATA`: path to a JSON array of vlogs, serves those from memory instead of Redis
//! - `RUST_LOG`: log filter, e.g. `info`
//!
//! Run against a local Redis.
//! ```sh
//! RUST_LOG=info cargo run -p backend
//! ```
//!
//! Run against mock data.
//! ```sh
//! cargo run -p tester
//! MOCK_DATA=mock_data.json RUST_LOG=info cargo run -p backend
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
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
pub mod database;
pub mod error;
pub mod mock;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

use error::AppError;
use routes::{create_handler, dislike_handler, health_handler, like_handler, list_handler};
use state::State;

pub async fn start_server() -> Result<(), AppError> {
    let _ = dotenvy::dotenv();

    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await?;

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");

    Ok(())
}

pub fn router(state: std::sync::Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let vlogs = Router::new()
        .route("/", get(list_handler).post(create_handler))
        .route("/{id}/like", post(like_handler))
        .route("/{id}/dislike", post(dislike_handler));

    Router::new()
        .route("/", get(health_handler))
        .nest("/api/vlogs", vlogs)
        .layer(cors)
        .with_state(state)
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
