//! Mizgerd API server.
//!
//! Exposes the HTTP surface over the auth, orchestrator, and registry
//! crates:
//!
//! - `POST /auth/send-otp` / `POST /auth/verify-otp`
//! - `POST /chat` / `POST /roundtable`
//! - `GET|POST /credits`
//! - `GET /health`

mod config;
mod error;
mod handlers;
mod state;
mod wire;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use auth::{MemoryOtpStore, MemoryUserStore, SqliteUserStore, UserStore};
use config::ApiConfig;
use openrouter_agent::OpenRouterClient;
use orchestrator::Orchestrator;
use registry::Registry;
use state::AppState;

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/auth/send-otp", post(handlers::send_otp))
        .route("/auth/verify-otp", post(handlers::verify_otp))
        .route("/chat", post(handlers::chat))
        .route("/roundtable", post(handlers::roundtable))
        .route(
            "/credits",
            get(handlers::list_packages).post(handlers::purchase_credits),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ApiConfig::from_env();

    let user_store: Arc<dyn UserStore> = match config.database_url.as_deref() {
        Some(url) => {
            let store = SqliteUserStore::connect(url)
                .await
                .expect("Failed to connect to user database");
            store.migrate().await.expect("Failed to run migrations");
            Arc::new(store)
        }
        None => {
            info!("No MIZGERD_DATABASE_URL set, using in-memory user store");
            Arc::new(MemoryUserStore::new())
        }
    };

    let backend = OpenRouterClient::from_env().expect("Failed to create OpenRouter client");
    let registry = Registry::builtin();
    let orchestrator = Arc::new(Orchestrator::new(registry, Arc::new(backend)));

    let state = AppState {
        otp_store: Arc::new(MemoryOtpStore::new()),
        user_store,
        orchestrator,
        registry,
        expose_otp: config.expose_otp,
    };

    let addr: SocketAddr = config.addr.parse().expect("Invalid MIZGERD_ADDR");
    info!(%addr, "Mizgerd API listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app(state))
        .await
        .expect("Server error");
}
