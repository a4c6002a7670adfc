use axum::extract::State;
use axum::{http::Method, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod config;
mod errors;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use config::AppConfig;
use state::AppState;
use store::pledge_store::PledgeStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::from_env();

    create_directories(&config).await;

    let store = PledgeStore::new(&config.data_file);
    let pledges = match store.load() {
        Ok(pledges) => {
            tracing::info!("✅ Loaded {} pledges from {}", pledges.len(), config.data_file);
            pledges
        }
        Err(e) => {
            tracing::error!("❌ Failed to load pledge data: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(store, pledges);

    let app = build_router(app_state);
    start_server(app, &config).await;
}

async fn create_directories(config: &AppConfig) {
    if let Err(e) = tokio::fs::create_dir_all(&config.upload_dir).await {
        tracing::warn!("Failed to create {}: {}", config.upload_dir, e);
    }
}

fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/api/health", get(api_health_check))
        .nest("/api/pledges", routes::pledges::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn start_server(app: Router, config: &AppConfig) {
    let addr = format!("{}:{}", config.host, config.port);

    tracing::info!("🚀 Server starting on {}", addr);

    match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => {
            axum::serve(listener, app).await.unwrap();
        }
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    }
}

async fn root_handler() -> &'static str {
    "🎯 Skill Pledge Platform API"
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn api_health_check(State(state): State<AppState>) -> Json<Value> {
    let pledge_count = state.pledges.lock().await.len();

    Json(json!({
        "status": "healthy",
        "pledges": pledge_count,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
