use axum::http::{header, Method};
use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use gps_tracker::ingestion::handlers::{handle_ingest, handle_traccar};
use gps_tracker::query::handlers::{
    handle_health, handle_latest, handle_latest_all, handle_map_page, handle_not_found,
};
use gps_tracker::storage::kv::{MemoryKv, SharedStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:8080", args[0]);
                eprintln!("BIND env var is used when --bind is absent.");
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr: SocketAddr = match bind_addr {
        Some(addr) => addr,
        None => std::env::var("BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()?,
    };

    // 1. The key-value store handle shared by every handler:
    let store: SharedStore = Arc::new(MemoryKv::new());

    // 2. Permissive CORS on all routes; OPTIONS preflights are answered
    //    with an empty body and these headers.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // 3. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_map_page))
        .route("/health", get(handle_health))
        .route("/traccar", get(handle_traccar))
        .route("/ingest", post(handle_ingest))
        .route("/latest_all", get(handle_latest_all))
        .route("/latest", get(handle_latest))
        .fallback(handle_not_found)
        .layer(Extension(store))
        .layer(cors);

    // 4. Start HTTP server:
    tracing::info!("GPS tracker listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
