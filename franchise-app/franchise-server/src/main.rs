use axum::http::{header, Method, StatusCode};
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::{error, info};

use franchise_api::{build_router, AppState};
use franchise_core::usecases::{DbHealthUseCase, UseCases};
use franchise_infrastructure::build_store;
use franchise_shared::config::AppConfig;
use franchise_shared::constants::REQUEST_TIMEOUT_SECS;
use franchise_shared::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes file logs on exit
    let _log_guard = init_telemetry(&config.log)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Storage
    info!("Initializing {} store...", config.database.provider);
    let store = match build_store(&config.database).await {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to initialize store: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState {
        use_cases: UseCases::new(store.gateway),
        db_health: DbHealthUseCase::new(store.health),
    };

    // Build router
    let app = build_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
