//! MachinePark Server - Equipment Tracking System
//!
//! A Rust REST API server for tracking machines, maintenance, and usage.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use machinepark_server::{
    api,
    config::AppConfig,
    repository::{seed, Repository},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "machinepark_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MachinePark Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let options = SqliteConnectOptions::from_str(&config.database.url)
        .expect("Invalid database URL")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    if config.database.seed_demo_data {
        let seeded = seed::seed_demo_data_if_empty(&pool)
            .await
            .expect("Failed to seed demo data");
        if seeded {
            tracing::info!("Seeded demo data into empty database");
        }
    }

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Machines
        .route("/machines", get(api::machines::list_machines))
        .route("/machines", post(api::machines::create_machine))
        .route("/machines/:id", get(api::machines::get_machine))
        .route("/machines/:id", put(api::machines::update_machine))
        .route("/machines/:id", delete(api::machines::delete_machine))
        .route(
            "/machines/serial/:serial_number",
            get(api::machines::get_machine_by_serial),
        )
        // Maintenance ledger
        .route(
            "/maintenance",
            get(api::maintenance::list_maintenance_records),
        )
        .route(
            "/maintenance",
            post(api::maintenance::create_maintenance_record),
        )
        .route(
            "/maintenance/:id",
            get(api::maintenance::get_maintenance_record),
        )
        .route(
            "/maintenance/:id",
            put(api::maintenance::update_maintenance_record),
        )
        .route(
            "/maintenance/:id",
            delete(api::maintenance::delete_maintenance_record),
        )
        .route(
            "/maintenance/machine/:machine_id",
            get(api::maintenance::list_machine_maintenance_records),
        )
        // Usage ledger
        .route("/usage-logs", get(api::usage_logs::list_usage_logs))
        .route("/usage-logs", post(api::usage_logs::create_usage_log))
        .route("/usage-logs/:id", get(api::usage_logs::get_usage_log))
        .route("/usage-logs/:id", put(api::usage_logs::update_usage_log))
        .route(
            "/usage-logs/:id",
            delete(api::usage_logs::delete_usage_log),
        )
        .route(
            "/usage-logs/machine/:machine_id",
            get(api::usage_logs::list_machine_usage_logs),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
