//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use roster_common::{AppConfig, AppError};
use roster_core::traits::{DepartureRepository, MemberRepository, ViolationRepository};
use roster_db::{
    create_pool, run_migrations, PgDepartureRepository, PgMemberRepository, PgViolationRepository,
};
use roster_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware_with_config, MiddlewareConfig};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let middleware = MiddlewareConfig {
        rate_limit: &config.rate_limit,
        cors: &config.cors,
        is_production: config.app.env.is_production(),
        request_timeout: Duration::from_secs(config.api.request_timeout_secs),
    };

    let router = apply_middleware_with_config(create_router(), &middleware)?;
    // Health checks bypass rate limiting
    let router = router.merge(health_routes());
    Ok(router.with_state(state))
}

/// Connect to PostgreSQL, apply migrations if enabled, and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = roster_db::DatabaseConfig::new(config.database.url.clone())
        .with_connections(config.database.min_connections, config.database.max_connections);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Database migrations applied");
    }

    let member_repo: Arc<dyn MemberRepository> = Arc::new(PgMemberRepository::new(pool.clone()));
    let violation_repo: Arc<dyn ViolationRepository> =
        Arc::new(PgViolationRepository::new(pool.clone()));
    let departure_repo: Arc<dyn DepartureRepository> = Arc::new(PgDepartureRepository::new(pool));

    let service_context = ServiceContextBuilder::new()
        .member_repo(member_repo)
        .violation_repo(violation_repo)
        .departure_repo(departure_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Create AppState over a single store implementing every repository
pub fn create_app_state_with_store<S>(store: S, config: AppConfig) -> Result<AppState, AppError>
where
    S: MemberRepository + ViolationRepository + DepartureRepository + Clone + 'static,
{
    let service_context = ServiceContextBuilder::new()
        .store(store)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(anyhow::anyhow!("Server error: {e}")))
}

/// Bind and run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address {}: {e}", config.api.address())))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
