//! Assessment service entry point.
//!
//! Startup order: configuration, logging, storage adapters, router, server.

use std::sync::Arc;

use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

use assessment_service::adapters::http::{app_router, AssessmentHandlers};
use assessment_service::adapters::memory::{InMemoryAssessmentStore, InMemoryQuestionStore};
use assessment_service::adapters::postgres::{
    PostgresAssessmentReader, PostgresAssessmentRepository, PostgresQuestionReader,
};
use assessment_service::config::{AppConfig, DatabaseConfig, StorageBackend};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let handlers = match config.storage {
        StorageBackend::Postgres => {
            let pool = connect(&config.database).await?;
            AssessmentHandlers::new(
                Arc::new(PostgresAssessmentRepository::new(pool.clone())),
                Arc::new(PostgresAssessmentReader::new(pool.clone())),
                Arc::new(PostgresQuestionReader::new(pool)),
            )
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data will not survive a restart");
            let store = Arc::new(InMemoryAssessmentStore::new());
            AssessmentHandlers::new(
                store.clone(),
                store,
                Arc::new(InMemoryQuestionStore::new()),
            )
        }
    };

    let app = app_router(handlers, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, environment = ?config.server.environment, "Assessment service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` takes precedence over `server.log_level`.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn connect(database: &DatabaseConfig) -> Result<PgPool, BoxError> {
    let pool = database.pool_options().connect(&database.url).await?;

    tracing::info!(
        max_connections = database.max_connections,
        "Connected to PostgreSQL"
    );

    if database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
