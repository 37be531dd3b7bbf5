//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::error::AppError`.

use std::net::SocketAddr;

use auth::{MemoryAuthRepository, PgAuthRepository};
use posts::{MemoryPostRepository, PgPostRepository};
use quill_api::app::{build_router, cors_layer};
use quill_api::config::ServerConfig;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill_api=info,auth=info,posts=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    if config.password_pepper.is_none() {
        tracing::info!("PASSWORD_PEPPER not set, hashing without pepper");
    }

    let router = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_router(
                PgAuthRepository::new(pool.clone()),
                PgPostRepository::new(pool),
                config.auth_config(),
                config.posts_config(),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage; data is lost on exit");

            build_router(
                MemoryAuthRepository::new(),
                MemoryPostRepository::new(),
                config.auth_config(),
                config.posts_config(),
            )
        }
    };

    let app = router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins));

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
