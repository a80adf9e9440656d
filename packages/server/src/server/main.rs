// Main entry point for the clan API server

use anyhow::{Context, Result};
use clan_core::{kernel::db, server::build_app, Config};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "server")]
#[command(about = "Clan membership and shared-object API")]
struct Cli {
    /// Instance file written by clan-provision (defaults to environment / .env)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clan_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    tracing::info!("Starting clan API");

    let config = match &cli.config {
        Some(path) => Config::from_file(path),
        None => Config::from_env(),
    }
    .context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    tracing::info!("Connecting to database...");
    let pool = db::connect(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database connected");

    tracing::info!("Running database migrations...");
    db::migrate(&pool).await?;
    tracing::info!("Migrations complete");

    let jwt_service = Arc::new(clan_core::domains::auth::JwtService::new(
        &config.jwt_secret,
        config.jwt_issuer.clone(),
    ));
    let app = build_app(pool, jwt_service);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
