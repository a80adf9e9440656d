//! Provision a new clan-server instance
//!
//! Applies the schema to an empty PostgreSQL database, then writes an
//! instance file (`clan_<name>.env`) that `server --config` can load.

use anyhow::{Context, Result};
use clan_core::{kernel::db, Config};
use clap::Parser;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "clan-provision")]
#[command(about = "Create a new clan-server instance")]
struct Cli {
    /// The name of the new instance
    name: String,

    /// Connection string to an empty PostgreSQL database
    dsn: String,

    /// Directory the instance file is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .try_init();

    let cli = Cli::parse();

    println!("Connecting to: {}", cli.dsn);
    let pool = match db::connect(&cli.dsn, 1).await {
        Ok(pool) => pool,
        Err(e) => {
            // No instance file for a database we could not reach
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    println!("Creating new DB schema...");
    db::migrate(&pool).await?;
    pool.close().await;

    let jwt_secret = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    let path = cli.out_dir.join(format!("clan_{}.env", cli.name));
    println!("Writing config file to: {}", path.display());
    std::fs::write(&path, Config::instance_file(&cli.name, &cli.dsn, &jwt_secret))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "You can now start the server with 'server --config {}'",
        path.display()
    );

    Ok(())
}
