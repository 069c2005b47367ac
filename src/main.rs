use tracing_subscriber::EnvFilter;

use killfeed::config::Config;
use killfeed::startup;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let esi_client = match startup::build_esi_client(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to build ESI client: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::start_scheduler(&config, db.clone(), esi_client.clone()).await {
        eprintln!("Failed to start scheduler: {}", e);
        std::process::exit(1);
    }

    tracing::info!("killfeed engine running");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("shutting down");
}
