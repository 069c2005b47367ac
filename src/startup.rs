//! Process wiring: external clients, database, background jobs.

use crate::config::Config;
use crate::error::Error;
use crate::esi;
use crate::scheduler::{JobContext, Scheduler};

/// Build and configure the game data client.
pub fn build_esi_client(config: &Config) -> Result<esi::Client, Error> {
    let esi_client = esi::Client::builder()
        .base_url(&config.esi_base_url)
        .user_agent(&config.user_agent)
        .build()?;

    Ok(esi_client)
}

/// Connect to the database and run migrations.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Register and start the recurring maintenance jobs.
pub async fn start_scheduler(
    config: &Config,
    db: sea_orm::DatabaseConnection,
    esi_client: esi::Client,
) -> Result<(), Error> {
    let scheduler = Scheduler::new(JobContext {
        db,
        esi_client,
        resolve_timeout: config.resolve_timeout,
        retention_days: config.retention_days,
    })
    .await?;

    scheduler.start().await?;

    Ok(())
}
