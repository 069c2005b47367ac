//! Cron-based background jobs.
//!
//! Three recurring passes keep the derived state healthy: backfill re-resolves
//! placeholder rows and re-denormalizes them, retention prunes facts and
//! derived rows past the configured age, and price refresh keeps market
//! history current for recently seen types. Each pass is idempotent and
//! re-entrant; running one twice produces the same end state.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::Error;
use crate::esi;

pub mod backfill;
pub mod config;
pub mod price_refresh;
pub mod retention;

/// Everything a background pass needs, cloned into each job closure.
#[derive(Clone)]
pub struct JobContext {
    pub db: DatabaseConnection,
    pub esi_client: esi::Client,
    pub resolve_timeout: Duration,
    pub retention_days: i64,
}

/// Job scheduler for the recurring maintenance passes.
pub struct Scheduler {
    context: JobContext,
    sched: JobScheduler,
}

impl Scheduler {
    pub async fn new(context: JobContext) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { context, sched })
    }

    /// Registers all recurring jobs and starts the scheduler.
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            config::backfill::CRON_EXPRESSION,
            "backfill",
            backfill::run,
        )
        .await?;

        self.schedule_job(
            config::retention::CRON_EXPRESSION,
            "retention",
            retention::run,
        )
        .await?;

        self.schedule_job(
            config::price_refresh::CRON_EXPRESSION,
            "price refresh",
            price_refresh::run,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring pass with the given cron expression.
    ///
    /// The pass receives a clone of the job context and returns the number of
    /// rows it touched; outcomes are logged, never propagated, so one failing
    /// run does not stop the schedule.
    async fn schedule_job<F, Fut>(&mut self, cron: &str, name: &str, function: F) -> Result<(), Error>
    where
        F: Fn(JobContext) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let context = self.context.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let context = context.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(context).await {
                        Ok(count) => tracing::debug!("{} pass touched {} row(s)", name, count),
                        Err(e) => tracing::error!("Error running {} pass: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
