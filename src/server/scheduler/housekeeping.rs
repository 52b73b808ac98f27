use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::housekeeping::HousekeepingService};

/// Runs at the start of every hour.
const HOUSEKEEPING_SCHEDULE: &str = "0 0 * * * *";

/// Starts the housekeeping scheduler.
///
/// Every hour expired OTPs and old failed attempts are deleted and lapsed password reset
/// tokens are cleared. Errors from a single pass are logged and the next pass runs as usual.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(HOUSEKEEPING_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match HousekeepingService::new(&db).cleanup().await {
                Ok(report) => tracing::info!(
                    otps = report.otps,
                    failed_attempts = report.failed_attempts,
                    reset_tokens = report.reset_tokens,
                    "Housekeeping completed"
                ),
                Err(e) => tracing::error!("Error running housekeeping: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Housekeeping scheduler started");

    Ok(scheduler)
}
