use std::sync::Arc;

use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::{repositories::project::ProjectRepository, use_cases::projects::ProjectHandler};

/// Periodically removes technology rows left behind by deleted projects.
pub async fn start_orphan_sweep_task<R>(handler: Arc<ProjectHandler<R>>, every: Duration)
where
    R: ProjectRepository,
{
    let mut interval = interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; nothing can be orphaned yet.
    interval.tick().await;

    loop {
        interval.tick().await;

        match handler.purge_orphans().await {
            Ok(0) => tracing::debug!("No orphaned technologies to purge"),
            Ok(count) => tracing::info!("Purged {} orphaned technologies", count),
            Err(e) => tracing::error!("Orphan purge failed: {}", e),
        }
    }
}
