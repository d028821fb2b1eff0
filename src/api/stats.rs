//! Resource usage snapshots.

use tracing::debug;

use super::engine_error;
use crate::engine::ContainerEngine;
use crate::error::{ContainerError, Result as DockhandResult};
use crate::stats::ResourceStats;

/// Take one non-streaming stats sample and derive [`ResourceStats`].
///
/// # Errors
///
/// Returns `ContainerError::NotFound` for an unknown container,
/// `ContainerError::Conflict` when the container is not running, and
/// `ContainerError::StatsUnavailable` when the engine sends no sample.
pub async fn container_stats<E: ContainerEngine + ?Sized>(
    engine: &E,
    container_id: &str,
) -> DockhandResult<ResourceStats> {
    debug!(container_id, "sampling container stats");
    let snapshot = engine
        .container_stats(container_id)
        .await
        .map_err(engine_error("read stats of", container_id))?
        .ok_or_else(|| ContainerError::StatsUnavailable {
            container_id: String::from(container_id),
        })?;
    Ok(ResourceStats::from_snapshot(&snapshot))
}
