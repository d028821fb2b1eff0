//! Container listing and lifecycle actions.

use tracing::debug;

use super::{ContainerSummary, engine_error};
use crate::engine::{ContainerEngine, ContainerRecord};
use crate::error::Result as DockhandResult;
use crate::format::{format_ports, format_timestamp, short_id};

/// List containers, including stopped ones when `include_stopped` is set.
///
/// # Errors
///
/// Returns `ContainerError::ConnectionFailed` when the engine is unreachable.
pub async fn list_containers<E: ContainerEngine + ?Sized>(
    engine: &E,
    include_stopped: bool,
) -> DockhandResult<Vec<ContainerSummary>> {
    debug!(include_stopped, "listing containers");
    let records = engine
        .list_containers(include_stopped)
        .await
        .map_err(engine_error("list", "containers"))?;
    Ok(records.iter().map(summarize).collect())
}

fn summarize(record: &ContainerRecord) -> ContainerSummary {
    let name = record
        .names
        .first()
        .map(|first| first.strip_prefix('/').unwrap_or(first))
        .unwrap_or_default();

    ContainerSummary {
        id: short_id(&record.id),
        name: String::from(name),
        image: record.image.clone(),
        state: record.state.clone(),
        status: record.status.clone(),
        ports: format_ports(&record.ports),
        created: format_timestamp(record.created),
    }
}

/// Start a container.
///
/// # Errors
///
/// Returns `ContainerError::NotFound` for an unknown id and
/// `ContainerError::Conflict` when the container is already running.
pub async fn start_container<E: ContainerEngine + ?Sized>(
    engine: &E,
    container_id: &str,
) -> DockhandResult<String> {
    debug!(container_id, "starting container");
    engine
        .start_container(container_id)
        .await
        .map_err(engine_error("start", container_id))?;
    Ok(format!("Container {container_id} started"))
}

/// Stop a container.
///
/// # Errors
///
/// Returns `ContainerError::NotFound` for an unknown id and
/// `ContainerError::Conflict` when the container is already stopped.
pub async fn stop_container<E: ContainerEngine + ?Sized>(
    engine: &E,
    container_id: &str,
) -> DockhandResult<String> {
    debug!(container_id, "stopping container");
    engine
        .stop_container(container_id)
        .await
        .map_err(engine_error("stop", container_id))?;
    Ok(format!("Container {container_id} stopped"))
}

/// Restart a container.
///
/// # Errors
///
/// Returns `ContainerError::NotFound` for an unknown id.
pub async fn restart_container<E: ContainerEngine + ?Sized>(
    engine: &E,
    container_id: &str,
) -> DockhandResult<String> {
    debug!(container_id, "restarting container");
    engine
        .restart_container(container_id)
        .await
        .map_err(engine_error("restart", container_id))?;
    Ok(format!("Container {container_id} restarted"))
}

/// Remove a container; `force` kills a running container first.
///
/// # Errors
///
/// Returns `ContainerError::Conflict` when removing a running container
/// without `force`, and `ContainerError::NotFound` for an unknown id.
pub async fn remove_container<E: ContainerEngine + ?Sized>(
    engine: &E,
    container_id: &str,
    force: bool,
) -> DockhandResult<String> {
    debug!(container_id, force, "removing container");
    engine
        .remove_container(container_id, force)
        .await
        .map_err(engine_error("remove", container_id))?;
    Ok(format!("Container {container_id} removed"))
}
