//! Point-in-time log retrieval.

use futures_util::TryStreamExt;
use tracing::debug;

use super::engine_error;
use crate::engine::ContainerEngine;
use crate::error::Result as DockhandResult;
use crate::format::strip_control_bytes;

/// Fetch the last `tail` lines of a container's stdout and stderr.
///
/// Frames are concatenated in arrival order and control bytes `0x00` to
/// `0x08` are removed.
///
/// # Errors
///
/// Returns `ContainerError::NotFound` for an unknown container.
pub async fn container_logs<E: ContainerEngine + ?Sized>(
    engine: &E,
    container_id: &str,
    tail: u32,
) -> DockhandResult<String> {
    debug!(container_id, tail, "fetching container logs");
    let collected = engine
        .container_logs(container_id, tail)
        .try_fold(Vec::new(), |mut buffer, frame| async move {
            buffer.extend_from_slice(&frame.into_bytes());
            Ok(buffer)
        })
        .await
        .map_err(engine_error("read logs of", container_id))?;
    Ok(strip_control_bytes(&collected))
}
