//! Command execution inside a running container.
//!
//! The exec session is created with stdout and stderr attached, started in
//! attached mode, and its demultiplexed output frames are accumulated until
//! the engine closes the stream.

use bollard::exec::{CreateExecOptions, StartExecOptions, StartExecResults};
use futures_util::StreamExt;
use tracing::debug;

use super::engine_error;
use crate::engine::ContainerEngine;
use crate::error::{ContainerError, DockhandError, Result as DockhandResult};
use crate::format::strip_control_bytes;

const EXEC_ACTION: &str = "exec in";

/// Run `command` in `container_id` and return its combined output.
///
/// Control bytes `0x00` to `0x08` are removed from the result.
///
/// # Errors
///
/// Returns `ContainerError::NotFound` for an unknown container,
/// `ContainerError::Conflict` when the container is not running, and
/// `ContainerError::ExecFailed` when the session does not attach. Failures
/// while reading the output stream are classified like any other engine
/// error.
pub async fn exec_command<E: ContainerEngine + ?Sized>(
    engine: &E,
    container_id: &str,
    command: Vec<String>,
) -> DockhandResult<String> {
    debug!(container_id, ?command, "creating exec session");
    let created = engine
        .create_exec(container_id, build_create_exec_options(command))
        .await
        .map_err(engine_error(EXEC_ACTION, container_id))?;

    let started = engine
        .start_exec(&created.id, Some(build_start_exec_options()))
        .await
        .map_err(engine_error(EXEC_ACTION, container_id))?;

    let StartExecResults::Attached { mut output, .. } = started else {
        return Err(exec_failed(
            container_id,
            "engine started the exec session detached",
        ));
    };

    let mut collected = Vec::new();
    while let Some(frame) = output.next().await {
        let chunk = frame.map_err(engine_error(EXEC_ACTION, container_id))?;
        collected.extend_from_slice(&chunk.into_bytes());
    }
    debug!(
        container_id,
        exec_id = %created.id,
        bytes = collected.len(),
        "exec output stream closed"
    );

    Ok(strip_control_bytes(&collected))
}

fn build_create_exec_options(command: Vec<String>) -> CreateExecOptions<String> {
    CreateExecOptions::<String> {
        attach_stdout: Some(true),
        attach_stderr: Some(true),
        cmd: Some(command),
        ..CreateExecOptions::default()
    }
}

const fn build_start_exec_options() -> StartExecOptions {
    StartExecOptions {
        detach: false,
        tty: false,
        output_capacity: None,
    }
}

fn exec_failed(container_id: &str, message: &str) -> DockhandError {
    DockhandError::from(ContainerError::ExecFailed {
        container_id: String::from(container_id),
        message: String::from(message),
    })
}
