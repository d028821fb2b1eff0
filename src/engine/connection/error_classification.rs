//! Mapping of `Bollard` failures onto semantic `ContainerError` variants.
//!
//! Connection errors are classified by the underlying I/O error kind so the
//! caller learns whether the socket is missing or unreadable. Operation errors
//! are classified by the engine's HTTP status so not-found and state conflicts
//! are distinguishable from other failures.

use std::io::ErrorKind;
use std::path::Path;

use bollard::errors::Error as BollardError;

use crate::error::ContainerError;

/// Message used when the engine reports `304 Not Modified` without a body.
const NOT_MODIFIED_MESSAGE: &str = "already in the requested state";

/// Filesystem path of a `unix://` or `npipe://` endpoint.
pub(super) fn extract_socket_path(socket_uri: &str) -> Option<&Path> {
    socket_uri
        .strip_prefix("unix://")
        .or_else(|| socket_uri.strip_prefix("npipe://"))
        .map(Path::new)
}

fn classify_io_error_kind(
    kind: ErrorKind,
    socket_path: Option<&Path>,
    error_msg: &str,
) -> ContainerError {
    let connection_failed = || ContainerError::ConnectionFailed {
        message: error_msg.to_owned(),
    };
    match kind {
        ErrorKind::PermissionDenied => {
            socket_path.map_or_else(connection_failed, |path| ContainerError::PermissionDenied {
                path: path.to_path_buf(),
            })
        }
        ErrorKind::NotFound => {
            socket_path.map_or_else(connection_failed, |path| ContainerError::SocketNotFound {
                path: path.to_path_buf(),
            })
        }
        _ => connection_failed(),
    }
}

/// Classify a failure to build or reach the engine client.
pub(super) fn classify_connection_error(
    bollard_error: &BollardError,
    socket_uri: &str,
) -> ContainerError {
    let socket_path = extract_socket_path(socket_uri);
    let error_msg = bollard_error.to_string();

    match bollard_error {
        BollardError::SocketNotFoundError(_) => {
            if let Some(path) = socket_path {
                return ContainerError::SocketNotFound {
                    path: path.to_path_buf(),
                };
            }
        }
        BollardError::IOError { err } => {
            let kind = io_error_kind_in_chain(err).unwrap_or_else(|| err.kind());
            return classify_io_error_kind(kind, socket_path, &error_msg);
        }
        _ => {}
    }

    io_error_kind_in_chain(bollard_error).map_or_else(
        || ContainerError::ConnectionFailed {
            message: error_msg.clone(),
        },
        |kind| classify_io_error_kind(kind, socket_path, &error_msg),
    )
}

/// Classify a failed engine operation on container or image `id`.
///
/// `404` becomes `NotFound`; `409` and `304` become `Conflict`; transport
/// failures become `ConnectionFailed`; everything else is `OperationFailed`.
pub(crate) fn classify_operation_error(
    bollard_error: &BollardError,
    action: &str,
    id: &str,
) -> ContainerError {
    match bollard_error {
        BollardError::DockerResponseServerError {
            status_code,
            message,
        } => match *status_code {
            404 => ContainerError::NotFound {
                id: id.to_owned(),
                message: message.clone(),
            },
            304 | 409 => ContainerError::Conflict {
                action: action.to_owned(),
                id: id.to_owned(),
                message: if message.trim().is_empty() {
                    String::from(NOT_MODIFIED_MESSAGE)
                } else {
                    message.clone()
                },
            },
            _ => operation_failed(action, id, bollard_error),
        },
        BollardError::SocketNotFoundError(_)
        | BollardError::IOError { .. }
        | BollardError::RequestTimeoutError => ContainerError::ConnectionFailed {
            message: bollard_error.to_string(),
        },
        _ => io_error_kind_in_chain(bollard_error).map_or_else(
            || operation_failed(action, id, bollard_error),
            |kind| classify_io_error_kind(kind, None, &bollard_error.to_string()),
        ),
    }
}

fn operation_failed(action: &str, id: &str, bollard_error: &BollardError) -> ContainerError {
    ContainerError::OperationFailed {
        action: action.to_owned(),
        id: id.to_owned(),
        message: bollard_error.to_string(),
    }
}

/// Walk the error source chain looking for an `io::Error` kind.
fn io_error_kind_in_chain(error: &dyn std::error::Error) -> Option<ErrorKind> {
    let mut current: Option<&(dyn std::error::Error + 'static)> = error.source();
    while let Some(err) = current {
        if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
            return Some(io_err.kind());
        }
        current = err.source();
    }
    None
}
