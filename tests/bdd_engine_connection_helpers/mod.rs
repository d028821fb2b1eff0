//! Behavioural test helpers for container engine connection.
//!
//! Environment lookups go through a `MockEnv` built from the scenario's
//! variables, so no real environment variable is read or written.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dockhand::engine::{EngineConnector, SocketResolver};
use dockhand::error::{ContainerError, DockhandError};
use mockable::MockEnv;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, then, when};

/// Step result type for BDD tests, using a static string for errors.
pub type StepResult<T> = Result<T, &'static str>;

type EnvVars = Arc<Mutex<HashMap<String, String>>>;

/// How a connection attempt ended.
#[derive(Clone, Debug)]
pub enum ConnectionOutcome {
    /// A client was built.
    Success,
    /// The socket path does not exist.
    SocketNotFound(String),
    /// Any other failure.
    OtherError,
}

/// State shared across engine connection scenarios.
#[derive(Default, ScenarioState)]
pub struct EngineConnectionState {
    env_vars: Slot<EnvVars>,
    config_socket: Slot<Option<String>>,
    resolved_socket: Slot<String>,
    endpoint: Slot<String>,
    connection_outcome: Slot<ConnectionOutcome>,
}

/// Fixture providing a fresh engine connection state.
#[fixture]
pub fn engine_connection_state() -> EngineConnectionState {
    let state = EngineConnectionState::default();
    state.env_vars.set(Arc::new(Mutex::new(HashMap::new())));
    state
}

fn set_env_var(state: &EngineConnectionState, key: &str, value: &str) -> StepResult<()> {
    let env_vars = state.env_vars.get().ok_or("env_vars should be initialised")?;
    let mut vars = env_vars.lock().map_err(|_| "mutex poisoned")?;
    vars.insert(String::from(key), String::from(value));
    Ok(())
}

/// Snapshot the scenario's variables into a `MockEnv`.
fn create_mock_env(state: &EngineConnectionState) -> StepResult<MockEnv> {
    let env_vars = state.env_vars.get().ok_or("env_vars should be initialised")?;
    let vars = env_vars.lock().map_err(|_| "mutex poisoned")?.clone();

    let mut mock = MockEnv::new();
    mock.expect_string()
        .returning(move |key| vars.get(key).cloned());
    Ok(mock)
}

#[given("no engine socket is configured")]
fn no_engine_socket_configured(engine_connection_state: &EngineConnectionState) {
    engine_connection_state.config_socket.set(None);
}

#[given("engine socket is configured as {socket}")]
fn engine_socket_configured_as(engine_connection_state: &EngineConnectionState, socket: String) {
    engine_connection_state.config_socket.set(Some(socket));
}

#[given("{variable} is exported empty")]
fn variable_is_empty(
    engine_connection_state: &EngineConnectionState,
    variable: String,
) -> StepResult<()> {
    set_env_var(engine_connection_state, &variable, "")
}

#[given("{variable} is set to {value}")]
fn variable_is_set_to(
    engine_connection_state: &EngineConnectionState,
    variable: String,
    value: String,
) -> StepResult<()> {
    set_env_var(engine_connection_state, &variable, &value)
}

#[given("the endpoint {endpoint}")]
fn the_endpoint(engine_connection_state: &EngineConnectionState, endpoint: String) {
    engine_connection_state.endpoint.set(endpoint);
}

#[when("the socket is resolved")]
fn the_socket_is_resolved(engine_connection_state: &EngineConnectionState) -> StepResult<()> {
    let env = create_mock_env(engine_connection_state)?;
    let resolver = SocketResolver::new(&env);
    let config_socket = engine_connection_state.config_socket.get().flatten();
    let socket = EngineConnector::resolve_socket(config_socket.as_deref(), &resolver);
    engine_connection_state.resolved_socket.set(socket);
    Ok(())
}

#[when("a connection is attempted")]
fn connection_is_attempted(engine_connection_state: &EngineConnectionState) -> StepResult<()> {
    let endpoint = engine_connection_state
        .endpoint
        .get()
        .ok_or("endpoint should be set")?;

    let outcome = match EngineConnector::connect(&endpoint) {
        Ok(_) => ConnectionOutcome::Success,
        Err(DockhandError::Container(ContainerError::SocketNotFound { path })) => {
            ConnectionOutcome::SocketNotFound(path.display().to_string())
        }
        Err(_) => ConnectionOutcome::OtherError,
    };
    engine_connection_state.connection_outcome.set(outcome);
    Ok(())
}

#[then("the resolved socket is {expected}")]
fn the_resolved_socket_is(
    engine_connection_state: &EngineConnectionState,
    expected: String,
) -> StepResult<()> {
    let resolved = engine_connection_state
        .resolved_socket
        .get()
        .ok_or("resolved socket should be set")?;
    assert_eq!(resolved, expected);
    Ok(())
}

#[then("the socket resolves to the platform default")]
fn the_socket_resolves_to_platform_default(
    engine_connection_state: &EngineConnectionState,
) -> StepResult<()> {
    let resolved = engine_connection_state
        .resolved_socket
        .get()
        .ok_or("resolved socket should be set")?;
    assert_eq!(resolved, SocketResolver::<MockEnv>::default_socket());
    Ok(())
}

#[then("the connection succeeds")]
fn the_connection_succeeds(engine_connection_state: &EngineConnectionState) -> StepResult<()> {
    match engine_connection_state.connection_outcome.get() {
        Some(ConnectionOutcome::Success) => Ok(()),
        Some(_) => Err("expected the connection to succeed"),
        None => Err("connection outcome should be set"),
    }
}

#[then("the connection fails because the socket was not found")]
fn the_connection_fails_not_found(
    engine_connection_state: &EngineConnectionState,
) -> StepResult<()> {
    match engine_connection_state.connection_outcome.get() {
        Some(ConnectionOutcome::SocketNotFound(path)) => {
            assert!(
                path.contains("dockhand-test.sock"),
                "unexpected path in error: {path}"
            );
            Ok(())
        }
        Some(_) => Err("expected a socket-not-found error"),
        None => Err("connection outcome should be set"),
    }
}
