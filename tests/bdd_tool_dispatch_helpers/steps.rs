//! Given/When steps for tool dispatch scenarios.

use dockhand::error::{DockhandError, ToolError};
use dockhand::tools::{JsonObject, dispatch};
use rstest_bdd_macros::{given, when};
use serde_json::{Value, json};

use super::engine::scripted_engine;
use super::state::{DispatchOutcome, EngineSetup, ToolDispatchState};

pub type StepResult<T> = Result<T, String>;

#[given("the engine reports a running container named {name}")]
fn engine_reports_running_container(tool_dispatch_state: &ToolDispatchState, name: String) {
    tool_dispatch_state
        .setup
        .set(EngineSetup::Containers(vec![name]));
}

#[given("the engine reports no containers")]
fn engine_reports_no_containers(tool_dispatch_state: &ToolDispatchState) {
    tool_dispatch_state
        .setup
        .set(EngineSetup::Containers(Vec::new()));
}

#[given("the engine accepts lifecycle requests")]
fn engine_accepts_lifecycle_requests(tool_dispatch_state: &ToolDispatchState) {
    tool_dispatch_state.setup.set(EngineSetup::Accepting);
}

#[given("the engine holds log lines for {id}")]
fn engine_holds_log_lines(tool_dispatch_state: &ToolDispatchState, id: String) {
    let _ = id;
    tool_dispatch_state.setup.set(EngineSetup::Logs);
}

#[given("the engine runs exec sessions for {id}")]
fn engine_runs_exec_sessions(tool_dispatch_state: &ToolDispatchState, id: String) {
    let _ = id;
    tool_dispatch_state.setup.set(EngineSetup::Exec);
}

#[given("the engine reports a usage sample")]
fn engine_reports_usage_sample(tool_dispatch_state: &ToolDispatchState) {
    tool_dispatch_state.setup.set(EngineSetup::Stats);
}

#[given("the engine rejects requests with status {status} and message {message}")]
fn engine_rejects_requests(tool_dispatch_state: &ToolDispatchState, status: u16, message: String) {
    tool_dispatch_state
        .setup
        .set(EngineSetup::Rejecting { status, message });
}

#[given("the engine expects no requests")]
fn engine_expects_no_requests(tool_dispatch_state: &ToolDispatchState) {
    tool_dispatch_state.setup.set(EngineSetup::Untouched);
}

#[when("the {tool} tool is called")]
fn tool_is_called(tool_dispatch_state: &ToolDispatchState, tool: String) -> StepResult<()> {
    run_tool(tool_dispatch_state, &tool, None)
}

#[when("the {tool} tool is called for {id}")]
fn tool_is_called_for(
    tool_dispatch_state: &ToolDispatchState,
    tool: String,
    id: String,
) -> StepResult<()> {
    run_tool(tool_dispatch_state, &tool, Some(json!({ "id": id })))
}

#[when("the {tool} tool is called with {arguments}")]
fn tool_is_called_with(
    tool_dispatch_state: &ToolDispatchState,
    tool: String,
    arguments: String,
) -> StepResult<()> {
    let parsed: Value = serde_json::from_str(&arguments)
        .map_err(|error| format!("scenario arguments are not JSON: {error}"))?;
    run_tool(tool_dispatch_state, &tool, Some(parsed))
}

fn run_tool(state: &ToolDispatchState, tool: &str, arguments: Option<Value>) -> StepResult<()> {
    let setup = state
        .setup
        .get()
        .ok_or_else(|| String::from("engine setup should be configured"))?;
    let engine = scripted_engine(setup);

    let object: Option<JsonObject> = match arguments {
        None => None,
        Some(Value::Object(map)) => Some(map),
        Some(other) => return Err(format!("arguments must be a JSON object, got {other}")),
    };

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|error| format!("failed to create runtime: {error}"))?;
    let outcome = match runtime.block_on(dispatch(&engine, tool, object)) {
        Ok(text) => DispatchOutcome::Output(text),
        Err(DockhandError::Tool(ToolError::UnknownTool { .. })) => DispatchOutcome::UnknownTool,
        Err(DockhandError::Tool(error @ ToolError::InvalidArguments { .. })) => {
            DispatchOutcome::InvalidArguments(error.to_string())
        }
        Err(error) => DispatchOutcome::EngineError(error.to_string()),
    };
    state.outcome.set(outcome);
    Ok(())
}
