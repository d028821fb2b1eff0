//! Scenario state for tool dispatch behavioural tests.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// What the mocked engine has been primed to answer.
#[derive(Debug, Clone)]
pub(crate) enum EngineSetup {
    /// `list_containers` returns one running container per name.
    Containers(Vec<String>),
    /// Lifecycle and removal requests succeed.
    Accepting,
    /// `container_logs` yields split stdout and stderr frames.
    Logs,
    /// `create_exec` and `start_exec` succeed with attached output.
    Exec,
    /// `container_stats` returns a fixed two-core sample.
    Stats,
    /// Every primed request fails with this engine response.
    Rejecting { status: u16, message: String },
    /// No request is expected; any engine call panics.
    Untouched,
}

/// How the dispatched call ended.
#[derive(Debug, Clone)]
pub(crate) enum DispatchOutcome {
    /// The tool produced text.
    Output(String),
    /// The call was rejected before reaching the engine.
    UnknownTool,
    /// The arguments did not validate.
    InvalidArguments(String),
    /// The engine reported an error.
    EngineError(String),
}

#[derive(Default, ScenarioState)]
pub(crate) struct ToolDispatchState {
    pub(crate) setup: Slot<EngineSetup>,
    pub(crate) outcome: Slot<DispatchOutcome>,
}

#[fixture]
pub(crate) fn tool_dispatch_state() -> ToolDispatchState {
    let state = ToolDispatchState::default();
    state.setup.set(EngineSetup::Untouched);
    state
}
