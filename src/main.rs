//! `dockhand` application entry point.
//!
//! Serves the container-management tools over the Model Context Protocol on
//! stdio. It uses `eyre` for opaque error handling at the application
//! boundary, converting domain-specific errors into human-readable reports.
//!
//! Configuration is loaded with layered precedence via `OrthoConfig`:
//! 1. Application defaults
//! 2. Configuration file (`~/.config/dockhand/config.toml` or path from `DOCKHAND_CONFIG_PATH`)
//! 3. Environment variables (`DOCKHAND_*`)
//! 4. Command-line arguments

use clap::Parser;
use dockhand::config::{AppConfig, Cli, Commands, load_config};
use dockhand::engine::{EngineConnector, SocketResolver};
use dockhand::error::Result as DockhandResult;
use dockhand::logging;
use dockhand::server::DockhandServer;
use dockhand::tools::ToolName;
use eyre::{Report, Result as EyreResult};
use tracing::{error, info};

/// Application entry point.
///
/// Loads configuration, installs logging, then dispatches to the subcommand.
/// Failures after logging is installed are logged before being reported.
#[tokio::main]
async fn main() -> EyreResult<()> {
    let cli = Cli::parse();
    let config = load_config(&cli).map_err(Report::from)?;
    logging::init(&config.logging).map_err(Report::from)?;

    run(cli.subcommand(), &config).await.map_err(|err| {
        error!(error = %err, "dockhand exited with an error");
        Report::from(err)
    })
}

/// Execute the subcommand, returning domain-specific errors.
async fn run(command: Commands, config: &AppConfig) -> DockhandResult<()> {
    match command {
        Commands::Serve => serve(config).await,
        Commands::Check => check(config).await,
        Commands::Tools => {
            print_tools();
            Ok(())
        }
    }
}

/// Connect to the engine and serve tools until the client disconnects.
async fn serve(config: &AppConfig) -> DockhandResult<()> {
    let env = mockable::DefaultEnv::new();
    let resolver = SocketResolver::new(&env);
    let socket = config.engine_socket.as_deref();

    let docker = if config.engine.verify_on_startup {
        EngineConnector::connect_with_fallback_and_verify(socket, &resolver).await?
    } else {
        EngineConnector::connect_with_fallback(socket, &resolver)?
    };

    info!(
        endpoint = %EngineConnector::resolve_socket(socket, &resolver),
        version = env!("CARGO_PKG_VERSION"),
        "starting dockhand"
    );
    DockhandServer::new(docker).serve_stdio().await
}

/// Ping the engine and report the endpoint that answered.
#[expect(clippy::print_stdout, reason = "CLI output is the intended behaviour")]
async fn check(config: &AppConfig) -> DockhandResult<()> {
    let env = mockable::DefaultEnv::new();
    let resolver = SocketResolver::new(&env);
    let endpoint = EngineConnector::resolve_socket(config.engine_socket.as_deref(), &resolver);

    let docker = EngineConnector::connect(&endpoint)?;
    EngineConnector::health_check(&docker).await?;

    println!("Container engine at {endpoint} is responding.");
    Ok(())
}

/// Print each tool's name and description.
#[expect(clippy::print_stdout, reason = "CLI output is the intended behaviour")]
fn print_tools() {
    for tool in ToolName::ALL {
        println!("{:<20}{}", tool.as_str(), tool.description());
    }
}
