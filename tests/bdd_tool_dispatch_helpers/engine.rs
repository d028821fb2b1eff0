//! Scripted `ContainerEngine` double built from the scenario's setup.

use bollard::container::LogOutput;
use bollard::errors::Error as BollardError;
use bollard::exec::{CreateExecOptions, CreateExecResults, StartExecOptions, StartExecResults};
use dockhand::engine::{ContainerEngine, ContainerRecord, EngineFuture, ImageRecord, OutputStream};
use dockhand::format::PortMapping;
use dockhand::stats::{CpuSample, InterfaceCounters, MemorySample, UsageSnapshot};
use futures_util::stream;
use mockall::mock;

use super::state::EngineSetup;

mock! {
    pub(crate) Engine {}

    impl ContainerEngine for Engine {
        fn list_containers(&self, include_stopped: bool) -> EngineFuture<'_, Vec<ContainerRecord>>;
        fn container_logs(&self, container_id: &str, tail: u32) -> OutputStream<'_>;
        fn start_container(&self, container_id: &str) -> EngineFuture<'_, ()>;
        fn stop_container(&self, container_id: &str) -> EngineFuture<'_, ()>;
        fn restart_container(&self, container_id: &str) -> EngineFuture<'_, ()>;
        fn remove_container(&self, container_id: &str, force: bool) -> EngineFuture<'_, ()>;
        fn create_exec(
            &self,
            container_id: &str,
            options: CreateExecOptions<String>,
        ) -> EngineFuture<'_, CreateExecResults>;
        fn start_exec(
            &self,
            exec_id: &str,
            options: Option<StartExecOptions>,
        ) -> EngineFuture<'_, StartExecResults>;
        fn container_stats(&self, container_id: &str) -> EngineFuture<'_, Option<UsageSnapshot>>;
        fn list_images(&self) -> EngineFuture<'_, Vec<ImageRecord>>;
        fn remove_image(&self, image: &str, force: bool) -> EngineFuture<'_, ()>;
    }
}

fn frame_stdout(message: &[u8]) -> Result<LogOutput, BollardError> {
    Ok(LogOutput::StdOut {
        message: Vec::from(message).into(),
    })
}

fn frame_stderr(message: &[u8]) -> Result<LogOutput, BollardError> {
    Ok(LogOutput::StdErr {
        message: Vec::from(message).into(),
    })
}

fn running_container(name: &str) -> ContainerRecord {
    ContainerRecord {
        id: String::from("0123456789abcdef0123"),
        names: vec![format!("/{name}")],
        image: String::from("nginx:latest"),
        state: String::from("running"),
        status: String::from("Up 5 minutes"),
        ports: vec![PortMapping {
            private_port: 80,
            public_port: Some(8080),
            protocol: String::from("tcp"),
        }],
        created: 1_700_000_000,
    }
}

fn usage_sample() -> UsageSnapshot {
    UsageSnapshot {
        cpu: CpuSample {
            total_usage: 200,
            per_core_usage: Some(vec![100, 100]),
            system_usage: 10_000,
        },
        previous_cpu: CpuSample {
            total_usage: 100,
            per_core_usage: None,
            system_usage: 9_000,
        },
        memory: MemorySample {
            usage: 52_428_800,
            limit: 1_073_741_824,
        },
        networks: vec![InterfaceCounters {
            name: String::from("eth0"),
            rx_bytes: 1024,
            tx_bytes: 2048,
        }],
    }
}

fn rejection(status: u16, message: &str) -> BollardError {
    BollardError::DockerResponseServerError {
        status_code: status,
        message: message.to_owned(),
    }
}

/// Build an engine double answering as `setup` describes.
pub(crate) fn scripted_engine(setup: EngineSetup) -> MockEngine {
    let mut engine = MockEngine::new();
    match setup {
        EngineSetup::Containers(names) => {
            engine.expect_list_containers().returning(move |_| {
                let records = names.iter().map(|name| running_container(name)).collect();
                Box::pin(async move { Ok(records) })
            });
        }
        EngineSetup::Accepting => {
            engine
                .expect_start_container()
                .returning(|_| Box::pin(async { Ok(()) }));
            engine
                .expect_stop_container()
                .returning(|_| Box::pin(async { Ok(()) }));
            engine
                .expect_restart_container()
                .returning(|_| Box::pin(async { Ok(()) }));
            engine
                .expect_remove_container()
                .returning(|_, _| Box::pin(async { Ok(()) }));
            engine
                .expect_remove_image()
                .returning(|_, _| Box::pin(async { Ok(()) }));
        }
        EngineSetup::Logs => {
            engine.expect_container_logs().returning(|_, _| {
                Box::pin(stream::iter(vec![
                    frame_stdout(b"\x01hel"),
                    frame_stderr(b"lo"),
                ]))
            });
        }
        EngineSetup::Exec => {
            engine.expect_create_exec().returning(|_, _| {
                Box::pin(async {
                    Ok(CreateExecResults {
                        id: String::from("exec-1"),
                    })
                })
            });
            engine.expect_start_exec().returning(|_, _| {
                Box::pin(async {
                    Ok(StartExecResults::Attached {
                        output: Box::pin(stream::iter(vec![
                            frame_stdout(b"total 0\n"),
                            frame_stderr(b"warning\n"),
                        ])),
                        input: Box::pin(tokio::io::sink()),
                    })
                })
            });
        }
        EngineSetup::Stats => {
            engine
                .expect_container_stats()
                .returning(|_| Box::pin(async { Ok(Some(usage_sample())) }));
        }
        EngineSetup::Rejecting { status, message } => {
            let start_message = message.clone();
            engine.expect_start_container().returning(move |_| {
                let error = rejection(status, &start_message);
                Box::pin(async move { Err(error) })
            });
            engine.expect_stop_container().returning(move |_| {
                let error = rejection(status, &message);
                Box::pin(async move { Err(error) })
            });
        }
        EngineSetup::Untouched => {}
    }
    engine
}
