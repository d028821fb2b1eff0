//! `ContainerEngine` implementation backed by the `Bollard` client.

use bollard::Docker;
use bollard::exec::{CreateExecOptions, CreateExecResults, StartExecOptions, StartExecResults};
use bollard::models::{
    ContainerCpuStats, ContainerStatsResponse, ContainerSummary, ImageSummary,
};
use bollard::query_parameters::{
    ListContainersOptionsBuilder, ListImagesOptions, LogsOptionsBuilder,
    RemoveContainerOptionsBuilder, RemoveImageOptionsBuilder, RestartContainerOptions,
    StartContainerOptions, StatsOptionsBuilder, StopContainerOptions,
};
use futures_util::StreamExt;

use super::{ContainerEngine, ContainerRecord, EngineFuture, ImageRecord, OutputStream};
use crate::format::PortMapping;
use crate::stats::{CpuSample, InterfaceCounters, MemorySample, UsageSnapshot};

impl ContainerEngine for Docker {
    fn list_containers(&self, include_stopped: bool) -> EngineFuture<'_, Vec<ContainerRecord>> {
        let options = ListContainersOptionsBuilder::default()
            .all(include_stopped)
            .build();
        Box::pin(async move {
            let summaries = Self::list_containers(self, Some(options)).await?;
            Ok(summaries.into_iter().map(container_record).collect())
        })
    }

    fn container_logs(&self, container_id: &str, tail: u32) -> OutputStream<'_> {
        let options = LogsOptionsBuilder::default()
            .stdout(true)
            .stderr(true)
            .follow(false)
            .tail(&tail.to_string())
            .build();
        Box::pin(Self::logs(self, container_id, Some(options)))
    }

    fn start_container(&self, container_id: &str) -> EngineFuture<'_, ()> {
        let container_id_owned = String::from(container_id);
        Box::pin(async move {
            Self::start_container(self, &container_id_owned, None::<StartContainerOptions>).await
        })
    }

    fn stop_container(&self, container_id: &str) -> EngineFuture<'_, ()> {
        let container_id_owned = String::from(container_id);
        Box::pin(async move {
            Self::stop_container(self, &container_id_owned, None::<StopContainerOptions>).await
        })
    }

    fn restart_container(&self, container_id: &str) -> EngineFuture<'_, ()> {
        let container_id_owned = String::from(container_id);
        Box::pin(async move {
            Self::restart_container(self, &container_id_owned, None::<RestartContainerOptions>)
                .await
        })
    }

    fn remove_container(&self, container_id: &str, force: bool) -> EngineFuture<'_, ()> {
        let container_id_owned = String::from(container_id);
        let options = RemoveContainerOptionsBuilder::default().force(force).build();
        Box::pin(async move {
            Self::remove_container(self, &container_id_owned, Some(options)).await
        })
    }

    fn create_exec(
        &self,
        container_id: &str,
        options: CreateExecOptions<String>,
    ) -> EngineFuture<'_, CreateExecResults> {
        let container_id_owned = String::from(container_id);
        Box::pin(async move { Self::create_exec(self, &container_id_owned, options).await })
    }

    fn start_exec(
        &self,
        exec_id: &str,
        options: Option<StartExecOptions>,
    ) -> EngineFuture<'_, StartExecResults> {
        let exec_id_owned = String::from(exec_id);
        Box::pin(async move { Self::start_exec(self, &exec_id_owned, options).await })
    }

    fn container_stats(&self, container_id: &str) -> EngineFuture<'_, Option<UsageSnapshot>> {
        let options = StatsOptionsBuilder::default().stream(false).build();
        let mut readings = Self::stats(self, container_id, Some(options)).boxed();
        Box::pin(async move {
            let reading = readings.next().await.transpose()?;
            Ok(reading.map(usage_snapshot))
        })
    }

    fn list_images(&self) -> EngineFuture<'_, Vec<ImageRecord>> {
        Box::pin(async move {
            let summaries = Self::list_images(self, None::<ListImagesOptions>).await?;
            Ok(summaries.into_iter().map(image_record).collect())
        })
    }

    fn remove_image(&self, image: &str, force: bool) -> EngineFuture<'_, ()> {
        let image_owned = String::from(image);
        let options = RemoveImageOptionsBuilder::default().force(force).build();
        Box::pin(async move {
            Self::remove_image(self, &image_owned, Some(options), None)
                .await
                .map(drop)
        })
    }
}

fn container_record(summary: ContainerSummary) -> ContainerRecord {
    let ports = summary
        .ports
        .unwrap_or_default()
        .into_iter()
        .map(|port| PortMapping {
            private_port: port.private_port,
            public_port: port.public_port,
            protocol: port.typ.map(|kind| kind.to_string()).unwrap_or_default(),
        })
        .collect();

    ContainerRecord {
        id: summary.id.unwrap_or_default(),
        names: summary.names.unwrap_or_default(),
        image: summary.image.unwrap_or_default(),
        state: summary
            .state
            .map(|state| state.to_string())
            .unwrap_or_default(),
        status: summary.status.unwrap_or_default(),
        ports,
        created: summary.created.unwrap_or_default(),
    }
}

fn image_record(summary: ImageSummary) -> ImageRecord {
    ImageRecord {
        id: summary.id,
        repo_tags: summary.repo_tags,
        size: u64::try_from(summary.size).unwrap_or_default(),
        created: summary.created,
    }
}

fn usage_snapshot(response: ContainerStatsResponse) -> UsageSnapshot {
    let memory = response.memory_stats.unwrap_or_default();
    let networks = response
        .networks
        .unwrap_or_default()
        .into_iter()
        .map(|(name, counters)| InterfaceCounters {
            name,
            rx_bytes: counters.rx_bytes.unwrap_or_default(),
            tx_bytes: counters.tx_bytes.unwrap_or_default(),
        })
        .collect();

    UsageSnapshot {
        cpu: cpu_sample(response.cpu_stats),
        previous_cpu: cpu_sample(response.precpu_stats),
        memory: MemorySample {
            usage: memory.usage.unwrap_or_default(),
            limit: memory.limit.unwrap_or_default(),
        },
        networks,
    }
}

fn cpu_sample(cpu_stats: Option<ContainerCpuStats>) -> CpuSample {
    let counters = cpu_stats.unwrap_or_default();
    let usage = counters.cpu_usage.unwrap_or_default();
    CpuSample {
        total_usage: usage.total_usage.unwrap_or_default(),
        per_core_usage: usage.percpu_usage,
        system_usage: counters.system_cpu_usage.unwrap_or_default(),
    }
}
