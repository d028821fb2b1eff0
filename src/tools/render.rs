//! Text rendering of facade results for tool responses.

use crate::api::{ContainerSummary, ImageSummary, ResourceStats};

/// Text returned by `list_containers` when nothing matches.
pub const NO_CONTAINERS: &str = "No containers found.";
/// Text returned by `list_images` when the host has no images.
pub const NO_IMAGES: &str = "No images found.";
/// Text returned by `container_logs` when the container logged nothing.
pub const NO_LOGS: &str = "(no logs)";
/// Text returned by `exec_command` when the command printed nothing.
pub const NO_OUTPUT: &str = "(no output)";

/// One line per container: id, name, image, state and status columns.
#[must_use]
pub fn container_table(containers: &[ContainerSummary]) -> String {
    if containers.is_empty() {
        return String::from(NO_CONTAINERS);
    }

    containers
        .iter()
        .map(|container| {
            format!(
                "{}  {:<30}  {:<30}  {:<10}  {}",
                container.id, container.name, container.image, container.state, container.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per image: id, tags, size and creation columns.
#[must_use]
pub fn image_table(images: &[ImageSummary]) -> String {
    if images.is_empty() {
        return String::from(NO_IMAGES);
    }

    images
        .iter()
        .map(|image| {
            format!(
                "{}  {:<40}  {:<10}  {}",
                image.id,
                image.tags.join(", "),
                image.size,
                image.created
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Three-line CPU, memory and network report.
#[must_use]
pub fn resource_report(stats: &ResourceStats) -> String {
    [
        format!("CPU:     {}", stats.cpu_percent),
        format!(
            "Memory:  {} / {} ({})",
            stats.memory_usage, stats.memory_limit, stats.memory_percent
        ),
        format!("Network: ↓ {}  ↑ {}", stats.network_rx, stats.network_tx),
    ]
    .join("\n")
}

/// Return `text`, or `placeholder` when it is empty.
#[must_use]
pub fn or_placeholder(text: String, placeholder: &str) -> String {
    if text.is_empty() {
        String::from(placeholder)
    } else {
        text
    }
}
