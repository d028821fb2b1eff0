//! Image listing and removal.

use tracing::debug;

use super::{ImageSummary, engine_error};
use crate::engine::{ContainerEngine, ImageRecord};
use crate::error::Result as DockhandResult;
use crate::format::{format_bytes, format_timestamp, short_digest};

/// Placeholder tag shown for images the engine reports without tags.
const UNTAGGED: &str = "<none>";

/// List images on the host.
///
/// # Errors
///
/// Returns `ContainerError::ConnectionFailed` when the engine is unreachable.
pub async fn list_images<E: ContainerEngine + ?Sized>(
    engine: &E,
) -> DockhandResult<Vec<ImageSummary>> {
    debug!("listing images");
    let records = engine
        .list_images()
        .await
        .map_err(engine_error("list", "images"))?;
    Ok(records.iter().map(summarize).collect())
}

fn summarize(record: &ImageRecord) -> ImageSummary {
    let tags = if record.repo_tags.is_empty() {
        vec![String::from(UNTAGGED)]
    } else {
        record.repo_tags.clone()
    };

    ImageSummary {
        id: short_digest(&record.id),
        tags,
        size: format_bytes(record.size),
        created: format_timestamp(record.created),
    }
}

/// Remove an image; `force` removes it even when containers use it.
///
/// # Errors
///
/// Returns `ContainerError::Conflict` when the image is in use and `force`
/// is not set, and `ContainerError::NotFound` for an unknown image.
pub async fn remove_image<E: ContainerEngine + ?Sized>(
    engine: &E,
    image_id: &str,
    force: bool,
) -> DockhandResult<String> {
    debug!(image_id, force, "removing image");
    engine
        .remove_image(image_id, force)
        .await
        .map_err(engine_error("remove", image_id))?;
    Ok(format!("Image {image_id} removed"))
}
