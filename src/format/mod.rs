//! Display formatting for engine figures.
//!
//! Pure helpers that turn raw engine values (byte counts, port bindings,
//! identifiers, epoch timestamps, multiplexed output) into the strings shown
//! to tool callers.

use chrono::{DateTime, SecondsFormat};

/// Units used by [`format_bytes`], smallest first.
const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Scaling factor between adjacent byte units.
const UNIT_STEP: u64 = 1024;

/// Number of identifier characters shown to callers.
pub const SHORT_ID_LEN: usize = 12;

/// A single published or exposed container port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortMapping {
    /// Port inside the container.
    pub private_port: u16,
    /// Host port the private port is published on, if any.
    pub public_port: Option<u16>,
    /// Transport protocol, e.g. `tcp`.
    pub protocol: String,
}

/// Render a byte count with a base-1024 unit.
///
/// Counts below 1024 render as whole bytes (`"512 B"`). Larger counts use the
/// largest unit in which the value is at least one, with one decimal digit
/// (`52428800` becomes `"50.0 MB"`). Values beyond the gigabyte range stay in
/// `GB` with a larger multiplier.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    if bytes < UNIT_STEP {
        return format!("{bytes} B");
    }

    let mut divisor = UNIT_STEP;
    let mut unit_index = 1;
    while unit_index + 1 < BYTE_UNITS.len() && bytes >= divisor.saturating_mul(UNIT_STEP) {
        divisor = divisor.saturating_mul(UNIT_STEP);
        unit_index += 1;
    }

    let unit = BYTE_UNITS.get(unit_index).copied().unwrap_or("GB");
    format!("{:.1} {unit}", scale(bytes, divisor))
}

/// Ratio rounded to one decimal place, halves away from zero.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "display scaling tolerates precision loss above 2^53 bytes"
)]
fn scale(bytes: u64, divisor: u64) -> f64 {
    let value = bytes as f64 / divisor as f64;
    (value * 10.0).round() / 10.0
}

/// Render port mappings as a comma-separated list.
///
/// Published ports render as `public->private/protocol`, exposed-only ports
/// as `private/protocol`. An empty slice renders as an empty string.
#[must_use]
pub fn format_ports(mappings: &[PortMapping]) -> String {
    mappings
        .iter()
        .map(|mapping| match mapping.public_port {
            Some(public) => format!("{public}->{}/{}", mapping.private_port, mapping.protocol),
            None => format!("{}/{}", mapping.private_port, mapping.protocol),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Truncate an engine identifier to its short display form.
#[must_use]
pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

/// Strip an algorithm prefix such as `sha256:` and truncate the digest.
#[must_use]
pub fn short_digest(digest: &str) -> String {
    let hex = digest
        .split_once(':')
        .map_or(digest, |(_algorithm, value)| value);
    short_id(hex)
}

/// Render Unix epoch seconds as an ISO-8601 UTC timestamp.
///
/// Uses millisecond precision with a `Z` suffix, e.g.
/// `2023-11-14T22:13:20.000Z`. Out-of-range values fall back to the raw
/// number of seconds.
#[must_use]
pub fn format_timestamp(epoch_seconds: i64) -> String {
    DateTime::from_timestamp(epoch_seconds, 0).map_or_else(
        || epoch_seconds.to_string(),
        |timestamp| timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Decode engine output, dropping control bytes `0x00` to `0x08`.
///
/// Stream-multiplexing headers and similar framing noise fall in that range.
/// Every other byte, including newlines and tabs, is preserved; invalid UTF-8
/// is replaced rather than rejected.
#[must_use]
pub fn strip_control_bytes(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .filter(|character| !('\u{0}'..='\u{8}').contains(character))
        .collect()
}
