//! Resource-usage derivation from engine statistics samples.
//!
//! The engine reports cumulative counters. CPU utilisation is derived from the
//! difference between the current sample and the one taken immediately before
//! it; memory and network figures come from the current sample alone. Nothing
//! is retained between calls.

use crate::format::format_bytes;

/// Cumulative CPU counters from a single sample.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuSample {
    /// Total CPU time consumed by the container.
    pub total_usage: u64,
    /// Per-core usage counters, when the engine reports them.
    pub per_core_usage: Option<Vec<u64>>,
    /// Host-wide CPU time.
    pub system_usage: u64,
}

impl CpuSample {
    /// Number of cores the sample accounts for, defaulting to one when the
    /// engine omits per-core counters.
    #[must_use]
    pub fn core_count(&self) -> usize {
        self.per_core_usage.as_ref().map_or(1, Vec::len)
    }
}

/// Memory usage and limit in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySample {
    /// Bytes currently in use.
    pub usage: u64,
    /// Configured limit in bytes; zero when unknown.
    pub limit: u64,
}

/// Cumulative traffic counters for one network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceCounters {
    /// Interface name as reported by the engine, e.g. `eth0`.
    pub name: String,
    /// Bytes received.
    pub rx_bytes: u64,
    /// Bytes transmitted.
    pub tx_bytes: u64,
}

/// One point-in-time stats reading for a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageSnapshot {
    /// CPU counters at read time.
    pub cpu: CpuSample,
    /// CPU counters from the preceding read.
    pub previous_cpu: CpuSample,
    /// Memory reading.
    pub memory: MemorySample,
    /// Per-interface network counters, in no particular order.
    pub networks: Vec<InterfaceCounters>,
}

/// Display-ready resource figures for a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStats {
    /// CPU utilisation, e.g. `20.00%`.
    pub cpu_percent: String,
    /// Memory in use, e.g. `50.0 MB`.
    pub memory_usage: String,
    /// Memory limit, e.g. `1.0 GB`.
    pub memory_limit: String,
    /// Memory utilisation, e.g. `4.88%`.
    pub memory_percent: String,
    /// Bytes received across all interfaces.
    pub network_rx: String,
    /// Bytes transmitted across all interfaces.
    pub network_tx: String,
}

impl ResourceStats {
    /// Derive display figures from a stats snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &UsageSnapshot) -> Self {
        let (rx_bytes, tx_bytes) = network_totals(&snapshot.networks);
        Self {
            cpu_percent: format_percent(cpu_percent(&snapshot.cpu, &snapshot.previous_cpu)),
            memory_usage: format_bytes(snapshot.memory.usage),
            memory_limit: format_bytes(snapshot.memory.limit),
            memory_percent: format_percent(memory_percent(snapshot.memory)),
            network_rx: format_bytes(rx_bytes),
            network_tx: format_bytes(tx_bytes),
        }
    }
}

/// CPU utilisation between two samples as a percentage of one core.
///
/// Returns zero when the host counter did not advance. A counter that went
/// backwards is not clamped and yields a negative figure.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "utilisation is a ratio of counters rendered to two decimals"
)]
pub fn cpu_percent(current: &CpuSample, previous: &CpuSample) -> f64 {
    let cpu_delta = i128::from(current.total_usage) - i128::from(previous.total_usage);
    let system_delta = i128::from(current.system_usage) - i128::from(previous.system_usage);
    if system_delta <= 0 {
        return 0.0;
    }

    (cpu_delta as f64 / system_delta as f64) * current.core_count() as f64 * 100.0
}

/// Memory utilisation as a percentage of the limit; zero when no limit is set.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "utilisation is a ratio of byte counts rendered to two decimals"
)]
pub fn memory_percent(memory: MemorySample) -> f64 {
    if memory.limit == 0 {
        return 0.0;
    }

    (memory.usage as f64 / memory.limit as f64) * 100.0
}

/// Sum received and transmitted bytes across every interface.
#[must_use]
pub fn network_totals(networks: &[InterfaceCounters]) -> (u64, u64) {
    networks.iter().fold((0, 0), |(rx, tx), interface| {
        (
            rx.saturating_add(interface.rx_bytes),
            tx.saturating_add(interface.tx_bytes),
        )
    })
}

/// Two decimal places with halves rounded away from zero.
#[expect(clippy::float_arithmetic, reason = "rounding before display")]
fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded:.2}%")
}
