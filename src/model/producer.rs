use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// States of the producer's control machine.
///
/// Transitions: `start` moves any state to `Active`, `pause` moves `Active`
/// to `Paused` (no-op elsewhere), `stop` moves any state to `Stopped`.
/// `reset` leaves the status alone and only zeroes the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProducerStatus {
    Stopped,
    Paused,
    Active,
}

impl fmt::Display for ProducerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProducerStatus::Stopped => "Stopped",
            ProducerStatus::Paused => "Paused",
            ProducerStatus::Active => "Active",
        };
        f.write_str(s)
    }
}

/// Scheduling parameters for the producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerConfig {
    /// Milliseconds between ticks. Must be positive.
    pub interval_ms: u64,
    /// Orders generated per tick. Must be at least 1.
    pub batch_size: usize,
}

impl ProducerConfig {
    /// Expected throughput in orders per second at this configuration.
    pub fn generation_rate(&self) -> f64 {
        self.batch_size as f64 / self.interval_ms as f64 * 1000.0
    }
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            batch_size: 1,
        }
    }
}

/// Partial config change; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProducerConfigUpdate {
    pub interval_ms: Option<u64>,
    pub batch_size: Option<usize>,
}

/// Snapshot of the producer as seen by consumers.
///
/// `generated_count` is monotonically non-decreasing while the producer runs;
/// only an explicit `reset` zeroes it (and clears `last_generated_at`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProducerState {
    pub status: ProducerStatus,
    pub generated_count: u64,
    /// Orders per second implied by the current config.
    pub generation_rate: f64,
    pub config: ProducerConfig,
    pub last_generated_at: Option<DateTime<Utc>>,
}

impl Default for ProducerState {
    fn default() -> Self {
        let config = ProducerConfig::default();
        Self {
            status: ProducerStatus::Stopped,
            generated_count: 0,
            generation_rate: config.generation_rate(),
            config,
            last_generated_at: None,
        }
    }
}
