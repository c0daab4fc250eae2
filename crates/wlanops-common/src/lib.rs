//! wlanops Common - Shared types for the wireless operations core
//!
//! This crate provides the value types shared by the insight and roaming
//! engines:
//! - Metrics snapshots from the wireless controller
//! - Environment profiles and thresholds
//! - Severity / scope / category vocabularies
//! - Error handling
//!
//! Everything here is immutable by convention: the engines consume these
//! records and never mutate them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod profile;

pub use error::*;
pub use profile::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A snapshot of current network metrics from the controller.
///
/// Every field is independently optional: absence means "the rule that needs
/// this field does not apply", never "the value is zero".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsSnapshot {
    /// RF Quality Index, 0-100 composite of radio health
    pub rf_quality_index: Option<f64>,
    /// Channel utilization (%)
    pub channel_utilization: Option<f64>,
    /// Interference as a 0-1 fraction
    pub interference: Option<f64>,
    /// Noise floor (dBm)
    pub noise_floor: Option<f64>,
    /// Frame retry rate (%)
    pub retry_rate: Option<f64>,
    /// Connected client count
    pub client_count: Option<u32>,
    /// Total provisioned AP count
    pub ap_count: Option<u32>,
    /// APs currently online
    pub ap_online_count: Option<u32>,
    /// Aggregate throughput (bps)
    pub throughput_bps: Option<f64>,
    /// Average client RSSI (dBm)
    pub avg_rssi: Option<f64>,
    /// Average client SNR (dB)
    pub avg_snr: Option<f64>,
    /// Average latency (ms)
    pub latency_ms: Option<f64>,
    /// When the snapshot was taken
    pub timestamp: Option<DateTime<Utc>>,
}

/// Insight severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational, no action required
    Info = 0,
    /// Degradation worth scheduling work for
    Warning = 1,
    /// Active impact, act now
    Critical = 2,
}

/// Blast radius of an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightScope {
    /// Whole network
    Network,
    /// A single site
    Site,
    /// A single access point
    Ap,
    /// A single client device
    Client,
}

impl InsightScope {
    /// Fixed contribution of scope to the rank score.
    ///
    /// These constants feed the ranking formula and must not change without
    /// re-baselining expected card ordering.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Network => 1.0,
            Self::Site => 0.75,
            Self::Ap => 0.5,
            Self::Client => 0.25,
        }
    }
}

/// Problem domain an insight belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// Composite radio-frequency health
    RfQuality,
    /// Non-WiFi or co-channel interference
    Interference,
    /// Airtime congestion
    ChannelUtilization,
    /// Per-client experience (signal, retries)
    ClientPerformance,
    /// AP reachability
    Connectivity,
    /// Client-per-AP load
    Capacity,
    /// Anything that does not fit the above
    Anomaly,
}

/// Clamp a value into [0, 1]
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
