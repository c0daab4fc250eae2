//! Roaming trail reconstruction
//!
//! Correlates a flat controller event log into a causally ordered trail per
//! client device:
//!
//! ```text
//! RawStationEvent[] → filter + normalize + classify → sort by time
//!                   → band-steering annotation → RoamingEvent[]
//! ```
//!
//! The whole pipeline is total and infallible: irregular records degrade to
//! less-enriched events, never to an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod classify;
pub mod normalize;
pub mod steering;

pub use classify::classify;
pub use normalize::{normalize, DetailsMap};
pub use steering::annotate_band_steering;

/// Display fallback for a missing AP name, applied only at the presentation
/// boundary.
pub const UNKNOWN_AP: &str = "Unknown AP";
/// Display fallback for missing serial/SSID fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Station event types that participate in trail construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationEventKind {
    /// Client moved to a different AP
    Roam,
    /// Client registered with the controller
    Registration,
    /// Client dropped from the controller
    #[serde(rename = "De-registration")]
    Deregistration,
    /// 802.11 association
    Associate,
    /// 802.11 disassociation
    Disassociate,
    /// Controller state machine transition
    #[serde(rename = "State Change")]
    StateChange,
}

impl StationEventKind {
    /// Map a controller event-type string. Anything unrecognized is dropped
    /// before normalization.
    pub fn parse(event_type: &str) -> Option<Self> {
        match event_type {
            "Roam" => Some(Self::Roam),
            "Registration" => Some(Self::Registration),
            "De-registration" => Some(Self::Deregistration),
            "Associate" => Some(Self::Associate),
            "Disassociate" => Some(Self::Disassociate),
            "State Change" => Some(Self::StateChange),
            _ => None,
        }
    }
}

/// Qualitative health of a single trail event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoamStatus {
    Good,
    Warning,
    Bad,
}

/// A raw per-client log record from the wireless controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStationEvent {
    pub timestamp: String,
    pub event_type: String,
    #[serde(default)]
    pub ap_name: Option<String>,
    #[serde(default)]
    pub ap_serial: Option<String>,
    #[serde(default)]
    pub ssid: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub ipv6_address: Option<String>,
}

/// A normalized, classified event in the roaming trail.
///
/// Created once during normalization; the steering pass is the only writer
/// of `is_band_steering`, after which the event is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoamingEvent {
    /// Original controller timestamp string
    pub timestamp: String,
    /// Parsed timestamp used for ordering; absent when the string is in an
    /// unrecognized format
    #[serde(skip)]
    pub occurred_at: Option<DateTime<Utc>>,
    pub kind: StationEventKind,
    pub ap_name: Option<String>,
    pub ap_serial: Option<String>,
    pub ssid: Option<String>,
    pub ip_address: Option<String>,
    pub ipv6_address: Option<String>,
    pub cause: Option<String>,
    pub reason: Option<String>,
    pub code: Option<String>,
    pub status_code: Option<String>,
    pub channel: Option<String>,
    pub band: Option<String>,
    pub auth_method: Option<String>,
    pub rssi: Option<i32>,
    pub status: RoamStatus,
    pub is_band_steering: bool,
}

impl RoamingEvent {
    /// AP name with the presentation fallback applied.
    pub fn ap_name_display(&self) -> &str {
        self.ap_name.as_deref().unwrap_or(UNKNOWN_AP)
    }

    /// AP serial with the presentation fallback applied.
    pub fn ap_serial_display(&self) -> &str {
        self.ap_serial.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// SSID with the presentation fallback applied.
    pub fn ssid_display(&self) -> &str {
        self.ssid.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Build the ordered roaming trail from an unordered controller log.
///
/// Sorts ascending by timestamp before steering detection; detection depends
/// on adjacency in time. Events whose timestamps fail to parse sort after
/// parseable ones, ordered among themselves by the raw string.
pub fn build_trail(raw_events: Vec<RawStationEvent>) -> Vec<RoamingEvent> {
    let total = raw_events.len();
    let mut events: Vec<RoamingEvent> = raw_events.into_iter().filter_map(normalize).collect();
    if events.len() < total {
        tracing::debug!(
            dropped = total - events.len(),
            kept = events.len(),
            "dropped non-trail event types"
        );
    }

    events.sort_by(|a, b| {
        (a.occurred_at.is_none(), a.occurred_at, &a.timestamp)
            .cmp(&(b.occurred_at.is_none(), b.occurred_at, &b.timestamp))
    });

    annotate_band_steering(events)
}
