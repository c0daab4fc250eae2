//! Roaming status classification
//!
//! Pure function of event kind and signal strength, computed once during
//! normalization and stored on the event.

use crate::{RoamStatus, StationEventKind};

/// Signal at or above this is a healthy connection (dBm)
const RSSI_GOOD_DBM: i32 = -60;
/// Signal below this is a poor connection (dBm)
const RSSI_BAD_DBM: i32 = -70;

/// Classify an event. Disconnects are unconditionally bad; otherwise the
/// verdict follows RSSI, and an event without a signal reading defaults to
/// good rather than guessing.
pub fn classify(kind: StationEventKind, rssi: Option<i32>) -> RoamStatus {
    if matches!(kind, StationEventKind::Deregistration | StationEventKind::Disassociate) {
        return RoamStatus::Bad;
    }
    match rssi {
        Some(v) if v >= RSSI_GOOD_DBM => RoamStatus::Good,
        Some(v) if v >= RSSI_BAD_DBM => RoamStatus::Warning,
        Some(_) => RoamStatus::Bad,
        None => RoamStatus::Good,
    }
}
