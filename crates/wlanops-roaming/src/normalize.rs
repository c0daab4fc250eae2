//! Station-event normalization
//!
//! Controller logs pack the interesting attributes into a free-text `details`
//! field as repeated `Key[Value]` tokens, e.g.
//! `"Signal[-67] Cause[Roam] Channel[36] Band[5GHz]"`. The tokenizer scans
//! for those tokens and ignores everything else; malformed input yields a
//! partial or empty map, never an error.

use crate::{RawStationEvent, RoamingEvent, StationEventKind};
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\w+)\[([^\]]*)\]").expect("details token pattern"))
}

/// Parsed `Key[Value]` attributes from a `details` string.
#[derive(Debug, Default)]
pub struct DetailsMap(HashMap<String, String>);

impl DetailsMap {
    /// Scan `details` for `Key[Value]` tokens. Unmatched text is ignored.
    pub fn parse(details: &str) -> Self {
        let mut map = HashMap::new();
        for caps in token_re().captures_iter(details) {
            // First occurrence of a key wins
            map.entry(caps[1].to_string())
                .or_insert_with(|| caps[2].to_string());
        }
        Self(map)
    }

    /// Look up a single key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// First present key wins, in the given precedence order.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.get(k))
    }

    /// RSSI with `Signal` > `RSS` > `RSSI` precedence. A present but
    /// non-integer value is skipped, not treated as zero.
    pub fn rssi(&self) -> Option<i32> {
        ["Signal", "RSS", "RSSI"]
            .iter()
            .filter_map(|k| self.get(k))
            .find_map(|v| v.trim().parse::<i32>().ok())
    }

    /// Number of parsed attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no tokens were recognized.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parse a controller timestamp: RFC 3339 first, then the bare log format.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Normalize one raw event into a classified roaming event.
///
/// Returns `None` for event types that do not participate in trail
/// construction. Everything else degrades gracefully: a garbled `details`
/// string just leaves the parsed fields absent.
pub fn normalize(raw: RawStationEvent) -> Option<RoamingEvent> {
    let kind = StationEventKind::parse(&raw.event_type)?;
    let details = raw.details.as_deref().map(DetailsMap::parse).unwrap_or_default();

    let rssi = details.rssi();
    let status = crate::classify::classify(kind, rssi);
    let occurred_at = parse_timestamp(&raw.timestamp);

    Some(RoamingEvent {
        timestamp: raw.timestamp,
        occurred_at,
        kind,
        ap_name: raw.ap_name,
        ap_serial: raw.ap_serial,
        ssid: raw.ssid,
        ip_address: raw.ip_address,
        ipv6_address: raw.ipv6_address,
        cause: details.get("Cause").map(str::to_string),
        reason: details.get("Reason").map(str::to_string),
        code: details.get("Code").map(str::to_string),
        status_code: details.get("Status").map(str::to_string),
        channel: details.get("Channel").map(str::to_string),
        band: details.get("Band").map(str::to_string),
        auth_method: details.first_of(&["Auth", "AuthMethod"]).map(str::to_string),
        rssi,
        status,
        is_band_steering: false,
    })
}
