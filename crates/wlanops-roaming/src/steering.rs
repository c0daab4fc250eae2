//! Band-steering detection
//!
//! A transition that stays on the same access point but changes band or
//! channel is the AP steering the client between its own radios, not a roam.
//! The pass only ever compares an event to its immediate predecessor; that
//! adjacency-only behavior is a contract with the timeline view, not an
//! implementation shortcut.

use crate::RoamingEvent;

/// Annotate a time-sorted trail with band-steering flags.
///
/// Consumes and returns the vector so concurrent callers never share a
/// mutably-annotated slice. The first event is never marked. When band and
/// channel are both absent on either side of a pair, the transition is left
/// unmarked: ambiguous data is treated as "not band steering".
pub fn annotate_band_steering(mut events: Vec<RoamingEvent>) -> Vec<RoamingEvent> {
    for i in 1..events.len() {
        let (head, tail) = events.split_at_mut(i);
        let prev = &head[i - 1];
        let curr = &mut tail[0];
        curr.is_band_steering = same_ap(prev, curr) && radio_changed(prev, curr);
    }
    events
}

fn same_ap(prev: &RoamingEvent, curr: &RoamingEvent) -> bool {
    both_equal(&prev.ap_name, &curr.ap_name) || both_equal(&prev.ap_serial, &curr.ap_serial)
}

fn radio_changed(prev: &RoamingEvent, curr: &RoamingEvent) -> bool {
    both_differ(&prev.band, &curr.band) || both_differ(&prev.channel, &curr.channel)
}

fn both_equal(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

fn both_differ(a: &Option<String>, b: &Option<String>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x != y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RoamStatus, StationEventKind};

    fn event(ap: &str, band: Option<&str>, channel: Option<&str>) -> RoamingEvent {
        RoamingEvent {
            timestamp: String::new(),
            occurred_at: None,
            kind: StationEventKind::Roam,
            ap_name: Some(ap.to_string()),
            ap_serial: None,
            ssid: None,
            ip_address: None,
            ipv6_address: None,
            cause: None,
            reason: None,
            code: None,
            status_code: None,
            channel: channel.map(str::to_string),
            band: band.map(str::to_string),
            auth_method: None,
            rssi: None,
            status: RoamStatus::Good,
            is_band_steering: false,
        }
    }

    #[test]
    fn test_same_ap_band_change_is_steering() {
        let trail = annotate_band_steering(vec![
            event("A1", Some("5GHz"), None),
            event("A1", Some("2.4GHz"), None),
            event("A2", Some("5GHz"), None),
        ]);
        assert!(!trail[0].is_band_steering);
        assert!(trail[1].is_band_steering);
        assert!(!trail[2].is_band_steering); // different AP: a real roam
    }

    #[test]
    fn test_channel_change_alone_is_steering() {
        let trail = annotate_band_steering(vec![
            event("A1", None, Some("36")),
            event("A1", None, Some("149")),
        ]);
        assert!(trail[1].is_band_steering);
    }

    #[test]
    fn test_absent_band_and_channel_is_never_steering() {
        let trail = annotate_band_steering(vec![
            event("A1", None, None),
            event("A1", None, None),
        ]);
        assert!(!trail[1].is_band_steering);
    }

    #[test]
    fn test_ap_serial_matches_when_names_absent() {
        let mut a = event("ignored", Some("5GHz"), None);
        a.ap_name = None;
        a.ap_serial = Some("SN1".to_string());
        let mut b = event("ignored", Some("2.4GHz"), None);
        b.ap_name = None;
        b.ap_serial = Some("SN1".to_string());

        let trail = annotate_band_steering(vec![a, b]);
        assert!(trail[1].is_band_steering);
    }

    #[test]
    fn test_adjacency_only_no_look_back() {
        // A1/5GHz, A2/5GHz, A1/2.4GHz: the third event changed band relative
        // to the first, but its immediate predecessor is a different AP.
        let trail = annotate_band_steering(vec![
            event("A1", Some("5GHz"), None),
            event("A2", Some("5GHz"), None),
            event("A1", Some("2.4GHz"), None),
        ]);
        assert!(!trail[2].is_band_steering);
    }

    #[test]
    fn test_first_event_never_marked() {
        let trail = annotate_band_steering(vec![event("A1", Some("5GHz"), Some("36"))]);
        assert!(!trail[0].is_band_steering);
    }

    #[test]
    fn test_same_band_same_channel_not_steering() {
        let trail = annotate_band_steering(vec![
            event("A1", Some("5GHz"), Some("36")),
            event("A1", Some("5GHz"), Some("36")),
        ]);
        assert!(!trail[1].is_band_steering);
    }
}
