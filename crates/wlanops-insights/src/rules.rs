//! Insight rule evaluation
//!
//! The rule set is a fixed, declarative table of independent, stateless
//! functions. A rule fires only when every metric field it needs is present
//! and its condition holds; missing fields silently skip the rule.

use crate::{InsightCandidate, InsightEvidence};
use wlanops_common::{
    clamp_unit, InsightCategory, InsightScope, MetricsSnapshot, Severity, Thresholds,
};

/// A single insight rule: snapshot + thresholds + profile name in, at most
/// one candidate out.
pub type RuleFn = fn(&MetricsSnapshot, &Thresholds, &str) -> Option<InsightCandidate>;

/// The fixed rule table, iterated uniformly by [`evaluate`].
pub const RULES: &[RuleFn] = &[
    rf_quality_low,
    channel_utilization_high,
    interference_high,
    retry_rate_high,
    ap_connectivity_loss,
    client_density_high,
    weak_client_signal,
];

/// Evaluate every rule against the snapshot. Never errors, never mutates.
pub fn evaluate(
    metrics: &MetricsSnapshot,
    thresholds: &Thresholds,
    profile: &str,
) -> Vec<InsightCandidate> {
    RULES
        .iter()
        .filter_map(|rule| rule(metrics, thresholds, profile))
        .collect()
}

fn evidence(label: &str, value: f64, unit: Option<&str>, metric: &str, metrics: &MetricsSnapshot) -> InsightEvidence {
    InsightEvidence {
        label: label.to_string(),
        value,
        unit: unit.map(str::to_string),
        metric: Some(metric.to_string()),
        timestamp: metrics.timestamp,
        source: Some("controller".to_string()),
    }
}

fn rf_quality_low(m: &MetricsSnapshot, t: &Thresholds, profile: &str) -> Option<InsightCandidate> {
    let rfqi = m.rf_quality_index?;
    if rfqi >= t.rfqi_poor {
        return None;
    }
    let severity = if rfqi < 0.7 * t.rfqi_poor {
        Severity::Critical
    } else {
        Severity::Warning
    };
    Some(InsightCandidate {
        title: "RF quality below profile floor".to_string(),
        rationale: format!(
            "RF Quality Index is {rfqi:.0}, below the {profile} profile floor of {:.0} \
             (target {:.0}).",
            t.rfqi_poor, t.rfqi_target
        ),
        evidence: vec![
            evidence("RF Quality Index", rfqi, None, "rfQualityIndex", m),
            evidence("Profile floor", t.rfqi_poor, None, "rfqiPoor", m),
        ],
        recommendation: "Run an RF scan on the affected site and review channel plan and \
                         transmit power before clients report it."
            .to_string(),
        category: InsightCategory::RfQuality,
        severity,
        scope: InsightScope::Site,
        impact: clamp_unit(1.0 - rfqi / 100.0),
        confidence: 0.9,
        recurrence: 0.6,
    })
}

fn channel_utilization_high(
    m: &MetricsSnapshot,
    t: &Thresholds,
    profile: &str,
) -> Option<InsightCandidate> {
    let util = m.channel_utilization?;
    let limit = t.channel_utilization_pct;
    if util <= limit {
        return None;
    }
    Some(InsightCandidate {
        title: "Channel utilization above profile limit".to_string(),
        rationale: format!(
            "Channel utilization is {util:.0}%, above the {limit:.0}% limit for the \
             {profile} profile. Airtime contention will degrade all clients on the channel."
        ),
        evidence: vec![
            evidence("Channel utilization", util, Some("%"), "channelUtilization", m),
            evidence("Profile limit", limit, Some("%"), "channelUtilizationPct", m),
        ],
        recommendation: "Rebalance channel assignments or enable additional channels; \
                         consider narrowing channel width in dense areas."
            .to_string(),
        category: InsightCategory::ChannelUtilization,
        severity: Severity::Warning,
        scope: InsightScope::Site,
        impact: clamp_unit((util - limit) / (100.0 - limit)),
        confidence: 0.85,
        recurrence: 0.7,
    })
}

fn interference_high(m: &MetricsSnapshot, t: &Thresholds, profile: &str) -> Option<InsightCandidate> {
    let interference = m.interference?;
    let limit = t.interference_high;
    if interference <= limit {
        return None;
    }
    Some(InsightCandidate {
        title: "High RF interference".to_string(),
        rationale: format!(
            "Measured interference fraction is {interference:.2}, above the {limit:.2} \
             threshold for the {profile} profile."
        ),
        evidence: vec![
            evidence("Interference", interference, None, "interference", m),
            evidence("Profile threshold", limit, None, "interferenceHigh", m),
        ],
        recommendation: "Identify non-WiFi interferers (spectrum analysis) and move affected \
                         radios off the impacted channels."
            .to_string(),
        category: InsightCategory::Interference,
        severity: Severity::Warning,
        scope: InsightScope::Site,
        // 0.3 above threshold saturates impact
        impact: clamp_unit((interference - limit) / 0.3),
        confidence: 0.8,
        recurrence: 0.6,
    })
}

fn retry_rate_high(m: &MetricsSnapshot, t: &Thresholds, profile: &str) -> Option<InsightCandidate> {
    let retry = m.retry_rate?;
    let limit = t.retry_rate_pct;
    if retry <= limit {
        return None;
    }
    Some(InsightCandidate {
        title: "Excessive frame retry rate".to_string(),
        rationale: format!(
            "Frame retry rate is {retry:.1}%, above the {limit:.1}% limit for the {profile} \
             profile. Retries consume airtime and add latency for every client."
        ),
        evidence: vec![
            evidence("Retry rate", retry, Some("%"), "retryRate", m),
            evidence("Profile limit", limit, Some("%"), "retryRatePct", m),
        ],
        recommendation: "Check for co-channel interference and low-SNR clients on the \
                         affected AP; lower minimum data rates if legacy clients linger."
            .to_string(),
        category: InsightCategory::ClientPerformance,
        severity: Severity::Warning,
        scope: InsightScope::Ap,
        // 20 points above threshold saturates impact
        impact: clamp_unit((retry - limit) / 20.0),
        confidence: 0.85,
        recurrence: 0.5,
    })
}

fn ap_connectivity_loss(
    m: &MetricsSnapshot,
    _t: &Thresholds,
    profile: &str,
) -> Option<InsightCandidate> {
    let total = m.ap_count?;
    let online = m.ap_online_count?;
    if total == 0 {
        return None;
    }
    let offline = total.saturating_sub(online);
    let offline_pct = offline as f64 * 100.0 / total as f64;
    if offline == 0 || offline_pct <= 5.0 {
        return None;
    }
    let severity = if offline_pct > 20.0 {
        Severity::Critical
    } else {
        Severity::Warning
    };
    Some(InsightCandidate {
        title: "Access points offline".to_string(),
        rationale: format!(
            "{offline} of {total} access points are offline ({offline_pct:.0}%) in this \
             {profile} deployment. Coverage holes are likely."
        ),
        evidence: vec![
            evidence("APs offline", offline as f64, None, "apOfflineCount", m),
            evidence("APs total", total as f64, None, "apCount", m),
        ],
        recommendation: "Verify PoE budget and uplink switches for the offline APs; check \
                         for a common switch or power failure."
            .to_string(),
        category: InsightCategory::Connectivity,
        severity,
        scope: InsightScope::Site,
        // 30% offline saturates impact
        impact: clamp_unit(offline_pct / 30.0),
        // Direct count, not an inference
        confidence: 1.0,
        recurrence: 0.4,
    })
}

fn client_density_high(
    m: &MetricsSnapshot,
    t: &Thresholds,
    profile: &str,
) -> Option<InsightCandidate> {
    let clients = m.client_count?;
    let online = m.ap_online_count?;
    if online == 0 {
        return None;
    }
    let per_ap = clients as f64 / online as f64;
    let target = t.client_density_target;
    if per_ap <= 1.2 * target {
        return None;
    }
    Some(InsightCandidate {
        title: "Client density above profile target".to_string(),
        rationale: format!(
            "Average of {per_ap:.1} clients per online AP, against a target of {target:.0} \
             for the {profile} profile."
        ),
        evidence: vec![
            evidence("Clients per AP", per_ap, None, "clientsPerAp", m),
            evidence("Profile target", target, None, "clientDensityTarget", m),
        ],
        recommendation: "Plan additional AP capacity or enable load balancing across \
                         neighboring APs."
            .to_string(),
        category: InsightCategory::Capacity,
        severity: Severity::Info,
        scope: InsightScope::Site,
        impact: clamp_unit((per_ap - target) / target),
        confidence: 0.9,
        recurrence: 0.5,
    })
}

fn weak_client_signal(
    m: &MetricsSnapshot,
    _t: &Thresholds,
    profile: &str,
) -> Option<InsightCandidate> {
    let rssi = m.avg_rssi?;
    if rssi >= -75.0 {
        return None;
    }
    let severity = if rssi < -80.0 {
        Severity::Warning
    } else {
        Severity::Info
    };
    Some(InsightCandidate {
        title: "Weak average client signal".to_string(),
        rationale: format!(
            "Average client RSSI is {rssi:.0} dBm in this {profile} deployment; clients at \
             the cell edge will see poor throughput and sticky-roaming behavior."
        ),
        evidence: vec![evidence("Average RSSI", rssi, Some("dBm"), "avgRssi", m)],
        recommendation: "Review AP placement and minimum RSSI settings; consider enabling \
                         802.11k/v to encourage clients to roam earlier."
            .to_string(),
        category: InsightCategory::ClientPerformance,
        severity,
        scope: InsightScope::Client,
        // 15 dB below -75 saturates impact
        impact: clamp_unit((-75.0 - rssi) / 15.0),
        confidence: 0.75,
        recurrence: 0.5,
    })
}
