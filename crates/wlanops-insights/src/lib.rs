//! Insight engine
//!
//! Turns a metrics snapshot plus an environment profile into a ranked list of
//! insight cards:
//!
//! ```text
//! snapshot + thresholds → rule evaluation → weighted ranking → InsightCard[]
//! ```
//!
//! Every stage is a pure function over its inputs. The only fallible step is
//! resolving the profile name; everything downstream degrades to "fewer
//! insights" rather than erroring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wlanops_common::{
    InsightCategory, InsightScope, MetricsSnapshot, Severity, Thresholds, WlanOpsResult,
};

pub mod rank;
pub mod rules;

pub use rank::rank_candidates;
pub use rules::evaluate;

/// A labeled fact attached to an insight to justify it.
///
/// `timestamp`, when present, references the originating snapshot's clock so
/// the consumer can correlate evidence to a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightEvidence {
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// An unscored insight produced by a single fired rule.
///
/// Carries the three ranking inputs but not the rank score; scoring belongs
/// exclusively to the ranker.
#[derive(Debug, Clone)]
pub struct InsightCandidate {
    pub title: String,
    pub rationale: String,
    pub evidence: Vec<InsightEvidence>,
    pub recommendation: String,
    pub category: InsightCategory,
    pub severity: Severity,
    pub scope: InsightScope,
    /// How badly the condition hurts, 0-1
    pub impact: f64,
    /// How directly the metric maps to the symptom, 0-1
    pub confidence: f64,
    /// How often this condition tends to persist or recur, 0-1
    pub recurrence: f64,
}

/// A ranked, displayable insight card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightCard {
    pub id: Uuid,
    pub title: String,
    pub rationale: String,
    pub evidence: Vec<InsightEvidence>,
    pub recommendation: String,
    pub category: InsightCategory,
    pub severity: Severity,
    pub scope: InsightScope,
    pub impact: f64,
    pub confidence: f64,
    pub recurrence: f64,
    /// Weighted rank score; recomputed by the ranker, never set by a rule
    pub rank_score: f64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Generate ranked insights for a snapshot under a named environment profile.
///
/// `now` is injected so the pipeline stays deterministic under test; scoring
/// and ordering never read the clock.
pub fn generate_insights(
    metrics: &MetricsSnapshot,
    profile: &str,
    now: DateTime<Utc>,
) -> WlanOpsResult<Vec<InsightCard>> {
    let thresholds = Thresholds::for_profile(profile)?;
    let candidates = rules::evaluate(metrics, &thresholds, profile);
    tracing::debug!(profile, fired = candidates.len(), "evaluated insight rules");
    Ok(rank::rank_candidates(candidates, now))
}

/// Convenience wrapper using the system clock.
pub fn generate_insights_now(
    metrics: &MetricsSnapshot,
    profile: &str,
) -> WlanOpsResult<Vec<InsightCard>> {
    generate_insights(metrics, profile, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        let snap = MetricsSnapshot {
            rf_quality_index: Some(10.0),
            ..Default::default()
        };
        assert!(generate_insights(&snap, "submarine", fixed_now()).is_err());
    }

    #[test]
    fn test_empty_snapshot_yields_no_insights() {
        let cards = generate_insights(&MetricsSnapshot::default(), "office", fixed_now()).unwrap();
        assert!(cards.is_empty());
    }

    // End-to-end scenario: rfqi 50 / utilization 90 / 9 of 10 APs online
    // against the campus profile (rfqi floor 70, utilization limit 80).
    #[test]
    fn test_end_to_end_scores_match_weighted_formula() {
        let snap = MetricsSnapshot {
            rf_quality_index: Some(50.0),
            channel_utilization: Some(90.0),
            ap_count: Some(10),
            ap_online_count: Some(9),
            ..Default::default()
        };
        let cards = generate_insights(&snap, "campus", fixed_now()).unwrap();
        assert!(cards.len() >= 2);

        let rf = cards
            .iter()
            .find(|c| c.category == InsightCategory::RfQuality)
            .expect("rf quality card");
        let cu = cards
            .iter()
            .find(|c| c.category == InsightCategory::ChannelUtilization)
            .expect("channel utilization card");

        // rfqi 50 is below the floor of 70 but not below 0.7*70 = 49
        assert_eq!(rf.severity, Severity::Warning);

        // impact 1 - 50/100 = 0.5, confidence 0.9, recurrence 0.6, SITE 0.75
        let rf_expected = 0.40 * 0.5 + 0.25 * 0.9 + 0.15 * 0.6 + 0.20 * 0.75;
        assert!((rf.rank_score - rf_expected).abs() < 1e-12);

        // impact (90-80)/(100-80) = 0.5, confidence 0.85, recurrence 0.7
        let cu_expected = 0.40 * 0.5 + 0.25 * 0.85 + 0.15 * 0.7 + 0.20 * 0.75;
        assert!((cu.rank_score - cu_expected).abs() < 1e-12);

        // 0.6675 vs 0.665: utilization edges out RF quality
        assert!(cu_expected > rf_expected);
        let cu_pos = cards
            .iter()
            .position(|c| c.category == InsightCategory::ChannelUtilization)
            .unwrap();
        let rf_pos = cards
            .iter()
            .position(|c| c.category == InsightCategory::RfQuality)
            .unwrap();
        assert!(cu_pos < rf_pos);
    }

    #[test]
    fn test_cards_carry_injected_clock() {
        let snap = MetricsSnapshot {
            rf_quality_index: Some(20.0),
            ..Default::default()
        };
        let cards = generate_insights(&snap, "retail", fixed_now()).unwrap();
        assert!(!cards.is_empty());
        for card in &cards {
            assert_eq!(card.created_at, fixed_now());
        }
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let snap = MetricsSnapshot {
            rf_quality_index: Some(20.0),
            ..Default::default()
        };
        let cards = generate_insights(&snap, "retail", fixed_now()).unwrap();
        let json = serde_json::to_value(&cards[0]).unwrap();
        assert!(json.get("rankScore").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
