//! Weighted insight ranking
//!
//! Score = 0.40*impact + 0.25*confidence + 0.15*recurrence + 0.20*scope.
//! The weights are fixed; card ordering downstream depends on them exactly.

use crate::{InsightCandidate, InsightCard};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Weight of the impact input
pub const IMPACT_WEIGHT: f64 = 0.40;
/// Weight of the confidence input
pub const CONFIDENCE_WEIGHT: f64 = 0.25;
/// Weight of the recurrence input
pub const RECURRENCE_WEIGHT: f64 = 0.15;
/// Weight of the scope contribution
pub const SCOPE_WEIGHT: f64 = 0.20;

/// Cards expire a day after generation unless refreshed by a newer run
const CARD_TTL_HOURS: i64 = 24;

/// Compute the rank score for a candidate. Pure function of the four inputs.
#[inline]
pub fn rank_score(candidate: &InsightCandidate) -> f64 {
    IMPACT_WEIGHT * candidate.impact
        + CONFIDENCE_WEIGHT * candidate.confidence
        + RECURRENCE_WEIGHT * candidate.recurrence
        + SCOPE_WEIGHT * candidate.scope.weight()
}

/// Score candidates and return cards sorted descending by rank score.
///
/// The sort is stable: equal scores keep the order the rules were evaluated
/// in. `now` stamps identity fields only and never influences scoring.
pub fn rank_candidates(candidates: Vec<InsightCandidate>, now: DateTime<Utc>) -> Vec<InsightCard> {
    let mut cards: Vec<InsightCard> = candidates
        .into_iter()
        .map(|c| {
            let score = rank_score(&c);
            InsightCard {
                id: Uuid::new_v4(),
                title: c.title,
                rationale: c.rationale,
                evidence: c.evidence,
                recommendation: c.recommendation,
                category: c.category,
                severity: c.severity,
                scope: c.scope,
                impact: c.impact,
                confidence: c.confidence,
                recurrence: c.recurrence,
                rank_score: score,
                created_at: now,
                expires_at: Some(now + Duration::hours(CARD_TTL_HOURS)),
            }
        })
        .collect();

    cards.sort_by(|a, b| b.rank_score.total_cmp(&a.rank_score));
    cards
}
