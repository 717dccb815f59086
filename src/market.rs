//! ═══════════════════════════════════════════════════════════════════════════════
//! MARKET — Platform-Wide Summary Statistics
//! ═══════════════════════════════════════════════════════════════════════════════
//! Rolls a full claims + positions snapshot into the figures the analytics
//! surface shows: total value locked, claim counts, category distribution,
//! and an overall sentiment gauge (the weighted yes-share across every
//! position on a still-open claim, as a whole percent; 50 when no signal).
//! ═══════════════════════════════════════════════════════════════════════════════

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::model::{Claim, ClaimStatus, Position, Side};
use crate::stats::whole_percent;

/// Snapshot-wide derived figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    /// Σ stakes across all positions (TVL in points)
    pub total_staked: f64,
    pub active_claims: usize,
    pub resolved_claims: usize,
    pub position_count: usize,
    /// Claims per category, all statuses
    pub category_counts: BTreeMap<String, usize>,
    /// Weighted yes-share over positions on active claims, whole percent
    pub sentiment: u32,
}

/// Summarize the whole market snapshot.
pub fn summarize_market(claims: &[Claim], positions: &[Position]) -> MarketSummary {
    let active_claims = claims
        .iter()
        .filter(|c| c.status == ClaimStatus::Active)
        .count();

    let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
    for claim in claims {
        *category_counts.entry(claim.category.clone()).or_insert(0) += 1;
    }

    let active_ids: HashSet<&str> = claims
        .iter()
        .filter(|c| c.status == ClaimStatus::Active)
        .map(|c| c.id.as_str())
        .collect();

    let mut yes_weight = 0.0;
    let mut total_weight = 0.0;
    for pos in positions {
        if !active_ids.contains(pos.claim_id.as_str()) {
            continue;
        }
        let w = pos.weight();
        total_weight += w;
        if pos.side == Side::Yes {
            yes_weight += w;
        }
    }
    let sentiment = if total_weight > 0.0 {
        whole_percent(yes_weight / total_weight)
    } else {
        50
    };

    MarketSummary {
        total_staked: positions.iter().map(|p| p.stake).sum(),
        active_claims,
        resolved_claims: claims.len() - active_claims,
        position_count: positions.len(),
        category_counts,
        sentiment,
    }
}
