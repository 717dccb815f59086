//! ═══════════════════════════════════════════════════════════════════════════════
//! REPUTATION — Per-User Accuracy and Category Breakdown
//! ═══════════════════════════════════════════════════════════════════════════════
//! Scores a user's track record across resolved claims:
//! - overall accuracy (None until at least one position is scorable — never
//!   coerced to 0, because "no data" and "0% right" rank differently)
//! - per-category correct/total/accuracy, omitting categories with no data
//! - active/resolved partition of the user's positions
//!
//! A position whose claim is absent from the snapshot is not active, so it
//! falls into the resolved partition, but it is skipped by all scoring.
//! ═══════════════════════════════════════════════════════════════════════════════

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::{Claim, ClaimStatus, Position, User};
use crate::stats::whole_percent;

/// Correct/total tally for one claim category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub correct: usize,
    pub total: usize,
    /// round(correct / total × 100)
    pub accuracy: u32,
}

/// A user's aggregated market record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub display_name: String,
    pub points: f64,
    /// None when the user has no scorable resolved positions
    pub accuracy: Option<u32>,
    /// Size of the resolved partition (orphaned positions included)
    pub total_resolved: usize,
    /// Categories with zero resolved positions are absent, not zeroed
    pub category_stats: BTreeMap<String, CategoryStats>,
    pub active_positions: Vec<Position>,
    pub resolved_positions: Vec<Position>,
}

fn claim_map(claims: &[Claim]) -> HashMap<&str, &Claim> {
    claims.iter().map(|c| (c.id.as_str(), c)).collect()
}

/// Split positions into (active, resolved), preserving input order within
/// each partition. Active means the owning claim exists and is still open;
/// everything else — resolved claims and orphaned references — is resolved.
pub fn partition_positions(
    positions: &[Position],
    claims: &[Claim],
) -> (Vec<Position>, Vec<Position>) {
    let by_id = claim_map(claims);
    let mut active = Vec::new();
    let mut resolved = Vec::new();

    for pos in positions {
        let is_active = by_id
            .get(pos.claim_id.as_str())
            .map(|c| c.status == ClaimStatus::Active)
            .unwrap_or(false);
        if is_active {
            active.push(pos.clone());
        } else {
            resolved.push(pos.clone());
        }
    }

    (active, resolved)
}

/// Overall prediction accuracy across resolved claims.
///
/// Positions on missing or still-active claims are skipped. Returns None
/// when nothing is scorable.
pub fn calculate_accuracy(positions: &[Position], claims: &[Claim]) -> Option<u32> {
    let by_id = claim_map(claims);
    let mut correct = 0usize;
    let mut total = 0usize;

    for pos in positions {
        let resolved_side = by_id
            .get(pos.claim_id.as_str())
            .and_then(|c| c.resolved_side());
        let Some(side) = resolved_side else {
            continue;
        };
        total += 1;
        if pos.side == side {
            correct += 1;
        }
    }

    if total > 0 {
        Some(whole_percent(correct as f64 / total as f64))
    } else {
        None
    }
}

/// Accuracy broken down by the owning claim's category.
///
/// Only scorable positions contribute; a category the user has no resolved
/// positions in does not appear in the map at all.
pub fn calculate_category_stats(
    positions: &[Position],
    claims: &[Claim],
) -> BTreeMap<String, CategoryStats> {
    let by_id = claim_map(claims);
    let mut tallies: BTreeMap<String, (usize, usize)> = BTreeMap::new();

    for pos in positions {
        let Some(claim) = by_id.get(pos.claim_id.as_str()) else {
            continue;
        };
        let Some(resolved_side) = claim.resolved_side() else {
            continue;
        };
        let entry = tallies.entry(claim.category.clone()).or_insert((0, 0));
        entry.1 += 1;
        if pos.side == resolved_side {
            entry.0 += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(category, (correct, total))| {
            let accuracy = if total > 0 {
                whole_percent(correct as f64 / total as f64)
            } else {
                0
            };
            (
                category,
                CategoryStats {
                    correct,
                    total,
                    accuracy,
                },
            )
        })
        .collect()
}

/// Assemble a user's full profile from the market snapshot.
///
/// `all_positions` may span every user; only this user's positions are
/// considered.
pub fn aggregate_profile(user: &User, all_positions: &[Position], claims: &[Claim]) -> UserProfile {
    let positions: Vec<Position> = all_positions
        .iter()
        .filter(|p| p.username == user.username)
        .cloned()
        .collect();

    let (active, resolved) = partition_positions(&positions, claims);

    UserProfile {
        username: user.username.clone(),
        display_name: user.display_name.clone(),
        points: user.points,
        accuracy: calculate_accuracy(&positions, claims),
        total_resolved: resolved.len(),
        category_stats: calculate_category_stats(&positions, claims),
        active_positions: active,
        resolved_positions: resolved,
    }
}
