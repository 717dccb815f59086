//! ═══════════════════════════════════════════════════════════════════════════════
//! ODDS — Weighted Consensus From a Claim's Position Set
//! ═══════════════════════════════════════════════════════════════════════════════
//! A position's weight is stake × confidence: a large stake at low confidence
//! moves the needle about as much as a small stake at high confidence.
//!
//! Each side's percentage is rounded to one decimal place independently, so
//! yes + no is not guaranteed to be exactly 100 (three equal-weight positions
//! give 33.3 each). This is the attested behavior of the upstream system and
//! must not be normalized away.
//! ═══════════════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

use crate::model::{Claim, Position, Side};
use crate::stats::round1;

/// Consensus yes/no percentage split for one claim
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsSnapshot {
    pub yes_percentage: f64,
    pub no_percentage: f64,
}

impl OddsSnapshot {
    /// The uninformative prior reported when there is no signal
    pub const EVEN: OddsSnapshot = OddsSnapshot {
        yes_percentage: 50.0,
        no_percentage: 50.0,
    };
}

/// A claim enriched with its derived market figures, ready for feed display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimSummary {
    pub claim: Claim,
    pub yes_percentage: f64,
    pub no_percentage: f64,
    /// Sum of stakes across all positions on this claim
    pub total_staked: f64,
    pub position_count: usize,
}

/// Compute consensus odds from a claim's positions.
///
/// Empty input, or a position set whose weights sum to zero, yields the
/// 50/50 prior. Otherwise each side gets `round(weight / total × 1000) / 10`.
pub fn compute_odds(positions: &[Position]) -> OddsSnapshot {
    let yes_weight: f64 = positions
        .iter()
        .filter(|p| p.side == Side::Yes)
        .map(|p| p.weight())
        .sum();
    let no_weight: f64 = positions
        .iter()
        .filter(|p| p.side == Side::No)
        .map(|p| p.weight())
        .sum();

    let total = yes_weight + no_weight;
    if total == 0.0 {
        return OddsSnapshot::EVEN;
    }

    OddsSnapshot {
        yes_percentage: round1(yes_weight / total * 100.0),
        no_percentage: round1(no_weight / total * 100.0),
    }
}

/// Attach odds, total staked and position count to a claim
pub fn summarize(claim: &Claim, positions: &[Position]) -> ClaimSummary {
    let odds = compute_odds(positions);
    ClaimSummary {
        claim: claim.clone(),
        yes_percentage: odds.yes_percentage,
        no_percentage: odds.no_percentage,
        total_staked: positions.iter().map(|p| p.stake).sum(),
        position_count: positions.len(),
    }
}
