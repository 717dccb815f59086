//! ═══════════════════════════════════════════════════════════════════════════════
//! SETTLEMENT — Payout Computation on Claim Resolution
//! ═══════════════════════════════════════════════════════════════════════════════
//! When a claim resolves, the losing side's staked points form a pool that
//! winners split in proportion to their stakes. This module computes those
//! shares; recording the status transition and crediting balances belongs to
//! the external persistence layer.
//!
//! Winners keep their own stake and receive `stake / winner_total × pool` on
//! top. With no winning stake the pool goes nowhere (shares are zero).
//! ═══════════════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::model::{Claim, Position, Side};

/// One winner's cut of the loser pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub username: String,
    pub position_id: String,
    /// The winning stake the share was computed from
    pub stake: f64,
    /// Points to credit on top of the returned stake
    pub share: f64,
}

/// Result of settling one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub claim_id: String,
    pub winning_side: Side,
    /// Σ stakes on the losing side, distributed across `payouts`
    pub loser_pool: f64,
    /// Σ stakes on the winning side
    pub winner_total_stake: f64,
    pub payouts: Vec<Payout>,
}

/// Compute payouts for a claim's positions given the winning side.
///
/// Pure arithmetic; does not check claim state. Position order is preserved
/// in the payout list.
pub fn settle(claim_id: &str, positions: &[Position], winning_side: Side) -> Settlement {
    let (winners, losers): (Vec<&Position>, Vec<&Position>) =
        positions.iter().partition(|p| p.side == winning_side);

    let loser_pool: f64 = losers.iter().map(|p| p.stake).sum();
    let winner_total_stake: f64 = winners.iter().map(|p| p.stake).sum();

    let payouts = winners
        .iter()
        .map(|p| {
            let share = if winner_total_stake > 0.0 {
                p.stake / winner_total_stake * loser_pool
            } else {
                0.0
            };
            Payout {
                username: p.username.clone(),
                position_id: p.id.clone(),
                stake: p.stake,
                share,
            }
        })
        .collect();

    Settlement {
        claim_id: claim_id.to_string(),
        winning_side,
        loser_pool,
        winner_total_stake,
        payouts,
    }
}

/// Settle a claim after checking it is actually open.
///
/// Rejects claims that already reached a terminal state; the caller supplies
/// the resolution outcome (manual verdict or oracle evaluation).
pub fn resolve_claim(
    claim: &Claim,
    positions: &[Position],
    outcome: Side,
) -> EngineResult<Settlement> {
    if claim.status.is_resolved() {
        return Err(EngineError::AlreadyResolved(claim.id.clone()));
    }
    Ok(settle(&claim.id, positions, outcome))
}

/// Look up a claim in the snapshot and settle it.
///
/// `all_positions` may span every claim; only positions owned by the claim
/// participate. Fails with `UnknownClaim` when the id is absent.
pub fn resolve_by_id(
    claim_id: &str,
    claims: &[Claim],
    all_positions: &[Position],
    outcome: Side,
) -> EngineResult<Settlement> {
    let claim = claims
        .iter()
        .find(|c| c.id == claim_id)
        .ok_or_else(|| EngineError::UnknownClaim(claim_id.to_string()))?;

    let positions: Vec<Position> = all_positions
        .iter()
        .filter(|p| p.claim_id == claim_id)
        .cloned()
        .collect();

    resolve_claim(claim, &positions, outcome)
}
