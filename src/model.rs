//! ═══════════════════════════════════════════════════════════════════════════════
//! MODEL — Claims, Positions, Users
//! ═══════════════════════════════════════════════════════════════════════════════
//! The record types the engine computes over. All of them are owned by the
//! external persistence layer; the engine borrows immutable snapshots and
//! never retains references across calls.
//!
//! Invariants the caller guarantees (checked by `Position::validate`):
//! - stake > 0
//! - confidence ∈ [0, 1] (the staking form constrains it to [0.50, 0.99])
//! - `resolved_at` is set iff the claim status is terminal
//! ═══════════════════════════════════════════════════════════════════════════════

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineResult, ValidationError};
use crate::oracle::OracleCondition;

/// Which side of a binary claim a position backs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Yes,
    No,
}

impl Side {
    /// The opposing side
    pub fn opposite(self) -> Self {
        match self {
            Side::Yes => Side::No,
            Side::No => Side::Yes,
        }
    }
}

/// Lifecycle state of a claim. Transitions exactly once from `Active` to one
/// of the terminal states; immutable otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Active,
    ResolvedYes,
    ResolvedNo,
}

impl ClaimStatus {
    pub fn is_resolved(self) -> bool {
        !matches!(self, ClaimStatus::Active)
    }

    /// The winning side, if the claim has reached a terminal state
    pub fn resolved_side(self) -> Option<Side> {
        match self {
            ClaimStatus::Active => None,
            ClaimStatus::ResolvedYes => Some(Side::Yes),
            ClaimStatus::ResolvedNo => Some(Side::No),
        }
    }
}

/// How a claim gets resolved: by a human resolver or by an oracle condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    Manual,
    Oracle,
}

/// A binary proposition users stake on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free-form tag used for per-category accuracy breakdowns
    pub category: String,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    /// Set iff `status` is terminal
    pub resolved_at: Option<DateTime<Utc>>,
    /// Creator identity, when known
    pub created_by: Option<String>,
    pub resolution_mode: Option<ResolutionMode>,
    /// Present only for oracle-resolved claims
    pub oracle_condition: Option<OracleCondition>,
}

impl Claim {
    /// The winning side, if resolved
    pub fn resolved_side(&self) -> Option<Side> {
        self.status.resolved_side()
    }
}

/// A single user's stake + confidence declaration on one side of a claim.
/// Positions are never edited or deleted once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub claim_id: String,
    pub username: String,
    pub side: Side,
    /// Points staked, strictly positive
    pub stake: f64,
    /// Stated subjective probability that `side` is correct, in [0, 1]
    pub confidence: f64,
    pub created_at: DateTime<Utc>,
    pub reasoning: Option<String>,
}

impl Position {
    /// Aggregation weight of this position
    pub fn weight(&self) -> f64 {
        self.stake * self.confidence
    }

    /// Check the stake/confidence preconditions the caller must guarantee.
    /// Aggregation itself does not re-check; this is the boundary guard.
    pub fn validate(&self) -> EngineResult<()> {
        if !(self.stake > 0.0) {
            return Err(ValidationError::NonPositiveStake {
                position_id: self.id.clone(),
                stake: self.stake,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(ValidationError::ConfidenceOutOfRange {
                position_id: self.id.clone(),
                confidence: self.confidence,
            }
            .into());
        }
        Ok(())
    }
}

/// A market participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique handle or wallet address
    pub username: String,
    pub display_name: String,
    pub points: f64,
    pub created_at: DateTime<Utc>,
}
