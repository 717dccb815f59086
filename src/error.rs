//! ═══════════════════════════════════════════════════════════════════════════════
//! ERROR — Unified Error Type for the Engine
//! ═══════════════════════════════════════════════════════════════════════════════
//! The engine has almost no failure modes of its own: malformed input is a
//! precondition violation surfaced through `ValidationError`, and only the
//! settlement entry points can fail (unknown or already-resolved claim).
//! Positions referencing an absent claim are silently skipped by the
//! aggregation paths; that policy lives in the aggregators, not here.
//! ═══════════════════════════════════════════════════════════════════════════════

use std::fmt;

/// The unified error type for the engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A claim id was referenced that is not in the supplied snapshot
    UnknownClaim(String),
    /// Attempted to settle a claim that is not active
    AlreadyResolved(String),
    /// Input precondition violation
    Validation(ValidationError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownClaim(id) => write!(f, "Unknown claim: {}", id),
            EngineError::AlreadyResolved(id) => {
                write!(f, "Claim {} is already resolved", id)
            }
            EngineError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {}

/// Input precondition violations
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Stake must be strictly positive
    NonPositiveStake { position_id: String, stake: f64 },
    /// Confidence must lie in [0, 1]
    ConfidenceOutOfRange { position_id: String, confidence: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositiveStake { position_id, stake } => {
                write!(f, "Position {}: stake must be > 0, got {}", position_id, stake)
            }
            ValidationError::ConfidenceOutOfRange {
                position_id,
                confidence,
            } => {
                write!(
                    f,
                    "Position {}: confidence must be in [0, 1], got {}",
                    position_id, confidence
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::Validation(err)
    }
}

/// Type alias for Result with EngineError
pub type EngineResult<T> = Result<T, EngineError>;
