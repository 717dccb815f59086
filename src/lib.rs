//! ═══════════════════════════════════════════════════════════════════════════════
//! VERACITY — Position Aggregation & Calibration Analytics Engine
//! ═══════════════════════════════════════════════════════════════════════════════
//! The pure computation core of a belief-staking market: users stake points
//! on binary claims with a declared confidence, and this crate turns the
//! resulting timestamped records into consensus odds, belief-evolution
//! timelines, calibration statistics, per-user accuracy, and leaderboard /
//! feed orderings.
//!
//! Data flows one way: claims, positions and users enter; derived read-only
//! views come out. No I/O, no persistence, no shared mutable state — every
//! function is referentially transparent given its snapshot. The HTTP layer,
//! storage and rendering are external collaborators.
//! ═══════════════════════════════════════════════════════════════════════════════

// ═══════════════════════════════════════════════════════════════════════════════
// FOUNDATION MODULES — records, errors, numeric helpers
// ═══════════════════════════════════════════════════════════════════════════════

pub mod error;
pub mod model;
pub mod stats;

// Re-export common error types
pub use error::{EngineError, EngineResult, ValidationError};

// ═══════════════════════════════════════════════════════════════════════════════
// AGGREGATION — consensus odds and belief evolution
// ═══════════════════════════════════════════════════════════════════════════════

pub mod odds;
pub mod timeline;

// ═══════════════════════════════════════════════════════════════════════════════
// SCORING — calibration and per-user reputation
// ═══════════════════════════════════════════════════════════════════════════════

pub mod calibration;
pub mod reputation;

// ═══════════════════════════════════════════════════════════════════════════════
// ORDERING — leaderboard and feed ranks
// ═══════════════════════════════════════════════════════════════════════════════

pub mod ranking;

// ═══════════════════════════════════════════════════════════════════════════════
// RESOLUTION — settlement payouts and oracle condition evaluation
// ═══════════════════════════════════════════════════════════════════════════════

pub mod oracle;
pub mod settlement;

// ═══════════════════════════════════════════════════════════════════════════════
// MARKET — platform-wide summary figures
// ═══════════════════════════════════════════════════════════════════════════════

pub mod market;

// Re-export core types
pub use calibration::{calibrate, CalibrationBucket};
pub use market::{summarize_market, MarketSummary};
pub use model::{Claim, ClaimStatus, Position, ResolutionMode, Side, User};
pub use odds::{compute_odds, summarize, ClaimSummary, OddsSnapshot};
pub use oracle::{Comparator, OracleCondition};
pub use ranking::{rank_feed, rank_leaderboard, FeedSort};
pub use reputation::{
    aggregate_profile, calculate_accuracy, calculate_category_stats, partition_positions,
    CategoryStats, UserProfile,
};
pub use settlement::{resolve_by_id, resolve_claim, settle, Payout, Settlement};
pub use timeline::{build_timeline, TimelinePoint};
