//! ═══════════════════════════════════════════════════════════════════════════════
//! TIMELINE — Chronological Belief Evolution
//! ═══════════════════════════════════════════════════════════════════════════════
//! Folds a claim's positions in creation order into a sequence of odds
//! snapshots: the consensus as it stood after each stake landed. A synthetic
//! "Start" point anchors the series at the 50/50 prior one millisecond before
//! the first position.
//!
//! Each step recomputes odds over the entire included prefix rather than
//! keeping incremental sums, so every point is produced by the same code
//! path as the live odds (same float summation order, same rounding). n is
//! bounded by the per-claim position count, so the O(n²) walk is fine.
//! ═══════════════════════════════════════════════════════════════════════════════

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::model::Position;
use crate::odds::compute_odds;

/// Label used for the synthetic prior point
const START_LABEL: &str = "Start";

/// One step in a claim's belief evolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Display label: "Start" for the prior, "M/D" otherwise
    pub label: String,
    /// Unix milliseconds; the prior point sits 1ms before the first position
    pub timestamp_ms: i64,
    pub yes_percentage: f64,
    pub no_percentage: f64,
}

/// Build the belief-evolution timeline for one claim's positions.
///
/// Output always has `positions.len() + 1` points for non-empty input and a
/// single sentinel "Start" point (timestamp 0) when there are no positions.
/// Timestamps are non-decreasing; ties keep the original relative order of
/// the positions (stable sort).
pub fn build_timeline(positions: &[Position]) -> Vec<TimelinePoint> {
    if positions.is_empty() {
        return vec![TimelinePoint {
            label: START_LABEL.to_string(),
            timestamp_ms: 0,
            yes_percentage: 50.0,
            no_percentage: 50.0,
        }];
    }

    let mut sorted: Vec<&Position> = positions.iter().collect();
    sorted.sort_by_key(|p| p.created_at);

    let mut points = Vec::with_capacity(sorted.len() + 1);
    points.push(TimelinePoint {
        label: START_LABEL.to_string(),
        timestamp_ms: sorted[0].created_at.timestamp_millis() - 1,
        yes_percentage: 50.0,
        no_percentage: 50.0,
    });

    let mut included: Vec<Position> = Vec::with_capacity(sorted.len());
    for pos in sorted {
        included.push(pos.clone());
        let odds = compute_odds(&included);
        points.push(TimelinePoint {
            label: format!("{}/{}", pos.created_at.month(), pos.created_at.day()),
            timestamp_ms: pos.created_at.timestamp_millis(),
            yes_percentage: odds.yes_percentage,
            no_percentage: odds.no_percentage,
        });
    }

    points
}
