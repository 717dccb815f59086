//! ═══════════════════════════════════════════════════════════════════════════════
//! CALIBRATION — Stated Confidence vs Realized Accuracy
//! ═══════════════════════════════════════════════════════════════════════════════
//! A well-calibrated predictor saying "70% confident" should be right ~70%
//! of the time. This module buckets a user's resolved positions into five
//! fixed confidence bands and reports actual accuracy against average stated
//! confidence per band.
//!
//! Band bounds are inclusive on both ends: [0.50,0.59] ... [0.90,0.99].
//! A confidence outside [0.50, 0.99] — including exactly 1.0, and values in
//! the gaps between bands — joins no bucket. The staking form constrains
//! confidence to two decimals in [0.50, 0.99], so in practice every scored
//! position lands in exactly one band.
//! ═══════════════════════════════════════════════════════════════════════════════

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Claim, Position};
use crate::stats::{mean, whole_percent};

/// The five fixed confidence bands: (min, max, label)
const BUCKET_BOUNDS: [(f64, f64, &str); 5] = [
    (0.50, 0.59, "50-59%"),
    (0.60, 0.69, "60-69%"),
    (0.70, 0.79, "70-79%"),
    (0.80, 0.89, "80-89%"),
    (0.90, 0.99, "90-99%"),
];

/// Actual-vs-stated accuracy for one confidence band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationBucket {
    /// Inclusive lower confidence bound
    pub min: f64,
    /// Inclusive upper confidence bound
    pub max: f64,
    pub label: String,
    /// Scored positions in this band. 0 means "no data", which is distinct
    /// from a band with real 0% accuracy.
    pub total: usize,
    pub correct: usize,
    /// round(correct / total × 100); 0 when the band is empty
    pub accuracy: u32,
    /// round(mean(confidence) × 100); band midpoint when empty (display
    /// placeholder only, not a statistic)
    pub avg_confidence: u32,
}

impl CalibrationBucket {
    pub fn has_data(&self) -> bool {
        self.total > 0
    }
}

/// Score the user's resolved positions and partition them into the five
/// confidence bands.
///
/// A position is skipped when its claim is missing from the snapshot or not
/// yet terminal; correctness is side == resolved side. Always returns
/// exactly five buckets, in ascending band order.
pub fn calibrate(resolved_positions: &[Position], claims: &[Claim]) -> Vec<CalibrationBucket> {
    let claim_map: HashMap<&str, &Claim> =
        claims.iter().map(|c| (c.id.as_str(), c)).collect();

    // (confidence, correct) for every scorable position
    let scored: Vec<(f64, bool)> = resolved_positions
        .iter()
        .filter_map(|pos| {
            let claim = claim_map.get(pos.claim_id.as_str())?;
            let resolved_side = claim.resolved_side()?;
            Some((pos.confidence, pos.side == resolved_side))
        })
        .collect();

    BUCKET_BOUNDS
        .iter()
        .map(|&(min, max, label)| {
            let in_band: Vec<&(f64, bool)> = scored
                .iter()
                .filter(|(conf, _)| *conf >= min && *conf <= max)
                .collect();

            let total = in_band.len();
            let correct = in_band.iter().filter(|(_, ok)| *ok).count();
            let accuracy = if total > 0 {
                whole_percent(correct as f64 / total as f64)
            } else {
                0
            };
            let confidences: Vec<f64> = in_band.iter().map(|(conf, _)| *conf).collect();
            let avg_confidence = match mean(&confidences) {
                Some(avg) => whole_percent(avg),
                None => whole_percent((min + max) / 2.0),
            };

            CalibrationBucket {
                min,
                max,
                label: label.to_string(),
                total,
                correct,
                accuracy,
                avg_confidence,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClaimStatus, Side};
    use chrono::{TimeZone, Utc};

    fn claim(id: &str, status: ClaimStatus) -> Claim {
        Claim {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            category: "tech".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            resolved_at: status
                .is_resolved()
                .then(|| Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()),
            created_by: None,
            resolution_mode: None,
            oracle_condition: None,
        }
    }

    fn position(claim_id: &str, side: Side, confidence: f64) -> Position {
        Position {
            id: format!("pos-{}-{}", claim_id, confidence),
            claim_id: claim_id.to_string(),
            username: "alice".to_string(),
            side,
            stake: 10.0,
            confidence,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
            reasoning: None,
        }
    }

    #[test]
    fn test_always_five_buckets_in_order() {
        let buckets = calibrate(&[], &[]);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[0].label, "50-59%");
        assert_eq!(buckets[4].label, "90-99%");
        assert!(buckets.iter().all(|b| !b.has_data()));
    }

    #[test]
    fn test_empty_bucket_placeholder_confidence() {
        let buckets = calibrate(&[], &[]);
        // (0.50 + 0.59) / 2 * 100 lands just under 54.5 in f64, so the first
        // band's placeholder is 54; the others sit exactly on the half and
        // round up.
        assert_eq!(buckets[0].avg_confidence, 54);
        assert_eq!(buckets[0].accuracy, 0);
        assert_eq!(buckets[1].avg_confidence, 65);
        assert_eq!(buckets[4].avg_confidence, 95);
    }

    #[test]
    fn test_wrong_high_confidence_position_counts_against() {
        // resolved_yes claim, user staked no at 0.9: denominator yes, correct no
        let claims = vec![claim("c1", ClaimStatus::ResolvedYes)];
        let positions = vec![position("c1", Side::No, 0.9)];

        let buckets = calibrate(&positions, &claims);
        let band = &buckets[4];
        assert_eq!(band.total, 1);
        assert_eq!(band.correct, 0);
        assert_eq!(band.accuracy, 0);
        assert!(band.has_data());
        assert_eq!(band.avg_confidence, 90);
    }

    #[test]
    fn test_partition_no_overlap_no_omission() {
        let claims = vec![claim("c1", ClaimStatus::ResolvedYes)];
        let confidences = [0.50, 0.59, 0.60, 0.75, 0.89, 0.90, 0.99];
        let positions: Vec<Position> = confidences
            .iter()
            .map(|&c| position("c1", Side::Yes, c))
            .collect();

        let buckets = calibrate(&positions, &claims);
        let total: usize = buckets.iter().map(|b| b.total).sum();
        assert_eq!(total, confidences.len());
        assert_eq!(buckets[0].total, 2); // 0.50, 0.59
        assert_eq!(buckets[1].total, 1); // 0.60
        assert_eq!(buckets[2].total, 1); // 0.75
        assert_eq!(buckets[3].total, 1); // 0.89
        assert_eq!(buckets[4].total, 2); // 0.90, 0.99
    }

    #[test]
    fn test_confidence_one_joins_no_bucket() {
        let claims = vec![claim("c1", ClaimStatus::ResolvedYes)];
        let positions = vec![position("c1", Side::Yes, 1.0)];

        let buckets = calibrate(&positions, &claims);
        assert!(buckets.iter().all(|b| b.total == 0));
    }

    #[test]
    fn test_unknown_and_active_claims_skipped() {
        let claims = vec![claim("c-active", ClaimStatus::Active)];
        let positions = vec![
            position("c-active", Side::Yes, 0.8),
            position("c-missing", Side::Yes, 0.8),
        ];

        let buckets = calibrate(&positions, &claims);
        assert!(buckets.iter().all(|b| b.total == 0));
    }

    #[test]
    fn test_mixed_band_accuracy_and_avg() {
        let claims = vec![
            claim("c1", ClaimStatus::ResolvedYes),
            claim("c2", ClaimStatus::ResolvedNo),
        ];
        // Both in the 70-79% band: one right, one wrong
        let positions = vec![
            position("c1", Side::Yes, 0.70),
            position("c2", Side::Yes, 0.78),
        ];

        let buckets = calibrate(&positions, &claims);
        let band = &buckets[2];
        assert_eq!(band.total, 2);
        assert_eq!(band.correct, 1);
        assert_eq!(band.accuracy, 50);
        assert_eq!(band.avg_confidence, 74); // mean(0.70, 0.78) = 0.74
    }
}
