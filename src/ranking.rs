//! ═══════════════════════════════════════════════════════════════════════════════
//! RANKING — Leaderboard and Feed Total Orders
//! ═══════════════════════════════════════════════════════════════════════════════
//! Two orderings over finite snapshots:
//! - Leaderboard: users by accuracy descending. A user with no scorable
//!   resolved positions (accuracy None) ranks strictly below every scored
//!   user; two unscored users fall back to points descending.
//! - Feed: claims by a selectable mode — trending (position count),
//!   recent (newest first), or ending (oldest first, the documented proxy
//!   for "closest to resolution"; there is no deadline field).
//!
//! Both sorts are stable: ties beyond the stated keys keep input order.
//! ═══════════════════════════════════════════════════════════════════════════════

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::odds::ClaimSummary;
use crate::reputation::UserProfile;
use crate::stats::float_cmp_desc;

/// Feed ordering mode, selectable at query time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSort {
    /// Most positions first
    Trending,
    /// Newest claims first
    Recent,
    /// Oldest claims first
    Ending,
}

/// Order users for the leaderboard.
pub fn rank_leaderboard(mut profiles: Vec<UserProfile>) -> Vec<UserProfile> {
    profiles.sort_by(|a, b| match (a.accuracy, b.accuracy) {
        (None, None) => float_cmp_desc(&a.points, &b.points),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => y.cmp(&x),
    });
    profiles
}

/// Order claim summaries for the feed in the requested mode.
pub fn rank_feed(mut summaries: Vec<ClaimSummary>, sort: FeedSort) -> Vec<ClaimSummary> {
    match sort {
        FeedSort::Trending => {
            summaries.sort_by(|a, b| b.position_count.cmp(&a.position_count));
        }
        FeedSort::Recent => {
            summaries.sort_by(|a, b| b.claim.created_at.cmp(&a.claim.created_at));
        }
        FeedSort::Ending => {
            summaries.sort_by(|a, b| a.claim.created_at.cmp(&b.claim.created_at));
        }
    }
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Claim, ClaimStatus};
    use crate::odds;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeMap;

    fn profile(username: &str, points: f64, accuracy: Option<u32>) -> UserProfile {
        UserProfile {
            username: username.to_string(),
            display_name: username.to_string(),
            points,
            accuracy,
            total_resolved: 0,
            category_stats: BTreeMap::new(),
            active_positions: vec![],
            resolved_positions: vec![],
        }
    }

    fn summary(id: &str, day: u32, position_count: usize) -> ClaimSummary {
        let claim = Claim {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            category: "tech".to_string(),
            status: ClaimStatus::Active,
            created_at: Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap(),
            resolved_at: None,
            created_by: None,
            resolution_mode: None,
            oracle_condition: None,
        };
        let mut s = odds::summarize(&claim, &[]);
        s.position_count = position_count;
        s
    }

    fn ids(summaries: &[ClaimSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.claim.id.as_str()).collect()
    }

    #[test]
    fn test_leaderboard_accuracy_descending() {
        let ranked = rank_leaderboard(vec![
            profile("low", 9000.0, Some(40)),
            profile("high", 100.0, Some(90)),
            profile("mid", 500.0, Some(60)),
        ]);
        let names: Vec<&str> = ranked.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_leaderboard_none_ranks_below_any_score() {
        let ranked = rank_leaderboard(vec![
            profile("unscored", 99999.0, None),
            profile("scored", 10.0, Some(1)),
        ]);
        assert_eq!(ranked[0].username, "scored");
        assert_eq!(ranked[1].username, "unscored");
    }

    #[test]
    fn test_leaderboard_null_tiebreak_by_points() {
        let ranked = rank_leaderboard(vec![
            profile("poorer", 300.0, None),
            profile("richer", 500.0, None),
        ]);
        assert_eq!(ranked[0].username, "richer");
        assert_eq!(ranked[1].username, "poorer");
    }

    #[test]
    fn test_leaderboard_equal_accuracy_is_stable() {
        let ranked = rank_leaderboard(vec![
            profile("first", 100.0, Some(70)),
            profile("second", 900.0, Some(70)),
        ]);
        // Same accuracy: input order wins, points do not re-order scored users
        assert_eq!(ranked[0].username, "first");
        assert_eq!(ranked[1].username, "second");
    }

    #[test]
    fn test_feed_trending() {
        let ranked = rank_feed(
            vec![summary("a", 1, 2), summary("b", 2, 7), summary("c", 3, 4)],
            FeedSort::Trending,
        );
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_feed_recent_newest_first() {
        let ranked = rank_feed(
            vec![summary("old", 1, 0), summary("new", 20, 0)],
            FeedSort::Recent,
        );
        assert_eq!(ids(&ranked), vec!["new", "old"]);
    }

    #[test]
    fn test_feed_ending_oldest_first() {
        let ranked = rank_feed(
            vec![summary("t2", 20, 0), summary("t1", 1, 0)],
            FeedSort::Ending,
        );
        assert_eq!(ids(&ranked), vec!["t1", "t2"]);
    }

    #[test]
    fn test_feed_tie_is_stable() {
        let ranked = rank_feed(
            vec![summary("x", 5, 3), summary("y", 9, 3)],
            FeedSort::Trending,
        );
        assert_eq!(ids(&ranked), vec!["x", "y"]);
    }
}
