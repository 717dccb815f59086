//! ═══════════════════════════════════════════════════════════════════════════════
//! ORACLE — Condition Evaluation Against an Upstream Reading
//! ═══════════════════════════════════════════════════════════════════════════════
//! Oracle-resolved claims carry a condition of the form `feed comparator
//! target` (e.g. "ETH/USD >= 4000"). Fetching the feed value is the excluded
//! application shell's job; the engine only decides the comparison once a
//! reading is supplied as a plain number, and maps the result to the side
//! the claim resolves to.
//! ═══════════════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

use crate::model::Side;

/// Comparison operator for an oracle condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
}

impl Comparator {
    /// Evaluate `value comparator target`
    pub fn compare(self, value: f64, target: f64) -> bool {
        match self {
            Comparator::Gt => value > target,
            Comparator::Ge => value >= target,
            Comparator::Lt => value < target,
            Comparator::Le => value <= target,
        }
    }
}

/// A claim's oracle resolution condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleCondition {
    /// Feed name, e.g. "ETH/USD"
    pub feed: String,
    pub comparator: Comparator,
    pub target: f64,
}

impl OracleCondition {
    /// Does the supplied reading satisfy the condition?
    pub fn evaluate(&self, value: f64) -> bool {
        self.comparator.compare(value, self.target)
    }

    /// The side the claim resolves to given the supplied reading
    pub fn resolved_side(&self, value: f64) -> Side {
        if self.evaluate(value) {
            Side::Yes
        } else {
            Side::No
        }
    }
}
