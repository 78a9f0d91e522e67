//! Ordering types: BidirectionalPair, OrderedUnit, OrderedSequence.

use crate::syntax::types::Node;

// ─── BidirectionalPair ───────────────────────────────────────────────────────

/// Two distinct nodes joined by edges in both directions.
///
/// Members are stored sorted by id, so `{a, b}` and `{b, a}` are the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BidirectionalPair {
    pub first: String,
    pub second: String,
}

impl BidirectionalPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }
}

// ─── OrderedUnit ─────────────────────────────────────────────────────────────

/// One step of the linear flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedUnit {
    Single(Node),
    /// Both members of a bidirectional pair, in canonical (sorted id) order.
    Combined(Node, Node),
}

impl OrderedUnit {
    pub fn is_combined(&self) -> bool {
        matches!(self, OrderedUnit::Combined(..))
    }

    /// Member node ids in unit order.
    pub fn ids(&self) -> Vec<&str> {
        match self {
            OrderedUnit::Single(n) => vec![n.id.as_str()],
            OrderedUnit::Combined(a, b) => vec![a.id.as_str(), b.id.as_str()],
        }
    }
}

/// Order builder output: covers every node of the canvas exactly once.
pub type OrderedSequence = Vec<OrderedUnit>;

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
