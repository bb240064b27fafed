//! Motion-state and roll-result types.

use serde::{Deserialize, Serialize};

use super::dice::{DieId, Shape};

/// Motion state of a single die as tracked by the lifecycle store.
///
/// A die the store has never heard of is `Untracked`; entries are created
/// implicitly by the first rolling or settled report for an id.
#[derive(Debug, Clone, PartialEq)]
pub enum DieMotionState {
    Untracked,
    Rolling,
    Settled {
        value: u32,
        shape: Shape,
        /// Epoch milliseconds at which the die came to rest.
        settled_at: u64,
    },
}

/// One die's settled result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettledDie {
    pub id: DieId,
    pub value: u32,
    pub shape: Shape,
    /// Epoch milliseconds at which the die came to rest.
    pub settled_at: u64,
}

/// Immutable record of one completed roll cycle.
///
/// Produced exactly once when the last rolling die of a cycle settles; never
/// mutated afterwards. Dice appear in settlement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollSnapshot {
    pub dice: Vec<SettledDie>,
    pub sum: u32,
    /// Epoch milliseconds at which the cycle closed.
    pub timestamp: u64,
}
