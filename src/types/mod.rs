//! Core types: die identity, shapes, motion state, and roll results.

pub mod dice;
pub mod roll;

pub use dice::{DieId, Shape};
pub use roll::{DieMotionState, RollSnapshot, SettledDie};
