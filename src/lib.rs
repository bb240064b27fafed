//! Physics-driven dice tray core.
//!
//! Tracks the roll lifecycle for an arbitrary, changing number of
//! independently moving dice and resolves each settled die's continuous 3D
//! orientation to a discrete face value. The physics simulation, rendering,
//! and UI layers are external collaborators: the host reports per-die
//! motion and rest through [`store::RollLifecycleStore`], asks
//! [`catalog::resolve_face_value`] what a resting die shows, and subscribes
//! to the store for read-only state. There is no central "roll complete"
//! signal anywhere else; the store derives it from the per-die reports.

pub mod catalog;
pub mod history;
pub mod store;
pub mod throw;
pub mod types;

pub use catalog::{face_normals, resolve_face_value, FaceNormalEntry};
pub use history::{HistoryStore, InMemoryHistoryStore, JsonFileHistoryStore, HISTORY_STORAGE_KEY};
pub use store::{RollLifecycleStore, SubscriptionId, TrayState};
pub use throw::{ImpulseConfig, RollImpulseGenerator};
pub use types::{DieId, DieMotionState, RollSnapshot, SettledDie, Shape};
