//! Roll lifecycle store
//!
//! Aggregates asynchronous per-die rolling/settled reports from the physics
//! host into roll cycles and an append-only result history. The physics
//! layer owns rest detection and face resolution; this store only tracks
//! which dice belong to the roll in flight and commits a snapshot the moment
//! the last of them comes to rest.
//!
//! A cycle opens when the rolling set goes from empty to non-empty and keeps
//! absorbing every die that starts moving before it closes, so dice knocked
//! into motion by a collision land in the same result as the die that hit
//! them.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::history::HistoryStore;
use crate::types::{DieId, DieMotionState, RollSnapshot, SettledDie, Shape};

/// Handle returned by [`RollLifecycleStore::subscribe`]; pass it back to
/// [`RollLifecycleStore::unsubscribe`] to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&TrayState)>;

/// The store's readable state: transient roll tracking plus the durable
/// history. Exposed to UI/display collaborators by shared reference only;
/// all mutation goes through [`RollLifecycleStore`] operations.
#[derive(Default)]
pub struct TrayState {
    rolling: HashSet<DieId>,
    /// Settled results in settlement order. Settlement order is also the
    /// order dice appear in snapshots.
    settled: Vec<SettledDie>,
    current_cycle: HashSet<DieId>,
    history: Vec<RollSnapshot>,
}

impl TrayState {
    pub fn rolling_ids(&self) -> &HashSet<DieId> {
        &self.rolling
    }

    pub fn settled(&self) -> &[SettledDie] {
        &self.settled
    }

    pub fn settled_value(&self, id: &DieId) -> Option<&SettledDie> {
        self.settled.iter().find(|s| s.id == *id)
    }

    pub fn current_cycle_ids(&self) -> &HashSet<DieId> {
        &self.current_cycle
    }

    pub fn history(&self) -> &[RollSnapshot] {
        &self.history
    }

    pub fn motion_state(&self, id: &DieId) -> DieMotionState {
        if self.rolling.contains(id) {
            return DieMotionState::Rolling;
        }
        match self.settled_value(id) {
            Some(s) => DieMotionState::Settled {
                value: s.value,
                shape: s.shape,
                settled_at: s.settled_at,
            },
            None => DieMotionState::Untracked,
        }
    }
}

/// Central state machine for the tray.
///
/// Created once at application start and passed by reference into the
/// physics-integration and UI layers; there is no ambient global instance.
/// Every operation is a single synchronous transition: it accepts any input
/// (unknown or already-removed ids are no-ops), never fails, and notifies
/// listeners only after the transition has fully committed.
pub struct RollLifecycleStore {
    state: TrayState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    history_store: Option<Box<dyn HistoryStore>>,
}

impl Default for RollLifecycleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RollLifecycleStore {
    pub fn new() -> Self {
        Self {
            state: TrayState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
            history_store: None,
        }
    }

    /// Create a store backed by a durable history store. Persisted history
    /// is loaded up front; transient state always starts empty, so a fresh
    /// session has no in-flight rolls. A failed load is logged and treated
    /// as an empty history.
    pub fn with_history_store(mut history_store: Box<dyn HistoryStore>) -> Self {
        let history = match history_store.load() {
            Ok(history) => history,
            Err(e) => {
                warn!("Failed to load persisted roll history: {e}");
                Vec::new()
            }
        };
        Self {
            state: TrayState {
                history,
                ..TrayState::default()
            },
            listeners: Vec::new(),
            next_subscription: 0,
            history_store: Some(history_store),
        }
    }

    /// Read-only view of the full state.
    pub fn state(&self) -> &TrayState {
        &self.state
    }

    pub fn rolling_ids(&self) -> &HashSet<DieId> {
        self.state.rolling_ids()
    }

    pub fn settled(&self) -> &[SettledDie] {
        self.state.settled()
    }

    pub fn current_cycle_ids(&self) -> &HashSet<DieId> {
        self.state.current_cycle_ids()
    }

    pub fn history(&self) -> &[RollSnapshot] {
        self.state.history()
    }

    pub fn motion_state(&self, id: &DieId) -> DieMotionState {
        self.state.motion_state(id)
    }

    /// Report that dice have started moving, whether from a deliberate toss
    /// or from being knocked by another die.
    ///
    /// Any stale settled value for these ids is discarded immediately. If
    /// the rolling set was empty before this call, a new cycle begins:
    /// membership left over from the previous cycle is dropped first.
    pub fn mark_rolling(&mut self, ids: &[DieId]) {
        if ids.is_empty() {
            return;
        }
        if self.state.rolling.is_empty() {
            self.state.current_cycle.clear();
            debug!(dice = ids.len(), "roll cycle opened");
        }
        for id in ids {
            self.state.settled.retain(|s| s.id != *id);
            self.state.rolling.insert(id.clone());
            self.state.current_cycle.insert(id.clone());
        }
        self.notify();
    }

    /// Report that a die has come to rest showing `value`.
    ///
    /// Overwrites any previous settled value for the id. If this settle
    /// empties the rolling set while a cycle is open, the cycle closes:
    /// exactly one snapshot is built from the cycle members that have a
    /// settled value (members removed mid-roll are silently excluded) and
    /// appended to history.
    pub fn record_settled(&mut self, id: &DieId, value: u32, shape: Shape) {
        let settled_at = now_millis();
        match self.state.settled.iter().position(|s| s.id == *id) {
            Some(index) => {
                let existing = &mut self.state.settled[index];
                existing.value = value;
                existing.shape = shape;
                existing.settled_at = settled_at;
            }
            None => self.state.settled.push(SettledDie {
                id: id.clone(),
                value,
                shape,
                settled_at,
            }),
        }
        self.state.rolling.remove(id);

        if self.state.rolling.is_empty() && !self.state.current_cycle.is_empty() {
            self.close_cycle();
        }
        self.notify();
    }

    /// Forget a die entirely: it leaves the rolling set, the settled map,
    /// and the current cycle. History is unaffected.
    pub fn remove(&mut self, id: &DieId) {
        self.state.rolling.remove(id);
        self.state.settled.retain(|s| s.id != *id);
        self.state.current_cycle.remove(id);
        self.notify();
    }

    /// Empty the rolling set, settled map, and current cycle. History is
    /// untouched.
    pub fn clear_transient(&mut self) {
        self.state.rolling.clear();
        self.state.settled.clear();
        self.state.current_cycle.clear();
        self.notify();
    }

    /// Empty the history. Transient state is untouched.
    pub fn clear_history(&mut self) {
        self.state.history.clear();
        self.persist_history();
        self.notify();
    }

    /// Clear both transient state and history.
    pub fn reset(&mut self) {
        self.state.rolling.clear();
        self.state.settled.clear();
        self.state.current_cycle.clear();
        self.state.history.clear();
        self.persist_history();
        self.notify();
    }

    /// Register a listener invoked synchronously after each committed
    /// transition, never mid-transition.
    pub fn subscribe(&mut self, listener: impl FnMut(&TrayState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Unsubscribing an unknown or already-removed handle
    /// is a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(handle, _)| *handle != id);
    }

    fn close_cycle(&mut self) {
        let dice: Vec<SettledDie> = self
            .state
            .settled
            .iter()
            .filter(|s| self.state.current_cycle.contains(&s.id))
            .cloned()
            .collect();
        let sum = dice.iter().map(|d| d.value).sum();
        debug!(dice = dice.len(), sum, "roll cycle closed");
        self.state.history.push(RollSnapshot {
            dice,
            sum,
            timestamp: now_millis(),
        });
        self.state.current_cycle.clear();
        self.persist_history();
    }

    fn persist_history(&mut self) {
        if let Some(store) = &mut self.history_store {
            // Non-fatal: the in-memory append stands even if the write fails
            if let Err(e) = store.save(&self.state.history) {
                warn!("Failed to persist roll history: {e}");
            }
        }
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
