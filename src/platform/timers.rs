//! One-shot timers measured in simulation ticks
//!
//! Stand-in for `setTimeout`: the runner advances the queue once per tick, so
//! delays stay deterministic and testable. Cancelled handles never fire.

use serde::{Deserialize, Serialize};

use crate::ms_to_ticks;

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(u32);

/// What to do when a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerAction {
    /// Hide the transient message banner
    HideMessage,
    /// Throw the round away and start over
    FullReset,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due_tick: u64,
    action: TimerAction,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    now: u64,
    next_id: u32,
    timers: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay_ms` from now (rounded up to a tick)
    pub fn schedule(&mut self, delay_ms: u32, action: TimerAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due_tick: self.now + ms_to_ticks(delay_ms),
            action,
        });
        id
    }

    /// Cancel a pending timer; `false` if it already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Advance the clock and return the timers that came due, oldest first
    pub fn advance(&mut self, ticks: u64) -> Vec<(TimerId, TimerAction)> {
        self.now += ticks;
        let now = self.now;

        let mut due: Vec<Timer> = Vec::new();
        self.timers.retain(|t| {
            if t.due_tick <= now {
                due.push(t.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| (t.due_tick, t.id.0));
        due.into_iter().map(|t| (t.id, t.action)).collect()
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
