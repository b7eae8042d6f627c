//! Idle/demo mode: a simple AI that plays the round
//!
//! It replays the runner's jump arc with the real physics to find the ticks
//! during which the runner's bottom edge is above the obstacle, then jumps as
//! soon as the obstacle's whole crossing fits inside that window. Playfields
//! where no crossing fits get a last-chance jump rather than none.

use super::physics::advance_actor;
use super::state::{Actor, Session};
use crate::tuning::Tuning;

/// Ticks after takeoff during which a jump clears the obstacle (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearanceWindow {
    pub first: u32,
    pub last: u32,
}

impl ClearanceWindow {
    /// Whether every crossing fits inside the window
    ///
    /// The obstacle overlaps the runner horizontally for up to
    /// `ceil(span / speed)` ticks. Longer than the window means some rounds
    /// cannot be cleared at all.
    pub fn covers_crossing(&self, tuning: &Tuning) -> bool {
        let span = tuning.runner_size + tuning.obstacle_size;
        let crossing = (span / tuning.obstacle_speed).ceil() as u32;
        crossing <= self.last - self.first + 1
    }
}

/// Simulate a jump from the ground and report when it clears the obstacle
///
/// `None` when the tuning cannot produce a jump high enough.
pub fn clearance_window(tuning: &Tuning) -> Option<ClearanceWindow> {
    let mut actor = Actor::new(tuning);
    actor.vy = tuning.launch_velocity();
    actor.airborne = true;

    let obstacle_top = tuning.playfield.floor_top(tuning.obstacle_size);
    let mut window: Option<ClearanceWindow> = None;
    let mut k = 0;

    while actor.airborne {
        advance_actor(&mut actor, tuning);
        k += 1;

        if actor.pos.y + actor.size <= obstacle_top {
            window.get_or_insert(ClearanceWindow { first: k, last: k }).last = k;
        } else if window.is_some() {
            // Falling back below the obstacle's top
            break;
        }
    }
    window
}

/// Whether to jump right now
///
/// Prefers a takeoff whose whole crossing fits the window. When none is left
/// (the crossing is longer than the window, or the landing advance skipped the
/// takeoff tick) it jumps at the last tick whose entry still clears.
pub fn wants_jump(session: &Session, tuning: &Tuning, window: ClearanceWindow) -> bool {
    if session.is_frozen() || session.actor.airborne {
        return false;
    }

    let actor = &session.actor;
    let obstacle = &session.obstacle;
    let speed = tuning.obstacle_speed;

    // Horizontal overlap on tick k: gap < speed * k < gap + both sizes
    let gap = obstacle.pos.x - (actor.pos.x + actor.size);
    let span = actor.size + obstacle.size;
    let enter = (gap / speed).floor() + 1.0;
    let exit = ((gap + span) / speed).ceil() - 1.0;

    let first = window.first as f32;
    let fits = enter >= first && exit <= window.last as f32;
    let last_chance = enter <= first && exit >= 1.0;
    fits || last_chance
}
