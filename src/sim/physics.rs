//! Per-tick integration for the runner and the obstacle
//!
//! There is no delta time: every tick is one fixed step, velocities are in
//! pixels per tick.

use super::state::{Actor, Obstacle};
use crate::consts::{GRAVITY_SCALE, LANDING_ADVANCE};
use crate::tuning::Tuning;

/// Advance the runner by one tick
///
/// Forward motion only happens on the landing tick, so a runner standing
/// on the ground never drifts.
pub fn advance_actor(actor: &mut Actor, tuning: &Tuning) {
    let field = tuning.playfield;
    let floor_top = field.floor_top(actor.size);

    actor.pos.y += actor.vy;

    if actor.pos.y < floor_top {
        actor.vy += tuning.gravity * GRAVITY_SCALE;
        actor.pos.y = actor.pos.y.max(0.0);
    } else {
        actor.pos.y = floor_top;
        if actor.airborne {
            actor.pos.x += (field.width * LANDING_ADVANCE).floor();
            actor.pos.x = actor.pos.x.min(field.max_x(actor.size));
        }
        actor.vy = 0.0;
        actor.airborne = false;
    }
}

/// Slide the obstacle left by one tick
///
/// Returns `true` when it left the playfield and was recycled to the right
/// edge; that is an obstacle pass.
pub fn advance_obstacle(obstacle: &mut Obstacle, tuning: &Tuning) -> bool {
    obstacle.pos.x -= tuning.obstacle_speed;

    if obstacle.pos.x + obstacle.size < 0.0 {
        obstacle.pos.x = tuning.playfield.width;
        return true;
    }
    false
}
