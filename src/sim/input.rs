//! Jump intents from keyboard, touch or the autopilot

use super::state::{GameEvent, Session};
use crate::tuning::Tuning;

/// Start a jump if the runner is on the ground and the round is running
///
/// Applied immediately, the next tick sees the new velocity. Returns whether
/// a jump actually started; intents mid-air or after the round ended are
/// dropped.
pub fn jump(session: &mut Session, tuning: &Tuning) -> bool {
    if session.is_frozen() || session.actor.airborne {
        return false;
    }

    session.actor.vy = session.actor.jump_velocity * tuning.jump_factor;
    session.actor.airborne = true;
    session.emit(GameEvent::Jumped);
    true
}
