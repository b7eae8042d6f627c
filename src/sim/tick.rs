//! Fixed timestep simulation tick
//!
//! Core game loop and the round's state machine:
//!
//! ```text
//! Running --score reaches 5--> PausedWon
//! Running --collision-------> OverLost
//! ```
//!
//! Neither terminal phase has an exit; a reset builds a new [`Session`].

use super::collision::overlaps;
use super::physics::{advance_actor, advance_obstacle};
use super::state::{GameEvent, GamePhase, Milestone, Notice, Session};
use crate::consts::RESET_DELAY_MS;
use crate::tuning::Tuning;

/// Advance the round by one fixed step
pub fn tick(session: &mut Session, tuning: &Tuning) {
    // Terminal phases are render-only
    if session.is_frozen() {
        return;
    }

    session.time_ticks += 1;

    advance_actor(&mut session.actor, tuning);

    if advance_obstacle(&mut session.obstacle, tuning) {
        obstacle_passed(session);
    }

    if session.phase == GamePhase::Running && overlaps(&session.actor, &session.obstacle) {
        collided(session);
    }
}

/// The obstacle left the screen: score it and fire any milestone reached
pub fn obstacle_passed(session: &mut Session) {
    if session.is_frozen() {
        return;
    }

    session.score += 1;
    let score = session.score;
    session.emit(GameEvent::ObstaclePassed { score });
    log::debug!("Obstacle passed, score {}", score);

    for milestone in Milestone::ALL {
        // `insert` is false when the milestone already fired
        if score >= milestone.score() && session.fired.insert(milestone) {
            fire_milestone(session, milestone);
        }
    }
}

fn fire_milestone(session: &mut Session, milestone: Milestone) {
    match milestone {
        Milestone::AlmostThere => {
            session.emit(GameEvent::ShowNotice(Notice::AlmostThere));
        }
        Milestone::Won => {
            session.phase = GamePhase::PausedWon;
            session.emit(GameEvent::PhaseChanged(GamePhase::PausedWon));
            session.emit(GameEvent::ShowNotice(Notice::Congratulations));
            session.emit(GameEvent::RevealReward);
            log::info!("Round won after {} ticks", session.time_ticks);
        }
    }
}

/// The runner hit the obstacle
pub fn collided(session: &mut Session) {
    if session.phase != GamePhase::Running {
        return;
    }

    session.phase = GamePhase::OverLost;
    session.emit(GameEvent::PhaseChanged(GamePhase::OverLost));
    session.emit(GameEvent::ShowNotice(Notice::Encouragement));
    session.emit(GameEvent::ScheduleReset {
        delay_ms: RESET_DELAY_MS,
    });
    log::info!(
        "Round lost at score {} after {} ticks",
        session.score,
        session.time_ticks
    );
}
