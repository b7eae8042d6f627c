//! Game state and core simulation types
//!
//! A [`Session`] is one round: created at start, rebuilt from scratch on
//! reset. Score and phase are private to the `sim` module so only the state
//! machine in `tick.rs` can move them.

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Winning score reached; gameplay frozen, round kept on screen
    PausedWon,
    /// Runner hit the obstacle; a full reset is pending
    OverLost,
}

impl GamePhase {
    /// Terminal phases never mutate gameplay state again
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// The player-controlled runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity (negative is up)
    pub vy: f32,
    pub size: f32,
    pub airborne: bool,
    /// Raw jump impulse before damping
    pub jump_velocity: f32,
}

impl Actor {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                RUNNER_START_X,
                tuning.playfield.floor_top(tuning.runner_size),
            ),
            vy: 0.0,
            size: tuning.runner_size,
            airborne: false,
            jump_velocity: tuning.jump_velocity,
        }
    }
}

/// The hurdle sliding in from the right
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
}

impl Obstacle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.playfield.width,
                tuning.playfield.floor_top(tuning.obstacle_size),
            ),
            size: tuning.obstacle_size,
        }
    }
}

/// Score thresholds that trigger something, each at most once per round
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Milestone {
    AlmostThere,
    Won,
}

impl Milestone {
    pub const ALL: [Milestone; 2] = [Milestone::AlmostThere, Milestone::Won];

    pub fn score(&self) -> u32 {
        match self {
            Milestone::AlmostThere => ALMOST_THERE_SCORE,
            Milestone::Won => WINNING_SCORE,
        }
    }
}

/// Messages shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    AlmostThere,
    Congratulations,
    Encouragement,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::AlmostThere => "You are almost there!",
            Notice::Congratulations => "Congratulations! You made it!",
            Notice::Encouragement => "Don't give up! You can do it!",
        }
    }

    /// Persistent notices stay until the round is reset
    pub fn persistent(&self) -> bool {
        !matches!(self, Notice::AlmostThere)
    }
}

/// Things the simulation tells the outside world about
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    ObstaclePassed { score: u32 },
    PhaseChanged(GamePhase),
    ShowNotice(Notice),
    RevealReward,
    ScheduleReset { delay_ms: u32 },
}

/// Complete state of one round (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub actor: Actor,
    pub obstacle: Obstacle,
    pub(super) score: u32,
    pub(super) phase: GamePhase,
    /// Milestones already fired this round
    pub(super) fired: BTreeSet<Milestone>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending events for the host, drained once per tick
    #[serde(skip)]
    pub(super) events: Vec<GameEvent>,
}

impl Session {
    /// Start a fresh round
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            actor: Actor::new(tuning),
            obstacle: Obstacle::new(tuning),
            score: 0,
            phase: GamePhase::Running,
            fired: BTreeSet::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether gameplay mutation has stopped (render-only from here)
    pub fn is_frozen(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn has_fired(&self, milestone: Milestone) -> bool {
        self.fired.contains(&milestone)
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Re-fit the round to a new playfield after a resize
    ///
    /// The runner lands on the new floor and keeps its x (clamped to the right
    /// margin); the obstacle goes back to the right edge. Velocity and the
    /// airborne flag are left alone.
    pub fn relayout(&mut self, tuning: &Tuning) {
        let field = tuning.playfield;

        self.actor.size = tuning.runner_size;
        self.actor.jump_velocity = tuning.jump_velocity;
        self.actor.pos.y = field.floor_top(self.actor.size);
        self.actor.pos.x = self.actor.pos.x.min(field.max_x(self.actor.size));

        self.obstacle.size = tuning.obstacle_size;
        self.obstacle.pos = Vec2::new(field.width, field.floor_top(self.obstacle.size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::{DeviceProfile, Viewport};

    fn desktop() -> Tuning {
        Tuning::configure(DeviceProfile::Desktop, Viewport::new(1280.0, 720.0)).unwrap()
    }

    #[test]
    fn test_new_session_layout() {
        let session = Session::new(&desktop());
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.score(), 0);
        assert_eq!(session.actor.pos, Vec2::new(50.0, 150.0));
        assert_eq!(session.obstacle.pos, Vec2::new(600.0, 150.0));
        assert!(!session.actor.airborne);
        assert!(!session.is_frozen());
    }

    #[test]
    fn test_relayout_moves_entities_to_new_field() {
        let tuning = desktop();
        let mut session = Session::new(&tuning);
        session.actor.pos.x = 500.0;
        session.obstacle.pos.x = 120.0;

        let mobile = Tuning::configure(DeviceProfile::Mobile, Viewport::new(400.0, 800.0)).unwrap();
        session.relayout(&mobile);

        assert_eq!(session.actor.size, 18.0);
        assert_eq!(session.actor.pos.y, 125.0 - 20.0 - 18.0);
        assert_eq!(session.actor.pos.x, 380.0 - 18.0 - 10.0);
        assert_eq!(session.obstacle.pos, Vec2::new(380.0, 87.0));
    }

    #[test]
    fn test_notice_persistence() {
        assert!(!Notice::AlmostThere.persistent());
        assert!(Notice::Congratulations.persistent());
        assert!(Notice::Encouragement.persistent());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut session = Session::new(&desktop());
        session.emit(GameEvent::Jumped);
        assert_eq!(session.drain_events(), vec![GameEvent::Jumped]);
        assert!(session.drain_events().is_empty());
    }
}
