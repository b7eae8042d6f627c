//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (no delta time)
//! - No timers, rendering or platform dependencies; side effects leave as
//!   [`GameEvent`]s drained by the host

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod physics;
pub mod state;
pub mod tick;

pub use autopilot::{ClearanceWindow, clearance_window, wants_jump};
pub use collision::overlaps;
pub use input::jump;
pub use physics::{advance_actor, advance_obstacle};
pub use state::{Actor, GameEvent, GamePhase, Milestone, Notice, Obstacle, Session};
pub use tick::{collided, obstacle_passed, tick};
