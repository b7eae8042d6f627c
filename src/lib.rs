//! Hurdle Run - jump the hurdle, five times
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `platform`: Tick cadence, timers, message banner and the round runner
//! - `renderer`: Canvas 2D presentation (wasm only)
//! - `tuning`: Device profiles and derived playfield constants
//! - `settings`: Player preferences persisted in LocalStorage

pub mod error;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::{ProfilePreference, Settings};
pub use tuning::{DeviceProfile, Playfield, Tuning, Viewport};

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per display refresh)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in milliseconds
    pub const TICK_MS: f32 = 1000.0 / TICK_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Thickness of the ground band at the bottom of the playfield
    pub const GROUND_THICKNESS: f32 = 20.0;
    /// Gap kept between the runner and the right edge
    pub const RIGHT_MARGIN: f32 = 10.0;
    /// Runner's starting x
    pub const RUNNER_START_X: f32 = 50.0;
    /// Fraction of the playfield width gained on each landing
    pub const LANDING_ADVANCE: f32 = 0.03;
    /// Gravity is applied at half strength while airborne
    pub const GRAVITY_SCALE: f32 = 0.5;

    /// Score that shows the "almost there" notice
    pub const ALMOST_THERE_SCORE: u32 = 3;
    /// Score that wins the round
    pub const WINNING_SCORE: u32 = 5;

    /// How long a transient message stays on screen
    pub const MESSAGE_DURATION_MS: u32 = 3000;
    /// Delay between losing and the full reset
    pub const RESET_DELAY_MS: u32 = 3000;
}

/// Convert a millisecond delay to whole ticks (rounding up)
#[inline]
pub fn ms_to_ticks(ms: u32) -> u64 {
    (ms as u64 * consts::TICK_HZ as u64).div_ceil(1000)
}
