//! Platform abstraction layer
//!
//! Everything between the pure simulation and the browser:
//! - Frame time to fixed ticks (`clock`)
//! - One-shot timers (`timers`)
//! - The message banner (`banner`)
//! - The round runner that wires it all together (`runner`)
//! - Log-only sinks for native builds (`headless`)
//!
//! The browser side implements the three traits below.

pub mod banner;
pub mod clock;
pub mod headless;
pub mod runner;
pub mod timers;

pub use banner::MessageBanner;
pub use clock::FixedCadence;
pub use headless::{LogHost, LogNotifier, LogPresenter};
pub use runner::Runner;
pub use timers::{TimerAction, TimerId, TimerQueue};

use crate::sim::{Actor, Obstacle};
use crate::tuning::Playfield;

/// Read-only view of the round handed to the presenter each frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub playfield: &'a Playfield,
    pub actor: &'a Actor,
    pub obstacle: &'a Obstacle,
    pub score: u32,
    /// Gameplay has stopped; only drawing continues
    pub frozen: bool,
}

/// Draws the round
pub trait Presenter {
    fn present(&mut self, frame: &Frame<'_>);

    /// Playfield changed size (startup or window resize)
    fn resize(&mut self, _playfield: &Playfield) {}
}

/// Message banner and the reward reveal
pub trait NotificationSink {
    fn show_message(&mut self, text: &str, persistent: bool);
    fn hide_message(&mut self);
    /// Show the extra visual earned by winning (the QR code)
    fn reveal_supplementary_visual(&mut self);
}

/// Owner of the page or process lifecycle
pub trait LifecycleHost {
    /// A scheduled full reset fired; the runner has already rebuilt the round
    fn reload(&mut self);
}
