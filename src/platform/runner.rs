//! The round runner
//!
//! Owns the session and drives it: fixed ticks from frame time, jump intents,
//! events out to the sinks, timers back in. One runner per page.

use super::banner::MessageBanner;
use super::clock::FixedCadence;
use super::timers::{TimerAction, TimerId, TimerQueue};
use super::{Frame, LifecycleHost, NotificationSink, Presenter};
use crate::error::ConfigError;
use crate::sim::{
    ClearanceWindow, GameEvent, Session, clearance_window, jump, tick, wants_jump,
};
use crate::tuning::{DeviceProfile, Tuning, Viewport};

pub struct Runner<P, N, H> {
    session: Session,
    tuning: Tuning,
    cadence: FixedCadence,
    timers: TimerQueue,
    banner: MessageBanner,
    /// Idle/demo mode - AI plays the game
    idle_mode: bool,
    autopilot: Option<ClearanceWindow>,
    presenter: P,
    notifier: N,
    host: H,
}

impl<P, N, H> Runner<P, N, H>
where
    P: Presenter,
    N: NotificationSink,
    H: LifecycleHost,
{
    /// Configure the playfield and start a round
    pub fn new(
        profile: DeviceProfile,
        viewport: Viewport,
        mut presenter: P,
        notifier: N,
        host: H,
    ) -> Result<Self, ConfigError> {
        let tuning = Tuning::configure(profile, viewport)?;
        log::info!(
            "{} playfield {}x{}",
            profile.as_str(),
            tuning.playfield.width,
            tuning.playfield.height
        );
        presenter.resize(&tuning.playfield);

        Ok(Self {
            session: Session::new(&tuning),
            autopilot: clearance_window(&tuning),
            tuning,
            cadence: FixedCadence::new(),
            timers: TimerQueue::new(),
            banner: MessageBanner::new(),
            idle_mode: false,
            presenter,
            notifier,
            host,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn banner(&self) -> &MessageBanner {
        &self.banner
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn idle_mode(&self) -> bool {
        self.idle_mode
    }

    pub fn set_idle_mode(&mut self, on: bool) {
        self.idle_mode = on;
        if on {
            self.check_autopilot();
        }
    }

    fn check_autopilot(&self) {
        match self.autopilot {
            None => {
                log::warn!("Idle mode has no jump that clears the obstacle on this playfield")
            }
            Some(window) if !window.covers_crossing(&self.tuning) => log::warn!(
                "Idle mode may lose: crossings outlast the {}-tick clearance window",
                window.last - window.first + 1
            ),
            Some(_) => {}
        }
    }

    /// A jump was requested (key press, touch start)
    pub fn on_jump_intent(&mut self) -> bool {
        let jumped = jump(&mut self.session, &self.tuning);
        self.dispatch_events();
        jumped
    }

    /// The window changed size; refit the playfield and the round to it
    pub fn on_resize(&mut self, viewport: Viewport) -> Result<(), ConfigError> {
        let tuning = Tuning::configure(self.tuning.profile, viewport)?;
        log::debug!(
            "Resized playfield to {}x{}",
            tuning.playfield.width,
            tuning.playfield.height
        );

        self.tuning = tuning;
        self.autopilot = clearance_window(&self.tuning);
        if self.idle_mode {
            self.check_autopilot();
        }
        self.session.relayout(&self.tuning);
        self.presenter.resize(&self.tuning.playfield);
        self.present();
        Ok(())
    }

    /// Run whatever ticks `elapsed_ms` of frame time is worth, then draw
    pub fn advance(&mut self, elapsed_ms: f32) {
        for _ in 0..self.cadence.ticks(elapsed_ms) {
            self.step();
        }
        self.present();
    }

    /// Exactly one simulation tick, including timers
    ///
    /// Ticks keep coming after the round ends: the session ignores them but
    /// the timers still need the clock.
    pub fn step(&mut self) {
        if let Some(window) = self.autopilot.filter(|_| self.idle_mode) {
            if wants_jump(&self.session, &self.tuning, window) {
                jump(&mut self.session, &self.tuning);
            }
        }

        tick(&mut self.session, &self.tuning);
        self.dispatch_events();

        for (id, action) in self.timers.advance(1) {
            self.on_timer(id, action);
        }
    }

    /// Hand the current state to the presenter
    pub fn present(&mut self) {
        let frame = Frame {
            playfield: &self.tuning.playfield,
            actor: &self.session.actor,
            obstacle: &self.session.obstacle,
            score: self.session.score(),
            frozen: self.session.is_frozen(),
        };
        self.presenter.present(&frame);
    }

    /// Throw the round away and start a fresh one
    pub fn reset(&mut self) {
        self.banner.clear(&mut self.notifier, &mut self.timers);
        self.timers.clear();
        self.cadence.reset();
        self.session = Session::new(&self.tuning);
        log::info!("Round reset");
    }

    fn on_timer(&mut self, id: TimerId, action: TimerAction) {
        match action {
            TimerAction::HideMessage => {
                self.banner.expire(id, &mut self.notifier);
            }
            TimerAction::FullReset => {
                self.reset();
                self.host.reload();
            }
        }
    }

    fn dispatch_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::Jumped => log::trace!("Jump"),
                GameEvent::ObstaclePassed { score } => log::debug!("Score {}", score),
                GameEvent::PhaseChanged(phase) => log::info!("Phase -> {:?}", phase),
                GameEvent::ShowNotice(notice) => {
                    self.banner
                        .show(notice, &mut self.notifier, &mut self.timers);
                }
                GameEvent::RevealReward => self.notifier.reveal_supplementary_visual(),
                GameEvent::ScheduleReset { delay_ms } => {
                    log::info!("Resetting in {} ms", delay_ms);
                    self.timers.schedule(delay_ms, TimerAction::FullReset);
                }
            }
        }
    }
}
