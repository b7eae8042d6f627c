//! Full rounds driven through the runner with recording sinks

use hurdle_run::consts::{RESET_DELAY_MS, TICK_MS};
use hurdle_run::platform::{Frame, LifecycleHost, NotificationSink, Presenter, Runner};
use hurdle_run::sim::{GamePhase, Notice};
use hurdle_run::{ConfigError, DeviceProfile, Playfield, Viewport, ms_to_ticks};

#[derive(Debug, Default)]
struct RecordingPresenter {
    frames: Vec<(u32, bool)>,
    resizes: Vec<Playfield>,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, frame: &Frame<'_>) {
        self.frames.push((frame.score, frame.frozen));
    }

    fn resize(&mut self, playfield: &Playfield) {
        self.resizes.push(*playfield);
    }
}

#[derive(Debug, Default)]
struct RecordingNotifier {
    shown: Vec<(String, bool)>,
    hides: usize,
    reveals: usize,
}

impl NotificationSink for RecordingNotifier {
    fn show_message(&mut self, text: &str, persistent: bool) {
        self.shown.push((text.to_string(), persistent));
    }

    fn hide_message(&mut self) {
        self.hides += 1;
    }

    fn reveal_supplementary_visual(&mut self) {
        self.reveals += 1;
    }
}

#[derive(Debug, Default)]
struct RecordingHost {
    reloads: usize,
}

impl LifecycleHost for RecordingHost {
    fn reload(&mut self) {
        self.reloads += 1;
    }
}

type TestRunner = Runner<RecordingPresenter, RecordingNotifier, RecordingHost>;

fn runner(profile: DeviceProfile, viewport: Viewport) -> TestRunner {
    Runner::new(
        profile,
        viewport,
        RecordingPresenter::default(),
        RecordingNotifier::default(),
        RecordingHost::default(),
    )
    .expect("valid configuration")
}

fn desktop() -> TestRunner {
    runner(DeviceProfile::Desktop, Viewport::new(1280.0, 720.0))
}

#[test]
fn idle_round_is_won_and_stays_won() {
    let mut game = desktop();
    game.set_idle_mode(true);

    let mut steps = 0;
    while game.session().phase() == GamePhase::Running {
        game.step();
        steps += 1;
        assert!(steps < 2_000, "autopilot never won");
    }

    // One pass every 127 ticks on desktop
    assert_eq!(steps, 5 * 127);
    assert_eq!(game.session().phase(), GamePhase::PausedWon);
    assert_eq!(game.session().score(), 5);

    let notifier = game.notifier();
    assert_eq!(
        notifier.shown,
        vec![
            (Notice::AlmostThere.text().to_string(), false),
            (Notice::Congratulations.text().to_string(), true),
        ]
    );
    // The "almost there" banner expired between pass 4 and 5
    assert_eq!(notifier.hides, 1);
    assert_eq!(notifier.reveals, 1);
    assert_eq!(game.timers().pending(), 0);

    let actor = game.session().actor;
    let obstacle = game.session().obstacle;
    for _ in 0..600 {
        game.on_jump_intent();
        game.advance(TICK_MS + 0.01);
    }

    let session = game.session();
    assert_eq!(session.score(), 5);
    assert_eq!(session.phase(), GamePhase::PausedWon);
    assert_eq!(session.actor, actor);
    assert_eq!(session.obstacle, obstacle);
    assert_eq!(game.notifier().shown.len(), 2);
    assert_eq!(game.notifier().reveals, 1);
    assert_eq!(game.host().reloads, 0);
    // Still drawing, flagged frozen
    assert_eq!(game.presenter().frames.last(), Some(&(5, true)));
}

#[test]
fn collision_loses_once_and_resets_after_delay() {
    let mut game = desktop();

    for _ in 0..105 {
        game.step();
    }
    assert_eq!(game.session().phase(), GamePhase::OverLost);
    assert_eq!(
        game.notifier().shown,
        vec![(Notice::Encouragement.text().to_string(), true)]
    );
    assert_eq!(game.timers().pending(), 1);

    // Frozen ticks never schedule a second reset
    for _ in 0..100 {
        game.step();
        assert!(game.timers().pending() <= 1);
    }
    assert_eq!(game.host().reloads, 0);
    assert_eq!(game.session().phase(), GamePhase::OverLost);
    assert_eq!(game.notifier().shown.len(), 1);

    let delay = ms_to_ticks(RESET_DELAY_MS) as usize;
    for _ in 0..delay {
        game.step();
    }
    assert_eq!(game.host().reloads, 1);
    assert_eq!(game.session().phase(), GamePhase::Running);
    assert_eq!(game.session().score(), 0);
    // The loss banner is taken down with the old round
    assert_eq!(game.notifier().hides, 1);
    assert_eq!(game.timers().pending(), 0);
}

#[test]
fn reset_waits_exactly_the_configured_delay() {
    let mut game = desktop();

    let mut steps = 0;
    while game.session().phase() == GamePhase::Running {
        game.step();
        steps += 1;
    }
    assert_eq!(steps, 105);

    // The reset is scheduled before the losing tick's timers run, so that
    // tick is the first of the delay
    let delay = ms_to_ticks(RESET_DELAY_MS);
    assert_eq!(delay, 180);
    for _ in 0..delay - 2 {
        game.step();
    }
    assert_eq!(game.host().reloads, 0);
    assert_eq!(game.session().phase(), GamePhase::OverLost);

    game.step();
    assert_eq!(game.host().reloads, 1);
    assert_eq!(game.session().phase(), GamePhase::Running);
}

#[test]
fn jump_intent_applies_immediately() {
    let mut game = desktop();

    assert!(game.on_jump_intent());
    assert!(game.session().actor.airborne);
    assert!(game.session().actor.vy < 0.0);

    // Mid-air intents are dropped
    let actor = game.session().actor;
    assert!(!game.on_jump_intent());
    assert_eq!(game.session().actor, actor);

    game.advance(TICK_MS + 0.01);
    assert_eq!(game.session().time_ticks, 1);
    assert_eq!(game.session().actor.pos.y, 136.0);
}

#[test]
fn no_jump_after_loss() {
    let mut game = desktop();
    for _ in 0..105 {
        game.step();
    }
    assert_eq!(game.session().phase(), GamePhase::OverLost);

    let actor = game.session().actor;
    assert!(!game.on_jump_intent());
    assert_eq!(game.session().actor, actor);
}

#[test]
fn resize_refits_the_round() {
    let mut game = runner(DeviceProfile::Mobile, Viewport::new(400.0, 800.0));
    assert_eq!(game.tuning().playfield.width, 380.0);

    for _ in 0..10 {
        game.step();
    }
    assert!(game.session().obstacle.pos.x < 380.0);

    game.on_resize(Viewport::new(800.0, 1600.0)).expect("bigger screen");
    let tuning = *game.tuning();
    // 800 * 0.95 = 760, min(960, 250.8) = 250
    assert_eq!(tuning.playfield, Playfield::new(760.0, 250.0, 20.0));
    assert_eq!(game.session().obstacle.pos.x, 760.0);
    assert_eq!(
        game.session().actor.pos.y,
        tuning.playfield.floor_top(tuning.runner_size)
    );
    assert_eq!(game.presenter().resizes.len(), 2);
}

#[test]
fn bad_resize_keeps_previous_tuning() {
    let mut game = desktop();
    let before = *game.tuning();

    let err = game.on_resize(Viewport::new(-1.0, 500.0)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidViewport { .. }));
    assert_eq!(*game.tuning(), before);
    assert_eq!(game.presenter().resizes.len(), 1);
}

#[test]
fn bad_configuration_fails_fast() {
    let result = Runner::new(
        DeviceProfile::Mobile,
        Viewport::new(40.0, 40.0),
        RecordingPresenter::default(),
        RecordingNotifier::default(),
        RecordingHost::default(),
    );
    assert!(result.is_err());
}
