//! Log-only presenter and sinks for native runs

use super::{Frame, LifecycleHost, NotificationSink, Presenter};

/// Logs the score whenever it changes
#[derive(Debug, Default)]
pub struct LogPresenter {
    last_score: Option<u32>,
    pub frames: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        if self.last_score != Some(frame.score) {
            log::info!("Score: {}", frame.score);
            self.last_score = Some(frame.score);
        }
        log::trace!(
            "runner ({:.0}, {:.0}) obstacle ({:.0}, {:.0}) frozen={}",
            frame.actor.pos.x,
            frame.actor.pos.y,
            frame.obstacle.pos.x,
            frame.obstacle.pos.y,
            frame.frozen
        );
    }
}

/// Logs messages and remembers the one on screen
#[derive(Debug, Default)]
pub struct LogNotifier {
    pub visible: Option<String>,
    pub revealed: bool,
}

impl NotificationSink for LogNotifier {
    fn show_message(&mut self, text: &str, persistent: bool) {
        log::info!("Message: {} (persistent: {})", text, persistent);
        self.visible = Some(text.to_string());
    }

    fn hide_message(&mut self) {
        log::debug!("Message hidden");
        self.visible = None;
    }

    fn reveal_supplementary_visual(&mut self) {
        log::info!("Reward revealed");
        self.revealed = true;
    }
}

/// Counts reloads; a native process has no page to reload
#[derive(Debug, Default)]
pub struct LogHost {
    pub reloads: u32,
}

impl LifecycleHost for LogHost {
    fn reload(&mut self) {
        self.reloads += 1;
        log::info!("Reload #{}", self.reloads);
    }
}
