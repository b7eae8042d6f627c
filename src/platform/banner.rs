//! Message banner with auto-expiring transient messages

use super::NotificationSink;
use super::timers::{TimerAction, TimerId, TimerQueue};
use crate::consts::MESSAGE_DURATION_MS;
use crate::sim::Notice;

/// Tracks what the banner shows and the timer that will hide it
///
/// Every new message cancels the pending hide of the previous one, so a
/// stale timer can never blank out a newer message.
#[derive(Debug, Clone, Default)]
pub struct MessageBanner {
    showing: Option<Notice>,
    pending_hide: Option<TimerId>,
}

impl MessageBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn showing(&self) -> Option<Notice> {
        self.showing
    }

    pub fn show(&mut self, notice: Notice, sink: &mut impl NotificationSink, timers: &mut TimerQueue) {
        if let Some(id) = self.pending_hide.take() {
            timers.cancel(id);
        }

        sink.show_message(notice.text(), notice.persistent());
        self.showing = Some(notice);

        if !notice.persistent() {
            self.pending_hide = Some(timers.schedule(MESSAGE_DURATION_MS, TimerAction::HideMessage));
        }
    }

    /// A hide timer fired; ignored unless it is the one we are waiting on
    pub fn expire(&mut self, id: TimerId, sink: &mut impl NotificationSink) -> bool {
        if self.pending_hide != Some(id) {
            return false;
        }
        self.pending_hide = None;
        self.showing = None;
        sink.hide_message();
        true
    }

    /// Hide whatever is showing and forget any pending timer
    pub fn clear(&mut self, sink: &mut impl NotificationSink, timers: &mut TimerQueue) {
        if let Some(id) = self.pending_hide.take() {
            timers.cancel(id);
        }
        if self.showing.take().is_some() {
            sink.hide_message();
        }
    }
}
