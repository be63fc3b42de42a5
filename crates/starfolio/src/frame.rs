//! Frame pacing for the render loop.

use std::time::{Duration, Instant};

/// Schedules one frame per interval.
///
/// Holds at most one pending deadline. Frames never overlap: the caller
/// polls, draws, then polls again. After [`FrameScheduler::cancel`] nothing
/// is due until [`FrameScheduler::start`] is called again.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    next_frame: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_frame: None,
        }
    }

    /// Schedule the first frame for `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_frame = Some(now);
    }

    /// Whether a frame is pending.
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.next_frame.is_some()
    }

    /// Time left until the pending frame, or `None` when cancelled.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.next_frame
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` if a frame is due at `now` and schedules the next one.
    ///
    /// A loop that fell behind skips the missed frames instead of bursting.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_frame else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let next = deadline + self.interval;
        self.next_frame = Some(if next <= now { now + self.interval } else { next });
        true
    }

    /// Drop the pending frame.
    pub fn cancel(&mut self) {
        self.next_frame = None;
    }
}
