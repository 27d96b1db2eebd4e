//! Periodic refresh tick for the live view.
//!
//! The tick is a scheduled channel, not a sleeping thread: the presentation
//! loop asks `due()` whenever convenient and re-sorts when a tick has
//! elapsed. Dropping the ticker cancels the schedule.

use std::time::{Duration, Instant};

use crossbeam_channel::{tick, Receiver};

/// Default refresh period while a capture is recording.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(300);

/// Non-blocking periodic trigger for `refresh_on_tick`.
#[derive(Debug)]
pub struct RefreshTicker {
    rx: Receiver<Instant>,
}

impl Default for RefreshTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshTicker {
    /// Ticker at the default 300 ms refresh period.
    #[must_use]
    pub fn new() -> Self {
        Self::with_period(REFRESH_INTERVAL)
    }

    #[must_use]
    pub fn with_period(period: Duration) -> Self {
        Self { rx: tick(period) }
    }

    /// True if at least one tick elapsed since the last call.
    ///
    /// Missed ticks collapse into a single refresh; a stalled presentation
    /// loop does not replay a backlog of sorts.
    pub fn due(&self) -> bool {
        let mut due = false;
        while self.rx.try_recv().is_ok() {
            due = true;
        }
        due
    }
}
