// SPDX-License-Identifier: GPL-3.0-only

//! Background capture countdown
//!
//! One small state machine drives the dashboard's capture card: it is
//! reconciled against the server once a minute, ticks locally once a second
//! to move the progress bar between reconciliations, and carries the
//! optimistic state of the on/off toggle while a request is on the wire.

use crate::api::CaptureStatus;

/// In-flight state of the background capture toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleFlight {
    /// No toggle request outstanding
    #[default]
    Idle,
    /// A toggle request is on the wire; remembers the switch position to
    /// restore if the server rejects it
    Pending { prior_switch_on: bool },
}

/// Countdown state for the background capture cycle
///
/// The server is authoritative: every status response overwrites this state
/// wholesale, so late or duplicate responses are harmless. The local tick
/// only ever advances `elapsed_secs`; everything shown in the UI derives
/// from [`CapturePoller::percent`] and [`CapturePoller::remaining_minutes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapturePoller {
    active: bool,
    switch_on: bool,
    interval_total_secs: u64,
    elapsed_secs: u64,
    flight: ToggleFlight,
}

impl CapturePoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether background capture was running at the last reconciliation
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Position the on/off control should display
    ///
    /// Tracks [`CapturePoller::is_active`] except while a toggle is in
    /// flight, when it already shows the requested position.
    pub fn switch_on(&self) -> bool {
        self.switch_on
    }

    /// Whether a toggle request is waiting for the server
    pub fn toggle_pending(&self) -> bool {
        matches!(self.flight, ToggleFlight::Pending { .. })
    }

    /// Full capture interval in seconds, zero while none is running
    pub fn interval_total_secs(&self) -> u64 {
        self.interval_total_secs
    }

    /// Seconds counted locally since the last reconciliation
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Overwrite the countdown with a fresh status response
    ///
    /// The interval restarts from zero on every application, so two identical
    /// responses leave identical state. While a toggle is in flight the
    /// switch keeps its optimistic position; the toggle response settles it.
    pub fn apply_status(&mut self, status: CaptureStatus) {
        self.active = status.active;
        if !self.toggle_pending() {
            self.switch_on = status.active;
        }
        self.interval_total_secs = if status.active {
            status.next_in.unwrap_or(0) * 60
        } else {
            0
        };
        self.elapsed_secs = 0;
    }

    /// Count one local second
    ///
    /// Holds still while no interval is known (total of zero) and while a
    /// toggle response is outstanding, so the bar never runs against an
    /// interval that is about to change.
    pub fn tick(&mut self) {
        if self.interval_total_secs == 0 || self.toggle_pending() {
            return;
        }
        self.elapsed_secs += 1;
    }

    /// Flip the switch optimistically and mark a toggle in flight
    ///
    /// Returns false, and changes nothing, when a toggle is already pending.
    pub fn begin_toggle(&mut self) -> bool {
        if self.toggle_pending() {
            return false;
        }
        self.flight = ToggleFlight::Pending {
            prior_switch_on: self.switch_on,
        };
        self.switch_on = !self.switch_on;
        true
    }

    /// Apply the server's answer to a toggle request
    pub fn complete_toggle(&mut self, status: CaptureStatus) {
        self.flight = ToggleFlight::Idle;
        self.apply_status(status);
    }

    /// Roll the switch back after a failed toggle request
    ///
    /// Only the control position reverts; the countdown keeps the last
    /// reconciled state.
    pub fn fail_toggle(&mut self) {
        if let ToggleFlight::Pending { prior_switch_on } =
            std::mem::replace(&mut self.flight, ToggleFlight::Idle)
        {
            self.switch_on = prior_switch_on;
        }
    }

    /// Progress through the current interval, in percent within `0..=100`
    pub fn percent(&self) -> f32 {
        if self.interval_total_secs == 0 {
            return 0.0;
        }
        let percent = self.elapsed_secs as f32 / self.interval_total_secs as f32 * 100.0;
        percent.min(100.0)
    }

    /// Whole minutes until the next capture, rounded up
    ///
    /// None while no interval is running, which renders as an empty label.
    pub fn remaining_minutes(&self) -> Option<u64> {
        if self.interval_total_secs == 0 {
            return None;
        }
        let left = self.interval_total_secs.saturating_sub(self.elapsed_secs);
        Some(left.div_ceil(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(active: bool, next_in: Option<u64>) -> CaptureStatus {
        CaptureStatus { active, next_in }
    }

    #[test]
    fn test_percent_is_clamped_to_100() {
        let mut poller = CapturePoller::new();
        poller.apply_status(status(true, Some(1)));
        for _ in 0..120 {
            poller.tick();
        }
        assert_eq!(poller.percent(), 100.0);
        assert_eq!(poller.remaining_minutes(), Some(0));
    }

    #[test]
    fn test_zero_interval_shows_empty_progress() {
        let mut poller = CapturePoller::new();
        poller.apply_status(status(true, Some(0)));
        poller.tick();
        poller.tick();
        assert_eq!(poller.percent(), 0.0);
        assert_eq!(poller.remaining_minutes(), None);
        assert!(poller.is_active());
    }

    #[test]
    fn test_remaining_minutes_rounds_up() {
        let mut poller = CapturePoller::new();
        poller.apply_status(status(true, Some(2)));
        poller.tick();
        // 119 seconds left still reads as 2 minutes
        assert_eq!(poller.remaining_minutes(), Some(2));
        for _ in 0..59 {
            poller.tick();
        }
        assert_eq!(poller.remaining_minutes(), Some(1));
    }

    #[test]
    fn test_second_toggle_is_ignored_while_pending() {
        let mut poller = CapturePoller::new();
        assert!(poller.begin_toggle());
        assert!(poller.switch_on());
        assert!(!poller.begin_toggle());
        assert!(poller.switch_on());
    }

    #[test]
    fn test_tick_holds_still_while_toggle_pending() {
        let mut poller = CapturePoller::new();
        poller.apply_status(status(true, Some(10)));
        poller.tick();
        assert_eq!(poller.elapsed_secs(), 1);

        poller.begin_toggle();
        poller.tick();
        poller.tick();
        assert_eq!(poller.elapsed_secs(), 1);

        poller.complete_toggle(status(false, None));
        assert_eq!(poller.elapsed_secs(), 0);
        assert!(!poller.switch_on());
    }

    #[test]
    fn test_reconcile_keeps_optimistic_switch_while_pending() {
        let mut poller = CapturePoller::new();
        poller.apply_status(status(false, None));
        poller.begin_toggle();

        // A periodic reconcile answering with the old state must not undo
        // the optimistic flip.
        poller.apply_status(status(false, None));
        assert!(poller.switch_on());

        poller.complete_toggle(status(true, Some(10)));
        assert!(poller.switch_on());
        assert_eq!(poller.interval_total_secs(), 600);
    }
}
