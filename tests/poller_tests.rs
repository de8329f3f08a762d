// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the capture countdown

use plant_monitor::api::CaptureStatus;
use plant_monitor::app::poller::CapturePoller;

fn status(active: bool, next_in: Option<u64>) -> CaptureStatus {
    CaptureStatus { active, next_in }
}

#[test]
fn test_active_interval_counts_down() {
    // Server reports a running capture with ten minutes to go
    let mut poller = CapturePoller::new();
    poller.apply_status(status(true, Some(10)));

    assert!(poller.is_active());
    assert!(poller.switch_on());
    assert_eq!(poller.interval_total_secs(), 600);
    assert_eq!(poller.percent(), 0.0);
    assert_eq!(poller.remaining_minutes(), Some(10));

    // Five minutes of local ticks
    for _ in 0..300 {
        poller.tick();
    }

    assert_eq!(poller.percent(), 50.0);
    assert_eq!(poller.remaining_minutes(), Some(5));
}

#[test]
fn test_inactive_status_clears_countdown() {
    let mut poller = CapturePoller::new();
    poller.apply_status(status(true, Some(10)));
    for _ in 0..60 {
        poller.tick();
    }

    poller.apply_status(status(false, None));

    assert!(!poller.is_active());
    assert!(!poller.switch_on());
    assert_eq!(poller.percent(), 0.0);
    assert_eq!(
        poller.remaining_minutes(),
        None,
        "Inactive state should render no countdown"
    );
}

#[test]
fn test_failed_toggle_reverts_switch_only() {
    let mut poller = CapturePoller::new();
    poller.apply_status(status(true, Some(10)));
    for _ in 0..30 {
        poller.tick();
    }
    let before = poller;

    assert!(poller.begin_toggle());
    assert!(
        !poller.switch_on(),
        "Optimistic flip should show the requested position"
    );

    poller.fail_toggle();

    assert_eq!(
        poller, before,
        "A failed toggle must leave the countdown untouched"
    );
}

#[test]
fn test_successful_toggle_applies_server_answer() {
    let mut poller = CapturePoller::new();
    poller.apply_status(status(false, None));

    assert!(poller.begin_toggle());
    assert!(poller.toggle_pending());

    poller.complete_toggle(status(true, Some(60)));

    assert!(poller.is_active());
    assert!(poller.switch_on());
    assert!(!poller.toggle_pending());
    assert_eq!(poller.interval_total_secs(), 3600);
    assert_eq!(poller.remaining_minutes(), Some(60));
}

#[test]
fn test_reconcile_restarts_interval() {
    // Identical answers a minute apart restart the countdown from zero
    let mut poller = CapturePoller::new();
    poller.apply_status(status(true, Some(10)));
    let fresh = poller;

    for _ in 0..60 {
        poller.tick();
    }
    assert_eq!(poller.remaining_minutes(), Some(9));

    poller.apply_status(status(true, Some(10)));
    assert_eq!(poller.elapsed_secs(), 0);
    assert_eq!(poller.remaining_minutes(), Some(10));
    assert_eq!(
        poller, fresh,
        "Identical responses must reconcile to identical state"
    );
}

#[test]
fn test_percent_never_decreases_between_reconciliations() {
    let mut poller = CapturePoller::new();
    poller.apply_status(status(true, Some(3)));

    let mut prev = poller.percent();
    for _ in 0..240 {
        poller.tick();
        let now = poller.percent();
        assert!(
            now >= prev,
            "Progress must be monotone between reconciliations"
        );
        prev = now;
    }
    assert_eq!(prev, 100.0);
}
