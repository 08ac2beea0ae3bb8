//! Countdown component with one-second resolution.
//!
//! The countdown owns everything a single timer session needs: the remaining
//! whole seconds, the committed total, the running flag, and the repeating
//! tick that drives the decrement. Control follows the Bubble Tea message
//! pattern: `start()`, `stop()` and `toggle()` return commands that deliver a
//! [`StartStopMsg`], each scheduled tick arrives as a [`TickMsg`], and a
//! [`CompletedMsg`] is emitted exactly once when the countdown reaches zero.
//!
//! # Basic Usage
//!
//! ```rust
//! use minimal_timer::countdown::{Mode, Model};
//!
//! let mut countdown = Model::new();
//! assert_eq!(countdown.mode(), Mode::Idle);
//!
//! // Commit a 90 second countdown; the returned command schedules the
//! // first tick when handed to the runtime.
//! let cmd = countdown.arm(90);
//! assert!(cmd.is_some());
//! assert_eq!(countdown.view(), "01:30");
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for countdown instances.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Formats a whole number of seconds as a zero-padded `MM:SS` readout.
///
/// Minutes are not wrapped into hours: 125 minutes of remaining time renders
/// as `"125:00"`.
///
/// # Examples
///
/// ```rust
/// use minimal_timer::countdown::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(65), "01:05");
/// assert_eq!(format_clock(7500), "125:00");
/// ```
pub fn format_clock(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}

/// Parses a raw minutes field into a whole number of seconds.
///
/// Fractional minutes truncate toward zero, so `"1.5"` is 90 seconds and
/// `"0.3"` is 18. Input that fails to parse, is not finite, or is not
/// strictly positive yields `None`; this is the only validation performed
/// anywhere in the widget.
///
/// # Examples
///
/// ```rust
/// use minimal_timer::countdown::parse_minutes;
///
/// assert_eq!(parse_minutes("1"), Some(60));
/// assert_eq!(parse_minutes("0.5"), Some(30));
/// assert_eq!(parse_minutes("-5"), None);
/// assert_eq!(parse_minutes("abc"), None);
/// ```
pub fn parse_minutes(text: &str) -> Option<u64> {
    let minutes: f64 = text.trim().parse().ok()?;
    if !minutes.is_finite() || minutes <= 0.0 {
        return None;
    }
    Some((minutes * 60.0).floor() as u64)
}

/// The three mutually exclusive states a countdown session can be in.
///
/// The mode is derived from `(remaining, running)` rather than stored, so it
/// can never disagree with the underlying counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Nothing committed: the readout shows zero and input is accepted.
    Idle,
    /// A countdown is armed and ticking.
    Running,
    /// A countdown is armed but the tick is suspended.
    Paused,
}

/// Message delivered once per elapsed second while a countdown is running.
///
/// Ticks are filtered by instance `id` and by an internal scheduling tag, so
/// a tick chain that was superseded by a pause, reset, or re-arm dies on its
/// next delivery instead of decrementing a countdown it no longer owns.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Identifier of the countdown that scheduled this tick. Zero matches
    /// any instance.
    pub id: i64,
    /// Scheduling generation. Zero bypasses the staleness check.
    pub(crate) tag: i64,
}

/// Message used to pause or resume a countdown.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// Identifier of the countdown this message targets. Zero matches any
    /// instance.
    pub id: i64,
    pub(crate) running: bool,
}

/// Message emitted exactly once when a countdown reaches zero.
#[derive(Debug, Clone)]
pub struct CompletedMsg {
    /// Identifier of the countdown that finished.
    pub id: i64,
}

/// A one-second resolution countdown session.
///
/// The counters are private so the component can uphold its two invariants:
/// `remaining` never moves below zero, and `running` is always false once
/// `remaining` is zero.
#[derive(Debug, Clone)]
pub struct Model {
    remaining: u64,
    total: u64,
    running: bool,
    id: i64,
    tag: i64,
}

impl Model {
    /// Creates an idle countdown with nothing committed.
    pub fn new() -> Self {
        Self {
            remaining: 0,
            total: 0,
            running: false,
            id: next_id(),
            tag: 0,
        }
    }

    /// Returns the unique identifier of this countdown instance.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Remaining whole seconds.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// The total committed at arm time, in seconds.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Whether the countdown is actively ticking.
    pub fn running(&self) -> bool {
        self.running
    }

    /// Derives the current session mode from the counters.
    pub fn mode(&self) -> Mode {
        if self.remaining == 0 {
            Mode::Idle
        } else if self.running {
            Mode::Running
        } else {
            Mode::Paused
        }
    }

    /// Commits a new countdown of `total_seconds` and starts it.
    ///
    /// The total is recorded so [`fraction`](Model::fraction) can report
    /// progress against the originally committed duration for the whole
    /// session. Arming bumps the scheduling tag, which orphans any tick
    /// still in flight from a previous session.
    ///
    /// Arming zero seconds leaves the countdown idle and schedules nothing;
    /// otherwise the returned command delivers the first tick.
    pub fn arm(&mut self, total_seconds: u64) -> Option<Cmd> {
        self.remaining = total_seconds;
        self.total = total_seconds;
        self.tag += 1;
        if total_seconds == 0 {
            self.running = false;
            return None;
        }
        self.running = true;
        Some(self.schedule_tick())
    }

    /// Clears the session back to idle.
    ///
    /// Synchronous and idempotent. The tag bump cancels the live tick chain
    /// on its next delivery, so no trigger outlives the reset.
    pub fn reset(&mut self) {
        self.remaining = 0;
        self.total = 0;
        self.running = false;
        self.tag += 1;
    }

    /// Returns a command that resumes the countdown.
    pub fn start(&self) -> Cmd {
        self.start_stop(true)
    }

    /// Returns a command that pauses the countdown.
    pub fn stop(&self) -> Cmd {
        self.start_stop(false)
    }

    /// Returns a command that flips between running and paused.
    ///
    /// Toggling while idle is accepted and harmless: the tick guard keeps an
    /// idle countdown at zero no matter what the flag does.
    pub fn toggle(&self) -> Cmd {
        self.start_stop(!self.running)
    }

    /// Fraction of the committed duration still remaining, in `0.0..=1.0`.
    ///
    /// Zero remaining always reads as an empty bar. When no total is known
    /// the remainder itself serves as the denominator, which reads as a
    /// constant full bar rather than a meaningful percentage.
    pub fn fraction(&self) -> f64 {
        if self.remaining == 0 {
            return 0.0;
        }
        if self.total == 0 {
            return 1.0;
        }
        self.remaining as f64 / self.total as f64
    }

    fn schedule_tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(Duration::from_secs(1), move |_| {
            Box::new(TickMsg { id, tag }) as Msg
        })
    }

    fn completed(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(CompletedMsg { id }) as Msg
        })
    }

    fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }

    /// Processes countdown messages and reschedules the tick as needed.
    ///
    /// The active condition (`running` and seconds remaining) is re-checked
    /// on every message, and a tick command is only ever produced while it
    /// holds, so at most one live tick chain exists per session.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(start_stop) = msg.downcast_ref::<StartStopMsg>() {
            if start_stop.id != 0 && start_stop.id != self.id {
                return None;
            }
            // Idle sessions ignore the running flag entirely.
            if self.remaining == 0 {
                self.running = false;
                return None;
            }
            if start_stop.running == self.running {
                return None;
            }
            self.running = start_stop.running;
            if self.running {
                self.tag += 1;
                return Some(self.schedule_tick());
            }
            return None;
        }

        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            if tick.id != 0 && tick.id != self.id {
                return None;
            }
            // A stale tag means this tick belongs to a chain that a pause,
            // reset, or re-arm already replaced.
            if tick.tag > 0 && tick.tag != self.tag {
                return None;
            }
            if !self.running || self.remaining == 0 {
                return None;
            }

            self.remaining -= 1;
            self.tag += 1;
            if self.remaining == 0 {
                self.running = false;
                return Some(self.completed());
            }
            return Some(self.schedule_tick());
        }

        None
    }

    /// Renders the remaining time as `MM:SS`.
    pub fn view(&self) -> String {
        format_clock(self.remaining)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Model::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_once(m: &mut Model) -> Option<Cmd> {
        let msg = TickMsg {
            id: m.id(),
            tag: m.tag,
        };
        m.update(Box::new(msg))
    }

    fn set_running(m: &mut Model, running: bool) -> Option<Cmd> {
        let msg = StartStopMsg {
            id: m.id(),
            running,
        };
        m.update(Box::new(msg))
    }

    #[test]
    fn test_format_clock_zero_pads_both_fields() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(305), "05:05");
    }

    #[test]
    fn test_format_clock_round_trips_over_display_range() {
        for seconds in 0..=5999u64 {
            let s = format_clock(seconds);
            let (m_str, s_str) = s.split_once(':').expect("readout always has a colon");
            assert_eq!(m_str.len(), 2, "minutes padded to two digits: {s}");
            assert_eq!(s_str.len(), 2, "seconds padded to two digits: {s}");
            let minutes: u64 = m_str.parse().unwrap();
            let secs: u64 = s_str.parse().unwrap();
            assert!(secs < 60);
            assert_eq!(minutes * 60 + secs, seconds);
        }
    }

    #[test]
    fn test_format_clock_does_not_wrap_into_hours() {
        assert_eq!(format_clock(125 * 60), "125:00");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_parse_minutes_accepts_positive_values() {
        assert_eq!(parse_minutes("1"), Some(60));
        assert_eq!(parse_minutes("25"), Some(1500));
        assert_eq!(parse_minutes("0.5"), Some(30));
        assert_eq!(parse_minutes("1.5"), Some(90));
        assert_eq!(parse_minutes("0.3"), Some(18));
        assert_eq!(parse_minutes(" 2 "), Some(120));
    }

    #[test]
    fn test_parse_minutes_rejects_invalid_input() {
        assert_eq!(parse_minutes("0"), None);
        assert_eq!(parse_minutes("-5"), None);
        assert_eq!(parse_minutes("abc"), None);
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("inf"), None);
        assert_eq!(parse_minutes("nan"), None);
    }

    #[test]
    fn test_new_is_idle() {
        let m = Model::new();
        assert_eq!(m.remaining(), 0);
        assert_eq!(m.total(), 0);
        assert!(!m.running());
        assert_eq!(m.mode(), Mode::Idle);
        assert_eq!(m.view(), "00:00");
    }

    #[test]
    fn test_arm_commits_and_starts() {
        let mut m = Model::new();
        let cmd = m.arm(60);
        assert!(cmd.is_some());
        assert_eq!(m.remaining(), 60);
        assert_eq!(m.total(), 60);
        assert!(m.running());
        assert_eq!(m.mode(), Mode::Running);
        assert_eq!(m.view(), "01:00");
    }

    #[test]
    fn test_arm_zero_seconds_stays_idle() {
        let mut m = Model::new();
        let cmd = m.arm(0);
        assert!(cmd.is_none());
        assert_eq!(m.mode(), Mode::Idle);
        assert!(!m.running());
    }

    #[test]
    fn test_tick_decrements_by_exactly_one() {
        let mut m = Model::new();
        let _ = m.arm(60);
        let cmd = tick_once(&mut m);
        assert!(cmd.is_some());
        assert_eq!(m.remaining(), 59);
        assert_eq!(m.view(), "00:59");
        // The committed total is unaffected by elapsing time.
        assert_eq!(m.total(), 60);
    }

    #[test]
    fn test_countdown_runs_to_zero_and_stops() {
        let mut m = Model::new();
        let _ = m.arm(5);
        for expected in (0..5u64).rev() {
            let cmd = tick_once(&mut m);
            assert!(cmd.is_some());
            assert_eq!(m.remaining(), expected);
        }
        assert_eq!(m.mode(), Mode::Idle);
        assert!(!m.running());
        assert_eq!(m.view(), "00:00");

        // Once finished, further ticks change nothing and schedule nothing.
        let cmd = tick_once(&mut m);
        assert!(cmd.is_none());
        assert_eq!(m.remaining(), 0);
        assert!(!m.running());
    }

    #[test]
    fn test_pause_suspends_without_touching_remaining() {
        let mut m = Model::new();
        let _ = m.arm(30);
        let cmd = set_running(&mut m, false);
        assert!(cmd.is_none());
        assert_eq!(m.mode(), Mode::Paused);
        assert_eq!(m.remaining(), 30);

        // A tick from the superseded chain must not decrement a paused
        // session.
        let cmd = tick_once(&mut m);
        assert!(cmd.is_none());
        assert_eq!(m.remaining(), 30);
    }

    #[test]
    fn test_resume_schedules_a_fresh_tick_chain() {
        let mut m = Model::new();
        let _ = m.arm(30);
        let stale_tag = m.tag;
        let _ = set_running(&mut m, false);
        let cmd = set_running(&mut m, true);
        assert!(cmd.is_some());
        assert_eq!(m.mode(), Mode::Running);

        // The pre-pause chain carries an old tag and is rejected.
        let stale = TickMsg {
            id: m.id(),
            tag: stale_tag,
        };
        assert!(m.update(Box::new(stale)).is_none());
        assert_eq!(m.remaining(), 30);
    }

    #[test]
    fn test_toggle_twice_restores_running_state() {
        let mut m = Model::new();
        let _ = m.arm(10);
        let was_running = m.running();
        let _ = set_running(&mut m, !was_running);
        let _ = set_running(&mut m, was_running);
        assert_eq!(m.running(), was_running);
        assert_eq!(m.remaining(), 10);
    }

    #[test]
    fn test_start_stop_while_idle_is_inert() {
        let mut m = Model::new();
        let cmd = set_running(&mut m, true);
        assert!(cmd.is_none());
        assert!(!m.running());
        assert_eq!(m.mode(), Mode::Idle);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut m = Model::new();
        let _ = m.arm(120);
        let _ = tick_once(&mut m);
        m.reset();
        let first = (m.remaining(), m.total(), m.running(), m.mode());
        m.reset();
        let second = (m.remaining(), m.total(), m.running(), m.mode());
        assert_eq!(first, second);
        assert_eq!(first, (0, 0, false, Mode::Idle));
    }

    #[test]
    fn test_reset_orphans_the_live_tick_chain() {
        let mut m = Model::new();
        let _ = m.arm(10);
        let live_tag = m.tag;
        m.reset();
        let _ = m.arm(10);

        let stale = TickMsg {
            id: m.id(),
            tag: live_tag,
        };
        assert!(m.update(Box::new(stale)).is_none());
        assert_eq!(m.remaining(), 10);
    }

    #[test]
    fn test_ticks_for_other_instances_are_ignored() {
        let mut a = Model::new();
        let b = Model::new();
        assert_ne!(a.id(), b.id());

        let _ = a.arm(10);
        let foreign = TickMsg { id: b.id(), tag: 0 };
        assert!(a.update(Box::new(foreign)).is_none());
        assert_eq!(a.remaining(), 10);
    }

    #[test]
    fn test_wildcard_id_and_tag_are_accepted() {
        let mut m = Model::new();
        let _ = m.arm(10);
        let wildcard = TickMsg { id: 0, tag: 0 };
        assert!(m.update(Box::new(wildcard)).is_some());
        assert_eq!(m.remaining(), 9);
    }

    #[test]
    fn test_completion_emits_completed_once() {
        let mut m = Model::new();
        let _ = m.arm(1);
        // The final tick flips the session idle and still returns a command,
        // which carries the completion notice rather than another tick.
        let cmd = tick_once(&mut m);
        assert!(cmd.is_some());
        assert_eq!(m.mode(), Mode::Idle);

        let cmd = tick_once(&mut m);
        assert!(cmd.is_none());
    }

    #[test]
    fn test_fraction_tracks_committed_total() {
        let mut m = Model::new();
        assert_eq!(m.fraction(), 0.0);

        let _ = m.arm(100);
        assert_eq!(m.fraction(), 1.0);
        for _ in 0..25 {
            let _ = tick_once(&mut m);
        }
        assert!((m.fraction() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_fraction_falls_back_to_full_without_a_total() {
        // A session with seconds remaining but no recorded total reads as a
        // constant full bar.
        let mut m = Model::new();
        m.remaining = 42;
        m.total = 0;
        assert_eq!(m.fraction(), 1.0);
    }

    #[test]
    fn test_unique_ids() {
        let a = Model::new();
        let b = Model::new();
        assert_ne!(a.id(), b.id());
    }
}
