// SPDX-License-Identifier: MPL-2.0
//! The sequencer: timer set and lifecycle controller for the splash
//! choreography.
//!
//! Seven timer actions are armed by [`Sequencer::start`]: three one-shot
//! stage reveals, two self-terminating progress ramps, and two rotation
//! timers that run for as long as the sequence is active. The sequencer
//! owns every armed deadline, so [`Sequencer::stop`] disarms all of them
//! at once and nothing can mutate the state afterwards.
//!
//! Time is simulated: callers feed elapsed time into
//! [`Sequencer::advance_to`] and due actions fire in deadline order,
//! catching up exactly over arbitrarily large gaps. Ties between
//! independently scheduled timers fire in a fixed internal order that
//! callers must not rely on.

use super::schedule::Schedule;
use super::state::SplashState;
use std::time::Duration;

// Timer slots, in tie-break order.
const REVEAL_BADGES: usize = 0;
const REVEAL_TEXT: usize = 1;
const REVEAL_LOGO: usize = 2;
const PERCENT_RAMP: usize = 3;
const BAR_RAMP: usize = 4;
const DOT_ROTATION: usize = 5;
const HIGHLIGHT_ROTATION: usize = 6;
const TIMER_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Created but not yet started.
    Idle,
    /// Timers armed, accepting `advance_to` calls.
    Running,
    /// Torn down; the state is frozen.
    Stopped,
}

/// Drives the splash state over simulated time.
#[derive(Debug)]
pub struct Sequencer {
    schedule: Schedule,
    state: SplashState,
    /// Absolute deadline of the next firing per timer slot; `None` means
    /// the slot is disarmed (never armed, finished, or torn down).
    deadlines: [Option<Duration>; TIMER_COUNT],
    elapsed: Duration,
    phase: Phase,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(Schedule::default())
    }
}

impl Sequencer {
    /// Creates an idle sequencer. The schedule is expected to be validated
    /// (see [`Schedule::validate`]); the reference schedule always is.
    #[must_use]
    pub fn new(schedule: Schedule) -> Self {
        debug_assert!(schedule.validate().is_ok());
        Self {
            schedule,
            state: SplashState::new(),
            deadlines: [None; TIMER_COUNT],
            elapsed: Duration::ZERO,
            phase: Phase::Idle,
        }
    }

    /// Arms all seven timer actions at elapsed time zero.
    ///
    /// Starting an already-started sequencer is a usage error; the call is
    /// ignored (with a warning) so duplicate timers can never be armed and
    /// the mutation rate cannot be doubled. Each sequence run owns its own
    /// sequencer, so restarting after [`stop`](Self::stop) is also ignored.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Running => {
                log::warn!("splash sequencer already started; ignoring start()");
                return;
            }
            Phase::Stopped => {
                log::warn!("splash sequencer already stopped; ignoring start()");
                return;
            }
            Phase::Idle => {}
        }
        self.phase = Phase::Running;
        self.deadlines = [
            Some(self.schedule.reveal_badges),
            Some(self.schedule.reveal_text),
            Some(self.schedule.reveal_logo),
            Some(self.schedule.percent_period),
            Some(self.schedule.bar_period),
            Some(self.schedule.dot_period),
            Some(self.schedule.highlight_period),
        ];
    }

    /// Disarms every timer action, including ones that already finished
    /// internally (a no-op there). After this returns no action can fire
    /// and the state is frozen. Idempotent.
    pub fn stop(&mut self) {
        self.deadlines = [None; TIMER_COUNT];
        self.phase = Phase::Stopped;
    }

    /// Advances simulated time to `target` elapsed time, firing every due
    /// action in deadline order. Targets at or before the current elapsed
    /// time are ignored; time never moves backwards.
    pub fn advance_to(&mut self, target: Duration) {
        if self.phase != Phase::Running || target <= self.elapsed {
            return;
        }
        while let Some((slot, deadline)) = self.next_due(target) {
            self.fire(slot, deadline);
        }
        self.elapsed = target;
    }

    /// Advances simulated time by `delta`.
    pub fn advance_by(&mut self, delta: Duration) {
        self.advance_to(self.elapsed + delta);
    }

    /// Read-only view of the observable state.
    #[must_use]
    pub fn state(&self) -> &SplashState {
        &self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Whether the terminating parts of the choreography have played out:
    /// both ramps pinned at their cap and the final stage revealed. The
    /// rotation timers keep running regardless.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.percent_done() && self.state.bar_done() && self.state.logo_visible()
    }

    /// Simulated elapsed time reached so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Earliest armed deadline at or before `target`. Ties resolve to the
    /// lowest slot.
    fn next_due(&self, target: Duration) -> Option<(usize, Duration)> {
        let mut due: Option<(usize, Duration)> = None;
        for (slot, deadline) in self.deadlines.iter().enumerate() {
            if let Some(deadline) = *deadline {
                if deadline <= target && due.is_none_or(|(_, best)| deadline < best) {
                    due = Some((slot, deadline));
                }
            }
        }
        due
    }

    /// Applies one timer firing and re-arms or disarms the slot.
    fn fire(&mut self, slot: usize, deadline: Duration) {
        self.elapsed = deadline;
        self.deadlines[slot] = match slot {
            REVEAL_BADGES => {
                self.state.reveal_badges();
                None
            }
            REVEAL_TEXT => {
                self.state.reveal_text();
                None
            }
            REVEAL_LOGO => {
                self.state.reveal_logo();
                None
            }
            PERCENT_RAMP => {
                self.state.advance_percent(self.schedule.percent_step);
                if self.state.percent_done() {
                    None
                } else {
                    Some(deadline + self.schedule.percent_period)
                }
            }
            BAR_RAMP => {
                self.state.advance_bar(self.schedule.bar_step);
                if self.state.bar_done() {
                    None
                } else {
                    Some(deadline + self.schedule.bar_period)
                }
            }
            DOT_ROTATION => {
                self.state.advance_dot();
                Some(deadline + self.schedule.dot_period)
            }
            HIGHLIGHT_ROTATION => {
                self.state.advance_highlight();
                Some(deadline + self.schedule.highlight_period)
            }
            _ => unreachable!("unknown timer slot {slot}"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::state::{BADGE_COUNT, DOT_COUNT};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn started() -> Sequencer {
        let mut sequencer = Sequencer::new(Schedule::default());
        sequencer.start();
        sequencer
    }

    #[test]
    fn advance_before_start_is_a_no_op() {
        let mut sequencer = Sequencer::new(Schedule::default());
        sequencer.advance_to(ms(10_000));
        assert_eq!(sequencer.state(), &SplashState::new());
        assert!(!sequencer.is_running());
    }

    #[test]
    fn reveals_fire_at_reference_delays() {
        let mut sequencer = started();

        sequencer.advance_to(ms(599));
        assert!(!sequencer.state().badges_visible());

        sequencer.advance_to(ms(600));
        assert!(sequencer.state().badges_visible());
        assert!(!sequencer.state().text_visible());

        sequencer.advance_to(ms(1399));
        assert!(!sequencer.state().text_visible());

        sequencer.advance_to(ms(1400));
        assert!(sequencer.state().text_visible());
        assert!(!sequencer.state().logo_visible());

        sequencer.advance_to(ms(2000));
        assert!(sequencer.state().logo_visible());
    }

    #[test]
    fn reveals_are_strictly_ordered_in_time() {
        let mut sequencer = started();
        let mut badges_at = None;
        let mut text_at = None;
        let mut logo_at = None;

        for step in 1..=300 {
            let now = ms(step * 10);
            sequencer.advance_to(now);
            if badges_at.is_none() && sequencer.state().badges_visible() {
                badges_at = Some(now);
            }
            if text_at.is_none() && sequencer.state().text_visible() {
                text_at = Some(now);
            }
            if logo_at.is_none() && sequencer.state().logo_visible() {
                logo_at = Some(now);
            }
        }

        let badges_at = badges_at.expect("badges revealed");
        let text_at = text_at.expect("text revealed");
        let logo_at = logo_at.expect("logo revealed");
        assert!(badges_at < text_at);
        assert!(text_at < logo_at);
    }

    #[test]
    fn percent_ramp_reaches_cap_and_stops() {
        let mut sequencer = started();

        // 125 ticks of 0.8 every 30 ms land the ramp at the cap around
        // t = 3750 ms.
        sequencer.advance_to(ms(3750));
        assert!(sequencer.state().loading_percent() >= 99.99);

        sequencer.advance_to(ms(4000));
        assert_eq!(sequencer.state().loading_percent(), 100.0);
        assert!(sequencer.state().percent_done());

        // Idempotent terminal state: much later the value is unchanged.
        sequencer.advance_to(ms(60_000));
        assert_eq!(sequencer.state().loading_percent(), 100.0);
    }

    #[test]
    fn bar_ramp_reaches_cap_independently() {
        let mut sequencer = started();

        // Percent finishes first; the bar keeps ramping on its own cadence
        // (250 ticks of 0.4 every 25 ms, done around t = 6250 ms).
        sequencer.advance_to(ms(4000));
        assert_eq!(sequencer.state().loading_percent(), 100.0);
        assert!(sequencer.state().progress_bar_width() < 100.0);

        sequencer.advance_to(ms(6250));
        assert!(sequencer.state().progress_bar_width() >= 99.99);

        sequencer.advance_to(ms(6500));
        assert_eq!(sequencer.state().progress_bar_width(), 100.0);

        sequencer.advance_to(ms(60_000));
        assert_eq!(sequencer.state().progress_bar_width(), 100.0);
    }

    #[test]
    fn dot_rotation_cycles_and_never_stops() {
        let mut sequencer = started();

        sequencer.advance_to(ms(600));
        assert_eq!(sequencer.state().active_dot(), 1);
        sequencer.advance_to(ms(1200));
        assert_eq!(sequencer.state().active_dot(), 2);
        sequencer.advance_to(ms(1800));
        assert_eq!(sequencer.state().active_dot(), 0);

        // Still rotating long after both ramps have finished:
        // 100 periods of 600 ms, 100 % 3 == 1.
        sequencer.advance_to(ms(60_000));
        assert_eq!(sequencer.state().active_dot(), 1);
    }

    #[test]
    fn highlight_rotation_starts_after_first_period() {
        let mut sequencer = started();

        sequencer.advance_to(ms(1199));
        assert_eq!(sequencer.state().highlight(), None);

        sequencer.advance_to(ms(1200));
        assert_eq!(sequencer.state().highlight(), Some(0));

        sequencer.advance_to(ms(2400));
        assert_eq!(sequencer.state().highlight(), Some(1));

        // Five periods in, the last badge is emphasized; one more wraps.
        sequencer.advance_to(ms(6000));
        assert_eq!(sequencer.state().highlight(), Some(4));
        sequencer.advance_to(ms(7200));
        assert_eq!(sequencer.state().highlight(), Some(0));
    }

    #[test]
    fn ramps_are_monotone_and_in_range_under_irregular_sampling() {
        let mut sequencer = started();
        let mut last_percent = 0.0;
        let mut last_bar = 0.0;

        // Irregular step size so firings land between samples.
        for step in 1..=1200 {
            sequencer.advance_to(ms(step * 7));
            let state = sequencer.state();

            assert!(state.loading_percent() >= last_percent);
            assert!((0.0..=100.0).contains(&state.loading_percent()));
            assert!(state.progress_bar_width() >= last_bar);
            assert!((0.0..=100.0).contains(&state.progress_bar_width()));
            assert!(state.active_dot() < DOT_COUNT);
            if let Some(highlight) = state.highlight() {
                assert!(highlight < BADGE_COUNT);
            }

            last_percent = state.loading_percent();
            last_bar = state.progress_bar_width();
        }
    }

    #[test]
    fn catch_up_over_a_large_gap_is_exact() {
        let mut sequencer = started();
        sequencer.advance_to(ms(10_000));

        let state = sequencer.state();
        assert_eq!(state.loading_percent(), 100.0);
        assert_eq!(state.progress_bar_width(), 100.0);
        assert!(state.badges_visible());
        assert!(state.text_visible());
        assert!(state.logo_visible());
        // 16 dot periods fit in 10 s: 16 % 3 == 1.
        assert_eq!(state.active_dot(), 1);
        // 8 highlight periods fit in 10 s: the eighth tick lands on badge 2.
        assert_eq!(state.highlight(), Some(2));
        assert!(sequencer.is_finished());
    }

    #[test]
    fn early_teardown_freezes_state() {
        let mut sequencer = started();

        // Before any reveal fires: 16 percent ticks, 20 bar ticks.
        sequencer.advance_to(ms(500));
        assert!(!sequencer.state().badges_visible());
        let frozen = sequencer.state().clone();
        assert!(frozen.loading_percent() > 0.0);

        sequencer.stop();
        sequencer.advance_to(ms(5_000));
        assert_eq!(sequencer.state(), &frozen);

        // Sampling again later still observes the identical snapshot.
        sequencer.advance_to(ms(50_000));
        assert_eq!(sequencer.state(), &frozen);
    }

    #[test]
    fn stop_cancels_rotation_timers_too() {
        let mut sequencer = started();
        sequencer.advance_to(ms(7_000));
        assert!(sequencer.is_finished());

        let frozen = sequencer.state().clone();
        sequencer.stop();
        assert!(!sequencer.is_running());

        sequencer.advance_to(ms(8_000));
        assert_eq!(sequencer.state(), &frozen);
        sequencer.advance_to(ms(20_000));
        assert_eq!(sequencer.state(), &frozen);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut sequencer = started();
        sequencer.advance_to(ms(1_000));
        sequencer.stop();
        sequencer.stop();
        assert!(!sequencer.is_running());
    }

    #[test]
    fn double_start_does_not_double_the_mutation_rate() {
        let mut sequencer = started();
        sequencer.advance_to(ms(30));
        assert_eq!(sequencer.state().loading_percent(), 0.8);

        // A second start() must not re-arm timers.
        sequencer.start();
        sequencer.advance_to(ms(60));
        assert!((sequencer.state().loading_percent() - 1.6).abs() < 1e-4);

        // The reveal deadlines were not pushed out either.
        sequencer.advance_to(ms(600));
        assert!(sequencer.state().badges_visible());
    }

    #[test]
    fn start_after_stop_is_ignored() {
        let mut sequencer = started();
        sequencer.advance_to(ms(500));
        sequencer.stop();
        let frozen = sequencer.state().clone();

        sequencer.start();
        sequencer.advance_to(ms(5_000));
        assert!(!sequencer.is_running());
        assert_eq!(sequencer.state(), &frozen);
    }

    #[test]
    fn time_never_moves_backwards() {
        let mut sequencer = started();
        sequencer.advance_to(ms(1_000));
        let snapshot = sequencer.state().clone();

        sequencer.advance_to(ms(400));
        assert_eq!(sequencer.elapsed(), ms(1_000));
        assert_eq!(sequencer.state(), &snapshot);
    }

    #[test]
    fn simultaneous_deadlines_all_fire() {
        let mut sequencer = started();

        // At t = 600 ms the badge reveal and the first dot tick coincide.
        sequencer.advance_to(ms(600));
        assert!(sequencer.state().badges_visible());
        assert_eq!(sequencer.state().active_dot(), 1);
    }

    #[test]
    fn custom_schedule_is_honored() {
        let schedule = Schedule {
            reveal_badges: ms(10),
            reveal_text: ms(20),
            reveal_logo: ms(30),
            ..Schedule::default()
        };
        let mut sequencer = Sequencer::new(schedule);
        sequencer.start();

        sequencer.advance_to(ms(10));
        assert!(sequencer.state().badges_visible());
        assert!(!sequencer.state().text_visible());
        sequencer.advance_to(ms(30));
        assert!(sequencer.state().logo_visible());
    }

    #[test]
    fn is_finished_requires_both_ramps_and_the_logo() {
        let mut sequencer = started();
        sequencer.advance_to(ms(4_000));
        // Percent capped, logo revealed, bar still ramping.
        assert!(!sequencer.is_finished());

        sequencer.advance_to(ms(6_500));
        assert!(sequencer.is_finished());
    }
}
