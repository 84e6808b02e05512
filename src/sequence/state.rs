// SPDX-License-Identifier: MPL-2.0
//! Observable state of the splash sequence.
//!
//! The presentation layer renders purely as a function of this state and
//! never writes it; all mutators are crate-internal and enforce the
//! clamp, latch, and modulo rules so no out-of-range value can ever be
//! observed.

/// Number of dots in the loading indicator.
pub const DOT_COUNT: usize = 3;

/// Number of badges in the badge row.
pub const BADGE_COUNT: usize = 5;

/// Upper bound for both progress ramps.
const PROGRESS_CAP: f32 = 100.0;

/// Snapshot of everything the splash screen renders from.
///
/// Created with its initial values at sequence start and only mutated by
/// the [`Sequencer`](super::Sequencer) while it is running.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashState {
    /// Simulated completion percentage, 0..=100.
    loading_percent: f32,
    /// Simulated bar fill percentage, 0..=100. Independent cadence from
    /// `loading_percent`.
    progress_bar_width: f32,
    /// Which of the indicator dots is currently highlighted.
    active_dot: usize,
    badges_visible: bool,
    text_visible: bool,
    logo_visible: bool,
    /// Which badge is emphasized. `None` until the first rotation tick.
    highlight: Option<usize>,
}

impl Default for SplashState {
    fn default() -> Self {
        Self {
            loading_percent: 0.0,
            progress_bar_width: 0.0,
            active_dot: 0,
            badges_visible: false,
            text_visible: false,
            logo_visible: false,
            highlight: None,
        }
    }
}

impl SplashState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw completion percentage, 0..=100.
    #[must_use]
    pub fn loading_percent(&self) -> f32 {
        self.loading_percent
    }

    /// Completion percentage rounded for display.
    #[must_use]
    pub fn display_percent(&self) -> u8 {
        self.loading_percent.round() as u8
    }

    /// Bar fill percentage, 0..=100.
    #[must_use]
    pub fn progress_bar_width(&self) -> f32 {
        self.progress_bar_width
    }

    /// Currently highlighted indicator dot, always in `0..DOT_COUNT`.
    #[must_use]
    pub fn active_dot(&self) -> usize {
        self.active_dot
    }

    #[must_use]
    pub fn badges_visible(&self) -> bool {
        self.badges_visible
    }

    #[must_use]
    pub fn text_visible(&self) -> bool {
        self.text_visible
    }

    #[must_use]
    pub fn logo_visible(&self) -> bool {
        self.logo_visible
    }

    /// Currently emphasized badge, `None` before the first rotation tick,
    /// then always `Some` of a value in `0..BADGE_COUNT`.
    #[must_use]
    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    /// Whether the percentage ramp has reached its cap.
    #[must_use]
    pub fn percent_done(&self) -> bool {
        self.loading_percent >= PROGRESS_CAP
    }

    /// Whether the bar-fill ramp has reached its cap.
    #[must_use]
    pub fn bar_done(&self) -> bool {
        self.progress_bar_width >= PROGRESS_CAP
    }

    // Mutators below are crate-internal: only the sequencer's timer
    // actions may write the state.

    /// Advances the percentage ramp by one step, pinning at the cap.
    pub(crate) fn advance_percent(&mut self, step: f32) {
        self.loading_percent = (self.loading_percent + step).min(PROGRESS_CAP);
    }

    /// Advances the bar-fill ramp by one step, pinning at the cap.
    pub(crate) fn advance_bar(&mut self, step: f32) {
        self.progress_bar_width = (self.progress_bar_width + step).min(PROGRESS_CAP);
    }

    /// One-way latch: once visible, badges stay visible.
    pub(crate) fn reveal_badges(&mut self) {
        self.badges_visible = true;
    }

    /// One-way latch: once visible, the text block stays visible.
    pub(crate) fn reveal_text(&mut self) {
        self.text_visible = true;
    }

    /// One-way latch: once visible, the logo stays visible.
    pub(crate) fn reveal_logo(&mut self) {
        self.logo_visible = true;
    }

    /// Rotates the active indicator dot.
    pub(crate) fn advance_dot(&mut self) {
        self.active_dot = (self.active_dot + 1) % DOT_COUNT;
    }

    /// Rotates the emphasized badge, starting at the first badge.
    pub(crate) fn advance_highlight(&mut self) {
        self.highlight = Some(match self.highlight {
            None => 0,
            Some(index) => (index + 1) % BADGE_COUNT,
        });
    }
}

const _: () = {
    assert!(DOT_COUNT > 0);
    assert!(BADGE_COUNT > 0);
};
