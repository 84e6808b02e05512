// SPDX-License-Identifier: MPL-2.0
//! Timing schedule for the splash sequence.
//!
//! The reference schedule below reproduces the branded choreography:
//! three staged reveals, two progress ramps with deliberately different
//! cadences so they desynchronize visually, and two rotation timers.
//! All values can be overridden from the settings file, but a schedule
//! that reorders the reveals or zeroes a period is rejected.

use crate::config::Config;
use crate::error::{Error, Result};
use std::time::Duration;

pub const REVEAL_BADGES_DELAY_MS: u64 = 600;
pub const REVEAL_TEXT_DELAY_MS: u64 = 1400;
pub const REVEAL_LOGO_DELAY_MS: u64 = 2000;
pub const PERCENT_PERIOD_MS: u64 = 30;
pub const PERCENT_STEP: f32 = 0.8;
pub const BAR_PERIOD_MS: u64 = 25;
pub const BAR_STEP: f32 = 0.4;
pub const DOT_PERIOD_MS: u64 = 600;
pub const HIGHLIGHT_PERIOD_MS: u64 = 1200;

/// Delays and periods for every timer action of the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    /// One-shot delay before the badge row is revealed.
    pub reveal_badges: Duration,
    /// One-shot delay before the text block is revealed.
    pub reveal_text: Duration,
    /// One-shot delay before the logo is revealed.
    pub reveal_logo: Duration,
    /// Period of the percentage ramp.
    pub percent_period: Duration,
    /// Percentage added per ramp tick.
    pub percent_step: f32,
    /// Period of the bar-fill ramp.
    pub bar_period: Duration,
    /// Bar fill added per ramp tick.
    pub bar_step: f32,
    /// Period of the indicator dot rotation.
    pub dot_period: Duration,
    /// Period of the badge highlight rotation.
    pub highlight_period: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            reveal_badges: Duration::from_millis(REVEAL_BADGES_DELAY_MS),
            reveal_text: Duration::from_millis(REVEAL_TEXT_DELAY_MS),
            reveal_logo: Duration::from_millis(REVEAL_LOGO_DELAY_MS),
            percent_period: Duration::from_millis(PERCENT_PERIOD_MS),
            percent_step: PERCENT_STEP,
            bar_period: Duration::from_millis(BAR_PERIOD_MS),
            bar_step: BAR_STEP,
            dot_period: Duration::from_millis(DOT_PERIOD_MS),
            highlight_period: Duration::from_millis(HIGHLIGHT_PERIOD_MS),
        }
    }
}

impl Schedule {
    /// Builds a schedule from the settings file, applying any overrides to
    /// the reference values and validating the result.
    pub fn from_config(config: &Config) -> Result<Self> {
        let defaults = Self::default();
        let ms = Duration::from_millis;
        let schedule = Self {
            reveal_badges: config.reveal_badges_ms.map_or(defaults.reveal_badges, ms),
            reveal_text: config.reveal_text_ms.map_or(defaults.reveal_text, ms),
            reveal_logo: config.reveal_logo_ms.map_or(defaults.reveal_logo, ms),
            percent_period: config.percent_period_ms.map_or(defaults.percent_period, ms),
            percent_step: config.percent_step.unwrap_or(defaults.percent_step),
            bar_period: config.bar_period_ms.map_or(defaults.bar_period, ms),
            bar_step: config.bar_step.unwrap_or(defaults.bar_step),
            dot_period: config.dot_period_ms.map_or(defaults.dot_period, ms),
            highlight_period: config
                .highlight_period_ms
                .map_or(defaults.highlight_period, ms),
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Rejects schedules that would break the choreography: the three
    /// reveals must keep their relative order, repeating periods must be
    /// non-zero, and ramp steps must be positive so the ramps terminate.
    pub fn validate(&self) -> Result<()> {
        if self.reveal_badges >= self.reveal_text || self.reveal_text >= self.reveal_logo {
            return Err(Error::Schedule(
                "reveal delays must be strictly ordered: badges < text < logo".to_string(),
            ));
        }
        if self.percent_period.is_zero()
            || self.bar_period.is_zero()
            || self.dot_period.is_zero()
            || self.highlight_period.is_zero()
        {
            return Err(Error::Schedule(
                "repeating timer periods must be non-zero".to_string(),
            ));
        }
        if self.percent_step <= 0.0 || self.bar_step <= 0.0 {
            return Err(Error::Schedule("ramp steps must be positive".to_string()));
        }
        Ok(())
    }
}
