// SPDX-License-Identifier: MPL-2.0
//! The splash sequence core: observable state, timing schedule, and the
//! sequencer that drives staged reveals, progress ramps, and indicator
//! rotation over simulated time.
//!
//! The sequencer is deterministic and wall-clock free; the application
//! shell converts real elapsed time into [`Sequencer::advance_to`] calls.

mod schedule;
mod sequencer;
mod state;

pub use schedule::Schedule;
pub use sequencer::Sequencer;
pub use state::{SplashState, BADGE_COUNT, DOT_COUNT};
