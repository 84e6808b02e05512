// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Each driver tick converts wall-clock time into simulated elapsed time
//! and feeds it to the sequencer. Once the terminating parts of the
//! choreography have played out, the splash holds briefly and then hands
//! over to the main content, stopping the sequencer exactly once before
//! the screen (and with it the tick subscription) goes away.

use super::{Message, Screen};
use crate::sequence::Sequencer;
use iced::Task;
use std::time::{Duration, Instant};

/// How long the completed splash stays on screen before handing over.
pub const HOLD_AFTER_COMPLETE: Duration = Duration::from_millis(600);

/// Mutable application state handed to the update functions.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub sequencer: &'a mut Sequencer,
    pub started_at: &'a mut Option<Instant>,
    pub finished_at: &'a mut Option<Duration>,
}

/// Main update entry point.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Tick(now) => handle_tick(ctx, now),
    }
}

fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    // A tick raced the screen switch; the sequencer is already stopped
    // and must not be advanced.
    if *ctx.screen != Screen::Splash || !ctx.sequencer.is_running() {
        return Task::none();
    }

    // The sequence clock starts at the first delivered tick.
    let started_at = *ctx.started_at.get_or_insert(now);
    let elapsed = now.saturating_duration_since(started_at);
    ctx.sequencer.advance_to(elapsed);

    if ctx.sequencer.is_finished() {
        let finished_at = *ctx.finished_at.get_or_insert(elapsed);
        if elapsed.saturating_sub(finished_at) >= HOLD_AFTER_COMPLETE {
            ctx.sequencer.stop();
            *ctx.screen = Screen::Home;
            log::debug!("splash sequence complete, entering main content");
        }
    }

    Task::none()
}
