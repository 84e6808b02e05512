// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, Screen};
use iced::{time, Subscription};
use std::time::Duration;

/// Driver tick period. Finer than the shortest schedule period (the
/// 25 ms bar ramp) so timer firings are delivered without visible
/// stutter; the sequencer catches up exactly regardless of tick jitter.
const TICK_PERIOD: Duration = Duration::from_millis(10);

/// Creates the periodic tick subscription that drives the sequencer.
///
/// Only the splash screen subscribes. Leaving the screen drops the
/// subscription, so no tick can ever reach a stopped sequencer.
pub fn create_tick_subscription(screen: Screen) -> Subscription<Message> {
    if screen == Screen::Splash {
        time::every(TICK_PERIOD).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
